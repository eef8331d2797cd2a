use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::login_user::{LoginError, LoginRequest, LoginUserResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Login request from client
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "alice")]
    #[serde(default)]
    pub username: String,

    #[schema(example = "Str0ngPassw0rd")]
    #[serde(default)]
    pub password: String,
}

/// Log in
///
/// Exchanges username and password for a bearer access token.
#[utoipa::path(
    post,
    path = "/accounts/login/",
    tag = "accounts",
    request_body = LoginRequestDto,
    responses(
        (
            status = 200,
            description = "Login successful",
            body = inline(SuccessResponse<LoginUserResponse>),
        ),
        (status = 400, description = "Missing username or password", body = ErrorResponse),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_CREDENTIALS",
                    "message": "Please enter a correct username and password"
                }
            })
        ),
        (
            status = 403,
            description = "Account not activated yet",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "ACCOUNT_NOT_ACTIVATED",
                    "message": "This account has not been activated yet"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/accounts/login/")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    info!(username = %dto.username, "Login attempt");

    let request = match LoginRequest::new(dto.username, dto.password) {
        Ok(request) => request,
        Err(errors) => return ApiResponse::validation_error(&errors),
    };

    match data.login_user_use_case.execute(request).await {
        Ok(response) => ApiResponse::success(response),

        Err(LoginError::Validation(errors)) => ApiResponse::validation_error(&errors),

        Err(e @ LoginError::InvalidCredentials) => {
            ApiResponse::unauthorized("INVALID_CREDENTIALS", &e.to_string())
        }

        Err(e @ LoginError::NotActivated) => {
            warn!("Login refused for inactive account");
            ApiResponse::forbidden("ACCOUNT_NOT_ACTIVATED", &e.to_string())
        }

        Err(e) => {
            error!(error = %e, "Login failed");
            ApiResponse::internal_error()
        }
    }
}
