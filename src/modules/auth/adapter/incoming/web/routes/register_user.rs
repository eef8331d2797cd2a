use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::orchestrator::user_registration::UserRegistrationOutput;
use crate::auth::application::use_cases::create_user::{CreateUserError, CreateUserInput};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

fn default_send_messages() -> bool {
    true
}

/// Request body for account registration
#[derive(Deserialize, ToSchema)]
pub struct RegisterUserRequest {
    /// Letters, digits and @.+-_ only, at most 150 characters
    #[schema(example = "alice")]
    #[serde(default)]
    pub username: String,

    #[schema(example = "alice@example.com")]
    #[serde(default)]
    pub email: String,

    /// At least 8 characters, not entirely numeric
    #[schema(example = "Str0ngPassw0rd")]
    #[serde(default)]
    pub password1: String,

    /// Must repeat `password1`
    #[schema(example = "Str0ngPassw0rd")]
    #[serde(default)]
    pub password2: String,

    #[schema(example = "Alice")]
    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    /// Notification preference; defaults to true
    #[serde(default = "default_send_messages")]
    pub send_messages: bool,
}

/// Register a new account
///
/// Creates an inactive account and mails an activation link to it.
#[utoipa::path(
    post,
    path = "/accounts/register/",
    tag = "accounts",
    request_body = RegisterUserRequest,
    responses(
        (
            status = 201,
            description = "Account created; activation pending",
            body = inline(SuccessResponse<UserRegistrationOutput>),
            example = json!({
                "success": true,
                "data": {
                    "user": {
                        "user_id": "123e4567-e89b-12d3-a456-426614174000",
                        "username": "alice",
                        "email": "alice@example.com",
                        "first_name": "Alice",
                        "last_name": "",
                        "send_messages": true,
                        "is_activated": false
                    },
                    "activation_email_sent": true,
                    "message": "Registration complete. Check your e-mail for the activation link."
                }
            })
        ),
        (
            status = 400,
            description = "Field validation failed",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": "Submitted data is invalid",
                    "fields": [
                        { "field": "username", "message": "A user with that username already exists." }
                    ]
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/accounts/register/")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    info!(username = %req.username, "User registration attempt");

    let input = CreateUserInput {
        username: req.username,
        email: req.email,
        password1: req.password1,
        password2: req.password2,
        first_name: req.first_name,
        last_name: req.last_name,
        send_messages: req.send_messages,
    };

    match data.register_user_orchestrator.register_user(input).await {
        Ok(output) => {
            info!(
                user_id = %output.user.user_id,
                username = %output.user.username,
                activation_email_sent = output.activation_email_sent,
                "User registered"
            );
            ApiResponse::created(output)
        }

        Err(CreateUserError::Validation(errors)) => {
            warn!(error = %errors, "Registration rejected");
            ApiResponse::validation_error(&errors)
        }

        Err(e) => {
            error!(error = %e, "User registration failed");
            ApiResponse::internal_error()
        }
    }
}
