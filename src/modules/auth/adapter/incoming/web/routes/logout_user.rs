use crate::api::schemas::SuccessResponse;
use crate::auth::adapter::incoming::web::extractors::auth::bearer_token;
use crate::modules::auth::application::use_cases::logout_user::LOGGED_OUT;
use crate::shared::api::{ApiResponse, MessageResponse};
use crate::AppState;
use actix_web::{post, web, HttpRequest, Responder};
use tracing::info;

/// Log out
///
/// Revokes the presented access token. Succeeds even without a usable token.
#[utoipa::path(
    post,
    path = "/accounts/logout/",
    tag = "accounts",
    security(("bearer_auth" = [])),
    responses(
        (
            status = 200,
            description = "Logged out",
            body = inline(SuccessResponse<MessageResponse>),
            example = json!({ "success": true, "data": { "message": "Logged out" } })
        ),
    )
)]
#[post("/accounts/logout/")]
pub async fn logout_user_handler(req: HttpRequest, data: web::Data<AppState>) -> impl Responder {
    match bearer_token(&req) {
        Some(token) => data.logout_user_use_case.execute(&token).await,
        None => info!("Logout without a bearer token"),
    }

    ApiResponse::success(MessageResponse::new(LOGGED_OUT))
}
