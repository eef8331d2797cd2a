use crate::api::schemas::{ErrorDetail, ErrorResponse};
use crate::shared::api::MessageResponse;
use crate::shared::validation::FieldError;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::modules::workout::adapter::incoming::web::routes::{
    ExerciseRecord, SetDescriptionRecord, WorkoutAddedResponse, WorkoutRecord,
};
use crate::modules::workout::application::domain::entities::{
    Exercise, ExerciseWithSets, SetDescription, Workout, WorkoutDetail,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Workout Tracker API",
        version = "1.0.0",
        description = "Accounts, owner-scoped workout journal and read-only record API",
    ),
    paths(
        // Accounts
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::activate_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::logout_user_handler,
        crate::auth::adapter::incoming::web::routes::fetch_profile_handler,
        crate::auth::adapter::incoming::web::routes::update_profile_handler,
        crate::auth::adapter::incoming::web::routes::change_password_handler,
        crate::auth::adapter::incoming::web::routes::delete_account_handler,

        // Workouts
        crate::workout::adapter::incoming::web::routes::list_workouts_handler,
        crate::workout::adapter::incoming::web::routes::create_workout_handler,
        crate::workout::adapter::incoming::web::routes::get_workout_handler,
        crate::workout::adapter::incoming::web::routes::update_workout_handler,
        crate::workout::adapter::incoming::web::routes::delete_workout_handler,
        crate::workout::adapter::incoming::web::routes::create_exercise_handler,
        crate::workout::adapter::incoming::web::routes::replace_sets_handler,
        crate::workout::adapter::incoming::web::routes::delete_exercise_handler,

        // Records
        crate::workout::adapter::incoming::web::routes::list_workout_records_handler,
        crate::workout::adapter::incoming::web::routes::exercise_record_handler,
        crate::workout::adapter::incoming::web::routes::set_records_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,
            FieldError,
            MessageResponse,
            Workout,
            WorkoutDetail,
            Exercise,
            ExerciseWithSets,
            SetDescription,
            WorkoutAddedResponse,
            WorkoutRecord,
            ExerciseRecord,
            SetDescriptionRecord,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "accounts", description = "Registration, activation, login and profile"),
        (name = "workouts", description = "The caller's workouts, exercises and sets"),
        (name = "records", description = "Unauthenticated read-only record API"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token from /accounts/login/"))
                        .build(),
                ),
            )
        }
    }
}
