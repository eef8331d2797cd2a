pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::email;
pub use modules::workout;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::{Argon2Hasher, BcryptHasher};
use crate::auth::adapter::outgoing::token_repository_redis::RedisTokenRepository;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::orchestrator::user_registration::UserRegistrationOrchestrator;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider, TokenRepository};
use crate::auth::application::use_cases::{
    activate_user::{ActivateUserUseCase, IActivateUserUseCase},
    change_password::{ChangePasswordUseCase, IChangePasswordUseCase},
    create_user::{CreateUserUseCase, ICreateUserUseCase},
    delete_account::{DeleteAccountUseCase, IDeleteAccountUseCase},
    fetch_profile::{FetchProfileUseCase, IFetchProfileUseCase},
    login_user::{ILoginUserUseCase, LoginUserUseCase},
    logout_user::{ILogoutUseCase, LogoutUseCase},
    update_profile::{IUpdateProfileUseCase, UpdateProfileUseCase},
};
use crate::email::adapter::outgoing::smtp_sender::SmtpEmailSender;
use crate::email::application::ports::outgoing::user_email_notifier::UserEmailNotifier;
use crate::email::application::services::UserEmailService;
use crate::shared::api::custom_json_config;
use crate::shared::config::{AppConfig, PasswordHasherKind};
use crate::workout::adapter::outgoing::{WorkoutQueryPostgres, WorkoutRepositoryPostgres};
use crate::workout::application::service::{
    BrowseRecordsService, CreateExerciseService, CreateWorkoutService, DeleteExerciseService,
    DeleteWorkoutService, GetWorkoutDetailService, ListWorkoutsService, ReplaceSetsService,
    UpdateWorkoutService,
};
use crate::workout::application::WorkoutUseCases;

use actix_web::{web, App, HttpServer};
use deadpool_redis::{Config, Runtime};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub register_user_orchestrator: Arc<UserRegistrationOrchestrator>,
    pub activate_user_use_case: Arc<dyn IActivateUserUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub logout_user_use_case: Arc<dyn ILogoutUseCase + Send + Sync>,
    pub fetch_profile_use_case: Arc<dyn IFetchProfileUseCase + Send + Sync>,
    pub update_profile_use_case: Arc<dyn IUpdateProfileUseCase + Send + Sync>,
    pub change_password_use_case: Arc<dyn IChangePasswordUseCase + Send + Sync>,
    pub delete_account_use_case: Arc<dyn IDeleteAccountUseCase + Send + Sync>,
    pub workout: WorkoutUseCases,
}

fn startup_error(context: &str, e: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::other(format!("{context}: {e}"))
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env().map_err(|e| startup_error("Configuration", e))?;
    let jwt_config = JwtConfig::from_env().map_err(|e| startup_error("JWT configuration", e))?;

    let smtp_sender = SmtpEmailSender::from_config(&config.smtp, &config.email_from)
        .map_err(|e| startup_error("SMTP transport", e))?;

    let server_url = config.bind_address();
    info!(environment = %config.environment, address = %server_url, "Configuration loaded");

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(50)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .map_err(|e| startup_error("Database connection", e))?;
    let db_arc = Arc::new(conn);

    // Redis connection
    let redis_pool = Config::from_url(&config.redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .map_err(|e| startup_error("Redis pool", e))?;
    let redis_arc = Arc::new(redis_pool);

    // Adapters
    let jwt_service = JwtTokenService::new(jwt_config);
    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service.clone());

    let password_hasher: Arc<dyn PasswordHasher + Send + Sync> = match config.password_hasher {
        PasswordHasherKind::Argon2 => Arc::new(
            Argon2Hasher::from_lookup(|key| std::env::var(key).ok())
                .map_err(|e| startup_error("Argon2 parameters", e))?,
        ),
        PasswordHasherKind::Bcrypt => Arc::new(BcryptHasher::default()),
    };

    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let redis_token_repo = RedisTokenRepository::new(Arc::clone(&redis_arc));
    let token_repository_arc: Arc<dyn TokenRepository + Send + Sync> =
        Arc::new(redis_token_repo.clone());

    let workout_query = WorkoutQueryPostgres::new(Arc::clone(&db_arc));
    let workout_repo = WorkoutRepositoryPostgres::new(Arc::clone(&db_arc));

    // Account lifecycle
    let user_email_service =
        UserEmailService::new(jwt_service.clone(), smtp_sender, config.site_url.clone());

    let create_user_uc_arc: Arc<dyn ICreateUserUseCase + Send + Sync> =
        Arc::new(CreateUserUseCase::new(
            user_query.clone(),
            user_repo.clone(),
            Arc::clone(&password_hasher),
        ));
    let email_notifier_arc: Arc<dyn UserEmailNotifier + Send + Sync> = Arc::new(user_email_service);
    let register_user_orchestrator =
        UserRegistrationOrchestrator::new(create_user_uc_arc, email_notifier_arc);

    let logout_user_use_case: Arc<dyn ILogoutUseCase + Send + Sync> = Arc::new(LogoutUseCase::new(
        redis_token_repo,
        Arc::clone(&token_provider_arc),
    ));

    let state = AppState {
        register_user_orchestrator: Arc::new(register_user_orchestrator),
        activate_user_use_case: Arc::new(ActivateUserUseCase::new(
            user_query.clone(),
            user_repo.clone(),
            Arc::clone(&token_provider_arc),
        )),
        login_user_use_case: Arc::new(LoginUserUseCase::new(
            user_query.clone(),
            Arc::clone(&password_hasher),
            Arc::clone(&token_provider_arc),
        )),
        logout_user_use_case: Arc::clone(&logout_user_use_case),
        fetch_profile_use_case: Arc::new(FetchProfileUseCase::new(user_query.clone())),
        update_profile_use_case: Arc::new(UpdateProfileUseCase::new(
            user_query.clone(),
            user_repo.clone(),
        )),
        change_password_use_case: Arc::new(ChangePasswordUseCase::new(
            user_query,
            user_repo.clone(),
            Arc::clone(&password_hasher),
        )),
        delete_account_use_case: Arc::new(DeleteAccountUseCase::new(
            user_repo,
            logout_user_use_case,
        )),
        workout: WorkoutUseCases {
            list: Arc::new(ListWorkoutsService::new(
                workout_query.clone(),
                u64::from(config.page_size),
            )),
            get_detail: Arc::new(GetWorkoutDetailService::new(workout_query.clone())),
            create: Arc::new(CreateWorkoutService::new(workout_repo.clone())),
            update: Arc::new(UpdateWorkoutService::new(workout_repo.clone())),
            delete: Arc::new(DeleteWorkoutService::new(workout_repo.clone())),
            create_exercise: Arc::new(CreateExerciseService::new(workout_repo.clone())),
            replace_sets: Arc::new(ReplaceSetsService::new(workout_repo.clone())),
            delete_exercise: Arc::new(DeleteExerciseService::new(workout_repo)),
            browse: Arc::new(BrowseRecordsService::new(workout_query)),
        },
    };

    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&token_repository_arc)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(web::Data::new(Arc::clone(&redis_arc)))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::auth::adapter::incoming::web::routes as accounts;
    use crate::workout::adapter::incoming::web::routes as workouts;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Accounts
    cfg.service(accounts::register_user_handler);
    cfg.service(accounts::activate_user_handler);
    cfg.service(accounts::login_user_handler);
    cfg.service(accounts::logout_user_handler);
    cfg.service(accounts::fetch_profile_handler);
    cfg.service(accounts::update_profile_handler);
    cfg.service(accounts::change_password_handler);
    cfg.service(accounts::delete_account_handler);
    // Workouts
    cfg.service(workouts::list_workouts_handler);
    cfg.service(workouts::create_workout_handler);
    cfg.service(workouts::get_workout_handler);
    cfg.service(workouts::update_workout_handler);
    cfg.service(workouts::delete_workout_handler);
    cfg.service(workouts::create_exercise_handler);
    cfg.service(workouts::replace_sets_handler);
    cfg.service(workouts::delete_exercise_handler);
    // Read-only records
    cfg.service(
        web::scope("/api")
            .service(workouts::list_workout_records_handler)
            .service(workouts::exercise_record_handler)
            .service(workouts::set_records_handler),
    );
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
