use std::sync::Arc;

use actix_web::web;

use crate::auth::application::orchestrator::user_registration::UserRegistrationOrchestrator;
use crate::auth::application::use_cases::{
    activate_user::IActivateUserUseCase, change_password::IChangePasswordUseCase,
    delete_account::IDeleteAccountUseCase, fetch_profile::IFetchProfileUseCase,
    login_user::ILoginUserUseCase, logout_user::ILogoutUseCase,
    update_profile::IUpdateProfileUseCase,
};
use crate::modules::workout::application::ports::incoming::use_cases::{
    BrowseRecordsUseCase, CreateExerciseUseCase, CreateWorkoutUseCase, DeleteExerciseUseCase,
    DeleteWorkoutUseCase, GetWorkoutDetailUseCase, ListWorkoutsUseCase, ReplaceSetsUseCase,
    UpdateWorkoutUseCase,
};
use crate::modules::workout::application::WorkoutUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    register_user: Arc<UserRegistrationOrchestrator>,
    activate_user: Arc<dyn IActivateUserUseCase + Send + Sync>,
    login_user: Arc<dyn ILoginUserUseCase + Send + Sync>,
    logout_user: Arc<dyn ILogoutUseCase + Send + Sync>,
    fetch_profile: Arc<dyn IFetchProfileUseCase + Send + Sync>,
    update_profile: Arc<dyn IUpdateProfileUseCase + Send + Sync>,
    change_password: Arc<dyn IChangePasswordUseCase + Send + Sync>,
    delete_account: Arc<dyn IDeleteAccountUseCase + Send + Sync>,
    workout: WorkoutUseCases,
}

pub fn default_test_user_registration_orchestrator() -> Arc<UserRegistrationOrchestrator> {
    Arc::new(UserRegistrationOrchestrator::new(
        Arc::new(StubCreateUserUseCase),
        Arc::new(StubUserEmailNotifier),
    ))
}

pub fn default_test_workout_use_cases() -> WorkoutUseCases {
    WorkoutUseCases {
        list: Arc::new(StubListWorkoutsUseCase),
        get_detail: Arc::new(StubGetWorkoutDetailUseCase),
        create: Arc::new(StubCreateWorkoutUseCase),
        update: Arc::new(StubUpdateWorkoutUseCase),
        delete: Arc::new(StubDeleteWorkoutUseCase),
        create_exercise: Arc::new(StubCreateExerciseUseCase),
        replace_sets: Arc::new(StubReplaceSetsUseCase),
        delete_exercise: Arc::new(StubDeleteExerciseUseCase),
        browse: Arc::new(StubBrowseRecordsUseCase),
    }
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_user: default_test_user_registration_orchestrator(),
            activate_user: Arc::new(StubActivateUserUseCase),
            login_user: Arc::new(StubLoginUserUseCase),
            logout_user: Arc::new(StubLogoutUserUseCase),
            fetch_profile: Arc::new(StubFetchProfileUseCase),
            update_profile: Arc::new(StubUpdateProfileUseCase),
            change_password: Arc::new(StubChangePasswordUseCase),
            delete_account: Arc::new(StubDeleteAccountUseCase),
            workout: default_test_workout_use_cases(),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register_user_orchestrator(
        mut self,
        orchestrator: Arc<UserRegistrationOrchestrator>,
    ) -> Self {
        self.register_user = orchestrator;
        self
    }

    pub fn with_activate_user(mut self, uc: impl IActivateUserUseCase + 'static) -> Self {
        self.activate_user = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + 'static) -> Self {
        self.login_user = Arc::new(uc);
        self
    }

    pub fn with_logout_user(mut self, uc: impl ILogoutUseCase + 'static) -> Self {
        self.logout_user = Arc::new(uc);
        self
    }

    pub fn with_fetch_profile(mut self, uc: impl IFetchProfileUseCase + 'static) -> Self {
        self.fetch_profile = Arc::new(uc);
        self
    }

    pub fn with_update_profile(mut self, uc: impl IUpdateProfileUseCase + 'static) -> Self {
        self.update_profile = Arc::new(uc);
        self
    }

    pub fn with_change_password(mut self, uc: impl IChangePasswordUseCase + 'static) -> Self {
        self.change_password = Arc::new(uc);
        self
    }

    pub fn with_delete_account(mut self, uc: impl IDeleteAccountUseCase + 'static) -> Self {
        self.delete_account = Arc::new(uc);
        self
    }

    // ── workouts ──────────────────────────────────────────

    pub fn with_list_workouts(mut self, uc: impl ListWorkoutsUseCase + 'static) -> Self {
        self.workout.list = Arc::new(uc);
        self
    }

    pub fn with_get_workout_detail(mut self, uc: impl GetWorkoutDetailUseCase + 'static) -> Self {
        self.workout.get_detail = Arc::new(uc);
        self
    }

    pub fn with_create_workout(mut self, uc: impl CreateWorkoutUseCase + 'static) -> Self {
        self.workout.create = Arc::new(uc);
        self
    }

    pub fn with_update_workout(mut self, uc: impl UpdateWorkoutUseCase + 'static) -> Self {
        self.workout.update = Arc::new(uc);
        self
    }

    pub fn with_delete_workout(mut self, uc: impl DeleteWorkoutUseCase + 'static) -> Self {
        self.workout.delete = Arc::new(uc);
        self
    }

    pub fn with_create_exercise(mut self, uc: impl CreateExerciseUseCase + 'static) -> Self {
        self.workout.create_exercise = Arc::new(uc);
        self
    }

    pub fn with_replace_sets(mut self, uc: impl ReplaceSetsUseCase + 'static) -> Self {
        self.workout.replace_sets = Arc::new(uc);
        self
    }

    pub fn with_delete_exercise(mut self, uc: impl DeleteExerciseUseCase + 'static) -> Self {
        self.workout.delete_exercise = Arc::new(uc);
        self
    }

    pub fn with_browse_records(mut self, uc: impl BrowseRecordsUseCase + 'static) -> Self {
        self.workout.browse = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            register_user_orchestrator: self.register_user,
            activate_user_use_case: self.activate_user,
            login_user_use_case: self.login_user,
            logout_user_use_case: self.logout_user,
            fetch_profile_use_case: self.fetch_profile,
            update_profile_use_case: self.update_profile,
            change_password_use_case: self.change_password,
            delete_account_use_case: self.delete_account,
            workout: self.workout,
        })
    }
}
