use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{ProfileFields, UserId};
use crate::auth::application::ports::outgoing::AccountRemoval;
use crate::auth::application::use_cases::{
    activate_user::{ActivateUserError, ActivationOutcome, IActivateUserUseCase},
    change_password::{ChangePasswordError, ChangePasswordInput, IChangePasswordUseCase},
    create_user::{CreateUserError, CreateUserInput, CreateUserOutput, ICreateUserUseCase},
    delete_account::{DeleteAccountError, IDeleteAccountUseCase},
    fetch_profile::{FetchProfileError, IFetchProfileUseCase, UserProfile},
    login_user::{ILoginUserUseCase, LoginError, LoginRequest, LoginUserResponse},
    logout_user::ILogoutUseCase,
    update_profile::{IUpdateProfileUseCase, UpdateProfileError},
};
use crate::email::application::ports::outgoing::user_email_notifier::{
    UserEmailNotificationError, UserEmailNotifier,
};
use crate::modules::workout::application::domain::entities::{
    Exercise, ExerciseWithSets, SetDescription, Workout, WorkoutDetail, WorkoutInput,
};
use crate::modules::workout::application::ports::incoming::use_cases::{
    BrowseRecordsError, BrowseRecordsUseCase, CreateExerciseError, CreateExerciseInput,
    CreateExerciseUseCase, CreateWorkoutError, CreateWorkoutInput, CreateWorkoutUseCase,
    DeleteExerciseError, DeleteExerciseUseCase, DeleteWorkoutError, DeleteWorkoutUseCase,
    GetWorkoutDetailError, GetWorkoutDetailUseCase, ListWorkoutsError, ListWorkoutsUseCase,
    ReplaceSetsError, ReplaceSetsInput, ReplaceSetsUseCase, UpdateWorkoutError,
    UpdateWorkoutUseCase, WorkoutPage,
};

// ============================================================================
// E-mail
// ============================================================================

#[derive(Default, Clone)]
pub struct StubUserEmailNotifier;

#[async_trait]
impl UserEmailNotifier for StubUserEmailNotifier {
    async fn send_activation_email(
        &self,
        _user: CreateUserOutput,
    ) -> Result<(), UserEmailNotificationError> {
        Ok(())
    }
}

#[derive(Default, Clone)]
pub struct FailingUserEmailNotifier;

#[async_trait]
impl UserEmailNotifier for FailingUserEmailNotifier {
    async fn send_activation_email(
        &self,
        _user: CreateUserOutput,
    ) -> Result<(), UserEmailNotificationError> {
        Err(UserEmailNotificationError::EmailSendingFailed(
            "smtp unreachable".to_string(),
        ))
    }
}

// ============================================================================
// Accounts
// ============================================================================

#[derive(Default, Clone)]
pub struct StubCreateUserUseCase;

#[async_trait]
impl ICreateUserUseCase for StubCreateUserUseCase {
    async fn execute(&self, _input: CreateUserInput) -> Result<CreateUserOutput, CreateUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubActivateUserUseCase;

#[async_trait]
impl IActivateUserUseCase for StubActivateUserUseCase {
    async fn execute(&self, _token: &str) -> Result<ActivationOutcome, ActivateUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLogoutUserUseCase;

#[async_trait]
impl ILogoutUseCase for StubLogoutUserUseCase {
    async fn execute(&self, _access_token: &str) {}
}

#[derive(Default, Clone)]
pub struct StubFetchProfileUseCase;

#[async_trait]
impl IFetchProfileUseCase for StubFetchProfileUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<UserProfile, FetchProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateProfileUseCase;

#[async_trait]
impl IUpdateProfileUseCase for StubUpdateProfileUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _fields: ProfileFields,
    ) -> Result<UserProfile, UpdateProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubChangePasswordUseCase;

#[async_trait]
impl IChangePasswordUseCase for StubChangePasswordUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _input: ChangePasswordInput,
    ) -> Result<(), ChangePasswordError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteAccountUseCase;

#[async_trait]
impl IDeleteAccountUseCase for StubDeleteAccountUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _access_token: &str,
    ) -> Result<AccountRemoval, DeleteAccountError> {
        unimplemented!("Not used in this test")
    }
}

// ============================================================================
// Workouts
// ============================================================================

#[derive(Default, Clone)]
pub struct StubListWorkoutsUseCase;

#[async_trait]
impl ListWorkoutsUseCase for StubListWorkoutsUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _keyword: Option<String>,
        _page: Option<String>,
    ) -> Result<WorkoutPage, ListWorkoutsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetWorkoutDetailUseCase;

#[async_trait]
impl GetWorkoutDetailUseCase for StubGetWorkoutDetailUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _workout_id: Uuid,
    ) -> Result<WorkoutDetail, GetWorkoutDetailError> {
        Err(GetWorkoutDetailError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubCreateWorkoutUseCase;

#[async_trait]
impl CreateWorkoutUseCase for StubCreateWorkoutUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _input: CreateWorkoutInput,
    ) -> Result<WorkoutDetail, CreateWorkoutError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateWorkoutUseCase;

#[async_trait]
impl UpdateWorkoutUseCase for StubUpdateWorkoutUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _workout_id: Uuid,
        _input: WorkoutInput,
    ) -> Result<Workout, UpdateWorkoutError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteWorkoutUseCase;

#[async_trait]
impl DeleteWorkoutUseCase for StubDeleteWorkoutUseCase {
    async fn execute(&self, _owner: UserId, _workout_id: Uuid) -> Result<(), DeleteWorkoutError> {
        Err(DeleteWorkoutError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubCreateExerciseUseCase;

#[async_trait]
impl CreateExerciseUseCase for StubCreateExerciseUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _workout_id: Uuid,
        _input: CreateExerciseInput,
    ) -> Result<ExerciseWithSets, CreateExerciseError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubReplaceSetsUseCase;

#[async_trait]
impl ReplaceSetsUseCase for StubReplaceSetsUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _workout_id: Uuid,
        _exercise_id: Uuid,
        _input: ReplaceSetsInput,
    ) -> Result<ExerciseWithSets, ReplaceSetsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteExerciseUseCase;

#[async_trait]
impl DeleteExerciseUseCase for StubDeleteExerciseUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _workout_id: Uuid,
        _exercise_id: Uuid,
    ) -> Result<(), DeleteExerciseError> {
        Err(DeleteExerciseError::NotFound)
    }
}

/// Empty store: no workouts, every lookup misses.
#[derive(Default, Clone)]
pub struct StubBrowseRecordsUseCase;

#[async_trait]
impl BrowseRecordsUseCase for StubBrowseRecordsUseCase {
    async fn all_workouts(&self) -> Result<Vec<Workout>, BrowseRecordsError> {
        Ok(Vec::new())
    }

    async fn exercise(&self, _pk: Uuid) -> Result<Exercise, BrowseRecordsError> {
        Err(BrowseRecordsError::NotFound)
    }

    async fn sets(&self, _id: Uuid) -> Result<Vec<SetDescription>, BrowseRecordsError> {
        Ok(Vec::new())
    }
}
