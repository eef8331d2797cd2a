use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{ProfileFields, User};
use crate::modules::auth::application::ports::outgoing::{
    AccountRemoval, HashError, PasswordHasher, UserQuery, UserQueryError, UserRepository,
    UserRepositoryError,
};

pub const TEST_PASSWORD: &str = "Str0ngPassw0rd";

#[derive(Default)]
struct State {
    users: Vec<User>,
    fail_next_create: Option<UserRepositoryError>,
    fail_cascade: Option<UserRepositoryError>,
    insert_before_update: Option<User>,
}

/// Shared user store backing both user ports in use-case tests.
#[derive(Clone, Default)]
pub struct InMemoryUsers {
    state: Arc<Mutex<State>>,
}

impl InMemoryUsers {
    pub fn with_user(user: User) -> Self {
        let users = Self::default();
        users.insert(user);
        users
    }

    pub fn insert(&self, user: User) {
        self.state.lock().unwrap().users.push(user);
    }

    pub fn get(&self, id: Uuid) -> Option<User> {
        self.state
            .lock()
            .unwrap()
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.state.lock().unwrap().users.len()
    }

    pub fn fail_next_create_with(&self, err: UserRepositoryError) {
        self.state.lock().unwrap().fail_next_create = Some(err);
    }

    /// Simulates a concurrent writer landing between the checks and the write.
    pub fn insert_before_next_update(&self, user: User) {
        self.state.lock().unwrap().insert_before_update = Some(user);
    }

    pub fn fail_cascade_with(&self, err: UserRepositoryError) {
        self.state.lock().unwrap().fail_cascade = Some(err);
    }

    fn find(&self, predicate: impl Fn(&User) -> bool) -> Option<User> {
        self.state
            .lock()
            .unwrap()
            .users
            .iter()
            .find(|u| predicate(u))
            .cloned()
    }

    fn modify<T>(
        &self,
        id: Uuid,
        change: impl FnOnce(&mut User) -> T,
    ) -> Result<T, UserRepositoryError> {
        let mut state = self.state.lock().unwrap();
        let user = state
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(UserRepositoryError::UserNotFound)?;
        Ok(change(user))
    }
}

pub fn sample_user(username: &str, activated: bool) -> User {
    let now = Utc::now();
    User {
        id: Uuid::new_v4(),
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password_hash: format!("hashed:{TEST_PASSWORD}"),
        first_name: String::new(),
        last_name: String::new(),
        is_active: activated,
        is_activated: activated,
        send_messages: true,
        created_at: now,
        updated_at: now,
    }
}

#[async_trait]
impl UserQuery for InMemoryUsers {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserQueryError> {
        Ok(self.find(|u| u.id == user_id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        let email = email.trim().to_lowercase();
        Ok(self.find(|u| u.email == email))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError> {
        Ok(self.find(|u| u.username == username))
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn create_user(&self, user: User) -> Result<User, UserRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(err) = state.fail_next_create.take() {
            return Err(err);
        }
        state.users.push(user.clone());
        Ok(user)
    }

    async fn activate_user(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
        self.modify(user_id, |u| {
            u.is_active = true;
            u.is_activated = true;
        })
    }

    async fn update_profile(
        &self,
        user_id: Uuid,
        fields: ProfileFields,
    ) -> Result<User, UserRepositoryError> {
        {
            let mut state = self.state.lock().unwrap();
            if let Some(user) = state.insert_before_update.take() {
                state.users.push(user);
            }
            let clash = state.users.iter().any(|u| {
                u.id != user_id && (u.username == fields.username || u.email == fields.email)
            });
            if clash {
                return Err(UserRepositoryError::UserAlreadyExists);
            }
        }
        self.modify(user_id, |u| {
            u.username = fields.username;
            u.email = fields.email;
            u.first_name = fields.first_name;
            u.last_name = fields.last_name;
            u.send_messages = fields.send_messages;
            u.clone()
        })
    }

    async fn update_password(
        &self,
        user_id: Uuid,
        new_password_hash: String,
    ) -> Result<(), UserRepositoryError> {
        self.modify(user_id, |u| u.password_hash = new_password_hash)
    }

    async fn delete_user_cascade(
        &self,
        user_id: Uuid,
    ) -> Result<AccountRemoval, UserRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if let Some(err) = state.fail_cascade.take() {
            return Err(err);
        }
        let before = state.users.len();
        state.users.retain(|u| u.id != user_id);
        if state.users.len() == before {
            return Err(UserRepositoryError::UserNotFound);
        }
        Ok(AccountRemoval::default())
    }
}

/// Deterministic stand-in for the real hashers.
#[derive(Clone, Copy, Default)]
pub struct PlainHasher;

#[async_trait]
impl PasswordHasher for PlainHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        Ok(hash == format!("hashed:{password}"))
    }
}
