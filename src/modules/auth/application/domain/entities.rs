use chrono::{DateTime, Utc};
use email_address::EmailAddress;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;
use uuid::Uuid;

use crate::shared::validation::{ValidationErrors, MAX_NAME_LEN, REQUIRED};

pub const MIN_PASSWORD_LEN: usize = 8;

//
// ──────────────────────────────────────────────────────────
// Identity
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<UserId> for Uuid {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    /// Set together with `is_activated` once the signed link is followed.
    pub is_active: bool,
    pub is_activated: bool,
    pub send_messages: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Profile fields (shared by registration and profile change)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileFields {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub send_messages: bool,
}

impl ProfileFields {
    /// Normalizes the fields and records every rule they break.
    pub fn validated(self, errors: &mut ValidationErrors) -> Self {
        let username = self.username.trim().to_string();
        if username.is_empty() {
            errors.add("username", REQUIRED);
        } else if username.chars().count() > MAX_NAME_LEN {
            errors.add(
                "username",
                format!("Ensure this value has at most {MAX_NAME_LEN} characters."),
            );
        } else if !username_pattern().is_match(&username) {
            errors.add(
                "username",
                "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters.",
            );
        }

        let email = self.email.trim().to_lowercase();
        if email.is_empty() {
            errors.add("email", REQUIRED);
        } else if !EmailAddress::is_valid(&email) {
            errors.add("email", "Enter a valid email address.");
        }

        let first_name = bounded_optional(&self.first_name, "first_name", errors);
        let last_name = bounded_optional(&self.last_name, "last_name", errors);

        Self {
            username,
            email,
            first_name,
            last_name,
            send_messages: self.send_messages,
        }
    }
}

fn bounded_optional(value: &str, field: &str, errors: &mut ValidationErrors) -> String {
    let trimmed = value.trim();
    if trimmed.chars().count() > MAX_NAME_LEN {
        errors.add(
            field,
            format!("Ensure this value has at most {MAX_NAME_LEN} characters."),
        );
    }
    trimmed.to_string()
}

fn username_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[\w.@+\-]+$").expect("username pattern is valid"))
}

/// Checks a new password and its confirmation, reporting under the given field names.
pub fn validate_new_password(
    password: &str,
    confirmation: &str,
    password_field: &str,
    confirmation_field: &str,
    errors: &mut ValidationErrors,
) {
    if password.is_empty() {
        errors.add(password_field, REQUIRED);
        return;
    }

    if password.chars().count() < MIN_PASSWORD_LEN {
        errors.add(
            password_field,
            format!(
                "This password is too short. It must contain at least {MIN_PASSWORD_LEN} characters."
            ),
        );
    }

    if password.chars().all(|c| c.is_ascii_digit()) {
        errors.add(password_field, "This password is entirely numeric.");
    }

    if password != confirmation {
        errors.add(confirmation_field, "The two password fields didn't match.");
    }
}
