// src/shared/validation.rs
use serde::{Deserialize, Serialize};
use std::fmt;

pub const REQUIRED: &str = "This field is required.";
pub const MAX_NAME_LEN: usize = 150;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FieldError {
    #[schema(example = "exercises[0].name")]
    pub field: String,
    #[schema(example = "This field is required.")]
    pub message: String,
}

/// Field-level failures collected while checking one submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> &[FieldError] {
        &self.0
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{}", joined)
    }
}

impl std::error::Error for ValidationErrors {}

/// `prefix.field`, or just `field` at the top level.
pub fn field_path(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{prefix}.{field}")
    }
}

/// Trims and checks a required, length-bounded text field.
pub fn required_name(value: &str, field: &str, errors: &mut ValidationErrors) -> String {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        errors.add(field, REQUIRED);
    } else if trimmed.chars().count() > MAX_NAME_LEN {
        errors.add(
            field,
            format!("Ensure this value has at most {MAX_NAME_LEN} characters."),
        );
    }

    trimmed.to_string()
}
