use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::shared::validation::{field_path, required_name, ValidationErrors, REQUIRED};

pub const SMALLINT_MAX: i64 = i16::MAX as i64;

pub const WORKOUT_ADDED: &str = "Workout added successfully";
pub const WORKOUT_DELETED: &str = "Workout deleted";
pub const EXERCISE_DELETED: &str = "Exercise deleted";

//
// ──────────────────────────────────────────────────────────
// Stored entities
// ──────────────────────────────────────────────────────────
//

/// A dated training session owned by one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Workout {
    pub id: Uuid,
    #[schema(value_type = String, format = Uuid)]
    pub owner: UserId,
    #[schema(example = "Leg day")]
    pub name: String,
    /// Supplied by the user so sessions can be backdated.
    pub created_at: DateTime<Utc>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Exercise {
    pub id: Uuid,
    pub workout_id: Uuid,
    #[schema(example = "Back squat")]
    pub name: String,
}

/// One performed set of an exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SetDescription {
    pub id: Uuid,
    pub exercise_id: Uuid,
    #[schema(example = 1)]
    pub number: i16,
    #[schema(example = 102.5)]
    pub weight: f64,
    #[schema(example = 5)]
    pub repeats: i16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ExerciseWithSets {
    pub id: Uuid,
    pub workout_id: Uuid,
    pub name: String,
    /// Ordered by set number.
    pub sets: Vec<SetDescription>,
}

impl ExerciseWithSets {
    pub fn new(exercise: Exercise, mut sets: Vec<SetDescription>) -> Self {
        sets.sort_by_key(|s| s.number);
        Self {
            id: exercise.id,
            workout_id: exercise.workout_id,
            name: exercise.name,
            sets,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WorkoutDetail {
    pub workout: Workout,
    pub exercises: Vec<ExerciseWithSets>,
}

impl WorkoutDetail {
    /// Groups flat exercise and set rows under the workout. Sets whose
    /// exercise is not among `exercises` are dropped.
    pub fn assemble(
        workout: Workout,
        exercises: Vec<Exercise>,
        sets: Vec<SetDescription>,
    ) -> Self {
        let mut sets = sets;
        let exercises = exercises
            .into_iter()
            .map(|exercise| {
                let (own, rest): (Vec<_>, Vec<_>) =
                    sets.drain(..).partition(|s| s.exercise_id == exercise.id);
                sets = rest;
                ExerciseWithSets::new(exercise, own)
            })
            .collect();

        Self { workout, exercises }
    }
}

//
// ──────────────────────────────────────────────────────────
// Submitted fields
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct WorkoutInput {
    #[serde(default)]
    #[schema(example = "Leg day")]
    pub name: String,
    /// RFC 3339 timestamp
    #[schema(example = "2026-03-10T18:30:00Z")]
    pub created_at: Option<String>,
    pub comment: Option<String>,
}

/// Workout fields that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutFields {
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub comment: Option<String>,
}

impl WorkoutInput {
    pub fn validate(self, errors: &mut ValidationErrors) -> Option<WorkoutFields> {
        let name = required_name(&self.name, "name", errors);

        let created_at = match self.created_at.as_deref().map(str::trim) {
            None | Some("") => {
                errors.add("created_at", REQUIRED);
                None
            }
            Some(raw) => match DateTime::parse_from_rfc3339(raw) {
                Ok(ts) => Some(ts.with_timezone(&Utc)),
                Err(_) => {
                    errors.add("created_at", "Enter a valid date/time.");
                    None
                }
            },
        };

        let comment = self.comment.filter(|c| !c.trim().is_empty());

        if errors.has_field("name") {
            return None;
        }

        Some(WorkoutFields {
            name,
            created_at: created_at?,
            comment,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ExerciseInput {
    #[serde(default)]
    #[schema(example = "Back squat")]
    pub name: String,
}

impl ExerciseInput {
    /// Validated, trimmed name; failures are reported under `prefix.name`.
    pub fn validate(self, prefix: &str, errors: &mut ValidationErrors) -> Option<String> {
        let field = field_path(prefix, "name");
        let name = required_name(&self.name, &field, errors);
        (!errors.has_field(&field)).then_some(name)
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct SetInput {
    #[schema(example = 1)]
    pub number: Option<i64>,
    #[schema(example = 102.5)]
    pub weight: Option<f64>,
    /// Defaults to 0
    #[schema(example = 5)]
    pub repeats: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SetFields {
    pub number: i16,
    pub weight: f64,
    pub repeats: i16,
}

impl SetInput {
    pub fn validate(self, prefix: &str, errors: &mut ValidationErrors) -> Option<SetFields> {
        let number = match self.number {
            Some(n) => small_positive(n, &field_path(prefix, "number"), errors),
            None => {
                errors.add(field_path(prefix, "number"), REQUIRED);
                None
            }
        };

        let weight = match self.weight {
            Some(w) if w.is_finite() => Some(w),
            Some(_) => {
                errors.add(field_path(prefix, "weight"), "Enter a number.");
                None
            }
            None => {
                errors.add(field_path(prefix, "weight"), REQUIRED);
                None
            }
        };

        let repeats = small_positive(
            self.repeats.unwrap_or(0),
            &field_path(prefix, "repeats"),
            errors,
        );

        Some(SetFields {
            number: number?,
            weight: weight?,
            repeats: repeats?,
        })
    }
}

fn small_positive(value: i64, field: &str, errors: &mut ValidationErrors) -> Option<i16> {
    if value < 0 {
        errors.add(field, "Ensure this value is greater than or equal to 0.");
        return None;
    }
    if value > SMALLINT_MAX {
        errors.add(
            field,
            format!("Ensure this value is less than or equal to {SMALLINT_MAX}."),
        );
        return None;
    }
    i16::try_from(value).ok()
}

/// Validates every set row, indexing failures as `sets[i].field`.
pub fn validate_sets(rows: Vec<SetInput>, errors: &mut ValidationErrors) -> Vec<SetFields> {
    rows.into_iter()
        .enumerate()
        .filter_map(|(i, row)| row.validate(&format!("sets[{i}]"), errors))
        .collect()
}

//
// ──────────────────────────────────────────────────────────
// Constructors for new rows
// ──────────────────────────────────────────────────────────
//

impl Workout {
    /// New workout owned by `owner`, whatever the client submitted.
    pub fn create(owner: UserId, fields: WorkoutFields) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner,
            name: fields.name,
            created_at: fields.created_at,
            comment: fields.comment,
        }
    }
}

impl Exercise {
    pub fn create(workout_id: Uuid, name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            workout_id,
            name,
        }
    }
}

impl SetDescription {
    pub fn create(exercise_id: Uuid, fields: SetFields) -> Self {
        Self {
            id: Uuid::new_v4(),
            exercise_id,
            number: fields.number,
            weight: fields.weight,
            repeats: fields.repeats,
        }
    }
}
