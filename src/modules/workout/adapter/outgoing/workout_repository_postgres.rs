use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, Set, SqlErr, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::workout::adapter::outgoing::sea_orm_entity::{
    exercises, set_descriptions, workouts,
};
use crate::modules::workout::application::domain::entities::{
    Exercise, ExerciseWithSets, SetDescription, SetFields, Workout, WorkoutDetail, WorkoutFields,
};
use crate::modules::workout::application::ports::outgoing::workout_repository::{
    WorkoutRepository, WorkoutRepositoryError,
};

use super::workout_query_postgres::{
    find_owned_exercise, load_sets, model_to_exercise, model_to_workout,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct WorkoutRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl WorkoutRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn insert_workout_tree(
        txn: &DatabaseTransaction,
        workout: Workout,
        exercises: Vec<Exercise>,
    ) -> Result<WorkoutDetail, WorkoutRepositoryError> {
        let inserted = workouts::ActiveModel {
            id: Set(workout.id),
            user_id: Set(workout.owner.into()),
            name: Set(workout.name),
            created_at: Set(workout.created_at.into()),
            comment: Set(workout.comment),
        }
        .insert(txn)
        .await
        .map_err(map_db_err)?;

        if !exercises.is_empty() {
            exercises::Entity::insert_many(exercises.iter().map(exercise_active_model))
                .exec_without_returning(txn)
                .await
                .map_err(map_db_err)?;
        }

        Ok(WorkoutDetail::assemble(
            model_to_workout(inserted),
            exercises,
            Vec::new(),
        ))
    }

    async fn insert_exercise_tree(
        txn: &DatabaseTransaction,
        owner: UserId,
        exercise: Exercise,
        sets: Vec<SetDescription>,
    ) -> Result<ExerciseWithSets, WorkoutRepositoryError> {
        let owner_uuid: Uuid = owner.into();

        let owns_workout = workouts::Entity::find_by_id(exercise.workout_id)
            .filter(workouts::Column::UserId.eq(owner_uuid))
            .one(txn)
            .await
            .map_err(map_db_err)?
            .is_some();

        if !owns_workout {
            return Err(WorkoutRepositoryError::NotFound);
        }

        let inserted = exercise_active_model(&exercise)
            .insert(txn)
            .await
            .map_err(map_db_err)?;

        insert_sets(txn, &sets).await?;

        Ok(ExerciseWithSets::new(model_to_exercise(inserted), sets))
    }

    async fn swap_sets(
        txn: &DatabaseTransaction,
        owner: UserId,
        workout_id: Uuid,
        exercise_id: Uuid,
        fields: Vec<SetFields>,
    ) -> Result<ExerciseWithSets, WorkoutRepositoryError> {
        let exercise = find_owned_exercise(txn, owner, workout_id, exercise_id)
            .await
            .map_err(map_db_err)?
            .ok_or(WorkoutRepositoryError::NotFound)?;

        set_descriptions::Entity::delete_many()
            .filter(set_descriptions::Column::ExerciseId.eq(exercise_id))
            .exec(txn)
            .await
            .map_err(map_db_err)?;

        let sets: Vec<SetDescription> = fields
            .into_iter()
            .map(|f| SetDescription::create(exercise_id, f))
            .collect();

        insert_sets(txn, &sets).await?;

        Ok(ExerciseWithSets::new(model_to_exercise(exercise), sets))
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn map_db_err(e: DbErr) -> WorkoutRepositoryError {
    WorkoutRepositoryError::DatabaseError(e.to_string())
}

/// Deletes can still hit the RESTRICT foreign keys when children were
/// added concurrently.
fn map_delete_err(e: DbErr) -> WorkoutRepositoryError {
    if let Some(SqlErr::ForeignKeyConstraintViolation(msg)) = e.sql_err() {
        return WorkoutRepositoryError::Protected(msg);
    }
    map_db_err(e)
}

fn exercise_active_model(exercise: &Exercise) -> exercises::ActiveModel {
    exercises::ActiveModel {
        id: Set(exercise.id),
        workout_id: Set(exercise.workout_id),
        name: Set(exercise.name.clone()),
    }
}

async fn insert_sets(
    txn: &DatabaseTransaction,
    sets: &[SetDescription],
) -> Result<(), WorkoutRepositoryError> {
    if sets.is_empty() {
        return Ok(());
    }

    let rows = sets.iter().map(|s| set_descriptions::ActiveModel {
        id: Set(s.id),
        exercise_id: Set(s.exercise_id),
        number: Set(s.number),
        weight: Set(s.weight),
        repeats: Set(s.repeats),
    });

    set_descriptions::Entity::insert_many(rows)
        .exec_without_returning(txn)
        .await
        .map_err(map_db_err)?;

    Ok(())
}

#[async_trait]
impl WorkoutRepository for WorkoutRepositoryPostgres {
    async fn create_with_exercises(
        &self,
        workout: Workout,
        exercises: Vec<Exercise>,
    ) -> Result<WorkoutDetail, WorkoutRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        match Self::insert_workout_tree(&txn, workout, exercises).await {
            Ok(detail) => {
                txn.commit().await.map_err(map_db_err)?;
                Ok(detail)
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(e)
            }
        }
    }

    async fn update_workout(
        &self,
        owner: UserId,
        workout_id: Uuid,
        fields: WorkoutFields,
    ) -> Result<Workout, WorkoutRepositoryError> {
        let owner_uuid: Uuid = owner.into();

        let existing = workouts::Entity::find_by_id(workout_id)
            .filter(workouts::Column::UserId.eq(owner_uuid))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(WorkoutRepositoryError::NotFound)?;

        let mut active: workouts::ActiveModel = existing.into();
        active.name = Set(fields.name);
        active.created_at = Set(fields.created_at.into());
        active.comment = Set(fields.comment);

        let updated = active.update(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_workout(updated))
    }

    async fn delete_workout(
        &self,
        owner: UserId,
        workout_id: Uuid,
    ) -> Result<(), WorkoutRepositoryError> {
        let owner_uuid: Uuid = owner.into();

        workouts::Entity::find_by_id(workout_id)
            .filter(workouts::Column::UserId.eq(owner_uuid))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(WorkoutRepositoryError::NotFound)?;

        let children = exercises::Entity::find()
            .filter(exercises::Column::WorkoutId.eq(workout_id))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        if children > 0 {
            return Err(WorkoutRepositoryError::Protected(format!(
                "{children} exercise(s) reference this workout"
            )));
        }

        workouts::Entity::delete_by_id(workout_id)
            .exec(&*self.db)
            .await
            .map_err(map_delete_err)?;

        Ok(())
    }

    async fn create_exercise_with_sets(
        &self,
        owner: UserId,
        exercise: Exercise,
        sets: Vec<SetDescription>,
    ) -> Result<ExerciseWithSets, WorkoutRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        match Self::insert_exercise_tree(&txn, owner, exercise, sets).await {
            Ok(created) => {
                txn.commit().await.map_err(map_db_err)?;
                Ok(created)
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(e)
            }
        }
    }

    async fn replace_sets(
        &self,
        owner: UserId,
        workout_id: Uuid,
        exercise_id: Uuid,
        sets: Vec<SetFields>,
    ) -> Result<ExerciseWithSets, WorkoutRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        match Self::swap_sets(&txn, owner, workout_id, exercise_id, sets).await {
            Ok(replaced) => {
                txn.commit().await.map_err(map_db_err)?;
                Ok(replaced)
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(e)
            }
        }
    }

    async fn delete_exercise(
        &self,
        owner: UserId,
        workout_id: Uuid,
        exercise_id: Uuid,
    ) -> Result<(), WorkoutRepositoryError> {
        find_owned_exercise(&*self.db, owner, workout_id, exercise_id)
            .await
            .map_err(map_db_err)?
            .ok_or(WorkoutRepositoryError::NotFound)?;

        let sets = load_sets(&*self.db, vec![exercise_id])
            .await
            .map_err(map_db_err)?;

        if !sets.is_empty() {
            return Err(WorkoutRepositoryError::Protected(format!(
                "{} set(s) reference this exercise",
                sets.len()
            )));
        }

        exercises::Entity::delete_by_id(exercise_id)
            .exec(&*self.db)
            .await
            .map_err(map_delete_err)?;

        Ok(())
    }
}
