use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::Expr, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::workout::adapter::outgoing::sea_orm_entity::{
    exercises, set_descriptions, workouts,
};
use crate::modules::workout::application::domain::entities::{
    Exercise, ExerciseWithSets, SetDescription, Workout, WorkoutDetail,
};
use crate::modules::workout::application::ports::outgoing::workout_query::{
    WorkoutListFilter, WorkoutQuery, WorkoutQueryError,
};

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone)]
pub struct WorkoutQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl WorkoutQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn owned(owner: UserId, filter: &WorkoutListFilter) -> Select<workouts::Entity> {
        let owner_uuid: Uuid = owner.into();
        let mut query = workouts::Entity::find().filter(workouts::Column::UserId.eq(owner_uuid));

        if let Some(keyword) = &filter.keyword {
            let pattern = format!("%{}%", escape_like(keyword));
            query = query.filter(
                Condition::any()
                    .add(Expr::col(workouts::Column::Name).ilike(&pattern))
                    .add(Expr::col(workouts::Column::Comment).ilike(&pattern)),
            );
        }

        query
    }
}

#[async_trait]
impl WorkoutQuery for WorkoutQueryPostgres {
    async fn count_owned(
        &self,
        owner: UserId,
        filter: &WorkoutListFilter,
    ) -> Result<u64, WorkoutQueryError> {
        Self::owned(owner, filter)
            .count(&*self.db)
            .await
            .map_err(map_db_err)
    }

    async fn list_owned(
        &self,
        owner: UserId,
        filter: &WorkoutListFilter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Workout>, WorkoutQueryError> {
        let rows = Self::owned(owner, filter)
            .order_by_desc(workouts::Column::CreatedAt)
            .order_by_desc(workouts::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(model_to_workout).collect())
    }

    async fn get_detail(
        &self,
        owner: UserId,
        workout_id: Uuid,
    ) -> Result<WorkoutDetail, WorkoutQueryError> {
        let owner_uuid: Uuid = owner.into();

        let workout = workouts::Entity::find_by_id(workout_id)
            .filter(workouts::Column::UserId.eq(owner_uuid))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(WorkoutQueryError::NotFound)?;

        let exercises: Vec<Exercise> = exercises::Entity::find()
            .filter(exercises::Column::WorkoutId.eq(workout_id))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(model_to_exercise)
            .collect();

        let exercise_ids: Vec<Uuid> = exercises.iter().map(|e| e.id).collect();
        let sets = load_sets(&*self.db, exercise_ids).await.map_err(map_db_err)?;

        Ok(WorkoutDetail::assemble(
            model_to_workout(workout),
            exercises,
            sets,
        ))
    }

    async fn get_exercise(
        &self,
        owner: UserId,
        workout_id: Uuid,
        exercise_id: Uuid,
    ) -> Result<ExerciseWithSets, WorkoutQueryError> {
        let exercise = find_owned_exercise(&*self.db, owner, workout_id, exercise_id)
            .await
            .map_err(map_db_err)?
            .ok_or(WorkoutQueryError::NotFound)?;

        let sets = load_sets(&*self.db, vec![exercise.id])
            .await
            .map_err(map_db_err)?;

        Ok(ExerciseWithSets::new(model_to_exercise(exercise), sets))
    }

    async fn list_all_workouts(&self) -> Result<Vec<Workout>, WorkoutQueryError> {
        let rows = workouts::Entity::find()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(model_to_workout).collect())
    }

    async fn find_exercise_record(&self, pk: Uuid) -> Result<Exercise, WorkoutQueryError> {
        exercises::Entity::find_by_id(pk)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_exercise)
            .ok_or(WorkoutQueryError::NotFound)
    }

    async fn find_set_records(&self, id: Uuid) -> Result<Vec<SetDescription>, WorkoutQueryError> {
        let rows = set_descriptions::Entity::find()
            .filter(set_descriptions::Column::Id.eq(id))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(model_to_set).collect())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn map_db_err(e: DbErr) -> WorkoutQueryError {
    WorkoutQueryError::DatabaseError(e.to_string())
}

/// Escapes ILIKE wildcards so the keyword matches literally.
fn escape_like(keyword: &str) -> String {
    let mut escaped = String::with_capacity(keyword.len());
    for c in keyword.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// An exercise of `workout_id`, provided that workout belongs to `owner`.
pub(super) async fn find_owned_exercise<C: ConnectionTrait>(
    db: &C,
    owner: UserId,
    workout_id: Uuid,
    exercise_id: Uuid,
) -> Result<Option<exercises::Model>, DbErr> {
    let owner_uuid: Uuid = owner.into();

    let owns_workout = workouts::Entity::find_by_id(workout_id)
        .filter(workouts::Column::UserId.eq(owner_uuid))
        .one(db)
        .await?
        .is_some();

    if !owns_workout {
        return Ok(None);
    }

    exercises::Entity::find_by_id(exercise_id)
        .filter(exercises::Column::WorkoutId.eq(workout_id))
        .one(db)
        .await
}

pub(super) async fn load_sets<C: ConnectionTrait>(
    db: &C,
    exercise_ids: Vec<Uuid>,
) -> Result<Vec<SetDescription>, DbErr> {
    if exercise_ids.is_empty() {
        return Ok(Vec::new());
    }

    let rows = set_descriptions::Entity::find()
        .filter(set_descriptions::Column::ExerciseId.is_in(exercise_ids))
        .order_by_asc(set_descriptions::Column::Number)
        .all(db)
        .await?;

    Ok(rows.into_iter().map(model_to_set).collect())
}

pub(super) fn model_to_workout(model: workouts::Model) -> Workout {
    Workout {
        id: model.id,
        owner: UserId::from(model.user_id),
        name: model.name,
        created_at: model.created_at.into(),
        comment: model.comment,
    }
}

pub(super) fn model_to_exercise(model: exercises::Model) -> Exercise {
    Exercise {
        id: model.id,
        workout_id: model.workout_id,
        name: model.name,
    }
}

pub(super) fn model_to_set(model: set_descriptions::Model) -> SetDescription {
    SetDescription {
        id: model.id,
        exercise_id: model.exercise_id,
        number: model.number,
        weight: model.weight,
        repeats: model.repeats,
    }
}
