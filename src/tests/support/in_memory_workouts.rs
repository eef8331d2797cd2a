use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::workout::application::domain::entities::{
    Exercise, ExerciseWithSets, SetDescription, SetFields, Workout, WorkoutDetail, WorkoutFields,
};
use crate::modules::workout::application::ports::outgoing::{
    WorkoutListFilter, WorkoutQuery, WorkoutQueryError, WorkoutRepository,
    WorkoutRepositoryError,
};

#[derive(Default)]
struct State {
    workouts: Vec<Workout>,
    exercises: Vec<Exercise>,
    sets: Vec<SetDescription>,
    fail_writes: Option<WorkoutRepositoryError>,
}

/// Workout store backing both workout ports in use-case tests. Writes
/// are all-or-nothing like the database transactions they stand in for.
#[derive(Clone, Default)]
pub struct InMemoryWorkouts {
    state: Arc<Mutex<State>>,
}

pub fn sample_workout(owner: UserId, name: &str, minutes_ago: i64) -> Workout {
    Workout {
        id: Uuid::new_v4(),
        owner,
        name: name.to_string(),
        created_at: Utc::now() - Duration::minutes(minutes_ago),
        comment: None,
    }
}

pub fn workout_fields(name: &str, created_at: DateTime<Utc>) -> WorkoutFields {
    WorkoutFields {
        name: name.to_string(),
        created_at,
        comment: None,
    }
}

impl InMemoryWorkouts {
    pub fn insert_workout(&self, workout: Workout) {
        self.state.lock().unwrap().workouts.push(workout);
    }

    pub fn insert_exercise(&self, exercise: Exercise) {
        self.state.lock().unwrap().exercises.push(exercise);
    }

    pub fn insert_set(&self, set: SetDescription) {
        self.state.lock().unwrap().sets.push(set);
    }

    pub fn workout_count(&self) -> usize {
        self.state.lock().unwrap().workouts.len()
    }

    pub fn exercise_count(&self) -> usize {
        self.state.lock().unwrap().exercises.len()
    }

    pub fn set_count(&self) -> usize {
        self.state.lock().unwrap().sets.len()
    }

    pub fn workout(&self, id: Uuid) -> Option<Workout> {
        self.state
            .lock()
            .unwrap()
            .workouts
            .iter()
            .find(|w| w.id == id)
            .cloned()
    }

    /// Every following write fails with `err` and stores nothing.
    pub fn fail_writes_with(&self, err: WorkoutRepositoryError) {
        self.state.lock().unwrap().fail_writes = Some(err);
    }

    fn check_writes(state: &State) -> Result<(), WorkoutRepositoryError> {
        match &state.fail_writes {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn owns(state: &State, owner: UserId, workout_id: Uuid) -> bool {
        state
            .workouts
            .iter()
            .any(|w| w.id == workout_id && w.owner == owner)
    }

    fn owned_exercise(
        state: &State,
        owner: UserId,
        workout_id: Uuid,
        exercise_id: Uuid,
    ) -> Option<Exercise> {
        if !Self::owns(state, owner, workout_id) {
            return None;
        }
        state
            .exercises
            .iter()
            .find(|e| e.id == exercise_id && e.workout_id == workout_id)
            .cloned()
    }

    fn with_sets(state: &State, exercise: Exercise) -> ExerciseWithSets {
        let sets = state
            .sets
            .iter()
            .filter(|s| s.exercise_id == exercise.id)
            .cloned()
            .collect();
        ExerciseWithSets::new(exercise, sets)
    }

    fn filtered(state: &State, owner: UserId, filter: &WorkoutListFilter) -> Vec<Workout> {
        let needle = filter.keyword.as_ref().map(|k| k.to_lowercase());
        let mut workouts: Vec<Workout> = state
            .workouts
            .iter()
            .filter(|w| w.owner == owner)
            .filter(|w| match &needle {
                None => true,
                Some(k) => {
                    w.name.to_lowercase().contains(k)
                        || w
                            .comment
                            .as_ref()
                            .is_some_and(|c| c.to_lowercase().contains(k))
                }
            })
            .cloned()
            .collect();
        workouts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        workouts
    }
}

#[async_trait]
impl WorkoutQuery for InMemoryWorkouts {
    async fn count_owned(
        &self,
        owner: UserId,
        filter: &WorkoutListFilter,
    ) -> Result<u64, WorkoutQueryError> {
        let state = self.state.lock().unwrap();
        Ok(Self::filtered(&state, owner, filter).len() as u64)
    }

    async fn list_owned(
        &self,
        owner: UserId,
        filter: &WorkoutListFilter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Workout>, WorkoutQueryError> {
        let state = self.state.lock().unwrap();
        Ok(Self::filtered(&state, owner, filter)
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn get_detail(
        &self,
        owner: UserId,
        workout_id: Uuid,
    ) -> Result<WorkoutDetail, WorkoutQueryError> {
        let state = self.state.lock().unwrap();
        let workout = state
            .workouts
            .iter()
            .find(|w| w.id == workout_id && w.owner == owner)
            .cloned()
            .ok_or(WorkoutQueryError::NotFound)?;
        let exercises: Vec<Exercise> = state
            .exercises
            .iter()
            .filter(|e| e.workout_id == workout_id)
            .cloned()
            .collect();
        Ok(WorkoutDetail::assemble(workout, exercises, state.sets.clone()))
    }

    async fn get_exercise(
        &self,
        owner: UserId,
        workout_id: Uuid,
        exercise_id: Uuid,
    ) -> Result<ExerciseWithSets, WorkoutQueryError> {
        let state = self.state.lock().unwrap();
        let exercise = Self::owned_exercise(&state, owner, workout_id, exercise_id)
            .ok_or(WorkoutQueryError::NotFound)?;
        Ok(Self::with_sets(&state, exercise))
    }

    async fn list_all_workouts(&self) -> Result<Vec<Workout>, WorkoutQueryError> {
        Ok(self.state.lock().unwrap().workouts.clone())
    }

    async fn find_exercise_record(&self, pk: Uuid) -> Result<Exercise, WorkoutQueryError> {
        self.state
            .lock()
            .unwrap()
            .exercises
            .iter()
            .find(|e| e.id == pk)
            .cloned()
            .ok_or(WorkoutQueryError::NotFound)
    }

    async fn find_set_records(&self, id: Uuid) -> Result<Vec<SetDescription>, WorkoutQueryError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .sets
            .iter()
            .filter(|s| s.id == id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl WorkoutRepository for InMemoryWorkouts {
    async fn create_with_exercises(
        &self,
        workout: Workout,
        exercises: Vec<Exercise>,
    ) -> Result<WorkoutDetail, WorkoutRepositoryError> {
        let mut state = self.state.lock().unwrap();
        Self::check_writes(&state)?;
        state.workouts.push(workout.clone());
        state.exercises.extend(exercises.iter().cloned());
        Ok(WorkoutDetail::assemble(workout, exercises, Vec::new()))
    }

    async fn update_workout(
        &self,
        owner: UserId,
        workout_id: Uuid,
        fields: WorkoutFields,
    ) -> Result<Workout, WorkoutRepositoryError> {
        let mut state = self.state.lock().unwrap();
        Self::check_writes(&state)?;
        let workout = state
            .workouts
            .iter_mut()
            .find(|w| w.id == workout_id && w.owner == owner)
            .ok_or(WorkoutRepositoryError::NotFound)?;
        workout.name = fields.name;
        workout.created_at = fields.created_at;
        workout.comment = fields.comment;
        Ok(workout.clone())
    }

    async fn delete_workout(
        &self,
        owner: UserId,
        workout_id: Uuid,
    ) -> Result<(), WorkoutRepositoryError> {
        let mut state = self.state.lock().unwrap();
        Self::check_writes(&state)?;
        if !Self::owns(&state, owner, workout_id) {
            return Err(WorkoutRepositoryError::NotFound);
        }
        if state.exercises.iter().any(|e| e.workout_id == workout_id) {
            return Err(WorkoutRepositoryError::Protected(
                "exercises reference this workout".to_string(),
            ));
        }
        state.workouts.retain(|w| w.id != workout_id);
        Ok(())
    }

    async fn create_exercise_with_sets(
        &self,
        owner: UserId,
        exercise: Exercise,
        sets: Vec<SetDescription>,
    ) -> Result<ExerciseWithSets, WorkoutRepositoryError> {
        let mut state = self.state.lock().unwrap();
        Self::check_writes(&state)?;
        if !Self::owns(&state, owner, exercise.workout_id) {
            return Err(WorkoutRepositoryError::NotFound);
        }
        state.exercises.push(exercise.clone());
        state.sets.extend(sets.iter().cloned());
        Ok(ExerciseWithSets::new(exercise, sets))
    }

    async fn replace_sets(
        &self,
        owner: UserId,
        workout_id: Uuid,
        exercise_id: Uuid,
        sets: Vec<SetFields>,
    ) -> Result<ExerciseWithSets, WorkoutRepositoryError> {
        let mut state = self.state.lock().unwrap();
        Self::check_writes(&state)?;
        let exercise = Self::owned_exercise(&state, owner, workout_id, exercise_id)
            .ok_or(WorkoutRepositoryError::NotFound)?;
        state.sets.retain(|s| s.exercise_id != exercise_id);
        state.sets.extend(
            sets.into_iter()
                .map(|fields| SetDescription::create(exercise_id, fields)),
        );
        Ok(Self::with_sets(&state, exercise))
    }

    async fn delete_exercise(
        &self,
        owner: UserId,
        workout_id: Uuid,
        exercise_id: Uuid,
    ) -> Result<(), WorkoutRepositoryError> {
        let mut state = self.state.lock().unwrap();
        Self::check_writes(&state)?;
        if Self::owned_exercise(&state, owner, workout_id, exercise_id).is_none() {
            return Err(WorkoutRepositoryError::NotFound);
        }
        if state.sets.iter().any(|s| s.exercise_id == exercise_id) {
            return Err(WorkoutRepositoryError::Protected(
                "sets reference this exercise".to_string(),
            ));
        }
        state.exercises.retain(|e| e.id != exercise_id);
        Ok(())
    }
}
