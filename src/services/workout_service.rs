use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{CreateWorkoutSession, WorkoutEntry, WorkoutSession};

use super::errors::DataError;

#[derive(Clone)]
pub struct WorkoutService {
    db: PgPool,
}

impl WorkoutService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Workout history for one user joined with the exercise catalog,
    /// newest session first.
    pub async fn get_workout_history(&self, user_id: Uuid) -> Result<Vec<WorkoutEntry>, DataError> {
        let entries = sqlx::query_as::<_, WorkoutEntry>(
            "SELECT w.id, w.user_id, w.exercise_type_id, \
                    e.name AS exercise_name, e.category, \
                    w.duration_minutes, w.calories_burned, w.intensity, \
                    w.session_date, w.notes \
             FROM workout_sessions w \
             JOIN exercise_types e ON e.id = w.exercise_type_id \
             WHERE w.user_id = $1 \
             ORDER BY w.session_date DESC",
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await
        .map_err(DataError::on_read)?;

        Ok(entries)
    }

    pub async fn create_workout_session(
        &self,
        session: CreateWorkoutSession,
    ) -> Result<WorkoutSession, DataError> {
        let created = sqlx::query_as::<_, WorkoutSession>(
            "INSERT INTO workout_sessions \
             (user_id, exercise_type_id, duration_minutes, calories_burned, intensity, session_date, notes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING id, user_id, exercise_type_id, duration_minutes, calories_burned, intensity, session_date, notes",
        )
        .bind(session.user_id)
        .bind(session.exercise_type_id)
        .bind(session.duration_minutes)
        .bind(session.calories_burned)
        .bind(session.intensity)
        .bind(session.session_date)
        .bind(session.notes)
        .fetch_one(&self.db)
        .await
        .map_err(DataError::on_write)?;

        Ok(created)
    }
}
