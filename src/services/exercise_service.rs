use sqlx::PgPool;

use crate::models::ExerciseType;

use super::errors::DataError;

#[derive(Clone)]
pub struct ExerciseService {
    db: PgPool,
}

impl ExerciseService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn list_exercise_types(&self) -> Result<Vec<ExerciseType>, DataError> {
        let types = sqlx::query_as::<_, ExerciseType>(
            "SELECT id, name, category, calories_per_minute FROM exercise_types ORDER BY name ASC",
        )
        .fetch_all(&self.db)
        .await
        .map_err(DataError::on_read)?;

        Ok(types)
    }
}
