use axum::{extract::State, response::Json};
use sqlx::PgPool;

use crate::models::ExerciseType;
use crate::services::ExerciseService;

use super::error::ApiError;

/// Full exercise catalog, the selection source for the workout entry form.
pub async fn list_exercises(State(db): State<PgPool>) -> Result<Json<Vec<ExerciseType>>, ApiError> {
    let types = ExerciseService::new(db).list_exercise_types().await?;
    Ok(Json(types))
}
