use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::metrics;
use crate::models::{CreateWorkoutSession, Intensity, WorkoutEntry, WorkoutSession};
use crate::services::WorkoutService;

use super::charts::{CategorySlice, TrendPoint};
use super::error::ApiError;
use super::users::require_user;

#[derive(Debug, Deserialize)]
pub struct WorkoutEntryRequest {
    pub exercise_type_id: Uuid,
    pub duration_minutes: i32,
    pub calories_burned: i32,
    pub intensity: Intensity,
    pub session_date: NaiveDate,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct WorkoutLogResponse {
    pub history: Vec<WorkoutEntry>,
    pub total_workouts: usize,
    pub total_calories_burned: i64,
    pub calories_by_exercise: Vec<CategorySlice>,
    pub daily_duration_minutes: Vec<TrendPoint>,
    pub intensity_distribution: Vec<CategorySlice>,
}

/// Workout Log view: history table plus the per-exercise, per-day and
/// per-intensity breakdowns.
pub async fn get_workout_log(
    State(db): State<PgPool>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<WorkoutLogResponse>, ApiError> {
    require_user(&db, user_id).await?;

    let history = WorkoutService::new(db).get_workout_history(user_id).await?;

    let calories_by_exercise = metrics::calories_by_exercise(&history)
        .into_iter()
        .map(|(label, value)| CategorySlice { label, value })
        .collect();

    let daily_duration_minutes = metrics::duration_by_day(&history)
        .into_iter()
        .map(|(date, minutes)| TrendPoint {
            date,
            value: minutes as f64,
        })
        .collect();

    let distribution = metrics::intensity_distribution(&history);
    let intensity_distribution = Intensity::ALL
        .iter()
        .map(|level| CategorySlice {
            label: level.as_str().to_string(),
            value: distribution.get(level).copied().unwrap_or(0),
        })
        .collect();

    Ok(Json(WorkoutLogResponse {
        total_workouts: metrics::total_workouts(&history),
        total_calories_burned: metrics::total_calories_burned(&history),
        calories_by_exercise,
        daily_duration_minutes,
        intensity_distribution,
        history,
    }))
}

/// Workout entry form submission. Bounds only: positive duration,
/// non-negative calories.
pub async fn create_workout_session(
    State(db): State<PgPool>,
    Path(user_id): Path<Uuid>,
    Json(request): Json<WorkoutEntryRequest>,
) -> Result<(StatusCode, Json<WorkoutSession>), ApiError> {
    if request.duration_minutes <= 0 {
        return Err(ApiError::Validation(
            "duration_minutes must be positive".to_string(),
        ));
    }
    if request.calories_burned < 0 {
        return Err(ApiError::Validation(
            "calories_burned must not be negative".to_string(),
        ));
    }

    require_user(&db, user_id).await?;

    let session = WorkoutService::new(db)
        .create_workout_session(CreateWorkoutSession {
            user_id,
            exercise_type_id: request.exercise_type_id,
            duration_minutes: request.duration_minutes,
            calories_burned: request.calories_burned,
            intensity: request.intensity,
            session_date: request.session_date,
            notes: request.notes,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(session)))
}
