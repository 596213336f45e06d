use axum::{
    extract::{Path, State},
    response::Json,
};
use chrono::Utc;
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::metrics;
use crate::models::{Goal, GoalStatus};
use crate::services::GoalService;

use super::charts::CategorySlice;
use super::error::ApiError;
use super::users::require_user;

#[derive(Debug, Serialize)]
pub struct GoalOverview {
    pub goal: Goal,
    /// Completion percent clamped to [0, 100] for display.
    pub progress_percent: f64,
    pub days_remaining: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct GoalsResponse {
    pub goals: Vec<GoalOverview>,
    pub active_goals: usize,
    pub status_counts: Vec<CategorySlice>,
}

/// Goals view: per-goal progress rows and the status breakdown.
pub async fn get_goals_overview(
    State(db): State<PgPool>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<GoalsResponse>, ApiError> {
    require_user(&db, user_id).await?;

    let goals = GoalService::new(db).get_goals(user_id).await?;
    let today = Utc::now().date_naive();

    let overviews = goals
        .iter()
        .map(|goal| GoalOverview {
            progress_percent: metrics::goal_progress_percent(goal).clamp(0.0, 100.0),
            days_remaining: goal.target_date.map(|d| (d - today).num_days()),
            goal: goal.clone(),
        })
        .collect();

    let counts = metrics::goals_by_status(&goals);
    let status_counts = GoalStatus::ALL
        .iter()
        .map(|status| CategorySlice {
            label: status.as_str().to_string(),
            value: counts.get(status).copied().unwrap_or(0),
        })
        .collect();

    Ok(Json(GoalsResponse {
        goals: overviews,
        active_goals: metrics::active_goal_count(&goals),
        status_counts,
    }))
}
