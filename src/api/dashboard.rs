use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::metrics;
use crate::models::User;
use crate::services::{GoalService, WeightService, WorkoutService};

use super::charts::{CategorySlice, TrendPoint};
use super::error::ApiError;
use super::users::require_user;

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub user: User,
    pub latest_weight_kg: Option<f64>,
    pub weight_net_change_kg: f64,
    pub total_workouts: usize,
    pub total_calories_burned: i64,
    pub active_goals: usize,
    pub weight_trend: Vec<TrendPoint>,
    pub daily_duration_minutes: Vec<TrendPoint>,
    pub workouts_by_category: Vec<CategorySlice>,
}

/// Dashboard view: headline callouts plus the three overview series.
pub async fn get_dashboard(
    State(db): State<PgPool>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<DashboardResponse>, ApiError> {
    let user = require_user(&db, user_id).await?;

    let weight_history = WeightService::new(db.clone())
        .get_weight_history(user_id)
        .await?;
    let workouts = WorkoutService::new(db.clone())
        .get_workout_history(user_id)
        .await?;
    let goals = GoalService::new(db).get_goals(user_id).await?;

    let weight_trend = weight_history
        .iter()
        .map(|r| TrendPoint {
            date: r.recorded_on,
            value: r.weight_kg,
        })
        .collect();

    let daily_duration_minutes = metrics::duration_by_day(&workouts)
        .into_iter()
        .map(|(date, minutes)| TrendPoint {
            date,
            value: minutes as f64,
        })
        .collect();

    let mut workouts_by_category: Vec<CategorySlice> = metrics::workouts_by_category(&workouts)
        .into_iter()
        .map(|(label, value)| CategorySlice { label, value })
        .collect();
    workouts_by_category.sort_by(|a, b| a.label.cmp(&b.label));

    Ok(Json(DashboardResponse {
        latest_weight_kg: metrics::latest_weight(&weight_history).map(|r| r.weight_kg),
        weight_net_change_kg: metrics::weight_net_change(&weight_history),
        total_workouts: metrics::total_workouts(&workouts),
        total_calories_burned: metrics::total_calories_burned(&workouts),
        active_goals: metrics::active_goal_count(&goals),
        weight_trend,
        daily_duration_minutes,
        workouts_by_category,
        user,
    }))
}
