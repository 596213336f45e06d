use axum::{routing::get, Router};
use sqlx::PgPool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::dashboard::get_dashboard;
use super::exercises::list_exercises;
use super::goals::get_goals_overview;
use super::health::health_check;
use super::users::list_users;
use super::weight::{create_weight_record, get_weight_tracking};
use super::workouts::{create_workout_session, get_workout_log};

pub fn create_routes(db: PgPool) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/users", get(list_users))
        .route("/api/users/:user_id/dashboard", get(get_dashboard))
        .route(
            "/api/users/:user_id/weight",
            get(get_weight_tracking).post(create_weight_record),
        )
        .route(
            "/api/users/:user_id/workouts",
            get(get_workout_log).post(create_workout_session),
        )
        .route("/api/users/:user_id/goals", get(get_goals_overview))
        .route("/api/exercises", get(list_exercises))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(db)
}
