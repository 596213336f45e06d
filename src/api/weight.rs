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
use crate::models::{CreateWeightRecord, WeightRecord};
use crate::services::WeightService;

use super::charts::TrendPoint;
use super::error::ApiError;
use super::users::require_user;

#[derive(Debug, Deserialize)]
pub struct WeightEntryRequest {
    pub weight_kg: f64,
    pub recorded_on: NaiveDate,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct WeightTrackingResponse {
    pub history: Vec<WeightRecord>,
    pub latest: Option<WeightRecord>,
    pub min_weight_kg: Option<f64>,
    pub max_weight_kg: Option<f64>,
    pub net_change_kg: f64,
    pub trend: Vec<TrendPoint>,
}

/// Weight Tracking view: history table, extremes callouts, trend line.
pub async fn get_weight_tracking(
    State(db): State<PgPool>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<WeightTrackingResponse>, ApiError> {
    require_user(&db, user_id).await?;

    let history = WeightService::new(db).get_weight_history(user_id).await?;

    let extremes = metrics::weight_extremes(&history);
    let trend = history
        .iter()
        .map(|r| TrendPoint {
            date: r.recorded_on,
            value: r.weight_kg,
        })
        .collect();

    Ok(Json(WeightTrackingResponse {
        latest: metrics::latest_weight(&history).cloned(),
        min_weight_kg: extremes.map(|(min, _)| min),
        max_weight_kg: extremes.map(|(_, max)| max),
        net_change_kg: metrics::weight_net_change(&history),
        trend,
        history,
    }))
}

/// Weight entry form submission. Form bounds only; the values pass through
/// to the insert unchanged.
pub async fn create_weight_record(
    State(db): State<PgPool>,
    Path(user_id): Path<Uuid>,
    Json(request): Json<WeightEntryRequest>,
) -> Result<(StatusCode, Json<WeightRecord>), ApiError> {
    if request.weight_kg <= 0.0 {
        return Err(ApiError::Validation(
            "weight_kg must be positive".to_string(),
        ));
    }

    require_user(&db, user_id).await?;

    let record = WeightService::new(db)
        .create_weight_record(CreateWeightRecord {
            user_id,
            weight_kg: request.weight_kg,
            recorded_on: request.recorded_on,
            notes: request.notes,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(record)))
}
