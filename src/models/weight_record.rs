use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WeightRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub weight_kg: f64,
    pub recorded_on: NaiveDate,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWeightRecord {
    pub user_id: Uuid,
    pub weight_kg: f64,
    pub recorded_on: NaiveDate,
    pub notes: Option<String>,
}
