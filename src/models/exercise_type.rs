use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ExerciseType {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub calories_per_minute: f64,
}
