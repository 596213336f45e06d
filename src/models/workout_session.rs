use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Type)]
#[sqlx(type_name = "intensity", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    Low,
    Medium,
    High,
}

impl Intensity {
    pub const ALL: [Intensity; 3] = [Intensity::Low, Intensity::Medium, Intensity::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Intensity::Low => "low",
            Intensity::Medium => "medium",
            Intensity::High => "high",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WorkoutSession {
    pub id: Uuid,
    pub user_id: Uuid,
    pub exercise_type_id: Uuid,
    pub duration_minutes: i32,
    pub calories_burned: i32,
    pub intensity: Intensity,
    pub session_date: NaiveDate,
    pub notes: Option<String>,
}

/// Workout history row as read back for display: the session joined with
/// its catalog entry's name and category.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WorkoutEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub exercise_type_id: Uuid,
    pub exercise_name: String,
    pub category: String,
    pub duration_minutes: i32,
    pub calories_burned: i32,
    pub intensity: Intensity,
    pub session_date: NaiveDate,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWorkoutSession {
    pub user_id: Uuid,
    pub exercise_type_id: Uuid,
    pub duration_minutes: i32,
    pub calories_burned: i32,
    pub intensity: Intensity,
    pub session_date: NaiveDate,
    pub notes: Option<String>,
}
