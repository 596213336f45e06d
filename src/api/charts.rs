use chrono::NaiveDate;
use serde::Serialize;

/// One point of a date-keyed line or bar series.
#[derive(Debug, Clone, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// One labeled slice of a pie or bar breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct CategorySlice {
    pub label: String,
    pub value: i64,
}
