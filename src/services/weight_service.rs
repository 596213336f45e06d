use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{CreateWeightRecord, WeightRecord};

use super::errors::DataError;

#[derive(Clone)]
pub struct WeightService {
    db: PgPool,
}

impl WeightService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Weight history for one user, ascending by recorded date. The
    /// aggregation layer relies on this ordering for trend and net-change
    /// computations.
    pub async fn get_weight_history(&self, user_id: Uuid) -> Result<Vec<WeightRecord>, DataError> {
        let records = sqlx::query_as::<_, WeightRecord>(
            "SELECT id, user_id, weight_kg, recorded_on, notes \
             FROM weight_records WHERE user_id = $1 ORDER BY recorded_on ASC",
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await
        .map_err(DataError::on_read)?;

        Ok(records)
    }

    pub async fn create_weight_record(
        &self,
        record: CreateWeightRecord,
    ) -> Result<WeightRecord, DataError> {
        let created = sqlx::query_as::<_, WeightRecord>(
            "INSERT INTO weight_records (user_id, weight_kg, recorded_on, notes) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, user_id, weight_kg, recorded_on, notes",
        )
        .bind(record.user_id)
        .bind(record.weight_kg)
        .bind(record.recorded_on)
        .bind(record.notes)
        .fetch_one(&self.db)
        .await
        .map_err(DataError::on_write)?;

        Ok(created)
    }
}
