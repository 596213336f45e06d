use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Goal;

use super::errors::DataError;

#[derive(Clone)]
pub struct GoalService {
    db: PgPool,
}

impl GoalService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Goals are read-only here; rows are provisioned out-of-band.
    pub async fn get_goals(&self, user_id: Uuid) -> Result<Vec<Goal>, DataError> {
        let goals = sqlx::query_as::<_, Goal>(
            "SELECT id, user_id, goal_type, target_value, current_value, target_date, status \
             FROM goals WHERE user_id = $1 ORDER BY target_date ASC",
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await
        .map_err(DataError::on_read)?;

        Ok(goals)
    }
}
