use sqlx::PgPool;
use uuid::Uuid;

use crate::models::User;

use super::errors::DataError;

#[derive(Clone)]
pub struct UserService {
    db: PgPool,
}

impl UserService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn list_users(&self) -> Result<Vec<User>, DataError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, username, email, age, height_cm FROM users ORDER BY username ASC",
        )
        .fetch_all(&self.db)
        .await
        .map_err(DataError::on_read)?;

        Ok(users)
    }

    pub async fn get_user_by_id(&self, user_id: Uuid) -> Result<Option<User>, DataError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, email, age, height_cm FROM users WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.db)
        .await
        .map_err(DataError::on_read)?;

        Ok(user)
    }
}
