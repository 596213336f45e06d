use axum::{extract::State, response::Json};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::User;
use crate::services::UserService;

use super::error::ApiError;

/// Identity picker: every known user, ordered by username.
pub async fn list_users(State(db): State<PgPool>) -> Result<Json<Vec<User>>, ApiError> {
    let users = UserService::new(db).list_users().await?;
    Ok(Json(users))
}

/// Shared lookup for the per-user views: resolves the path id or rejects
/// the request with 404. An existing user with no records is not an error.
pub(super) async fn require_user(db: &PgPool, user_id: Uuid) -> Result<User, ApiError> {
    UserService::new(db.clone())
        .get_user_by_id(user_id)
        .await?
        .ok_or(ApiError::NotFound("user"))
}
