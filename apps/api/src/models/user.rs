use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// A row from the `users` table. Never serialized to clients directly —
/// responses carry tokens or projections, not user rows.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}
