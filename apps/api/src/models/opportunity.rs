use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A row from the `opportunities` table. Owned by the posting professional
/// and visible only to them.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct OpportunityRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub company: String,
    pub created_at: DateTime<Utc>,
}
