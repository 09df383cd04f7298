//! Append-only analytics events. Strictly best-effort: a failed insert is
//! logged and swallowed, never surfaced to the caller and never retried.

use serde_json::Value;
use sqlx::PgPool;
use tracing::error;
use uuid::Uuid;

pub async fn record_event(db: &PgPool, user_id: Uuid, action: &str, details: Value) {
    let result = sqlx::query("INSERT INTO analytics (user_id, action, details) VALUES ($1, $2, $3)")
        .bind(user_id)
        .bind(action)
        .bind(&details)
        .execute(db)
        .await;

    if let Err(e) = result {
        error!(user_id = %user_id, action, error = %e, "analytics write failed");
    }
}
