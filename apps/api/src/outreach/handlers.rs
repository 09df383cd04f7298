//! Axum route handler for connection emails: generate outreach copy with the
//! model, dispatch it, then log a best-effort analytics event.

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;

use crate::analytics::record_event;
use crate::auth::extractors::Identity;
use crate::errors::AppError;
use crate::models::user::UserRow;
use crate::outreach::prompts::{CONNECT_SUBJECT, OUTREACH_PROMPT, OUTREACH_SYSTEM};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectRequest {
    pub recipient_id: Uuid,
    pub message: String,
}

/// POST /api/email/connect
///
/// Any authenticated role. The analytics write after dispatch is best-effort;
/// its failure never changes the response.
pub async fn handle_connect(
    State(state): State<AppState>,
    identity: Identity,
    Json(request): Json<ConnectRequest>,
) -> Result<Json<Value>, AppError> {
    let recipient = sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE id = $1")
        .bind(request.recipient_id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Recipient not found".to_string()))?;

    let prompt = OUTREACH_PROMPT
        .replace("{message}", &request.message)
        .replace("{recipient_name}", &recipient.full_name);

    let body = state
        .llm
        .call_text(&prompt, OUTREACH_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?;

    state
        .mailer
        .send(&recipient.email, CONNECT_SUBJECT, &body)
        .await
        .map_err(|e| AppError::Email(e.to_string()))?;

    info!(
        user_id = %identity.user_id,
        recipient_id = %recipient.id,
        "connection email dispatched"
    );

    record_event(
        &state.db,
        identity.user_id,
        "email_sent",
        json!({ "recipient_id": request.recipient_id }),
    )
    .await;

    Ok(Json(json!({ "message": "Email sent" })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_request_accepts_camel_case_recipient_id() {
        let id = Uuid::new_v4();
        let json = format!(r#"{{ "recipientId": "{id}", "message": "let's talk" }}"#);
        let req: ConnectRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(req.recipient_id, id);
        assert_eq!(req.message, "let's talk");
    }
}
