//! Axum route handler for the free-form assistant.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::assistant::prompts::ASSISTANT_SYSTEM;
use crate::auth::extractors::Identity;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AssistantRequest {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct AssistantResponse {
    pub response: String,
}

/// POST /api/assistant
///
/// Any authenticated role. Forwards the query verbatim and returns the model
/// text; no conversation state, no rate limiting.
pub async fn handle_assistant(
    State(state): State<AppState>,
    _identity: Identity,
    Json(request): Json<AssistantRequest>,
) -> Result<Json<AssistantResponse>, AppError> {
    let response = state
        .llm
        .call_text(&request.query, ASSISTANT_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?;

    Ok(Json(AssistantResponse { response }))
}
