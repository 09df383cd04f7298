//! Axum route handlers for the professional dashboard: opportunity posting,
//! the caller's opportunity list, and LLM-ranked student recommendations.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::auth::claims::Role;
use crate::auth::extractors::Identity;
use crate::errors::AppError;
use crate::llm_client::strip_json_fences;
use crate::models::opportunity::OpportunityRow;
use crate::models::profile::ProfileSummaryRow;
use crate::professional::prompts::{STUDENT_RANK_PROMPT, STUDENT_RANK_SYSTEM};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PostOpportunityRequest {
    pub title: String,
    pub description: String,
    pub company: String,
}

#[derive(Debug, Serialize)]
pub struct OpportunityResponse {
    pub opportunity: OpportunityRow,
}

#[derive(Debug, Serialize)]
pub struct OpportunityListResponse {
    pub opportunities: Vec<OpportunityRow>,
}

/// POST /api/professional/opportunities
pub async fn handle_post_opportunity(
    State(state): State<AppState>,
    identity: Identity,
    Json(request): Json<PostOpportunityRequest>,
) -> Result<Json<OpportunityResponse>, AppError> {
    identity.require(
        Role::Professional,
        "Only professionals can post opportunities",
    )?;

    let opportunity = sqlx::query_as::<_, OpportunityRow>(
        r#"
        INSERT INTO opportunities (user_id, title, description, company)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(identity.user_id)
    .bind(&request.title)
    .bind(&request.description)
    .bind(&request.company)
    .fetch_one(&state.db)
    .await?;

    info!(user_id = %identity.user_id, opportunity_id = %opportunity.id, "opportunity posted");
    Ok(Json(OpportunityResponse { opportunity }))
}

/// GET /api/professional/opportunities
///
/// Only the caller's own postings; there are no cross-owner visibility rules.
pub async fn handle_list_opportunities(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<Json<OpportunityListResponse>, AppError> {
    identity.require(
        Role::Professional,
        "Only professionals can view their opportunities",
    )?;

    let opportunities = sqlx::query_as::<_, OpportunityRow>(
        "SELECT * FROM opportunities WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(identity.user_id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(OpportunityListResponse { opportunities }))
}

/// GET /api/professional/students
///
/// Loads every profile's `{user_id, ai_summary}` projection — no filtering or
/// pagination, this scales linearly with the student population — and asks
/// the model for a ranked list. Parse-or-fallback like the matching route.
pub async fn handle_student_recommendations(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<Json<Value>, AppError> {
    identity.require(
        Role::Professional,
        "Only professionals can view student recommendations",
    )?;

    let profiles =
        sqlx::query_as::<_, ProfileSummaryRow>("SELECT user_id, ai_summary FROM profiles")
            .fetch_all(&state.db)
            .await?;

    let profiles_json =
        serde_json::to_string(&profiles).map_err(|e| AppError::Internal(e.into()))?;
    let prompt = STUDENT_RANK_PROMPT.replace("{profiles_json}", &profiles_json);

    let response = state
        .llm
        .call(&prompt, STUDENT_RANK_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?;

    let students = parse_students(response.text()).unwrap_or_else(|| {
        warn!(user_id = %identity.user_id, "student ranking was not valid JSON, using fallback");
        fallback_students()
    });

    Ok(Json(json!({ "students": students })))
}

/// Parses the model's ranking answer, tolerating markdown fences.
fn parse_students(text: Option<&str>) -> Option<Value> {
    let text = text?;
    serde_json::from_str(strip_json_fences(text)).ok()
}

/// Placeholder list returned when the model's answer cannot be parsed.
fn fallback_students() -> Value {
    json!([
        { "id": 1, "name": "Sample Student", "skills": ["Python", "JavaScript"] }
    ])
}
