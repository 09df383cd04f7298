//! Axum route handlers for student onboarding and matching.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::auth::claims::Role;
use crate::auth::extractors::Identity;
use crate::errors::AppError;
use crate::llm_client::strip_json_fences;
use crate::models::profile::{ProfileRow, SocialLinks};
use crate::state::AppState;
use crate::students::prompts::{
    MATCH_PROMPT, MATCH_SYSTEM, PROFILE_SUMMARY_PROMPT, PROFILE_SUMMARY_SYSTEM,
};
use crate::students::resume::extract_resume_text;

/// The JSON document carried in the `data` part of the onboarding form.
/// Every field defaults so a sparse client payload still onboards.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingData {
    #[serde(default)]
    pub activities: String,
    #[serde(default)]
    pub hobbies: String,
    #[serde(default)]
    pub projects: String,
    #[serde(default)]
    pub social_links: SocialLinks,
    #[serde(default)]
    pub career_goals: String,
    #[serde(default)]
    pub industries: String,
}

/// POST /api/onboarding (multipart: optional `resume` PDF + `data` JSON)
///
/// Two-phase write: insert the profile, then backfill `ai_summary` from one
/// summarization call. A summary failure is degradation, not an error — the
/// profile stays with a NULL summary and the request still succeeds.
pub async fn handle_onboarding(
    State(state): State<AppState>,
    identity: Identity,
    mut multipart: Multipart,
) -> Result<Json<Value>, AppError> {
    identity.require(Role::Student, "Only students can complete onboarding")?;

    let mut resume_bytes: Option<Bytes> = None;
    let mut data: Option<OnboardingData> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed form data: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Malformed form data: {e}")))?;
                resume_bytes = Some(bytes);
            }
            "data" => {
                let raw = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Malformed form data: {e}")))?;
                let parsed = serde_json::from_str(&raw)
                    .map_err(|_| AppError::Validation("Invalid onboarding data".to_string()))?;
                data = Some(parsed);
            }
            _ => {}
        }
    }

    let data = data.ok_or_else(|| AppError::Validation("Missing onboarding data".to_string()))?;

    let resume_text = match resume_bytes {
        Some(bytes) => extract_resume_text(&bytes)?,
        None => String::new(),
    };

    let social_links =
        serde_json::to_value(&data.social_links).map_err(|e| AppError::Internal(e.into()))?;

    sqlx::query(
        r#"
        INSERT INTO profiles
            (user_id, resume_text, activities, hobbies, projects,
             social_links, career_goals, industries)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        "#,
    )
    .bind(identity.user_id)
    .bind(&resume_text)
    .bind(&data.activities)
    .bind(&data.hobbies)
    .bind(&data.projects)
    .bind(&social_links)
    .bind(&data.career_goals)
    .bind(&data.industries)
    .execute(&state.db)
    .await?;

    info!(user_id = %identity.user_id, "profile created");

    // Phase two: summarize and backfill. No rollback path — an LLM or store
    // failure here leaves the profile with a NULL summary.
    let prompt = PROFILE_SUMMARY_PROMPT
        .replace("{resume_text}", &resume_text)
        .replace("{activities}", &data.activities)
        .replace("{hobbies}", &data.hobbies)
        .replace("{projects}", &data.projects)
        .replace("{career_goals}", &data.career_goals)
        .replace("{industries}", &data.industries);

    match state.llm.call_text(&prompt, PROFILE_SUMMARY_SYSTEM).await {
        Ok(summary) => {
            let updated = sqlx::query("UPDATE profiles SET ai_summary = $1 WHERE user_id = $2")
                .bind(&summary)
                .bind(identity.user_id)
                .execute(&state.db)
                .await;
            if let Err(e) = updated {
                warn!(user_id = %identity.user_id, error = %e, "summary backfill failed");
            }
        }
        Err(e) => {
            warn!(user_id = %identity.user_id, error = %e, "profile summarization failed");
        }
    }

    Ok(Json(json!({ "message": "Profile saved" })))
}

/// GET /api/matches
///
/// Sends the caller's whole profile to the model and returns its JSON answer.
/// The model is untrusted: its text is parsed as JSON and nothing more; a
/// malformed answer degrades to the fixed placeholder payload.
pub async fn handle_matches(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<Json<Value>, AppError> {
    identity.require(Role::Student, "Only students can access matches")?;

    let profile = sqlx::query_as::<_, ProfileRow>("SELECT * FROM profiles WHERE user_id = $1")
        .bind(identity.user_id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))?;

    let profile_json =
        serde_json::to_string(&profile).map_err(|e| AppError::Internal(e.into()))?;
    let prompt = MATCH_PROMPT.replace("{profile_json}", &profile_json);

    let response = state
        .llm
        .call(&prompt, MATCH_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?;

    let payload = parse_matches(response.text()).unwrap_or_else(|| {
        warn!(user_id = %identity.user_id, "match response was not valid JSON, using fallback");
        fallback_matches()
    });

    Ok(Json(payload))
}

/// Parses the model's matching answer, tolerating markdown fences.
fn parse_matches(text: Option<&str>) -> Option<Value> {
    let text = text?;
    serde_json::from_str(strip_json_fences(text)).ok()
}

/// Placeholder payload returned when the model's answer cannot be parsed.
fn fallback_matches() -> Value {
    json!({
        "matches": [
            { "id": 1, "name": "Sample Professional", "role": "Engineer", "company": "Tech Corp" }
        ],
        "opportunities": [
            { "id": 1, "title": "Software Intern", "company": "Tech Corp" }
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn onboarding_data_accepts_camel_case_and_defaults() {
        let json = r#"{
            "activities": "robotics club",
            "careerGoals": "backend engineering",
            "socialLinks": { "linkedin": "in/someone" }
        }"#;
        let data: OnboardingData = serde_json::from_str(json).unwrap();
        assert_eq!(data.activities, "robotics club");
        assert_eq!(data.career_goals, "backend engineering");
        assert_eq!(data.social_links.linkedin, "in/someone");
        assert_eq!(data.social_links.youtube, "");
        assert_eq!(data.hobbies, "");
    }

    #[test]
    fn valid_model_json_is_returned_as_is() {
        let text = r#"{"matches": [{"id": 7}], "opportunities": []}"#;
        let parsed = parse_matches(Some(text)).unwrap();
        assert_eq!(parsed["matches"][0]["id"], 7);
    }

    #[test]
    fn fenced_model_json_is_accepted() {
        let text = "```json\n{\"matches\": [], \"opportunities\": []}\n```";
        let parsed = parse_matches(Some(text)).unwrap();
        assert!(parsed["matches"].as_array().unwrap().is_empty());
    }

    #[test]
    fn malformed_model_output_degrades_to_fallback() {
        assert!(parse_matches(Some("Here are your matches! 1. Alice...")).is_none());
        assert!(parse_matches(None).is_none());

        let fallback = fallback_matches();
        assert_eq!(fallback["matches"][0]["name"], "Sample Professional");
        assert_eq!(fallback["opportunities"][0]["title"], "Software Intern");
    }
}
