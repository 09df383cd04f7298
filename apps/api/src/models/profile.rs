use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A row from the `profiles` table — one per onboarded student.
/// `ai_summary` stays NULL until the post-insert summarization call lands;
/// a failed summary leaves a valid profile behind.
///
/// Serialized wholesale into the matching prompt, so every field a
/// recommendation could draw on is carried here.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ProfileRow {
    pub user_id: Uuid,
    pub resume_text: String,
    pub activities: String,
    pub hobbies: String,
    pub projects: String,
    pub social_links: serde_json::Value,
    pub career_goals: String,
    pub industries: String,
    pub ai_summary: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// The `{user_id, ai_summary}` projection forwarded to the model when
/// ranking students for a professional.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ProfileSummaryRow {
    pub user_id: Uuid,
    pub ai_summary: Option<String>,
}

/// Social links captured at onboarding, stored as JSONB on the profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub youtube: String,
    #[serde(default)]
    pub instagram: String,
}
