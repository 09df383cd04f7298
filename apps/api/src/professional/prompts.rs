// LLM prompt templates for the professional-facing routes.

/// System prompt for student ranking — enforces JSON-only output.
pub const STUDENT_RANK_SYSTEM: &str = "\
You are a recruiting assistant for a career networking platform. \
Rank the given student profiles for outreach. \
You MUST respond with valid JSON only. \
Do NOT include any text outside the JSON. \
Do NOT use markdown code fences.";

/// Student ranking prompt. Replace `{profiles_json}` before sending.
pub const STUDENT_RANK_PROMPT: &str = r#"Based on the following student profiles, recommend top students in JSON format.

Return a JSON array:
[
  {"id": 1, "name": "string", "skills": ["string"]}
]

STUDENT PROFILES:
{profiles_json}"#;
