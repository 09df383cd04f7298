// LLM prompt templates for the student-facing routes.

/// System prompt for the onboarding profile summary.
pub const PROFILE_SUMMARY_SYSTEM: &str = "\
You are a career advisor summarizing a student profile for a professional \
networking platform. Write a concise, factual summary of the student's \
background, strengths, and direction. Use only the information provided — \
do not invent credentials.";

/// Profile summary prompt. Replace: {resume_text}, {activities}, {hobbies},
/// {projects}, {career_goals}, {industries}.
pub const PROFILE_SUMMARY_PROMPT: &str = r#"Analyze the following student profile and generate a summary:
Resume: {resume_text}
Activities: {activities}
Hobbies: {hobbies}
Projects: {projects}
Career Goals: {career_goals}
Industries: {industries}"#;

/// System prompt for matching — enforces JSON-only output.
pub const MATCH_SYSTEM: &str = "\
You are a matching engine for a career networking platform. \
Recommend professionals and opportunities relevant to the given student \
profile. You MUST respond with valid JSON only. \
Do NOT include any text outside the JSON object. \
Do NOT use markdown code fences.";

/// Matching prompt. Replace `{profile_json}` before sending.
pub const MATCH_PROMPT: &str = r#"Based on the following profile, recommend professionals and opportunities in JSON format.

Return a JSON object with this shape:
{
  "matches": [
    {"id": 1, "name": "string", "role": "string", "company": "string"}
  ],
  "opportunities": [
    {"id": 1, "title": "string", "company": "string"}
  ]
}

PROFILE:
{profile_json}"#;
