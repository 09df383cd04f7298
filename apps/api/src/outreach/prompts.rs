// LLM prompt templates for connection outreach email copy.

/// Subject line for all connection emails.
pub const CONNECT_SUBJECT: &str = "ConnectSphere: New Connection Request";

/// System prompt for outreach copy generation.
pub const OUTREACH_SYSTEM: &str = "\
You are writing a short, warm outreach email for a career networking \
platform. Return only the email body as plain text — no subject line, no \
signature placeholders, no commentary.";

/// Outreach prompt. Replace: {message}, {recipient_name}.
pub const OUTREACH_PROMPT: &str = r#"Generate a personalized outreach email based on the message: {message} for recipient: {recipient_name}"#;
