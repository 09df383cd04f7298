/// System prompt for the assistant route. The user's query is forwarded
/// verbatim as the user message; there is no conversation state.
pub const ASSISTANT_SYSTEM: &str = "\
You are a helpful career assistant on a networking platform for students and \
professionals. Answer the user's question directly and concisely.";
