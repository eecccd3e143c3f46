/// Fixed instruction placed before every user query.
pub const CHAT_PROMPT_PREFIX: &str = "You are a helpful and encouraging career guidance AI. \
Your goal is to provide supportive and actionable advice based on the user's query. \
Respond to the following query: ";

pub const FALLBACK_NOT_CONFIGURED: &str =
    "Sorry, the AI chatbot is not configured. Please ensure the API key is set.";

pub const FALLBACK_BLOCKED: &str =
    "The AI response was blocked due to content policy. Please try a different query.";

pub const FALLBACK_UNEXPECTED_FORMAT: &str =
    "Sorry, I couldn't generate a response. The AI returned an unexpected format.";

pub const FALLBACK_CONNECTION: &str =
    "Sorry, I'm having trouble connecting to the AI. Please try again later.";

pub const FALLBACK_EMPTY: &str = "Sorry, I couldn't generate a response at this time. \
There might be an issue with the AI service or content policy. Please try again later.";
