use anyhow::{Context, Result};

use crate::auth::sessions::DEFAULT_SESSION_TTL_SECS;

const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

/// Application configuration loaded from environment variables.
/// Every variable is optional; without `GEMINI_API_KEY` the chatbot answers with a
/// "not configured" message.
#[derive(Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub gemini_api_base: String,
    pub gemini_model: String,
    pub chat_timeout_secs: u64,
    pub max_upload_bytes: usize,
    pub seed_demo_users: bool,
    pub session_ttl_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            gemini_api_key: None,
            gemini_api_base: DEFAULT_GEMINI_API_BASE.to_string(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            chat_timeout_secs: 60,
            max_upload_bytes: 10 * 1024 * 1024,
            seed_demo_users: false,
            session_ttl_secs: DEFAULT_SESSION_TTL_SECS,
            port: 8080,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            gemini_api_base: std::env::var("GEMINI_API_BASE").unwrap_or(defaults.gemini_api_base),
            gemini_model: std::env::var("GEMINI_MODEL").unwrap_or(defaults.gemini_model),
            chat_timeout_secs: parse_env("CHAT_TIMEOUT_SECS", defaults.chat_timeout_secs)?,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?,
            seed_demo_users: std::env::var("SEED_DEMO_USERS")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.seed_demo_users),
            session_ttl_secs: parse_env("SESSION_TTL_SECS", defaults.session_ttl_secs)?,
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }

    /// Key length only, for startup logs.
    pub fn masked_api_key(&self) -> String {
        match &self.gemini_api_key {
            Some(k) => format!("set (length {})", k.len()),
            None => "unset".to_string(),
        }
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
