mod auth;
mod chat;
mod config;
mod errors;
mod extraction;
mod routes;
mod skills;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::auth::identity::InMemoryIdentityStore;
use crate::auth::sessions::InMemorySessionStore;
use crate::chat::gemini::GeminiClient;
use crate::config::Config;
use crate::routes::build_router;
use crate::skills::vocabulary::SkillVocabulary;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CareerLens API v{}", env!("CARGO_PKG_VERSION"));

    let vocabulary = Arc::new(SkillVocabulary::builtin());
    info!(
        "Skill vocabulary loaded: {} roles, {} known skills",
        vocabulary.roles().len(),
        vocabulary.known_skills().len()
    );

    let identity = if config.seed_demo_users {
        info!("Seeding demo users");
        InMemoryIdentityStore::with_demo_users()
    } else {
        InMemoryIdentityStore::new()
    };

    let gemini = GeminiClient::new(
        config.gemini_api_key.clone(),
        &config.gemini_api_base,
        &config.gemini_model,
        Duration::from_secs(config.chat_timeout_secs),
    )
    .context("Failed to build Gemini HTTP client")?;
    if !gemini.is_configured() {
        warn!("GEMINI_API_KEY is not set; the chatbot will reply with a fallback message");
    }
    info!(
        "Chat client initialized (model: {}, api key {})",
        config.gemini_model,
        config.masked_api_key()
    );

    let session_ttl = chrono::Duration::from_std(Duration::from_secs(config.session_ttl_secs))
        .context("SESSION_TTL_SECS is out of range")?;

    let state = AppState {
        config: config.clone(),
        vocabulary,
        identity: Arc::new(identity),
        sessions: Arc::new(InMemorySessionStore::with_ttl(session_ttl)),
        completion: Arc::new(gemini),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the frontend host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
