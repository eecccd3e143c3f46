use std::sync::Arc;

use crate::auth::identity::IdentityService;
use crate::auth::sessions::SessionStore;
use crate::chat::CompletionService;
use crate::config::Config;
use crate::skills::vocabulary::SkillVocabulary;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Built once at startup; read-only afterwards.
    pub vocabulary: Arc<SkillVocabulary>,
    pub identity: Arc<dyn IdentityService>,
    pub sessions: Arc<dyn SessionStore>,
    /// Chat backend. Default: GeminiClient.
    pub completion: Arc<dyn CompletionService>,
}
