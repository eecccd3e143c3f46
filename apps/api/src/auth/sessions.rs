use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::skills::matcher::MatchReport;

/// Per-login state. The analysis lives only as long as the session.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub analysis: Option<MatchReport>,
}

/// Session storage keyed by opaque bearer tokens.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn create(&self, username: &str) -> Uuid;

    async fn get(&self, token: Uuid) -> Option<Session>;

    /// Replaces the stored analysis. Returns false if the session no longer exists.
    async fn store_analysis(&self, token: Uuid, report: MatchReport) -> bool;

    /// Returns false if there was nothing to remove.
    async fn remove(&self, token: Uuid) -> bool;
}

/// Sessions older than this are treated as logged out.
pub const DEFAULT_SESSION_TTL_SECS: u64 = 24 * 60 * 60;

/// Expired sessions are invisible to reads and dropped on the next `create`.
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<Uuid, Session>>,
    ttl: Duration,
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::with_ttl(Duration::seconds(DEFAULT_SESSION_TTL_SECS as i64))
    }
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    fn is_expired(&self, session: &Session, now: DateTime<Utc>) -> bool {
        now - session.created_at >= self.ttl
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self, username: &str) -> Uuid {
        let token = Uuid::new_v4();
        let now = Utc::now();
        let session = Session {
            username: username.to_string(),
            created_at: now,
            analysis: None,
        };

        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| !self.is_expired(s, now));
        let pruned = before - sessions.len();
        if pruned > 0 {
            debug!("Pruned {pruned} expired sessions");
        }
        sessions.insert(token, session);
        token
    }

    async fn get(&self, token: Uuid) -> Option<Session> {
        let now = Utc::now();
        self.sessions
            .read()
            .await
            .get(&token)
            .filter(|s| !self.is_expired(s, now))
            .cloned()
    }

    async fn store_analysis(&self, token: Uuid, report: MatchReport) -> bool {
        let now = Utc::now();
        match self.sessions.write().await.get_mut(&token) {
            Some(session) if !self.is_expired(session, now) => {
                session.analysis = Some(report);
                true
            }
            _ => false,
        }
    }

    async fn remove(&self, token: Uuid) -> bool {
        self.sessions.write().await.remove(&token).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::matcher::match_resume;
    use crate::skills::vocabulary::SkillVocabulary;

    #[tokio::test]
    async fn test_create_and_get() {
        let store = InMemorySessionStore::new();
        let token = store.create("ana").await;
        let session = store.get(token).await.unwrap();
        assert_eq!(session.username, "ana");
        assert!(session.analysis.is_none());
    }

    #[tokio::test]
    async fn test_store_analysis_is_visible_to_later_reads() {
        let store = InMemorySessionStore::new();
        let token = store.create("ana").await;
        let report = match_resume("python", "Software Engineer", &SkillVocabulary::builtin()).unwrap();

        assert!(store.store_analysis(token, report.clone()).await);
        assert_eq!(store.get(token).await.unwrap().analysis, Some(report));
    }

    #[tokio::test]
    async fn test_removed_session_is_gone() {
        let store = InMemorySessionStore::new();
        let token = store.create("ana").await;
        assert!(store.remove(token).await);
        assert!(store.get(token).await.is_none());
        assert!(!store.remove(token).await);
    }

    #[tokio::test]
    async fn test_expired_session_is_invisible() {
        let store = InMemorySessionStore::with_ttl(Duration::zero());
        let token = store.create("ana").await;
        assert!(store.get(token).await.is_none());

        let report = match_resume("python", "Software Engineer", &SkillVocabulary::builtin()).unwrap();
        assert!(!store.store_analysis(token, report).await);
    }

    #[tokio::test]
    async fn test_create_prunes_expired_sessions() {
        let store = InMemorySessionStore::with_ttl(Duration::zero());
        for _ in 0..1000 {
            store.create("testuser").await;
        }
        assert_eq!(store.sessions.read().await.len(), 1);
    }

    #[tokio::test]
    async fn test_live_sessions_survive_pruning() {
        let store = InMemorySessionStore::new();
        let first = store.create("ana").await;
        store.create("ben").await;
        assert_eq!(store.sessions.read().await.len(), 2);
        assert_eq!(store.get(first).await.unwrap().username, "ana");
    }

    #[tokio::test]
    async fn test_store_analysis_on_unknown_token() {
        let store = InMemorySessionStore::new();
        let report = match_resume("", "Astronaut", &SkillVocabulary::builtin()).unwrap();
        assert!(!store.store_analysis(Uuid::new_v4(), report).await);
    }
}
