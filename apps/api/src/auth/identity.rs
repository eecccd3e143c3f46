use std::collections::HashMap;

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq)]
pub enum IdentityError {
    #[error("username '{0}' already exists")]
    UsernameTaken(String),

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("{0} cannot be empty")]
    EmptyField(&'static str),
}

/// User registration and credential checks. Carried in `AppState` as `Arc<dyn IdentityService>`.
#[async_trait]
pub trait IdentityService: Send + Sync {
    async fn register(&self, username: &str, password: &str) -> Result<(), IdentityError>;

    /// Returns the canonical username on success.
    async fn verify(&self, username: &str, password: &str) -> Result<String, IdentityError>;
}

struct StoredCredential {
    salt: Uuid,
    digest: String,
}

impl StoredCredential {
    fn new(password: &str) -> Self {
        let salt = Uuid::new_v4();
        Self {
            digest: hash_password(&salt, password),
            salt,
        }
    }

    fn matches(&self, password: &str) -> bool {
        hash_password(&self.salt, password) == self.digest
    }
}

fn hash_password(salt: &Uuid, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// In-memory user store. Holds salted SHA-256 digests, never plaintext passwords.
/// Nothing survives a restart.
#[derive(Default)]
pub struct InMemoryIdentityStore {
    users: RwLock<HashMap<String, StoredCredential>>,
}

impl InMemoryIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the demo accounts.
    pub fn with_demo_users() -> Self {
        let users = [("testuser", "password123"), ("john.doe", "securepass")]
            .into_iter()
            .map(|(name, password)| (name.to_string(), StoredCredential::new(password)))
            .collect();
        Self {
            users: RwLock::new(users),
        }
    }
}

fn normalize(username: &str, password: &str) -> Result<String, IdentityError> {
    let username = username.trim();
    if username.is_empty() {
        return Err(IdentityError::EmptyField("username"));
    }
    if password.is_empty() {
        return Err(IdentityError::EmptyField("password"));
    }
    Ok(username.to_string())
}

#[async_trait]
impl IdentityService for InMemoryIdentityStore {
    async fn register(&self, username: &str, password: &str) -> Result<(), IdentityError> {
        let username = normalize(username, password)?;
        let mut users = self.users.write().await;
        if users.contains_key(&username) {
            return Err(IdentityError::UsernameTaken(username));
        }
        users.insert(username, StoredCredential::new(password));
        Ok(())
    }

    async fn verify(&self, username: &str, password: &str) -> Result<String, IdentityError> {
        let username = normalize(username, password)?;
        let users = self.users.read().await;
        match users.get(&username) {
            Some(cred) if cred.matches(password) => Ok(username),
            _ => Err(IdentityError::InvalidCredentials),
        }
    }
}
