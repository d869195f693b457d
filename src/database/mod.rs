use async_trait::async_trait;
use sha2::Digest;
use sha2::Sha256;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::JournalEntry;
use crate::models::NewJournalEntry;
use crate::Result;

mod entries;
mod memory;
mod schema;
mod tokens;

pub use memory::MemoryStore;

/// Storage for journal entries
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Validate and store a new entry
    async fn create_entry(&self, entry: NewJournalEntry) -> Result<JournalEntry>;

    /// Up to `limit` non-deleted entries of `owner`, newest first
    async fn recent_entries(&self, owner: Uuid, limit: usize) -> Result<Vec<JournalEntry>>;

    /// Number of non-deleted entries of `owner`
    async fn count_entries(&self, owner: Uuid) -> Result<i64>;

    /// Every entry of `owner` with the given deleted flag, newest first
    async fn list_entries(&self, owner: Uuid, deleted: bool) -> Result<Vec<JournalEntry>>;

    /// Hide an entry without removing it
    async fn soft_delete_entry(&self, owner: Uuid, id: Uuid) -> Result<()>;

    /// Bring back a soft-deleted entry
    async fn restore_entry(&self, owner: Uuid, id: Uuid) -> Result<()>;
}

/// Bearer token issue and lookup
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Owner of `token`, or `None` when the token is unknown
    async fn authenticate(&self, token: &str) -> Result<Option<Uuid>>;

    /// Create a new token for `owner`; only its digest is kept
    async fn issue_token(&self, owner: Uuid) -> Result<String>;
}

/// SHA-256 hex digest under which a token is stored
pub fn hash_token(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}

/// Random opaque token: two v4 UUIDs without separators
pub fn generate_token() -> String {
    format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple())
}

/// Database connection pool wrapper
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new database instance from configuration
    pub async fn from_config(config: &crate::config::AppConfig) -> Result<Self> {
        let pool_options = sqlx::postgres::PgPoolOptions::new()
            .max_connections(config.max_connections())
            .min_connections(config.min_connections())
            .acquire_timeout(std::time::Duration::from_secs(config.connection_timeout()));

        let pool = pool_options.connect(config.database_url()).await?;

        tracing::info!(
            "Database pool configured: max_connections={}, min_connections={}",
            config.max_connections(),
            config.min_connections()
        );

        Ok(Self::new(pool))
    }

    /// Get a reference to the database pool for raw queries
    #[must_use]
    pub const fn pool(&self) -> &sqlx::PgPool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_token_is_hex_sha256() {
        let digest = hash_token("abc");
        assert_eq!(
            digest,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_generated_tokens_are_unique() {
        let a = generate_token();
        let b = generate_token();
        assert_eq!(a.len(), 64);
        assert_ne!(a, b);
    }
}
