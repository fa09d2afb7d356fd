//! Port traits for infrastructure boundaries.
//!
//! The engine is concrete almost everywhere; the one abstraction is the
//! party roster store, which callers inject so the analyzer surface never
//! depends on a particular persistence technology (the roster started
//! life in browser local storage and may move again).

use async_trait::async_trait;

use bg3companion_domain::PartyMember;

// =============================================================================
// Error Types
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Not found")]
    NotFound,
    #[error("Database error: {0}")]
    Database(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RepoError {
    /// Wrap a database error with the repository it came from.
    pub fn database(context: &str, err: impl std::fmt::Display) -> Self {
        Self::Database(format!("{context}: {err}"))
    }
}

// =============================================================================
// Ports
// =============================================================================

/// Storage for the party roster.
///
/// `load` returns an empty roster when nothing has been saved yet; `save`
/// replaces the stored roster wholesale.
#[async_trait]
pub trait PartyRepo: Send + Sync {
    async fn load(&self) -> Result<Vec<PartyMember>, RepoError>;
    async fn save(&self, roster: &[PartyMember]) -> Result<(), RepoError>;
}
