//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs from the row store and the
//! preference store; the infrastructure layer provides the implementations.

use async_trait::async_trait;

use crate::entities::{Cheer, Pledge};
use crate::error::DomainError;
use crate::projection::FundingSnapshot;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Pledge Repository
// ============================================================================

#[async_trait]
pub trait PledgeRepository: Send + Sync {
    /// Sum all pledge amounts and return the snapshot with its cursor
    ///
    /// An empty collection yields `{ total: 0, cursor: None }`. Null amounts
    /// count as zero at the query level.
    async fn sum_amounts(&self) -> RepoResult<FundingSnapshot>;

    /// Insert a pledge; the store assigns the id and creation timestamp.
    /// Returns the persisted row.
    async fn insert(&self, pledge: &Pledge) -> RepoResult<Pledge>;

    /// List all pledges, oldest first
    async fn list(&self) -> RepoResult<Vec<Pledge>>;
}

// ============================================================================
// Cheer Repository
// ============================================================================

#[async_trait]
pub trait CheerRepository: Send + Sync {
    /// Fetch the most recent `limit` cheers, newest first
    async fn latest(&self, limit: i64) -> RepoResult<Vec<Cheer>>;

    /// Insert a cheer; the store assigns the id and creation timestamp.
    /// Returns the persisted row.
    async fn insert(&self, cheer: &Cheer) -> RepoResult<Cheer>;
}

// ============================================================================
// Preference Store
// ============================================================================

/// Key/value port for the persisted UI preferences (currently just the theme)
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Read a stored preference value
    async fn get(&self, key: &str) -> RepoResult<Option<String>>;

    /// Write a preference value
    async fn set(&self, key: &str, value: &str) -> RepoResult<()>;
}
