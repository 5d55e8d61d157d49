//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Promo, StepTemplate, SyncReport};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Promo Repository
// ============================================================================

#[async_trait]
pub trait PromoRepository: Send + Sync {
    /// Replace every promo, étape and sous-étape with a fresh set built from
    /// `promos` and `plan`, then close the workflow of finished promos.
    ///
    /// Runs as a single transaction: on error nothing is changed.
    async fn replace_all(&self, promos: &[Promo], plan: &[StepTemplate])
        -> RepoResult<SyncReport>;

    /// All stored promos, in insertion order
    async fn find_all(&self) -> RepoResult<Vec<Promo>>;

    /// Number of promos currently stored
    async fn count(&self) -> RepoResult<i64>;
}
