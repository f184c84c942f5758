//! Store trait for short code → URL mappings.

use crate::domain::entities::Link;
use async_trait::async_trait;

/// Errors reported by a [`LinkStore`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The code is already mapped; the existing entry was left untouched.
    #[error("short code already exists: {0}")]
    AlreadyExists(String),

    /// The backing storage could not complete the operation.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Persistence interface for short links.
///
/// Entries are insert-only: a code is written once and never overwritten or
/// removed. Implementations must be safe to call from many concurrent
/// requests, and `put` must behave like a compare-and-swap on the code so that
/// exactly one of several racing writers for the same code succeeds.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryLinkStore`] - process-lifetime map
/// - [`crate::infrastructure::persistence::PgLinkStore`] - PostgreSQL table
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Stores `target` under `code`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AlreadyExists`] if `code` is already mapped.
    /// Returns [`StoreError::Unavailable`] on backend failures.
    async fn put(&self, code: &str, target: &str) -> Result<(), StoreError>;

    /// Looks up the link stored under `code`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] on backend failures.
    async fn get(&self, code: &str) -> Result<Option<Link>, StoreError>;

    /// Counts stored links.
    async fn count(&self) -> Result<u64, StoreError>;

    /// Checks that the backend is reachable.
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
