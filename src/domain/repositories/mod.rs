//! Store trait definitions for the domain layer.
//!
//! The traits here abstract data access so the shortener can run on top of an
//! in-memory map or a durable database without changes.
//!
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing

pub mod link_store;

pub use link_store::{LinkStore, StoreError};

#[cfg(test)]
pub use link_store::MockLinkStore;
