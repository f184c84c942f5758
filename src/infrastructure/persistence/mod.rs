//! Link store implementations.
//!
//! - [`MemoryLinkStore`] - Concurrent in-memory map, lost on restart
//! - [`PgLinkStore`] - PostgreSQL table via SQLx

pub mod memory_link_store;
pub mod pg_link_store;

pub use memory_link_store::MemoryLinkStore;
pub use pg_link_store::PgLinkStore;
