//! In-memory implementation of the link store.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::domain::entities::Link;
use crate::domain::repositories::{LinkStore, StoreError};

/// Process-lifetime link store backed by [`DashMap`].
///
/// DashMap shards its locks, so requests touching different codes rarely
/// contend. Inserts go through the entry API, which holds the shard lock
/// across the existence check and the write; two racing `put` calls for the
/// same code cannot both succeed.
///
/// Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryLinkStore {
    links: DashMap<String, Link>,
}

impl MemoryLinkStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            links: DashMap::new(),
        }
    }
}

#[async_trait]
impl LinkStore for MemoryLinkStore {
    async fn put(&self, code: &str, target: &str) -> Result<(), StoreError> {
        match self.links.entry(code.to_owned()) {
            Entry::Occupied(_) => Err(StoreError::AlreadyExists(code.to_owned())),
            Entry::Vacant(slot) => {
                slot.insert(Link::new(code.to_owned(), target.to_owned(), Utc::now()));
                Ok(())
            }
        }
    }

    async fn get(&self, code: &str) -> Result<Option<Link>, StoreError> {
        Ok(self.links.get(code).map(|entry| entry.value().clone()))
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.links.len() as u64)
    }
}
