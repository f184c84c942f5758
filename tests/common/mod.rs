#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use linkcode::application::services::{DynShortenerService, ShortenerService};
use linkcode::domain::entities::Link;
use linkcode::domain::repositories::{LinkStore, StoreError};
use linkcode::infrastructure::persistence::MemoryLinkStore;
use linkcode::routes::router;
use linkcode::state::AppState;
use linkcode::utils::code_generator::{CodeGenerator, RandomCodeGenerator};
use std::sync::Arc;

pub const BASE_URL: &str = "http://sho.rt";

/// Store whose backend is permanently unreachable.
pub struct DownStore;

#[async_trait]
impl LinkStore for DownStore {
    async fn put(&self, _code: &str, _target: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    async fn get(&self, _code: &str) -> Result<Option<Link>, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }
}

pub fn create_test_state() -> AppState {
    create_state_with(
        Arc::new(MemoryLinkStore::new()),
        Arc::new(RandomCodeGenerator::new()),
        5,
    )
}

pub fn create_down_state() -> AppState {
    create_state_with(
        Arc::new(DownStore),
        Arc::new(RandomCodeGenerator::new()),
        5,
    )
}

pub fn create_state_with(
    store: Arc<dyn LinkStore>,
    generator: Arc<dyn CodeGenerator>,
    max_attempts: usize,
) -> AppState {
    let shortener: DynShortenerService =
        ShortenerService::new(store, generator).with_max_attempts(max_attempts);
    AppState::new(Arc::new(shortener), BASE_URL)
}

/// Store that already holds `links`.
pub async fn seeded_store(links: &[(&str, &str)]) -> Arc<MemoryLinkStore> {
    let store = Arc::new(MemoryLinkStore::new());
    for (code, target) in links {
        store.put(code, target).await.unwrap();
    }
    store
}

pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(router(state)).unwrap()
}
