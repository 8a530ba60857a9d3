use std::sync::Arc;

use tracing::info;

use crate::adapter::assistant::keyword::KeywordResponder;
use crate::adapter::catalog::static_catalog::StaticRecommendationCatalog;
use crate::adapter::crypto::demo::DemoCredentialVerifier;
use crate::adapter::notify::toast::ToastQueue;
use crate::adapter::storage::file::FileStore;
use crate::adapter::storage::memory::MemoryStore;
use crate::application::interface::storage::KeyValueStore;
use crate::infra::config::{AppConfig, StorageProvider};
use crate::infra::state::AppState;

pub mod app;
pub mod config;
pub mod setup;
pub mod state;

fn init_store(config: &AppConfig) -> anyhow::Result<Arc<dyn KeyValueStore>> {
    let store: Arc<dyn KeyValueStore> = match config.storage.provider {
        StorageProvider::Memory => Arc::new(MemoryStore::new()),
        StorageProvider::File => {
            info!("Using local storage file {}", config.storage.path);
            Arc::new(FileStore::open(&config.storage.path)?)
        }
    };
    Ok(store)
}

pub fn init_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    Ok(AppState {
        config: Arc::new(config.clone()),
        store: init_store(config)?,
        verifier: Arc::new(DemoCredentialVerifier::from_config(&config.auth)),
        toasts: ToastQueue::new(),
        responder: Arc::new(KeywordResponder::from_config(&config.assistant)),
        catalog: Arc::new(StaticRecommendationCatalog::default()),
    })
}
