pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod routing;
pub mod services;
pub mod storage;
pub mod utils;

use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::routing::navigator::{LocationNavigator, Navigator};
use crate::services::api_client::ApiClient;
use crate::services::store::Store;
use crate::storage::{FileStorage, Storage};

/// Wires the client together: durable storage, navigator, HTTP adapter and
/// the store, all sharing the same handles. Nothing here is a global; embed
/// it wherever the UI shell keeps its context.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub navigator: Arc<dyn Navigator>,
    pub api: ApiClient,
    pub store: Store,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self> {
        let storage: Arc<dyn Storage> = Arc::new(FileStorage::new(&config.storage_dir)?);
        let navigator: Arc<dyn Navigator> = Arc::new(LocationNavigator::new());
        Self::with_parts(config, storage, navigator)
    }

    /// Same wiring with injected storage and navigator; tests swap in
    /// in-memory implementations here.
    pub fn with_parts(
        config: &Config,
        storage: Arc<dyn Storage>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self> {
        let api = ApiClient::new(config, storage.clone(), navigator.clone())?;
        let store = Store::new(api.clone(), storage.clone());
        Ok(Self {
            storage,
            navigator,
            api,
            store,
        })
    }
}
