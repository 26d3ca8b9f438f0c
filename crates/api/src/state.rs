use std::sync::Arc;

use signage_core::wizard::WizardStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: signage_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Parked frame-creation wizard selections.
    pub wizard: Arc<WizardStore>,
}

impl AppState {
    pub fn new(pool: signage_db::DbPool, config: ServerConfig) -> Self {
        let wizard = Arc::new(WizardStore::new(config.wizard_ttl()));
        Self {
            pool,
            config: Arc::new(config),
            wizard,
        }
    }
}
