//! Process-wide application state shared across HTTP and WebSocket handlers.

use std::sync::Arc;

use crate::config::Config;
use crate::ports::audit::JsonlAuditLog;
use crate::ports::memory::{InMemoryBus, InMemoryCache, InMemorySocketSet};
use crate::registry::Registry;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Registry>,
    pub sockets: Arc<InMemorySocketSet>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let sockets = Arc::new(InMemorySocketSet::new());
        let cache = Arc::new(InMemoryCache::new());
        let bus = Arc::new(InMemoryBus::new());
        let audit = Arc::new(JsonlAuditLog::new(config.audit_log_path.clone()));

        let registry = Arc::new(Registry::new(
            config.min_bet,
            config.lock_lease(),
            cache,
            bus,
            audit,
            sockets.clone(),
        ));

        AppState { registry, sockets }
    }
}
