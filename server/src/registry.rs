//! Process-wide table directory. Tables are created lazily on first
//! reference and live for the lifetime of the process; there is no explicit
//! teardown path since idle tables cost one task and an empty `Game`.

use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;

use crate::ports::{AuditPort, BusPort, CachePort, SocketPort};
use crate::table::{self, TableHandle};

pub struct Registry {
    tables: DashMap<String, TableHandle>,
    min_bet: u32,
    lock_lease: Duration,
    cache: Arc<dyn CachePort>,
    bus: Arc<dyn BusPort>,
    audit: Arc<dyn AuditPort>,
    sockets: Arc<dyn SocketPort>,
}

impl Registry {
    pub fn new(
        min_bet: u32,
        lock_lease: Duration,
        cache: Arc<dyn CachePort>,
        bus: Arc<dyn BusPort>,
        audit: Arc<dyn AuditPort>,
        sockets: Arc<dyn SocketPort>,
    ) -> Self {
        Registry {
            tables: DashMap::new(),
            min_bet,
            lock_lease,
            cache,
            bus,
            audit,
            sockets,
        }
    }

    /// Returns the handle for `table_id`, spawning a fresh table engine the
    /// first time it is referenced.
    pub fn get_or_create(&self, table_id: &str) -> TableHandle {
        if let Some(handle) = self.tables.get(table_id) {
            return handle.clone();
        }

        let handle = table::spawn(
            table_id.to_string(),
            self.min_bet,
            self.cache.clone(),
            self.bus.clone(),
            self.audit.clone(),
            self.sockets.clone(),
            self.lock_lease,
        );
        self.tables
            .entry(table_id.to_string())
            .or_insert(handle)
            .clone()
    }

    pub fn get(&self, table_id: &str) -> Option<TableHandle> {
        self.tables.get(table_id).map(|h| h.clone())
    }

    pub fn table_ids(&self) -> Vec<String> {
        self.tables.iter().map(|e| e.key().clone()).collect()
    }
}
