//! In-memory counter store.
//!
//! Counters live for the lifetime of the process. Deployments that need
//! counters to survive restarts should use the PostgreSQL adapter.

use crate::model::{CounterName, Statistic};
use crate::traits::CounterStore;
use crate::StorageResult;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory counter store for development and testing.
#[derive(Debug, Default)]
pub struct InMemoryCounterStore {
    counters: RwLock<HashMap<CounterName, u64>>,
}

impl InMemoryCounterStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CounterStore for InMemoryCounterStore {
    async fn find_counter(&self, name: CounterName) -> StorageResult<Option<Statistic>> {
        let counters = self.counters.read().await;
        Ok(counters
            .get(&name)
            .map(|&amount| Statistic::new(name, amount)))
    }

    async fn save_counter(&self, statistic: Statistic) -> StorageResult<()> {
        let mut counters = self.counters.write().await;
        counters.insert(statistic.name, statistic.amount);
        Ok(())
    }
}
