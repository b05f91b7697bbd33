//! Tallying of classification verdicts.

use crate::model::{CounterName, Statistic, StatisticsReport};
use crate::traits::CounterStore;
use crate::StorageResult;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Owns the mutant and human counters.
///
/// Each counter has its own lock, held across the find and save of an
/// increment. Increments of different counters do not wait on each other.
pub struct StatisticsAggregator {
    store: Arc<dyn CounterStore>,
    mutant_lock: Mutex<()>,
    human_lock: Mutex<()>,
}

impl StatisticsAggregator {
    pub fn new(store: Arc<dyn CounterStore>) -> Self {
        Self {
            store,
            mutant_lock: Mutex::new(()),
            human_lock: Mutex::new(()),
        }
    }

    fn lock_for(&self, name: CounterName) -> &Mutex<()> {
        match name {
            CounterName::Mutant => &self.mutant_lock,
            CounterName::Human => &self.human_lock,
        }
    }

    /// Add one to the counter matching the verdict and return its new value.
    pub async fn record_result(&self, is_mutant: bool) -> StorageResult<Statistic> {
        let name = CounterName::for_verdict(is_mutant);
        let _guard = self.lock_for(name).lock().await;

        let updated = match self.store.find_counter(name).await? {
            Some(current) => current.incremented()?,
            None => Statistic::new(name, 1),
        };
        self.store.save_counter(updated).await?;

        tracing::debug!(counter = %name, amount = updated.amount, "counter incremented");
        Ok(updated)
    }

    /// Current totals, with missing counters read as zero.
    pub async fn current_statistics(&self) -> StorageResult<StatisticsReport> {
        let mutant = self.amount(CounterName::Mutant).await?;
        let human = self.amount(CounterName::Human).await?;
        Ok(StatisticsReport::from_counts(mutant, human))
    }

    async fn amount(&self, name: CounterName) -> StorageResult<u64> {
        Ok(self
            .store
            .find_counter(name)
            .await?
            .map_or(0, |stat| stat.amount))
    }
}
