use crate::model::{CounterName, Statistic};
use crate::StorageResult;
use async_trait::async_trait;

/// Key-value access to the named counters.
///
/// Implementations only need plain get/put semantics; atomicity of an
/// increment is provided by [`StatisticsAggregator`](crate::StatisticsAggregator).
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Get a counter, `None` if it has never been saved.
    async fn find_counter(&self, name: CounterName) -> StorageResult<Option<Statistic>>;

    /// Create or overwrite a counter.
    async fn save_counter(&self, statistic: Statistic) -> StorageResult<()>;
}
