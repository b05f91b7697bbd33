//! Magneto classification statistics.
//!
//! Verdicts are tallied into two named counters, `count_mutant_dna` and
//! `count_human_dna`. Storage is reached through the narrow [`CounterStore`]
//! contract so the aggregator runs unchanged against:
//! - [`InMemoryCounterStore`] for development and tests
//! - `PostgresCounterStore` (feature `postgres`) as the durable backend
//!
//! [`StatisticsAggregator`] owns every counter mutation and serializes the
//! read-modify-write of each counter, so concurrent requests never lose an
//! increment.

#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]

mod aggregator;
mod error;
pub mod memory;
mod model;
#[cfg(feature = "postgres")]
pub mod postgres;
mod traits;

pub use aggregator::StatisticsAggregator;
pub use error::{StorageError, StorageResult};
pub use memory::InMemoryCounterStore;
pub use model::{CounterName, Statistic, StatisticsReport};
#[cfg(feature = "postgres")]
pub use postgres::PostgresCounterStore;
pub use traits::CounterStore;
