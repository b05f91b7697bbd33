use crate::{StorageError, StorageResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two counters kept by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CounterName {
    Mutant,
    Human,
}

impl CounterName {
    /// Counter that tallies a verdict.
    pub fn for_verdict(is_mutant: bool) -> Self {
        if is_mutant {
            CounterName::Mutant
        } else {
            CounterName::Human
        }
    }

    /// Storage key.
    pub fn as_str(&self) -> &'static str {
        match self {
            CounterName::Mutant => "count_mutant_dna",
            CounterName::Human => "count_human_dna",
        }
    }
}

impl fmt::Display for CounterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named, persisted tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statistic {
    pub name: CounterName,
    pub amount: u64,
}

impl Statistic {
    pub fn new(name: CounterName, amount: u64) -> Self {
        Self { name, amount }
    }

    /// The same counter, one higher.
    pub fn incremented(self) -> StorageResult<Self> {
        let amount = self.amount.checked_add(1).ok_or_else(|| {
            StorageError::InvariantViolation(format!("counter {} overflowed", self.name))
        })?;
        Ok(Self { amount, ..self })
    }
}

/// Read-only view of the counters.
///
/// `ratio` is mutant over human and is only defined when both counts are
/// positive; it serializes as `null` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatisticsReport {
    pub count_mutant_dna: u64,
    pub count_human_dna: u64,
    pub ratio: Option<f64>,
}

impl StatisticsReport {
    pub fn from_counts(count_mutant_dna: u64, count_human_dna: u64) -> Self {
        let ratio = (count_mutant_dna > 0 && count_human_dna > 0)
            .then(|| count_mutant_dna as f64 / count_human_dna as f64);
        Self {
            count_mutant_dna,
            count_human_dna,
            ratio,
        }
    }
}
