//! PostgreSQL adapter for the counters.
//!
//! One row per counter in `magneto_statistics`. Rows are created lazily by
//! the first save of each counter.

use crate::model::{CounterName, Statistic};
use crate::traits::CounterStore;
use crate::{StorageError, StorageResult};
use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::Row;
use std::time::Duration;

/// PostgreSQL-backed counter store.
#[derive(Debug, Clone)]
pub struct PostgresCounterStore {
    pool: PgPool,
}

impl PostgresCounterStore {
    /// Connect to PostgreSQL with explicit pool parameters and initialize
    /// the schema.
    pub async fn connect_with_options(
        database_url: &str,
        max_connections: u32,
        connect_timeout_secs: u64,
    ) -> StorageResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(connect_timeout_secs))
            .connect(database_url)
            .await
            .map_err(|e| StorageError::Backend(format!("failed to connect postgres: {e}")))?;
        Self::from_pool(pool).await
    }

    /// Create adapter from an existing pool.
    pub async fn from_pool(pool: PgPool) -> StorageResult<Self> {
        let store = Self { pool };
        store.init_schema().await?;
        Ok(store)
    }

    async fn init_schema(&self) -> StorageResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS magneto_statistics (
                name TEXT PRIMARY KEY,
                amount BIGINT NOT NULL CHECK (amount >= 0),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::Backend(format!("schema init failed: {e}")))?;
        Ok(())
    }
}

#[async_trait]
impl CounterStore for PostgresCounterStore {
    async fn find_counter(&self, name: CounterName) -> StorageResult<Option<Statistic>> {
        let row = sqlx::query("SELECT amount FROM magneto_statistics WHERE name = $1")
            .bind(name.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StorageError::Backend(format!("find counter {name} failed: {e}")))?;

        let Some(row) = row else {
            return Ok(None);
        };
        let amount: i64 = row
            .try_get("amount")
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        Ok(Some(statistic_from_row(name, amount)?))
    }

    async fn save_counter(&self, statistic: Statistic) -> StorageResult<()> {
        let amount = amount_to_bigint(&statistic)?;

        sqlx::query(
            r#"
            INSERT INTO magneto_statistics (name, amount, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (name) DO UPDATE SET
                amount = EXCLUDED.amount,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(statistic.name.as_str())
        .bind(amount)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            StorageError::Backend(format!("save counter {} failed: {e}", statistic.name))
        })?;
        Ok(())
    }
}

/// Convert a stored BIGINT back into a counter. Negative values are corrupt.
fn statistic_from_row(name: CounterName, amount: i64) -> StorageResult<Statistic> {
    let amount = u64::try_from(amount).map_err(|_| {
        StorageError::InvalidData(format!("counter {name} holds negative amount {amount}"))
    })?;
    Ok(Statistic::new(name, amount))
}

fn amount_to_bigint(statistic: &Statistic) -> StorageResult<i64> {
    i64::try_from(statistic.amount).map_err(|_| {
        StorageError::InvalidData(format!(
            "counter {} amount {} exceeds BIGINT",
            statistic.name, statistic.amount
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_amount_round_trips_through_bigint() {
        let stat = statistic_from_row(CounterName::Mutant, 40).unwrap();
        assert_eq!(stat, Statistic::new(CounterName::Mutant, 40));
        assert_eq!(amount_to_bigint(&stat).unwrap(), 40);

        let largest = Statistic::new(CounterName::Human, i64::MAX as u64);
        assert_eq!(amount_to_bigint(&largest).unwrap(), i64::MAX);
    }

    #[test]
    fn test_negative_row_amount_is_invalid_data() {
        let err = statistic_from_row(CounterName::Human, -1).unwrap_err();
        assert!(matches!(err, StorageError::InvalidData(_)));
        assert_eq!(
            err.to_string(),
            "invalid data: counter count_human_dna holds negative amount -1"
        );
    }

    #[test]
    fn test_amount_beyond_bigint_is_invalid_data() {
        let stat = Statistic::new(CounterName::Mutant, i64::MAX as u64 + 1);
        assert!(matches!(
            amount_to_bigint(&stat),
            Err(StorageError::InvalidData(_))
        ));
    }
}
