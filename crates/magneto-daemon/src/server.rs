//! Server setup and lifecycle management

use crate::api::create_router;
use crate::api::rest::state::AppState;
use crate::config::{DaemonConfig, StorageConfig};
use crate::error::{DaemonError, DaemonResult};
use axum::Router;
use magneto_genome::MutantClassifier;
use magneto_stats::{CounterStore, InMemoryCounterStore, StatisticsAggregator};
use std::sync::Arc;
use tokio::net::TcpListener;

/// Magneto Daemon Server
pub struct Server {
    config: DaemonConfig,
    classifier: MutantClassifier,
    statistics: Arc<StatisticsAggregator>,
}

impl Server {
    /// Create a new server with the given configuration
    pub async fn new(config: DaemonConfig) -> DaemonResult<Self> {
        let classifier = config
            .detection
            .classifier()
            .map_err(|e| DaemonError::Config(e.to_string()))?;
        let store = build_store(&config.storage).await?;
        let statistics = Arc::new(StatisticsAggregator::new(store));

        Ok(Self {
            config,
            classifier,
            statistics,
        })
    }

    /// Router serving this server's state
    pub fn router(&self) -> Router {
        let state = AppState::new(self.classifier, self.statistics.clone());
        create_router(state, &self.config.server)
    }

    /// Run the server
    pub async fn run(self) -> DaemonResult<()> {
        let addr = self.config.server.listen_addr;
        let app = self.router();

        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Magneto daemon listening on {}", addr);
        tracing::info!(min_run = self.classifier.min_run(), "Detection configured");

        // Run server with graceful shutdown
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| DaemonError::Server(e.to_string()))?;

        tracing::info!("Magneto daemon shutting down");
        Ok(())
    }
}

async fn build_store(config: &StorageConfig) -> DaemonResult<Arc<dyn CounterStore>> {
    match config {
        StorageConfig::Memory => {
            tracing::info!("Using in-memory counter storage");
            Ok(Arc::new(InMemoryCounterStore::new()))
        }
        #[cfg(feature = "postgres")]
        StorageConfig::Postgres {
            url,
            max_connections,
            connect_timeout_secs,
        } => {
            tracing::info!("Using PostgreSQL counter storage");
            let store = magneto_stats::PostgresCounterStore::connect_with_options(
                url,
                *max_connections,
                *connect_timeout_secs,
            )
            .await?;
            Ok(Arc::new(store))
        }
        #[cfg(not(feature = "postgres"))]
        StorageConfig::Postgres { .. } => Err(DaemonError::Config(
            "postgres storage requires the `postgres` feature".to_string(),
        )),
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::warn!("Failed to install terminate handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal, initiating graceful shutdown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_memory_server_serves_stats() {
        let server = Server::new(DaemonConfig::default()).await.unwrap();
        let resp = server
            .router()
            .oneshot(Request::builder().uri("/stats").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_min_run_reaches_classifier() {
        let mut config = DaemonConfig::default();
        config.detection.min_run = 3;
        let server = Server::new(config).await.unwrap();

        let resp = server
            .router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/mutant")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"dna": ["aaa", "tcg", "gct"]}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_degenerate_min_run_is_rejected() {
        let mut config = DaemonConfig::default();
        config.detection.min_run = 1;
        assert!(matches!(
            Server::new(config).await,
            Err(DaemonError::Config(_))
        ));
    }
}
