//! API Router configuration

use super::handlers;
use super::state::AppState;
use crate::config::ServerConfig;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Create the main API router
pub fn create_router(state: AppState, server: &ServerConfig) -> Router {
    let router = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/mutant", post(handlers::check_mutant))
        .route("/mutant/", post(handlers::check_mutant))
        .route("/stats", get(handlers::get_stats))
        .route("/stats/", get(handlers::get_stats))
        .layer(DefaultBodyLimit::max(server.max_body_size))
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http());

    let router = if server.enable_cors {
        router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        router
    };

    router.with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use magneto_genome::MutantClassifier;
    use magneto_stats::{
        CounterName, CounterStore, InMemoryCounterStore, Statistic, StatisticsAggregator,
        StatisticsReport,
    };
    use std::sync::Arc;
    use tower::ServiceExt;

    const MUTANT: [&str; 6] = ["ATGCGA", "CAGTGC", "TTATGT", "AGAAGG", "CCCCTA", "TCACTG"];
    const HUMAN: [&str; 6] = ["ATGCGA", "CAGTGC", "TTATTT", "AGACGG", "GCGTCA", "TCACTG"];

    fn test_router_with_store(store: Arc<InMemoryCounterStore>) -> Router {
        let state = AppState::new(
            MutantClassifier::default(),
            Arc::new(StatisticsAggregator::new(store)),
        );
        create_router(state, &ServerConfig::default())
    }

    fn test_router() -> Router {
        test_router_with_store(Arc::new(InMemoryCounterStore::new()))
    }

    async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> StatusCode {
        app.clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
            .status()
    }

    async fn get_stats(app: &Router) -> StatisticsReport {
        let resp = app
            .clone()
            .oneshot(Request::builder().uri("/stats").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn mutant_dna_returns_200() {
        let app = test_router();
        let status = post_json(&app, "/mutant", serde_json::json!({ "dna": MUTANT })).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn human_dna_returns_403() {
        let app = test_router();
        let status = post_json(&app, "/mutant/", serde_json::json!({ "dna": HUMAN })).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn invalid_dna_returns_400_and_is_not_counted() {
        let app = test_router();
        for body in [
            serde_json::json!({}),
            serde_json::json!({ "dna": null }),
            serde_json::json!({ "dna": [] }),
            serde_json::json!({ "dna": ["aaa", "aa", "aaa"] }),
            serde_json::json!({ "dna": ["aaa", null, "aaa"] }),
            serde_json::json!({ "dna": ["atcg", "gcta", "agtc", "agja"] }),
        ] {
            let status = post_json(&app, "/mutant", body.clone()).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
        }

        let report = get_stats(&app).await;
        assert_eq!(report, StatisticsReport::from_counts(0, 0));
    }

    #[tokio::test]
    async fn invalid_dna_error_body() {
        let app = test_router();
        let resp = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/mutant")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"dna": []}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["code"], "INVALID_DNA");
        assert_eq!(json["error"], "Invalid DNA: dna cannot be empty");
        assert_eq!(json["details"]["kind"], "empty");
    }

    #[tokio::test]
    async fn malformed_json_returns_400() {
        let app = test_router();
        let resp = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/mutant")
                    .header("content-type", "application/json")
                    .body(Body::from("{\"dna\": [1, 2"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn verdicts_are_tallied() {
        let app = test_router();
        post_json(&app, "/mutant", serde_json::json!({ "dna": MUTANT })).await;
        post_json(&app, "/mutant", serde_json::json!({ "dna": HUMAN })).await;
        post_json(&app, "/mutant", serde_json::json!({ "dna": HUMAN })).await;
        post_json(&app, "/mutant", serde_json::json!({ "dna": HUMAN })).await;
        post_json(&app, "/mutant", serde_json::json!({ "dna": HUMAN })).await;

        let report = get_stats(&app).await;
        assert_eq!(report.count_mutant_dna, 1);
        assert_eq!(report.count_human_dna, 4);
        assert_eq!(report.ratio, Some(0.25));
    }

    #[tokio::test]
    async fn stats_wire_format() {
        let store = Arc::new(InMemoryCounterStore::new());
        store
            .save_counter(Statistic::new(CounterName::Mutant, 40))
            .await
            .unwrap();
        store
            .save_counter(Statistic::new(CounterName::Human, 100))
            .await
            .unwrap();
        let app = test_router_with_store(store);

        let resp = app
            .oneshot(Request::builder().uri("/stats/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"count_mutant_dna": 40, "count_human_dna": 100, "ratio": 0.4})
        );
    }

    #[tokio::test]
    async fn empty_stats_have_null_ratio() {
        let app = test_router();
        let resp = app
            .oneshot(Request::builder().uri("/stats").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["count_mutant_dna"], 0);
        assert_eq!(json["count_human_dna"], 0);
        assert!(json["ratio"].is_null());
    }

    #[tokio::test]
    async fn health_returns_200() {
        let app = test_router();
        let resp = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
