//! DNA classification handler.

use crate::api::rest::state::AppState;
use crate::error::{ApiError, ApiResult};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

/// Body of `POST /mutant`.
///
/// Both the list and its rows are optional on the wire so that absent input
/// is reported by the validator rather than by the JSON extractor.
#[derive(Debug, Deserialize)]
pub struct DnaRequest {
    #[serde(default)]
    pub dna: Option<Vec<Option<String>>>,
}

/// Classify a DNA grid and tally the verdict.
///
/// Responds `200 OK` for a mutant and `403 Forbidden` for a human. Invalid
/// grids are rejected before anything is counted.
pub async fn check_mutant(
    State(state): State<AppState>,
    payload: Result<Json<DnaRequest>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Json(request) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    let detection = state.classifier.classify(request.dna.as_deref())?;
    match &detection {
        Some(hit) => tracing::debug!(direction = ?hit.direction, start = ?hit.start, "mutant dna"),
        None => tracing::debug!("human dna"),
    }

    let is_mutant = detection.is_some();
    state.statistics.record_result(is_mutant).await?;

    Ok(if is_mutant {
        StatusCode::OK
    } else {
        StatusCode::FORBIDDEN
    })
}
