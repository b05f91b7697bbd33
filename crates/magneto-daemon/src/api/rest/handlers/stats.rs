use crate::api::rest::state::AppState;
use crate::error::ApiResult;
use axum::{extract::State, Json};
use magneto_stats::StatisticsReport;

/// Current mutant and human totals with their ratio.
pub async fn get_stats(State(state): State<AppState>) -> ApiResult<Json<StatisticsReport>> {
    let report = state.statistics.current_statistics().await?;
    Ok(Json(report))
}
