use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

use crate::{
    extractors::ValidJson,
    models::stats::{RecordOutcomeRequest, RecordOutcomeResponse},
    services::{performance_stats::build_stat_key, AppState},
};

/// GET /api/v1/stats - the full persisted mapping
pub async fn get_stats(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.stats().load_answer_stats())
}

/// POST /api/v1/stats/outcomes - record an outcome graded by the client
pub async fn record_outcome(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<RecordOutcomeRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let result = state
        .stats()
        .record_outcome(&req.game_id, &req.question, req.was_correct);

    match result {
        Ok(stat) => Ok((
            StatusCode::OK,
            Json(RecordOutcomeResponse {
                key: build_stat_key(&req.game_id, &req.question),
                stat,
            }),
        )),
        Err(e) => {
            tracing::error!("Failed to record outcome: {}", e);
            Err((StatusCode::SERVICE_UNAVAILABLE, e.to_string()))
        }
    }
}
