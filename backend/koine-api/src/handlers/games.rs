use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::{
    extractors::ValidJson,
    models::{
        game::{GameQuestionsResponse, QuestionsQuery, SubmitAnswerRequest},
        stats::GameStatsResponse,
    },
    services::{game_service::GameError, game_service::GameService, AppState},
};

fn game_error_response(e: GameError) -> (StatusCode, String) {
    let status = match &e {
        GameError::UnknownGame(_) | GameError::UnknownQuestion { .. } => StatusCode::NOT_FOUND,
        GameError::Stats(_) => {
            tracing::error!("Failed to record answer: {}", e);
            StatusCode::SERVICE_UNAVAILABLE
        }
    };
    (status, e.to_string())
}

/// GET /api/v1/games/{game_id}/questions?shuffle=true
pub async fn get_questions(
    Path(game_id): Path<String>,
    Query(query): Query<QuestionsQuery>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let questions = if query.shuffle {
        GameService::shuffled_questions(&game_id)
    } else {
        GameService::questions(&game_id)
    }
    .map_err(game_error_response)?;

    Ok(Json(GameQuestionsResponse { game_id, questions }))
}

/// POST /api/v1/games/{game_id}/answers - grade and record one answer
pub async fn submit_answer(
    State(state): State<Arc<AppState>>,
    Path(game_id): Path<String>,
    ValidJson(req): ValidJson<SubmitAnswerRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    tracing::info!("Submitting answer for game {}: {}", game_id, req.question);

    let mut stats = state.stats();
    let response = GameService::submit_answer(&mut stats, &game_id, &req.question, &req.selections)
        .map_err(game_error_response)?;

    Ok((StatusCode::OK, Json(response)))
}

/// GET /api/v1/games/{game_id}/stats - counters of one game keyed by question
pub async fn get_game_stats(
    State(state): State<Arc<AppState>>,
    Path(game_id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    GameService::questions(&game_id).map_err(game_error_response)?;

    let stats = state.stats().stats_for_game(&game_id);
    Ok(Json(GameStatsResponse { game_id, stats }))
}
