use axum::{extract::Path, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::views::{find_view_by_slug, view_routes};

/// GET /api/v1/views - route table for the navigation menu
pub async fn list_views() -> impl IntoResponse {
    Json(json!({ "views": view_routes() }))
}

/// GET /api/v1/views/{slug} - a single view, `home` for `/`
pub async fn get_view(Path(slug): Path<String>) -> Result<impl IntoResponse, (StatusCode, String)> {
    find_view_by_slug(&slug)
        .map(Json)
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("View not found: {}", slug)))
}
