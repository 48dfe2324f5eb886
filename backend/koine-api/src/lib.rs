use axum::{
    http::{header, Method},
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod data;
pub mod extractors;
pub mod handlers;
pub mod metrics;
pub mod middlewares;
pub mod models;
pub mod services;
pub mod views;

pub use config::Config;
pub use services::AppState;

pub fn create_router(app_state: Arc<AppState>) -> Router {
    // The navigation shell is served from another origin during development
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_origin(tower_http::cors::Any);

    Router::new()
        .route("/health", get(handlers::health_check))
        // Metrics endpoint with Basic Auth protection
        .route(
            "/metrics",
            get(handlers::metrics_handler).layer(middleware::from_fn_with_state(
                app_state.clone(),
                handlers::metrics_auth_middleware,
            )),
        )
        .nest("/api/v1", api_routes().layer(cors))
        .with_state(app_state)
        .layer(middleware::from_fn(
            middlewares::metrics::metrics_middleware,
        ))
        .layer(middleware::from_fn(
            middlewares::trace::trace_context_middleware,
        ))
        .layer(TraceLayer::new_for_http())
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/views", get(handlers::views::list_views))
        .route("/views/{slug}", get(handlers::views::get_view))
        .route("/vocabulary", get(handlers::vocabulary::list_vocabulary))
        .route(
            "/games/{game_id}/questions",
            get(handlers::games::get_questions),
        )
        .route(
            "/games/{game_id}/answers",
            post(handlers::games::submit_answer),
        )
        .route("/games/{game_id}/stats", get(handlers::games::get_game_stats))
        .route("/stats", get(handlers::stats::get_stats))
        .route("/stats/outcomes", post(handlers::stats::record_outcome))
}
