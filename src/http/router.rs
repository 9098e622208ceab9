//! Router configuration for the HTTP API.

use super::handlers;
use super::state::AppState;
use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // Any origin may call the API; browsers only need GET/POST and a JSON body.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let api = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/chiron", post(handlers::compute_reading));

    Router::new()
        .route("/", get(handlers::index))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
