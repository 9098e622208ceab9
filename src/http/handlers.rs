//! HTTP handlers for the REST API.

use super::dto::HealthResponse;
use super::error::AppError;
use super::state::AppState;
use crate::domain::model::{BirthInput, Reading};
use axum::{extract::State, response::Html, Json};

const INDEX_HTML: &str = include_str!("static/index.html");

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /api/health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "chiron-oracle".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        time: chrono::Utc::now().timestamp(),
    })
}

/// POST /api/chiron
///
/// Computes one reading from the birth data in the body.
pub async fn compute_reading(
    State(state): State<AppState>,
    Json(input): Json<BirthInput>,
) -> HandlerResult<Reading> {
    tracing::info!(
        "🔮 Reading request: {:04}-{:02}-{:02} hour {} ({})",
        input.year,
        input.month,
        input.day,
        input.hour,
        input.timezone
    );
    let reading = state.engine.compute(&input).await?;
    Ok(Json(reading))
}
