//! Machine-facing routes. Records themselves are only reachable through the
//! HTML pages; this is limited to operational endpoints.

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::web::state::WebAppState;

/// Health check response.
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// Health check endpoint handler.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the API router.
pub fn api_routes() -> Router<WebAppState> {
    Router::new().route("/health", get(health))
}
