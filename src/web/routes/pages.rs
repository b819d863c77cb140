//! Routes for the human-facing form, review panel and export.

use axum::{
    routing::{get, post},
    Router,
};

use crate::web::handlers::{entry, export, review};
use crate::web::state::WebAppState;

/// Build the router for the browser pages.
pub fn page_routes() -> Router<WebAppState> {
    Router::new()
        .route("/", get(entry::index))
        .route("/samples", post(entry::submit_sample))
        .route("/samples/{tracking_number}", post(review::update_sample))
        .route("/export", get(export::export_workbook))
}
