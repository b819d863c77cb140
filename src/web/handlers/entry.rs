//! Entry form handlers: the index page and sample submission.

use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
    Form,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::core::services::{EntryService, Submission};
use crate::core::today;
use crate::web::error::WebError;
use crate::web::html::{render_index, IndexView};
use crate::web::state::WebAppState;

/// Query string of the index page.
#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    /// Tracking number minted by the submission that redirected here
    pub added: Option<String>,
}

/// Render the entry form, the records table and the review panel.
pub async fn index(
    State(state): State<WebAppState>,
    jar: CookieJar,
    Query(query): Query<IndexQuery>,
) -> Result<(CookieJar, Html<String>), WebError> {
    let (jar, session_id) = state.resolve_session(jar);
    let catalog = &state.config().catalog;
    let today = today();

    let page = state.with_session(session_id, |session| {
        render_index(&IndexView {
            catalog,
            records: session.records().as_slice(),
            added: query.added.as_deref(),
            today,
        })
    })?;

    Ok((jar, Html(page)))
}

/// Record a submitted sample and redirect back to the page with a banner.
pub async fn submit_sample(
    State(state): State<WebAppState>,
    jar: CookieJar,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Redirect, WebError> {
    let session_id = state.require_session(&jar)?;
    let submission = Submission::from_form_pairs(&pairs, &state.config().catalog, today())?;

    let record = state.with_session(session_id, |session| {
        EntryService::submit(session, submission)
    })?;

    let location = format!("/?added={}", record.tracking_number());
    Ok(Redirect::to(&location))
}
