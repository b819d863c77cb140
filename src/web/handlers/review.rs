//! Review panel handler: post-submission edits to a single record.

use axum::{
    extract::{Path, State},
    response::Redirect,
    Form,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::core::services::{RecordEdit, ReviewService};
use crate::core::today;
use crate::web::error::WebError;
use crate::web::state::WebAppState;

/// Fields posted by a record's edit region.
#[derive(Debug, Default, Deserialize)]
pub struct EditForm {
    pub analyst_id: Option<String>,
    pub date_collected: Option<String>,
}

impl From<EditForm> for RecordEdit {
    fn from(form: EditForm) -> Self {
        RecordEdit {
            analyst_id: form.analyst_id,
            date_collected: form.date_collected,
        }
    }
}

/// Apply an edit and return to the record's edit region.
pub async fn update_sample(
    State(state): State<WebAppState>,
    jar: CookieJar,
    Path(tracking_number): Path<String>,
    Form(form): Form<EditForm>,
) -> Result<Redirect, WebError> {
    let session_id = state.require_session(&jar)?;
    let policy = state.config().review.invalid_date;

    state.with_session(session_id, |session| {
        ReviewService::apply_edit(session, &tracking_number, form.into(), policy, today())
    })??;

    Ok(Redirect::to(&format!("/#{}", tracking_number)))
}
