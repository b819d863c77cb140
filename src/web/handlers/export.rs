//! Spreadsheet download.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::export::{encode_records, XLSX_CONTENT_TYPE};
use crate::web::error::WebError;
use crate::web::state::WebAppState;

/// Encode every record of the session as an `.xlsx` attachment.
pub async fn export_workbook(
    State(state): State<WebAppState>,
    jar: CookieJar,
) -> Result<Response, WebError> {
    let (jar, session_id) = state.resolve_session(jar);
    let settings = &state.config().export;

    let (count, bytes) = state.with_session(session_id, |session| {
        let records = session.records();
        (
            records.len(),
            encode_records(records.as_slice(), &settings.sheet_name),
        )
    })?;
    let bytes = bytes?;

    tracing::info!(session_id = %session_id, records = count, "Exported workbook");

    let disposition = format!(
        "attachment; filename=\"{}\"",
        settings.file_name.replace(['"', '\\'], "_")
    );
    Ok((
        jar,
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}
