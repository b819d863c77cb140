use chrono::NaiveDate;

use crate::config::Catalog;
use crate::core::services::error::ServiceError;
use crate::core::session::Session;
use crate::data::{
    parse_input_date, render_sample_types, QueryFlag, RecordDraft, SampleAmount, SampleRecord,
};

/// Names of the entry form's fields, shared with the page renderer.
pub mod fields {
    pub const DATE_RECEIVED: &str = "date_received";
    pub const CLIENT_DETAILS: &str = "client_details";
    /// Repeated once per selected lab.
    pub const LAB: &str = "lab";
    /// Prefix of the per-sample-type amount fields, e.g. `amount.Water`.
    pub const AMOUNT_PREFIX: &str = "amount.";
    pub const QUERY: &str = "query";
    pub const QUERY_DETAILS: &str = "query_details";
    pub const QUERY_RESOLVED: &str = "query_resolved";
}

/// A decoded entry form, before it becomes a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub date_received: NaiveDate,
    pub client_details: String,
    /// One entry per catalog sample type, in catalog order
    pub sample_amounts: Vec<SampleAmount>,
    pub designated_labs: Vec<String>,
    pub query: QueryFlag,
    pub query_details: String,
    pub query_resolved: Option<NaiveDate>,
}

impl Submission {
    /// Decode urlencoded form pairs against the configured catalog.
    ///
    /// Blank text fields become empty strings and a blank received date means
    /// today. Values the form widgets could never produce (negative amounts,
    /// unknown labs, malformed dates) are rejected.
    pub fn from_form_pairs(
        pairs: &[(String, String)],
        catalog: &Catalog,
        today: NaiveDate,
    ) -> Result<Self, ServiceError> {
        let mut date_received = today;
        let mut client_details = String::new();
        let mut sample_amounts: Vec<SampleAmount> = catalog
            .sample_types
            .iter()
            .map(|name| SampleAmount::new(name.clone(), 0))
            .collect();
        let mut designated_labs: Vec<String> = Vec::new();
        let mut query = QueryFlag::No;
        let mut query_details = String::new();
        let mut query_resolved = None;

        for (key, value) in pairs {
            match key.as_str() {
                fields::DATE_RECEIVED => {
                    if !value.trim().is_empty() {
                        date_received = parse_input_date(value).ok_or_else(|| {
                            ServiceError::InvalidInput(format!("Invalid date received: {}", value))
                        })?;
                    }
                }
                fields::CLIENT_DETAILS => client_details = value.trim().to_string(),
                fields::LAB => {
                    let lab = value.trim();
                    if lab.is_empty() {
                        continue;
                    }
                    if !catalog.has_lab(lab) {
                        return Err(ServiceError::InvalidInput(format!("Unknown lab: {}", lab)));
                    }
                    if !designated_labs.iter().any(|l| l == lab) {
                        designated_labs.push(lab.to_string());
                    }
                }
                fields::QUERY => {
                    query = QueryFlag::parse(value).ok_or_else(|| {
                        ServiceError::InvalidInput(format!("Invalid query flag: {}", value))
                    })?;
                }
                fields::QUERY_DETAILS => query_details = value.trim().to_string(),
                fields::QUERY_RESOLVED => {
                    if !value.trim().is_empty() {
                        query_resolved = Some(parse_input_date(value).ok_or_else(|| {
                            ServiceError::InvalidInput(format!("Invalid resolution date: {}", value))
                        })?);
                    }
                }
                other => {
                    if let Some(name) = other.strip_prefix(fields::AMOUNT_PREFIX) {
                        let slot = sample_amounts
                            .iter_mut()
                            .find(|a| a.name == name)
                            .ok_or_else(|| {
                                ServiceError::InvalidInput(format!("Unknown sample type: {}", name))
                            })?;
                        slot.count = parse_amount(name, value)?;
                    } else {
                        tracing::debug!(field = %other, "Ignoring unexpected form field");
                    }
                }
            }
        }

        Ok(Self {
            date_received,
            client_details,
            sample_amounts,
            designated_labs,
            query,
            query_details,
            query_resolved,
        })
    }
}

fn parse_amount(name: &str, raw: &str) -> Result<u32, ServiceError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }
    raw.parse::<u32>().map_err(|_| {
        ServiceError::InvalidInput(format!(
            "Amount for {} must be a non-negative whole number, got {}",
            name, raw
        ))
    })
}

pub struct EntryService;

impl EntryService {
    /// Turn a submission into a record in `session`.
    ///
    /// Zero amounts are dropped, labs are joined, query fields are discarded
    /// when the flag is `No`, and exactly one tracking number is minted.
    pub fn submit(session: &mut Session, submission: Submission) -> SampleRecord {
        let (query_details, query_resolved) = match submission.query {
            QueryFlag::Yes => (submission.query_details, submission.query_resolved),
            QueryFlag::No => (String::new(), None),
        };

        let draft = RecordDraft {
            date_received: submission.date_received,
            client_details: submission.client_details,
            designated_labs: submission.designated_labs.join(", "),
            sample_types: render_sample_types(&submission.sample_amounts),
            query: submission.query,
            query_details,
            query_resolved,
        };

        let record = session.create_record(draft).clone();
        tracing::info!(
            session_id = %session.id(),
            tracking_number = %record.tracking_number(),
            "Sample recorded"
        );
        record
    }
}
