use chrono::NaiveDate;

use crate::config::InvalidDatePolicy;
use crate::core::services::error::ServiceError;
use crate::core::session::Session;
use crate::data::{parse_input_date, SampleRecord};

/// Field changes submitted from a record's edit region.
///
/// `None` leaves a field alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordEdit {
    pub analyst_id: Option<String>,
    pub date_collected: Option<String>,
}

pub struct ReviewService;

impl ReviewService {
    /// Value the collected-date control starts with: the stored date, or today
    /// when none has been recorded.
    pub fn collected_date_or_today(record: &SampleRecord, today: NaiveDate) -> NaiveDate {
        record.date_collected().unwrap_or(today)
    }

    /// Write `edit` to the record carrying `tracking_number`.
    ///
    /// The record is only touched once every submitted value has been
    /// resolved, so a rejected edit leaves it unchanged.
    pub fn apply_edit(
        session: &mut Session,
        tracking_number: &str,
        edit: RecordEdit,
        policy: InvalidDatePolicy,
        today: NaiveDate,
    ) -> Result<SampleRecord, ServiceError> {
        let session_id = session.id();
        let record = session.record_mut(tracking_number).ok_or_else(|| {
            ServiceError::NotFound(format!("Sample {} not found", tracking_number))
        })?;

        let date_collected = match edit.date_collected.as_deref() {
            Some(raw) => Some(resolve_collected_date(tracking_number, raw, policy, today)?),
            None => None,
        };

        if let Some(analyst_id) = edit.analyst_id {
            record.set_analyst_id(analyst_id.trim());
        }
        if let Some(date) = date_collected {
            record.set_date_collected(Some(date));
        }

        tracing::info!(
            session_id = %session_id,
            tracking_number = %tracking_number,
            "Sample review fields updated"
        );
        Ok(record.clone())
    }
}

fn resolve_collected_date(
    tracking_number: &str,
    raw: &str,
    policy: InvalidDatePolicy,
    today: NaiveDate,
) -> Result<NaiveDate, ServiceError> {
    if let Some(date) = parse_input_date(raw) {
        return Ok(date);
    }

    match policy {
        InvalidDatePolicy::Today => {
            tracing::warn!(
                tracking_number = %tracking_number,
                submitted = %raw,
                substituted = %today,
                "Collected date unreadable, substituting today"
            );
            Ok(today)
        }
        InvalidDatePolicy::Reject => Err(ServiceError::InvalidInput(format!(
            "Invalid collected date for {}: {:?}",
            tracking_number, raw
        ))),
    }
}
