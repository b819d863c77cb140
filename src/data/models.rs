//! Data models for sample records

use chrono::NaiveDate;

use super::tracking::TrackingNumber;

/// How dates appear on screen and in exports.
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m";

/// Format produced by `<input type="date">`.
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a date the way records are displayed (`DD/MM`).
pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Format an optional date, rendering `None` as the empty string.
pub fn format_optional_date(date: Option<NaiveDate>) -> String {
    date.map(format_display_date).unwrap_or_default()
}

/// Parse a date typed into the form.
///
/// Accepts the ISO form browsers submit as well as a full `DD/MM/YYYY`.
/// Blank or malformed input yields `None`.
pub fn parse_input_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, INPUT_DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(raw, "%d/%m/%Y"))
        .ok()
}

/// Whether the sample arrived with an open query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryFlag {
    Yes,
    #[default]
    No,
}

impl QueryFlag {
    pub fn label(&self) -> &'static str {
        match self {
            QueryFlag::Yes => "Yes",
            QueryFlag::No => "No",
        }
    }

    /// Parse a submitted radio value. Blank means `No`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" => Some(QueryFlag::Yes),
            "no" | "n" | "" => Some(QueryFlag::No),
            _ => None,
        }
    }
}

/// An amount entered for one sample type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleAmount {
    pub name: String,
    pub count: u32,
}

impl SampleAmount {
    pub fn new(name: impl Into<String>, count: u32) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// Render amounts as `name: count` pairs, keeping only non-zero counts.
pub fn render_sample_types(amounts: &[SampleAmount]) -> String {
    amounts
        .iter()
        .filter(|a| a.count > 0)
        .map(|a| format!("{}: {}", a.name, a.count))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Everything about a record except its tracking number, as assembled from a
/// submitted form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDraft {
    pub date_received: NaiveDate,
    pub client_details: String,
    pub designated_labs: String,
    pub sample_types: String,
    pub query: QueryFlag,
    pub query_details: String,
    pub query_resolved: Option<NaiveDate>,
}

/// One row of sample data.
///
/// Only the analyst ID and collected date change after creation; everything
/// else is fixed when the tracking number is minted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleRecord {
    tracking_number: TrackingNumber,
    date_received: NaiveDate,
    client_details: String,
    designated_labs: String,
    sample_types: String,
    query: QueryFlag,
    query_details: String,
    query_resolved: Option<NaiveDate>,
    analyst_id: String,
    date_collected: Option<NaiveDate>,
}

impl SampleRecord {
    /// Column headers, in the order `cells` yields values.
    pub const COLUMNS: [&'static str; 10] = [
        "Tracking Number",
        "Date Received",
        "Client Details",
        "Designated Lab",
        "Sample Types",
        "Query",
        "Query Details",
        "Query Resolved",
        "Analyst ID",
        "Date Collected",
    ];

    pub fn new(tracking_number: TrackingNumber, draft: RecordDraft) -> Self {
        Self {
            tracking_number,
            date_received: draft.date_received,
            client_details: draft.client_details,
            designated_labs: draft.designated_labs,
            sample_types: draft.sample_types,
            query: draft.query,
            query_details: draft.query_details,
            query_resolved: draft.query_resolved,
            analyst_id: String::new(),
            date_collected: None,
        }
    }

    pub fn tracking_number(&self) -> &TrackingNumber {
        &self.tracking_number
    }

    pub fn date_received(&self) -> NaiveDate {
        self.date_received
    }

    pub fn client_details(&self) -> &str {
        &self.client_details
    }

    pub fn designated_labs(&self) -> &str {
        &self.designated_labs
    }

    pub fn sample_types(&self) -> &str {
        &self.sample_types
    }

    pub fn query(&self) -> QueryFlag {
        self.query
    }

    pub fn query_details(&self) -> &str {
        &self.query_details
    }

    pub fn query_resolved(&self) -> Option<NaiveDate> {
        self.query_resolved
    }

    pub fn analyst_id(&self) -> &str {
        &self.analyst_id
    }

    pub fn date_collected(&self) -> Option<NaiveDate> {
        self.date_collected
    }

    pub fn set_analyst_id(&mut self, analyst_id: impl Into<String>) {
        self.analyst_id = analyst_id.into();
    }

    pub fn set_date_collected(&mut self, date: Option<NaiveDate>) {
        self.date_collected = date;
    }

    /// Display values for every column, matching `COLUMNS`.
    pub fn cells(&self) -> [String; 10] {
        [
            self.tracking_number.to_string(),
            format_display_date(self.date_received),
            self.client_details.clone(),
            self.designated_labs.clone(),
            self.sample_types.clone(),
            self.query.label().to_string(),
            self.query_details.clone(),
            format_optional_date(self.query_resolved),
            self.analyst_id.clone(),
            format_optional_date(self.date_collected),
        ]
    }
}
