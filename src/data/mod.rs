//! Sample records, their tracking numbers and per-session storage

pub mod models;
pub mod store;
pub mod tracking;

pub use models::{
    format_display_date, format_optional_date, parse_input_date, render_sample_types,
    QueryFlag, RecordDraft, SampleAmount, SampleRecord,
};
pub use store::RecordStore;
pub use tracking::{DailyCounter, DayKey, TrackingNumber};
