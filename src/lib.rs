pub mod config;
pub mod core;
pub mod data;
pub mod export;
pub mod util;
pub mod web;

pub use config::Config;
pub use core::services::{EntryService, RecordEdit, ReviewService, ServiceError, Submission};
pub use core::{Session, SessionManager};
pub use data::{DailyCounter, QueryFlag, RecordStore, SampleRecord, TrackingNumber};
pub use export::{encode_records, ExportError};
pub use web::{build_router, run_server, ServerConfig, WebAppState};
