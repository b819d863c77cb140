//! Operations on a session's records, shared by the web handlers and tests.

pub mod entry_service;
pub mod error;
pub mod review_service;

pub use entry_service::{EntryService, Submission};
pub use error::ServiceError;
pub use review_service::{RecordEdit, ReviewService};
