//! Spreadsheet export of a session's records.

pub mod xlsx;

pub use xlsx::{encode_records, encode_table, XLSX_CONTENT_TYPE};

/// Errors raised while building a workbook.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Workbook archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
