//! Shared test utilities for Sample Tracker
//!
//! This module provides common helpers for integration tests:
//! - Fixed dates and form builders for submissions
//! - Reading worksheets back out of exported workbooks

pub mod fixtures;
pub mod workbook;
