//! HTTP request handlers for the Sample Tracker pages.

pub mod entry;
pub mod export;
pub mod review;
