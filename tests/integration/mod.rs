//! Integration tests for Sample Tracker
//!
//! These tests verify that multiple components work together correctly.

#[path = "../common/mod.rs"]
pub mod common;

pub mod export_workbook;
pub mod sample_flow;
