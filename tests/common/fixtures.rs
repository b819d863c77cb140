//! Submission fixtures
//!
//! Builds entry forms the way a browser would post them, so tests go through
//! the same decoding as the web handlers.

use chrono::NaiveDate;
use sample_tracker::{Config, Submission};

/// A fixed "today" so tests do not depend on the wall clock.
pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
}

pub fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, month, day).unwrap()
}

/// Builder for urlencoded entry-form pairs.
#[derive(Default)]
pub struct FormBuilder {
    pairs: Vec<(String, String)>,
}

impl FormBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, key: &str, value: &str) -> Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    pub fn received(self, date: NaiveDate) -> Self {
        self.field("date_received", &date.format("%Y-%m-%d").to_string())
    }

    pub fn amount(self, sample_type: &str, count: &str) -> Self {
        self.field(&format!("amount.{}", sample_type), count)
    }

    pub fn lab(self, lab: &str) -> Self {
        self.field("lab", lab)
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Decode against the default catalog.
    pub fn submission(&self) -> Submission {
        let config = Config::default();
        Submission::from_form_pairs(&self.pairs, &config.catalog, fixed_today())
            .expect("fixture form should decode")
    }
}
