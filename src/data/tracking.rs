//! Day-scoped tracking number generation.
//!
//! A tracking number has the shape `DDMM-NNN`: the day and month a sample was
//! received followed by a per-day sequence. The year is deliberately not part
//! of the key, so 5 March 2025 and 5 March 2026 share a sequence.

use std::collections::HashMap;
use std::fmt;

use chrono::{Datelike, NaiveDate};

/// A date reduced to day and month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DayKey {
    day: u32,
    month: u32,
}

impl DayKey {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            day: date.day(),
            month: date.month(),
        }
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}", self.day, self.month)
    }
}

/// Human-facing identifier of a sample record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrackingNumber(String);

impl TrackingNumber {
    fn new(key: DayKey, sequence: u64) -> Self {
        // {:03} only pads; sequences past 999 simply grow wider.
        Self(format!("{}-{:03}", key, sequence))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackingNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TrackingNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for TrackingNumber {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TrackingNumber {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Last-issued sequence per day-key. Only ever grows.
#[derive(Debug, Clone, Default)]
pub struct DailyCounter {
    issued: HashMap<DayKey, u64>,
}

impl DailyCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint the next tracking number for `date`.
    ///
    /// Every call consumes a sequence number, so callers must use the result
    /// right away; calling twice for the same day yields two different numbers.
    pub fn next_tracking_number(&mut self, date: NaiveDate) -> TrackingNumber {
        let key = DayKey::from_date(date);
        let sequence = self.issued.entry(key).or_insert(0);
        *sequence += 1;
        TrackingNumber::new(key, *sequence)
    }

    pub fn last_issued(&self, key: DayKey) -> Option<u64> {
        self.issued.get(&key).copied()
    }

    /// Number of distinct day-keys seen so far.
    pub fn day_count(&self) -> usize {
        self.issued.len()
    }
}
