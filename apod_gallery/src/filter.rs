//! Inclusive date range selection over the cached feed

use apod_common::{Entry, ValidationError};
use chrono::{Days, NaiveDate};

/// A validated `start <= end` pair of calendar dates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ValidationError> {
        if start > end {
            return Err(ValidationError::InvertedRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Validate raw picker values, either of which may be unset
    pub fn from_inputs(
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Self, ValidationError> {
        match (start, end) {
            (Some(start), Some(end)) => Self::new(start, end),
            _ => Err(ValidationError::MissingDate),
        }
    }

    /// The `days`-day window ending at `today` (e.g. 30 -> today minus 30 days ..= today)
    pub fn last_days(today: NaiveDate, days: u32) -> Self {
        let start = today
            .checked_sub_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MIN);
        Self { start, end: today }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of calendar days covered, both ends included
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Entries dated within `range` (inclusive), newest first
pub fn filter_range(dataset: &[Entry], range: &DateRange) -> Vec<Entry> {
    let mut selected: Vec<Entry> = dataset
        .iter()
        .filter(|entry| range.contains(entry.date))
        .cloned()
        .collect();

    // Dates are unique keys, so no tie-break
    selected.sort_by(|a, b| b.date.cmp(&a.date));
    selected
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
