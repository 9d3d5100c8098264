//! Error types shared by the feed client and the session controller

use chrono::NaiveDate;
use thiserror::Error;

/// Failure to obtain the feed.
///
/// Cloneable so the cache can keep the last failure around while also
/// handing it to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Transport failure (DNS, connect, TLS, timeout, truncated body)
    #[error("Network error: {0}")]
    Network(String),
    /// Endpoint answered with a non-success status
    #[error("HTTP error: {0}")]
    HttpStatus(reqwest::StatusCode),
    /// Body was not a JSON array of entries
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Parse(err.to_string())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(err.to_string())
    }
}

/// Rejected date range input, raised before any network activity
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select both start and end dates")]
    MissingDate,
    #[error("Start date must be before end date")]
    InvertedRange { start: NaiveDate, end: NaiveDate },
}
