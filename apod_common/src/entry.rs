//! APOD feed record

use chrono::NaiveDate;
use serde::Deserialize;

/// Kind of media attached to an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
    /// Anything the feed labels other than image/video
    #[serde(other)]
    Other,
}

/// One day of the Astronomy Picture of the Day feed.
///
/// `date` is the natural key; the feed never carries two entries for the same day.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Entry {
    pub date: NaiveDate,
    pub title: String,
    pub explanation: String,
    pub media_type: MediaType,
    pub url: String,
    #[serde(default)]
    pub hdurl: Option<String>,
    /// Only present for videos
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub copyright: Option<String>,
}

impl Entry {
    pub fn is_video(&self) -> bool {
        self.media_type == MediaType::Video
    }

    /// Trimmed attribution, `None` when absent or blank
    pub fn attribution(&self) -> Option<&str> {
        self.copyright
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}
