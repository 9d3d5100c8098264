//! Runtime settings for the feed client

use std::time::Duration;

/// Public mirror of the APOD archive, served as a single JSON document
pub const DEFAULT_FEED_URL: &str = "https://cdn.jsdelivr.net/gh/GCA-Classroom/apod/data.json";

/// Applied to the whole request, body download included
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Days covered by the range pre-filled when no dates are given
pub const DEFAULT_RANGE_DAYS: u32 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryConfig {
    pub feed_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl GalleryConfig {
    /// Config pointing at a different feed, e.g. a mock server in tests
    pub fn with_feed_url(feed_url: impl Into<String>) -> Self {
        Self {
            feed_url: feed_url.into(),
            ..Self::default()
        }
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("apod_gallery/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
