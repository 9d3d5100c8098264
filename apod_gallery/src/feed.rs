//! HTTP client for the APOD JSON feed
//!
//! Uses async reqwest; the whole archive is a single GET with no query parameters.

use apod_common::{Entry, FetchError};

use crate::config::GalleryConfig;

/// Fetches the full feed from a fixed URL
#[derive(Debug, Clone)]
pub struct FeedClient {
    client: reqwest::Client,
    url: String,
    user_agent: String,
}

impl FeedClient {
    pub fn new(config: &GalleryConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            url: config.feed_url.clone(),
            user_agent: config.user_agent.clone(),
        })
    }

    /// Download and parse the whole feed.
    ///
    /// Records are parsed one at a time; an incomplete record is logged and
    /// skipped. Only a body that is not a JSON array fails the fetch.
    pub async fn fetch(&self) -> Result<Vec<Entry>, FetchError> {
        log::info!("Fetching APOD feed from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .header("User-Agent", &self.user_agent)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::HttpStatus(response.status()));
        }

        let body = response.bytes().await?;
        let records: Vec<serde_json::Value> = serde_json::from_slice(&body)?;
        let total = records.len();
        let entries = parse_records(records);

        log::info!(
            "Fetched {} feed entries ({} skipped, {} bytes)",
            entries.len(),
            total - entries.len(),
            body.len()
        );
        Ok(entries)
    }
}

/// Keep the records that form a complete entry
fn parse_records(records: Vec<serde_json::Value>) -> Vec<Entry> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let date = record
                .get("date")
                .and_then(|d| d.as_str())
                .unwrap_or("<no date>")
                .to_string();
            match serde_json::from_value::<Entry>(record) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    log::warn!("Skipping feed record #{} ({}): {}", index, date, e);
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "feed_tests.rs"]
mod tests;
