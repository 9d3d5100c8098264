//! In-memory feed cache
//!
//! The feed is downloaded at most once per session. A failed download leaves
//! the cache retryable; a successful one is kept until the session ends.

use apod_common::{Entry, FetchError};
use std::sync::Arc;

use crate::feed::FeedClient;

/// Lifecycle of the cached feed.
///
/// Empty -> Loaded on success, Empty -> Failed on error, Failed -> Loaded on a
/// successful retry. Loaded is never left.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheState {
    Empty,
    Loaded(Arc<[Entry]>),
    Failed(FetchError),
}

/// Session-owned cache in front of the feed client
#[derive(Debug)]
pub struct FeedCache {
    client: FeedClient,
    state: CacheState,
}

impl FeedCache {
    pub fn new(client: FeedClient) -> Self {
        Self {
            client,
            state: CacheState::Empty,
        }
    }

    pub fn state(&self) -> &CacheState {
        &self.state
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, CacheState::Loaded(_))
    }

    /// The cached dataset, if it has been loaded
    pub fn entries(&self) -> Option<&[Entry]> {
        match &self.state {
            CacheState::Loaded(entries) => Some(entries),
            _ => None,
        }
    }

    /// Return the feed, downloading it only if no earlier call succeeded
    pub async fn load(&mut self) -> Result<Arc<[Entry]>, FetchError> {
        match &self.state {
            CacheState::Loaded(entries) => {
                log::debug!("Feed cache hit ({} entries)", entries.len());
                return Ok(Arc::clone(entries));
            }
            CacheState::Failed(previous) => {
                log::info!("Retrying feed download after earlier failure: {}", previous);
            }
            CacheState::Empty => {
                log::debug!("Feed cache empty, downloading");
            }
        }

        match self.client.fetch().await {
            Ok(entries) => {
                let entries: Arc<[Entry]> = entries.into();
                self.state = CacheState::Loaded(Arc::clone(&entries));
                Ok(entries)
            }
            Err(e) => {
                log::warn!("Feed download failed: {}", e);
                self.state = CacheState::Failed(e.clone());
                Err(e)
            }
        }
    }
}
