//! Session controller
//!
//! Owns the feed cache and the result currently on screen. The front-end
//! sends [`Intent`]s and renders the [`ViewUpdate`]s that come back.

use apod_common::Entry;
use chrono::NaiveDate;

use crate::cache::FeedCache;
use crate::filter::{filter_range, DateRange};
use crate::view::{Detail, GalleryItem};

/// User actions the controller understands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Either date may be unset when the picker is empty
    FetchRequested {
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    },
    ItemSelected {
        date: NaiveDate,
    },
    /// Close button, Escape, or a click outside the overlay
    CloseRequested,
}

/// Display state changes, in the order they should be applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewUpdate {
    /// Blocking validation message; nothing else changes
    Alert(String),
    Loading,
    Gallery(Vec<GalleryItem>),
    NoResults,
    /// Inline message replacing the gallery
    Error(String),
    DetailOpened(Detail),
    DetailClosed,
}

pub struct Session {
    cache: FeedCache,
    displayed: Vec<Entry>,
    open_detail: Option<NaiveDate>,
}

impl Session {
    pub fn new(cache: FeedCache) -> Self {
        Self {
            cache,
            displayed: Vec::new(),
            open_detail: None,
        }
    }

    pub fn cache(&self) -> &FeedCache {
        &self.cache
    }

    /// Entries of the last successful range query, newest first
    pub fn displayed(&self) -> &[Entry] {
        &self.displayed
    }

    pub fn open_detail(&self) -> Option<NaiveDate> {
        self.open_detail
    }

    /// Apply one intent.
    ///
    /// Takes `&mut self`, so a second fetch cannot start while one is in flight.
    pub async fn dispatch(&mut self, intent: Intent) -> Vec<ViewUpdate> {
        match intent {
            Intent::FetchRequested { start, end } => self.fetch(start, end).await,
            Intent::ItemSelected { date } => self.select(date).into_iter().collect(),
            Intent::CloseRequested => self.close().into_iter().collect(),
        }
    }

    async fn fetch(&mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Vec<ViewUpdate> {
        let range = match DateRange::from_inputs(start, end) {
            Ok(range) => range,
            Err(e) => {
                log::warn!("Rejected date range: {}", e);
                return vec![ViewUpdate::Alert(e.to_string())];
            }
        };

        let mut updates = Vec::new();
        updates.extend(self.close());
        updates.push(ViewUpdate::Loading);
        self.displayed.clear();

        let dataset = match self.cache.load().await {
            Ok(dataset) => dataset,
            Err(e) => {
                updates.push(ViewUpdate::Error(format!("Error loading images: {}", e)));
                return updates;
            }
        };

        self.displayed = filter_range(&dataset, &range);
        log::info!(
            "{} of {} entries between {} and {}",
            self.displayed.len(),
            dataset.len(),
            range.start(),
            range.end()
        );

        if self.displayed.is_empty() {
            updates.push(ViewUpdate::NoResults);
        } else {
            let items = self.displayed.iter().map(GalleryItem::from).collect();
            updates.push(ViewUpdate::Gallery(items));
        }
        updates
    }

    fn select(&mut self, date: NaiveDate) -> Option<ViewUpdate> {
        let Some(entry) = self.displayed.iter().find(|e| e.date == date) else {
            log::warn!("Selected {} is not in the displayed gallery", date);
            return None;
        };

        log::debug!("Opening detail for {}", date);
        self.open_detail = Some(date);
        Some(ViewUpdate::DetailOpened(Detail::from(entry)))
    }

    fn close(&mut self) -> Option<ViewUpdate> {
        self.open_detail.take().map(|date| {
            log::debug!("Closing detail for {}", date);
            ViewUpdate::DetailClosed
        })
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
