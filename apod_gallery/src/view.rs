//! View models handed to the presentation layer

use apod_common::{Entry, MediaType};
use chrono::NaiveDate;

/// Shown for videos that carry no thumbnail of their own
pub const PLACEHOLDER_THUMBNAIL: &str = "https://img.youtube.com/vi/default/hqdefault.jpg";

/// Long US-English date, e.g. "January 5, 2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// One tile in the gallery grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    pub date: NaiveDate,
    pub title: String,
    pub display_date: String,
    pub thumbnail_url: String,
    /// Draw the play indicator over the thumbnail
    pub is_video: bool,
}

impl From<&Entry> for GalleryItem {
    fn from(entry: &Entry) -> Self {
        let thumbnail_url = match entry.media_type {
            MediaType::Video => entry
                .thumbnail_url
                .clone()
                .unwrap_or_else(|| PLACEHOLDER_THUMBNAIL.to_string()),
            MediaType::Image | MediaType::Other => entry.url.clone(),
        };

        Self {
            date: entry.date,
            title: entry.title.clone(),
            display_date: format_date(entry.date),
            thumbnail_url,
            is_video: entry.is_video(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailMedia {
    /// High resolution when the feed has it
    Image { src: String },
    /// Embeddable player URL
    Video { embed_url: String },
}

/// Content of the detail overlay for a selected entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detail {
    pub date: NaiveDate,
    pub title: String,
    pub display_date: String,
    pub explanation: String,
    pub media: DetailMedia,
    /// Already prefixed with the copyright sign
    pub attribution: Option<String>,
}

impl From<&Entry> for Detail {
    fn from(entry: &Entry) -> Self {
        let media = match entry.media_type {
            MediaType::Video => DetailMedia::Video {
                embed_url: entry.url.clone(),
            },
            MediaType::Image => DetailMedia::Image {
                src: entry.hdurl.clone().unwrap_or_else(|| entry.url.clone()),
            },
            MediaType::Other => DetailMedia::Image {
                src: entry.url.clone(),
            },
        };

        Self {
            date: entry.date,
            title: entry.title.clone(),
            display_date: format_date(entry.date),
            explanation: entry.explanation.clone(),
            media,
            attribution: entry.attribution().map(|c| format!("© {c}")),
        }
    }
}
