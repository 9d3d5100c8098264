//! APOD Gallery - browse the Astronomy Picture of the Day archive by date range
//!
//! The feed is downloaded once per session and kept in memory; range queries,
//! detail views and display states are driven through the [`Session`] controller.

pub mod cache;
pub mod command;
pub mod config;
pub mod feed;
pub mod filter;
pub mod render;
pub mod session;
pub mod view;

pub use apod_common::{Entry, FetchError, MediaType, ValidationError};
pub use cache::{CacheState, FeedCache};
pub use config::GalleryConfig;
pub use feed::FeedClient;
pub use filter::{filter_range, DateRange};
pub use session::{Intent, Session, ViewUpdate};
pub use view::{format_date, Detail, DetailMedia, GalleryItem};
