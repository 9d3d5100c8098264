//! Shared types for the APOD gallery: feed entries and the error taxonomy.

pub mod entry;
pub mod error;

pub use entry::{Entry, MediaType};
pub use error::{FetchError, ValidationError};
