//! Feed retrieval for the on-this-day exporter.
//!
//! Fetches one day's Wikimedia "on this day" JSON feed and parses it into
//! the typed structures from `otd-core`.

pub mod client;
pub mod credentials;
pub mod error;

pub use client::{FeedClient, DEFAULT_BASE_URL};
pub use credentials::Credentials;
pub use error::{FeedError, FeedResult};
