//! Core domain types for the on-this-day exporter.
//!
//! This crate provides the fundamental types used throughout the pipeline:
//! - `FeedDate`: validated month/day pair keying a feed request
//! - `HistoricalEvent`, `Holiday`, `OnThisDayFeed`: typed upstream payload
//! - `CoreError`: shared error type

pub mod date;
pub mod error;
pub mod feed;

pub use date::FeedDate;
pub use error::{CoreError, Result};
pub use feed::{CategoryCounts, HistoricalEvent, Holiday, OnThisDayFeed, PageSummary};
