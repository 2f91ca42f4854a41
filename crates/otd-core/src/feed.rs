//! Typed payload of the upstream "on this day" feed.
//!
//! The feed groups entries into five categories. Each category key may be
//! absent from a response, so every list field defaults to empty; a missing
//! `events` key yields zero export rows rather than an error. Malformed
//! values still fail deserialization with a typed error.
//!
//! Note: `holidays` entries carry no `year` field, so they get their own
//! type instead of reusing `HistoricalEvent`.

use serde::{Deserialize, Serialize};

/// One dated entry from the feed (`events`, `selected`, `births`, `deaths`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalEvent {
    /// Event year; negative for BCE.
    pub year: i32,
    /// Free-form event description.
    pub text: String,
    /// Related-article metadata. Parsed but not exported.
    #[serde(default)]
    pub pages: Vec<PageSummary>,
}

/// One undated entry from the feed's `holidays` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holiday {
    pub text: String,
    #[serde(default)]
    pub pages: Vec<PageSummary>,
}

/// Summary of a related Wikipedia article.
///
/// The upstream objects carry many more fields (thumbnails, URLs, ...);
/// only the ones this tool reports are modeled, the rest are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSummary {
    pub title: String,
    #[serde(default)]
    pub extract: Option<String>,
}

/// Parsed response body for one day's feed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OnThisDayFeed {
    #[serde(default)]
    pub events: Vec<HistoricalEvent>,
    #[serde(default)]
    pub selected: Vec<HistoricalEvent>,
    #[serde(default)]
    pub births: Vec<HistoricalEvent>,
    #[serde(default)]
    pub deaths: Vec<HistoricalEvent>,
    #[serde(default)]
    pub holidays: Vec<Holiday>,
}

/// Per-category entry counts, for the post-fetch debug summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryCounts {
    pub events: usize,
    pub selected: usize,
    pub births: usize,
    pub deaths: usize,
    pub holidays: usize,
}

impl OnThisDayFeed {
    /// Entry counts across all five categories.
    pub fn category_counts(&self) -> CategoryCounts {
        CategoryCounts {
            events: self.events.len(),
            selected: self.selected.len(),
            births: self.births.len(),
            deaths: self.deaths.len(),
            holidays: self.holidays.len(),
        }
    }
}
