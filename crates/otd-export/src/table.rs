//! Flat table representation of one day's events.

use otd_core::{FeedDate, OnThisDayFeed};

/// Column headers, in output order.
pub const HEADERS: [&str; 3] = ["Year", "Date", "HistoricEvent"];

/// One exported spreadsheet row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    /// Event year; negative for BCE.
    pub year: i32,
    /// Day label for the whole run (`DD/MM`). Identical on every row; the
    /// feed carries no per-event date beyond the year.
    pub date: String,
    /// Event description from the feed.
    pub historic_event: String,
}

/// Ordered rows for one export run. Built fresh per run, written once.
#[derive(Debug, Clone, Default)]
pub struct ExportTable {
    rows: Vec<ExportRow>,
}

impl ExportTable {
    /// Flatten a parsed feed into one row per `events` entry.
    ///
    /// Rows keep the feed's order: no sorting, no dedup. A feed without
    /// events yields an empty table.
    pub fn flatten(feed: &OnThisDayFeed, date: &FeedDate) -> Self {
        let label = date.row_label();
        let rows = feed
            .events
            .iter()
            .map(|event| ExportRow {
                year: event.year,
                date: label.clone(),
                historic_event: event.text.clone(),
            })
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[ExportRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
