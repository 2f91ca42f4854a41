//! Main application orchestration.
//!
//! Wires the feed client to the exporter: fetch one day's feed, flatten the
//! events, write the workbook. Single pass, no retries.

use crate::config::AppConfig;
use crate::error::AppResult;
use otd_core::FeedDate;
use otd_export::{ExportTable, WorkbookWriter};
use otd_feed::{Credentials, FeedClient};
use std::time::Duration;
use tracing::{info, warn};

/// Main application.
pub struct Application {
    config: AppConfig,
    client: FeedClient,
}

impl Application {
    /// Create a new application. Resolves credentials up front so a missing
    /// token fails before any network call.
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let credentials = Credentials::resolve(config.feed.token.as_deref())?;
        let client = FeedClient::with_timeout(
            config.feed.base_url.clone(),
            credentials,
            Duration::from_secs(config.feed.timeout_secs),
        )?;

        Ok(Self { config, client })
    }

    /// Fetch, flatten, and export one day's events.
    pub async fn run(&self, date: &FeedDate) -> AppResult<()> {
        let feed = self.client.fetch(date).await?;
        if feed.events.is_empty() {
            warn!(date = %date, "Feed has no events for this day");
        }

        let table = ExportTable::flatten(&feed, date);
        let writer = WorkbookWriter::new(&self.config.export.sheet_name);
        writer.write(&table, &self.config.export.output_path)?;

        info!(
            date = %date,
            rows = table.len(),
            path = %self.config.export.output_path,
            "Export complete"
        );

        Ok(())
    }
}
