//! On-this-day exporter - Entry Point
//!
//! Fetches one day's Wikimedia "on this day" events feed and writes the
//! events to a formatted xlsx workbook.

use anyhow::Result;
use clap::Parser;
use otd_core::FeedDate;
use tracing::info;

/// Export a day's Wikimedia "on this day" events to an xlsx workbook.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (can also be set via OTD_CONFIG env var)
    #[arg(short, long)]
    config: Option<String>,

    /// Day to fetch, as MM-DD or MM/DD (defaults to today)
    #[arg(short, long)]
    date: Option<String>,

    /// Output xlsx path (overrides the config file)
    #[arg(short, long)]
    output: Option<String>,

    /// Sheet and table name (overrides the config file)
    #[arg(long)]
    sheet: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    otd_cli::logging::init_logging()?;

    info!("Starting otd v{}", env!("CARGO_PKG_VERSION"));

    // Determine config path: CLI arg > OTD_CONFIG env var > default
    let config_path = args
        .config
        .or_else(|| std::env::var("OTD_CONFIG").ok())
        .unwrap_or_else(|| "config/default.toml".to_string());

    let mut config = otd_cli::AppConfig::load(&config_path)?;
    config.apply_overrides(args.output, args.sheet);

    let date = match args.date {
        Some(raw) => raw.parse::<FeedDate>()?,
        None => FeedDate::today(),
    };

    info!(
        date = %date,
        output = %config.export.output_path,
        "Configuration loaded"
    );

    let app = otd_cli::Application::new(config)?;
    app.run(&date).await?;

    Ok(())
}
