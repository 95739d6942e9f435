//! Command-line entry point
//!
//! Runs one full crawl and writes the CSV. Partial failures are reported on
//! the console only; the process always exits 0.

use std::path::Path;

use shanghairanking_core::{RankingScraper, writer};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    setup_logging();

    let scraper = match RankingScraper::new() {
        Ok(scraper) => scraper,
        Err(e) => {
            error!("failed to initialise the HTTP client: {}", e);
            return;
        }
    };

    let entries = scraper.crawl().await;

    let output = Path::new(writer::DEFAULT_OUTPUT);
    match writer::save_to_csv(&entries, output) {
        Ok(()) => info!("saved {} entries to {}", entries.len(), output.display()),
        Err(e) => error!("failed to write {}: {}", output.display(), e),
    }
}

/// Sets up the tracing subscriber, honoring `RUST_LOG` when present
fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
