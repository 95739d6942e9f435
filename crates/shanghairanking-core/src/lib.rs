//! Best Chinese Universities Ranking scraper library
//!
//! Fetches the paginated 2024 ranking table from shanghairanking.cn and
//! extracts one record per university.
//!
//! # Overview
//!
//! - An HTTP client with bounded retries and a randomized pause before every
//!   request, so the crawl never bursts.
//! - HTML parsers for the pagination control and the data table.
//! - A sequential crawl loop that tolerates failed pages, and a CSV writer
//!   for the result.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use shanghairanking_core::{writer, RankingScraper, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let scraper = RankingScraper::new()?;
//!
//!     // Fetch every page; failed pages simply contribute nothing
//!     let entries = scraper.crawl().await;
//!
//!     for entry in &entries {
//!         println!("{} {} ({}) {}", entry.rank, entry.name, entry.province, entry.score);
//!     }
//!
//!     writer::save_to_csv(&entries, Path::new(writer::DEFAULT_OUTPUT))?;
//!     Ok(())
//! }
//! ```
//!
//! # Certificate validation
//!
//! The bundled client disables TLS certificate verification because the
//! target site re-exposes a misconfigured chain. Anything fetched through
//! [`RankingClient`] accepts any certificate.

mod client;
mod error;
pub mod parser;
mod scraper;
mod types;
pub mod url;
pub mod writer;

// Re-export client types
pub use client::{ClientConfig, RankingClient, RequestDelay};

// Re-export error types
pub use error::{Result, ScrapeError};

// Re-export parser functions
pub use parser::{discover_page_count, parse_ranking_table};

// Re-export the high-level scraper API
pub use scraper::{RankingScraper, ScraperConfig};

// Re-export data types
pub use types::RankingEntry;

// Re-export URL helpers for convenience
pub use url::{BASE_URL, build_page_url};
