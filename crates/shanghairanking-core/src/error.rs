//! Error types for the ranking scraper
//!
//! Provides a single error enum with human-readable messages for every
//! failure mode the crawl and the CSV writer can hit.

use thiserror::Error;

/// Error type for all ranking scraper operations
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("unexpected HTTP status {status} for {url}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Every attempt for a page failed; the page contributes zero records
    #[error("all {attempts} attempts failed for {url}")]
    RetriesExhausted { url: String, attempts: u32 },

    /// Output file could not be created or written
    #[error("failed to write output file: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization failed
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for ranking scraper operations
pub type Result<T> = std::result::Result<T, ScrapeError>;
