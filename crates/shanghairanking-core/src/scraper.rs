//! Crawl orchestration
//!
//! Discovers the page count once, then walks the pages sequentially,
//! combining the HTTP client and the HTML parsers into one linear run.

use tracing::{info, warn};

use crate::client::{ClientConfig, RankingClient};
use crate::error::Result;
use crate::parser::{discover_page_count, parse_ranking_table};
use crate::types::RankingEntry;
use crate::url::{BASE_URL, build_page_url};

/// Configuration for a crawl
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    /// Un-paginated URL of the ranking list
    pub base_url: String,
    /// HTTP client configuration
    pub client: ClientConfig,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            client: ClientConfig::default(),
        }
    }
}

/// High-level scraper for the university ranking list
///
/// Pages are fetched one at a time, in order. The accumulated record set is
/// returned from [`crawl`](RankingScraper::crawl) rather than held on the
/// struct, so one scraper can run any number of crawls.
pub struct RankingScraper {
    client: RankingClient,
    base_url: String,
}

impl RankingScraper {
    /// Create a scraper with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ScraperConfig::default())
    }

    /// Create a scraper with custom configuration
    ///
    /// # Errors
    /// Returns an error if HTTP client initialization fails
    pub fn with_config(config: ScraperConfig) -> Result<Self> {
        let client = RankingClient::with_config(config.client)?;
        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    /// Discover how many pages the ranking spans
    ///
    /// Fetches the un-paginated base URL and reads its pagination control.
    /// A fetch failure degrades to a single-page crawl.
    pub async fn total_pages(&self) -> usize {
        match self.client.fetch(&self.base_url).await {
            Ok(html) => discover_page_count(&html),
            Err(e) => {
                warn!("could not load the first page, assuming one page: {}", e);
                1
            }
        }
    }

    /// Crawl every page and return the accumulated entries
    ///
    /// Pages that fail to fetch after all retries, or parse to nothing,
    /// contribute zero entries; the crawl never aborts early. Entry order is
    /// page order, then row order within each page.
    pub async fn crawl(&self) -> Vec<RankingEntry> {
        let total = self.total_pages().await;
        info!("starting crawl across {} page(s)", total);

        let mut entries = Vec::new();
        for page in 1..=total {
            let url = build_page_url(&self.base_url, page);
            info!("fetching page {}/{}: {}", page, total, url);

            let html = match self.client.fetch(&url).await {
                Ok(html) => html,
                Err(e) => {
                    warn!("skipping page {}: {}", page, e);
                    continue;
                }
            };

            let page_entries = parse_ranking_table(&html);
            if page_entries.is_empty() {
                info!("page {} yielded no entries", page);
            } else {
                info!("page {} yielded {} entries", page, page_entries.len());
                entries.extend(page_entries);
            }
        }

        info!("crawl finished with {} entries", entries.len());
        entries
    }
}
