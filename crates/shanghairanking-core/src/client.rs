//! HTTP client with randomized request delay and retry logic
//!
//! Wraps a `reqwest::Client` configured with browser-like headers and a
//! bounded retry loop. A uniformly random pause precedes every attempt,
//! first included, to keep the request cadence irregular.

use std::time::Duration;

use rand::Rng;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, CONNECTION, HeaderMap, HeaderValue, REFERER};
use tokio::time::sleep;
use tracing::{debug, error, warn};

use crate::error::{Result, ScrapeError};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const ACCEPT_VALUE: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
const ACCEPT_LANGUAGE_VALUE: &str = "zh-CN,zh;q=0.9,en;q=0.8";
const REFERER_VALUE: &str = "https://www.shanghairanking.cn/";

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Lower bound of the pre-request delay in milliseconds (default: 1000)
    pub delay_min_ms: u64,
    /// Upper bound of the pre-request delay in milliseconds (default: 3000)
    pub delay_max_ms: u64,
    /// Request timeout in seconds (default: 10)
    pub timeout_secs: u64,
    /// Total attempts per page before giving up (default: 3)
    pub max_attempts: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            delay_min_ms: 1000,
            delay_max_ms: 3000,
            timeout_secs: 10,
            max_attempts: 3,
        }
    }
}

/// Wait policy applied before every request attempt
///
/// Sleeps a uniformly random duration inside the configured window. Kept
/// separate from the retry count so tests can inject [`RequestDelay::none`]
/// and exercise the attempt loop without real time passing.
pub struct RequestDelay {
    min: Duration,
    max: Duration,
}

impl RequestDelay {
    /// Create a delay policy with the given bounds in milliseconds
    pub fn new(min_ms: u64, max_ms: u64) -> Self {
        Self {
            min: Duration::from_millis(min_ms.min(max_ms)),
            max: Duration::from_millis(min_ms.max(max_ms)),
        }
    }

    /// A no-op delay policy for tests
    pub fn none() -> Self {
        Self::new(0, 0)
    }

    /// Sleep for a uniformly random duration in `[min, max]`
    pub async fn wait(&self) {
        if self.max.is_zero() {
            return;
        }
        let span_ms = (self.max - self.min).as_millis() as u64;
        let jitter_ms = if span_ms == 0 {
            0
        } else {
            rand::rng().random_range(0..=span_ms)
        };
        sleep(self.min + Duration::from_millis(jitter_ms)).await;
    }

    /// The configured `(min, max)` window
    pub fn bounds(&self) -> (Duration, Duration) {
        (self.min, self.max)
    }
}

/// HTTP client wrapper with per-attempt delay and bounded retries
///
/// TLS certificate validation is DISABLED: the ranking site serves a
/// misconfigured chain, so this client accepts any certificate. Do not point
/// it at hosts where that matters.
pub struct RankingClient {
    client: reqwest::Client,
    delay: RequestDelay,
    max_attempts: u32,
}

impl RankingClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_VALUE));
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static(ACCEPT_LANGUAGE_VALUE),
        );
        headers.insert(REFERER, HeaderValue::from_static(REFERER_VALUE));
        headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .danger_accept_invalid_certs(true)
            .build()
            .map_err(ScrapeError::Http)?;

        Ok(Self {
            client,
            delay: RequestDelay::new(config.delay_min_ms, config.delay_max_ms),
            max_attempts: config.max_attempts.max(1),
        })
    }

    /// Fetch one page of HTML, retrying up to the configured attempt count
    ///
    /// Each attempt is preceded by the randomized delay. Transport errors,
    /// timeouts, and 4xx/5xx statuses all count as failed attempts; the
    /// delay window does not grow between them.
    ///
    /// # Errors
    /// Returns [`ScrapeError::RetriesExhausted`] once every attempt has
    /// failed. Callers treat that as "this page has no records", not as a
    /// reason to abort the crawl.
    pub async fn fetch(&self, url: &str) -> Result<String> {
        let mut attempt = 1;
        loop {
            self.delay.wait().await;
            debug!("attempt {}/{} for {}", attempt, self.max_attempts, url);

            match self.do_fetch(url).await {
                Ok(body) => return Ok(body),
                Err(e) => {
                    warn!(
                        "attempt {}/{} failed for {}: {}",
                        attempt, self.max_attempts, url, e
                    );
                    if attempt >= self.max_attempts {
                        error!("giving up on {} after {} attempts", url, self.max_attempts);
                        return Err(ScrapeError::RetriesExhausted {
                            url: url.to_string(),
                            attempts: self.max_attempts,
                        });
                    }
                    attempt += 1;
                }
            }
        }
    }

    /// Perform a single GET attempt
    ///
    /// Redirects are followed by reqwest's default policy; only 4xx/5xx
    /// statuses surface as errors. The body is decoded with the charset the
    /// server declares, falling back to UTF-8.
    async fn do_fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(ScrapeError::HttpStatus {
                url: url.to_string(),
                status,
            });
        }

        Ok(response.text().await?)
    }
}
