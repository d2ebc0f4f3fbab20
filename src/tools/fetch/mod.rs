mod client;
mod headers;
mod utils;

pub mod types;

pub use types::*;
pub use utils::backoff_delay;

use crate::engine::Fetcher;
use crate::error::{Result, ScrapeError};
use reqwest::blocking::Client;
use std::thread;
use tracing::{debug, error, warn};
use url::Url;

/// Blocking HTTP fetcher with retry and exponential backoff.
///
/// # Examples
/// ```no_run
/// use hotel_reviews::tools::fetch::{FetchSettings, HttpFetcher};
///
/// # fn example() -> hotel_reviews::Result<()> {
/// let fetcher = HttpFetcher::new(&FetchSettings::default())?;
/// let url = url::Url::parse("https://www.booking.com/reviews/fr/hotel/example.html").unwrap();
/// let html = fetcher.fetch(&url)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    max_retries: u32,
    backoff_factor: f64,
}

impl HttpFetcher {
    pub fn new(settings: &FetchSettings) -> Result<Self> {
        Ok(Self {
            client: client::build_client(settings)?,
            max_retries: settings.max_retries,
            backoff_factor: settings.backoff_factor,
        })
    }

    /// GET `url` and return the body text.
    ///
    /// Transport errors and HTTP statuses >= 400 are retried; the last
    /// failure is returned as [`ScrapeError::Fetch`].
    pub fn fetch(&self, url: &Url) -> Result<String> {
        let attempts = self.max_retries.max(1);
        let mut last_reason = String::new();

        for attempt in 1..=attempts {
            match self.attempt(url) {
                Ok(body) => {
                    debug!(%url, attempt, bytes = body.len(), "fetched page");
                    return Ok(body);
                }
                Err(reason) => {
                    warn!(%url, attempt, attempts, %reason, "fetch attempt failed");
                    last_reason = reason;
                }
            }

            if attempt < attempts {
                thread::sleep(backoff_delay(self.backoff_factor, attempt));
            }
        }

        let err = ScrapeError::fetch_error(url.as_str(), attempts, &last_reason);
        error!(%err, "giving up on page");
        Err(err)
    }

    fn attempt(&self, url: &Url) -> std::result::Result<String, String> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| e.to_string())?;

        let status = response.status();
        if utils::is_failure_status(status) {
            return Err(format!("HTTP {status}"));
        }

        response.text().map_err(|e| e.to_string())
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &Url) -> Result<String> {
        HttpFetcher::fetch(self, url)
    }
}
