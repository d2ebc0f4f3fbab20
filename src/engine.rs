use tracing::{debug, info};
use url::Url;

use crate::error::Result;
use crate::tools::paginate::Pages;
use crate::tools::parse::parse_page;
use crate::types::ScrapeResult;

/// Source of raw page HTML.
pub trait Fetcher {
    fn fetch(&self, url: &Url) -> Result<String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOptions {
    /// Hard cap on collected reviews; `0` fetches nothing.
    pub max_items: usize,
    /// Used for reviews when the page declares no language.
    pub language: Option<String>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            max_items: crate::config::DEFAULT_MAX_ITEMS,
            language: None,
        }
    }
}

/// Walks a review listing page by page and accumulates the result.
pub struct Engine<'a> {
    pub fetcher: &'a dyn Fetcher,
    pub opts: EngineOptions,
}

impl<'a> Engine<'a> {
    pub fn new(fetcher: &'a dyn Fetcher, opts: EngineOptions) -> Self {
        Self { fetcher, opts }
    }

    /// Scrape from `start_url` until the item cap or the last page.
    ///
    /// Never fails: a page that cannot be fetched ends pagination and the
    /// reviews gathered so far are returned. Hotel statistics keep the first
    /// observed value per field; an unknown total becomes the number of
    /// collected reviews.
    pub fn scrape(&self, start_url: &Url) -> ScrapeResult {
        let max_items = self.opts.max_items;
        let language = self.opts.language.as_deref();
        let mut result = ScrapeResult::default();

        info!(url = %start_url, max_items, "starting scrape");

        if max_items > 0 {
            for (idx, page) in Pages::new(self.fetcher, start_url.clone()).enumerate() {
                let parsed = parse_page(&page.html, language);
                let skipped = parsed.skipped().count();
                let (stats, reviews) = parsed.into_parts();
                info!(
                    page = idx + 1,
                    url = %page.url,
                    reviews = reviews.len(),
                    skipped,
                    "parsed page"
                );

                result.hotel_stats.absorb(stats);
                let room = max_items - result.reviews.len();
                result.reviews.extend(reviews.into_iter().take(room));

                if result.reviews.len() >= max_items {
                    info!(max_items, "reached max_items, stopping pagination");
                    break;
                }
            }
        } else {
            debug!("max_items is 0, nothing to fetch");
        }

        if result.hotel_stats.total_reviews.is_none() {
            let collected = result.reviews.len() as u64;
            debug!(collected, "total reviews not observed, using collected count");
            result.hotel_stats.total_reviews = Some(collected);
        }

        info!(reviews = result.reviews.len(), "scrape complete");
        result
    }
}
