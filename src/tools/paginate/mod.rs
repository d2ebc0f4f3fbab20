mod tests;
mod utils;

use std::collections::HashSet;

use scraper::Html;
use tracing::{debug, info, warn};
use url::Url;

use crate::engine::Fetcher;
use crate::selectors::{LINK_SELECTOR, PAGINATOR_NEXT_SELECTOR, REL_NEXT_SELECTOR};
use utils::{mentions_next, resolve_href};

/// One fetched listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub url: Url,
    pub html: String,
}

/// Find the next page of a listing.
///
/// Strategies, in order: a `rel="next"` link, any link whose aria-label or
/// text mentions "next", then the paginator's test-id control.
pub fn next_page(html: &str, current_url: &Url) -> Option<Url> {
    next_page_excluding(html, current_url, &HashSet::new())
}

/// Like [`next_page`] but skips candidates already in `visited`, falling
/// through to later candidates and strategies.
pub fn next_page_excluding(html: &str, current_url: &Url, visited: &HashSet<Url>) -> Option<Url> {
    let doc = Html::parse_document(html);

    let rel_next = doc
        .select(&REL_NEXT_SELECTOR)
        .filter_map(|el| el.value().attr("href"))
        .map(|href| ("rel=next", href));
    let labelled = doc
        .select(&LINK_SELECTOR)
        .filter(mentions_next)
        .filter_map(|a| a.value().attr("href"))
        .map(|href| ("label", href));
    let paginator = doc
        .select(&PAGINATOR_NEXT_SELECTOR)
        .filter_map(|a| a.value().attr("href"))
        .map(|href| ("paginator", href));

    rel_next
        .chain(labelled)
        .chain(paginator)
        .filter_map(|(strategy, href)| resolve_href(current_url, href).map(|url| (strategy, url)))
        .find(|(strategy, url)| {
            let fresh = !visited.contains(url);
            if !fresh {
                debug!(strategy, %url, "next page candidate already visited");
            }
            fresh
        })
        .map(|(strategy, url)| {
            debug!(strategy, %url, "resolved next page");
            url
        })
}

/// Lazily fetch a listing page by page.
///
/// Stops when a page has no unvisited next link, a fetch fails or a page
/// comes back empty.
pub struct Pages<'a, F: Fetcher + ?Sized> {
    fetcher: &'a F,
    next: Option<Url>,
    visited: HashSet<Url>,
}

impl<'a, F: Fetcher + ?Sized> Pages<'a, F> {
    pub fn new(fetcher: &'a F, start: Url) -> Self {
        Self {
            fetcher,
            next: Some(start),
            visited: HashSet::new(),
        }
    }

    /// URLs requested so far, successful or not.
    pub fn visited(&self) -> &HashSet<Url> {
        &self.visited
    }
}

impl<F: Fetcher + ?Sized> Iterator for Pages<'_, F> {
    type Item = Page;

    fn next(&mut self) -> Option<Page> {
        let url = self.next.take()?;
        if !self.visited.insert(url.clone()) {
            debug!(%url, "page already visited, stopping");
            return None;
        }

        debug!(%url, "fetching page");
        let html = match self.fetcher.fetch(&url) {
            Ok(html) if !html.trim().is_empty() => html,
            Ok(_) => {
                warn!(%url, "empty response, stopping pagination");
                return None;
            }
            Err(err) => {
                warn!(%url, error = %err, "no content for page, stopping pagination");
                return None;
            }
        };

        self.next = next_page_excluding(&html, &url, &self.visited);
        if self.next.is_none() {
            info!(%url, "no further pages");
        }

        Some(Page { url, html })
    }
}
