use scraper::ElementRef;
use url::Url;

use crate::tools::clean::element_text;

/// Resolve an href against the page it was found on. Only http(s) survives.
pub(super) fn resolve_href(base: &Url, href: &str) -> Option<Url> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }
    base.join(href).ok().filter(is_valid_scheme)
}

/// Check if URL scheme is acceptable (http/https).
fn is_valid_scheme(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}

/// True when the link's aria-label or visible text mentions "next".
pub(super) fn mentions_next(link: &ElementRef<'_>) -> bool {
    let aria = link
        .value()
        .attr("aria-label")
        .unwrap_or_default()
        .to_lowercase();
    aria.contains("next") || element_text(link).to_lowercase().contains("next")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_relative_and_absolute() {
        let base = Url::parse("https://example.com/reviews/hotel.html?page=1").unwrap();
        assert_eq!(
            resolve_href(&base, "?page=2").unwrap().as_str(),
            "https://example.com/reviews/hotel.html?page=2"
        );
        assert_eq!(
            resolve_href(&base, "/r/p2").unwrap().as_str(),
            "https://example.com/r/p2"
        );
        assert_eq!(
            resolve_href(&base, " https://other.com/x ").unwrap().as_str(),
            "https://other.com/x"
        );
    }

    #[test]
    fn drops_non_http_schemes() {
        let base = Url::parse("https://example.com/").unwrap();
        assert!(resolve_href(&base, "javascript:void(0)").is_none());
        assert!(resolve_href(&base, "mailto:a@b.c").is_none());
        assert!(resolve_href(&base, "   ").is_none());
    }
}
