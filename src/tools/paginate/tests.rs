#[cfg(test)]
mod tests {
    use crate::engine::Fetcher;
    use crate::error::{Result, ScrapeError};
    use crate::tools::paginate::*;
    use std::cell::RefCell;
    use std::collections::{HashMap, HashSet};
    use url::Url;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    struct StubFetcher {
        pages: HashMap<String, String>,
        calls: RefCell<Vec<String>>,
    }

    impl StubFetcher {
        fn new(pages: &[(&str, &str)]) -> Self {
            Self {
                pages: pages
                    .iter()
                    .map(|(u, html)| (u.to_string(), html.to_string()))
                    .collect(),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl Fetcher for StubFetcher {
        fn fetch(&self, url: &Url) -> Result<String> {
            self.calls.borrow_mut().push(url.to_string());
            self.pages
                .get(url.as_str())
                .cloned()
                .ok_or_else(|| ScrapeError::fetch_error(url.as_str(), 3, "HTTP 404 Not Found"))
        }
    }

    #[test]
    fn test_rel_next_wins() {
        let html = r#"
            <a href="/p3" aria-label="Next page">Next</a>
            <a rel="next" href="/p2">2</a>
        "#;
        let next = next_page(html, &url("https://example.com/p1")).unwrap();
        assert_eq!(next.as_str(), "https://example.com/p2");
    }

    #[test]
    fn test_link_rel_next_in_head() {
        let html = r#"<html><head><link rel="next" href="?page=2"></head><body></body></html>"#;
        let next = next_page(html, &url("https://example.com/r?page=1")).unwrap();
        assert_eq!(next.as_str(), "https://example.com/r?page=2");
    }

    #[test]
    fn test_aria_label_and_text_match() {
        let html = r#"
            <a href="/about">About</a>
            <a href="/p2" aria-label="NEXT page"><span>→</span></a>
        "#;
        let next = next_page(html, &url("https://example.com/p1")).unwrap();
        assert_eq!(next.as_str(), "https://example.com/p2");

        let html = r#"<a href="/p5">Next <b>»</b></a>"#;
        let next = next_page(html, &url("https://example.com/p4")).unwrap();
        assert_eq!(next.as_str(), "https://example.com/p5");
    }

    #[test]
    fn test_paginator_testid() {
        let html = r#"<a data-testid="review-paginator-next" href="/p2"><svg></svg></a>"#;
        let next = next_page(html, &url("https://example.com/p1")).unwrap();
        assert_eq!(next.as_str(), "https://example.com/p2");
    }

    #[test]
    fn test_no_next_page() {
        let html = r#"<a href="/about">About</a><a aria-label="Next">disabled</a>"#;
        assert_eq!(next_page(html, &url("https://example.com/p1")), None);
    }

    #[test]
    fn test_javascript_href_skipped() {
        let html = r#"
            <a rel="next" href="javascript:void(0)">Next</a>
            <a data-testid="review-paginator-next" href="/p2">›</a>
        "#;
        let next = next_page(html, &url("https://example.com/p1")).unwrap();
        assert_eq!(next.as_str(), "https://example.com/p2");
    }

    #[test]
    fn test_visited_candidates_fall_through() {
        let html = r#"
            <a rel="next" href="/p1">back to start</a>
            <a href="/p3">Next</a>
        "#;
        let mut visited = HashSet::new();
        visited.insert(url("https://example.com/p1"));

        let next = next_page_excluding(html, &url("https://example.com/p2"), &visited).unwrap();
        assert_eq!(next.as_str(), "https://example.com/p3");

        visited.insert(url("https://example.com/p3"));
        assert_eq!(
            next_page_excluding(html, &url("https://example.com/p2"), &visited),
            None
        );
    }

    #[test]
    fn test_pages_follow_chain_in_order() {
        let fetcher = StubFetcher::new(&[
            ("https://example.com/p1", r#"<a rel="next" href="/p2">2</a>"#),
            ("https://example.com/p2", r#"<a rel="next" href="/p3">3</a>"#),
            ("https://example.com/p3", "<p>last page</p>"),
        ]);

        let urls: Vec<String> = Pages::new(&fetcher, url("https://example.com/p1"))
            .map(|page| page.url.to_string())
            .collect();
        assert_eq!(
            urls,
            vec![
                "https://example.com/p1",
                "https://example.com/p2",
                "https://example.com/p3"
            ]
        );
    }

    #[test]
    fn test_pages_stop_on_cycle() {
        let fetcher = StubFetcher::new(&[
            ("https://example.com/p1", r#"<a rel="next" href="/p2">2</a>"#),
            ("https://example.com/p2", r#"<a rel="next" href="/p1">1</a>"#),
        ]);

        let pages = Pages::new(&fetcher, url("https://example.com/p1"));
        assert_eq!(pages.count(), 2);
        assert_eq!(fetcher.calls.borrow().len(), 2);
    }

    #[test]
    fn test_pages_stop_on_fetch_failure() {
        let fetcher = StubFetcher::new(&[(
            "https://example.com/p1",
            r#"<a rel="next" href="/missing">2</a>"#,
        )]);

        let mut pages = Pages::new(&fetcher, url("https://example.com/p1"));
        assert!(pages.next().is_some());
        assert!(pages.next().is_none());
        assert!(pages.next().is_none());
        assert_eq!(
            *fetcher.calls.borrow(),
            vec!["https://example.com/p1", "https://example.com/missing"]
        );
        assert_eq!(pages.visited().len(), 2);
    }

    #[test]
    fn test_pages_stop_on_empty_body() {
        let fetcher = StubFetcher::new(&[("https://example.com/p1", "  \n ")]);
        let mut pages = Pages::new(&fetcher, url("https://example.com/p1"));
        assert!(pages.next().is_none());
    }
}
