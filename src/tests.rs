//! Tests

#[cfg(test)]
mod tests {
    use crate::engine::{Engine, EngineOptions, Fetcher};
    use crate::error::{Result, ScrapeError};
    use crate::tools::export::{export_dataset, ExportFormat};
    use std::collections::HashMap;
    use url::Url;

    /// Serves canned pages; anything else fails like an exhausted fetch.
    struct CannedSite(HashMap<&'static str, &'static str>);

    impl Fetcher for CannedSite {
        fn fetch(&self, url: &Url) -> Result<String> {
            self.0
                .get(url.as_str())
                .map(|html| html.to_string())
                .ok_or_else(|| ScrapeError::fetch_error(url.as_str(), 3, "HTTP 503"))
        }
    }

    const PAGE_ONE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <script type="application/ld+json">{"@context": "https://schema.org", "@type": "BreadcrumbList"}</script>
  <script type="application/ld+json">
    {"@context": "https://schema.org", "@type": "Hotel", "name": "Canal House",
     "aggregateRating": {"@type": "AggregateRating", "ratingValue": "8.7", "reviewCount": "1,234x"}}
  </script>
</head>
<body>
  <div data-testid="review-score-subtitle">Based on 1,234 reviews</div>
  <div data-testid="review-subscore">
    <span data-testid="review-subscore-title">Staff</span>
    <span data-testid="review-subscore-value">9,3</span>
  </div>
  <div data-testid="review-subscore">
    <span data-testid="review-subscore-title">Value for money</span>
    <span data-testid="review-subscore-value">8,1</span>
  </div>

  <div data-testid="review-card" lang="nl">
    <div data-testid="review-score">9,0</div>
    <h3 data-testid="review-title">Prachtig</h3>
    <time datetime="2022-08-26T00:00:00Z">26 augustus 2022</time>
    <div data-testid="review-positive-text">Mooie kamer</div>
    <div data-testid="review-negative-text">Steile trap</div>
    <span data-testid="reviewer-name">Joost</span>
    <span data-testid="reviewer-country">Netherlands</span>
    <span data-testid="review-stay-date">3 nights · August 2022</span>
    <img src="https://cf.example.com/photo/1.jpg">
    <img src="/static/avatar.png">
  </div>
  <div data-testid="review-card"></div>
  <div data-testid="review-card">
    <h3 data-testid="review-title">Great stay</h3>
    <p>Breakfast was excellent.</p>
  </div>

  <a data-testid="review-paginator-next" href="/reviews/canal-house?page=2">›</a>
</body>
</html>"#;

    const PAGE_TWO: &str = r#"<!DOCTYPE html>
<html>
<body>
  <div data-testid="review-subscore">
    <span data-testid="review-subscore-title">Location</span>
    <span data-testid="review-subscore-value">9.8</span>
  </div>
  <div data-testid="review-card">
    <h3 data-testid="review-title">Okay</h3>
    <p>Central.</p>
    <p>Thin walls.</p>
    <p>Small shower.</p>
  </div>
  <a rel="next" href="/reviews/canal-house?page=1">Back</a>
</body>
</html>"#;

    fn site() -> CannedSite {
        CannedSite(HashMap::from([
            ("https://hotels.example.com/reviews/canal-house?page=1", PAGE_ONE),
            ("https://hotels.example.com/reviews/canal-house?page=2", PAGE_TWO),
        ]))
    }

    fn start() -> Url {
        Url::parse("https://hotels.example.com/reviews/canal-house?page=1").unwrap()
    }

    #[test]
    fn test_scrape_two_pages() {
        let site = site();
        let engine = Engine::new(
            &site,
            EngineOptions {
                max_items: 100,
                language: Some("de".to_string()),
            },
        );
        let result = engine.scrape(&start());

        // JSON-LD count is unusable, so the subtitle supplies the total.
        assert_eq!(result.hotel_stats.total_reviews, Some(1234));
        // Scores come from the first page that has any.
        let keys: Vec<_> = result.hotel_stats.scores.keys().cloned().collect();
        assert_eq!(keys, vec!["staff", "value_for_money"]);
        assert_eq!(result.hotel_stats.scores["staff"].score, 9.3);

        assert_eq!(result.reviews.len(), 3);

        let first = &result.reviews[0];
        assert_eq!(first.score, Some(9.0));
        assert_eq!(first.review_date, Some(1_661_472_000));
        assert_eq!(first.language.as_deref(), Some("nl"));
        assert_eq!(first.booking.nights, Some(3));
        assert_eq!(first.photos, vec!["https://cf.example.com/photo/1.jpg".to_string()]);

        let second = &result.reviews[1];
        assert_eq!(second.title, "Great stay");
        assert_eq!(second.positive_content, "Breakfast was excellent.");
        assert_eq!(second.language.as_deref(), Some("en"));

        let third = &result.reviews[2];
        assert_eq!(third.positive_content, "Central.");
        assert_eq!(third.negative_content, "Thin walls. Small shower.");
        assert_eq!(third.language.as_deref(), Some("de"));
    }

    #[test]
    fn test_scrape_and_export() {
        let site = site();
        let result = Engine::new(
            &site,
            EngineOptions {
                max_items: 2,
                language: None,
            },
        )
        .scrape(&start());
        assert_eq!(result.reviews.len(), 2);

        let dir = tempfile::tempdir().unwrap();
        let written = export_dataset(
            &result.hotel_stats,
            &result.reviews,
            &dir.path().join("out/reviews"),
            &[ExportFormat::Json, ExportFormat::Csv],
        )
        .unwrap();
        assert_eq!(written.len(), 2);

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&written[0]).unwrap()).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 2);
        assert_eq!(json[0]["hotelStats"]["totalReviews"], 1234);
        assert_eq!(json[0]["title"], "Prachtig");

        let csv_text = std::fs::read_to_string(&written[1]).unwrap();
        assert_eq!(csv_text.lines().count(), 3);
        assert!(csv_text.lines().next().unwrap().contains("hotelStats.scores.staff"));
    }

    #[test]
    fn test_unreachable_start_exports_empty_dataset() {
        let site = CannedSite(HashMap::new());
        let result = Engine::new(&site, EngineOptions::default()).scrape(&start());
        assert!(result.reviews.is_empty());
        assert_eq!(result.hotel_stats.total_reviews, Some(0));

        let dir = tempfile::tempdir().unwrap();
        let written = export_dataset(
            &result.hotel_stats,
            &result.reviews,
            &dir.path().join("empty.json"),
            &[ExportFormat::Json],
        )
        .unwrap();
        assert_eq!(std::fs::read_to_string(&written[0]).unwrap().trim(), "[]");
    }
}
