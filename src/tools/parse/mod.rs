mod hotel;
mod review;
pub mod types;
mod utils;

pub use hotel::extract_hotel_stats;
pub use review::extract_review_cards;
pub use types::*;

use crate::types::{HotelStatistics, ReviewRecord};
use scraper::Html;

/// Parse one listing page into hotel statistics and review records.
///
/// Never fails: markup that cannot be understood leaves fields unset, and
/// cards without content are dropped. `total_reviews` is only filled when the
/// page itself shows it.
pub fn parse(html: &str, language_hint: Option<&str>) -> (HotelStatistics, Vec<ReviewRecord>) {
    parse_page(html, language_hint).into_parts()
}

/// Like [`parse`] but keeps one [`CardOutcome`] per detected card, skipped
/// cards included.
pub fn parse_page(html: &str, language_hint: Option<&str>) -> ParsedPage {
    let doc = Html::parse_document(html);

    ParsedPage {
        hotel_stats: extract_hotel_stats(&doc),
        cards: extract_review_cards(&doc, language_hint),
    }
}
