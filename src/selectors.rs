//! Shared Selectors
//!
//! Field cascades are ordered: the stable `data-testid` selector first, then
//! legacy class names and micro-data attributes.

use scraper::Selector;
use std::sync::LazyLock;

fn compile(css: &str) -> Selector {
    Selector::parse(css).expect("valid selector")
}

fn cascade(list: &[&str]) -> Vec<Selector> {
    list.iter().map(|css| compile(css)).collect()
}

/* ---------- structured data / document ---------- */

/// Selector for JSON-LD script tags.
pub static JSONLD_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| compile("script[type='application/ld+json']"));

/* ---------- hotel statistics ---------- */

/// "Based on 263 reviews" subtitle.
pub static SCORE_SUBTITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| compile(r#"[data-testid="review-score-subtitle"]"#));

pub static SUBSCORE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| compile(r#"[data-testid="review-subscore"]"#));

pub static SUBSCORE_TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| compile(r#"[data-testid="review-subscore-title"]"#));

pub static SUBSCORE_VALUE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| compile(r#"[data-testid="review-subscore-value"]"#));

/* ---------- review cards ---------- */

pub static REVIEW_CARD_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| compile(r#"[data-testid="review-card"]"#));

pub static LEGACY_REVIEW_CARD_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| compile(r#".review_list_new_item_block, [itemprop="review"]"#));

pub static REVIEW_SCORE_SELECTORS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    cascade(&[
        r#"[data-testid="review-score"]"#,
        ".bui-review-score__badge",
        r#"[itemprop="ratingValue"]"#,
    ])
});

pub static REVIEW_TITLE_SELECTORS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    cascade(&[r#"[data-testid="review-title"]"#, "h3", ".review-title"])
});

pub static TIME_SELECTOR: LazyLock<Selector> = LazyLock::new(|| compile("time[datetime]"));

pub static POSITIVE_TEXT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| compile(r#"[data-testid="review-positive-text"]"#));

pub static NEGATIVE_TEXT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| compile(r#"[data-testid="review-negative-text"]"#));

pub static PARAGRAPH_SELECTOR: LazyLock<Selector> = LazyLock::new(|| compile("p"));

pub static REVIEWER_NAME_SELECTORS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    cascade(&[r#"[data-testid="reviewer-name"]"#, ".bui-avatar-block__title"])
});

pub static REVIEWER_COUNTRY_SELECTORS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    cascade(&[r#"[data-testid="reviewer-country"]"#, ".bui-avatar-block__subtitle"])
});

pub static REVIEWER_TYPE_SELECTORS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    cascade(&[r#"[data-testid="reviewer-type"]"#, ".review-panel-wide__traveller_type"])
});

pub static ROOM_TYPE_SELECTORS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    cascade(&[r#"[data-testid="review-room-type"]"#, ".c-review-block__room-link"])
});

pub static STAY_DATE_SELECTORS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    cascade(&[r#"[data-testid="review-stay-date"]"#, ".c-review-block__stay-date"])
});

pub static CUSTOMER_TYPE_SELECTORS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    cascade(&[r#"[data-testid="review-customer-type"]"#, ".review-panel-wide__customer_type"])
});

pub static IMAGE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| compile("img"));

/* ---------- pagination ---------- */

pub static REL_NEXT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| compile(r#"a[rel~="next"], link[rel~="next"]"#));

/// Selector for anchor elements with hrefs.
pub static LINK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| compile("a[href]"));

pub static PAGINATOR_NEXT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| compile(r#"a[data-testid="review-paginator-next"]"#));
