//! Review-card extraction.

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, trace};

use super::types::{CardOutcome, SkipReason};
use super::utils::{first_decimal, first_text, parse_timestamp};
use crate::selectors::{
    CUSTOMER_TYPE_SELECTORS, IMAGE_SELECTOR, LEGACY_REVIEW_CARD_SELECTOR, NEGATIVE_TEXT_SELECTOR,
    PARAGRAPH_SELECTOR, POSITIVE_TEXT_SELECTOR, REVIEWER_COUNTRY_SELECTORS,
    REVIEWER_NAME_SELECTORS, REVIEWER_TYPE_SELECTORS, REVIEW_CARD_SELECTOR,
    REVIEW_SCORE_SELECTORS, REVIEW_TITLE_SELECTORS, ROOM_TYPE_SELECTORS, STAY_DATE_SELECTORS,
    TIME_SELECTOR,
};
use crate::tools::clean::{absolute_url, first_digit_run, non_empty_text};
use crate::types::{Booking, Guest, ReviewRecord};

/// Extract one outcome per review card, in document order.
///
/// Stable test-id cards are preferred; legacy class and micro-data cards are
/// only considered when none are present.
pub fn extract_review_cards(doc: &Html, language_hint: Option<&str>) -> Vec<CardOutcome> {
    let mut cards: Vec<ElementRef> = doc.select(&REVIEW_CARD_SELECTOR).collect();
    if cards.is_empty() {
        cards = doc.select(&LEGACY_REVIEW_CARD_SELECTOR).collect();
        if !cards.is_empty() {
            trace!(count = cards.len(), "using legacy review card selectors");
        }
    }

    let document_lang = doc
        .root_element()
        .value()
        .attr("lang")
        .and_then(non_blank);
    let fallback_lang = document_lang.or_else(|| language_hint.and_then(non_blank));

    cards
        .iter()
        .enumerate()
        .map(|(index, card)| match parse_card(card, fallback_lang) {
            Ok(review) => CardOutcome::Parsed(review),
            Err(reason) => {
                debug!(index, %reason, "skipping review card");
                CardOutcome::Skipped { index, reason }
            }
        })
        .collect()
}

fn parse_card(
    card: &ElementRef<'_>,
    fallback_lang: Option<&str>,
) -> Result<ReviewRecord, SkipReason> {
    let (positive_content, negative_content) = sentiment_text(card);

    let review = ReviewRecord {
        score: first_decimal(card, &REVIEW_SCORE_SELECTORS),
        review_date: review_date(card),
        title: first_text(card, &REVIEW_TITLE_SELECTORS).unwrap_or_default(),
        positive_content,
        negative_content,
        language: card_language(card, fallback_lang),
        guest: Guest {
            name: first_text(card, &REVIEWER_NAME_SELECTORS),
            country: first_text(card, &REVIEWER_COUNTRY_SELECTORS),
            kind: first_text(card, &REVIEWER_TYPE_SELECTORS),
        },
        booking: Booking {
            room_type: first_text(card, &ROOM_TYPE_SELECTORS),
            check_in: None,
            check_out: None,
            nights: first_text(card, &STAY_DATE_SELECTORS)
                .and_then(|stay| first_digit_run(&stay))
                .and_then(|n| u32::try_from(n).ok()),
            customer_type: first_text(card, &CUSTOMER_TYPE_SELECTORS),
        },
        photos: photos(card),
    };

    if review.has_content() {
        Ok(review)
    } else {
        Err(SkipReason::NoContent)
    }
}

/// Only machine-readable `datetime` attributes are trusted.
fn review_date(card: &ElementRef<'_>) -> Option<i64> {
    let raw = card.select(&TIME_SELECTOR).next()?.value().attr("datetime")?;
    let ts = parse_timestamp(raw);
    if ts.is_none() {
        trace!(raw, "unparseable review datetime attribute");
    }
    ts
}

/// Explicit liked/disliked text, or the paragraph heuristic when both are empty.
fn sentiment_text(card: &ElementRef<'_>) -> (String, String) {
    let text = |sel: &Selector| {
        card.select(sel)
            .next()
            .and_then(|el| non_empty_text(&el))
            .unwrap_or_default()
    };
    let positive = text(&POSITIVE_TEXT_SELECTOR);
    let negative = text(&NEGATIVE_TEXT_SELECTOR);
    if !positive.is_empty() || !negative.is_empty() {
        return (positive, negative);
    }

    trace!("no sentiment text, splitting paragraphs");
    let mut paragraphs = card
        .select(&PARAGRAPH_SELECTOR)
        .filter_map(|p| non_empty_text(&p));

    let first = paragraphs.next().unwrap_or_default();
    let rest = paragraphs.collect::<Vec<_>>().join(" ");
    (first, rest)
}

fn card_language(card: &ElementRef<'_>, fallback: Option<&str>) -> Option<String> {
    let el = card.value();
    el.attr("lang")
        .and_then(non_blank)
        .or_else(|| el.attr("data-review-language").and_then(non_blank))
        .or(fallback)
        .map(str::to_string)
}

/// `src` wins over `data-src` when present; the chosen value must be absolute.
fn photos(card: &ElementRef<'_>) -> Vec<String> {
    let candidates = card.select(&IMAGE_SELECTOR).filter_map(|img| {
        let img = img.value();
        img.attr("src")
            .and_then(non_blank)
            .or_else(|| img.attr("data-src").and_then(non_blank))
            .and_then(absolute_url)
    });
    crate::dedupe!(candidates)
}

fn non_blank(value: &str) -> Option<&str> {
    let value = value.trim();
    (!value.is_empty()).then_some(value)
}
