use chrono::{DateTime, NaiveDate, NaiveDateTime};
use scraper::{ElementRef, Selector};

use crate::tools::clean::{non_empty_text, parse_decimal};

/// First non-empty text produced by a selector cascade, tried in order.
///
/// Each selector is an independent attempt: an element that matches but has
/// no visible text does not stop the cascade.
pub(super) fn first_text(scope: &ElementRef<'_>, cascade: &[Selector]) -> Option<String> {
    cascade
        .iter()
        .find_map(|sel| scope.select(sel).next().and_then(|el| non_empty_text(&el)))
}

/// First parseable decimal produced by a selector cascade.
///
/// Micro-data `<meta itemprop=... content=...>` carries no text, so the
/// `content` attribute is read when the element is textless.
pub(super) fn first_decimal(scope: &ElementRef<'_>, cascade: &[Selector]) -> Option<f64> {
    cascade.iter().find_map(|sel| {
        let el = scope.select(sel).next()?;
        let raw = non_empty_text(&el).or_else(|| el.value().attr("content").map(str::to_string))?;
        parse_decimal(&raw)
    })
}

/// Convert a machine-readable `datetime` attribute to a UTC UNIX timestamp.
///
/// Accepted: RFC 3339 / ISO-8601 with offset (`Z` = UTC, seconds optional),
/// naive date-times (read as UTC) and bare dates (UTC midnight).
pub(crate) fn parse_timestamp(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp());
    }
    let with_offset = match raw.strip_suffix(['Z', 'z']) {
        Some(local) => format!("{local}+00:00"),
        None => raw.to_string(),
    };
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M%#z"] {
        if let Ok(dt) = DateTime::parse_from_str(&with_offset, fmt) {
            return Some(dt.timestamp());
        }
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc().timestamp());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().timestamp())
}
