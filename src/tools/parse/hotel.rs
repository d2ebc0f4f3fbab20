//! Hotel-level statistics: review total and category scores.

use scraper::Html;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::{debug, trace};

use crate::selectors::{
    JSONLD_SELECTOR, SCORE_SUBTITLE_SELECTOR, SUBSCORE_SELECTOR, SUBSCORE_TITLE_SELECTOR,
    SUBSCORE_VALUE_SELECTOR,
};
use crate::tools::clean::{all_digits, category_key, element_text, non_empty_text, parse_decimal};
use crate::types::{HotelStatistics, ScoreBounds, ScoreEntry};

/// `@type` values (lowercased) that identify the property itself.
const LODGING_TYPES: &[&str] = &["hotel", "lodgingbusiness"];

/// Extract whatever hotel statistics the document makes observable.
///
/// `total_reviews` comes from the first lodging JSON-LD block carrying a
/// count, then from the score subtitle. Category scores are collected
/// independently; a label seen twice keeps the last value.
pub fn extract_hotel_stats(doc: &Html) -> HotelStatistics {
    let total_reviews = total_from_jsonld(doc).or_else(|| total_from_subtitle(doc));

    HotelStatistics {
        total_reviews,
        scores: category_scores(doc),
    }
}

fn total_from_jsonld(doc: &Html) -> Option<u64> {
    doc.select(&JSONLD_SELECTOR)
        .enumerate()
        .find_map(|(block, script)| {
            let raw = script.text().collect::<String>();
            match parse_json_ld_block(&raw) {
                Ok(values) => values.iter().find_map(lodging_review_count),
                Err(err) => {
                    debug!(block, error = %err, "ignoring malformed JSON-LD block");
                    None
                }
            }
        })
}

fn total_from_subtitle(doc: &Html) -> Option<u64> {
    let node = doc.select(&SCORE_SUBTITLE_SELECTOR).next()?;
    let total = all_digits(&element_text(&node));
    if total.is_none() {
        trace!("review score subtitle present but carries no digits");
    }
    total
}

fn category_scores(doc: &Html) -> BTreeMap<String, ScoreEntry> {
    let mut scores = BTreeMap::new();

    for block in doc.select(&SUBSCORE_SELECTOR) {
        let label = block
            .select(&SUBSCORE_TITLE_SELECTOR)
            .next()
            .and_then(|el| non_empty_text(&el));
        let value = block
            .select(&SUBSCORE_VALUE_SELECTOR)
            .next()
            .and_then(|el| non_empty_text(&el));

        let (Some(label), Some(value)) = (label, value) else {
            trace!("subscore block without label or value");
            continue;
        };
        let Some(score) = parse_decimal(&value) else {
            trace!(%label, %value, "subscore value is not numeric");
            continue;
        };

        scores.insert(
            category_key(&label),
            ScoreEntry {
                score,
                translation: label,
                bounds: ScoreBounds::default(),
            },
        );
    }

    scores
}

/// Parse one JSON-LD script body into a flat list of objects.
///
/// Some pages concatenate objects in one script, so a failed parse is retried
/// once wrapped in brackets; the original error is reported if both fail.
pub(crate) fn parse_json_ld_block(txt: &str) -> Result<Vec<Value>, serde_json::Error> {
    let txt = txt.trim();
    if txt.is_empty() {
        return Ok(Vec::new());
    }

    match serde_json::from_str::<Value>(txt) {
        Ok(v) => Ok(flatten_jsonld(v)),
        Err(err) => serde_json::from_str::<Value>(&format!("[{txt}]"))
            .map(flatten_jsonld)
            .map_err(|_| err),
    }
}

fn flatten_jsonld(v: Value) -> Vec<Value> {
    let mut out = Vec::new();
    match v {
        Value::Array(arr) => {
            for it in arr {
                out.extend(flatten_jsonld(it));
            }
        }
        Value::Object(mut obj) => {
            if let Some(graph) = obj.remove("@graph") {
                out.extend(flatten_jsonld(graph));
                if !obj.is_empty() {
                    out.push(Value::Object(obj));
                }
            } else {
                out.push(Value::Object(obj));
            }
        }
        other => out.push(other),
    }
    out
}

fn is_lodging(obj: &Map<String, Value>) -> bool {
    let matches = |t: &str| LODGING_TYPES.iter().any(|l| t.eq_ignore_ascii_case(l));
    match obj.get("@type") {
        Some(Value::String(t)) => matches(t),
        Some(Value::Array(types)) => types.iter().filter_map(Value::as_str).any(matches),
        _ => false,
    }
}

fn lodging_review_count(value: &Value) -> Option<u64> {
    let obj = value.as_object().filter(|obj| is_lodging(obj))?;
    let aggregate = obj.get("aggregateRating")?.as_object()?;
    aggregate
        .get("reviewCount")
        .and_then(coerce_count)
        .or_else(|| aggregate.get("ratingCount").and_then(coerce_count))
}

/// Integer, non-negative float (truncated) or numeric string.
fn coerce_count(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f.trunc() as u64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flatten_handles_graph_and_lists() {
        let v = json!([
            {"@graph": [{"@type": "Organization"}, {"@type": "Hotel"}]},
            {"@type": "BreadcrumbList"}
        ]);
        let flat = flatten_jsonld(v);
        assert_eq!(flat.len(), 3);
        assert_eq!(flat[1]["@type"], "Hotel");
    }

    #[test]
    fn bracket_retry_accepts_concatenated_objects() {
        let values = parse_json_ld_block(r#"{"@type":"Hotel"}, {"@type":"Place"}"#).unwrap();
        assert_eq!(values.len(), 2);
        assert!(parse_json_ld_block("{not json").is_err());
        assert!(parse_json_ld_block("   ").unwrap().is_empty());
    }

    #[test]
    fn review_count_falls_back_to_rating_count() {
        let v = json!({"@type": "LodgingBusiness", "aggregateRating": {"ratingCount": "57"}});
        assert_eq!(lodging_review_count(&v), Some(57));
    }

    #[test]
    fn review_count_requires_lodging_type() {
        let v = json!({"@type": "Product", "aggregateRating": {"reviewCount": 10}});
        assert_eq!(lodging_review_count(&v), None);

        let v = json!({"@type": ["Place", "HOTEL"], "aggregateRating": {"reviewCount": 10}});
        assert_eq!(lodging_review_count(&v), Some(10));
    }

    #[test]
    fn count_coercion() {
        assert_eq!(coerce_count(&json!(42)), Some(42));
        assert_eq!(coerce_count(&json!(42.9)), Some(42));
        assert_eq!(coerce_count(&json!(" 42 ")), Some(42));
        assert_eq!(coerce_count(&json!(-3)), None);
        assert_eq!(coerce_count(&json!("many")), None);
        assert_eq!(coerce_count(&json!(true)), None);
    }
}
