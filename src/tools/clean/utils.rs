/// Private helpers for text normalization
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

// Lazy static regex for whitespace normalization
static WHITESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Collapse every whitespace run (spaces, tabs, newlines, NBSP) and trim.
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_REGEX
        .replace_all(text, " ")
        .trim()
        .to_string()
}

/// Parse a decimal with either `.` or `,` as separator. Non-finite values are rejected.
pub fn parse_decimal(text: &str) -> Option<f64> {
    let candidate = text.trim().replace(',', ".");
    if candidate.is_empty() {
        return None;
    }
    candidate.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Concatenate every ASCII digit in the text: "1,234 reviews" -> 1234.
pub fn all_digits(text: &str) -> Option<u64> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// First contiguous ASCII digit run: "Stayed 2 nights in August 2022" -> 2.
pub fn first_digit_run(text: &str) -> Option<u64> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let run: String = text[start..]
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    run.parse().ok()
}

/// Stable category key for a score label.
pub fn category_key(label: &str) -> String {
    label
        .trim()
        .to_lowercase()
        .replace([' ', '-'], "_")
}

/// Keep a URL only if it carries both a scheme and a host.
pub fn absolute_url(raw: &str) -> Option<String> {
    let candidate = raw.trim();
    if candidate.is_empty() {
        return None;
    }
    match Url::parse(candidate) {
        Ok(url) if url.has_host() => Some(candidate.to_string()),
        _ => None,
    }
}
