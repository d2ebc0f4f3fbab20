mod tests;
mod utils;

pub use utils::{
    absolute_url, all_digits, category_key, first_digit_run, normalize_whitespace, parse_decimal,
};

use scraper::ElementRef;

/// Visible text of an element, whitespace-normalized.
///
/// All descendant text nodes are concatenated in document order before
/// collapsing, so inline markup (`<b>`, `<span>`) keeps its surrounding spaces.
///
/// # Examples
/// ```
/// use hotel_reviews::tools::clean::element_text;
/// use scraper::{Html, Selector};
///
/// let doc = Html::parse_fragment("<p>  Great <b>location</b>,\n close to the station </p>");
/// let p = doc.select(&Selector::parse("p").unwrap()).next().unwrap();
/// assert_eq!(element_text(&p), "Great location, close to the station");
/// ```
pub fn element_text(element: &ElementRef<'_>) -> String {
    normalize_whitespace(&element.text().collect::<String>())
}

/// Like [`element_text`] but `None` for elements with no visible text.
pub fn non_empty_text(element: &ElementRef<'_>) -> Option<String> {
    let text = element_text(element);
    (!text.is_empty()).then_some(text)
}
