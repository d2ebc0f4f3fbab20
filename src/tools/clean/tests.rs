#![cfg(test)]
mod tests {
    use crate::tools::clean::*;
    use scraper::{Html, Selector};

    fn first(html: &str, css: &str) -> String {
        let doc = Html::parse_fragment(html);
        let sel = Selector::parse(css).unwrap();
        let el = doc.select(&sel).next().unwrap();
        element_text(&el)
    }

    #[test]
    fn test_element_text_joins_inline_markup() {
        assert_eq!(
            first("<div>Very <b>clean</b><i>room</i> and\n\tquiet</div>", "div"),
            "Very cleanroom and quiet"
        );
    }

    #[test]
    fn test_element_text_nbsp_and_entities() {
        assert_eq!(first("<span>&nbsp;Value&nbsp;for money </span>", "span"), "Value for money");
        assert_eq!(first("<span>Bed &amp; Breakfast</span>", "span"), "Bed & Breakfast");
    }

    #[test]
    fn test_non_empty_text() {
        let doc = Html::parse_fragment("<p> \n </p><p>x</p>");
        let sel = Selector::parse("p").unwrap();
        let texts: Vec<_> = doc.select(&sel).map(|p| non_empty_text(&p)).collect();
        assert_eq!(texts, vec![None, Some("x".to_string())]);
    }

    #[test]
    fn test_key_from_rendered_label() {
        let label = first("<span> Value  for\nMoney </span>", "span");
        assert_eq!(category_key(&label), "value_for_money");
    }
}
