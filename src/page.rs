//! Signal extraction from parsed HTML

use scraper::{Html, Selector};

/// The on-page signals the report evaluates
#[derive(Debug)]
pub struct PageSignals {
    /// Trimmed `<title>` text, `None` when absent or empty
    pub title: Option<String>,
    /// Trimmed `content` of `<meta name="description">`, `None` when absent or empty
    pub description: Option<String>,
    /// Trimmed text of every `<h1>`, in document order
    pub h1s: Vec<String>,
    /// Whitespace-token count of all text nodes in the document
    pub word_count: usize,
}

impl PageSignals {
    pub fn from_html(html: &str) -> Self {
        let doc = Html::parse_document(html);

        PageSignals {
            title: select_text(&doc, "title"),
            description: select_attr(&doc, "meta[name='description']", "content"),
            h1s: collect_h1s(&doc),
            word_count: count_words(&doc),
        }
    }
}

fn select_text(doc: &Html, sel: &str) -> Option<String> {
    let selector = Selector::parse(sel).ok()?;
    doc.select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}

fn select_attr(doc: &Html, sel: &str, attr: &str) -> Option<String> {
    let selector = Selector::parse(sel).ok()?;
    doc.select(&selector)
        .next()
        .and_then(|el| el.value().attr(attr))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn collect_h1s(doc: &Html) -> Vec<String> {
    let Ok(selector) = Selector::parse("h1") else {
        return Vec::new();
    };
    doc.select(&selector)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .collect()
}

fn count_words(doc: &Html) -> usize {
    doc.root_element()
        .text()
        .flat_map(str::split_whitespace)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_extracted_and_trimmed() {
        let signals = PageSignals::from_html("<html><head><title>  My Page  </title></head></html>");
        assert_eq!(signals.title, Some("My Page".to_string()));
    }

    #[test]
    fn test_empty_title_is_none() {
        let signals = PageSignals::from_html("<html><head><title>   </title></head></html>");
        assert_eq!(signals.title, None);
    }

    #[test]
    fn test_missing_title_is_none() {
        let signals = PageSignals::from_html("<html><body><p>no head</p></body></html>");
        assert_eq!(signals.title, None);
    }

    #[test]
    fn test_description_from_meta_content() {
        let html = r#"<head><meta name="description" content="A fine page."></head>"#;
        let signals = PageSignals::from_html(html);
        assert_eq!(signals.description, Some("A fine page.".to_string()));
    }

    #[test]
    fn test_meta_without_content_is_none() {
        let html = r#"<head><meta name="description"></head>"#;
        let signals = PageSignals::from_html(html);
        assert_eq!(signals.description, None);
    }

    #[test]
    fn test_other_meta_tags_ignored() {
        let html = r#"<head><meta name="keywords" content="seo, audit"></head>"#;
        let signals = PageSignals::from_html(html);
        assert_eq!(signals.description, None);
    }

    #[test]
    fn test_h1s_collected_in_order() {
        let html = "<body><h1>First</h1><p>text</p><h1> Second </h1></body>";
        let signals = PageSignals::from_html(html);
        assert_eq!(signals.h1s, vec!["First".to_string(), "Second".to_string()]);
    }

    #[test]
    fn test_no_h1_gives_empty_vec() {
        let signals = PageSignals::from_html("<body><h2>Not an h1</h2></body>");
        assert!(signals.h1s.is_empty());
    }

    #[test]
    fn test_word_count_whitespace_tokens() {
        let html = "<body><p>Hello world this is a test</p></body>";
        let signals = PageSignals::from_html(html);
        assert_eq!(signals.word_count, 6);
    }

    #[test]
    fn test_word_count_spans_elements() {
        let html = "<body><h1>Two words</h1><p>three more words</p></body>";
        let signals = PageSignals::from_html(html);
        assert_eq!(signals.word_count, 5);
    }
}
