//! Readable-content extraction.
//!
//! Finds the main content area of a page with readability-style selector
//! heuristics and flattens it to whitespace-normalized text, skipping
//! navigation chrome, scripts, and styles.

use scraper::{ElementRef, Html, Selector};
use tas_shared::{Result, TasError};

/// Title and body text extracted from a page.
#[derive(Debug, Clone)]
pub struct PageText {
    /// `<title>` contents, if present.
    pub title: Option<String>,
    /// Whitespace-normalized body text.
    pub text: String,
}

/// Extracts readable content from raw HTML.
///
/// Constructor-injected into the html processor so tests can substitute a
/// failing implementation.
pub trait ContentExtractor: Send + Sync {
    /// Extract title and body text, or fail for pages with no readable
    /// content. Failures here are expected for malformed pages and are
    /// degraded, not propagated, by the caller.
    fn extract(&self, html: &str) -> Result<PageText>;
}

/// Default readability-heuristic extractor.
pub struct ReadableContentExtractor;

/// Elements whose text never belongs to the readable body.
const CHROME_TAGS: &[&str] = &[
    "nav", "header", "footer", "aside", "script", "style", "noscript", "iframe", "svg",
];

impl ContentExtractor for ReadableContentExtractor {
    fn extract(&self, html: &str) -> Result<PageText> {
        let doc = Html::parse_document(html);
        let title = title_from_document(&doc);

        // Try known content containers in priority order, then fall back
        // to the whole body.
        let selectors = ["main", "article", r#"[role="main"]"#, ".content", "body"];

        for sel_str in selectors {
            let sel = Selector::parse(sel_str).unwrap();
            if let Some(el) = doc.select(&sel).next() {
                let text = readable_text(el);
                if !text.is_empty() {
                    return Ok(PageText { title, text });
                }
            }
        }

        Err(TasError::extraction("no readable text in document"))
    }
}

/// Best-effort `<title>` lookup, independent of body extraction. Used to
/// keep a title on degraded results when content extraction fails.
pub fn extract_title(html: &str) -> Option<String> {
    title_from_document(&Html::parse_document(html))
}

fn title_from_document(doc: &Html) -> Option<String> {
    let title_sel = Selector::parse("title").unwrap();
    doc.select(&title_sel)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty())
}

/// Flatten an element to text, skipping chrome elements, and collapse
/// whitespace runs to single spaces.
fn readable_text(el: ElementRef<'_>) -> String {
    let mut raw = String::new();
    collect_text(el, &mut raw);
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn collect_text(el: ElementRef<'_>, out: &mut String) {
    for child in el.children() {
        if let Some(child_el) = ElementRef::wrap(child) {
            if !CHROME_TAGS.contains(&child_el.value().name()) {
                collect_text(child_el, out);
            }
        } else if let Some(text) = child.value().as_text() {
            out.push_str(text);
            out.push(' ');
        }
    }
}
