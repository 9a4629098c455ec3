//! HTML parser for extracting outbound references
//!
//! Only raw `href` values are collected here. Resolving them and deciding
//! whether they are worth following happens in [`crate::url`].

use scraper::{Html, Selector};
use std::collections::BTreeSet;

/// Elements whose `href` counts as an outbound link
const LINK_SELECTOR: &str = "a[href], area[href]";

/// Extracts the raw `href` values of every link element in the content
///
/// # Extraction Rules
///
/// **Include:**
/// - `<a href="...">` anywhere in the document
/// - `<area href="...">` (image map regions)
///
/// **Leave as-is:**
/// - Values are returned exactly as written, relative or absolute,
///   including `mailto:` and fragment-only references
///
/// The parser is error-tolerant: empty input, plain text or broken markup
/// simply yield fewer (or no) links.
///
/// # Arguments
///
/// * `html` - The page content
///
/// # Returns
///
/// The deduplicated set of `href` values
///
/// # Example
///
/// ```
/// use homebound::crawler::extract_links;
///
/// let html = r#"<a href="/a">A</a><a href="/a">again</a><a href="/b">B</a>"#;
/// let links = extract_links(html);
/// assert_eq!(links.len(), 2);
/// assert!(links.contains("/a"));
/// ```
pub fn extract_links(html: &str) -> BTreeSet<String> {
    let mut links = BTreeSet::new();
    if html.trim().is_empty() {
        return links;
    }

    let document = Html::parse_document(html);

    let Ok(selector) = Selector::parse(LINK_SELECTOR) else {
        return links;
    };

    for element in document.select(&selector) {
        if let Some(href) = element.value().attr("href") {
            links.insert(href.to_string());
        }
    }

    tracing::trace!("Extracted {} distinct references", links.len());
    links
}
