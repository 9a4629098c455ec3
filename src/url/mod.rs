//! URL handling module
//!
//! This module turns raw `href` values into crawlable addresses and decides
//! which of them belong to the page they were found on:
//! - scheme validation for addresses entering the crawl
//! - resolution of relative references against a page's origin
//! - origin extraction and same-origin scope checks

mod normalize;
mod origin;

pub use normalize::{has_http_scheme, normalize_link};
pub use origin::{origin_of, same_origin};

#[cfg(test)]
mod tests {
    use super::*;

    // A link only enters the frontier when it normalizes against the source
    // origin and lands back on that same origin.
    fn admitted(raw: &str, source: &str) -> Option<String> {
        let origin = origin_of(source)?;
        normalize_link(Some(raw), &origin).filter(|link| same_origin(link, &origin))
    }

    #[test]
    fn test_relative_link_is_admitted() {
        assert_eq!(
            admitted("/about", "https://example.com/"),
            Some("https://example.com/about".to_string())
        );
    }

    #[test]
    fn test_absolute_same_origin_link_is_admitted_unchanged() {
        assert_eq!(
            admitted("https://example.com/a?b=c#d", "https://example.com/x/y"),
            Some("https://example.com/a?b=c#d".to_string())
        );
    }

    #[test]
    fn test_foreign_origin_is_rejected() {
        assert_eq!(admitted("https://other.org/", "https://example.com/"), None);
    }

    #[test]
    fn test_scheme_change_is_rejected() {
        assert_eq!(admitted("http://example.com/", "https://example.com/"), None);
    }

    #[test]
    fn test_subdomain_is_rejected() {
        assert_eq!(
            admitted("https://blog.example.com/", "https://example.com/"),
            None
        );
    }

    #[test]
    fn test_non_http_references_are_rejected() {
        assert_eq!(admitted("mailto:team@example.com", "https://example.com/"), None);
        assert_eq!(admitted("javascript:void(0)", "https://example.com/"), None);
        assert_eq!(admitted("", "https://example.com/"), None);
    }
}
