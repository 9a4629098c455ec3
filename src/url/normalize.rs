use url::Url;

/// Returns true if the address carries an `http://` or `https://` scheme
///
/// This is the syntactic gate every address passes before it is stored or
/// fetched. Anything else (`ftp:`, `mailto:`, relative paths, the empty
/// string) is not crawlable.
///
/// # Examples
///
/// ```
/// use homebound::url::has_http_scheme;
///
/// assert!(has_http_scheme("https://example.com/"));
/// assert!(!has_http_scheme("ftp://example.com/"));
/// assert!(!has_http_scheme("/about"));
/// ```
pub fn has_http_scheme(address: &str) -> bool {
    address.starts_with("http://") || address.starts_with("https://")
}

/// Resolves a raw link reference into an absolute address
///
/// # Resolution Rules
///
/// 1. A missing, empty or whitespace-only reference resolves to nothing
/// 2. A reference that already has an http/https scheme is returned unchanged
/// 3. Anything else is joined onto `base_origin` with standard relative-URL
///    resolution
///
/// Resolution happens against the origin of the page, not the page address
/// itself, so `other` found on `https://example.com/docs/a` becomes
/// `https://example.com/other`.
///
/// The result is not scope-checked: `//cdn.example.net/x` or `mailto:` links
/// resolve to addresses on other origins or schemes, and it is up to
/// [`same_origin`](crate::url::same_origin) to reject them.
///
/// # Arguments
///
/// * `raw` - The reference as found in the page, if any
/// * `base_origin` - Origin of the page the reference was found on
///
/// # Returns
///
/// * `Some(String)` - The absolute address
/// * `None` - The reference was absent, empty, or could not be resolved
///
/// # Examples
///
/// ```
/// use homebound::url::normalize_link;
///
/// let origin = "https://example.com";
/// assert_eq!(
///     normalize_link(Some("/about"), origin),
///     Some("https://example.com/about".to_string())
/// );
/// assert_eq!(normalize_link(None, origin), None);
/// ```
pub fn normalize_link(raw: Option<&str>, base_origin: &str) -> Option<String> {
    let raw = raw?;
    if raw.trim().is_empty() {
        return None;
    }

    if has_http_scheme(raw) {
        return Some(raw.to_string());
    }

    let base = match Url::parse(base_origin) {
        Ok(base) => base,
        Err(e) => {
            tracing::debug!("Unusable base origin '{}': {}", base_origin, e);
            return None;
        }
    };

    match base.join(raw) {
        Ok(resolved) => Some(resolved.to_string()),
        Err(e) => {
            tracing::debug!(
                "Failed to resolve '{}' against '{}': {}",
                raw,
                base_origin,
                e
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "https://example.com";

    #[test]
    fn test_http_scheme_detection() {
        assert!(has_http_scheme("http://example.com"));
        assert!(has_http_scheme("https://example.com/page"));

        assert!(!has_http_scheme(""));
        assert!(!has_http_scheme("ftp://example.com"));
        assert!(!has_http_scheme("mailto:someone@example.com"));
        assert!(!has_http_scheme("//example.com/page"));
        assert!(!has_http_scheme("httpx://example.com"));
    }

    #[test]
    fn test_absent_reference() {
        assert_eq!(normalize_link(None, ORIGIN), None);
    }

    #[test]
    fn test_empty_reference() {
        assert_eq!(normalize_link(Some(""), ORIGIN), None);
        assert_eq!(normalize_link(Some("   "), ORIGIN), None);
    }

    #[test]
    fn test_absolute_reference_unchanged() {
        // No re-serialisation: the fragment and the odd casing in the path survive
        let raw = "https://other.org/Some/Path#frag";
        assert_eq!(normalize_link(Some(raw), ORIGIN), Some(raw.to_string()));
    }

    #[test]
    fn test_absolute_http_reference_unchanged() {
        let raw = "http://example.com/page";
        assert_eq!(normalize_link(Some(raw), ORIGIN), Some(raw.to_string()));
    }

    #[test]
    fn test_root_relative_reference() {
        assert_eq!(
            normalize_link(Some("/about"), ORIGIN),
            Some("https://example.com/about".to_string())
        );
    }

    #[test]
    fn test_path_relative_reference_resolves_against_origin() {
        assert_eq!(
            normalize_link(Some("docs/intro"), ORIGIN),
            Some("https://example.com/docs/intro".to_string())
        );
    }

    #[test]
    fn test_dot_segments_resolved() {
        assert_eq!(
            normalize_link(Some("./a/../b"), ORIGIN),
            Some("https://example.com/b".to_string())
        );
    }

    #[test]
    fn test_query_and_fragment_references() {
        assert_eq!(
            normalize_link(Some("?page=2"), ORIGIN),
            Some("https://example.com/?page=2".to_string())
        );
        assert_eq!(
            normalize_link(Some("#top"), ORIGIN),
            Some("https://example.com/#top".to_string())
        );
    }

    #[test]
    fn test_scheme_relative_reference_keeps_base_scheme() {
        assert_eq!(
            normalize_link(Some("//cdn.example.net/lib.js"), ORIGIN),
            Some("https://cdn.example.net/lib.js".to_string())
        );
    }

    #[test]
    fn test_origin_with_port() {
        assert_eq!(
            normalize_link(Some("/page1"), "http://127.0.0.1:8080"),
            Some("http://127.0.0.1:8080/page1".to_string())
        );
    }

    #[test]
    fn test_other_scheme_passes_through_join() {
        // Left for the scope filter to reject
        assert_eq!(
            normalize_link(Some("mailto:team@example.com"), ORIGIN),
            Some("mailto:team@example.com".to_string())
        );
    }

    #[test]
    fn test_unusable_base_yields_nothing() {
        assert_eq!(normalize_link(Some("/about"), "not an origin"), None);
    }
}
