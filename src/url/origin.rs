use url::Url;

/// Extracts the origin (`scheme://host[:port]`) of an address
///
/// The host is lower-cased and a port equal to the scheme's default is
/// dropped, as canonicalised by the `url` crate. Addresses without a host
/// (`mailto:`, `data:`, unparseable input) have no origin.
///
/// # Examples
///
/// ```
/// use homebound::url::origin_of;
///
/// assert_eq!(
///     origin_of("https://Example.COM/path?q=1"),
///     Some("https://example.com".to_string())
/// );
/// assert_eq!(
///     origin_of("http://127.0.0.1:8080/"),
///     Some("http://127.0.0.1:8080".to_string())
/// );
/// assert_eq!(origin_of("mailto:someone@example.com"), None);
/// ```
pub fn origin_of(address: &str) -> Option<String> {
    let url = Url::parse(address).ok()?;
    let host = url.host_str()?;

    Some(match url.port() {
        Some(port) => format!("{}://{}:{}", url.scheme(), host, port),
        None => format!("{}://{}", url.scheme(), host),
    })
}

/// Returns true if `candidate` lives on exactly the given origin
///
/// Scheme, host and port must all match; `blog.example.com` is not in scope
/// for `https://example.com`, and neither is `http://example.com`.
pub fn same_origin(candidate: &str, origin: &str) -> bool {
    origin_of(candidate).is_some_and(|candidate_origin| candidate_origin == origin)
}
