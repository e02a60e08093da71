//! URL Utility Functions
//!
//! URL validation, resolution, and extraction helpers used when resolving
//! lazy-loaded images, checking Open Graph URLs against the current page,
//! and deriving the site host for the product record.

use url::Url;

/// Check if a string is a valid absolute http(s) URL.
///
/// # Returns
/// * `(is_absolute, parsed_url)` - Whether URL is absolute and the parsed URL if valid
#[must_use]
pub fn is_absolute_url(s: &str) -> (bool, Option<Url>) {
    let s = s.trim();

    if s.is_empty() {
        return (false, None);
    }

    // Must start with http:// or https://
    if !s.starts_with("http://") && !s.starts_with("https://") {
        return (false, None);
    }

    match Url::parse(s) {
        Ok(url) => {
            // Verify it has a host
            if url.host().is_some() {
                (true, Some(url))
            } else {
                (false, None)
            }
        }
        Err(_) => (false, None),
    }
}

/// Convert a relative or absolute URL to absolute form.
///
/// # Arguments
/// * `url_str` - The URL to resolve (can be relative or absolute)
/// * `base` - The base URL for resolution
///
/// # Returns
/// * The absolute URL string, or the original if resolution fails
#[must_use]
pub fn create_absolute_url(url_str: &str, base: &Url) -> String {
    let url_str = url_str.trim();

    if url_str.is_empty() {
        return String::new();
    }

    // Preserve special URLs unchanged
    if url_str.starts_with("data:")
        || url_str.starts_with("javascript:")
        || url_str.starts_with("mailto:")
        || url_str.starts_with("tel:")
    {
        return url_str.to_string();
    }

    // If already absolute, return as-is
    let (is_abs, _) = is_absolute_url(url_str);
    if is_abs {
        return url_str.to_string();
    }

    // Resolve relative URL against base
    match base.join(url_str) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => url_str.to_string(),
    }
}

/// Extract the hostname (domain) from a URL.
///
/// # Returns
/// * The hostname, or `None` if the URL is not absolute
#[must_use]
pub fn extract_hostname(url_str: &str) -> Option<String> {
    let (is_abs, parsed) = is_absolute_url(url_str);

    if !is_abs {
        return None;
    }

    parsed.and_then(|url| url.host_str().map(std::string::ToString::to_string))
}

/// Strip a leading "www." from a hostname.
///
/// The product record's `site_host` and the site-profile lookup both use
/// the stripped form.
#[must_use]
pub fn strip_www(host: &str) -> &str {
    host.strip_prefix("www.").unwrap_or(host)
}

/// Strip the query string and fragment from a URL string.
///
/// Used for the "same page" checks that compare structured-data URLs with
/// the current page URL; tracking parameters would otherwise defeat them.
#[must_use]
pub fn strip_query(url_str: &str) -> &str {
    let without_query = url_str.split('?').next().unwrap_or(url_str);
    without_query.split('#').next().unwrap_or(without_query)
}

/// Parse a URL string into a Url object.
///
/// # Returns
/// * `Some(Url)` if valid absolute URL, `None` otherwise
#[must_use]
pub fn parse_url(url_str: &str) -> Option<Url> {
    let (is_abs, parsed) = is_absolute_url(url_str);
    if is_abs {
        parsed
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_absolute_url_valid() {
        let (is_abs, url) = is_absolute_url("https://example.com/path");
        assert!(is_abs);
        assert!(url.is_some());

        let (is_abs, url) = is_absolute_url("http://example.com");
        assert!(is_abs);
        assert!(url.is_some());
    }

    #[test]
    fn test_is_absolute_url_invalid() {
        let (is_abs, _) = is_absolute_url("/relative/path");
        assert!(!is_abs);

        let (is_abs, _) = is_absolute_url("example.com");
        assert!(!is_abs);

        let (is_abs, _) = is_absolute_url("");
        assert!(!is_abs);

        let (is_abs, _) = is_absolute_url("ftp://example.com");
        assert!(!is_abs); // Only http/https
    }

    #[test]
    fn test_create_absolute_url_relative() {
        let Some(base) = parse_url("https://tienda.cl/producto/") else {
            panic!("base URL should parse");
        };

        assert_eq!(
            create_absolute_url("imagen.jpg", &base),
            "https://tienda.cl/producto/imagen.jpg"
        );

        assert_eq!(
            create_absolute_url("/media/imagen.jpg", &base),
            "https://tienda.cl/media/imagen.jpg"
        );
    }

    #[test]
    fn test_create_absolute_url_already_absolute() {
        let Some(base) = parse_url("https://tienda.cl/") else {
            panic!("base URL should parse");
        };

        assert_eq!(
            create_absolute_url("https://cdn.tienda.cl/imagen.jpg", &base),
            "https://cdn.tienda.cl/imagen.jpg"
        );
    }

    #[test]
    fn test_create_absolute_url_special() {
        let Some(base) = parse_url("https://tienda.cl/") else {
            panic!("base URL should parse");
        };

        assert_eq!(
            create_absolute_url("data:image/png;base64,abc", &base),
            "data:image/png;base64,abc"
        );

        assert_eq!(
            create_absolute_url("javascript:void(0)", &base),
            "javascript:void(0)"
        );
    }

    #[test]
    fn test_extract_hostname() {
        assert_eq!(
            extract_hostname("https://www.tienda.cl/p/1"),
            Some("www.tienda.cl".to_string())
        );
        assert_eq!(extract_hostname("/relative"), None);
        assert_eq!(extract_hostname(""), None);
    }

    #[test]
    fn test_strip_www() {
        assert_eq!(strip_www("www.lider.cl"), "lider.cl");
        assert_eq!(strip_www("lider.cl"), "lider.cl");
        assert_eq!(strip_www("cdn.www.example.com"), "cdn.www.example.com");
    }

    #[test]
    fn test_strip_query() {
        assert_eq!(
            strip_query("https://tienda.cl/p/1?utm_source=mail"),
            "https://tienda.cl/p/1"
        );
        assert_eq!(
            strip_query("https://tienda.cl/p/1#galeria"),
            "https://tienda.cl/p/1"
        );
        assert_eq!(strip_query("https://tienda.cl/p/1"), "https://tienda.cl/p/1");
    }
}
