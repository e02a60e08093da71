//! Image URL resolution.
//!
//! Product galleries lazy-load almost universally, so `src` alone is not
//! enough: the real URL hides in `data-src`-style attributes or `srcset`.
//! Resolution walks the attribute chain in order and absolutizes against
//! the page URL.

use url::Url;

use crate::dom::{self, Selection};
use crate::patterns::LAZY_IMAGE_ATTRS;
use crate::url_utils;

/// Resolve a candidate image element to an absolute URL.
///
/// Checks `src`, then the lazy-load attributes, then `srcset` (first
/// candidate before any descriptor). Protocol-relative URLs get `https:`;
/// root-relative URLs resolve against the page. First usable wins.
#[must_use]
pub fn resolve_image_url(el: &Selection, page_url: &Url) -> Option<String> {
    for attr in LAZY_IMAGE_ATTRS {
        if let Some(raw) = dom::get_attribute(el, attr) {
            if let Some(url) = first_candidate(&raw).and_then(|c| absolutize(c, page_url)) {
                return Some(url);
            }
        }
    }

    if let Some(srcset) = dom::get_attribute(el, "srcset") {
        if let Some(url) = first_candidate(&srcset).and_then(|c| absolutize(c, page_url)) {
            return Some(url);
        }
    }

    // Raw src as a last resort, resolved against the page
    let src = dom::get_attribute(el, "src")?;
    let resolved = url_utils::create_absolute_url(src.trim(), page_url);
    resolved.starts_with("http").then_some(resolved)
}

/// True when the element carries any usable image source attribute.
/// Selector loops use this to skip decorative or placeholder `<img>` tags.
#[must_use]
pub fn has_image_source(el: &Selection) -> bool {
    ["src", "data-src", "srcset"]
        .iter()
        .any(|attr| dom::get_attribute(el, attr).is_some_and(|v| !v.trim().is_empty()))
}

/// First URL of a possibly comma-separated srcset-style value, with any
/// width/density descriptor stripped.
fn first_candidate(raw: &str) -> Option<&str> {
    raw.split(',').next()?.trim().split_whitespace().next()
}

fn absolutize(candidate: &str, page_url: &Url) -> Option<String> {
    if candidate.is_empty() {
        return None;
    }
    if candidate.starts_with("http") {
        return Some(candidate.to_string());
    }
    if let Some(rest) = candidate.strip_prefix("//") {
        return Some(format!("https://{rest}"));
    }
    if candidate.starts_with('/') {
        return Some(url_utils::create_absolute_url(candidate, page_url));
    }
    None
}
