//! Main-content scoping and header exclusion.
//!
//! Title/price/image selectors run against a narrowed search root: the
//! container judged to hold the primary product. This is what keeps
//! related-products carousels and site-name headers out of the match set.

use crate::dom::{self, Selection};
use crate::page::PageContext;
use crate::patterns::{HEADER_CLASS, MAIN_CONTENT_SELECTORS};

/// Minimum text mass for a container to count as "visible" content.
///
/// A parsed document has no layout boxes, so the render-width test becomes
/// a content-mass proxy: hidden or empty template containers fail it.
const MIN_CONTENT_CHARS: usize = 60;

/// Narrow the search root to the main content element.
///
/// Tries the container selectors in priority order, accepting the first
/// candidate that is not hidden and holds some content mass; falls back to
/// the document body.
#[must_use]
pub fn main_content(page: &PageContext) -> Selection<'_> {
    for selector in MAIN_CONTENT_SELECTORS {
        let candidates = page.doc().select(selector);
        if let Some(node) = candidates.nodes().first() {
            let el = Selection::from(*node);
            if is_visible(&el) && has_content_mass(&el) {
                return el;
            }
        }
    }
    page.body()
}

/// Element-level visibility check: `hidden` attribute and inline
/// `display:none` / `visibility:hidden` styles.
fn is_visible(el: &Selection) -> bool {
    if dom::has_attribute(el, "hidden") {
        return false;
    }
    let style = dom::get_attribute(el, "style").unwrap_or_default();
    let style: String = style.chars().filter(|c| !c.is_whitespace()).collect();
    let style = style.to_ascii_lowercase();
    !style.contains("display:none") && !style.contains("visibility:hidden")
}

/// Containers with neither text nor an image are template shells.
fn has_content_mass(el: &Selection) -> bool {
    if dom::text_content(el).trim().chars().count() >= MIN_CONTENT_CHARS {
        return true;
    }
    !dom::query_selector(el, "img").is_empty()
}

/// Check whether an element sits inside a page header, nav, or banner
/// region (the element itself included).
#[must_use]
pub fn is_in_header(sel: &Selection) -> bool {
    let Some(node) = sel.nodes().first() else {
        return false;
    };

    if marks_header(&Selection::from(*node)) {
        return true;
    }
    for ancestor in node.ancestors(None) {
        if !ancestor.is_element() {
            continue;
        }
        if marks_header(&Selection::from(ancestor)) {
            return true;
        }
    }
    false
}

fn marks_header(el: &Selection) -> bool {
    if let Some(tag) = dom::tag_name(el) {
        if tag == "header" || tag == "nav" {
            return true;
        }
    }
    if dom::get_attribute(el, "role").is_some_and(|r| r.eq_ignore_ascii_case("banner")) {
        return true;
    }
    let class = dom::class_name(el).unwrap_or_default();
    let id = dom::id(el).unwrap_or_default();
    HEADER_CLASS.is_match(&class) || HEADER_CLASS.is_match(&id)
}

/// Walk an ordered selector list and return the first non-empty value the
/// extractor produces.
///
/// With `skip_header`, a first pass ignores matches inside header regions;
/// only when nothing matched outside a header does a second pass accept
/// the first header match. Invalid or non-matching selectors are skipped.
pub fn first_match<F>(
    root: &Selection,
    selectors: &[&str],
    skip_header: bool,
    extract: F,
) -> Option<String>
where
    F: Fn(&Selection) -> Option<String>,
{
    for selector in selectors {
        for node in dom::query_selector_all(root, selector).nodes() {
            let el = Selection::from(*node);
            if skip_header && is_in_header(&el) {
                continue;
            }
            if let Some(value) = extract(&el) {
                let trimmed = value.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
            }
        }
    }

    if !skip_header {
        return None;
    }

    // Nothing outside a header: fall back to header matches
    for selector in selectors {
        let el = dom::query_selector(root, selector);
        if el.is_empty() {
            continue;
        }
        if let Some(value) = extract(&el) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
    }
    None
}

/// Return the first element, walking selectors in order, that the
/// predicate accepts. Only the first match of each selector is considered.
pub fn first_matching_element<'a, P>(
    root: &Selection<'a>,
    selectors: &[&str],
    accept: P,
) -> Option<Selection<'a>>
where
    P: Fn(&Selection) -> bool,
{
    for selector in selectors {
        let candidates = dom::query_selector_all(root, selector);
        if let Some(node) = candidates.nodes().first() {
            let el = Selection::from(*node);
            if accept(&el) {
                return Some(el);
            }
        }
    }
    None
}
