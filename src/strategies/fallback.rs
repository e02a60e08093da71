//! Catch-all fallback strategy, lowest confidence.
//!
//! Title from headings or generic selectors, failing that from the URL
//! slug or the `<title>` element; price from the whole-area scan; first
//! product-ish image. Always last in the chain.

use crate::dom::{self, Selection};
use crate::image;
use crate::options::Options;
use crate::page::PageContext;
use crate::patterns::{
    FALLBACK_DESC_SELECTORS, FALLBACK_IMAGE_SELECTOR, FALLBACK_IMAGE_SELECTOR_WIDE,
    FALLBACK_PRICE_SELECTORS, FALLBACK_TITLE_SELECTORS,
};
use crate::price;
use crate::result::{Confidence, ExtractedProduct};
use crate::scope;
use crate::strategies::{base_record, tag};
use crate::text;

pub(crate) fn extract(page: &PageContext, _opts: &Options) -> Option<ExtractedProduct> {
    let main = scope::main_content(page);

    let dom_name = scope::first_match(&main, FALLBACK_TITLE_SELECTORS, true, |el| {
        Some(dom::text_content(el).to_string())
    });

    // A banner-looking DOM title is still returned when the URL has a
    // usable slug: the chain-level cross-check replaces it and tags the
    // strategy. Without a slug it must not survive as the record's name.
    let name = match dom_name {
        Some(name) if !text::looks_like_site_banner(&name) => name,
        Some(banner) => {
            if text::name_from_url(page.url()).is_some() {
                banner
            } else {
                title_element_name(page)?
            }
        }
        None => text::name_from_url(page.url()).or_else(|| title_element_name(page))?,
    };

    let price = scope::first_match(&main, FALLBACK_PRICE_SELECTORS, false, |el| {
        Some(dom::text_content(el).to_string())
    })
    .and_then(|raw| price::parse_price(&raw))
    .or_else(|| price::scan_area(&main));

    let image_el = dom::query_selector(&main, FALLBACK_IMAGE_SELECTOR);
    let image_el = if image_el.is_empty() {
        dom::query_selector(&page.body(), FALLBACK_IMAGE_SELECTOR_WIDE)
    } else {
        image_el
    };
    let image = if image_el.is_empty() {
        None
    } else {
        image::resolve_image_url(&image_el, page.url())
    };

    let description = scope::first_match(&main, FALLBACK_DESC_SELECTORS, false, |el| {
        Some(dom::text_content(el).to_string())
    })
    .unwrap_or_default();

    let mut record = base_record(page, tag::FALLBACK, Confidence::Low);
    record.name = name;
    record.description = description;
    record.price = price;
    record.image = image;
    Some(record)
}

/// `<title>` with a trailing `| Site` chunk dropped, the last resort
/// before giving up on a name entirely.
fn title_element_name(page: &PageContext) -> Option<String> {
    let titles = page.doc().select("title");
    let title = Selection::from(*titles.nodes().first()?);
    let full = dom::text_content(&title).trim().to_string();
    let head = full.split('|').next().unwrap_or("").trim().to_string();

    let candidate = if head.is_empty() { full } else { head };
    if candidate.is_empty() || text::looks_like_site_banner(&candidate) {
        None
    } else {
        Some(candidate)
    }
}
