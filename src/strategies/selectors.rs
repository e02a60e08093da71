//! Generic CSS-selector strategy.
//!
//! Prioritized class/attribute patterns for title, price, and image that
//! hold across many e-commerce layouts. Stricter than the fallback: the
//! result is only accepted with a non-banner name AND a price or an image.

use crate::dom;
use crate::image;
use crate::options::Options;
use crate::page::PageContext;
use crate::patterns::{
    COMMON_DESC_SELECTORS, COMMON_IMAGE_SELECTORS, COMMON_PRICE_SELECTORS, COMMON_TITLE_SELECTORS,
};
use crate::price;
use crate::result::{Confidence, ExtractedProduct};
use crate::scope;
use crate::strategies::{base_record, tag};
use crate::text;

pub(crate) fn extract(page: &PageContext, _opts: &Options) -> Option<ExtractedProduct> {
    let main = scope::main_content(page);

    let name = scope::first_match(&main, COMMON_TITLE_SELECTORS, true, |el| {
        Some(dom::text_content(el).to_string())
    })?;
    if text::looks_like_site_banner(&name) {
        return None;
    }

    let price = scope::first_match(&main, COMMON_PRICE_SELECTORS, false, |el| {
        Some(dom::text_content(el).to_string())
    })
    .and_then(|raw| price::parse_price(&raw))
    .or_else(|| price::scan_area(&main));

    let image = scope::first_matching_element(&main, COMMON_IMAGE_SELECTORS, image::has_image_source)
        .and_then(|el| image::resolve_image_url(&el, page.url()));

    // A name alone is too weak a signal at this tier
    if price.is_none() && image.is_none() {
        return None;
    }

    let description = scope::first_match(&main, COMMON_DESC_SELECTORS, false, |el| {
        Some(dom::text_content(el).to_string())
    })
    .unwrap_or_default();

    let mut record = base_record(page, tag::SELECTORS, Confidence::Medium);
    record.name = name;
    record.description = description;
    record.price = price;
    record.image = image;
    Some(record)
}
