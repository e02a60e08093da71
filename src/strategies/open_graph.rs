//! Open Graph meta-tag strategy.
//!
//! Reads `og:title` / `og:description` / `og:price:amount` / `og:image`.
//! Many sites ship one generic OG block on every page, so the result is
//! rejected when the OG URL does not correspond to the current page or
//! when the title or description reads like a site banner.

use crate::dom::{self, Document};
use crate::options::Options;
use crate::page::PageContext;
use crate::price;
use crate::result::{Confidence, ExtractedProduct};
use crate::scope;
use crate::strategies::{base_record, tag};
use crate::text;
use crate::url_utils;

pub(crate) fn extract(page: &PageContext, _opts: &Options) -> Option<ExtractedProduct> {
    let title = meta_content(page.doc(), "og:title")?;
    if text::looks_like_site_banner(&title) {
        return None;
    }

    // A mismatched og:url means this block describes the homepage or some
    // other page, not the product in front of us
    if let Some(og_url) = meta_content(page.doc(), "og:url") {
        let full_og_url = if og_url.starts_with("http") {
            og_url
        } else {
            url_utils::create_absolute_url(&og_url, page.url())
        };
        let current = page.source_url();
        let matches_page = current.starts_with(url_utils::strip_query(&full_og_url))
            || full_og_url.contains(url_utils::strip_query(current));
        if !matches_page {
            return None;
        }
    }

    let description = meta_content(page.doc(), "og:description");
    if description.as_deref().is_some_and(text::looks_like_site_banner) {
        return None;
    }

    let price = meta_content(page.doc(), "og:price:amount")
        .or_else(|| meta_content(page.doc(), "product:price:amount"))
        .and_then(|raw| price::parse_price(&raw))
        .or_else(|| price::scan_area(&scope::main_content(page)));

    let image = meta_content(page.doc(), "og:image").map(|raw| {
        if raw.starts_with("http") {
            raw
        } else {
            url_utils::create_absolute_url(&raw, page.url())
        }
    });

    let mut record = base_record(page, tag::OPEN_GRAPH, Confidence::Medium);
    record.name = title;
    record.description = description.unwrap_or_default();
    record.price = price;
    record.image = image;
    Some(record)
}

/// Content of a `<meta>` tag addressed by `property` or `name`.
fn meta_content(doc: &Document, property: &str) -> Option<String> {
    let metas = doc.select(&format!(
        r#"meta[property="{property}"], meta[name="{property}"]"#
    ));
    let meta = crate::dom::Selection::from(*metas.nodes().first()?);
    dom::get_attribute(&meta, "content")
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
