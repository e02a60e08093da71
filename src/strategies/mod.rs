//! The strategy chain.
//!
//! A fixed, ordered list of independent extraction strategies, each trying
//! to produce a complete product record from the page; the first usable,
//! name-bearing result wins. The chain evaluator is a plain
//! fold-with-short-circuit over function pointers, not a dispatch
//! hierarchy. Strategies are read-only: DOM queries plus text transforms.

pub mod fallback;
pub mod microdata;
pub mod open_graph;
pub mod schema_org;
pub mod selectors;
pub mod site_specific;

use tracing::debug;

use crate::options::Options;
use crate::page::PageContext;
use crate::patterns::{CURRENCY_SIGNAL, PRODUCT_URL};
use crate::price;
use crate::result::{Confidence, ExtractedProduct};
use crate::scope;
use crate::text;

/// Tags identifying which strategy produced a record.
pub mod tag {
    /// Curated per-site selector profile.
    pub const SITE_SPECIFIC: &str = "site-specific";
    /// JSON-LD structured data.
    pub const SCHEMA_ORG: &str = "schema.org";
    /// Generic CSS selector heuristics.
    pub const SELECTORS: &str = "selectors";
    /// `itemscope`/`itemprop` microdata.
    pub const MICRODATA: &str = "microdata";
    /// Open Graph meta tags.
    pub const OPEN_GRAPH: &str = "open-graph";
    /// Whole-page catch-all.
    pub const FALLBACK: &str = "fallback";
    /// Last-resort synthesis from the URL slug alone.
    pub const URL_ONLY: &str = "url-only";
    /// Appended when the name was overridden from the URL slug.
    pub const URL_OVERRIDE_SUFFIX: &str = "+url";
}

/// One self-contained extraction attempt.
type Strategy = fn(&PageContext, &Options) -> Option<ExtractedProduct>;

/// The fixed priority order. Site profiles beat structured data, which
/// beats generic selectors, microdata, Open Graph, and the fallback.
const CHAIN: &[Strategy] = &[
    site_specific::extract,
    schema_org::extract,
    selectors::extract,
    microdata::extract,
    open_graph::extract,
    fallback::extract,
];

/// Run the strategy chain and return at most one product record.
///
/// After a strategy yields a candidate, its name is cross-checked against
/// the URL slug; when every strategy fails, a `url-only` record is
/// synthesized from the slug and a whole-page price scan, and when even
/// the slug is unusable the page has no detectable product.
#[must_use]
pub fn run_chain(page: &PageContext, opts: &Options) -> Option<ExtractedProduct> {
    for strategy in CHAIN {
        let Some(mut product) = strategy(page, opts) else {
            continue;
        };
        if product.name.trim().is_empty() {
            continue;
        }
        apply_url_override(&mut product, page);
        finalize(&mut product, opts);
        debug!(
            strategy = %product.strategy,
            confidence = ?product.confidence,
            "product extracted"
        );
        return Some(product);
    }

    let record = url_only(page, opts);
    if record.is_none() {
        debug!("no product detected");
    }
    record
}

/// Defense against strategies that picked up navigation or
/// related-product titles: when the candidate name looks like site chrome,
/// or shares no significant word with the URL-derived name, the slug name
/// wins and the strategy tag is marked.
fn apply_url_override(product: &mut ExtractedProduct, page: &PageContext) {
    let Some(url_name) = text::name_from_url(page.url()) else {
        return;
    };

    if text::looks_like_site_banner(&product.name)
        || !text::name_matches_url(&product.name, &url_name)
    {
        debug!(rejected = %product.name, "name overridden from URL slug");
        product.name = url_name;
        product.strategy.push_str(tag::URL_OVERRIDE_SUFFIX);
    }
}

/// Truncation pass applied to every accepted record.
fn finalize(product: &mut ExtractedProduct, opts: &Options) {
    product.name = text::truncate_chars(product.name.trim(), opts.max_name_len);
    product.description = text::truncate_chars(product.description.trim(), opts.max_description_len);
}

/// Last-resort synthesis: URL-slug name plus a whole-page price scan.
fn url_only(page: &PageContext, opts: &Options) -> Option<ExtractedProduct> {
    let name = text::name_from_url(page.url())?;
    let main = scope::main_content(page);

    let mut product = base_record(page, tag::URL_ONLY, Confidence::Low);
    product.name = name;
    product.price = price::scan_area(&main);
    finalize(&mut product, opts);
    debug!(strategy = tag::URL_ONLY, "product synthesized from URL");
    Some(product)
}

/// Record skeleton with the per-page fields filled in.
pub(crate) fn base_record(
    page: &PageContext,
    strategy: &str,
    confidence: Confidence,
) -> ExtractedProduct {
    ExtractedProduct {
        source_url: page.source_url().to_string(),
        site_host: page.host().to_string(),
        strategy: strategy.to_string(),
        confidence,
        ..ExtractedProduct::default()
    }
}

/// Heuristic check whether the current page is a product detail page at
/// all, for hosts that gate extraction on it.
///
/// A product-shaped URL path, a JSON-LD `Product` block, or an `h1`
/// together with some price signal all count.
#[must_use]
pub fn is_product_page(page: &PageContext) -> bool {
    if PRODUCT_URL.is_match(page.source_url()) {
        return true;
    }

    if schema_org::find_product(page).is_some() {
        return true;
    }

    let has_h1 = !page.doc().select("h1").is_empty();
    if has_h1 {
        let has_price_el = !page
            .doc()
            .select("[class*='price'], [itemprop='price']")
            .is_empty();
        if has_price_el || CURRENCY_SIGNAL.is_match(&page.body().text()) {
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(html: &str, url: &str) -> PageContext {
        match PageContext::new(html, url) {
            Ok(page) => page,
            Err(err) => panic!("fixture should build: {err}"),
        }
    }

    #[test]
    fn product_page_by_url_shape() {
        let page = page("<html><body></body></html>", "https://tienda.cl/producto/cafe");
        assert!(is_product_page(&page));
    }

    #[test]
    fn product_page_by_json_ld() {
        let html = r#"<html><head><script type="application/ld+json">
            {"@type": "Product", "name": "Cafe Molido"}
        </script></head><body></body></html>"#;
        let page = page(html, "https://tienda.cl/pagina");
        assert!(is_product_page(&page));
    }

    #[test]
    fn product_page_by_h1_and_price_signal() {
        let html = r#"<html><body>
            <h1>Cafe Molido 250g</h1><span>$4.990</span>
        </body></html>"#;
        let page = page(html, "https://tienda.cl/pagina");
        assert!(is_product_page(&page));
    }

    #[test]
    fn not_a_product_page() {
        let html = "<html><body><p>Quienes somos</p></body></html>";
        let page = page(html, "https://tienda.cl/nosotros");
        assert!(!is_product_page(&page));
    }

    #[test]
    fn url_only_synthesis_uses_slug_and_page_scan() {
        let html = r#"<html><body><div class="x"><span class="price">$2.990</span></div></body></html>"#;
        let page = page(html, "https://tienda.cl/producto/yerba-mate-500g");
        let Some(record) = url_only(&page, &Options::default()) else {
            panic!("slug page should synthesize a record");
        };
        assert_eq!(record.name, "Yerba Mate 500 g");
        assert_eq!(record.price, Some(2990.0));
        assert_eq!(record.strategy, tag::URL_ONLY);
    }

    #[test]
    fn no_slug_no_record() {
        let html = "<html><body><p>nada que ver</p></body></html>";
        let page = page(html, "https://tienda.cl/");
        assert!(run_chain(&page, &Options::default()).is_none());
    }
}
