//! Site-specific selector-map strategy.
//!
//! Highest priority: when the current host has a curated profile, its
//! selector lists beat every generic heuristic. The price lookup runs the
//! full fallback cascade and, as a final resort, retries the scan against
//! a product-detail block and any JSON-LD offers on the page.

use crate::dom;
use crate::image;
use crate::options::Options;
use crate::page::PageContext;
use crate::patterns::{FALLBACK_DESC_SELECTORS, PRODUCT_DETAIL_BLOCK_SELECTOR};
use crate::price;
use crate::result::{Confidence, ExtractedProduct};
use crate::scope;
use crate::sites;
use crate::strategies::{base_record, schema_org, tag};
use crate::text;

pub(crate) fn extract(page: &PageContext, opts: &Options) -> Option<ExtractedProduct> {
    if !opts.use_site_profiles {
        return None;
    }
    let profile = sites::profile_for(opts, page.host())?;
    let main = scope::main_content(page);

    let title_selectors: Vec<&str> = profile.title_selectors.iter().map(String::as_str).collect();
    let name = scope::first_match(&main, &title_selectors, true, |el| {
        Some(dom::text_content(el).to_string())
    })?;
    if text::looks_like_site_banner(&name) {
        return None;
    }

    let price_selectors: Vec<&str> = profile.price_selectors.iter().map(String::as_str).collect();
    let mut price = scope::first_match(&main, &price_selectors, false, |el| {
        Some(dom::text_content(el).to_string())
    })
    .and_then(|raw| price::parse_price(&raw));
    if price.is_none() {
        price = price::cascade(&main);
    }

    let image_selectors: Vec<&str> = profile.image_selectors.iter().map(String::as_str).collect();
    let image = scope::first_matching_element(&main, &image_selectors, image::has_image_source)
        .and_then(|el| image::resolve_image_url(&el, page.url()));

    let description = scope::first_match(&main, FALLBACK_DESC_SELECTORS, false, |el| {
        Some(dom::text_content(el).to_string())
    })
    .unwrap_or_default();

    if price.is_none() {
        // The scoped lookups all missed: retry against the product-detail
        // block, then any JSON-LD offers
        let block = dom::query_selector(&main, PRODUCT_DETAIL_BLOCK_SELECTOR);
        let block = if block.is_empty() { main } else { block };
        price = price::scan_area(&block).or_else(|| schema_org::schema_price_probe(page));
    }

    let mut record = base_record(page, tag::SITE_SPECIFIC, Confidence::High);
    record.name = name;
    record.description = description;
    record.price = price;
    record.image = image;
    Some(record)
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
    fn profiled_host_extracts_with_high_confidence() {
        let html = r#"<html><body><main>
            <h1 class="product-name">Pan de Molde Integral 500 g</h1>
            <span class="price">$2.190</span>
            <div class="gallery"><img src="https://cdn.lider.cl/pan.jpg"></div>
        </main></body></html>"#;
        let page = page(html, "https://www.lider.cl/producto/pan-de-molde-integral");

        let Some(record) = extract(&page, &Options::default()) else {
            panic!("profiled host should extract");
        };
        assert_eq!(record.strategy, "site-specific");
        assert_eq!(record.confidence, Confidence::High);
        assert_eq!(record.name, "Pan de Molde Integral 500 g");
        assert_eq!(record.price, Some(2190.0));
        assert_eq!(record.image.as_deref(), Some("https://cdn.lider.cl/pan.jpg"));
    }

    #[test]
    fn unprofiled_host_is_skipped() {
        let html = "<html><body><h1>Algo</h1></body></html>";
        let page = page(html, "https://tienda-desconocida.cl/producto/algo");
        assert!(extract(&page, &Options::default()).is_none());
    }

    #[test]
    fn disabled_profiles_are_skipped() {
        let html = r#"<html><body><main><h1 class="product-name">Pan 500 g</h1></main></body></html>"#;
        let page = page(html, "https://www.lider.cl/producto/pan");
        let opts = Options {
            use_site_profiles: false,
            ..Options::default()
        };
        assert!(extract(&page, &opts).is_none());
    }

    #[test]
    fn banner_title_rejects_the_whole_strategy() {
        let html = r#"<html><body><main>
            <h1>Bienvenido a Lider.cl</h1>
            <p>Las mejores ofertas de la semana para toda la familia.</p>
        </main></body></html>"#;
        let page = page(html, "https://www.lider.cl/");
        assert!(extract(&page, &Options::default()).is_none());
    }

    #[test]
    fn schema_probe_rescues_missing_price() {
        let html = r#"<html><head>
        <script type="application/ld+json">
            {"@type": "Product", "name": "Leche Entera 1L", "offers": {"price": "1090"}}
        </script>
        </head><body><main>
            <h1 class="product-name">Leche Entera 1L Soprole</h1>
            <p>Leche entera de vaca, formato familiar de un litro.</p>
        </main></body></html>"#;
        let page = page(html, "https://www.lider.cl/producto/leche-entera-1l");

        let Some(record) = extract(&page, &Options::default()) else {
            panic!("profiled host should extract");
        };
        assert_eq!(record.price, Some(1090.0));
    }
}
