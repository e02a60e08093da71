//! Microdata (`itemscope`/`itemtype`) strategy.
//!
//! Same shape as the schema.org strategy but reading `itemprop`
//! attributes from the first Product-typed scope in the document.

use crate::dom::{self, Selection};
use crate::image;
use crate::options::Options;
use crate::page::PageContext;
use crate::price;
use crate::result::{Confidence, ExtractedProduct};
use crate::scope;
use crate::strategies::{base_record, tag};

pub(crate) fn extract(page: &PageContext, _opts: &Options) -> Option<ExtractedProduct> {
    let scopes = page.doc().select(r#"[itemscope][itemtype*="Product"]"#);
    let item_scope = Selection::from(*scopes.nodes().first()?);

    let name = itemprop(&item_scope, "name")?;

    let price = itemprop(&item_scope, "price")
        .and_then(|raw| price::parse_price(&raw))
        .or_else(|| price::scan_area(&scope::main_content(page)));

    let image_el = dom::query_selector(&item_scope, r#"[itemprop="image"]"#);
    let image = if image_el.is_empty() {
        itemprop(&item_scope, "image")
    } else {
        image::resolve_image_url(&image_el, page.url())
    };

    let mut record = base_record(page, tag::MICRODATA, Confidence::Medium);
    record.name = name;
    record.description = itemprop(&item_scope, "description").unwrap_or_default();
    record.price = price;
    record.image = image;
    record.sku = itemprop(&item_scope, "sku");
    record.brand = itemprop(&item_scope, "brand");
    Some(record)
}

/// Read an itemprop value: element text first, `content` attribute second
/// (meta-style itemprops carry their value there).
fn itemprop(scope: &Selection, prop: &str) -> Option<String> {
    let el = dom::query_selector(scope, &format!(r#"[itemprop="{prop}"]"#));
    if el.is_empty() {
        return None;
    }

    let from_text = dom::text_content(&el).trim().to_string();
    if !from_text.is_empty() {
        return Some(from_text);
    }

    dom::get_attribute(&el, "content")
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
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
    fn reads_itemprops_from_product_scope() {
        let html = r#"<html><body>
        <div itemscope itemtype="https://schema.org/Product">
            <h1 itemprop="name">Mermelada de Frambuesa 250 g</h1>
            <meta itemprop="price" content="3290">
            <img itemprop="image" src="https://tienda.cl/fotos/mermelada.jpg">
            <span itemprop="brand">Del Campo</span>
            <span itemprop="sku">MF-250</span>
        </div>
        </body></html>"#;
        let page = page(html, "https://tienda.cl/producto/mermelada-de-frambuesa-250g");

        let Some(record) = extract(&page, &Options::default()) else {
            panic!("microdata should extract");
        };
        assert_eq!(record.strategy, "microdata");
        assert_eq!(record.name, "Mermelada de Frambuesa 250 g");
        assert_eq!(record.price, Some(3290.0));
        assert_eq!(
            record.image.as_deref(),
            Some("https://tienda.cl/fotos/mermelada.jpg")
        );
        assert_eq!(record.brand.as_deref(), Some("Del Campo"));
        assert_eq!(record.sku.as_deref(), Some("MF-250"));
    }

    #[test]
    fn page_scan_rescues_missing_itemprop_price() {
        let html = r#"<html><body><main>
        <div itemscope itemtype="https://schema.org/Product">
            <h1 itemprop="name">Queso Mantecoso 500 g</h1>
        </div>
        <p>Llévalo hoy por $6.490 en tiendas seleccionadas del pais.</p>
        </main></body></html>"#;
        let page = page(html, "https://tienda.cl/producto/queso-mantecoso-500g");

        let Some(record) = extract(&page, &Options::default()) else {
            panic!("microdata should extract");
        };
        assert_eq!(record.price, Some(6490.0));
    }

    #[test]
    fn no_product_scope_no_record() {
        let html = r#"<html><body>
        <div itemscope itemtype="https://schema.org/Recipe">
            <span itemprop="name">Pan amasado</span>
        </div>
        </body></html>"#;
        let page = page(html, "https://tienda.cl/recetas/pan-amasado");
        assert!(extract(&page, &Options::default()).is_none());
    }
}
