//! Schema.org JSON-LD strategy.
//!
//! Scans every `<script type="application/ld+json">` block for objects
//! typed `Product`, including inside `@graph` arrays and nested values.
//! When several products are present, the one whose URL or identifier
//! matches the current page wins; malformed JSON blocks are skipped.

use serde_json::{Map, Value};

use crate::dom::{self, Selection};
use crate::options::Options;
use crate::page::PageContext;
use crate::price;
use crate::result::{Confidence, ExtractedProduct};
use crate::scope;
use crate::strategies::{base_record, tag};
use crate::url_utils;

pub(crate) fn extract(page: &PageContext, _opts: &Options) -> Option<ExtractedProduct> {
    let product = find_product(page)?;

    let name = single_string(&product, "name")?;
    if name.trim().is_empty() {
        return None;
    }

    let mut record = base_record(page, tag::SCHEMA_ORG, Confidence::High);
    record.name = name;
    record.description = single_string(&product, "description").unwrap_or_default();
    record.price = price_from_offers(&product)
        .or_else(|| price::scan_area(&scope::main_content(page)));
    record.image = image_url(&product).map(|raw| absolutize(&raw, page));
    record.sku = string_or_number(&product, "sku");
    record.brand = brand_name(&product);
    record.category = single_string(&product, "category");
    Some(record)
}

/// Pick the JSON-LD product for the current page.
///
/// Among all products found, prefer one whose `url`, `offers.url`, or
/// `identifier` corresponds to the page URL; otherwise the first.
pub(crate) fn find_product(page: &PageContext) -> Option<Map<String, Value>> {
    let products = all_products(page);
    let current = page.source_url();
    let current_base = url_utils::strip_query(current);

    for product in &products {
        let product_url = single_string(product, "url")
            .or_else(|| {
                product
                    .get("offers")
                    .and_then(Value::as_object)
                    .and_then(|o| single_string(o, "url"))
            })
            .or_else(|| single_string(product, "identifier"));

        if let Some(product_url) = product_url {
            if current.contains(&product_url) || product_url.contains(current_base) {
                return Some(product.clone());
            }
        }
    }

    products.into_iter().next()
}

/// Collect every `Product`-typed object across all JSON-LD blocks.
fn all_products(page: &PageContext) -> Vec<Map<String, Value>> {
    let mut products = Vec::new();

    for node in page
        .doc()
        .select(r#"script[type="application/ld+json"]"#)
        .nodes()
    {
        let script = Selection::from(*node);
        let json_text = dom::text_content(&script).trim().to_string();
        if json_text.is_empty() {
            continue;
        }

        // Malformed blocks are skipped, never an error
        let Ok(data) = serde_json::from_str::<Value>(&json_text) else {
            continue;
        };
        collect_products(&data, &mut products);
    }

    products
}

/// Recursive search for `Product`-typed objects. A matched product is not
/// descended into, so nested sub-objects don't produce duplicates.
fn collect_products(value: &Value, out: &mut Vec<Map<String, Value>>) {
    match value {
        Value::Object(map) => {
            if is_product_type(map) {
                out.push(map.clone());
                return;
            }
            for child in map.values() {
                collect_products(child, out);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_products(item, out);
            }
        }
        _ => {}
    }
}

fn is_product_type(map: &Map<String, Value>) -> bool {
    let type_value = map.get("@type").or_else(|| map.get("type"));
    match type_value {
        Some(Value::String(s)) => s == "Product",
        Some(Value::Array(items)) => items
            .iter()
            .any(|t| t.as_str().is_some_and(|s| s == "Product")),
        _ => false,
    }
}

/// Price from `offers.price`, `offers.lowPrice`, or a top-level `price`.
pub(crate) fn price_from_offers(product: &Map<String, Value>) -> Option<f64> {
    let offers = product.get("offers");
    offers
        .and_then(|o| price_field(o, "price"))
        .or_else(|| offers.and_then(|o| price_field(o, "lowPrice")))
        .or_else(|| product.get("price").and_then(price_value))
}

/// `offers` may be a single object or an array of offers.
fn price_field(offers: &Value, key: &str) -> Option<f64> {
    match offers {
        Value::Object(map) => map.get(key).and_then(price_value),
        Value::Array(items) => items
            .iter()
            .find_map(|item| item.as_object().and_then(|m| m.get(key)).and_then(price_value)),
        _ => None,
    }
}

fn price_value(value: &Value) -> Option<f64> {
    match value {
        Value::String(s) => price::parse_price(s),
        Value::Number(n) => {
            let v = n.as_f64()?;
            price::within_bounds(v).then_some(v)
        }
        _ => None,
    }
}

/// Late price probe for other strategies: offers price of any JSON-LD
/// product on the page, without engaging the full strategy.
pub(crate) fn schema_price_probe(page: &PageContext) -> Option<f64> {
    for product in all_products(page) {
        if let Some(value) = price_from_offers(&product) {
            return Some(value);
        }
    }
    None
}

/// `image` comes as a string, an `ImageObject`, or an array of either.
fn image_url(product: &Map<String, Value>) -> Option<String> {
    match product.get("image")? {
        Value::String(s) => Some(s.clone()),
        Value::Object(map) => single_string(map, "url"),
        Value::Array(items) => items.first().and_then(|first| match first {
            Value::String(s) => Some(s.clone()),
            Value::Object(map) => single_string(map, "url"),
            _ => None,
        }),
        _ => None,
    }
}

fn brand_name(product: &Map<String, Value>) -> Option<String> {
    match product.get("brand")? {
        Value::String(s) => non_empty(s),
        Value::Object(map) => single_string(map, "name"),
        _ => None,
    }
}

fn single_string(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(Value::as_str).and_then(non_empty)
}

fn string_or_number(map: &Map<String, Value>, key: &str) -> Option<String> {
    match map.get(key)? {
        Value::String(s) => non_empty(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

fn absolutize(raw: &str, page: &PageContext) -> String {
    if raw.starts_with("http") {
        raw.to_string()
    } else {
        url_utils::create_absolute_url(raw, page.url())
    }
}
