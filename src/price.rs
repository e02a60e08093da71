//! Price parsing and scanning.
//!
//! The normalizer shared by every strategy: one parse rule for Chilean
//! price text (`.` thousands, `,` decimal, tolerating the inverse when no
//! comma is present), plus the ordered scan tactics that recover a price
//! when a strategy's primary selector lookup fails.

use crate::dom::{self, Selection};
use crate::patterns::{
    DATA_PRICE_ATTRS, DATA_PRICE_ATTR_SELECTOR, DOM_ORDER_PRICE_SELECTORS, PAGE_PRICE_PATTERNS,
    SUMMARY_CONTAINER_SELECTORS, SUMMARY_PRICE_ELEMENT_SELECTOR, SUMMARY_PRICE_PATTERNS,
    TRAILING_THOUSANDS, WHITESPACE, WOOCOMMERCE_PRICE_SELECTORS,
};

/// Upper sanity bound for any parsed price (CLP). Values at or above this
/// are noise: phone numbers, SKUs misread as prices.
pub const PRICE_MAX: f64 = 100_000_000.0;

/// Tighter bound applied by the scoped tactics, where a runaway match is
/// more likely to be a bundle total or concatenated digits.
pub const SCOPED_PRICE_MAX: f64 = 50_000_000.0;

/// Parse a raw text fragment into a validated price.
///
/// Strips everything but digits, commas and periods, then applies the
/// locale rule: a comma present means periods are thousands separators and
/// the comma is the decimal point; otherwise a trailing `.ddd` group or
/// more than one period marks period-as-thousands (`49.990` → 49990).
///
/// Returns `None` for unparseable text and for values outside
/// `0 < price < PRICE_MAX`; zero means "no price" at this seam.
#[must_use]
pub fn parse_price(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    let normalized = if cleaned.contains(',') {
        cleaned.replace('.', "").replacen(',', ".", 1)
    } else if TRAILING_THOUSANDS.is_match(&cleaned) || cleaned.matches('.').count() > 1 {
        cleaned.replace('.', "")
    } else {
        cleaned
    };

    let value: f64 = normalized.parse().ok()?;
    within_bounds(value).then_some(value)
}

/// Shared sanity bounds: strictly positive, below [`PRICE_MAX`].
#[must_use]
pub fn within_bounds(value: f64) -> bool {
    value > 0.0 && value < PRICE_MAX
}

/// Tactic (a): WooCommerce price structure, sale (`ins`) price first.
#[must_use]
pub fn from_woocommerce(root: &Selection) -> Option<f64> {
    for selector in WOOCOMMERCE_PRICE_SELECTORS {
        let price_el = dom::query_selector(root, selector);
        if price_el.is_empty() {
            continue;
        }
        if let Some(value) = parse_price(&dom::text_content(&price_el)) {
            return Some(value);
        }
    }
    None
}

/// Tactic (b): scan the presumed-authoritative product summary block.
///
/// Restricts the search to a handful of container selectors, tries the
/// summary pattern table against the block's text, then falls back to
/// price-tagged elements directly inside the block. Designed to avoid
/// "related products" prices elsewhere on the page.
#[must_use]
pub fn from_product_summary(root: &Selection) -> Option<f64> {
    for selector in SUMMARY_CONTAINER_SELECTORS {
        let summary = dom::query_selector(root, selector);
        if summary.is_empty() {
            continue;
        }

        let raw = dom::text_content(&summary).to_string();
        let text = WHITESPACE.replace_all(&raw, " ").to_string();
        for pattern in SUMMARY_PRICE_PATTERNS.iter() {
            if let Some(caps) = pattern.captures(&text) {
                let fragment = caps.get(1).or_else(|| caps.get(0)).map_or("", |m| m.as_str());
                if let Some(value) = parse_price(fragment) {
                    if value < SCOPED_PRICE_MAX {
                        return Some(value);
                    }
                }
            }
        }

        let price_els = dom::query_selector_all(&summary, SUMMARY_PRICE_ELEMENT_SELECTOR);
        for node in price_els.nodes() {
            let el = Selection::from(*node);
            let text = dom::text_content(&el).trim().to_string();
            let len = text.chars().count();
            if len > 0 && len < 20 && text.chars().any(|c| c.is_ascii_digit()) {
                if let Some(value) = parse_price(&text) {
                    return Some(value);
                }
            }
        }
    }
    None
}

/// Tactic (c): first valid price in DOM order.
///
/// Useful when the main product legitimately appears before any
/// related-product prices in source order.
#[must_use]
pub fn first_in_dom_order(root: &Selection) -> Option<f64> {
    for selector in DOM_ORDER_PRICE_SELECTORS {
        for node in dom::query_selector_all(root, selector).nodes() {
            let el = Selection::from(*node);
            if let Some(value) = parse_price(&dom::text_content(&el)) {
                if value < SCOPED_PRICE_MAX {
                    return Some(value);
                }
            }
        }
    }
    None
}

/// Tactic (d): whole-area scan, smallest plausible value wins.
///
/// Runs the whole pattern table over the scanned text (and serialized
/// markup for the attribute-shaped patterns), collects every plausible
/// value, and returns the smallest. On a product page the primary price is
/// typically the smallest one mentioned, relative to inflated "original
/// price" or bundle totals. A deliberate precision/recall trade-off that
/// can misfire when a cheaper accessory is listed before the main item.
#[must_use]
pub fn scan_area(root: &Selection) -> Option<f64> {
    let text = dom::text_content(root).to_string();
    let html = dom::inner_html(root).to_string();

    let mut smallest: Option<f64> = None;
    let mut consider = |value: f64| {
        if smallest.is_none_or(|s| value < s) {
            smallest = Some(value);
        }
    };

    for pattern in PAGE_PRICE_PATTERNS.iter() {
        let haystack = if pattern.scans_html { &html } else { &text };
        for caps in pattern.regex.captures_iter(haystack) {
            let fragment = caps.get(1).or_else(|| caps.get(0)).map_or("", |m| m.as_str());
            if let Some(value) = parse_price(fragment) {
                consider(value);
            }
        }
    }

    // Machine-readable attributes read directly, not through markup regexes
    for node in dom::query_selector_all(root, DATA_PRICE_ATTR_SELECTOR).nodes() {
        let el = Selection::from(*node);
        let raw = DATA_PRICE_ATTRS
            .iter()
            .find_map(|attr| dom::get_attribute(&el, attr));
        if let Some(value) = raw.as_deref().and_then(parse_price) {
            consider(value);
        }
    }

    smallest
}

/// The full fallback cascade, in priority order, for strategies whose
/// primary selector-based attempt failed.
#[must_use]
pub fn cascade(root: &Selection) -> Option<f64> {
    from_woocommerce(root)
        .or_else(|| from_product_summary(root))
        .or_else(|| first_in_dom_order(root))
        .or_else(|| scan_area(root))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;

    #[test]
    fn parses_chilean_thousands() {
        assert_eq!(parse_price("$49.990"), Some(49990.0));
        assert_eq!(parse_price("12.345.678"), Some(12_345_678.0));
        assert_eq!(parse_price("$ 1.299.990"), Some(1_299_990.0));
    }

    #[test]
    fn parses_comma_decimals() {
        assert_eq!(parse_price("1.299,50"), Some(1299.5));
        assert_eq!(parse_price("890,5"), Some(890.5));
    }

    #[test]
    fn tolerates_inverse_convention_without_comma() {
        // No comma, single period, not a thousands group: decimal point
        assert_eq!(parse_price("12.34"), Some(12.34));
        assert_eq!(parse_price("890"), Some(890.0));
    }

    #[test]
    fn rejects_garbage_and_out_of_bounds() {
        assert_eq!(parse_price("abc"), None);
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("0"), None);
        assert_eq!(parse_price("200000000"), None);
        assert_eq!(parse_price("100000000"), None);
        assert_eq!(parse_price("99999999"), Some(99_999_999.0));
    }

    #[test]
    fn woocommerce_prefers_sale_price() {
        let doc = dom::parse(
            r#"<div class="price">
                 <del><span class="amount">$15.990</span></del>
                 <ins><span class="amount">$12.990</span></ins>
               </div>"#,
        );
        assert_eq!(from_woocommerce(&doc.select("body")), Some(12990.0));
    }

    #[test]
    fn summary_scan_skips_unscoped_prices() {
        let doc = dom::parse(
            r#"<div>
                 <div class="related"><span class="price">$990</span></div>
                 <div class="summary"><p>Precio: $4.500</p></div>
               </div>"#,
        );
        assert_eq!(from_product_summary(&doc.select("body")), Some(4500.0));
    }

    #[test]
    fn dom_order_returns_first_match() {
        let doc = dom::parse(
            r#"<div>
                 <p class="price">$3.990</p>
                 <div class="related"><span class="price">$990</span></div>
               </div>"#,
        );
        assert_eq!(first_in_dom_order(&doc.select("body")), Some(3990.0));
    }

    #[test]
    fn area_scan_returns_smallest_plausible() {
        let doc = dom::parse(
            r#"<div>
                 <span>Precio normal: $19.990</span>
                 <span>Oferta $14.990</span>
               </div>"#,
        );
        assert_eq!(scan_area(&doc.select("body")), Some(14990.0));
    }

    #[test]
    fn area_scan_reads_data_attributes() {
        let doc = dom::parse(r#"<div><span data-price="8990">Oferta especial</span></div>"#);
        assert_eq!(scan_area(&doc.select("body")), Some(8990.0));
    }

    #[test]
    fn area_scan_ignores_noise_values() {
        // Phone-number-sized values exceed the sanity bound
        let doc = dom::parse("<div><span>Fono: 562123456789</span></div>");
        assert_eq!(scan_area(&doc.select("body")), None);
    }
}
