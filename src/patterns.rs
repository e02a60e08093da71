//! Compiled regex patterns and CSS selectors for product extraction.
//!
//! All regex patterns are compiled once at startup using `LazyLock`, and
//! the price patterns are kept as ordered, data-driven tables so the
//! normalizer's contract stays in one place and testable away from DOM
//! concerns.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Price Patterns
// =============================================================================

/// One entry of an ordered price-pattern table.
///
/// `scans_html` marks attribute-shaped patterns (`data-price="..."`) that
/// must run against serialized markup instead of rendered text.
pub struct PricePattern {
    /// Compiled pattern; capture group 1 holds the numeric fragment.
    pub regex: Regex,
    /// Match against inner HTML rather than text content.
    pub scans_html: bool,
}

fn text_pattern(source: &str) -> PricePattern {
    PricePattern {
        regex: Regex::new(source).expect("valid price regex"),
        scans_html: false,
    }
}

fn html_pattern(source: &str) -> PricePattern {
    PricePattern {
        regex: Regex::new(source).expect("valid price regex"),
        scans_html: true,
    }
}

/// Whole-page scan table, in priority order. Currency-prefixed numbers,
/// CLP-suffixed numbers, labelled prices, and raw attribute forms.
pub static PAGE_PRICE_PATTERNS: LazyLock<Vec<PricePattern>> = LazyLock::new(|| {
    vec![
        text_pattern(r"\$\s*([\d.,\s]+)"),
        text_pattern(r"(?i)(\d{1,3}(?:[.\s]\d{3})*(?:,\d+)?)\s*CLP"),
        text_pattern(r"(?i)precio[:\s]*\$?\s*([\d.,\s]+)"),
        text_pattern(r"(?i)valor[:\s]*\$?\s*([\d.,\s]+)"),
        text_pattern(r"(?i)precio\s+actual[:\s]*\$?\s*([\d.,\s]+)"),
        text_pattern(r"(?i)precio\s+internet[:\s]*\$?\s*([\d.,\s]+)"),
        html_pattern(r#"(?i)data-price=["']([\d.,]+)["']"#),
        html_pattern(r#"(?i)data-value=["']([\d.,]+)["']"#),
        html_pattern(r#"(?i)data-precio=["']([\d.,]+)["']"#),
        html_pattern(r#"(?i)content=["']([\d.,]+)["'][^>]*itemprop=["']price["']"#),
        text_pattern(r"(?i)(?:precio|valor|total)[:\s]*(\d{1,3}(?:[.\s]\d{3})*(?:,\d+)?)"),
    ]
});

/// Product-summary scan table: stricter shapes, tried against the text of
/// one presumed-authoritative container at a time.
pub static SUMMARY_PRICE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"\$\s*([\d.,\s]+)").expect("valid price regex"),
        Regex::new(r"(?i)(\d{1,3}(?:[.\s]\d{3})*(?:,\d+)?)\s*CLP").expect("valid price regex"),
        Regex::new(r"(?i)precio[:\s]*\$?\s*([\d.,\s]+)").expect("valid price regex"),
        Regex::new(r"(?i)valor[:\s]*\$?\s*([\d.,\s]+)").expect("valid price regex"),
        Regex::new(r"(\d{1,3}(?:\.\d{3})+(?:,\d+)?)").expect("valid price regex"),
        Regex::new(r"(\d{2,}\s*\d{3})").expect("valid price regex"),
    ]
});

/// OCR transcript table: the reduced subset the image-capture flow uses.
pub static OCR_PRICE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"\$\s*([\d.,\s]+)").expect("valid price regex"),
        Regex::new(r"(?i)(\d{1,3}(?:\.\d{3})*(?:,\d+)?)\s*CLP").expect("valid price regex"),
        Regex::new(r"(?i)precio[:\s]*\$?\s*([\d.,\s]+)").expect("valid price regex"),
        Regex::new(r"(\d{1,3}(?:\.\d{3})+(?:,\d+)?)").expect("valid price regex"),
    ]
});

/// A cleaned price string ending in a bare thousands group (`49.990`).
pub static TRAILING_THOUSANDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.\d{3}$").expect("valid regex"));

/// Loose currency signal used by the product-page probe.
pub static CURRENCY_SIGNAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\s*[\d.,]+").expect("valid regex"));

/// Matches runs of whitespace for normalization.
pub static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

// =============================================================================
// Title Plausibility Patterns
// =============================================================================

/// Site chrome that must never become a product name: domain suffixes,
/// welcome banners, "home" headers.
pub static SITE_BANNER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\.cl\b|\.com\b|te conviene|bienvenido|bienvenida|home\s*[-|])")
        .expect("valid regex")
});

/// Short all-letter strings read as brand taglines rather than product
/// names; real product names usually carry digits, units, or punctuation.
pub static PLAIN_TAGLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s.]+$").expect("valid regex"));

// =============================================================================
// URL Patterns
// =============================================================================

/// URL path shapes that identify a product detail page.
pub static PRODUCT_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(/product/|/p/|/item/|/pd/|-p-\d+|/ip/|/catalogo/product/|/producto/|/prod/)")
        .expect("valid regex")
});

/// Weight units glued to a number in a URL slug (`250g`, `5kg`).
pub static SLUG_GRAMS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*g\b").expect("valid regex"));

/// Kilogram variant of [`SLUG_GRAMS`].
pub static SLUG_KILOS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*kg\b").expect("valid regex"));

// =============================================================================
// Scoping Patterns
// =============================================================================

/// Class/id fragment marking header and banner regions.
pub static HEADER_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)header").expect("valid regex"));

// =============================================================================
// CSS Selectors
// =============================================================================

/// Candidate main-content containers, in priority order. The first visible
/// one with some content mass wins; related-products carousels live
/// outside these and get excluded by the scoping.
pub const MAIN_CONTENT_SELECTORS: &[&str] = &[
    "main",
    "[role='main']",
    "article",
    "[class*='product-detail']",
    "[class*='productDetail']",
    "[class*='ProductDetail']",
    "[class*='product-page']",
    "[class*='productPage']",
    "[id*='product']",
    "[id*='Product']",
    ".product-page",
    "#main",
    "#content",
    "[class*='pdp']",
    "[class*='PDP']",
    "[class*='item-detail']",
    "[class*='articulo']",
    ".single-product",
    ".product",
    "[class*='producto']",
    "#product",
    "[class*='product-content']",
    ".type-product",
    ".product.type-product",
];

/// Generic title selectors across common e-commerce layouts.
pub const COMMON_TITLE_SELECTORS: &[&str] = &[
    "h1[class*='product']",
    "[class*='product-name']",
    "[class*='product-title']",
    "[class*='productName']",
    "[class*='ProductName']",
    "[itemprop='name']",
    "[data-testid*='product'] h1",
    "[class*='pdp'] h1",
    "[class*='detail'] h1",
    "h1",
    "h2[class*='product']",
    "[class*='titulo']",
];

/// Generic price selectors, most specific (current/sale price) first.
pub const COMMON_PRICE_SELECTORS: &[&str] = &[
    "[class*='price'] [class*='current']",
    "[class*='price-current']",
    "[class*='price-now']",
    "[class*='price-sale']",
    "[class*='precio']",
    "[class*='Precio']",
    "[itemprop='price']",
    "[data-testid*='price']",
    "[data-price]",
    "[data-precio]",
    "[class*='price']",
    "[class*='Price']",
    "[class*='value']",
    "span[class*='amount']",
    "[class*='valor']",
    "[class*='Valor']",
    ".woocommerce-Price-amount",
    ".price .amount",
    "ins .amount",
];

/// Generic product-image selectors.
pub const COMMON_IMAGE_SELECTORS: &[&str] = &[
    "[class*='product-image'] img",
    "[class*='main-image'] img",
    "[itemprop='image']",
    "img[class*='product']",
    "[class*='gallery'] img",
    "img[class*='Product']",
    "[class*='carousel'] img",
    "[class*='pdp'] img",
    "main img[src]",
];

/// Generic description selectors.
pub const COMMON_DESC_SELECTORS: &[&str] = &[
    "[class*='product-description']",
    "[class*='productDescription']",
    "[itemprop='description']",
    "[class*='descripcion']",
    "[class*='description']",
    "[class*='detail'] p",
];

/// Last-resort title selectors for the fallback strategy.
pub const FALLBACK_TITLE_SELECTORS: &[&str] = &[
    "h1",
    "h2",
    "[class*='title']",
    "[class*='product-name']",
    "[itemprop='name']",
    "[data-testid*='product']",
    "[class*='Product']",
    "[class*='titulo']",
];

/// Last-resort price selectors for the fallback strategy.
pub const FALLBACK_PRICE_SELECTORS: &[&str] = &[
    "[class*='price']",
    "[class*='Price']",
    "[itemprop='price']",
    "[class*='precio']",
    "[class*='valor']",
    "[data-price]",
];

/// Last-resort description selectors for the fallback strategy.
pub const FALLBACK_DESC_SELECTORS: &[&str] = &[
    "[itemprop='description']",
    "[class*='descripcion']",
    "[class*='description']",
];

/// Product-ish images for the fallback strategy, scoped then page-wide.
pub const FALLBACK_IMAGE_SELECTOR: &str =
    "img[src*='product'], img[src*='Product'], img[class*='product'], img[class*='gallery'], main img";

/// Page-wide retry when the scoped fallback image lookup finds nothing.
pub const FALLBACK_IMAGE_SELECTOR_WIDE: &str = "img[src*='product'], img[src*='Product']";

/// WooCommerce price structure, in priority order: the sale (`ins`) price
/// must win over the struck-through regular price, so the selectors are
/// tried one at a time rather than as one document-order list.
pub const WOOCOMMERCE_PRICE_SELECTORS: &[&str] = &[
    ".price ins .woocommerce-Price-amount",
    ".price ins .amount",
    ".price .woocommerce-Price-amount",
    ".price .amount",
    "p.price",
];

/// Containers presumed to hold the single authoritative product block.
pub const SUMMARY_CONTAINER_SELECTORS: &[&str] = &[
    ".summary",
    ".product-summary",
    ".product .summary",
    ".woocommerce-product-details__short-description",
    "[class*='product-details']",
    ".single-product .summary",
    ".product",
    ".product-details",
    "[class*='single-product']",
];

/// Price-tagged elements inside a summary block.
pub const SUMMARY_PRICE_ELEMENT_SELECTOR: &str =
    ".price, [class*='price'], [itemprop='price'], bdi, .amount";

/// Price-like selectors for the first-in-DOM-order tactic.
pub const DOM_ORDER_PRICE_SELECTORS: &[&str] = &[
    ".price ins .woocommerce-Price-amount",
    ".price ins .amount",
    ".price .woocommerce-Price-amount",
    ".price .amount",
    "p.price",
    ".summary .price",
    "[class*='price']",
    "[itemprop='price']",
];

/// Elements carrying machine-readable price attributes.
pub const DATA_PRICE_ATTR_SELECTOR: &str = "[data-price], [data-value], [data-precio]";

/// Attributes read by [`DATA_PRICE_ATTR_SELECTOR`] handling, in order.
pub const DATA_PRICE_ATTRS: &[&str] = &["data-price", "data-value", "data-precio"];

/// Product-detail block retried by the site-specific strategy when the
/// scoped price lookups all miss.
pub const PRODUCT_DETAIL_BLOCK_SELECTOR: &str =
    ".product, .single-product, [class*='product-detail']";

/// Lazy-load image attributes, in resolution order.
pub const LAZY_IMAGE_ATTRS: &[&str] = &[
    "src",
    "data-src",
    "data-lazy-src",
    "data-original",
    "data-zoom-image",
    "data-srcset",
];
