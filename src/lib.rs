//! # product-harvest
//!
//! Universal product-data extraction for e-commerce pages.
//!
//! This library recovers a structured product record (name, price, image,
//! brand, SKU) from unstructured, inconsistent HTML without site-specific
//! integration contracts: an ordered chain of extraction strategies
//! (site profiles, schema.org JSON-LD, generic selectors, microdata, Open
//! Graph, and a catch-all fallback) where the first usable result wins,
//! backed by a locale-aware price normalizer and filters that keep
//! navigation, related products, and site branding out of the record.
//!
//! ## Quick Start
//!
//! ```rust
//! use product_harvest::extract;
//!
//! let html = r#"<html><head><script type="application/ld+json">
//! {"@type": "Product", "name": "Chocolate Golazo 25gr",
//!  "offers": {"price": "890"}}
//! </script></head><body></body></html>"#;
//!
//! let record = extract(html, "https://tienda.cl/producto/chocolate-golazo-25gr")?;
//! if let Some(product) = record {
//!     assert_eq!(product.name, "Chocolate Golazo 25gr");
//!     assert_eq!(product.price, Some(890.0));
//!     assert_eq!(product.strategy, "schema.org");
//! }
//! # Ok::<(), product_harvest::Error>(())
//! ```
//!
//! ## Behavior
//!
//! - Extraction is best-effort: absent elements, malformed JSON-LD, and
//!   selectors that match nothing all fall through to the next tactic.
//!   The only "failure" is `Ok(None)`: no product detected.
//! - A returned record always carries a non-empty name that passed the
//!   site-banner plausibility filter; price may be missing (`None`) as a
//!   completeness signal, never as an error.
//! - Strategies read the page; they never mutate it. Two extractions over
//!   the same input yield identical records.

mod error;
mod options;
mod patterns;
mod result;

/// Read-only DOM adapter over dom_query.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Image URL resolution (lazy-load attributes, srcset).
pub mod image;

/// OCR transcript parsing, the DOM normalizer's simplified sibling.
pub mod ocr;

/// Read-only page context passed into every strategy.
pub mod page;

/// Price parsing and scanning.
pub mod price;

/// Main-content scoping and header exclusion.
pub mod scope;

/// Per-site selector profiles.
pub mod sites;

/// The ordered strategy chain.
pub mod strategies;

/// Text plausibility and naming helpers.
pub mod text;

/// URL validation and resolution utilities.
pub mod url_utils;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::Options;
pub use page::PageContext;
pub use result::{Confidence, ExtractedProduct};

/// Extract a product record from page HTML using default options.
///
/// # Arguments
///
/// * `html` - The page HTML as a string slice
/// * `url` - The page URL at extraction time (absolute http/https)
///
/// # Returns
///
/// `Ok(Some(record))` when a plausible product was found, `Ok(None)` when
/// the page has no detectable product. The only error is an unusable page
/// URL.
#[allow(clippy::missing_errors_doc)]
pub fn extract(html: &str, url: &str) -> Result<Option<ExtractedProduct>> {
    extract_with_options(html, url, &Options::default())
}

/// Extract a product record from page HTML with custom options.
///
/// # Example
///
/// ```rust
/// use product_harvest::{extract_with_options, Options};
///
/// let html = "<html><body><h1>Yerba Mate 500g</h1></body></html>";
/// let options = Options {
///     use_site_profiles: false,
///     ..Options::default()
/// };
/// let record = extract_with_options(html, "https://tienda.cl/producto/yerba-mate-500g", &options)?;
/// # Ok::<(), product_harvest::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract_with_options(
    html: &str,
    url: &str,
    options: &Options,
) -> Result<Option<ExtractedProduct>> {
    let page = PageContext::new(html, url)?;
    Ok(strategies::run_chain(&page, options))
}

/// Extract from raw page bytes with automatic encoding detection.
///
/// Detects the charset from meta tags and converts to UTF-8 before
/// extraction. Invalid characters are replaced rather than rejected.
#[allow(clippy::missing_errors_doc)]
pub fn extract_bytes(html: &[u8], url: &str) -> Result<Option<ExtractedProduct>> {
    let html_str = encoding::decode_html(html);
    extract(&html_str, url)
}

/// Extract from raw page bytes with custom options and automatic encoding
/// detection.
#[allow(clippy::missing_errors_doc)]
pub fn extract_bytes_with_options(
    html: &[u8],
    url: &str,
    options: &Options,
) -> Result<Option<ExtractedProduct>> {
    let html_str = encoding::decode_html(html);
    extract_with_options(&html_str, url, options)
}

/// Heuristic check whether a page looks like a product detail page.
///
/// Hosts use this to decide whether to surface the capture affordance at
/// all: a product-shaped URL path, a JSON-LD `Product` block, or a
/// heading together with a price signal all count.
#[allow(clippy::missing_errors_doc)]
pub fn is_product_page(html: &str, url: &str) -> Result<bool> {
    let page = PageContext::new(html, url)?;
    Ok(strategies::is_product_page(&page))
}
