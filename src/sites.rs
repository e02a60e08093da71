//! Per-site selector profiles.
//!
//! A small curated table for hosts whose markup defeats the generic
//! heuristics. Keyed by normalized hostname (leading "www." stripped);
//! only consulted when the current host has an entry.

use std::sync::LazyLock;

use crate::options::Options;

/// CSS-selector candidates for one known host.
#[derive(Debug, Clone)]
pub struct SiteProfile {
    /// Normalized hostname this profile applies to.
    pub host: String,
    /// Title selector candidates, in priority order.
    pub title_selectors: Vec<String>,
    /// Price selector candidates, in priority order.
    pub price_selectors: Vec<String>,
    /// Image selector candidates, in priority order.
    pub image_selectors: Vec<String>,
}

impl SiteProfile {
    fn new(host: &str, title: &[&str], price: &[&str], image: &[&str]) -> Self {
        Self {
            host: host.to_string(),
            title_selectors: title.iter().map(ToString::to_string).collect(),
            price_selectors: price.iter().map(ToString::to_string).collect(),
            image_selectors: image.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Built-in profiles for known problematic Chilean retailers.
pub static BUILTIN_PROFILES: LazyLock<Vec<SiteProfile>> = LazyLock::new(|| {
    vec![
        SiteProfile::new(
            "lider.cl",
            &[
                "h1[class*='product'], [class*='product-name']",
                "[class*='ProductName']",
                "h1",
            ],
            &[
                "[class*='price']",
                "[class*='Price']",
                "[data-price]",
                "[class*='precio']",
                "span[class*='amount']",
            ],
            &[
                "[class*='product-image'] img",
                "[class*='gallery'] img",
                "[class*='carousel'] img",
                "img[class*='product']",
                "main img",
                "[class*='pdp'] img",
            ],
        ),
        SiteProfile::new(
            "centralmayorista.cl",
            &[
                "h1",
                "[class*='product-title']",
                "[class*='product-name']",
                "[class*='titulo']",
            ],
            &[
                "[class*='price']",
                "[class*='precio']",
                "[class*='valor']",
                "[itemprop='price']",
                "[data-price]",
            ],
            &[
                "[class*='product'] img",
                "[class*='gallery'] img",
                "[class*='image'] img",
                "img[src*='product'], img[src*='Product']",
            ],
        ),
        SiteProfile::new(
            "laoferta.cl",
            &[
                "h1",
                ".product_title",
                "[class*='product-title']",
                "[class*='product-name']",
            ],
            &[
                ".price",
                "[class*='price']",
                ".amount",
                "[itemprop='price']",
                "ins .amount",
                ".woocommerce-Price-amount",
            ],
            &[
                ".woocommerce-product-gallery img",
                "[class*='product'] img",
                "img.attachment-woocommerce_single",
            ],
        ),
        SiteProfile::new(
            "distribuidoranico.cl",
            &[
                "h1",
                ".product_title",
                "[class*='product-title']",
                "[class*='product-name']",
                ".entry-title",
            ],
            &[
                ".summary .price bdi",
                ".summary .price .amount",
                ".price ins bdi",
                ".price ins .amount",
                ".price bdi",
                ".price .woocommerce-Price-amount",
                ".price .amount",
                "p.price bdi",
                "p.price",
                ".summary .price",
                "[itemprop='price']",
            ],
            &[
                ".woocommerce-product-gallery img",
                ".product img",
                "[class*='gallery'] img",
                "img.attachment-woocommerce_single",
            ],
        ),
    ]
});

/// Look up the profile for a host, custom profiles first.
#[must_use]
pub fn profile_for<'a>(opts: &'a Options, host: &str) -> Option<&'a SiteProfile> {
    opts.extra_profiles
        .iter()
        .find(|p| p.host == host)
        .or_else(|| BUILTIN_PROFILES.iter().find(|p| p.host == host))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_lookup_by_normalized_host() {
        let opts = Options::default();
        assert!(profile_for(&opts, "lider.cl").is_some());
        assert!(profile_for(&opts, "distribuidoranico.cl").is_some());
        assert!(profile_for(&opts, "tienda-desconocida.cl").is_none());
    }

    #[test]
    fn custom_profile_shadows_builtin() {
        let opts = Options {
            extra_profiles: vec![SiteProfile::new("lider.cl", &["h2.custom"], &[], &[])],
            ..Options::default()
        };
        let Some(profile) = profile_for(&opts, "lider.cl") else {
            panic!("profile should resolve");
        };
        assert_eq!(profile.title_selectors, vec!["h2.custom"]);
    }
}
