//! Text plausibility and naming helpers.
//!
//! Shared by every strategy: deciding whether a candidate title is real
//! product text or site chrome, deriving a display name from the URL slug,
//! and cross-checking the two.

use url::Url;

use crate::patterns::{PLAIN_TAGLINE, SITE_BANNER, SLUG_GRAMS, SLUG_KILOS};

/// Decide whether a candidate title is site chrome rather than a product
/// name.
///
/// Rejected when: shorter than 3 characters; matching the domain-suffix /
/// welcome / home banner patterns; or under 25 characters and made of
/// letters, spaces and periods only (brand taglines; real product names
/// usually carry digits, units or punctuation).
#[must_use]
pub fn looks_like_site_banner(text: &str) -> bool {
    let text = text.trim();
    let len = text.chars().count();

    if len < 3 {
        return true;
    }
    if SITE_BANNER.is_match(text) {
        return true;
    }
    if len < 25 && PLAIN_TAGLINE.is_match(text) {
        return true;
    }
    false
}

/// Derive a display name from the last URL path segment.
///
/// Hyphens become spaces, each word is capitalized, and weight units glued
/// to a number (`250g`, `5kg`) get spaced out. Returns `None` when the
/// path has no usable slug.
#[must_use]
pub fn name_from_url(url: &Url) -> Option<String> {
    let slug = url.path_segments()?.filter(|s| !s.is_empty()).next_back()?;

    if slug.chars().count() < 3 {
        return None;
    }

    let spaced = slug.replace('-', " ");
    let capitalized = capitalize_words(&spaced);
    let with_units = SLUG_GRAMS.replace_all(&capitalized, " ${1} g");
    let with_units = SLUG_KILOS.replace_all(&with_units, " ${1} kg");

    let name = with_units.split_whitespace().collect::<Vec<_>>().join(" ");
    if name.chars().count() > 4 {
        Some(name)
    } else {
        None
    }
}

/// Uppercase the first character of each whitespace-separated word.
fn capitalize_words(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Check whether a DOM-derived name shares any significant word with the
/// URL-derived name.
///
/// Words of 3+ characters count; a pair matches when either contains the
/// other. Vacuously true when either side has no significant words, so a
/// short slug never forces an override on its own.
#[must_use]
pub fn name_matches_url(dom_name: &str, url_name: &str) -> bool {
    let url_words: Vec<String> = significant_words(url_name);
    let dom_words: Vec<String> = significant_words(dom_name);

    if url_words.is_empty() || dom_words.is_empty() {
        return true;
    }

    url_words
        .iter()
        .any(|uw| dom_words.iter().any(|dw| dw.contains(uw.as_str()) || uw.contains(dw.as_str())))
}

fn significant_words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .filter(|w| w.chars().count() > 2)
        .map(ToString::to_string)
        .collect()
}

/// Truncate a string to at most `max` characters, on a character boundary.
#[must_use]
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    text.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        match Url::parse(s) {
            Ok(u) => u,
            Err(err) => panic!("fixture URL should parse: {err}"),
        }
    }

    #[test]
    fn banner_rejects_short_and_chrome_text() {
        assert!(looks_like_site_banner(""));
        assert!(looks_like_site_banner("ab"));
        assert!(looks_like_site_banner("Bienvenido a TiendaXYZ.cl"));
        assert!(looks_like_site_banner("MiTienda.com"));
        assert!(looks_like_site_banner("Home - Inicio"));
    }

    #[test]
    fn banner_rejects_short_taglines() {
        // Under 25 chars, letters/spaces/periods only
        assert!(looks_like_site_banner("Calidad y servicio"));
        assert!(!looks_like_site_banner("Pilas Duracell AA 40 unidades"));
        assert!(!looks_like_site_banner("Cafe x 250"));
    }

    #[test]
    fn banner_accepts_real_product_names() {
        assert!(!looks_like_site_banner("Chocolate Golazo 25gr"));
        assert!(!looks_like_site_banner("Detergente Liquido 3L Omo"));
    }

    #[test]
    fn slug_becomes_capitalized_name() {
        assert_eq!(
            name_from_url(&url("https://tienda.cl/producto/pilas-duracell-aa-40-unidades")),
            Some("Pilas Duracell Aa 40 Unidades".to_string())
        );
    }

    #[test]
    fn slug_keeps_compact_unit_suffixes() {
        // "25gr" is not a bare unit, so it stays glued
        assert_eq!(
            name_from_url(&url("https://tienda.cl/producto/chocolate-golazo-25gr")),
            Some("Chocolate Golazo 25gr".to_string())
        );
    }

    #[test]
    fn slug_spaces_out_bare_units() {
        assert_eq!(
            name_from_url(&url("https://tienda.cl/producto/azucar-rubia-500g")),
            Some("Azucar Rubia 500 g".to_string())
        );
        assert_eq!(
            name_from_url(&url("https://tienda.cl/producto/harina-5kg")),
            Some("Harina 5 kg".to_string())
        );
    }

    #[test]
    fn slug_ignores_trailing_slash_and_short_segments() {
        assert_eq!(
            name_from_url(&url("https://tienda.cl/producto/cafe-molido/")),
            Some("Cafe Molido".to_string())
        );
        assert_eq!(name_from_url(&url("https://tienda.cl/p/ab")), None);
        assert_eq!(name_from_url(&url("https://tienda.cl/")), None);
    }

    #[test]
    fn name_match_requires_shared_word() {
        assert!(name_matches_url(
            "Pilas Duracell AA 40 Unidades Blister",
            "Pilas Duracell Aa 40 Unidades"
        ));
        assert!(!name_matches_url(
            "Ofertas de la semana",
            "Pilas Duracell Aa 40 Unidades"
        ));
    }

    #[test]
    fn name_match_is_substring_tolerant() {
        // "golazo" inside "chocogolazo" still counts
        assert!(name_matches_url("ChocoGolazo XL", "Chocolate Golazo 25gr"));
    }

    #[test]
    fn name_match_vacuous_without_significant_words() {
        assert!(name_matches_url("a b", "Pilas Duracell"));
        assert!(name_matches_url("Pilas Duracell", "x y"));
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("Café", 3), "Caf");
        assert_eq!(truncate_chars("corto", 10), "corto");
    }
}
