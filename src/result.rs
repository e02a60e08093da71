//! Result types for extraction output.
//!
//! This module defines the structured product record produced by the
//! strategy chain. The record serializes to the capture endpoint's JSON
//! shape and round-trips through JSON unchanged.

use serde::{Deserialize, Serialize};

/// Coarse reliability tag attached to a strategy's output.
///
/// Used downstream to prioritize manual review: `High` for structured data
/// and curated site profiles, `Medium` for selector and meta-tag
/// heuristics, `Low` for the catch-all fallback and URL-only synthesis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Structured data or a curated per-site selector profile.
    High,
    /// Generic selector, microdata, or Open Graph heuristics.
    Medium,
    /// Whole-page fallback or URL-derived synthesis.
    #[default]
    Low,
}

/// A product record extracted from one page.
///
/// Constructed fresh on every extraction call; there is no persistence and
/// no identity beyond the current page. A record is only returned when
/// `name` is non-empty and judged not to be site chrome (site name,
/// welcome banner).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedProduct {
    /// Product name, truncated to the configured maximum length.
    pub name: String,

    /// Product description, possibly empty, truncated to the configured
    /// maximum length.
    #[serde(default)]
    pub description: String,

    /// Parsed price. `None` (or `0`) means "not found", a completeness
    /// signal to the caller, never an error state. Never negative.
    pub price: Option<f64>,

    /// Absolute image URL, resolved from lazy-load attributes.
    pub image: Option<String>,

    /// Stock keeping unit, when structured data provides one.
    pub sku: Option<String>,

    /// Brand name, when structured data provides one.
    pub brand: Option<String>,

    /// Product category, when structured data provides one.
    pub category: Option<String>,

    /// The page URL at extraction time.
    pub source_url: String,

    /// Page hostname with a leading "www." stripped.
    pub site_host: String,

    /// Tag of the strategy that produced this record, for confidence
    /// triage. Carries a `+url` suffix when the name was overridden from
    /// the URL slug.
    pub strategy: String,

    /// Strategy-dependent reliability tag.
    pub confidence: Confidence,
}

impl ExtractedProduct {
    /// True when the record carries neither a usable price nor an image.
    ///
    /// On single-page applications the product data may not have finished
    /// rendering at extraction time; hosts use this signal to wait a fixed
    /// delay (~1.5s) and re-run the extraction once. The crate itself
    /// never waits and never retries.
    #[must_use]
    pub fn is_incomplete(&self) -> bool {
        self.price.is_none_or(|p| p <= 0.0) && self.image.is_none()
    }
}
