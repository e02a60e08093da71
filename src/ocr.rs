//! OCR transcript parsing.
//!
//! The image-capture flow runs OCR over a product photo and hands the raw
//! transcript to this simplified sibling of the DOM normalizer: a reduced
//! pattern set for the price and a line heuristic for the name. Numeric
//! normalization and sanity bounds are shared with [`crate::price`] so the
//! two call sites can never drift apart.

use crate::patterns::OCR_PRICE_PATTERNS;
use crate::price;
use crate::text;

/// Maximum name length taken from a transcript line.
const MAX_NAME_LEN: usize = 200;

/// Parse a price out of a free-text OCR transcript.
///
/// Tries the reduced pattern table in order and returns the first match
/// that survives [`price::parse_price`]'s normalization and bounds.
#[must_use]
pub fn parse_price(transcript: &str) -> Option<f64> {
    for pattern in OCR_PRICE_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(transcript) {
            let fragment = caps.get(1).or_else(|| caps.get(0)).map_or("", |m| m.as_str());
            if let Some(value) = price::parse_price(fragment) {
                return Some(value);
            }
        }
    }
    None
}

/// Pick a product name out of a free-text OCR transcript.
///
/// First line between 6 and 119 characters that is neither digits-only
/// nor a bare price wins; failing that, the first line longer than 3
/// characters. Names are truncated to 200 characters.
#[must_use]
pub fn parse_name(transcript: &str) -> Option<String> {
    let lines: Vec<&str> = transcript
        .lines()
        .map(str::trim)
        .filter(|l| l.chars().count() > 3)
        .collect();

    for line in &lines {
        let len = line.chars().count();
        if len > 5 && len < 120 && !is_digits_only(line) && !is_bare_price(line) {
            return Some(text::truncate_chars(line, MAX_NAME_LEN));
        }
    }

    lines
        .first()
        .map(|l| text::truncate_chars(l, MAX_NAME_LEN))
}

fn is_digits_only(line: &str) -> bool {
    !line.is_empty() && line.chars().all(|c| c.is_ascii_digit())
}

fn is_bare_price(line: &str) -> bool {
    let Some(rest) = line.strip_prefix('$') else {
        return false;
    };
    !rest.is_empty()
        && rest
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == ',' || c.is_whitespace())
}
