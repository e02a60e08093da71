//! Character encoding detection and transcoding.
//!
//! Older storefronts still serve ISO-8859-1 or windows-1252 pages, and a
//! mis-decoded page garbles exactly the characters product names in
//! Spanish depend on (ñ, á, é). The byte-level entry points sniff the
//! charset declaration and convert to UTF-8 before any extraction runs.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// How many leading bytes to sniff for a charset declaration.
const SNIFF_WINDOW: usize = 2048;

/// Charset declaration shapes, in detection order: `<meta charset="...">`
/// first, the legacy `http-equiv` form second.
static CHARSET_DECLARATIONS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>]+)"#).expect("valid charset regex"),
        Regex::new(
            r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#,
        )
        .expect("valid charset regex"),
    ]
});

/// Detect the character encoding declared by an HTML document.
///
/// Only the first [`SNIFF_WINDOW`] bytes are examined; documents without a
/// recognizable declaration default to UTF-8, the web's default.
#[must_use]
pub fn detect_charset(html: &[u8]) -> &'static Encoding {
    let head = &html[..html.len().min(SNIFF_WINDOW)];
    let head_str = String::from_utf8_lossy(head);

    for declaration in CHARSET_DECLARATIONS.iter() {
        if let Some(label) = declaration.captures(&head_str).and_then(|c| c.get(1)) {
            if let Some(encoding) = Encoding::for_label(label.as_str().as_bytes()) {
                return encoding;
            }
        }
    }

    UTF_8
}

/// Decode raw page bytes to a UTF-8 string.
///
/// Invalid sequences become the Unicode replacement character rather than
/// an error; a partially garbled page still goes through the strategy
/// chain.
#[must_use]
pub fn decode_html(html: &[u8]) -> String {
    let encoding = detect_charset(html);

    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }

    let (decoded, _, _) = encoding.decode(html);
    decoded.into_owned()
}
