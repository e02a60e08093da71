//! Read-only page context.
//!
//! Every strategy and helper receives an explicit `PageContext` instead of
//! reaching for ambient globals: the parsed document, the page URL, and
//! the normalized host travel together. This keeps the whole pipeline
//! unit-testable against synthetic HTML fixtures.

use url::Url;

use crate::dom::{self, Document, Selection};
use crate::error::{Error, Result};
use crate::url_utils;

/// The read-only context one extraction call operates on.
///
/// Constructed once per page; strategies only query it, they never mutate
/// the document.
pub struct PageContext {
    doc: Document,
    url: Url,
    source_url: String,
    host: String,
}

impl PageContext {
    /// Parse page HTML and the page URL into a context.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] when the URL cannot be parsed as an
    /// absolute http(s) URL with a host. Malformed HTML is not an error;
    /// the parser recovers what it can.
    pub fn new(html: &str, url: &str) -> Result<Self> {
        let source_url = url.trim().to_string();
        let parsed = url_utils::parse_url(&source_url)
            .ok_or_else(|| Error::InvalidUrl(source_url.clone()))?;
        let host = parsed
            .host_str()
            .map(|h| url_utils::strip_www(h).to_string())
            .ok_or_else(|| Error::InvalidUrl(source_url.clone()))?;

        Ok(Self {
            doc: dom::parse(html),
            url: parsed,
            source_url,
            host,
        })
    }

    /// The parsed document.
    #[must_use]
    pub fn doc(&self) -> &Document {
        &self.doc
    }

    /// The parsed page URL.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The page URL exactly as given at extraction time.
    #[must_use]
    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// Page hostname with a leading "www." stripped.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The document body as a selection root.
    #[must_use]
    pub fn body(&self) -> Selection<'_> {
        self.doc.select("body")
    }
}
