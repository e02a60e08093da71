//! Configuration options for product extraction.
//!
//! The `Options` struct controls extraction behavior. Defaults match the
//! behavior of the original capture pipeline; most callers can use
//! `Options::default()` unchanged.

use crate::sites::SiteProfile;

/// Configuration options for product extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use product_harvest::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     use_site_profiles: false,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Engage the site-specific selector-map strategy for known hosts.
    ///
    /// When disabled, extraction starts at the schema.org strategy even on
    /// hosts that have a built-in profile.
    ///
    /// Default: `true`
    pub use_site_profiles: bool,

    /// Additional site profiles, consulted before the built-in table.
    ///
    /// A profile whose host matches the current page takes priority over a
    /// built-in profile for the same host.
    ///
    /// Default: empty
    pub extra_profiles: Vec<SiteProfile>,

    /// Maximum product name length in characters.
    ///
    /// Names longer than this are truncated on a character boundary.
    ///
    /// Default: `200`
    pub max_name_len: usize,

    /// Maximum description length in characters.
    ///
    /// Default: `500`
    pub max_description_len: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            use_site_profiles: true,
            extra_profiles: Vec::new(),
            max_name_len: 200,
            max_description_len: 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let opts = Options::default();

        assert!(opts.use_site_profiles);
        assert!(opts.extra_profiles.is_empty());
        assert_eq!(opts.max_name_len, 200);
        assert_eq!(opts.max_description_len, 500);
    }

    #[test]
    fn options_can_be_customized() {
        let opts = Options {
            use_site_profiles: false,
            max_name_len: 80,
            ..Options::default()
        };

        assert!(!opts.use_site_profiles);
        assert_eq!(opts.max_name_len, 80);
        assert_eq!(opts.max_description_len, 500);
    }
}
