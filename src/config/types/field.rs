//! Config field paths for diagnostics.

use crate::logger::paint;
use owo_colors::Style;
use std::fmt;

/// Dotted path of a config field, e.g. `site.url`.
///
/// Each section exposes its paths through a `FIELDS` constant so
/// diagnostics never spell a key by hand:
///
/// ```ignore
/// diag.error(SiteInfoConfig::FIELDS.url, "required");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            paint(format_args!("`{}`", self.0), Style::new().bright_blue())
        )
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}
