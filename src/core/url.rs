//! URL path type for type-safe page routes.
//!
//! - Internal representation: always decoded (human-readable)
//! - Output boundary: encode when joined into an absolute URL

use std::borrow::Borrow;
use std::sync::{Arc, OnceLock};

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::{Deserialize, Serialize};

/// Characters escaped inside a path segment of an absolute URL.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Decoded page route.
///
/// Invariants:
/// - Always decoded (no percent-encoding)
/// - Always starts with `/`
/// - Never ends with `/`, except the root which is exactly `/`
/// - No empty segments (`//` collapses)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UrlPath(Arc<str>);

impl UrlPath {
    /// The site root `/`.
    pub fn root() -> Self {
        Self(Arc::from("/"))
    }

    /// Create a page route. Normalizes slashes and strips query string and fragment.
    pub fn from_page(decoded: &str) -> Self {
        let trimmed = decoded.trim();
        if trimmed.is_empty() || trimmed == "/" {
            return Self::root();
        }

        // Collapse `//` first so the url crate never sees a scheme-relative reference
        let collapsed: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();
        let path = Self::strip_query_fragment(&format!("/{}", collapsed.join("/")));
        Self::from_segments(path.split('/'))
    }

    /// Build a route from raw segments, skipping empty ones.
    pub fn from_segments<'a>(segments: impl IntoIterator<Item = &'a str>) -> Self {
        let mut out = String::new();
        for segment in segments.into_iter().map(str::trim) {
            if segment.is_empty() {
                continue;
            }
            out.push('/');
            out.push_str(segment);
        }
        if out.is_empty() {
            Self::root()
        } else {
            Self(Arc::from(out))
        }
    }

    /// Strip query string and fragment from a path using the url crate.
    fn strip_query_fragment(path: &str) -> String {
        use percent_encoding::percent_decode_str;

        // Use a dummy base URL to parse the path
        static BASE: OnceLock<Option<url::Url>> = OnceLock::new();
        let base = BASE.get_or_init(|| url::Url::parse("http://x").ok());

        match base.as_ref().and_then(|b| b.join(path).ok()) {
            Some(parsed) => percent_decode_str(parsed.path())
                .decode_utf8()
                .map(|s| s.into_owned())
                .unwrap_or_else(|_| parsed.path().to_string()),
            None => path.split(['?', '#']).next().unwrap_or(path).to_string(),
        }
    }

    /// Append a child route under this one.
    ///
    /// `/development` + `/backend/api` -> `/development/backend/api`
    pub fn join(&self, child: &Self) -> Self {
        Self::from_segments(self.segments().chain(child.segments()))
    }

    /// Non-empty path segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }

    /// Get the decoded URL path as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the site root `/`.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.as_ref() == "/"
    }

    /// Encode for an absolute URL (segments percent-encoded, `/` kept).
    pub fn to_encoded(&self) -> String {
        if self.is_root() {
            return "/".to_string();
        }
        self.segments()
            .map(|segment| format!("/{}", utf8_percent_encode(segment, SEGMENT)))
            .collect()
    }

    /// Resolve against a base URL such as `https://docs.example.com`.
    ///
    /// Any path on the base is kept: `https://x.dev/docs` + `/a` -> `https://x.dev/docs/a`.
    pub fn absolute(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.to_encoded())
    }
}

impl std::fmt::Display for UrlPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for UrlPath {
    fn default() -> Self {
        Self::root()
    }
}

impl AsRef<str> for UrlPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for UrlPath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UrlPath {
    fn from(s: &str) -> Self {
        Self::from_page(s)
    }
}

impl PartialEq<str> for UrlPath {
    fn eq(&self, other: &str) -> bool {
        self.0.as_ref() == other
    }
}

impl PartialEq<&str> for UrlPath {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == *other
    }
}

impl Serialize for UrlPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for UrlPath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_page(&s))
    }
}
