//! Page metadata from front-matter.

use serde::{Deserialize, Deserializer, Serialize};

use super::JsonMap;

/// Page metadata from the `---` / `+++` block of an `.md` or `.mdx` file
///
/// # Standard Fields
///
/// | Field          | Type     | Description                          |
/// |----------------|----------|--------------------------------------|
/// | `title`        | `String` | Page title                           |
/// | `description`  | `String` | Short summary for search snippets    |
/// | `lastModified` | `String` | Last modification timestamp          |
/// | `draft`        | `bool`   | Draft status (default: false)        |
///
/// `lastModified` is kept as the raw string. It is parsed when a sitemap
/// entry is built so a malformed value fails with the page URL attached.
/// A bare TOML date (`lastModified = 2024-01-01`) is stored in its text form.
///
/// # Custom Fields (`extra`)
///
/// Any additional fields (`icon`, `full`, ...) are captured in `extra` as raw JSON
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        alias = "last_modified",
        alias = "last-modified",
        deserialize_with = "deserialize_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified: Option<String>,
    pub draft: bool,
    /// Additional user-defined fields.
    #[serde(flatten)]
    pub extra: JsonMap,
}

/// Accept `lastModified` as a string or a native TOML datetime.
fn deserialize_timestamp<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Timestamp {
        Text(String),
        Toml(toml::value::Datetime),
    }

    Ok(
        Option::<Timestamp>::deserialize(deserializer)?.map(|ts| match ts {
            Timestamp::Text(text) => text,
            Timestamp::Toml(datetime) => datetime.to_string(),
        }),
    )
}
