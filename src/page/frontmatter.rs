//! Front-matter extraction from YAML (`---`) or TOML (`+++`) fences.
//!
//! The YAML side is a flat `key: value` reader, not a full YAML parser.
//! Nested mappings and block lists are skipped; the fields the catalog
//! needs are always scalars.

use thiserror::Error;

use super::PageMeta;

#[derive(Debug, Error)]
pub enum FrontMatterError {
    #[error("invalid TOML front-matter")]
    Toml(#[from] toml::de::Error),
}

/// Extract front-matter and return (metadata, body).
///
/// Returns `Ok(None)` when the content has no front-matter block.
pub fn extract(content: &str) -> Result<Option<(PageMeta, &str)>, FrontMatterError> {
    match detect(content) {
        Some((fm, body, true)) => Ok(Some((toml::from_str(fm)?, body))),
        Some((fm, body, false)) => Ok(Some((parse_yaml_like(fm), body))),
        None => Ok(None),
    }
}

/// Detect and extract front-matter.
/// Returns `(front_matter, body, is_toml)` if found.
fn detect(content: &str) -> Option<(&str, &str, bool)> {
    // A leading BOM is common in files saved by Windows editors
    let trimmed = content.trim_start_matches('\u{feff}').trim_start();

    for (fence, is_toml) in [("---", false), ("+++", true)] {
        if let Some(after) = trimmed.strip_prefix(fence)
            && let Some(end) = after.find(&format!("\n{fence}"))
        {
            let fm = after[..end].trim();
            let body = after[end + 1 + fence.len()..].trim_start_matches(['\r', '\n']);
            return Some((fm, body, is_toml));
        }
    }

    None
}

/// Parse simple YAML-like front-matter (key: value).
fn parse_yaml_like(content: &str) -> PageMeta {
    let mut meta = PageMeta::default();

    for line in content.lines() {
        // Indented lines and list items belong to nested values
        if line.starts_with([' ', '\t']) || line.starts_with('-') {
            continue;
        }
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        let value = unquote(strip_comment(value.trim()));

        match key {
            "title" => meta.title = Some(value.to_string()),
            "description" => meta.description = Some(value.to_string()),
            "lastModified" | "last_modified" | "last-modified" => {
                meta.last_modified = Some(value.to_string());
            }
            "draft" => meta.draft = value.eq_ignore_ascii_case("true"),
            _ => {
                meta.extra.insert(key.to_string(), parse_yaml_value(value));
            }
        }
    }

    meta
}

/// Drop a trailing `# comment` from a scalar.
///
/// Inside quotes `#` is literal; otherwise it starts a comment only when it
/// follows whitespace, so `C#` and `/page#anchor` survive.
fn strip_comment(s: &str) -> &str {
    if let Some(quote) = s.chars().next().filter(|c| matches!(c, '"' | '\''))
        && let Some(end) = s[1..].find(quote)
    {
        return &s[..end + 2];
    }

    let bytes = s.as_bytes();
    (1..bytes.len())
        .find(|&i| bytes[i] == b'#' && bytes[i - 1].is_ascii_whitespace())
        .map_or(s, |i| s[..i].trim_end())
}

/// Strip one pair of matching surrounding quotes.
fn unquote(s: &str) -> &str {
    for quote in ['"', '\''] {
        if s.len() >= 2
            && let Some(inner) = s.strip_prefix(quote).and_then(|s| s.strip_suffix(quote))
        {
            return inner;
        }
    }
    s
}

/// Parse a YAML-like scalar into JSON
///
/// Supports:
/// - Booleans: `true`, `false`
/// - Null: `null`, `~`, empty
/// - Numbers: `123`, `3.14`
/// - Flow sequences: `[a, b]` -> `["a", "b"]`
/// - Strings: everything else
fn parse_yaml_value(s: &str) -> serde_json::Value {
    use serde_json::Value;

    if s.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if s.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    if s.is_empty() || s.eq_ignore_ascii_case("null") || s == "~" {
        return Value::Null;
    }
    if let Ok(n) = s.parse::<i64>() {
        return Value::Number(n.into());
    }
    if let Ok(n) = s.parse::<f64>()
        && let Some(num) = serde_json::Number::from_f64(n)
    {
        return Value::Number(num);
    }
    if let Some(inner) = s.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        let items = inner
            .split(',')
            .map(|item| unquote(item.trim()))
            .filter(|item| !item.is_empty())
            .map(|item| Value::String(item.to_string()))
            .collect();
        return Value::Array(items);
    }

    Value::String(s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_yaml_front_matter() {
        let content = "---\ntitle: Mail Setup\nlastModified: 2024-01-01\n---\n\n# Body";
        let (meta, body) = extract(content).unwrap().unwrap();

        assert_eq!(meta.title.as_deref(), Some("Mail Setup"));
        assert_eq!(meta.last_modified.as_deref(), Some("2024-01-01"));
        assert!(body.starts_with("# Body"));
    }

    #[test]
    fn test_yaml_quoted_values() {
        let content = "---\ntitle: \"Plugins: Overview\"\ndescription: 'Build your own'\n---\n";
        let (meta, _) = extract(content).unwrap().unwrap();

        assert_eq!(meta.title.as_deref(), Some("Plugins: Overview"));
        assert_eq!(meta.description.as_deref(), Some("Build your own"));
    }

    #[test]
    fn test_yaml_timestamp_with_colons() {
        let content = "---\nlastModified: \"2025-03-02T08:01:09.000Z\"\n---\n";
        let (meta, _) = extract(content).unwrap().unwrap();

        assert_eq!(
            meta.last_modified.as_deref(),
            Some("2025-03-02T08:01:09.000Z")
        );
    }

    #[test]
    fn test_yaml_draft_and_extra() {
        let content = "---\ndraft: true\nicon: Server\norder: 3\nfull: false\ntags: [a, \"b\"]\n---\n";
        let (meta, _) = extract(content).unwrap().unwrap();

        assert!(meta.draft);
        assert_eq!(meta.extra.get("icon"), Some(&json!("Server")));
        assert_eq!(meta.extra.get("order"), Some(&json!(3)));
        assert_eq!(meta.extra.get("full"), Some(&json!(false)));
        assert_eq!(meta.extra.get("tags"), Some(&json!(["a", "b"])));
    }

    #[test]
    fn test_yaml_skips_nested_values() {
        let content = "---\ntitle: Hello\nlinks:\n  - href: /a\n  - href: /b\n---\n";
        let (meta, _) = extract(content).unwrap().unwrap();

        assert_eq!(meta.title.as_deref(), Some("Hello"));
        assert_eq!(meta.extra.get("links"), Some(&json!(null)));
        assert!(meta.extra.get("href").is_none());
    }

    #[test]
    fn test_toml_front_matter() {
        let content = "+++\ntitle = \"Hello\"\nlastModified = \"2024-01-01\"\norder = 2\n+++\n\n# Body";
        let (meta, body) = extract(content).unwrap().unwrap();

        assert_eq!(meta.title.as_deref(), Some("Hello"));
        assert_eq!(meta.last_modified.as_deref(), Some("2024-01-01"));
        assert_eq!(meta.extra.get("order"), Some(&json!(2)));
        assert!(body.starts_with("# Body"));
    }

    #[test]
    fn test_yaml_trailing_comments() {
        let content = "---\nlastModified: 2024-01-01 # bumped\ntitle: \"Intro # 1\"  # quoted\nicon: C#\norder: 3\t# third\n---\n";
        let (meta, _) = extract(content).unwrap().unwrap();

        assert_eq!(meta.last_modified.as_deref(), Some("2024-01-01"));
        assert_eq!(meta.title.as_deref(), Some("Intro # 1"));
        assert_eq!(meta.extra.get("icon"), Some(&json!("C#")));
        assert_eq!(meta.extra.get("order"), Some(&json!(3)));
    }

    #[test]
    fn test_toml_native_dates() {
        let content = "+++\ntitle = \"A\"\nlastModified = 2024-01-01\n+++\n";
        let (meta, _) = extract(content).unwrap().unwrap();
        assert_eq!(meta.title.as_deref(), Some("A"));
        assert_eq!(meta.last_modified.as_deref(), Some("2024-01-01"));

        let content = "+++\nlast_modified = 2025-03-02T08:01:09Z\n+++\n";
        let (meta, _) = extract(content).unwrap().unwrap();
        assert_eq!(meta.last_modified.as_deref(), Some("2025-03-02T08:01:09Z"));
    }

    #[test]
    fn test_toml_front_matter_malformed() {
        let content = "+++\ntitle = \n+++\n";
        assert!(matches!(extract(content), Err(FrontMatterError::Toml(_))));
    }

    #[test]
    fn test_no_front_matter() {
        assert!(extract("# Just content").unwrap().is_none());
        assert!(extract("---\nunterminated").unwrap().is_none());
    }

    #[test]
    fn test_bom_and_crlf() {
        let content = "\u{feff}---\r\ntitle: Hello\r\n---\r\nBody";
        let (meta, body) = extract(content).unwrap().unwrap();

        assert_eq!(meta.title.as_deref(), Some("Hello"));
        assert_eq!(body, "Body");
    }
}
