//! schema.org JSON-LD generation.
//!
//! Two generators build one schema object each from config. `combine_schemas`
//! serializes any number of them into a single JSON array suitable for one
//! `<script type="application/ld+json">` element.

use serde_json::{Value, json};

use crate::config::{OrganizationConfig, SiteInfoConfig};
use crate::core::UrlPath;

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// A schema.org record. Built fresh per call, never mutated afterwards.
pub type SchemaObject = Value;

/// `WebSite` schema for the documentation site.
pub fn website_schema(site: &SiteInfoConfig) -> SchemaObject {
    let mut schema = json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "WebSite",
        "name": site.title,
        "url": UrlPath::root().absolute(site.base_url()),
    });

    if !site.description.is_empty() {
        schema["description"] = json!(site.description);
    }
    if !site.language.is_empty() {
        schema["inLanguage"] = json!(site.language);
    }
    schema
}

/// `Organization` schema for the publisher.
///
/// `url` and `logo` are emitted only when set; `sameAs` only when non-empty.
pub fn organization_schema(org: &OrganizationConfig) -> SchemaObject {
    let mut schema = json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Organization",
        "name": org.name,
    });

    if let Some(url) = &org.url {
        schema["url"] = json!(url);
    }
    if let Some(logo) = &org.logo {
        schema["logo"] = json!(logo);
    }
    if !org.same_as.is_empty() {
        schema["sameAs"] = json!(org.same_as);
    }
    schema
}

/// Serialize schemas as one JSON array, preserving input order.
///
/// Zero schemas give `[]`.
pub fn combine_schemas(schemas: &[SchemaObject]) -> serde_json::Result<String> {
    serde_json::to_string(schemas)
}

/// Pretty-printed variant of [`combine_schemas`] for terminal output.
pub fn combine_schemas_pretty(schemas: &[SchemaObject]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(schemas)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> SiteInfoConfig {
        SiteInfoConfig {
            title: "DeployStack Docs".into(),
            description: "Documentation for DeployStack".into(),
            url: Some("https://docs.example.com".into()),
            language: "en".into(),
        }
    }

    fn org() -> OrganizationConfig {
        OrganizationConfig {
            name: "DeployStack".into(),
            url: Some("https://example.com".into()),
            logo: Some("https://docs.example.com/logo.png".into()),
            same_as: vec![
                "https://github.com/deploystackio".into(),
                "https://x.com/deploystack".into(),
            ],
        }
    }

    fn parse(payload: &str) -> Vec<Value> {
        serde_json::from_str(payload).unwrap()
    }

    #[test]
    fn test_website_schema_fields() {
        let schema = website_schema(&site());
        assert_eq!(
            schema,
            json!({
                "@context": "https://schema.org",
                "@type": "WebSite",
                "name": "DeployStack Docs",
                "url": "https://docs.example.com/",
                "description": "Documentation for DeployStack",
                "inLanguage": "en",
            })
        );
    }

    #[test]
    fn test_website_schema_optional_fields_omitted() {
        let site = SiteInfoConfig {
            description: String::new(),
            language: String::new(),
            ..site()
        };
        let schema = website_schema(&site);
        assert!(schema.get("description").is_none());
        assert!(schema.get("inLanguage").is_none());
    }

    #[test]
    fn test_organization_schema_fields() {
        let schema = organization_schema(&org());
        assert_eq!(schema["@type"], "Organization");
        assert_eq!(schema["name"], "DeployStack");
        assert_eq!(schema["logo"], "https://docs.example.com/logo.png");
        assert_eq!(
            schema["sameAs"],
            json!(["https://github.com/deploystackio", "https://x.com/deploystack"])
        );
    }

    #[test]
    fn test_organization_schema_empty_same_as_omitted() {
        let org = OrganizationConfig {
            same_as: Vec::new(),
            logo: None,
            ..org()
        };
        let schema = organization_schema(&org);
        assert!(schema.get("sameAs").is_none());
        assert!(schema.get("logo").is_none());
    }

    #[test]
    fn test_generators_idempotent() {
        assert_eq!(website_schema(&site()), website_schema(&site()));
        assert_eq!(organization_schema(&org()), organization_schema(&org()));
    }

    #[test]
    fn test_combine_empty() {
        let payload = combine_schemas(&[]).unwrap();
        assert_eq!(payload, "[]");
        assert!(parse(&payload).is_empty());
    }

    #[test]
    fn test_combine_single() {
        let payload = combine_schemas(&[website_schema(&site())]).unwrap();
        let parsed = parse(&payload);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0]["@type"], "WebSite");
    }

    #[test]
    fn test_combine_preserves_order() {
        let payload =
            combine_schemas(&[website_schema(&site()), organization_schema(&org())]).unwrap();
        let types: Vec<_> = parse(&payload)
            .iter()
            .map(|s| s["@type"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(types, vec!["WebSite", "Organization"]);

        let reversed =
            combine_schemas(&[organization_schema(&org()), website_schema(&site())]).unwrap();
        assert_eq!(parse(&reversed)[0]["@type"], "Organization");
    }

    #[test]
    fn test_combine_keeps_key_order() {
        let payload = combine_schemas(&[website_schema(&site())]).unwrap();
        assert!(payload.starts_with(r#"[{"@context":"https://schema.org","@type":"WebSite""#));
    }

    #[test]
    fn test_combine_pretty_is_equivalent() {
        let schemas = [website_schema(&site()), organization_schema(&org())];
        let compact = combine_schemas(&schemas).unwrap();
        let pretty = combine_schemas_pretty(&schemas).unwrap();
        assert!(pretty.contains('\n'));
        assert_eq!(parse(&compact), parse(&pretty));
    }
}
