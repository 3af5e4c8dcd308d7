/// Shopify theme detection over an inspected page

use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::{NOT_FOUND_PLACEHOLDER, THEME_ID_META_NAME, THEME_SCRIPT_MARKER};
use crate::page::PageInspector;

static SCHEMA_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""schema_name"\s*:\s*"([^"]+)""#).unwrap());

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""name"\s*:\s*"([^"]+)""#).unwrap());

/// Which strategy produced a detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionKind {
    SchemaName,
    FallbackName,
    /// The value is the numeric theme ID, not a display name
    FallbackId,
    NotFound,
}

/// Outcome of inspecting a page for its theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub kind: DetectionKind,
    pub value: String,
}

impl DetectionResult {
    pub fn new(kind: DetectionKind, value: impl Into<String>) -> DetectionResult {
        DetectionResult {
            kind,
            value: value.into(),
        }
    }

    pub fn not_found() -> DetectionResult {
        DetectionResult::new(DetectionKind::NotFound, NOT_FOUND_PLACEHOLDER)
    }

    /// The detected name or ID, `None` when nothing matched
    pub fn name(&self) -> Option<&str> {
        match self.kind {
            DetectionKind::NotFound => None,
            _ => Some(&self.value),
        }
    }

    /// Whether the result came from one of the weaker strategies
    pub fn is_fallback(&self) -> bool {
        matches!(self.kind, DetectionKind::FallbackName | DetectionKind::FallbackId)
    }
}

/// Detect the theme of a page
///
/// Strategies, first match wins:
/// 1. `"schema_name": "..."` in the first script mentioning `Shopify.theme` that has one
/// 2. `"name": "..."` in the same kind of script, scanned again from the start
/// 3. the `content` of `<meta name="shopify-theme-id">`
/// 4. `NotFound` with a placeholder
///
/// Strategy 3 reports the numeric ID in the same slot as a name. Downstream
/// links built from it are poor but still usable, so it is left that way.
pub fn detect_theme(page: &impl PageInspector) -> DetectionResult {
    let scripts = page.script_texts();

    if let Some(name) = scan_scripts(&scripts, &SCHEMA_NAME_RE) {
        return DetectionResult::new(DetectionKind::SchemaName, name);
    }
    debug!("No schema_name in theme scripts");

    if let Some(name) = scan_scripts(&scripts, &NAME_RE) {
        return DetectionResult::new(DetectionKind::FallbackName, name);
    }
    debug!("No name in theme scripts");

    if let Some(id) = page.meta_content(THEME_ID_META_NAME) {
        return DetectionResult::new(DetectionKind::FallbackId, id);
    }
    debug!("No {} meta tag", THEME_ID_META_NAME);

    DetectionResult::not_found()
}

/// First capture of `pattern` among scripts that mention the theme object
fn scan_scripts(scripts: &[String], pattern: &Regex) -> Option<String> {
    scripts
        .iter()
        .filter(|text| text.contains(THEME_SCRIPT_MARKER))
        .find_map(|text| pattern.captures(text))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{MetaTag, PageSnapshot};

    fn page(scripts: &[&str], theme_id: Option<&str>) -> PageSnapshot {
        PageSnapshot::new(
            scripts.iter().map(|s| s.to_string()).collect(),
            theme_id
                .map(|id| {
                    vec![MetaTag {
                        name: "shopify-theme-id".to_string(),
                        content: id.to_string(),
                    }]
                })
                .unwrap_or_default(),
        )
    }

    #[test]
    fn test_schema_name() {
        let p = page(
            &[r#"Shopify.theme = {"schema_name":"Prestige","name":"Prestige Child"};"#],
            None,
        );

        assert_eq!(
            detect_theme(&p),
            DetectionResult::new(DetectionKind::SchemaName, "Prestige")
        );
    }

    #[test]
    fn test_schema_name_with_whitespace_and_other_keys() {
        let p = page(
            &[r#"
                Shopify.theme = {
                    "id": 1234,
                    "role": "main",
                    "schema_name"  :   "Dawn  Modern",
                    "schema_version": "15.0.0"
                };
            "#],
            None,
        );

        assert_eq!(
            detect_theme(&p),
            DetectionResult::new(DetectionKind::SchemaName, "Dawn  Modern")
        );
    }

    #[test]
    fn test_schema_name_wins_over_later_scripts() {
        let p = page(
            &[
                r#"Shopify.theme = {"name":"Custom Copy"};"#,
                r#"Shopify.theme = {"schema_name":"Impulse"};"#,
            ],
            Some("99"),
        );

        // The schema scan looks past the first script before falling back to names
        assert_eq!(
            detect_theme(&p),
            DetectionResult::new(DetectionKind::SchemaName, "Impulse")
        );
    }

    #[test]
    fn test_fallback_name() {
        let p = page(
            &[
                "window.dataLayer = [];",
                r#"Shopify.theme = {"name":"My Store Theme","id":42};"#,
            ],
            Some("42"),
        );

        assert_eq!(
            detect_theme(&p),
            DetectionResult::new(DetectionKind::FallbackName, "My Store Theme")
        );
    }

    #[test]
    fn test_scripts_without_marker_ignored() {
        let p = page(&[r#"var theme = {"schema_name":"Nope","name":"Nope"};"#], None);

        assert_eq!(detect_theme(&p), DetectionResult::not_found());
    }

    #[test]
    fn test_marker_is_case_sensitive() {
        let p = page(&[r#"shopify.Theme = {"schema_name":"Nope"};"#], None);

        assert_eq!(detect_theme(&p).kind, DetectionKind::NotFound);
    }

    #[test]
    fn test_key_names_are_exact() {
        let p = page(&[r#"Shopify.theme = {"Schema_Name":"A","theme_name":"B"};"#], None);

        assert_eq!(detect_theme(&p).kind, DetectionKind::NotFound);
    }

    #[test]
    fn test_empty_values_do_not_match() {
        let p = page(&[r#"Shopify.theme = {"schema_name":"","name":"Fallback"};"#], None);

        assert_eq!(
            detect_theme(&p),
            DetectionResult::new(DetectionKind::FallbackName, "Fallback")
        );
    }

    #[test]
    fn test_marker_mention_without_object_is_accepted() {
        let p = page(
            &[r#"if (window.Shopify.theme) { track({"name":"pageview"}); }"#],
            None,
        );

        assert_eq!(
            detect_theme(&p),
            DetectionResult::new(DetectionKind::FallbackName, "pageview")
        );
    }

    #[test]
    fn test_meta_theme_id() {
        let p = page(&["console.log('hello');"], Some("123456789"));

        assert_eq!(
            detect_theme(&p),
            DetectionResult::new(DetectionKind::FallbackId, "123456789")
        );
    }

    #[test]
    fn test_not_found() {
        let p = page(&[], None);
        let result = detect_theme(&p);

        assert_eq!(result.kind, DetectionKind::NotFound);
        assert_eq!(result.value, "Theme details not found.");
        assert_eq!(result.name(), None);
    }

    #[test]
    fn test_name_and_fallback_flags() {
        let schema = DetectionResult::new(DetectionKind::SchemaName, "Dawn");
        let id = DetectionResult::new(DetectionKind::FallbackId, "7");

        assert_eq!(schema.name(), Some("Dawn"));
        assert!(!schema.is_fallback());
        assert!(id.is_fallback());
        assert!(!DetectionResult::not_found().is_fallback());
    }

    #[test]
    fn test_serialization() {
        let result = DetectionResult::new(DetectionKind::FallbackId, "123");
        let json = serde_json::to_string(&result).unwrap();

        assert_eq!(json, r#"{"kind":"fallback_id","value":"123"}"#);
    }
}
