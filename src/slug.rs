/// Slug derivation for theme names

use std::sync::LazyLock;

use regex::Regex;

static DISALLOWED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9\s-]").unwrap());
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static HYPHENS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").unwrap());

/// Convert a theme name into a URL path segment
///
/// Algorithm:
/// 1. Keep only what follows the last `/` (names like "vendor/Theme")
/// 2. Lowercase
/// 3. Drop everything except `a-z`, `0-9`, whitespace and `-`
/// 4. Trim, then turn each whitespace run into `-`
/// 5. Collapse hyphen runs and strip hyphens at either end
///
/// Examples:
/// - "Prestige" → prestige
/// - "foo/Bar Baz" → bar-baz
/// - "Prestige -- Multi  Purpose!!" → prestige-multi-purpose
pub fn create_slug(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let last_segment = text.rsplit('/').next().unwrap_or(text);
    let lowered = last_segment.to_lowercase();
    let cleaned = DISALLOWED_RE.replace_all(&lowered, "");
    let hyphenated = WHITESPACE_RE.replace_all(cleaned.trim(), "-");
    let collapsed = HYPHENS_RE.replace_all(&hyphenated, "-");

    collapsed.trim_matches('-').to_string()
}

/// Slug of an optional name, empty when absent
pub fn create_slug_opt(text: Option<&str>) -> String {
    text.map(create_slug).unwrap_or_default()
}
