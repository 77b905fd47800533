//! Icon asset trimming
//!
//! When the icon registry component ends up in a scaffold, the full asset
//! table would dwarf the rest of the payload. Instead, every resolved
//! source body is scanned for identifier-style asset references and only
//! the referenced entries (plus a small safety net) are shipped, with a
//! pointer to the full manifest for overflow lookups.
//!
//! The scanner is a best-effort string heuristic, kept behind this narrow
//! seam so it can be swapped for a real parser without touching the
//! scaffolder.

use std::collections::{BTreeMap, BTreeSet};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Catalog entry that carries the icon asset registry.
pub const ICON_REGISTRY_COMPONENT: &str = "Icon";

/// Assets shipped regardless of whether a scan found them; these back
/// default states (spinners, dismiss buttons, validation marks) that
/// source text often references indirectly.
const ALWAYS_INCLUDED: &[&str] = &[
    "alert-triangle",
    "check",
    "chevron-down",
    "chevron-right",
    "info",
    "loader",
    "search",
    "x",
];

static ASSET_REF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"name=["']([A-Za-z0-9][A-Za-z0-9_-]*)["']"#).expect("asset reference pattern")
});

/// Identifier-style asset references in a raw source body.
pub fn scan_asset_references(source: &str) -> BTreeSet<String> {
    ASSET_REF
        .captures_iter(source)
        .map(|caps| caps[1].to_string())
        .collect()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IconManifest<'a> {
    icons: BTreeMap<&'a str, &'a str>,
    full_manifest: &'a str,
}

/// Trimmed manifest body, or `None` when the catalog carries no asset
/// table at all (tolerated: the section is omitted, not an error).
pub(crate) fn trimmed_manifest(
    referenced: &BTreeSet<String>,
    asset_paths: &BTreeMap<String, String>,
    full_manifest_url: &str,
) -> Option<String> {
    if asset_paths.is_empty() {
        return None;
    }

    let mut icons = BTreeMap::new();
    for name in referenced
        .iter()
        .map(String::as_str)
        .chain(ALWAYS_INCLUDED.iter().copied())
    {
        if let Some(path) = asset_paths.get(name) {
            icons.insert(name, path.as_str());
        }
    }

    let manifest = IconManifest {
        icons,
        full_manifest: full_manifest_url,
    };
    let mut body = serde_json::to_string_pretty(&manifest).expect("icon manifest serialization");
    body.push('\n');
    Some(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn scanner_finds_single_and_double_quoted_references() {
        let source = r#"
            <Icon name="chevron-down" />
            <Icon name='trash' size={16} />
            const label = "not an icon";
        "#;

        let refs = scan_asset_references(source);
        let names: Vec<&str> = refs.iter().map(String::as_str).collect();
        assert_eq!(names, vec!["chevron-down", "trash"]);
    }

    #[test]
    fn scanner_ignores_non_identifier_values() {
        let refs = scan_asset_references(r#"<Icon name="{dynamic}" />"#);
        assert!(refs.is_empty());
    }

    #[test]
    fn manifest_unions_referenced_and_safety_net_entries() {
        let mut asset_paths = BTreeMap::new();
        for name in ["check", "x", "trash", "star"] {
            asset_paths.insert(name.to_string(), format!("icons/{name}.svg"));
        }
        let referenced: BTreeSet<String> = ["trash".to_string()].into();

        let body = trimmed_manifest(
            &referenced,
            &asset_paths,
            "https://cdn.example/registry/icons/manifest.json",
        )
        .unwrap();

        // Referenced and safety-net entries present, unreferenced dropped.
        assert!(body.contains("\"trash\""));
        assert!(body.contains("\"check\""));
        assert!(body.contains("\"x\""));
        assert!(!body.contains("\"star\""));
        assert!(body.contains("https://cdn.example/registry/icons/manifest.json"));
    }

    #[test]
    fn manifest_is_omitted_without_an_asset_table() {
        let referenced: BTreeSet<String> = ["trash".to_string()].into();
        assert!(trimmed_manifest(&referenced, &BTreeMap::new(), "x").is_none());
    }

    #[test]
    fn unknown_references_are_dropped() {
        let mut asset_paths = BTreeMap::new();
        asset_paths.insert("check".to_string(), "icons/check.svg".to_string());
        let referenced: BTreeSet<String> = ["made-up-icon".to_string()].into();

        let body = trimmed_manifest(&referenced, &asset_paths, "url").unwrap();
        assert!(!body.contains("made-up-icon"));
    }
}
