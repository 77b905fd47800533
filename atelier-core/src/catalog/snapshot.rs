//! Catalog snapshot parsing
//!
//! The snapshot is the one-time catalog load handed to the service at
//! startup: component records, raw source bodies keyed `name:layer`, the
//! base stylesheet, the shared utility file, and the asset-path table.
//! It is treated as an opaque immutable blob; all validation happens when
//! the store is built from it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use super::ComponentRecord;
use crate::error::Result;

/// A full catalog snapshot, as produced by the catalog build pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSnapshot {
    /// When the snapshot was generated.
    #[serde(default)]
    pub generated_at: Option<DateTime<Utc>>,

    /// All component records.
    pub components: Vec<ComponentRecord>,

    /// Raw source bodies, keyed `name:layer`.
    #[serde(default)]
    pub sources: HashMap<String, String>,

    /// Base stylesheet shared by every generated project.
    #[serde(default)]
    pub base_stylesheet: Option<String>,

    /// Shared utility module source.
    #[serde(default)]
    pub utility_source: Option<String>,

    /// Icon asset name -> registry-relative asset path.
    #[serde(default)]
    pub asset_paths: BTreeMap<String, String>,
}

impl CatalogSnapshot {
    /// Parse a snapshot from its JSON representation.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Split the snapshot into records (for the store) and everything the
    /// scaffolder needs to emit file contents.
    pub fn into_parts(self) -> (Vec<ComponentRecord>, SourceArchive) {
        let archive = SourceArchive {
            sources: self.sources,
            base_stylesheet: self.base_stylesheet,
            utility_source: self.utility_source,
            asset_paths: self.asset_paths,
        };
        (self.components, archive)
    }
}

/// The non-record half of a snapshot: source bodies and optional shared
/// artifacts consumed by the scaffolder.
#[derive(Debug, Clone, Default)]
pub struct SourceArchive {
    sources: HashMap<String, String>,
    pub base_stylesheet: Option<String>,
    pub utility_source: Option<String>,
    pub asset_paths: BTreeMap<String, String>,
}

impl SourceArchive {
    /// Raw source body for a component, if the snapshot carried one.
    pub fn source_for(&self, record: &ComponentRecord) -> Option<&str> {
        self.sources.get(&record.source_key()).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_minimal_snapshot() {
        let json = r#"{
            "components": [
                { "name": "Button", "layer": 3, "kind": "action", "description": "Button" }
            ]
        }"#;

        let snapshot = CatalogSnapshot::from_json(json).unwrap();
        assert_eq!(snapshot.components.len(), 1);
        assert!(snapshot.generated_at.is_none());
        assert!(snapshot.base_stylesheet.is_none());
        assert!(snapshot.asset_paths.is_empty());
    }

    #[test]
    fn parses_full_snapshot_and_splits() {
        let json = r#"{
            "generatedAt": "2025-06-01T12:00:00Z",
            "components": [
                { "name": "Button", "layer": 3, "kind": "action", "description": "Button" }
            ],
            "sources": { "Button:3": "export function Button() {}" },
            "baseStylesheet": ":root { --accent: #333; }",
            "utilitySource": "export const cx = () => {};",
            "assetPaths": { "check": "icons/check.svg" }
        }"#;

        let snapshot = CatalogSnapshot::from_json(json).unwrap();
        assert!(snapshot.generated_at.is_some());

        let (records, archive) = snapshot.into_parts();
        assert_eq!(records.len(), 1);
        assert_eq!(
            archive.source_for(&records[0]),
            Some("export function Button() {}")
        );
        assert_eq!(archive.asset_paths["check"], "icons/check.svg");
    }

    #[test]
    fn rejects_malformed_snapshot() {
        assert!(CatalogSnapshot::from_json("{\"components\": 3}").is_err());
    }
}
