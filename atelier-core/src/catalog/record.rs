//! Component record types
//!
//! One `ComponentRecord` per catalog entry, deserialized from the snapshot
//! with explicit optional fields rather than runtime shape-guessing.

use serde::{Deserialize, Serialize};

/// A single catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRecord {
    /// Unique, case-sensitive display/import name.
    pub name: String,

    /// Rank in the fixed layer hierarchy (2 = utility .. 6 = full page).
    /// Higher layers may depend on lower layers, never the reverse in
    /// well-formed data.
    pub layer: u8,

    /// Free-text category label, used only for search weighting.
    pub kind: String,

    /// Human-readable description.
    pub description: String,

    /// Ordered free-text use cases.
    #[serde(default)]
    pub use_cases: Vec<String>,

    /// Curated synonyms.
    #[serde(default)]
    pub aliases: Vec<String>,

    /// Ordered prop names.
    #[serde(default)]
    pub prop_names: Vec<String>,

    /// Declared dependencies, by intent. May be incomplete or reference
    /// a virtual entry.
    #[serde(default)]
    pub dependencies: Vec<String>,

    /// If present, this record is virtual: it has no source files of its
    /// own and all source/export operations are redirected to the host.
    #[serde(default)]
    pub host_component: Option<String>,
}

impl ComponentRecord {
    /// Whether this record is a virtual entry redirected to a host.
    pub fn is_virtual(&self) -> bool {
        self.host_component.is_some()
    }

    /// Key into the snapshot's source-body table.
    pub fn source_key(&self) -> String {
        format!("{}:{}", self.name, self.layer)
    }
}

/// Directory name for a layer in generated project trees.
pub fn layer_dir(layer: u8) -> String {
    match layer {
        1 => "tokens".to_string(),
        2 => "utilities".to_string(),
        3 => "primitives".to_string(),
        4 => "composites".to_string(),
        5 => "patterns".to_string(),
        6 => "pages".to_string(),
        other => format!("layer-{other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_record_with_defaults() {
        let json = r#"{
            "name": "Button",
            "layer": 3,
            "kind": "action",
            "description": "A clickable button"
        }"#;

        let record: ComponentRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "Button");
        assert_eq!(record.layer, 3);
        assert!(record.aliases.is_empty());
        assert!(record.dependencies.is_empty());
        assert!(!record.is_virtual());
        assert_eq!(record.source_key(), "Button:3");
    }

    #[test]
    fn parses_virtual_record() {
        let json = r#"{
            "name": "CardHeader",
            "layer": 3,
            "kind": "surface",
            "description": "Header region of a card",
            "hostComponent": "Card"
        }"#;

        let record: ComponentRecord = serde_json::from_str(json).unwrap();
        assert!(record.is_virtual());
        assert_eq!(record.host_component.as_deref(), Some("Card"));
    }

    #[test]
    fn layer_dirs_are_stable() {
        assert_eq!(layer_dir(3), "primitives");
        assert_eq!(layer_dir(6), "pages");
        assert_eq!(layer_dir(9), "layer-9");
    }
}
