//! Shared fixture catalog for integration tests.

use atelier_core::catalog::{CatalogSnapshot, ComponentRecord};
use atelier_core::ComponentService;

pub struct RecordSpec {
    pub name: &'static str,
    pub layer: u8,
    pub kind: &'static str,
    pub description: &'static str,
    pub use_cases: &'static [&'static str],
    pub aliases: &'static [&'static str],
    pub prop_names: &'static [&'static str],
    pub dependencies: &'static [&'static str],
    pub host: Option<&'static str>,
}

impl RecordSpec {
    fn build(&self) -> ComponentRecord {
        ComponentRecord {
            name: self.name.to_string(),
            layer: self.layer,
            kind: self.kind.to_string(),
            description: self.description.to_string(),
            use_cases: self.use_cases.iter().map(|s| s.to_string()).collect(),
            aliases: self.aliases.iter().map(|s| s.to_string()).collect(),
            prop_names: self.prop_names.iter().map(|s| s.to_string()).collect(),
            dependencies: self.dependencies.iter().map(|s| s.to_string()).collect(),
            host_component: self.host.map(|s| s.to_string()),
        }
    }
}

const EMPTY: &[&str] = &[];

const RECORDS: &[RecordSpec] = &[
    RecordSpec {
        name: "Icon",
        layer: 3,
        kind: "media",
        description: "Renders a named vector icon from the asset registry",
        use_cases: &["decorate an action with a glyph"],
        aliases: EMPTY,
        prop_names: &["name", "size"],
        dependencies: EMPTY,
        host: None,
    },
    RecordSpec {
        name: "Button",
        layer: 3,
        kind: "action",
        description: "A clickable button for primary and secondary actions",
        use_cases: &["submit a form", "trigger a dialog"],
        aliases: &["cta"],
        prop_names: &["variant", "size", "disabled"],
        dependencies: EMPTY,
        host: None,
    },
    RecordSpec {
        name: "Card",
        layer: 3,
        kind: "surface",
        description: "A bordered content surface with optional header and footer",
        use_cases: &["group related content"],
        aliases: EMPTY,
        prop_names: &["title"],
        dependencies: &["LegacyTheme"],
        host: None,
    },
    RecordSpec {
        name: "CardHeader",
        layer: 3,
        kind: "surface",
        description: "Header region of a card",
        use_cases: EMPTY,
        aliases: EMPTY,
        prop_names: EMPTY,
        dependencies: EMPTY,
        host: Some("Card"),
    },
    RecordSpec {
        name: "CardFooter",
        layer: 3,
        kind: "surface",
        description: "Footer region of a card",
        use_cases: EMPTY,
        aliases: EMPTY,
        prop_names: EMPTY,
        dependencies: EMPTY,
        host: Some("Card"),
    },
    RecordSpec {
        name: "TextField",
        layer: 3,
        kind: "input",
        description: "Single-line text input with a label",
        use_cases: &["collect a short free-text value"],
        aliases: EMPTY,
        prop_names: &["label", "name", "value"],
        dependencies: EMPTY,
        host: None,
    },
    RecordSpec {
        name: "Grid",
        layer: 4,
        kind: "layout",
        description: "Responsive column grid",
        use_cases: &["lay out dashboard cards"],
        aliases: EMPTY,
        prop_names: &["columns", "gap"],
        dependencies: EMPTY,
        host: None,
    },
    RecordSpec {
        name: "Modal",
        layer: 4,
        kind: "overlay",
        description: "A dialog overlay that blocks the page behind it",
        use_cases: &["confirm a destructive action"],
        aliases: &["dialog"],
        prop_names: &["open", "onClose"],
        dependencies: &["Button"],
        host: None,
    },
    RecordSpec {
        name: "DataTable",
        layer: 4,
        kind: "data",
        description: "Sortable data table with column definitions",
        use_cases: &["browse tabular records"],
        aliases: &["table"],
        prop_names: &["columns", "rows"],
        dependencies: &["Button", "Icon"],
        host: None,
    },
    RecordSpec {
        name: "AppShell",
        layer: 6,
        kind: "layout",
        description: "Full-page application shell with navigation chrome",
        use_cases: &["frame a multi-page application"],
        aliases: &["shell"],
        prop_names: &["title"],
        dependencies: &["Button", "Icon"],
        host: None,
    },
    RecordSpec {
        name: "SettingsPage",
        layer: 6,
        kind: "page",
        description: "A full settings page composed from form primitives",
        use_cases: &["edit account preferences"],
        aliases: EMPTY,
        prop_names: EMPTY,
        dependencies: &["Modal", "Card"],
        host: None,
    },
];

fn source_bodies() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "Icon:3",
            "export function Icon({ name, size = 16 }: { name: string; size?: number }) {\n  return <svg data-icon={name} width={size} height={size} />;\n}\n",
        ),
        (
            "Button:3",
            "export function Button({ variant = \"primary\", ...rest }) {\n  return <button data-variant={variant} {...rest} />;\n}\n",
        ),
        (
            "Card:3",
            "export function Card({ title, children }) {\n  return <section>{title}{children}</section>;\n}\n\nexport function CardHeader({ children }) {\n  return <header>{children}</header>;\n}\n\nexport function CardFooter({ children }) {\n  return <footer>{children}</footer>;\n}\n",
        ),
        (
            "Modal:4",
            "import { Button } from \"../../primitives/Button\";\n\nexport function Modal({ open, onClose, children }) {\n  if (!open) return null;\n  return <dialog open>{children}<Button onClick={onClose}>Close</Button></dialog>;\n}\n",
        ),
        (
            "DataTable:4",
            "import { Icon } from \"../../primitives/Icon\";\n\nexport function DataTable({ columns, rows }) {\n  return (\n    <table>\n      <thead><tr>{columns.map((c) => <th key={c.key}>{c.label} <Icon name=\"chevron-down\" /></th>)}</tr></thead>\n      <tbody>{rows.map((r, i) => <tr key={i}>{columns.map((c) => <td key={c.key}>{r[c.key]}</td>)}</tr>)}</tbody>\n    </table>\n  );\n}\n",
        ),
        (
            "AppShell:6",
            "import { Icon } from \"../../primitives/Icon\";\n\nexport function AppShell({ title, children }) {\n  return (\n    <div>\n      <nav>{title} <Icon name=\"search\" /></nav>\n      <main>{children}</main>\n    </div>\n  );\n}\n",
        ),
        (
            "SettingsPage:6",
            "export function SettingsPage() {\n  return <section>Settings</section>;\n}\n",
        ),
        (
            "Grid:4",
            "export function Grid({ columns = 2, gap = 16, children }) {\n  return <div style={{ display: \"grid\", gap }}>{children}</div>;\n}\n",
        ),
    ]
}

/// The fixture snapshot. `TextField` deliberately has no source body, and
/// `Card` declares a dependency on a name that does not exist.
pub fn snapshot() -> CatalogSnapshot {
    let mut snapshot = CatalogSnapshot {
        generated_at: None,
        components: RECORDS.iter().map(RecordSpec::build).collect(),
        sources: source_bodies()
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        base_stylesheet: Some(":root {\n  --atelier-accent: #5b5bd6;\n}\n".to_string()),
        utility_source: Some(
            "export function cx(...parts: Array<string | false | undefined>) {\n  return parts.filter(Boolean).join(\" \");\n}\n"
                .to_string(),
        ),
        asset_paths: Default::default(),
    };

    for name in [
        "alert-triangle",
        "check",
        "chevron-down",
        "chevron-right",
        "info",
        "loader",
        "search",
        "star",
        "trash",
        "x",
    ] {
        snapshot
            .asset_paths
            .insert(name.to_string(), format!("icons/{name}.svg"));
    }
    snapshot
}

pub fn service() -> ComponentService {
    ComponentService::new(snapshot()).expect("fixture catalog must validate")
}
