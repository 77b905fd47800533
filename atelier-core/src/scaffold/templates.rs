//! Entry-point template synthesis
//!
//! Picks a starting `App.tsx` by probing the originally requested
//! component set for anchor components, then renders source text that
//! imports only names actually present in the resolved set, so the
//! generated file never contains a dangling import.

use std::collections::BTreeSet;

use super::barrels::GENERATED_HEADER;

/// Full-page shell anchor.
pub const PAGE_SHELL: &str = "AppShell";
/// Data table anchor.
pub const DATA_TABLE: &str = "DataTable";
/// Form-input primitives; any one of them (plus the shell) selects the
/// settings-form template.
pub const FORM_INPUTS: &[&str] = &["Checkbox", "SelectField", "Switch", "TextArea", "TextField"];
/// Card-grid anchors for the dashboard template.
pub const CARD: &str = "Card";
pub const GRID: &str = "Grid";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryTemplate {
    ListPage,
    SettingsForm,
    Dashboard,
    Shell,
    Placeholder,
}

impl EntryTemplate {
    /// Template selection probes the originally requested names, not the
    /// expanded closure, so a transitively pulled-in primitive never
    /// flips the template.
    pub fn select(requested: &BTreeSet<String>) -> Self {
        let has = |name: &str| requested.contains(name);

        if has(PAGE_SHELL) && has(DATA_TABLE) {
            EntryTemplate::ListPage
        } else if has(PAGE_SHELL) && FORM_INPUTS.iter().any(|name| has(name)) {
            EntryTemplate::SettingsForm
        } else if has(CARD) && has(GRID) {
            EntryTemplate::Dashboard
        } else if has(PAGE_SHELL) {
            EntryTemplate::Shell
        } else {
            EntryTemplate::Placeholder
        }
    }
}

/// Render the `src/App.tsx` body for a template. `available` is the full
/// resolved component set; only members of it are ever imported.
pub(crate) fn render_entry_point(
    template: EntryTemplate,
    available: &BTreeSet<String>,
    project_name: &str,
) -> String {
    let title = project_name.replace('"', "'");
    match template {
        EntryTemplate::ListPage => render_list_page(available, &title),
        EntryTemplate::SettingsForm => render_settings_form(available, &title),
        EntryTemplate::Dashboard => render_dashboard(available, &title),
        EntryTemplate::Shell => render_shell(&title),
        EntryTemplate::Placeholder => render_placeholder(&title),
    }
}

fn import_line(names: &[&str]) -> String {
    // Callers pass names in sorted order already; keep the sort local so
    // the output stays deterministic regardless.
    let mut sorted: Vec<&str> = names.to_vec();
    sorted.sort_unstable();
    format!("import {{ {} }} from \"./ui\";\n\n", sorted.join(", "))
}

fn render_list_page(available: &BTreeSet<String>, title: &str) -> String {
    let with_button = available.contains("Button");

    let mut out = String::from(GENERATED_HEADER);
    let mut imports = vec![PAGE_SHELL, DATA_TABLE];
    if with_button {
        imports.push("Button");
    }
    out.push_str(&import_line(&imports));

    out.push_str(
        "const columns = [\n\
         \x20 { key: \"name\", label: \"Name\" },\n\
         \x20 { key: \"owner\", label: \"Owner\" },\n\
         \x20 { key: \"updated\", label: \"Updated\" },\n\
         ];\n\n",
    );
    out.push_str(
        "const rows = [\n\
         \x20 { name: \"Onboarding flow\", owner: \"Riley\", updated: \"2025-02-11\" },\n\
         \x20 { name: \"Billing revamp\", owner: \"Sam\", updated: \"2025-02-08\" },\n\
         \x20 { name: \"Design tokens\", owner: \"Alex\", updated: \"2025-01-30\" },\n\
         ];\n\n",
    );

    out.push_str("export default function App() {\n  return (\n");
    out.push_str(&format!("    <AppShell title=\"{title}\">\n"));
    if with_button {
        out.push_str("      <Button>New entry</Button>\n");
    }
    out.push_str("      <DataTable columns={columns} rows={rows} />\n");
    out.push_str("    </AppShell>\n  );\n}\n");
    out
}

fn render_settings_form(available: &BTreeSet<String>, title: &str) -> String {
    let inputs: Vec<&str> = FORM_INPUTS
        .iter()
        .copied()
        .filter(|name| available.contains(*name))
        .collect();
    let with_button = available.contains("Button");

    let mut out = String::from(GENERATED_HEADER);
    let mut imports = vec![PAGE_SHELL];
    imports.extend(&inputs);
    if with_button {
        imports.push("Button");
    }
    out.push_str(&import_line(&imports));

    out.push_str("export default function App() {\n  return (\n");
    out.push_str(&format!("    <AppShell title=\"{title}\">\n"));
    out.push_str("      <form>\n");
    for input in &inputs {
        let field = match *input {
            "TextField" => "        <TextField label=\"Display name\" name=\"displayName\" />\n",
            "SelectField" => {
                "        <SelectField label=\"Language\" name=\"language\" options={[\"English\", \"French\"]} />\n"
            }
            "Checkbox" => "        <Checkbox label=\"Email notifications\" name=\"notifications\" />\n",
            "TextArea" => "        <TextArea label=\"Bio\" name=\"bio\" />\n",
            "Switch" => "        <Switch label=\"Compact mode\" name=\"compactMode\" />\n",
            _ => unreachable!("input list is fixed"),
        };
        out.push_str(field);
    }
    if with_button {
        out.push_str("        <Button type=\"submit\">Save changes</Button>\n");
    }
    out.push_str("      </form>\n");
    out.push_str("    </AppShell>\n  );\n}\n");
    out
}

fn render_dashboard(available: &BTreeSet<String>, title: &str) -> String {
    let with_shell = available.contains(PAGE_SHELL);

    let mut out = String::from(GENERATED_HEADER);
    let mut imports = vec![CARD, GRID];
    if with_shell {
        imports.push(PAGE_SHELL);
    }
    out.push_str(&import_line(&imports));

    out.push_str("export default function App() {\n  return (\n");
    let (open, close, indent) = if with_shell {
        (format!("    <AppShell title=\"{title}\">\n"), "    </AppShell>\n", "      ")
    } else {
        (
            format!("    <main>\n      <h1>{title}</h1>\n"),
            "    </main>\n",
            "      ",
        )
    };
    out.push_str(&open);
    out.push_str(&format!("{indent}<Grid columns={{3}}>\n"));
    out.push_str(&format!("{indent}  <Card title=\"Active users\">1,284</Card>\n"));
    out.push_str(&format!("{indent}  <Card title=\"Open invoices\">37</Card>\n"));
    out.push_str(&format!("{indent}  <Card title=\"Uptime\">99.98%</Card>\n"));
    out.push_str(&format!("{indent}</Grid>\n"));
    out.push_str(close);
    out.push_str("  );\n}\n");
    out
}

fn render_shell(title: &str) -> String {
    let mut out = String::from(GENERATED_HEADER);
    out.push_str(&import_line(&[PAGE_SHELL]));
    out.push_str("export default function App() {\n  return (\n");
    out.push_str(&format!("    <AppShell title=\"{title}\">\n"));
    out.push_str("      <p>Start composing your interface in src/App.tsx.</p>\n");
    out.push_str("    </AppShell>\n  );\n}\n");
    out
}

fn render_placeholder(title: &str) -> String {
    let mut out = String::from(GENERATED_HEADER);
    out.push_str("export default function App() {\n  return (\n    <main>\n");
    out.push_str(&format!("      <h1>{title}</h1>\n"));
    out.push_str("      <p>Start composing your interface in src/App.tsx.</p>\n");
    out.push_str("    </main>\n  );\n}\n");
    out
}
