//! Fixed project boilerplate
//!
//! Package/build config, HTML/CSS entry, and the shared utility module.
//! Everything here is deterministic: the only inputs are the project name
//! and which optional snapshot artifacts exist.

use crate::catalog::SourceArchive;

use super::plan::PlannedFile;

/// Lowercase, dash-separated package name derived from the display name.
pub(crate) fn project_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_dash = true;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    let slug = slug.trim_end_matches('-').to_string();
    if slug.is_empty() {
        "atelier-app".to_string()
    } else {
        slug
    }
}

fn package_json(project_name: &str) -> String {
    format!(
        r#"{{
  "name": "{slug}",
  "private": true,
  "version": "0.1.0",
  "type": "module",
  "scripts": {{
    "dev": "vite",
    "build": "tsc -b && vite build",
    "preview": "vite preview"
  }},
  "dependencies": {{
    "react": "^18.3.1",
    "react-dom": "^18.3.1"
  }},
  "devDependencies": {{
    "@types/react": "^18.3.12",
    "@types/react-dom": "^18.3.1",
    "@vitejs/plugin-react": "^4.3.4",
    "typescript": "~5.6.2",
    "vite": "^6.0.1"
  }}
}}
"#,
        slug = project_slug(project_name)
    )
}

fn tsconfig_json() -> &'static str {
    r#"{
  "compilerOptions": {
    "target": "ES2022",
    "lib": ["ES2022", "DOM", "DOM.Iterable"],
    "module": "ESNext",
    "moduleResolution": "bundler",
    "jsx": "react-jsx",
    "strict": true,
    "skipLibCheck": true,
    "noEmit": true
  },
  "include": ["src"]
}
"#
}

fn vite_config() -> &'static str {
    r#"import { defineConfig } from "vite";
import react from "@vitejs/plugin-react";

export default defineConfig({
  plugins: [react()],
});
"#
}

fn index_html(project_name: &str) -> String {
    let title = project_name.replace('<', "").replace('>', "");
    format!(
        r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{title}</title>
  </head>
  <body>
    <div id="root"></div>
    <script type="module" src="/src/main.tsx"></script>
  </body>
</html>
"#
    )
}

fn main_tsx(has_stylesheet: bool) -> String {
    let mut out = String::new();
    out.push_str("import React from \"react\";\n");
    out.push_str("import { createRoot } from \"react-dom/client\";\n");
    out.push_str("import App from \"./App\";\n");
    if has_stylesheet {
        out.push_str("import \"./styles.css\";\n");
    }
    out.push_str(
        "\ncreateRoot(document.getElementById(\"root\")!).render(\n\
         \x20 <React.StrictMode>\n\
         \x20   <App />\n\
         \x20 </React.StrictMode>\n\
         );\n",
    );
    out
}

/// Push the fixed boilerplate files onto the plan. The stylesheet and
/// utility module are included only when the snapshot carried them.
pub(crate) fn collect(project_name: &str, archive: &SourceArchive, files: &mut Vec<PlannedFile>) {
    files.push(PlannedFile::generated("package.json", package_json(project_name)));
    files.push(PlannedFile::generated("tsconfig.json", tsconfig_json()));
    files.push(PlannedFile::generated("vite.config.ts", vite_config()));
    files.push(PlannedFile::generated("index.html", index_html(project_name)));
    files.push(PlannedFile::generated(
        "src/main.tsx",
        main_tsx(archive.base_stylesheet.is_some()),
    ));

    if let Some(stylesheet) = &archive.base_stylesheet {
        files.push(PlannedFile::registry(
            "src/styles.css",
            stylesheet.clone(),
            "registry/styles/base.css",
        ));
    }
    if let Some(utility) = &archive.utility_source {
        files.push(PlannedFile::registry(
            "src/lib/utils.ts",
            utility.clone(),
            "registry/lib/utils.ts",
        ));
    }
}
