//! Scaffold plan types and manifest assembly
//!
//! Every generated file lives in one internal representation
//! (`PlannedFile`), and the inline/urls split happens only at the final
//! serialization step. The two modes therefore always describe the same
//! logical file tree; only the transport of file contents differs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// How the caller wants file contents delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Embed every file body in the response. Maximum portability.
    Inline,
    /// Replace registry-hosted bodies with remote references plus a
    /// setup script that downloads them. Lightweight response.
    Urls,
}

/// Stable root prefixed onto every remote file reference in urls mode.
pub trait BaseUrlProvider: Send + Sync {
    fn registry_root(&self) -> &str;
}

pub const DEFAULT_REGISTRY_URL: &str = "https://registry.atelier.dev";

/// Fixed base URL, the common case.
pub struct StaticBaseUrl(String);

impl StaticBaseUrl {
    pub fn new(root: impl Into<String>) -> Self {
        Self(root.into())
    }
}

impl Default for StaticBaseUrl {
    fn default() -> Self {
        Self(DEFAULT_REGISTRY_URL.to_string())
    }
}

impl BaseUrlProvider for StaticBaseUrl {
    fn registry_root(&self) -> &str {
        &self.0
    }
}

/// Where a planned file's bytes come from.
pub(crate) enum FileOrigin {
    /// Synthesized per request; always shipped inline.
    Generated(String),
    /// Mirrored from the component registry; inlined or referenced by
    /// URL depending on the output mode.
    Registry {
        content: String,
        remote_path: String,
    },
}

/// One file in the internal (mode-agnostic) tree.
pub(crate) struct PlannedFile {
    pub path: String,
    pub origin: FileOrigin,
}

impl PlannedFile {
    pub fn generated(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            origin: FileOrigin::Generated(content.into()),
        }
    }

    pub fn registry(
        path: impl Into<String>,
        content: impl Into<String>,
        remote_path: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            origin: FileOrigin::Registry {
                content: content.into(),
                remote_path: remote_path.into(),
            },
        }
    }
}

/// One file in the serialized manifest.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFile {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_url: Option<String>,
}

/// The final scaffold manifest returned to the caller.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaffoldPlan {
    pub project_name: String,
    pub mode: OutputMode,
    pub files: Vec<ProjectFile>,
    /// Present only in urls mode: downloads every remote reference to its
    /// destination, then installs dependencies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_script: Option<String>,
    /// Every component in the scaffold, sorted by name.
    pub resolved: Vec<String>,
    /// Layer -> sorted component names.
    pub layers: BTreeMap<u8, Vec<String>>,
    /// Requested names with no catalog entry, reported as a soft warning.
    pub not_found: Vec<String>,
}

impl ScaffoldPlan {
    pub(crate) fn assemble(
        project_name: &str,
        mode: OutputMode,
        files: Vec<PlannedFile>,
        base_url: &dyn BaseUrlProvider,
        resolved: Vec<String>,
        layers: BTreeMap<u8, Vec<String>>,
        not_found: Vec<String>,
    ) -> Self {
        let root = base_url.registry_root().trim_end_matches('/').to_string();
        let mut project_files = Vec::with_capacity(files.len());
        let mut downloads: Vec<(String, String)> = Vec::new();

        for file in files {
            match (mode, file.origin) {
                (OutputMode::Inline, FileOrigin::Generated(content))
                | (OutputMode::Inline, FileOrigin::Registry { content, .. })
                | (OutputMode::Urls, FileOrigin::Generated(content)) => {
                    project_files.push(ProjectFile {
                        path: file.path,
                        content: Some(content),
                        remote_url: None,
                    });
                }
                (OutputMode::Urls, FileOrigin::Registry { remote_path, .. }) => {
                    let url = format!("{root}/{remote_path}");
                    downloads.push((file.path.clone(), url.clone()));
                    project_files.push(ProjectFile {
                        path: file.path,
                        content: None,
                        remote_url: Some(url),
                    });
                }
            }
        }

        let setup_script = match mode {
            OutputMode::Urls => Some(render_setup_script(&downloads)),
            OutputMode::Inline => None,
        };

        Self {
            project_name: project_name.to_string(),
            mode,
            files: project_files,
            setup_script,
            resolved,
            layers,
            not_found,
        }
    }
}

/// Shell script that materializes a urls-mode scaffold: download every
/// remote file to its destination, then install dependencies.
fn render_setup_script(downloads: &[(String, String)]) -> String {
    let mut script = String::new();
    script.push_str("#!/usr/bin/env bash\n");
    script.push_str("# Fetch registry-hosted files and install dependencies.\n");
    script.push_str("set -euo pipefail\n\n");

    let mut dirs: Vec<&str> = downloads
        .iter()
        .filter_map(|(dest, _)| dest.rsplit_once('/').map(|(dir, _)| dir))
        .collect();
    dirs.sort();
    dirs.dedup();
    for dir in dirs {
        script.push_str(&format!("mkdir -p \"{dir}\"\n"));
    }
    if !downloads.is_empty() {
        script.push('\n');
    }

    for (dest, url) in downloads {
        script.push_str(&format!("curl -fsSL \"{url}\" -o \"{dest}\"\n"));
    }

    script.push_str("\nnpm install\n");
    script
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_files() -> Vec<PlannedFile> {
        vec![
            PlannedFile::generated("package.json", "{}"),
            PlannedFile::registry(
                "src/ui/primitives/Button/Button.tsx",
                "export function Button() {}",
                "registry/primitives/Button.tsx",
            ),
        ]
    }

    #[test]
    fn inline_mode_embeds_every_body() {
        let plan = ScaffoldPlan::assemble(
            "demo",
            OutputMode::Inline,
            sample_files(),
            &StaticBaseUrl::default(),
            vec!["Button".to_string()],
            BTreeMap::new(),
            Vec::new(),
        );

        assert!(plan.setup_script.is_none());
        assert!(plan.files.iter().all(|f| f.content.is_some()));
        assert!(plan.files.iter().all(|f| f.remote_url.is_none()));
    }

    #[test]
    fn urls_mode_references_registry_files_and_ships_a_script() {
        let plan = ScaffoldPlan::assemble(
            "demo",
            OutputMode::Urls,
            sample_files(),
            &StaticBaseUrl::new("https://cdn.example/"),
            vec!["Button".to_string()],
            BTreeMap::new(),
            Vec::new(),
        );

        let button = plan
            .files
            .iter()
            .find(|f| f.path.ends_with("Button.tsx"))
            .unwrap();
        assert!(button.content.is_none());
        assert_eq!(
            button.remote_url.as_deref(),
            Some("https://cdn.example/registry/primitives/Button.tsx")
        );

        // Generated files stay inline even in urls mode.
        let pkg = plan.files.iter().find(|f| f.path == "package.json").unwrap();
        assert!(pkg.content.is_some());

        let script = plan.setup_script.unwrap();
        assert!(script.contains("mkdir -p \"src/ui/primitives/Button\""));
        assert!(script.contains("curl -fsSL \"https://cdn.example/registry/primitives/Button.tsx\""));
        assert!(script.ends_with("npm install\n"));
    }

    #[test]
    fn both_modes_describe_the_same_tree() {
        let paths = |mode| {
            ScaffoldPlan::assemble(
                "demo",
                mode,
                sample_files(),
                &StaticBaseUrl::default(),
                Vec::new(),
                BTreeMap::new(),
                Vec::new(),
            )
            .files
            .into_iter()
            .map(|f| f.path)
            .collect::<Vec<_>>()
        };

        assert_eq!(paths(OutputMode::Inline), paths(OutputMode::Urls));
    }
}
