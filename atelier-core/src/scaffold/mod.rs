//! Project scaffolding
//!
//! Turns a requested component subset into a deterministic, self-consistent
//! project file tree: the resolved closure (with virtual expansion), layer
//! grouping, generated barrel files, a trimmed icon asset subset, a
//! synthesized entry point, and fixed boilerplate.
//!
//! # Pipeline
//!
//! ```text
//! requested names
//!     │  lookup + closure merge           (unknowns collected, not fatal)
//!     ▼
//! resolved map ── virtual expansion ── layer grouping
//!     │
//!     ├── component sources + per-directory barrels
//!     ├── layer barrels + root barrel
//!     ├── trimmed icon manifest            (when the icon registry is in)
//!     └── entry point                      (template from requested set)
//!     ▼
//! ScaffoldPlan (inline bodies or URL references + setup script)
//! ```
//!
//! Every file referenced by a generated export exists in the emitted tree,
//! in both output modes.

mod barrels;
mod boilerplate;
mod icons;
mod plan;
mod templates;

pub use icons::{scan_asset_references, ICON_REGISTRY_COMPONENT};
pub use plan::{
    BaseUrlProvider, OutputMode, ProjectFile, ScaffoldPlan, StaticBaseUrl, DEFAULT_REGISTRY_URL,
};
pub use templates::EntryTemplate;

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, warn};

use crate::catalog::{layer_dir, CatalogStore, SourceArchive};
use crate::error::{AtelierError, Result};
use crate::resolver::{DependencyResolver, ResolvedComponent, VirtualComponentResolver};
use crate::search::SearchIndex;

use barrels::LayerMember;
use plan::PlannedFile;

/// Number of fuzzy suggestions attached per unknown name on hard failure.
const SUGGESTIONS_PER_MISS: usize = 3;

/// Per-request scaffold pipeline over the immutable catalog state.
pub struct ProjectScaffolder<'a> {
    store: &'a CatalogStore,
    resolver: &'a DependencyResolver,
    virtuals: &'a VirtualComponentResolver,
    search: &'a SearchIndex,
    archive: &'a SourceArchive,
    base_url: &'a dyn BaseUrlProvider,
}

impl<'a> ProjectScaffolder<'a> {
    pub fn new(
        store: &'a CatalogStore,
        resolver: &'a DependencyResolver,
        virtuals: &'a VirtualComponentResolver,
        search: &'a SearchIndex,
        archive: &'a SourceArchive,
        base_url: &'a dyn BaseUrlProvider,
    ) -> Self {
        Self {
            store,
            resolver,
            virtuals,
            search,
            archive,
            base_url,
        }
    }

    pub fn scaffold(
        &self,
        project_name: &str,
        requested: &[String],
        mode: OutputMode,
    ) -> Result<ScaffoldPlan> {
        let mut not_found = Vec::new();
        let mut requested_known = BTreeSet::new();
        let mut resolved: BTreeMap<String, ResolvedComponent> = BTreeMap::new();

        for raw in requested {
            match self.store.get(raw) {
                None => not_found.push(raw.clone()),
                Some(record) => {
                    requested_known.insert(record.name.clone());
                    for rc in self.resolver.resolve(self.store, &record.name).iter() {
                        resolved.entry(rc.name.clone()).or_insert_with(|| rc.clone());
                    }
                }
            }
        }

        if resolved.is_empty() {
            let suggestions = not_found
                .iter()
                .map(|name| {
                    (
                        name.clone(),
                        self.search.suggest(self.store, name, SUGGESTIONS_PER_MISS),
                    )
                })
                .collect();
            return Err(AtelierError::EmptyResolution { suggestions });
        }
        if !not_found.is_empty() {
            warn!("Ignoring unknown requested components: {:?}", not_found);
        }

        // Virtual expansion must run before any barrel generation so a
        // virtual name is always exported from its host's file.
        let names: BTreeSet<String> = resolved.keys().cloned().collect();
        for name in self.virtuals.expand(&names).difference(&names) {
            if let Some(record) = self.store.get(name) {
                resolved.insert(
                    name.clone(),
                    ResolvedComponent {
                        name: record.name.clone(),
                        layer: record.layer,
                        kind: record.kind.clone(),
                    },
                );
            }
        }
        debug!(
            "Scaffolding '{}' with {} resolved components",
            project_name,
            resolved.len()
        );

        // Layer grouping, names sorted within each layer for diffable
        // output.
        let mut layers: BTreeMap<u8, Vec<String>> = BTreeMap::new();
        for rc in resolved.values() {
            layers.entry(rc.layer).or_default().push(rc.name.clone());
        }
        for names in layers.values_mut() {
            names.sort();
        }

        let mut files = Vec::new();
        boilerplate::collect(project_name, self.archive, &mut files);
        self.collect_component_files(&layers, &mut files);
        self.collect_layer_barrels(&layers, &resolved, &mut files);

        let layer_order_desc: Vec<u8> = layers.keys().rev().copied().collect();
        files.push(PlannedFile::generated(
            "src/ui/index.ts",
            barrels::root_barrel(&layer_order_desc),
        ));

        self.collect_icon_manifest(&resolved, &mut files);

        let template = EntryTemplate::select(&requested_known);
        let available: BTreeSet<String> = resolved.keys().cloned().collect();
        files.push(PlannedFile::generated(
            "src/App.tsx",
            templates::render_entry_point(template, &available, project_name),
        ));

        let resolved_names: Vec<String> = resolved.keys().cloned().collect();
        Ok(ScaffoldPlan::assemble(
            project_name,
            mode,
            files,
            self.base_url,
            resolved_names,
            layers,
            not_found,
        ))
    }

    /// Source file plus directory barrel for every non-virtual component.
    fn collect_component_files(
        &self,
        layers: &BTreeMap<u8, Vec<String>>,
        files: &mut Vec<PlannedFile>,
    ) {
        for (&layer, names) in layers {
            let dir = layer_dir(layer);
            for name in names {
                if self.virtuals.host_of(name).is_some() {
                    continue;
                }
                let Some(record) = self.store.get(name) else {
                    continue;
                };
                let hosted = self.virtuals.hosted_by(name);

                let source = match self.archive.source_for(record) {
                    Some(body) => body.to_string(),
                    None => {
                        warn!(
                            "No source body for component '{}'; emitting placeholder stub",
                            name
                        );
                        placeholder_source(name, hosted)
                    }
                };

                files.push(PlannedFile::registry(
                    format!("src/ui/{dir}/{name}/{name}.tsx"),
                    source,
                    format!("registry/{dir}/{name}.tsx"),
                ));
                files.push(PlannedFile::generated(
                    format!("src/ui/{dir}/{name}/index.ts"),
                    barrels::component_barrel(name, hosted),
                ));
            }
        }
    }

    /// One barrel per populated layer; virtual names route to their host.
    fn collect_layer_barrels(
        &self,
        layers: &BTreeMap<u8, Vec<String>>,
        resolved: &BTreeMap<String, ResolvedComponent>,
        files: &mut Vec<PlannedFile>,
    ) {
        for (&layer, names) in layers {
            let mut members = Vec::with_capacity(names.len());
            for name in names {
                match self.virtuals.host_of(name) {
                    None => members.push(LayerMember::Concrete { name: name.clone() }),
                    Some(host) => {
                        let Some(host_rc) = resolved.get(host) else {
                            warn!("Virtual component '{}' resolved without its host '{}'", name, host);
                            continue;
                        };
                        members.push(LayerMember::Virtual {
                            name: name.clone(),
                            host: host.to_string(),
                            host_layer: host_rc.layer,
                        });
                    }
                }
            }
            files.push(PlannedFile::generated(
                format!("src/ui/{}/index.ts", layer_dir(layer)),
                barrels::layer_barrel(layer, &members),
            ));
        }
    }

    /// Trimmed icon subset, only when the icon registry component is part
    /// of the resolved set.
    fn collect_icon_manifest(
        &self,
        resolved: &BTreeMap<String, ResolvedComponent>,
        files: &mut Vec<PlannedFile>,
    ) {
        if !resolved.contains_key(ICON_REGISTRY_COMPONENT) {
            return;
        }

        let mut referenced = BTreeSet::new();
        for name in resolved.keys() {
            if let Some(record) = self.store.get(name) {
                if let Some(body) = self.archive.source_for(record) {
                    referenced.extend(icons::scan_asset_references(body));
                }
            }
        }

        let full_manifest_url = format!(
            "{}/registry/icons/manifest.json",
            self.base_url.registry_root().trim_end_matches('/')
        );
        if let Some(manifest) =
            icons::trimmed_manifest(&referenced, &self.archive.asset_paths, &full_manifest_url)
        {
            files.push(PlannedFile::generated(
                "src/ui/icons/icon-manifest.json",
                manifest,
            ));
        }
    }
}

/// Deterministic stand-in for a component whose source body is missing
/// from the snapshot, so every generated export still resolves.
fn placeholder_source(name: &str, hosted: &[String]) -> String {
    let mut out = String::from("// Placeholder: the catalog snapshot carried no source body.\n");
    out.push_str(&format!("export function {name}() {{\n  return null;\n}}\n"));
    for hosted_name in hosted {
        out.push_str(&format!(
            "\nexport function {hosted_name}() {{\n  return null;\n}}\n"
        ));
    }
    out
}
