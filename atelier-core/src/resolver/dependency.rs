//! Transitive dependency closure computation
//!
//! Depth-first walk over declared dependencies, recursing into each
//! dependency before appending the current node, so every closure is
//! bottom-up: dependencies always precede their dependents. Results are
//! memoized per root name; the cache is append-only because the catalog
//! is immutable for the process lifetime.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use serde::Serialize;
use tracing::warn;

use crate::catalog::CatalogStore;

/// One component in a resolved closure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedComponent {
    pub name: String,
    pub layer: u8,
    pub kind: String,
}

/// Memoizing dependency resolver.
#[derive(Default)]
pub struct DependencyResolver {
    cache: RwLock<HashMap<String, Arc<Vec<ResolvedComponent>>>>,
}

impl DependencyResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full bottom-up closure of `name`, including `name` itself last.
    /// An unknown root yields an empty closure; callers that need a hard
    /// not-found signal check store membership first.
    pub fn resolve(&self, store: &CatalogStore, name: &str) -> Arc<Vec<ResolvedComponent>> {
        if let Some(cached) = self.cache.read().expect("resolver cache poisoned").get(name) {
            return cached.clone();
        }

        let mut visited = HashSet::new();
        let mut out = Vec::new();
        walk(store, name, &mut visited, &mut out);
        let resolved = Arc::new(out);

        // Under a race on the same key the first writer wins; recomputing
        // the same closure is idempotent, so the loser's work is merely
        // wasted, not wrong.
        self.cache
            .write()
            .expect("resolver cache poisoned")
            .entry(name.to_string())
            .or_insert_with(|| resolved.clone())
            .clone()
    }

    /// The closure of `name` minus `name` itself.
    pub fn dependencies(&self, store: &CatalogStore, name: &str) -> Vec<ResolvedComponent> {
        let canonical = store.get(name).map(|r| r.name.clone());
        self.resolve(store, name)
            .iter()
            .filter(|rc| Some(&rc.name) != canonical.as_ref())
            .cloned()
            .collect()
    }
}

fn walk(
    store: &CatalogStore,
    name: &str,
    visited: &mut HashSet<String>,
    out: &mut Vec<ResolvedComponent>,
) {
    let Some(record) = store.get(name) else {
        warn!("Skipping unknown dependency reference: {}", name);
        return;
    };

    // Already-visited nodes are skipped without re-emitting: a diamond
    // dependency appears exactly once, and a malformed cycle terminates
    // instead of looping.
    if !visited.insert(record.name.clone()) {
        return;
    }

    for dep in &record.dependencies {
        if dep == &record.name {
            continue;
        }
        walk(store, dep, visited, out);
    }

    // A virtual entry drags its host into the closure, so generated
    // exports that route through the host always have files to point at.
    if let Some(host) = &record.host_component {
        walk(store, host, visited, out);
    }

    out.push(ResolvedComponent {
        name: record.name.clone(),
        layer: record.layer,
        kind: record.kind.clone(),
    });
}
