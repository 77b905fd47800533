//! In-memory component store
//!
//! Name-indexed view over the catalog records. Built once at startup,
//! read-only afterwards; the per-filter `list` results are memoized since
//! the catalog never changes.

use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, RwLock};

use tracing::warn;

use super::ComponentRecord;
use crate::error::{AtelierError, Result};

/// Immutable, name-indexed collection of component records.
#[derive(Debug)]
pub struct CatalogStore {
    records: Vec<ComponentRecord>,
    by_name: HashMap<String, usize>,
    by_lower: HashMap<String, usize>,
    list_cache: RwLock<HashMap<Option<u8>, Arc<Vec<usize>>>>,
}

impl CatalogStore {
    /// Build the store, failing fast on structural violations: duplicate
    /// names, a virtual record whose host is missing, or a host that is
    /// itself virtual. Unknown dependency references and self-dependencies
    /// are data-quality issues, logged and tolerated.
    pub fn new(records: Vec<ComponentRecord>) -> Result<Self> {
        let mut by_name = HashMap::with_capacity(records.len());
        let mut by_lower = HashMap::with_capacity(records.len());

        for (idx, record) in records.iter().enumerate() {
            if by_name.insert(record.name.clone(), idx).is_some() {
                return Err(AtelierError::DuplicateComponent {
                    name: record.name.clone(),
                });
            }
            // First entry wins if two names collide case-insensitively.
            by_lower.entry(record.name.to_lowercase()).or_insert(idx);
        }

        for record in &records {
            if let Some(host) = &record.host_component {
                match by_name.get(host) {
                    None => {
                        return Err(AtelierError::UnknownHost {
                            name: record.name.clone(),
                            host: host.clone(),
                        })
                    }
                    Some(&host_idx) if records[host_idx].is_virtual() => {
                        return Err(AtelierError::VirtualHost {
                            name: record.name.clone(),
                            host: host.clone(),
                        })
                    }
                    Some(_) => {}
                }
            }

            for dep in &record.dependencies {
                if dep == &record.name {
                    warn!("Component '{}' declares a dependency on itself", dep);
                } else if !by_name.contains_key(dep) {
                    warn!(
                        "Component '{}' declares unknown dependency '{}'",
                        record.name, dep
                    );
                }
            }
        }

        Ok(Self {
            records,
            by_name,
            by_lower,
            list_cache: RwLock::new(HashMap::new()),
        })
    }

    /// Look up a record by name, with a case-insensitive fallback if the
    /// exact match fails.
    pub fn get(&self, name: &str) -> Option<&ComponentRecord> {
        if let Some(&idx) = self.by_name.get(name) {
            return Some(&self.records[idx]);
        }
        self.by_lower
            .get(&name.to_lowercase())
            .map(|&idx| &self.records[idx])
    }

    /// All records, optionally filtered by layer, in catalog insertion
    /// order. Results are cached per distinct filter value.
    pub fn list(&self, layer: Option<u8>) -> Vec<&ComponentRecord> {
        if let Some(cached) = self.list_cache.read().expect("list cache poisoned").get(&layer) {
            let cached = cached.clone();
            return cached.iter().map(|&idx| &self.records[idx]).collect();
        }

        let indices: Vec<usize> = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, r)| layer.map_or(true, |l| r.layer == l))
            .map(|(idx, _)| idx)
            .collect();
        let indices = Arc::new(indices);

        self.list_cache
            .write()
            .expect("list cache poisoned")
            .entry(layer)
            .or_insert_with(|| indices.clone());

        indices.iter().map(|&idx| &self.records[idx]).collect()
    }

    /// The set of all component names.
    pub fn all_names(&self) -> BTreeSet<&str> {
        self.records.iter().map(|r| r.name.as_str()).collect()
    }

    /// Iterate all records in catalog order.
    pub fn records(&self) -> impl Iterator<Item = &ComponentRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
