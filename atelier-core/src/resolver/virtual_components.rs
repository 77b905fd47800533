//! Virtual component indirection
//!
//! A virtual catalog entry has no source files of its own; every source
//! and export operation is redirected to its host. This table is built
//! once from the store and consumed by the scaffolder, which must apply
//! the expansion before any barrel generation so virtual names are always
//! exported from their host's file.

use std::collections::{BTreeSet, HashMap};

use crate::catalog::CatalogStore;

pub struct VirtualComponentResolver {
    /// virtual name -> host name
    host_of: HashMap<String, String>,
    /// host name -> sorted virtual names
    hosted: HashMap<String, Vec<String>>,
}

impl VirtualComponentResolver {
    pub fn new(store: &CatalogStore) -> Self {
        let mut host_of = HashMap::new();
        let mut hosted: HashMap<String, Vec<String>> = HashMap::new();

        for record in store.records() {
            if let Some(host) = &record.host_component {
                host_of.insert(record.name.clone(), host.clone());
                hosted.entry(host.clone()).or_default().push(record.name.clone());
            }
        }
        for names in hosted.values_mut() {
            names.sort();
        }

        Self { host_of, hosted }
    }

    /// The host for a virtual name, if `name` is virtual.
    pub fn host_of(&self, name: &str) -> Option<&str> {
        self.host_of.get(name).map(String::as_str)
    }

    /// Sorted virtual names hosted by `host`.
    pub fn hosted_by(&self, host: &str) -> &[String] {
        self.hosted.get(host).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Expand a component set with every virtual entry whose host is
    /// already included. Hosts are non-virtual by construction, so one
    /// pass reaches the fixpoint and the expansion is idempotent.
    pub fn expand(&self, names: &BTreeSet<String>) -> BTreeSet<String> {
        let mut expanded = names.clone();
        for (virt, host) in &self.host_of {
            if names.contains(host) {
                expanded.insert(virt.clone());
            }
        }
        expanded
    }
}
