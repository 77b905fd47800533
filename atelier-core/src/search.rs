//! Ranked keyword search over the catalog
//!
//! A precomputed, lowercase, denormalized view over the store, rebuilt
//! once at construction and never mutated. Scoring is a fixed-weight
//! heuristic, not a formal ranking function; the relative field ordering
//! (alias > name > use-case > description > kind > prop) is load-bearing
//! for callers that expect specific components to rank first.

use crate::catalog::{CatalogStore, ComponentRecord};

/// Score assigned on the exact-name fast path. Above anything the term
/// scoring can reach for a single-word query, so exact lookups are never
/// out-ranked by a fuzzy match on a different component.
const EXACT_NAME_SCORE: u32 = 100;

const NAME_WEIGHT: u32 = 10;
const WHOLE_NAME_BONUS: u32 = 5;
const KIND_WEIGHT: u32 = 3;
const DESCRIPTION_WEIGHT: u32 = 5;
const USE_CASE_WEIGHT: u32 = 7;
const ALIAS_WEIGHT: u32 = 8;
const EXACT_ALIAS_BONUS: u32 = 5;
const PROP_WEIGHT: u32 = 2;

/// Lowercase copy of one record's searchable fields.
struct IndexEntry {
    name: String,
    kind: String,
    description: String,
    use_cases: Vec<String>,
    aliases: Vec<String>,
    prop_names: Vec<String>,
}

impl IndexEntry {
    fn from_record(record: &ComponentRecord) -> Self {
        Self {
            name: record.name.to_lowercase(),
            kind: record.kind.to_lowercase(),
            description: record.description.to_lowercase(),
            use_cases: record.use_cases.iter().map(|s| s.to_lowercase()).collect(),
            aliases: record.aliases.iter().map(|s| s.to_lowercase()).collect(),
            prop_names: record.prop_names.iter().map(|s| s.to_lowercase()).collect(),
        }
    }
}

/// A scored search result.
#[derive(Debug)]
pub struct SearchHit<'a> {
    pub record: &'a ComponentRecord,
    pub score: u32,
}

/// Precomputed search index, parallel to the store's catalog order.
pub struct SearchIndex {
    entries: Vec<IndexEntry>,
}

impl SearchIndex {
    pub fn new(store: &CatalogStore) -> Self {
        Self {
            entries: store.records().map(IndexEntry::from_record).collect(),
        }
    }

    /// Ranked search: descending score, ties broken by catalog order.
    pub fn search<'a>(&self, store: &'a CatalogStore, query: &str) -> Vec<SearchHit<'a>> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        let records: Vec<&ComponentRecord> = store.list(None);

        // Fast path: a case-insensitive exact name match short-circuits
        // the term scoring entirely.
        if let Some(idx) = self.entries.iter().position(|e| e.name == query) {
            return vec![SearchHit {
                record: records[idx],
                score: EXACT_NAME_SCORE,
            }];
        }

        let terms: Vec<&str> = query.split_whitespace().collect();
        if terms.is_empty() {
            return Vec::new();
        }

        let mut hits: Vec<SearchHit<'a>> = Vec::new();
        for (idx, entry) in self.entries.iter().enumerate() {
            let score = self.score_entry(entry, &terms, &query);
            if score > 0 {
                hits.push(SearchHit {
                    record: records[idx],
                    score,
                });
            }
        }

        // Stable sort keeps catalog order for equal scores.
        hits.sort_by(|a, b| b.score.cmp(&a.score));
        hits
    }

    fn score_entry(&self, entry: &IndexEntry, terms: &[&str], full_query: &str) -> u32 {
        let mut score = 0;

        for term in terms {
            if entry.name.contains(term) {
                score += NAME_WEIGHT;
                if entry.name == *term {
                    score += WHOLE_NAME_BONUS;
                }
            }
            if entry.kind.contains(term) {
                score += KIND_WEIGHT;
            }
            if entry.description.contains(term) {
                score += DESCRIPTION_WEIGHT;
            }
            for use_case in &entry.use_cases {
                if use_case.contains(term) {
                    score += USE_CASE_WEIGHT;
                }
            }
            if entry.aliases.iter().any(|a| a.contains(term)) {
                score += ALIAS_WEIGHT;
            }
            if entry.prop_names.iter().any(|p| p.contains(term)) {
                score += PROP_WEIGHT;
            }
        }

        if entry.aliases.iter().any(|a| a == full_query) {
            score += EXACT_ALIAS_BONUS;
        }

        score
    }

    /// Up to `limit` close matches for a name that failed to resolve.
    pub fn suggest(&self, store: &CatalogStore, name: &str, limit: usize) -> Vec<String> {
        self.search(store, name)
            .into_iter()
            .take(limit)
            .map(|hit| hit.record.name.clone())
            .collect()
    }
}
