//! The Atelier component service - core orchestration module.
//!
//! Owns the immutable catalog state (store, search index, resolvers,
//! source archive) and exposes the three operations the transport layer
//! calls: `search`, `get_component`, and `scaffold_project`. Constructed
//! once at startup and passed by reference into request handlers; there
//! are no module-level globals.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::analytics::{AnalyticsEnvelope, AnalyticsEvent, AnalyticsSink, NoopSink};
use crate::catalog::{CatalogSnapshot, CatalogStore, ComponentRecord, SourceArchive};
use crate::error::{AtelierError, Result};
use crate::resolver::{DependencyResolver, ResolvedComponent, VirtualComponentResolver};
use crate::scaffold::{
    BaseUrlProvider, OutputMode, ProjectScaffolder, ScaffoldPlan, StaticBaseUrl,
};
use crate::search::SearchIndex;

/// Number of fuzzy suggestions attached to a not-found response.
const SUGGESTIONS_PER_MISS: usize = 3;

/// A scored search result for display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSummary {
    pub name: String,
    pub layer: u8,
    pub kind: String,
    pub description: String,
    pub score: u32,
}

/// Full detail for one component, including its bottom-up dependency
/// closure.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDetail {
    #[serde(flatten)]
    pub record: ComponentRecord,
    /// Everything this component needs, dependencies before dependents.
    pub requires: Vec<ResolvedComponent>,
}

/// The main service struct - built once from a catalog snapshot, read-only
/// for the rest of the process lifetime.
pub struct ComponentService {
    store: CatalogStore,
    index: SearchIndex,
    resolver: DependencyResolver,
    virtuals: VirtualComponentResolver,
    archive: SourceArchive,
    base_url: Box<dyn BaseUrlProvider>,
    analytics: Arc<dyn AnalyticsSink>,
}

impl ComponentService {
    /// Build the service with default collaborators (static registry URL,
    /// no analytics).
    pub fn new(snapshot: CatalogSnapshot) -> Result<Self> {
        Self::with_collaborators(
            snapshot,
            Box::new(StaticBaseUrl::default()),
            Arc::new(NoopSink),
        )
    }

    /// Build the service with explicit collaborators. This is the primary
    /// constructor for transport integration.
    pub fn with_collaborators(
        snapshot: CatalogSnapshot,
        base_url: Box<dyn BaseUrlProvider>,
        analytics: Arc<dyn AnalyticsSink>,
    ) -> Result<Self> {
        if let Some(generated_at) = snapshot.generated_at {
            info!("Catalog snapshot generated at {}", generated_at);
        }

        let (records, archive) = snapshot.into_parts();
        let store = CatalogStore::new(records)?;
        let index = SearchIndex::new(&store);
        let virtuals = VirtualComponentResolver::new(&store);

        info!(
            "Component service initialized with {} catalog entries",
            store.len()
        );

        Ok(Self {
            store,
            index,
            resolver: DependencyResolver::new(),
            virtuals,
            archive,
            base_url,
            analytics,
        })
    }

    /// Ranked free-text search over the catalog.
    pub fn search(&self, query: &str) -> Vec<ComponentSummary> {
        self.emit(AnalyticsEvent::ToolInvoked {
            tool: "search".to_string(),
        });

        let hits = self.index.search(&self.store, query);
        self.emit(AnalyticsEvent::SearchPerformed {
            query: query.to_string(),
            hits: hits.len(),
        });

        hits.into_iter()
            .map(|hit| ComponentSummary {
                name: hit.record.name.clone(),
                layer: hit.record.layer,
                kind: hit.record.kind.clone(),
                description: hit.record.description.clone(),
                score: hit.score,
            })
            .collect()
    }

    /// Detail lookup; a miss carries fuzzy suggestions rather than
    /// aborting the response.
    pub fn get_component(&self, name: &str) -> Result<ComponentDetail> {
        self.emit(AnalyticsEvent::ToolInvoked {
            tool: "get_component".to_string(),
        });

        match self.store.get(name) {
            Some(record) => {
                self.emit(AnalyticsEvent::ComponentFound {
                    name: record.name.clone(),
                });
                Ok(ComponentDetail {
                    record: record.clone(),
                    requires: self.resolver.dependencies(&self.store, &record.name),
                })
            }
            None => {
                self.emit(AnalyticsEvent::ComponentNotFound {
                    name: name.to_string(),
                });
                Err(AtelierError::ComponentNotFound {
                    name: name.to_string(),
                    suggestions: self.index.suggest(&self.store, name, SUGGESTIONS_PER_MISS),
                })
            }
        }
    }

    /// Synthesize a ready-to-build project for the requested components.
    pub fn scaffold_project(
        &self,
        project_name: &str,
        components: &[String],
        mode: OutputMode,
    ) -> Result<ScaffoldPlan> {
        self.emit(AnalyticsEvent::ToolInvoked {
            tool: "scaffold_project".to_string(),
        });

        let scaffolder = ProjectScaffolder::new(
            &self.store,
            &self.resolver,
            &self.virtuals,
            &self.index,
            &self.archive,
            self.base_url.as_ref(),
        );
        let plan = scaffolder.scaffold(project_name, components, mode)?;

        for missing in &plan.not_found {
            self.emit(AnalyticsEvent::ComponentNotFound {
                name: missing.clone(),
            });
        }
        Ok(plan)
    }

    /// Read access to the underlying store, for listing-style callers.
    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    fn emit(&self, event: AnalyticsEvent) {
        self.analytics.record(AnalyticsEnvelope::new(event));
    }
}
