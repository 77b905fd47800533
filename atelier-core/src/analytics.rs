//! Analytics seam
//!
//! The service reports structured usage events fire-and-forget. A sink is
//! never allowed to fail or block a response: `record` takes `&self`,
//! returns nothing, and implementations are expected to swallow their own
//! errors. Pipelining events to a real counter store lives behind this
//! trait, outside the core.

use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum AnalyticsEvent {
    ToolInvoked { tool: String },
    ComponentFound { name: String },
    ComponentNotFound { name: String },
    SearchPerformed { query: String, hits: usize },
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsEnvelope {
    pub id: Uuid,
    #[serde(flatten)]
    pub event: AnalyticsEvent,
}

impl AnalyticsEnvelope {
    pub fn new(event: AnalyticsEvent) -> Self {
        Self {
            id: Uuid::new_v4(),
            event,
        }
    }
}

pub trait AnalyticsSink: Send + Sync {
    fn record(&self, envelope: AnalyticsEnvelope);
}

/// Discards every event.
pub struct NoopSink;

impl AnalyticsSink for NoopSink {
    fn record(&self, _envelope: AnalyticsEnvelope) {}
}

/// Emits events to the tracing pipeline.
pub struct LogSink;

impl AnalyticsSink for LogSink {
    fn record(&self, envelope: AnalyticsEnvelope) {
        debug!("Analytics event {}: {:?}", envelope.id, envelope.event);
    }
}
