//! Atelier Catalog - component metadata storage and lookup
//!
//! This module owns the immutable component catalog: the strongly-typed
//! records, the one-time snapshot load, and the in-memory store the rest
//! of the engine reads from.
//!
//! # Overview
//!
//! The catalog is loaded exactly once per process and never mutated
//! afterwards:
//!
//! ```text
//! catalog.json (snapshot)
//!     │
//!     ▼
//! CatalogSnapshot      ← records + source bodies + stylesheet + assets
//!     │
//!     ├── CatalogStore ← validated, name-indexed records
//!     └── SourceArchive← source bodies and optional artifacts
//! ```
//!
//! Construction fails fast on structural violations (duplicate names,
//! dangling or virtual hosts). Softer data-quality issues, such as a
//! dependency reference that matches no record, are logged and tolerated.

mod record;
mod snapshot;
mod store;

pub use record::{layer_dir, ComponentRecord};
pub use snapshot::{CatalogSnapshot, SourceArchive};
pub use store::CatalogStore;
