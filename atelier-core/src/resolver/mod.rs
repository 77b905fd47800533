//! Dependency resolution
//!
//! Computes transitive dependency closures over the catalog in a stable
//! bottom-up order, and maintains the virtual-to-host indirection table
//! consumed by the scaffolder.

mod dependency;
mod virtual_components;

pub use dependency::{DependencyResolver, ResolvedComponent};
pub use virtual_components::VirtualComponentResolver;
