//! Capstan - dependency scope buckets for native build configuration graphs
//!
//! This crate provides the configuration model of a native build (projects,
//! components, binaries, and the configurations dependencies flow through)
//! and the scope injection on top of it: declaration-only bucket
//! configurations per dependency scope, standing rules wiring them into
//! the right per-binary and published configurations, and the shared
//! library link boundary.

pub mod model;
pub mod scopes;
pub mod util;

pub use model::{
    binary::Binary, binary::BinaryKind, component::Component, component::ComponentKind,
    component::RulePhase, container::ConfigurationContainer, errors::ConfigError,
    node::ConfigurationNode, project::ComponentId, project::Project, report::GraphReport,
};

pub use scopes::{BucketKind, ScopeOptions};
pub use util::Name;
