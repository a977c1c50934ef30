//! The build model scope wiring operates on.
//!
//! This module contains the foundational types:
//! - The configuration naming convention
//! - Configuration nodes and the container holding them
//! - Components, binaries and the project hub with its standing rules
//! - Conventional declarations and graph reports

pub mod binary;
pub mod component;
pub mod container;
pub mod conventions;
pub mod errors;
pub mod names;
pub mod node;
pub mod project;
pub mod report;

pub use binary::{Binary, BinaryKind};
pub use component::{BinaryRule, Component, ComponentKind, RulePhase};
pub use container::ConfigurationContainer;
pub use errors::ConfigError;
pub use node::ConfigurationNode;
pub use project::{ComponentId, ComponentRule, Project};
pub use report::GraphReport;
