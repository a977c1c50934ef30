//! A single configuration in the dependency graph.
//!
//! A configuration is a named point dependencies flow through. Whether a
//! configuration can be resolved (walked into a dependency set) or consumed
//! (published to downstream projects) is fixed at creation; scope buckets
//! are neither, they only declare.

use serde::{Deserialize, Serialize};

use crate::util::Name;

/// A named configuration with its role flags and extends edges.
///
/// Extends edges point at the configurations this one inherits dependencies
/// from. Edges are held by name, so the target may be registered later;
/// they resolve when the graph is walked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigurationNode {
    /// Configuration name
    pub name: Name,

    /// Whether this configuration can be resolved to a dependency set
    #[serde(default = "default_flag")]
    pub resolvable: bool,

    /// Whether this configuration is published for downstream consumers
    #[serde(default = "default_flag")]
    pub consumable: bool,

    /// Human-readable purpose, shown in reports
    #[serde(default)]
    pub description: Option<String>,

    /// Names of the configurations this one inherits from, first-wins order
    #[serde(default)]
    extends_from: Vec<Name>,
}

fn default_flag() -> bool {
    true
}

impl ConfigurationNode {
    /// Create a new configuration, resolvable and consumable by default.
    pub fn new(name: impl Into<Name>) -> Self {
        ConfigurationNode {
            name: name.into(),
            resolvable: true,
            consumable: true,
            description: None,
            extends_from: Vec::new(),
        }
    }

    /// Set whether the configuration can be resolved.
    pub fn with_resolvable(mut self, resolvable: bool) -> Self {
        self.resolvable = resolvable;
        self
    }

    /// Set whether the configuration is published to consumers.
    pub fn with_consumable(mut self, consumable: bool) -> Self {
        self.consumable = consumable;
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The configurations this one inherits from.
    pub fn extends(&self) -> &[Name] {
        &self.extends_from
    }

    /// Add an extends edge. Duplicates are ignored, earlier edges keep
    /// their position.
    pub fn extends_from(&mut self, name: Name) {
        if !self.extends_from.contains(&name) {
            self.extends_from.push(name);
        }
    }

    /// Replace the extends edges with exactly the given set.
    pub fn set_extends_from(&mut self, names: impl IntoIterator<Item = Name>) {
        self.extends_from.clear();
        for name in names {
            self.extends_from(name);
        }
    }
}
