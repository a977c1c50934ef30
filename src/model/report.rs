//! Graph snapshots for machine-readable output.
//!
//! A report captures the configuration graph as wired at one moment:
//! every configuration with its flags and extends edges, every component
//! with its binaries. Hosts emit it as JSON to inspect what a
//! configuration pass produced.
//!
//! New fields may be added to the schema; existing fields keep their
//! names.

use serde::Serialize;

use crate::model::binary::Binary;
use crate::model::component::ComponentKind;
use crate::model::project::Project;
use crate::util::Name;

/// Snapshot of one configuration.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigurationReport {
    /// Configuration name
    pub name: Name,
    /// Whether the configuration can be resolved
    pub resolvable: bool,
    /// Whether the configuration is published to consumers
    pub consumable: bool,
    /// Human-readable purpose
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Names this configuration inherits dependencies from
    pub extends_from: Vec<Name>,
}

/// Snapshot of one component and its binaries.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentReport {
    /// Component name
    pub name: Name,
    /// Component kind
    pub kind: ComponentKind,
    /// Private declaration configuration
    pub implementation: Name,
    /// Public declaration configuration, libraries only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api: Option<Name>,
    /// Binaries in declaration order
    pub binaries: Vec<Binary>,
}

/// Snapshot of the whole configuration graph.
#[derive(Debug, Clone, Serialize)]
pub struct GraphReport {
    /// Project name
    pub project: Name,
    /// Components in declaration order
    pub components: Vec<ComponentReport>,
    /// Configurations in registration order
    pub configurations: Vec<ConfigurationReport>,
}

impl GraphReport {
    /// Capture the graph as currently wired.
    pub fn capture(project: &Project) -> Self {
        let components = project
            .components()
            .map(|component| ComponentReport {
                name: component.name,
                kind: component.kind,
                implementation: component.implementation,
                api: component.api,
                binaries: component.binaries().to_vec(),
            })
            .collect();

        let configurations = project
            .configurations()
            .iter()
            .map(|node| ConfigurationReport {
                name: node.name,
                resolvable: node.resolvable,
                consumable: node.consumable,
                description: node.description.clone(),
                extends_from: node.extends().to_vec(),
            })
            .collect();

        GraphReport {
            project: project.name,
            components,
            configurations,
        }
    }

    /// Serialize this report to a JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Serialize this report to a pretty JSON string.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::component::Component;
    use crate::model::node::ConfigurationNode;

    #[test]
    fn test_capture_lists_configurations() {
        let mut project = Project::new("demo");
        let mut bucket = ConfigurationNode::new("compileOnly")
            .with_resolvable(false)
            .with_consumable(false)
            .with_description("Compile only dependencies of C++ library 'main'");
        bucket.extends_from(Name::new("implementation"));
        project.configurations_mut().register(bucket).unwrap();

        let report = GraphReport::capture(&project);
        let json = report.to_json();

        assert!(json.contains("\"project\":\"demo\""));
        assert!(json.contains("\"name\":\"compileOnly\""));
        assert!(json.contains("\"resolvable\":false"));
        assert!(json.contains("\"consumable\":false"));
        assert!(json.contains("\"extends_from\":[\"implementation\"]"));
    }

    #[test]
    fn test_capture_lists_components_and_binaries() {
        let mut project = Project::new("demo");
        let id = project.add_component(Component::library("main")).unwrap();
        project
            .add_binary(id, Binary::shared_library("mainDebug"))
            .unwrap();

        let report = GraphReport::capture(&project);
        let json = report.to_json();

        assert!(json.contains("\"kind\":\"library\""));
        assert!(json.contains("\"implementation\":\"implementation\""));
        assert!(json.contains("\"api\":\"api\""));
        assert!(json.contains("\"name\":\"mainDebug\""));
        assert!(json.contains("\"kind\":\"sharedLibrary\""));
    }
}
