//! Conventional configuration declarations.
//!
//! Hosts call this layer to declare components and binaries together with
//! the configurations the convention expects them to have: declaration
//! configurations and the published api elements per component, compile
//! and link configurations per binary, link elements per linkable library
//! binary. Scope wiring targets these by name, so binaries declared here
//! are wired without further setup.

use anyhow::{Context, Result};

use crate::model::binary::Binary;
use crate::model::component::Component;
use crate::model::names;
use crate::model::node::ConfigurationNode;
use crate::model::project::{ComponentId, Project};
use crate::util::Name;

/// Declare a library component with its conventional configurations.
///
/// Creates `api` and `implementation` declaration configurations (the
/// latter extends the former) and the consumable `cppApiElements`
/// publishing the compile interface.
pub fn declare_library(project: &mut Project, name: impl Into<Name>) -> Result<ComponentId> {
    let component = Component::library(name);
    let display = component.to_string();
    let api = names::api_name(component.name);

    project
        .configurations_mut()
        .register(
            ConfigurationNode::new(api)
                .with_resolvable(false)
                .with_consumable(false)
                .with_description(format!("API dependencies of {}", display)),
        )
        .with_context(|| format!("declaring {}", display))?;

    let mut implementation = ConfigurationNode::new(component.implementation)
        .with_resolvable(false)
        .with_consumable(false)
        .with_description(format!("Implementation dependencies of {}", display));
    implementation.extends_from(api);
    project
        .configurations_mut()
        .register(implementation)
        .with_context(|| format!("declaring {}", display))?;

    let mut api_elements = ConfigurationNode::new(names::api_elements_name(component.name))
        .with_resolvable(false)
        .with_description(format!("API elements for {}", display));
    api_elements.extends_from(api);
    project
        .configurations_mut()
        .register(api_elements)
        .with_context(|| format!("declaring {}", display))?;

    let id = project
        .add_component(component)
        .with_context(|| format!("declaring {}", display))?;
    Ok(id)
}

/// Declare an application component with its conventional configurations.
pub fn declare_executable(project: &mut Project, name: impl Into<Name>) -> Result<ComponentId> {
    let component = Component::executable(name);
    let display = component.to_string();

    project
        .configurations_mut()
        .register(
            ConfigurationNode::new(component.implementation)
                .with_resolvable(false)
                .with_consumable(false)
                .with_description(format!("Implementation dependencies of {}", display)),
        )
        .with_context(|| format!("declaring {}", display))?;

    let id = project
        .add_component(component)
        .with_context(|| format!("declaring {}", display))?;
    Ok(id)
}

/// Declare a binary with its conventional configurations, then fire the
/// component's binary rules for it.
///
/// Creates the resolvable `cppCompile<Q>` and `nativeLink<Q>`
/// configurations extending the component's implementation, plus the
/// consumable `linkElements` variant for linkable library binaries. The
/// link elements extend the implementation as declared; cutting that leak
/// for shared libraries is the boundary rule's job.
pub fn declare_binary(project: &mut Project, id: ComponentId, binary: Binary) -> Result<()> {
    let component = project.component(id);
    let display = component.to_string();
    let implementation = component.implementation;
    let binary_name = binary.name;
    let publishes_link_elements = component.kind.is_library() && binary.kind.is_linkable();

    let qualifier = names::qualifying_name(&binary)
        .with_context(|| format!("declaring binary '{}' of {}", binary.name, display))?;

    let mut compile = ConfigurationNode::new(names::compile_name(qualifier))
        .with_consumable(false)
        .with_description(format!("Compile dependencies for binary '{}'", binary.name));
    compile.extends_from(implementation);
    project
        .configurations_mut()
        .register(compile)
        .with_context(|| format!("declaring binary '{}' of {}", binary.name, display))?;

    let mut link = ConfigurationNode::new(names::link_name(qualifier))
        .with_consumable(false)
        .with_description(format!("Link dependencies for binary '{}'", binary.name));
    link.extends_from(implementation);
    project
        .configurations_mut()
        .register(link)
        .with_context(|| format!("declaring binary '{}' of {}", binary.name, display))?;

    if publishes_link_elements {
        let mut link_elements = ConfigurationNode::new(names::link_elements_name(qualifier))
            .with_resolvable(false)
            .with_description(format!("Link elements for binary '{}'", binary.name));
        link_elements.extends_from(implementation);
        project
            .configurations_mut()
            .register(link_elements)
            .with_context(|| format!("declaring binary '{}' of {}", binary.name, display))?;
    }

    project
        .add_binary(id, binary)
        .with_context(|| format!("declaring binary '{}' of {}", binary_name, display))?;
    Ok(())
}
