//! The shared library link boundary.
//!
//! A shared library is a hard boundary at link time: consumers link the
//! library itself, never its private link-time dependencies. The boundary
//! rule enforces that by replacing the extends-set of each shared library
//! binary's published link elements with exactly the component's api
//! configuration.

use tracing::debug;

use crate::model::component::RulePhase;
use crate::model::errors::ConfigError;
use crate::model::names;
use crate::model::project::{ComponentId, Project};

/// Install the link boundary on one component.
///
/// Applications publish no link interface, so only libraries are
/// affected. The replacement runs in the boundary phase, before any
/// wiring rule touches the same configuration.
pub fn observe_component(project: &mut Project, id: ComponentId) -> Result<(), ConfigError> {
    let component = project.component(id);
    if !component.kind.is_library() {
        return Ok(());
    }
    let Some(api) = component.api else {
        return Ok(());
    };
    debug!(component = %component.name, "installing link boundary");

    project.all_binaries(id, RulePhase::Boundary, move |component, binary, configurations| {
        if !binary.kind.is_shared_library() {
            return Ok(());
        }
        let qualifier = names::qualifying_name(binary)?;
        let target = names::link_elements_name(qualifier);
        let node = configurations
            .named_mut(target)
            .map_err(|_| ConfigError::MissingTarget {
                component: component.name,
                target,
            })?;
        node.set_extends_from([api]);
        debug!(configuration = %target, api = %api, "link elements bounded to api");
        Ok(())
    })
}

/// Install the link boundary on every component, current and future.
pub fn install(project: &mut Project) -> Result<(), ConfigError> {
    project.all_components(observe_component)
}
