//! Scope wiring rules.
//!
//! For each scope on each component, one pass: create the bucket, then
//! install the standing rules that feed it into the right configurations.
//! Per-binary wiring runs through [`Project::all_binaries`], so a binary
//! declared long after the scope was installed is wired the same way as
//! one declared before.

use tracing::{debug, trace};

use crate::model::component::RulePhase;
use crate::model::errors::ConfigError;
use crate::model::names;
use crate::model::project::{ComponentId, Project};
use crate::scopes::bucket::{create_bucket, BucketKind};
use crate::util::Name;

/// Wire one scope into one component.
///
/// Creates the bucket and installs its wiring; a scope that does not
/// apply to the component's kind is skipped. Compile scopes feed each
/// binary's compile configuration, link scopes each binary's link
/// configuration. Api scopes additionally feed the published interface:
/// the component's api elements for the compile side, each shared library
/// binary's link elements for the link side.
pub fn observe_component(
    project: &mut Project,
    id: ComponentId,
    kind: BucketKind,
) -> Result<(), ConfigError> {
    let component = project.component(id);
    if !kind.applies_to(component.kind) {
        trace!(component = %component.name, scope = kind.token(), "scope does not apply, skipping");
        return Ok(());
    }
    debug!(component = %component.name, scope = kind.token(), "installing scope");

    let bucket = project.configure(id, |component, configurations| {
        create_bucket(component, kind, configurations)
    })?;

    match kind {
        BucketKind::CompileOnly => {
            wire_compile_binaries(project, id, bucket)?;
        }
        BucketKind::CompileOnlyApi => {
            wire_compile_binaries(project, id, bucket)?;
            wire_api_elements(project, id, bucket)?;
        }
        BucketKind::LinkOnly => {
            wire_link_binaries(project, id, bucket)?;
        }
        BucketKind::LinkOnlyApi => {
            wire_link_binaries(project, id, bucket)?;
            wire_link_elements(project, id, bucket)?;
        }
    }
    Ok(())
}

/// Install one scope on every component of the project, current and
/// future.
pub fn install(project: &mut Project, kind: BucketKind) -> Result<(), ConfigError> {
    project.all_components(move |project, id| observe_component(project, id, kind))
}

/// Feed the bucket into every binary's compile configuration.
fn wire_compile_binaries(
    project: &mut Project,
    id: ComponentId,
    bucket: Name,
) -> Result<(), ConfigError> {
    project.all_binaries(id, RulePhase::Wiring, move |component, binary, configurations| {
        let qualifier = names::qualifying_name(binary)?;
        let target = names::compile_name(qualifier);
        let node = configurations
            .named_mut(target)
            .map_err(|_| ConfigError::MissingTarget {
                component: component.name,
                target,
            })?;
        node.extends_from(bucket);
        trace!(configuration = %target, bucket = %bucket, "wired compile scope");
        Ok(())
    })
}

/// Feed the bucket into every binary's link configuration.
fn wire_link_binaries(
    project: &mut Project,
    id: ComponentId,
    bucket: Name,
) -> Result<(), ConfigError> {
    project.all_binaries(id, RulePhase::Wiring, move |component, binary, configurations| {
        let qualifier = names::qualifying_name(binary)?;
        let target = names::link_name(qualifier);
        let node = configurations
            .named_mut(target)
            .map_err(|_| ConfigError::MissingTarget {
                component: component.name,
                target,
            })?;
        node.extends_from(bucket);
        trace!(configuration = %target, bucket = %bucket, "wired link scope");
        Ok(())
    })
}

/// Feed the bucket into the component's published api elements.
fn wire_api_elements(
    project: &mut Project,
    id: ComponentId,
    bucket: Name,
) -> Result<(), ConfigError> {
    project.configure(id, |component, configurations| {
        let target = names::api_elements_name(component.name);
        let node = configurations
            .named_mut(target)
            .map_err(|_| ConfigError::MissingTarget {
                component: component.name,
                target,
            })?;
        node.extends_from(bucket);
        trace!(configuration = %target, bucket = %bucket, "wired api elements");
        Ok(())
    })
}

/// Feed the bucket into each shared library binary's published link
/// elements.
fn wire_link_elements(
    project: &mut Project,
    id: ComponentId,
    bucket: Name,
) -> Result<(), ConfigError> {
    project.all_binaries(id, RulePhase::Wiring, move |component, binary, configurations| {
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
        node.extends_from(bucket);
        trace!(configuration = %target, bucket = %bucket, "wired link elements scope");
        Ok(())
    })
}
