//! Dependency scope injection.
//!
//! Components declare their dependencies against a small set of
//! configurations. This module adds the finer-grained scopes on top:
//! per component it creates declaration-only bucket configurations
//! (compile only, link only, and their exported api variants) and wires
//! them into the per-binary compile and link configurations and the
//! published interfaces. Shared libraries additionally get their link
//! elements bounded to the api, cutting private link dependencies off
//! from consumers.
//!
//! Everything is installed as standing rules, so components and binaries
//! declared after installation are wired exactly like the ones declared
//! before.

pub mod boundary;
pub mod bucket;
pub mod rules;

use serde::{Deserialize, Serialize};

use crate::model::errors::ConfigError;
use crate::model::project::{ComponentId, Project};

pub use bucket::{create_bucket, BucketKind};

/// Selection of scopes to install.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScopeOptions {
    /// Bucket kinds to create and wire
    pub buckets: Vec<BucketKind>,

    /// Whether shared library link elements are bounded to the api
    pub link_boundary: bool,
}

impl Default for ScopeOptions {
    fn default() -> Self {
        ScopeOptions {
            buckets: BucketKind::ALL.to_vec(),
            link_boundary: true,
        }
    }
}

/// Wire one component: the link boundary first, then each applicable
/// scope. Call once per component as it becomes known.
pub fn observe_component(project: &mut Project, id: ComponentId) -> Result<(), ConfigError> {
    observe_component_with(project, id, &ScopeOptions::default())
}

/// Wire one component with an explicit scope selection.
pub fn observe_component_with(
    project: &mut Project,
    id: ComponentId,
    options: &ScopeOptions,
) -> Result<(), ConfigError> {
    if options.link_boundary {
        boundary::observe_component(project, id)?;
    }
    for &kind in &options.buckets {
        rules::observe_component(project, id, kind)?;
    }
    Ok(())
}

/// Install every scope and the link boundary on all components of the
/// project, current and future.
pub fn install(project: &mut Project) -> Result<(), ConfigError> {
    install_with(project, ScopeOptions::default())
}

/// Install a scope selection on all components, current and future.
pub fn install_with(project: &mut Project, options: ScopeOptions) -> Result<(), ConfigError> {
    project.all_components(move |project, id| observe_component_with(project, id, &options))
}
