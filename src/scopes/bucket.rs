//! Scope buckets.
//!
//! A bucket is a declaration-only configuration holding the dependencies
//! of one scope for one component. Buckets are never resolved and never
//! published; they only feed other configurations through extends edges.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::component::{Component, ComponentKind};
use crate::model::container::ConfigurationContainer;
use crate::model::errors::ConfigError;
use crate::model::names;
use crate::model::node::ConfigurationNode;
use crate::util::Name;

/// The dependency scopes a bucket can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BucketKind {
    /// Needed to compile, invisible at link time and to consumers
    CompileOnly,

    /// Part of the compile interface consumers see, still compile-only
    CompileOnlyApi,

    /// Needed to link, invisible at compile time and to consumers
    LinkOnly,

    /// Part of the link interface consumers see, still link-only
    LinkOnlyApi,
}

impl BucketKind {
    /// Every scope, in wiring order.
    pub const ALL: [BucketKind; 4] = [
        BucketKind::CompileOnly,
        BucketKind::CompileOnlyApi,
        BucketKind::LinkOnly,
        BucketKind::LinkOnlyApi,
    ];

    /// The token substituted for `implementation` in configuration names.
    pub fn token(&self) -> &'static str {
        match self {
            BucketKind::CompileOnly => "compileOnly",
            BucketKind::CompileOnlyApi => "compileOnlyApi",
            BucketKind::LinkOnly => "linkOnly",
            BucketKind::LinkOnlyApi => "linkOnlyApi",
        }
    }

    /// The scope's name in descriptions.
    pub fn display_name(&self) -> &'static str {
        match self {
            BucketKind::CompileOnly => "Compile only",
            BucketKind::CompileOnlyApi => "Compile only API",
            BucketKind::LinkOnly => "Link only",
            BucketKind::LinkOnlyApi => "Link only API",
        }
    }

    /// Whether dependencies in this scope are exported to consumers.
    pub fn is_api(&self) -> bool {
        matches!(self, BucketKind::CompileOnlyApi | BucketKind::LinkOnlyApi)
    }

    /// Whether this scope can exist on a component of the given kind.
    ///
    /// Api scopes export through a public surface, which only libraries
    /// have.
    pub fn applies_to(&self, kind: ComponentKind) -> bool {
        kind.is_library() || !self.is_api()
    }

    /// Derive the bucket's configuration name from the component's
    /// implementation configuration name by token substitution.
    ///
    /// An implementation name carrying no `implementation` token cannot
    /// host scope names and fails with
    /// [`ConfigError::MissingNamingToken`].
    pub fn configuration_name(&self, component: &Component) -> Result<Name, ConfigError> {
        let implementation = component.implementation.as_str();
        let token = names::IMPLEMENTATION;
        let token_cap = Name::new(token).capitalized();

        if !implementation.contains(token) && !implementation.contains(token_cap.as_str()) {
            return Err(ConfigError::MissingNamingToken {
                component: component.name,
                configuration: component.implementation,
            });
        }

        let substituted = implementation
            .replace(token, self.token())
            .replace(token_cap.as_str(), Name::new(self.token()).capitalized().as_str());
        Ok(Name::new(substituted))
    }
}

/// Create the bucket configuration for one (component, scope) pair.
///
/// The bucket is registered non-resolvable and non-consumable. A second
/// creation for the same pair fails with [`ConfigError::DuplicateBucket`]
/// and leaves the container untouched.
pub fn create_bucket(
    component: &Component,
    kind: BucketKind,
    configurations: &mut ConfigurationContainer,
) -> Result<Name, ConfigError> {
    let name = kind.configuration_name(component)?;
    let node = ConfigurationNode::new(name)
        .with_resolvable(false)
        .with_consumable(false)
        .with_description(format!(
            "{} dependencies of {}",
            kind.display_name(),
            component
        ));

    configurations.register(node).map_err(|err| match err {
        ConfigError::ConfigurationExists { .. } => ConfigError::DuplicateBucket {
            component: component.name,
            bucket: name,
        },
        other => other,
    })?;

    debug!(bucket = %name, component = %component.name, scope = kind.token(), "created scope bucket");
    Ok(name)
}
