//! Configuration-pass error types and diagnostics.
//!
//! Every failure aborts the current pass; nothing is retried and no
//! partially wired graph is kept quiet.

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::util::diagnostic::{suggestions, Diagnostic};
use crate::util::Name;

/// Error raised while declaring or wiring the configuration graph.
#[derive(Debug, Error, MietteDiagnostic)]
pub enum ConfigError {
    #[error("configuration `{name}` already exists")]
    #[diagnostic(code(capstan::graph::configuration_exists))]
    ConfigurationExists { name: Name },

    #[error("unknown configuration `{name}`")]
    #[diagnostic(
        code(capstan::graph::unknown_configuration),
        help("Register the configuration before referencing it")
    )]
    UnknownConfiguration { name: Name },

    #[error("configuration `{name}` is not resolvable")]
    #[diagnostic(
        code(capstan::graph::not_resolvable),
        help("Only resolvable configurations can compute an effective dependency set")
    )]
    NotResolvable { name: Name },

    #[error("cycle detected in the extends graph")]
    #[diagnostic(code(capstan::graph::extends_cycle))]
    CycleDetected { names: Vec<Name> },

    #[error("component `{name}` already exists")]
    #[diagnostic(code(capstan::model::component_exists))]
    ComponentExists { name: Name },

    #[error("binary `{binary}` already exists on component `{component}`")]
    #[diagnostic(code(capstan::model::binary_exists))]
    BinaryExists { component: Name, binary: Name },

    #[error("scope bucket `{bucket}` already exists for component `{component}`")]
    #[diagnostic(
        code(capstan::scopes::duplicate_bucket),
        help("A bucket is created once per component and scope")
    )]
    DuplicateBucket { component: Name, bucket: Name },

    #[error("configuration `{target}` not found while wiring component `{component}`")]
    #[diagnostic(
        code(capstan::scopes::missing_target),
        help("Scope wiring expects the conventional compile, link and elements configurations")
    )]
    MissingTarget { component: Name, target: Name },

    #[error("binary name `{binary}` does not end in the test executable suffix")]
    #[diagnostic(code(capstan::names::malformed_binary_name))]
    MalformedBinaryName { binary: Name },

    #[error("declaration configuration `{configuration}` has no `implementation` token to substitute")]
    #[diagnostic(
        code(capstan::names::missing_token),
        help("Scope bucket names are derived from the implementation configuration name")
    )]
    MissingNamingToken { component: Name, configuration: Name },
}

impl ConfigError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ConfigError::ConfigurationExists { name } => {
                Diagnostic::error(format!("configuration `{}` already exists", name))
                    .with_suggestion("Pick a distinct name or reuse the existing configuration")
            }

            ConfigError::UnknownConfiguration { name } => {
                Diagnostic::error(format!("unknown configuration `{}`", name))
                    .with_suggestion(suggestions::UNKNOWN_CONFIGURATION)
            }

            ConfigError::NotResolvable { name } => {
                Diagnostic::error(format!("configuration `{}` is not resolvable", name))
                    .with_context("declaration buckets and consumable elements carry no resolved graph")
                    .with_suggestion("Resolve one of the compile or link configurations instead")
            }

            ConfigError::CycleDetected { names } => {
                let mut diag = Diagnostic::error("cycle detected in the extends graph");
                let cycle: Vec<&str> = names.iter().map(|n| n.as_str()).collect();
                diag = diag.with_context(format!("cycle: {}", cycle.join(" -> ")));
                diag.with_suggestion(suggestions::EXTENDS_CYCLE)
            }

            ConfigError::ComponentExists { name } => {
                Diagnostic::error(format!("component `{}` already exists", name))
            }

            ConfigError::BinaryExists { component, binary } => Diagnostic::error(format!(
                "binary `{}` already exists on component `{}`",
                binary, component
            ))
            .with_component(component.as_str()),

            ConfigError::DuplicateBucket { component, bucket } => {
                Diagnostic::error(format!("scope bucket `{}` already exists", bucket))
                    .with_component(component.as_str())
                    .with_context("a bucket is created once per component and scope")
                    .with_suggestion(suggestions::DUPLICATE_BUCKET)
            }

            ConfigError::MissingTarget { component, target } => {
                Diagnostic::error(format!("configuration `{}` not found", target))
                    .with_component(component.as_str())
                    .with_context("scope wiring targets the conventional per-binary configurations")
                    .with_suggestion(suggestions::MISSING_TARGET)
            }

            ConfigError::MalformedBinaryName { binary } => Diagnostic::error(format!(
                "binary name `{}` does not end in the test executable suffix",
                binary
            ))
            .with_suggestion(suggestions::MALFORMED_BINARY_NAME),

            ConfigError::MissingNamingToken {
                component,
                configuration,
            } => Diagnostic::error(format!(
                "declaration configuration `{}` has no `implementation` token to substitute",
                configuration
            ))
            .with_component(component.as_str())
            .with_suggestion(suggestions::MISSING_TOKEN),
        }
    }
}
