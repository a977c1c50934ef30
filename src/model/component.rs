//! Build components.
//!
//! A component is a logical library or application with one configuration
//! graph entry per concern and one binary per build variant. Components
//! never disappear during a configuration pass, binaries only get added.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::model::binary::Binary;
use crate::model::container::ConfigurationContainer;
use crate::model::errors::ConfigError;
use crate::model::names;
use crate::util::Name;

/// The kind of component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    /// Library with a public api surface
    #[serde(alias = "lib")]
    Library,

    /// Application without consumers
    #[serde(alias = "app", alias = "application")]
    Executable,
}

impl ComponentKind {
    /// Check if this component publishes interfaces to consumers.
    pub fn is_library(&self) -> bool {
        matches!(self, ComponentKind::Library)
    }
}

/// Callback fired once per binary of one component, for binaries already
/// declared and binaries declared later.
pub type BinaryRule =
    dyn Fn(&Component, &Binary, &mut ConfigurationContainer) -> Result<(), ConfigError>;

/// When a binary rule runs relative to the others on the same component.
///
/// Boundary rules replace a published extends-set wholesale and run first;
/// wiring rules only add edges and run after, so the two converge to the
/// same graph regardless of installation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RulePhase {
    Boundary,
    Wiring,
}

/// A logical library or application in the build.
pub struct Component {
    /// Component name; `main` is the default component
    pub name: Name,

    /// What the component builds
    pub kind: ComponentKind,

    /// Name of the private dependency declaration configuration
    pub implementation: Name,

    /// Name of the public declaration configuration, libraries only
    pub api: Option<Name>,

    binaries: Vec<Binary>,
    boundary_rules: Vec<Rc<BinaryRule>>,
    wiring_rules: Vec<Rc<BinaryRule>>,
}

impl Component {
    /// Create a library component with conventionally named declaration
    /// configurations.
    pub fn library(name: impl Into<Name>) -> Self {
        let name = name.into();
        Component {
            name,
            kind: ComponentKind::Library,
            implementation: names::implementation_name(name),
            api: Some(names::api_name(name)),
            binaries: Vec::new(),
            boundary_rules: Vec::new(),
            wiring_rules: Vec::new(),
        }
    }

    /// Create an application component. Applications have no api.
    pub fn executable(name: impl Into<Name>) -> Self {
        let name = name.into();
        Component {
            name,
            kind: ComponentKind::Executable,
            implementation: names::implementation_name(name),
            api: None,
            binaries: Vec::new(),
            boundary_rules: Vec::new(),
            wiring_rules: Vec::new(),
        }
    }

    /// Override the private declaration configuration name.
    pub fn with_implementation(mut self, name: impl Into<Name>) -> Self {
        self.implementation = name.into();
        self
    }

    /// Override the public declaration configuration name.
    pub fn with_api(mut self, name: impl Into<Name>) -> Self {
        self.api = Some(name.into());
        self
    }

    /// The binaries declared so far, in declaration order.
    pub fn binaries(&self) -> &[Binary] {
        &self.binaries
    }

    pub(crate) fn push_binary(&mut self, binary: Binary) -> Result<usize, ConfigError> {
        if self.binaries.iter().any(|b| b.name == binary.name) {
            return Err(ConfigError::BinaryExists {
                component: self.name,
                binary: binary.name,
            });
        }
        self.binaries.push(binary);
        Ok(self.binaries.len() - 1)
    }

    pub(crate) fn rules(&self, phase: RulePhase) -> &[Rc<BinaryRule>] {
        match phase {
            RulePhase::Boundary => &self.boundary_rules,
            RulePhase::Wiring => &self.wiring_rules,
        }
    }

    pub(crate) fn push_rule(&mut self, phase: RulePhase, rule: Rc<BinaryRule>) {
        match phase {
            RulePhase::Boundary => self.boundary_rules.push(rule),
            RulePhase::Wiring => self.wiring_rules.push(rule),
        }
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("implementation", &self.implementation)
            .field("api", &self.api)
            .field("binaries", &self.binaries)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ComponentKind::Library => write!(f, "C++ library '{}'", self.name),
            ComponentKind::Executable => write!(f, "C++ application '{}'", self.name),
        }
    }
}
