//! Project - central configuration hub.
//!
//! A Project owns the configuration container and the component set, and
//! carries the standing rules that react to declarations. Components and
//! binaries arrive incrementally while the build is being configured, so
//! a rule installed at any point fires for the members that already exist
//! and again for every member declared afterwards.

use std::rc::Rc;

use tracing::debug;

use crate::model::binary::Binary;
use crate::model::component::{BinaryRule, Component, RulePhase};
use crate::model::container::ConfigurationContainer;
use crate::model::errors::ConfigError;
use crate::util::Name;

/// Callback fired once per component, for components already declared and
/// components declared later.
pub type ComponentRule = dyn Fn(&mut Project, ComponentId) -> Result<(), ConfigError>;

/// Handle to a component within its project.
///
/// Ids are minted by [`Project::add_component`] and stay valid for the
/// project's lifetime; components are never removed during a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentId(usize);

/// The project being configured.
pub struct Project {
    /// Project name
    pub name: Name,

    configurations: ConfigurationContainer,
    components: Vec<Component>,
    component_rules: Vec<Rc<ComponentRule>>,
}

impl Project {
    /// Create an empty project.
    pub fn new(name: impl Into<Name>) -> Self {
        Project {
            name: name.into(),
            configurations: ConfigurationContainer::new(),
            components: Vec::new(),
            component_rules: Vec::new(),
        }
    }

    /// The project's configuration container.
    pub fn configurations(&self) -> &ConfigurationContainer {
        &self.configurations
    }

    /// The project's configuration container, for mutation.
    pub fn configurations_mut(&mut self) -> &mut ConfigurationContainer {
        &mut self.configurations
    }

    /// Look up a component by id.
    pub fn component(&self, id: ComponentId) -> &Component {
        &self.components[id.0]
    }

    /// Iterate components in declaration order.
    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.components.iter()
    }

    /// Find a component id by name.
    pub fn find_component(&self, name: impl Into<Name>) -> Option<ComponentId> {
        let name = name.into();
        self.components
            .iter()
            .position(|c| c.name == name)
            .map(ComponentId)
    }

    /// Run a closure with one component and the configuration container
    /// borrowed together.
    pub fn configure<R>(
        &mut self,
        id: ComponentId,
        f: impl FnOnce(&Component, &mut ConfigurationContainer) -> R,
    ) -> R {
        f(&self.components[id.0], &mut self.configurations)
    }

    /// Declare a component and fire every standing component rule for it.
    pub fn add_component(&mut self, component: Component) -> Result<ComponentId, ConfigError> {
        if self.components.iter().any(|c| c.name == component.name) {
            return Err(ConfigError::ComponentExists {
                name: component.name,
            });
        }

        debug!(component = %component.name, kind = ?component.kind, "component declared");
        let id = ComponentId(self.components.len());
        self.components.push(component);

        let rules = self.component_rules.clone();
        for rule in rules {
            rule(self, id)?;
        }
        Ok(id)
    }

    /// Declare a binary on a component and fire the component's binary
    /// rules for it, boundary phase first.
    pub fn add_binary(&mut self, id: ComponentId, binary: Binary) -> Result<(), ConfigError> {
        let name = binary.name;
        let kind = binary.kind;
        let index = self.components[id.0].push_binary(binary)?;
        debug!(component = %self.components[id.0].name, binary = %name, kind = ?kind, "binary declared");

        self.fire_phase(id, index, RulePhase::Boundary)?;
        self.fire_phase(id, index, RulePhase::Wiring)?;
        Ok(())
    }

    /// Install a standing rule over every component, current and future.
    ///
    /// The rule fires immediately for components already declared, then
    /// once for each component declared later.
    pub fn all_components<F>(&mut self, rule: F) -> Result<(), ConfigError>
    where
        F: Fn(&mut Project, ComponentId) -> Result<(), ConfigError> + 'static,
    {
        let rule: Rc<ComponentRule> = Rc::new(rule);
        self.component_rules.push(rule.clone());

        for index in 0..self.components.len() {
            rule(self, ComponentId(index))?;
        }
        Ok(())
    }

    /// Install a standing rule over every binary of one component, current
    /// and future.
    ///
    /// The rule fires immediately for binaries already declared, then once
    /// for each binary declared later. A boundary rule that lands after
    /// wiring rules re-runs them for the existing binaries; wiring edges
    /// dedupe, so the re-run converges instead of stacking.
    pub fn all_binaries<F>(
        &mut self,
        id: ComponentId,
        phase: RulePhase,
        rule: F,
    ) -> Result<(), ConfigError>
    where
        F: Fn(&Component, &Binary, &mut ConfigurationContainer) -> Result<(), ConfigError>
            + 'static,
    {
        let rule: Rc<BinaryRule> = Rc::new(rule);
        self.components[id.0].push_rule(phase, rule.clone());

        for binary_index in 0..self.components[id.0].binaries().len() {
            let component = &self.components[id.0];
            let binary = &component.binaries()[binary_index];
            rule(component, binary, &mut self.configurations)?;
        }

        if phase == RulePhase::Boundary
            && !self.components[id.0].rules(RulePhase::Wiring).is_empty()
        {
            for binary_index in 0..self.components[id.0].binaries().len() {
                self.fire_phase(id, binary_index, RulePhase::Wiring)?;
            }
        }
        Ok(())
    }

    fn fire_phase(
        &mut self,
        id: ComponentId,
        binary_index: usize,
        phase: RulePhase,
    ) -> Result<(), ConfigError> {
        let rules = self.components[id.0].rules(phase).to_vec();
        for rule in rules {
            let component = &self.components[id.0];
            let binary = &component.binaries()[binary_index];
            rule(component, binary, &mut self.configurations)?;
        }
        Ok(())
    }
}
