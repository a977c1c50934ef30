//! The configuration container.
//!
//! Holds every configuration of a project, keyed by name. Extends edges
//! are stored by name and only resolved when the graph is walked, so a
//! configuration may extend one that is registered later in the pass.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Dfs;
use tracing::debug;

use crate::model::errors::ConfigError;
use crate::model::node::ConfigurationNode;
use crate::util::Name;

/// Name-keyed configuration storage with insertion-ordered iteration.
#[derive(Debug, Clone, Default)]
pub struct ConfigurationContainer {
    nodes: HashMap<Name, ConfigurationNode>,
    order: Vec<Name>,
}

impl ConfigurationContainer {
    /// Create an empty container.
    pub fn new() -> Self {
        ConfigurationContainer {
            nodes: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Register a new configuration.
    ///
    /// Names are unique; registering an existing one fails with
    /// [`ConfigError::ConfigurationExists`] and leaves the container
    /// untouched.
    pub fn register(&mut self, node: ConfigurationNode) -> Result<(), ConfigError> {
        let name = node.name;
        if self.nodes.contains_key(&name) {
            return Err(ConfigError::ConfigurationExists { name });
        }

        debug!(configuration = %name, resolvable = node.resolvable, consumable = node.consumable, "registered configuration");
        self.nodes.insert(name, node);
        self.order.push(name);
        Ok(())
    }

    /// Check whether a configuration exists.
    pub fn contains(&self, name: impl Into<Name>) -> bool {
        self.nodes.contains_key(&name.into())
    }

    /// Look up a configuration by name.
    pub fn named(&self, name: impl Into<Name>) -> Result<&ConfigurationNode, ConfigError> {
        let name = name.into();
        self.nodes
            .get(&name)
            .ok_or(ConfigError::UnknownConfiguration { name })
    }

    /// Look up a configuration for mutation.
    pub fn named_mut(
        &mut self,
        name: impl Into<Name>,
    ) -> Result<&mut ConfigurationNode, ConfigError> {
        let name = name.into();
        self.nodes
            .get_mut(&name)
            .ok_or(ConfigError::UnknownConfiguration { name })
    }

    /// Iterate configurations in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ConfigurationNode> {
        self.order.iter().map(|name| &self.nodes[name])
    }

    /// Number of configurations.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the container is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Every configuration whose declared dependencies flow into `name`,
    /// transitively along extends edges, not including `name` itself.
    ///
    /// Only resolvable configurations can be walked; a declaration bucket
    /// or published interface fails with [`ConfigError::NotResolvable`].
    pub fn effective_dependencies(&self, name: impl Into<Name>) -> Result<Vec<Name>, ConfigError> {
        let name = name.into();
        let node = self.named(name)?;
        if !node.resolvable {
            return Err(ConfigError::NotResolvable { name });
        }

        let (graph, indices) = self.extends_graph()?;
        let mut dfs = Dfs::new(&graph, indices[&name]);
        let mut reachable = Vec::new();
        while let Some(idx) = dfs.next(&graph) {
            let reached = graph[idx];
            if reached != name {
                reachable.push(reached);
            }
        }
        Ok(reachable)
    }

    /// Check the whole extends graph: every edge must point at a registered
    /// configuration and no extends cycle may exist.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (graph, _) = self.extends_graph()?;

        for scc in petgraph::algo::tarjan_scc(&graph) {
            let cyclic = scc.len() > 1
                || graph.find_edge(scc[0], scc[0]).is_some();
            if cyclic {
                let mut names: Vec<Name> = scc.iter().map(|&idx| graph[idx]).collect();
                names.push(names[0]);
                return Err(ConfigError::CycleDetected { names });
            }
        }
        Ok(())
    }

    /// Materialize the extends edges as a petgraph graph for walking.
    fn extends_graph(&self) -> Result<(DiGraph<Name, ()>, HashMap<Name, NodeIndex>), ConfigError> {
        let mut graph = DiGraph::new();
        let mut indices = HashMap::new();

        for &name in &self.order {
            let idx = graph.add_node(name);
            indices.insert(name, idx);
        }

        for &name in &self.order {
            for &target in self.nodes[&name].extends() {
                let &target_idx = indices
                    .get(&target)
                    .ok_or(ConfigError::UnknownConfiguration { name: target })?;
                graph.add_edge(indices[&name], target_idx, ());
            }
        }

        Ok((graph, indices))
    }
}
