//! The action model handed to the label-based solver.

use enum_map::EnumMap;

use crate::problem::DirectedEdge;

pub use builder::{ModelBuilder, ModelParameters};
pub use naming::NULL_ACTION;
pub use resource_graph::{GraphEndpoints, ResourceGraph};

pub mod builder;
pub mod naming;
pub mod resource_graph;

/// Read-only result of [`ModelBuilder::build`].
///
/// `all_actions[0]` is the null action, `all_actions[i + 1]`,
/// `all_primitive_vars[i]` and `edges[i]` describe the same edge, and
/// `action_costs` is aligned with `all_actions`.
#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    pub(crate) all_delta: Vec<String>,
    pub(crate) endpoints: GraphEndpoints,
    pub(crate) all_actions: Vec<String>,
    pub(crate) all_primitive_vars: Vec<String>,
    pub(crate) action_costs: Vec<f64>,
    pub(crate) edges: Vec<DirectedEdge>,
}

impl Model {
    pub fn all_delta(&self) -> &[String] {
        &self.all_delta
    }

    pub fn all_graph_names(&self) -> impl Iterator<Item = &'static str> {
        ResourceGraph::ALL.into_iter().map(|it| it.name())
    }

    pub fn source_ids(&self) -> &EnumMap<ResourceGraph, String> {
        &self.endpoints.sources
    }

    pub fn sink_ids(&self) -> &EnumMap<ResourceGraph, String> {
        &self.endpoints.sinks
    }

    pub fn all_actions(&self) -> &[String] {
        &self.all_actions
    }

    pub fn null_action(&self) -> &str {
        &self.all_actions[0]
    }

    pub fn all_non_null_actions(&self) -> &[String] {
        &self.all_actions[1..]
    }

    pub fn all_primitive_vars(&self) -> &[String] {
        &self.all_primitive_vars
    }

    /// Action names paired with their costs, null action first.
    pub fn iter_action_costs(&self) -> impl Iterator<Item = (&str, f64)> {
        self.all_actions
            .iter()
            .map(|it| it.as_str())
            .zip(self.action_costs.iter().copied())
    }

    #[cfg(test)]
    pub fn cost_of(&self, action: &str) -> Option<f64> {
        self.iter_action_costs()
            .find(|(name, _)| *name == action)
            .map(|(_, cost)| cost)
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn max_cost(&self) -> f64 {
        self.action_costs.iter().copied().fold(0.0, f64::max)
    }
}
