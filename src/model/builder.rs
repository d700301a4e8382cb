use itertools::Itertools;
use log::{debug, warn};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{ModelError, Result};
use crate::model::naming::LocationTokens;
use crate::model::{GraphEndpoints, Model, NULL_ACTION};
use crate::problem::cvrptw::{create_instance_with, CustomerRecord, CvrptwInstance};
use crate::problem::{DirectedEdge, Location};

pub const DEFAULT_VEHICLE_CAPACITY: i64 = 5;
pub const DEFAULT_TIME_HORIZON: i64 = 10;
pub const DEFAULT_DEPOT: (f64, f64) = (3.5, 3.5);

#[derive(Clone, Debug, PartialEq)]
pub struct ModelParameters {
    pub vehicle_capacity: i64,
    pub time_horizon: i64,
    pub depot: (f64, f64),
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self {
            vehicle_capacity: DEFAULT_VEHICLE_CAPACITY,
            time_horizon: DEFAULT_TIME_HORIZON,
            depot: DEFAULT_DEPOT,
        }
    }
}

impl ModelParameters {
    pub fn validate(&self) -> Result<()> {
        if self.vehicle_capacity <= 0 {
            return Err(ModelError::invalid_parameter(
                "vehicle_capacity",
                self.vehicle_capacity,
                "must be positive",
            ));
        }
        if self.time_horizon < 0 {
            return Err(ModelError::invalid_parameter(
                "time_horizon",
                self.time_horizon,
                "must not be negative",
            ));
        }
        Ok(())
    }
}

pub struct ModelBuilder {
    parameters: ModelParameters,
}

impl ModelBuilder {
    pub fn new(parameters: ModelParameters) -> Self {
        Self { parameters }
    }

    /// Builds the action model for the customers in the given order.
    pub fn build(&self, name: impl Into<String>, customers: Vec<CustomerRecord>) -> Result<Model> {
        self.parameters.validate()?;
        let instance = create_instance_with(name, customers, self.parameters.depot)?;
        self.build_for_instance(&instance)
    }

    pub fn build_for_instance(&self, instance: &CvrptwInstance) -> Result<Model> {
        self.parameters.validate()?;
        let ModelParameters {
            vehicle_capacity,
            time_horizon,
            ..
        } = self.parameters;

        for customer in &instance.customers {
            if customer.demand as i64 > vehicle_capacity {
                warn!(
                    "demand of customer {} exceeds the vehicle capacity ({} > {})",
                    customer.id, customer.demand, vehicle_capacity
                );
            }
        }

        let tokens = LocationTokens::new(instance.customers.iter().map(|it| it.id.as_str()));

        let all_delta = (0..instance.num_customers())
            .map(Location::Customer)
            .flat_map(|location| {
                [
                    tokens.capacity_delta_name(location),
                    tokens.time_delta_name(location),
                ]
            })
            .collect();

        let endpoints = GraphEndpoints::derive(&tokens, vehicle_capacity, time_horizon);

        let edges = enumerate_edges(instance);
        debug!("{} valid edges among {} locations", edges.len(), instance.num_customers() + 2);

        let mut all_actions = Vec::with_capacity(edges.len() + 1);
        all_actions.push(NULL_ACTION.to_string());
        all_actions.extend(edges.iter().map(|edge| tokens.action_name(edge)));

        let all_primitive_vars = edges
            .iter()
            .map(|edge| tokens.primitive_var_name(edge))
            .collect();

        let mut action_costs = Vec::with_capacity(edges.len() + 1);
        action_costs.push(0.0);
        action_costs.extend(edge_costs(instance, &edges));

        Ok(Model {
            all_delta,
            endpoints,
            all_actions,
            all_primitive_vars,
            action_costs,
            edges,
        })
    }
}

/// All valid edges in canonical order (by origin, then destination).
pub fn enumerate_edges(instance: &CvrptwInstance) -> Vec<DirectedEdge> {
    instance
        .iter_locations()
        .cartesian_product(instance.iter_locations().collect::<Vec<_>>())
        .filter_map(|(from, to)| DirectedEdge::new(from, to))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn edge_costs(instance: &CvrptwInstance, edges: &[DirectedEdge]) -> Vec<f64> {
    edges
        .iter()
        .map(|edge| instance.travel_time(edge.from, edge.to))
        .collect()
}

// indexed collect keeps the edge order
#[cfg(feature = "parallel")]
fn edge_costs(instance: &CvrptwInstance, edges: &[DirectedEdge]) -> Vec<f64> {
    edges
        .par_iter()
        .map(|edge| instance.travel_time(edge.from, edge.to))
        .collect()
}
