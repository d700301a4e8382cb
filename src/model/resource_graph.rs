use enum_map::{enum_map, Enum, EnumMap};

use crate::model::naming::LocationTokens;
use crate::problem::Location;

/// The two resource graphs the solver tracks along a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Enum)]
pub enum ResourceGraph {
    /// remaining time, depleted from the time horizon to zero
    TimeGraph,
    /// remaining vehicle capacity, depleted from the capacity to zero
    CapGraph,
}

impl ResourceGraph {
    pub const ALL: [ResourceGraph; 2] = [ResourceGraph::TimeGraph, ResourceGraph::CapGraph];

    pub fn name(&self) -> &'static str {
        match self {
            Self::TimeGraph => "TimeGraph",
            Self::CapGraph => "CapGraph",
        }
    }

    fn node_tag(&self) -> &'static str {
        match self {
            Self::TimeGraph => "timeGraph",
            Self::CapGraph => "capGraph",
        }
    }

    fn resource_tag(&self) -> &'static str {
        match self {
            Self::TimeGraph => "timeRem",
            Self::CapGraph => "capRem",
        }
    }

    pub fn node_id(&self, tokens: &LocationTokens, location: Location, remaining: i64) -> String {
        format!(
            "node_{}_cust={}_{}={}",
            self.node_tag(),
            tokens.token(location),
            self.resource_tag(),
            remaining
        )
    }
}

/// Source and sink node ids of both resource graphs.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphEndpoints {
    pub sources: EnumMap<ResourceGraph, String>,
    pub sinks: EnumMap<ResourceGraph, String>,
}

impl GraphEndpoints {
    /// Sources sit at the start depot with the full resource, sinks at the
    /// end depot with nothing left.
    pub fn derive(tokens: &LocationTokens, vehicle_capacity: i64, time_horizon: i64) -> Self {
        let sources = enum_map! {
            ResourceGraph::TimeGraph => ResourceGraph::TimeGraph.node_id(tokens, Location::StartDepot, time_horizon),
            ResourceGraph::CapGraph => ResourceGraph::CapGraph.node_id(tokens, Location::StartDepot, vehicle_capacity),
        };
        let sinks: EnumMap<ResourceGraph, String> = enum_map! {
            graph => graph.node_id(tokens, Location::EndDepot, 0),
        };
        Self { sources, sinks }
    }
}
