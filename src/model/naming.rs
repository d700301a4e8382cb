//! Deterministic names for actions, variables and graph nodes.
//!
//! Every name is built from location tokens. A token never contains `_`, the
//! separator used between name parts, and escaping is injective, so distinct
//! customer ids give distinct tokens. Customer ids equal to a depot label are
//! rejected when the instance is created.

use crate::problem::{DirectedEdge, Location, END_DEPOT_LABEL, START_DEPOT_LABEL};

pub const NULL_ACTION: &str = "nullAction";

pub struct LocationTokens {
    customers: Vec<String>,
}

impl LocationTokens {
    pub fn new<'a>(customer_ids: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            customers: customer_ids.into_iter().map(escape).collect(),
        }
    }

    pub fn token(&self, location: Location) -> &str {
        match location {
            Location::Customer(idx) => self.customers[idx].as_str(),
            Location::StartDepot => START_DEPOT_LABEL,
            Location::EndDepot => END_DEPOT_LABEL,
        }
    }

    pub fn action_name(&self, edge: &DirectedEdge) -> String {
        format!("LAArc_{}_{}", self.token(edge.from), self.token(edge.to))
    }

    pub fn primitive_var_name(&self, edge: &DirectedEdge) -> String {
        format!("psi_{}_{}", self.token(edge.from), self.token(edge.to))
    }

    pub fn capacity_delta_name(&self, location: Location) -> String {
        format!("delta_capRem_{}", self.token(location))
    }

    pub fn time_delta_name(&self, location: Location) -> String {
        format!("delta_timeRem_{}", self.token(location))
    }
}

// `~` escapes itself and `_`
fn escape(id: &str) -> String {
    let mut escaped = String::with_capacity(id.len());
    for ch in id.chars() {
        match ch {
            '~' => escaped.push_str("~~"),
            '_' => escaped.push_str("~u"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
