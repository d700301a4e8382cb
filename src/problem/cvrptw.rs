use std::collections::HashSet;
use std::fmt::{Debug, Formatter};

use itertools::Itertools;
use log::warn;

use crate::error::{ModelError, Result};
use crate::problem::travel_matrix::{FixSizedTravelMatrix, TravelMatrix};
use crate::problem::{DirectedEdge, Location, END_DEPOT_LABEL, START_DEPOT_LABEL};
use crate::utils::num::{
    ceil_to_precision, is_multiple_of_precision, round_to_precision, TIME_PRECISION,
};

pub type Demand = u32;
pub type Time = i64;

#[derive(Clone, Debug, PartialEq)]
pub struct CustomerRecord {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub demand: Demand,
    pub ready_time: Time,
    pub due_date: Time,
    pub service_time: u32,
}

/// Customers in input order plus the two depots sharing one coordinate.
///
/// Location indices into the travel matrix are `0..n` for the customers,
/// `n` for the start depot and `n + 1` for the end depot.
pub struct CvrptwInstance {
    pub name: String,
    pub customers: Vec<CustomerRecord>,
    pub depot: (f64, f64),
    pub(crate) travel_matrix: FixSizedTravelMatrix,
}

impl Debug for CvrptwInstance {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "CVRPTW instance {}:", self.name)
            .and(writeln!(f, "depot at {:?}", self.depot))
            .and(write!(
                f,
                "{} customers: {:?}",
                self.customers.len(),
                self.customers
            ))
    }
}

impl CvrptwInstance {
    pub fn num_customers(&self) -> usize {
        self.customers.len()
    }

    /// Customer id or depot label.
    pub fn label(&self, location: Location) -> &str {
        match location {
            Location::Customer(idx) => self.customers[idx].id.as_str(),
            Location::StartDepot => START_DEPOT_LABEL,
            Location::EndDepot => END_DEPOT_LABEL,
        }
    }

    /// All locations in canonical order.
    pub fn iter_locations(&self) -> impl Iterator<Item = Location> {
        (0..self.customers.len())
            .map(Location::Customer)
            .chain([Location::StartDepot, Location::EndDepot])
    }

    pub fn service_time(&self, location: Location) -> u32 {
        match location {
            Location::Customer(idx) => self.customers[idx].service_time,
            Location::StartDepot | Location::EndDepot => 0,
        }
    }

    pub fn distance(&self, from: Location, to: Location) -> f64 {
        self.travel_matrix
            .distance(self.matrix_idx(from), self.matrix_idx(to))
    }

    /// Distance plus the service time at `from`, rounded up to the time
    /// precision. Never under-estimates the true travel time.
    pub fn travel_time(&self, from: Location, to: Location) -> f64 {
        let total = self.distance(from, to) + self.service_time(from) as f64;
        let time = ceil_to_precision(total, TIME_PRECISION);
        debug_assert_eq!(round_to_precision(time, TIME_PRECISION), time);
        debug_assert!(!time.is_finite() || is_multiple_of_precision(time, TIME_PRECISION));
        time
    }

    /// Coordinates far apart enough overflow the distance, and such a travel
    /// time cannot be written as a JSON number.
    fn check_travel_times(&self) -> Result<()> {
        let locations = self.iter_locations().collect::<Vec<_>>();
        for (from, to) in locations.iter().copied().cartesian_product(locations.iter().copied()) {
            if DirectedEdge::is_valid(from, to) && !self.travel_time(from, to).is_finite() {
                return Err(ModelError::NonFiniteTravelTime {
                    from: self.label(from).to_string(),
                    to: self.label(to).to_string(),
                });
            }
        }
        Ok(())
    }

    #[inline(always)]
    fn matrix_idx(&self, location: Location) -> usize {
        match location {
            Location::Customer(idx) => idx,
            Location::StartDepot => self.customers.len(),
            Location::EndDepot => self.customers.len() + 1,
        }
    }
}

pub fn create_instance_with(
    name: impl Into<String>,
    customers: Vec<CustomerRecord>,
    depot: (f64, f64),
) -> Result<CvrptwInstance> {
    if !depot.0.is_finite() || !depot.1.is_finite() {
        return Err(ModelError::invalid_parameter(
            "depot",
            format!("({}, {})", depot.0, depot.1),
            "depot coordinates must be finite",
        ));
    }

    let mut seen = HashSet::with_capacity(customers.len());
    for customer in &customers {
        if customer.id == START_DEPOT_LABEL || customer.id == END_DEPOT_LABEL {
            return Err(ModelError::DuplicateIdentifier {
                id: customer.id.clone(),
                reason: "customer id collides with a reserved depot label",
            });
        }
        if !seen.insert(customer.id.as_str()) {
            return Err(ModelError::DuplicateIdentifier {
                id: customer.id.clone(),
                reason: "customer id appears more than once",
            });
        }
        if customer.ready_time > customer.due_date {
            warn!(
                "customer {} has an empty time window (ready: {}, due: {})",
                customer.id, customer.ready_time, customer.due_date
            );
        }
    }

    let coords: Vec<(f64, f64)> = customers
        .iter()
        .map(|it| (it.x, it.y))
        .chain([depot, depot])
        .collect();
    let travel_matrix = FixSizedTravelMatrix::with_euclidean_distances(&coords);

    let instance = CvrptwInstance {
        name: name.into(),
        customers,
        depot,
        travel_matrix,
    };
    instance.check_travel_times()?;
    Ok(instance)
}

#[cfg(test)]
pub(crate) fn customer(id: &str, x: f64, y: f64, service_time: u32) -> CustomerRecord {
    CustomerRecord {
        id: id.to_string(),
        x,
        y,
        demand: 1,
        ready_time: 0,
        due_date: 100,
        service_time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depots_share_the_depot_coordinate() -> anyhow::Result<()> {
        let instance = create_instance_with("t", vec![customer("A", 0.0, 0.0, 0)], (3.0, 4.0))?;
        use Location::*;
        assert_eq!(instance.distance(StartDepot, EndDepot), 0.0);
        assert_eq!(instance.distance(Customer(0), StartDepot), 5.0);
        assert_eq!(instance.distance(EndDepot, Customer(0)), 5.0);
        Ok(())
    }

    #[test]
    fn travel_time_includes_service_time_of_the_origin() -> anyhow::Result<()> {
        let instance = create_instance_with(
            "t",
            vec![customer("A", 0.0, 0.0, 10), customer("B", 3.0, 4.0, 0)],
            (3.5, 3.5),
        )?;
        use Location::*;
        assert_eq!(instance.travel_time(Customer(0), Customer(1)), 15.0);
        assert_eq!(instance.travel_time(Customer(1), Customer(0)), 5.0);
        // sqrt(24.5) = 4.9497.. rounds up
        assert_eq!(instance.travel_time(StartDepot, Customer(0)), 5.0);
        assert_eq!(instance.travel_time(Customer(0), EndDepot), 15.0);
        Ok(())
    }

    #[test]
    fn canonical_location_iteration() -> anyhow::Result<()> {
        let instance = create_instance_with(
            "t",
            vec![customer("B", 0.0, 0.0, 0), customer("A", 1.0, 1.0, 0)],
            (3.5, 3.5),
        )?;
        itertools::assert_equal(
            instance.iter_locations(),
            [
                Location::Customer(0),
                Location::Customer(1),
                Location::StartDepot,
                Location::EndDepot,
            ],
        );
        Ok(())
    }

    #[test]
    fn rejects_depot_labels_as_customer_ids() {
        let res = create_instance_with("t", vec![customer("endDepot", 0.0, 0.0, 0)], (3.5, 3.5));
        assert!(matches!(
            res,
            Err(ModelError::DuplicateIdentifier { ref id, .. }) if id == "endDepot"
        ));
    }

    #[test]
    fn rejects_repeated_customer_ids() {
        let res = create_instance_with(
            "t",
            vec![customer("7", 0.0, 0.0, 0), customer("7", 1.0, 0.0, 0)],
            (3.5, 3.5),
        );
        assert!(matches!(
            res,
            Err(ModelError::DuplicateIdentifier { ref id, .. }) if id == "7"
        ));
    }

    #[test]
    fn rejects_coordinates_too_far_apart() {
        let res = create_instance_with(
            "t",
            vec![customer("A", 0.0, 0.0, 0), customer("B", f64::MAX, 0.0, 0)],
            (-f64::MAX, 0.0),
        );
        assert!(matches!(
            res,
            Err(ModelError::NonFiniteTravelTime { ref from, ref to })
                if from == "A" && to == "B"
        ));
    }

    #[test]
    fn huge_but_representable_distances_are_kept() -> anyhow::Result<()> {
        let far = 2f64.powi(600);
        let instance = create_instance_with(
            "t",
            vec![customer("A", 0.0, 0.0, 0), customer("B", far, 0.0, 0)],
            (0.0, 0.0),
        )?;
        assert_eq!(
            instance.travel_time(Location::Customer(0), Location::Customer(1)),
            far
        );
        Ok(())
    }

    #[test]
    fn labels_of_customers_and_depots() -> anyhow::Result<()> {
        let instance = create_instance_with("t", vec![customer("A", 0.0, 0.0, 0)], (3.5, 3.5))?;
        assert_eq!(instance.label(Location::Customer(0)), "A");
        assert_eq!(instance.label(Location::StartDepot), START_DEPOT_LABEL);
        assert_eq!(instance.label(Location::EndDepot), END_DEPOT_LABEL);
        Ok(())
    }

    #[test]
    fn rejects_non_finite_depot() {
        let res = create_instance_with("t", vec![], (f64::NAN, 0.0));
        assert!(matches!(
            res,
            Err(ModelError::InvalidParameter { name: "depot", .. })
        ));
    }
}
