pub mod cvrptw;
pub mod travel_matrix;

pub type CustomerIdx = usize;

pub const START_DEPOT_LABEL: &str = "startDepot";
pub const END_DEPOT_LABEL: &str = "endDepot";

/// A stop of a route: one of the customers (by input position) or one of the
/// two synthetic depots.
///
/// The derived ordering is the canonical location order: customers in input
/// order, then the start depot, then the end depot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Location {
    Customer(CustomerIdx),
    StartDepot,
    EndDepot,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DirectedEdge {
    pub from: Location,
    pub to: Location,
}

impl DirectedEdge {
    /// Returns `None` for self-loops, edges leaving the end depot, edges
    /// entering the start depot and the direct start-to-end depot edge.
    pub fn new(from: Location, to: Location) -> Option<Self> {
        if Self::is_valid(from, to) {
            Some(Self { from, to })
        } else {
            None
        }
    }

    pub fn is_valid(from: Location, to: Location) -> bool {
        from != to
            && from != Location::EndDepot
            && to != Location::StartDepot
            && !(from == Location::StartDepot && to == Location::EndDepot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_location_order() {
        let mut locations = vec![
            Location::EndDepot,
            Location::Customer(1),
            Location::StartDepot,
            Location::Customer(0),
        ];
        locations.sort();
        assert_eq!(
            locations,
            vec![
                Location::Customer(0),
                Location::Customer(1),
                Location::StartDepot,
                Location::EndDepot,
            ]
        );
    }

    #[test]
    fn depot_edges_are_restricted() {
        use Location::*;
        assert!(DirectedEdge::new(StartDepot, Customer(0)).is_some());
        assert!(DirectedEdge::new(Customer(0), EndDepot).is_some());
        assert!(DirectedEdge::new(Customer(0), Customer(1)).is_some());

        assert!(DirectedEdge::new(Customer(0), Customer(0)).is_none());
        assert!(DirectedEdge::new(EndDepot, Customer(0)).is_none());
        assert!(DirectedEdge::new(Customer(0), StartDepot).is_none());
        assert!(DirectedEdge::new(StartDepot, EndDepot).is_none());
        assert!(DirectedEdge::new(EndDepot, StartDepot).is_none());
    }
}
