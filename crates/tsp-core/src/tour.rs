use std::fmt;

use serde::Serialize;

use crate::{City, START};

/// Closed tour produced by a solver.
///
/// A feasible result for `n >= 1` cities holds `n + 1` entries starting and
/// ending at city 0. An infeasible result has an empty tour and infinite cost.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TourResult {
    tour: Vec<City>,
    cost: f64,
}

impl TourResult {
    pub fn new(tour: Vec<City>, cost: f64) -> Self {
        Self { tour, cost }
    }

    /// Result for fewer than two cities: `[]` for none, `[0, 0]` for one, cost 0.
    pub fn trivial(n: usize) -> Self {
        let tour = if n == 0 { Vec::new() } else { vec![START, START] };
        Self { tour, cost: 0.0 }
    }

    /// No Hamiltonian cycle exists.
    pub fn infeasible() -> Self {
        Self {
            tour: Vec::new(),
            cost: f64::INFINITY,
        }
    }

    pub fn tour(&self) -> &[City] {
        &self.tour
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn is_feasible(&self) -> bool {
        self.cost.is_finite()
    }

    /// Number of distinct cities on the tour.
    pub fn city_count(&self) -> usize {
        self.tour.len().saturating_sub(1)
    }

    /// `tour` starts and ends at city 0 and visits each of `0..n` exactly once in between.
    pub fn is_hamiltonian_cycle(&self, n: usize) -> bool {
        if n == 0 {
            return self.tour.is_empty();
        }
        if self.tour.len() != n + 1 || self.tour[0] != START || self.tour[n] != START {
            return false;
        }
        let mut seen = vec![false; n];
        for &city in &self.tour[..n] {
            if city >= n || seen[city] {
                return false;
            }
            seen[city] = true;
        }
        true
    }
}

impl fmt::Display for TourResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_feasible() {
            return write!(f, "no tour found");
        }
        let route = self
            .tour
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" -> ");
        write!(f, "cost {} via {}", self.cost, route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trivial_results() {
        assert_eq!(TourResult::trivial(0).tour(), &[] as &[City]);
        assert_eq!(TourResult::trivial(1).tour(), &[0, 0]);
        assert_eq!(TourResult::trivial(1).cost(), 0.0);
        assert!(TourResult::trivial(1).is_hamiltonian_cycle(1));
        assert!(TourResult::trivial(0).is_hamiltonian_cycle(0));
    }

    #[test]
    fn infeasible_result() {
        let r = TourResult::infeasible();
        assert!(!r.is_feasible());
        assert_eq!(r.city_count(), 0);
        assert_eq!(r.to_string(), "no tour found");
    }

    #[test]
    fn cycle_shape() {
        assert!(TourResult::new(vec![0, 2, 1, 3, 0], 1.0).is_hamiltonian_cycle(4));
        assert!(!TourResult::new(vec![0, 2, 2, 3, 0], 1.0).is_hamiltonian_cycle(4));
        assert!(!TourResult::new(vec![1, 2, 0, 3, 1], 1.0).is_hamiltonian_cycle(4));
        assert!(!TourResult::new(vec![0, 2, 1, 0], 1.0).is_hamiltonian_cycle(4));
        assert!(!TourResult::new(vec![0, 2, 1, 9, 0], 1.0).is_hamiltonian_cycle(4));
    }

    #[test]
    fn display_and_json() {
        let r = TourResult::new(vec![0, 1, 0], 7.0);
        assert_eq!(r.to_string(), "cost 7 via 0 -> 1 -> 0");
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json, serde_json::json!({ "tour": [0, 1, 0], "cost": 7.0 }));
    }
}
