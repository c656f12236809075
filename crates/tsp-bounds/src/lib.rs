#![deny(clippy::all)]

//! Cheapest-edge estimates per city and the half-sum lower bound derived from them.
//!
//! A tour uses exactly two edges at every city, so with symmetric costs half
//! the sum of each city's two cheapest edges bounds any tour from below.
//! [`EdgeScope::Incident`] keeps that property for asymmetric costs.

use tsp_core::{City, DistanceMatrix};

/// Which edges of a city are candidates for its estimates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeScope {
    /// The city's row: edges leaving it.
    Outgoing,
    /// Edges in either direction. A tour through three or more cities uses at
    /// most one direction per neighbour, so each neighbour contributes the
    /// cheaper of its two edges; with two cities both edges are used.
    Incident,
}

/// First and second minimum candidate edge cost of every city, computed once.
#[derive(Clone, Debug)]
pub struct BoundEstimator {
    first: Vec<f64>,
    second: Vec<f64>,
}

impl BoundEstimator {
    pub fn new(matrix: &DistanceMatrix, scope: EdgeScope) -> Self {
        let n = matrix.len();
        let mut first = Vec::with_capacity(n);
        let mut second = Vec::with_capacity(n);

        for city in 0..n {
            let mut mins = TwoSmallest::default();
            for other in (0..n).filter(|&other| other != city) {
                let out = matrix.edge(city, other);
                match scope {
                    EdgeScope::Outgoing => mins.push(out),
                    EdgeScope::Incident if n == 2 => {
                        mins.push(out);
                        mins.push(matrix.edge(other, city));
                    }
                    EdgeScope::Incident => mins.push(out.min(matrix.edge(other, city))),
                }
            }
            first.push(mins.first);
            second.push(mins.second);
        }

        Self { first, second }
    }

    pub fn outgoing(matrix: &DistanceMatrix) -> Self {
        Self::new(matrix, EdgeScope::Outgoing)
    }

    pub fn incident(matrix: &DistanceMatrix) -> Self {
        Self::new(matrix, EdgeScope::Incident)
    }

    /// Cheapest candidate edge of `city`; infinite when it has none.
    #[inline(always)]
    pub fn first_min(&self, city: City) -> f64 {
        self.first[city]
    }

    /// Second-cheapest candidate edge of `city`. Equal costs count as distinct
    /// ranks, so this equals `first_min` when the two cheapest edges tie.
    #[inline(always)]
    pub fn second_min(&self, city: City) -> f64 {
        self.second[city]
    }

    /// `Σ (first_min + second_min) / 2` over all cities, rounded up when the
    /// matrix is integral (every tour cost is then an integer too).
    pub fn root_bound(&self, integral: bool) -> f64 {
        let half_sum = self
            .first
            .iter()
            .zip(&self.second)
            .map(|(f, s)| f + s)
            .sum::<f64>()
            / 2.0;
        if integral {
            half_sum.ceil()
        } else {
            half_sum
        }
    }
}

/// Running first/second minimum, duplicates kept.
#[derive(Clone, Copy, Debug)]
struct TwoSmallest {
    first: f64,
    second: f64,
}

impl Default for TwoSmallest {
    fn default() -> Self {
        Self {
            first: f64::INFINITY,
            second: f64::INFINITY,
        }
    }
}

impl TwoSmallest {
    #[inline(always)]
    fn push(&mut self, value: f64) {
        if value <= self.first {
            self.second = self.first;
            self.first = value;
        } else if value <= self.second {
            self.second = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asymmetric() -> DistanceMatrix {
        DistanceMatrix::from_rows(&[
            vec![0.0, 4.0, 9.0],
            vec![1.0, 0.0, 7.0],
            vec![2.0, 8.0, 0.0],
        ])
        .unwrap()
    }

    #[test]
    fn outgoing_reads_rows_only() {
        let est = BoundEstimator::outgoing(&asymmetric());
        assert_eq!(est.first_min(0), 4.0);
        assert_eq!(est.second_min(0), 9.0);
        assert_eq!(est.first_min(1), 1.0);
        assert_eq!(est.second_min(1), 7.0);
        assert_eq!(est.first_min(2), 2.0);
        assert_eq!(est.second_min(2), 8.0);
    }

    #[test]
    fn incident_reads_row_and_column() {
        let est = BoundEstimator::incident(&asymmetric());
        // city 0: neighbour 1 min(4, 1), neighbour 2 min(9, 2)
        assert_eq!(est.first_min(0), 1.0);
        assert_eq!(est.second_min(0), 2.0);
        // city 2: neighbour 0 min(2, 9), neighbour 1 min(8, 7)
        assert_eq!(est.first_min(2), 2.0);
        assert_eq!(est.second_min(2), 7.0);
    }

    #[test]
    fn incident_equals_outgoing_when_symmetric() {
        let m = DistanceMatrix::from_rows(&[
            vec![0.0, 10.0, 15.0, 20.0],
            vec![10.0, 0.0, 35.0, 25.0],
            vec![15.0, 35.0, 0.0, 30.0],
            vec![20.0, 25.0, 30.0, 0.0],
        ])
        .unwrap();
        let out = BoundEstimator::outgoing(&m);
        let inc = BoundEstimator::incident(&m);
        for city in 0..4 {
            assert_eq!(out.first_min(city), inc.first_min(city));
            assert_eq!(out.second_min(city), inc.second_min(city));
        }
    }

    #[test]
    fn ties_keep_both_ranks() {
        let m = DistanceMatrix::from_rows(&[
            vec![0.0, 3.0, 3.0],
            vec![3.0, 0.0, 5.0],
            vec![3.0, 5.0, 0.0],
        ])
        .unwrap();
        let est = BoundEstimator::outgoing(&m);
        assert_eq!(est.first_min(0), 3.0);
        assert_eq!(est.second_min(0), 3.0);
    }

    #[test]
    fn degenerate_sizes_are_infinite() {
        let one = DistanceMatrix::from_rows(&[vec![0.0]]).unwrap();
        let est = BoundEstimator::outgoing(&one);
        assert_eq!(est.first_min(0), f64::INFINITY);
        assert_eq!(est.second_min(0), f64::INFINITY);

        let two = DistanceMatrix::from_rows(&[vec![0.0, 5.0], vec![6.0, 0.0]]).unwrap();
        let est = BoundEstimator::outgoing(&two);
        assert_eq!(est.first_min(0), 5.0);
        assert_eq!(est.second_min(0), f64::INFINITY);
        let est = BoundEstimator::incident(&two);
        assert_eq!(est.second_min(0), 6.0);
    }

    #[test]
    fn missing_edges_are_skipped_by_the_minimum() {
        let m = DistanceMatrix::from_rows(&[
            vec![0.0, DistanceMatrix::NO_EDGE, 2.0],
            vec![1.0, 0.0, 3.0],
            vec![2.0, 3.0, 0.0],
        ])
        .unwrap();
        let est = BoundEstimator::outgoing(&m);
        assert_eq!(est.first_min(0), 2.0);
        assert_eq!(est.second_min(0), f64::INFINITY);
    }

    #[test]
    fn root_bound_ceils_only_integral_matrices() {
        // symmetric: city mins (10,15) (10,25) (15,30) (20,25) -> 150 / 2 = 75
        let m = DistanceMatrix::from_rows(&[
            vec![0.0, 10.0, 15.0, 20.0],
            vec![10.0, 0.0, 35.0, 25.0],
            vec![15.0, 35.0, 0.0, 30.0],
            vec![20.0, 25.0, 30.0, 0.0],
        ])
        .unwrap();
        assert_eq!(BoundEstimator::outgoing(&m).root_bound(true), 75.0);

        let odd = DistanceMatrix::from_rows(&[
            vec![0.0, 1.0, 2.0],
            vec![1.0, 0.0, 2.0],
            vec![2.0, 2.0, 0.0],
        ])
        .unwrap();
        let est = BoundEstimator::outgoing(&odd);
        // (1+2) + (1+2) + (2+2) = 10 -> 5
        assert_eq!(est.root_bound(true), 5.0);

        // (4+9) + (1+7) + (2+8) = 31
        let est = BoundEstimator::outgoing(&asymmetric());
        assert_eq!(est.root_bound(false), 15.5);
        assert_eq!(est.root_bound(true), 16.0);
    }
}
