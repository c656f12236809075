#![deny(clippy::all)]

//! Exact TSP by Held-Karp bitmask dynamic programming.
//!
//! State `(visited, last)` holds the cheapest path that starts at city 0,
//! visits exactly the cities in `visited` and ends at `last`. The tables hold
//! `2^N × N` entries, which is the binding limit on N: the default ceiling is
//! [`DEFAULT_MAX_CITIES`], and a larger N is refused with
//! [`Error::ResourceExhausted`](tsp_core::Error::ResourceExhausted) before
//! anything is allocated.
//!
//! Two formulations are provided and return the identical tour: the bottom-up
//! table fill ([`HeldKarpSolver::solve`]) and a top-down memoized recursion
//! ([`HeldKarpSolver::solve_memoized`]).

mod bottom_up;
mod memoized;
mod table;

use tsp_core::{DistanceMatrix, Result, TourResult};

pub use table::{check_capacity, DEFAULT_MAX_CITIES, MAX_SUPPORTED_CITIES};

pub struct HeldKarpSolver<'a> {
    matrix: &'a DistanceMatrix,
    max_cities: usize,
}

impl<'a> HeldKarpSolver<'a> {
    pub fn new(matrix: &'a DistanceMatrix) -> Self {
        Self {
            matrix,
            max_cities: DEFAULT_MAX_CITIES,
        }
    }

    /// Raises or lowers the table ceiling. Values above
    /// [`MAX_SUPPORTED_CITIES`] are clamped.
    pub fn with_max_cities(mut self, max_cities: usize) -> Self {
        self.max_cities = max_cities;
        self
    }

    pub fn solve(&self) -> Result<TourResult> {
        self.run("held-karp", bottom_up::solve)
    }

    pub fn solve_memoized(&self) -> Result<TourResult> {
        self.run("held-karp (memoized)", memoized::solve)
    }

    fn run(
        &self,
        name: &str,
        solve: fn(&DistanceMatrix, usize) -> Result<TourResult>,
    ) -> Result<TourResult> {
        let n = self.matrix.len();
        if n < 2 {
            return Ok(TourResult::trivial(n));
        }
        log::info!("{name}: n={n}");
        let result = solve(self.matrix, self.max_cities)?;
        if result.is_feasible() {
            log::info!("{name}: cost={}", result.cost());
        } else {
            log::warn!("{name}: no closing edge reachable, no tour exists");
        }
        Ok(result)
    }
}

/// Optimal closed tour by bottom-up Held-Karp with the default table ceiling.
pub fn solve_held_karp(matrix: &DistanceMatrix) -> Result<TourResult> {
    HeldKarpSolver::new(matrix).solve()
}

pub fn solve_held_karp_memoized(matrix: &DistanceMatrix) -> Result<TourResult> {
    HeldKarpSolver::new(matrix).solve_memoized()
}
