#![deny(clippy::all)]

//! Exhaustive enumeration of every tour through city 0.
//!
//! Walks the `(N-1)!` orderings of cities `1..N` in lexicographic order and
//! keeps the first strictly cheapest closed tour. Only meant for tiny
//! instances, as a reference answer for the exact solvers.

use tsp_core::{City, DistanceMatrix, Error, Result, TourResult};

/// 11 cities is 10! = 3.6M tours.
pub const DEFAULT_MAX_CITIES: usize = 11;

pub fn solve_brute_force(matrix: &DistanceMatrix) -> Result<TourResult> {
    solve_brute_force_with_limit(matrix, DEFAULT_MAX_CITIES)
}

pub fn solve_brute_force_with_limit(matrix: &DistanceMatrix, max_cities: usize) -> Result<TourResult> {
    let n = matrix.len();
    if n > max_cities {
        return Err(Error::TooManyCities {
            cities: n,
            limit: max_cities,
        });
    }
    if n < 2 {
        return Ok(TourResult::trivial(n));
    }
    log::info!("brute-force: n={n}");

    let mut route: Vec<City> = (0..=n).map(|i| i % n).collect();
    let mut best_cost = f64::INFINITY;
    let mut best_route = Vec::new();
    let mut tours = 0u64;

    loop {
        tours += 1;
        let cost = route
            .windows(2)
            .fold(0.0, |total, leg| total + matrix.edge(leg[0], leg[1]));
        if cost < best_cost {
            best_cost = cost;
            best_route.clone_from(&route);
        }
        if !next_permutation(&mut route[1..n]) {
            break;
        }
    }
    log::debug!("brute-force: tours={tours}");

    if best_cost.is_finite() {
        log::info!("brute-force: cost={best_cost}");
        Ok(TourResult::new(best_route, best_cost))
    } else {
        log::warn!("brute-force: no tour exists");
        Ok(TourResult::infeasible())
    }
}

/// Rearranges `items` into the next lexicographic permutation; false once the
/// last permutation has been passed.
fn next_permutation(items: &mut [City]) -> bool {
    let Some(pivot) = items.windows(2).rposition(|pair| pair[0] < pair[1]) else {
        return false;
    };
    // `items[pivot + 1..]` is non-increasing; find the rightmost element above the pivot.
    let successor = items
        .iter()
        .rposition(|&item| item > items[pivot])
        .unwrap_or(pivot + 1);
    items.swap(pivot, successor);
    items[pivot + 1..].reverse();
    true
}
