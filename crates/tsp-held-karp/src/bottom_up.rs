use tsp_core::{City, DistanceMatrix, Result, TourResult, VisitedSet, START};

use crate::table::{Table, NO_PARENT};

/// Fills the table in increasing mask order. Every reachable mask contains
/// city 0, so only odd masks are expanded.
pub(crate) fn solve(matrix: &DistanceMatrix, max_cities: usize) -> Result<TourResult> {
    let n = matrix.len();
    let mut table = Table::new(n, max_cities)?;
    log::debug!("held-karp: n={n} table_entries={}", table.len());

    let start = VisitedSet::single(START);
    table.set(start, START, 0.0, NO_PARENT);

    let full = VisitedSet::full(n);
    for bits in (start.bits()..=full.bits()).step_by(2) {
        let visited = VisitedSet::from_bits(bits);
        for last in visited.iter() {
            let here = table.cost(visited, last);
            if !here.is_finite() {
                continue;
            }
            for next in (0..n).filter(|&next| !visited.contains(next)) {
                let candidate = here + matrix.edge(last, next);
                let grown = visited.with(next);
                if candidate < table.cost(grown, next) {
                    table.set(grown, next, candidate, last as u8);
                }
            }
        }
    }

    let Some((end, cost)) = close(matrix, |last| table.cost(full, last)) else {
        return Ok(TourResult::infeasible());
    };

    let mut tour = Vec::with_capacity(n + 1);
    let mut visited = full;
    let mut city = end;
    while city != START {
        tour.push(city);
        let prev = table.parent(visited, city);
        debug_assert_ne!(prev, NO_PARENT, "reached state without a predecessor");
        visited = visited.without(city);
        city = prev as City;
    }
    tour.push(START);
    tour.reverse();
    tour.push(START);

    Ok(TourResult::new(tour, cost))
}

/// Cheapest way back to city 0 over every possible final city; the smallest
/// city wins ties.
pub(crate) fn close(
    matrix: &DistanceMatrix,
    mut reach: impl FnMut(City) -> f64,
) -> Option<(City, f64)> {
    let mut best: Option<(City, f64)> = None;
    for last in 1..matrix.len() {
        let total = reach(last) + matrix.edge(last, START);
        if total.is_finite() && best.is_none_or(|(_, cost)| total < cost) {
            best = Some((last, total));
        }
    }
    best
}
