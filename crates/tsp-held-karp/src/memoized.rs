use tsp_core::{City, DistanceMatrix, Result, TourResult, VisitedSet, START};

use crate::bottom_up::close;
use crate::table::{allocate, check_capacity, NO_PARENT};

#[derive(Clone, Copy, Debug)]
struct Entry {
    cost: f64,
    parent: u8,
}

/// Top-down form of the same recurrence: a state is computed the first time
/// it is asked for and cached in a flat `Option` table.
struct Memo<'a> {
    matrix: &'a DistanceMatrix,
    n: usize,
    memo: Vec<Option<Entry>>,
}

impl Memo<'_> {
    /// Cheapest path from city 0 through exactly `visited`, ending at `last`.
    fn reach(&mut self, visited: VisitedSet, last: City) -> f64 {
        let cache_idx = visited.index() * self.n + last;
        if let Some(cached) = self.memo[cache_idx] {
            return cached.cost;
        }

        let rest = visited.without(last);
        let entry = if rest == VisitedSet::single(START) {
            Entry {
                cost: self.matrix.edge(START, last),
                parent: START as u8,
            }
        } else {
            let mut best = Entry {
                cost: f64::INFINITY,
                parent: NO_PARENT,
            };
            for prev in rest.iter().filter(|&prev| prev != START) {
                let cost = self.reach(rest, prev) + self.matrix.edge(prev, last);
                if cost < best.cost {
                    best = Entry {
                        cost,
                        parent: prev as u8,
                    };
                }
            }
            best
        };

        self.memo[cache_idx] = Some(entry);
        entry.cost
    }

    fn parent(&self, visited: VisitedSet, last: City) -> u8 {
        self.memo[visited.index() * self.n + last].map_or(NO_PARENT, |entry| entry.parent)
    }
}

pub(crate) fn solve(matrix: &DistanceMatrix, max_cities: usize) -> Result<TourResult> {
    let n = matrix.len();
    let entries = check_capacity(n, max_cities)?;
    log::debug!("held-karp (memoized): n={n} table_entries={entries}");

    let mut memo = Memo {
        matrix,
        n,
        memo: allocate(n, max_cities, entries, None)?,
    };

    let full = VisitedSet::full(n);
    let Some((end, cost)) = close(matrix, |last| memo.reach(full, last)) else {
        return Ok(TourResult::infeasible());
    };

    let mut tour = Vec::with_capacity(n + 1);
    let mut visited = full;
    let mut city = end;
    while city != START {
        tour.push(city);
        let prev = memo.parent(visited, city);
        debug_assert_ne!(prev, NO_PARENT, "reached state without a predecessor");
        visited = visited.without(city);
        city = prev as City;
    }
    tour.push(START);
    tour.reverse();
    tour.push(START);

    Ok(TourResult::new(tour, cost))
}
