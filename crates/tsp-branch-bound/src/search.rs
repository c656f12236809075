use std::sync::atomic::{AtomicU64, Ordering};

use tsp_bounds::BoundEstimator;
use tsp_core::{City, DistanceMatrix, TourResult, START};

use crate::SearchStats;

/// Best cost shared between workers, stored as `f64` bits. For non-negative
/// floats the bit patterns order the same way as the values, so `fetch_min`
/// on the bits is a minimum on the costs.
pub(crate) struct SharedBest {
    bits: AtomicU64,
    sequence: AtomicU64,
}

impl SharedBest {
    pub(crate) fn new() -> Self {
        Self {
            bits: AtomicU64::new(f64::INFINITY.to_bits()),
            sequence: AtomicU64::new(0),
        }
    }

    #[inline(always)]
    pub(crate) fn load(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Acquire))
    }

    /// Publishes `cost` and returns the discovery stamp used to break ties.
    pub(crate) fn publish(&self, cost: f64) -> u64 {
        self.bits.fetch_min(cost.to_bits(), Ordering::AcqRel);
        self.sequence.fetch_add(1, Ordering::AcqRel)
    }
}

/// Incumbent found by one search.
pub(crate) struct Outcome {
    pub(crate) cost: f64,
    pub(crate) tour: Vec<City>,
    pub(crate) sequence: u64,
    pub(crate) stats: SearchStats,
}

impl Outcome {
    pub(crate) fn into_result(self) -> TourResult {
        if self.cost.is_finite() {
            TourResult::new(self.tour, self.cost)
        } else {
            TourResult::infeasible()
        }
    }
}

/// Depth-first state over one partial tour.
///
/// `path` always starts at city 0 and `visited[c]` is set exactly for the
/// cities on `path`: marked on descent, cleared on return.
pub(crate) struct Search<'a> {
    matrix: &'a DistanceMatrix,
    bounds: &'a BoundEstimator,
    shared: Option<&'a SharedBest>,
    path: Vec<City>,
    visited: Vec<bool>,
    best: Outcome,
}

impl<'a> Search<'a> {
    pub(crate) fn new(
        matrix: &'a DistanceMatrix,
        bounds: &'a BoundEstimator,
        shared: Option<&'a SharedBest>,
    ) -> Self {
        let n = matrix.len();
        let mut path = Vec::with_capacity(n + 1);
        path.push(START);
        let mut visited = vec![false; n];
        visited[START] = true;

        Self {
            matrix,
            bounds,
            shared,
            path,
            visited,
            best: Outcome {
                cost: f64::INFINITY,
                tour: Vec::new(),
                sequence: u64::MAX,
                stats: SearchStats::default(),
            },
        }
    }

    pub(crate) fn finish(self) -> Outcome {
        self.best
    }

    /// Cost a completion has to beat: the local incumbent, or the shared one
    /// if another worker has done better.
    #[inline(always)]
    fn ceiling(&self) -> f64 {
        match self.shared {
            Some(shared) => self.best.cost.min(shared.load()),
            None => self.best.cost,
        }
    }

    /// Expands every child of the current partial tour.
    pub(crate) fn descend(&mut self, bound: f64, weight: f64) {
        let n = self.matrix.len();
        if self.path.len() == n {
            self.close(weight);
            return;
        }
        for next in 0..n {
            if !self.visited[next] {
                self.try_extend(next, bound, weight);
            }
        }
    }

    /// Appends `next` to the path if the edge exists and the tightened bound
    /// can still beat the incumbent, then searches below it.
    pub(crate) fn try_extend(&mut self, next: City, bound: f64, weight: f64) {
        let level = self.path.len();
        let last = self.path[level - 1];
        let step = self.matrix.edge(last, next);
        if !step.is_finite() {
            return;
        }

        // A city's first fixed edge uses up its second-minimum share, the
        // second one its first-minimum share. One open edge keeps first_min / 2.
        let leaving = if level == 1 {
            self.bounds.second_min(last)
        } else {
            self.bounds.first_min(last)
        };
        let tightened = bound - (leaving + self.bounds.second_min(next)) / 2.0;
        let reached = weight + step;

        if tightened + reached < self.ceiling() {
            self.best.stats.expanded += 1;
            self.visited[next] = true;
            self.path.push(next);

            self.descend(tightened, reached);

            self.path.pop();
            self.visited[next] = false;
        } else {
            self.best.stats.pruned += 1;
        }
    }

    fn close(&mut self, weight: f64) {
        let last = self.path[self.path.len() - 1];
        let closing = self.matrix.edge(last, START);
        if !closing.is_finite() {
            return;
        }
        let total = weight + closing;
        if total < self.ceiling() {
            self.best.cost = total;
            self.best.tour.clear();
            self.best.tour.extend_from_slice(&self.path);
            self.best.tour.push(START);
            self.best.stats.improvements += 1;
            self.best.sequence = match self.shared {
                Some(shared) => shared.publish(total),
                None => self.best.stats.improvements,
            };
            log::trace!("incumbent improved to {total}");
        }
    }
}
