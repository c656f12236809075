#![deny(clippy::all)]

//! Exact TSP by depth-first branch-and-bound.
//!
//! The search fixes city 0 as the start and extends the partial tour one city
//! at a time. Each extension tightens a lower bound built from per-city
//! cheapest-edge estimates ([`BoundEstimator::incident`]); a branch whose
//! accumulated weight plus bound cannot beat the incumbent is dropped. Every
//! dropped branch is provably no better than the incumbent, so the result is
//! optimal.
//!
//! Worst case is factorial in N. Missing edges ([`DistanceMatrix::NO_EDGE`])
//! are never traversed.

mod search;
mod stats;

use std::thread;

use crossbeam_channel::unbounded;
use tsp_bounds::BoundEstimator;
use tsp_core::{DistanceMatrix, TourResult, START};

use search::{Outcome, Search, SharedBest};
pub use stats::SearchStats;

pub struct BranchAndBoundSolver<'a> {
    matrix: &'a DistanceMatrix,
    bounds: BoundEstimator,
    root_bound: f64,
}

impl<'a> BranchAndBoundSolver<'a> {
    pub fn new(matrix: &'a DistanceMatrix) -> Self {
        let bounds = BoundEstimator::incident(matrix);
        let root_bound = bounds.root_bound(matrix.is_integral());
        Self {
            matrix,
            bounds,
            root_bound,
        }
    }

    /// Lower bound on every tour before any edge is fixed.
    pub fn root_bound(&self) -> f64 {
        self.root_bound
    }

    pub fn solve(&self) -> TourResult {
        self.solve_with_stats().0
    }

    pub fn solve_with_stats(&self) -> (TourResult, SearchStats) {
        let n = self.matrix.len();
        if n < 2 {
            return (TourResult::trivial(n), SearchStats::default());
        }
        log::info!("branch-and-bound: n={n} root_bound={}", self.root_bound);
        if !self.root_bound.is_finite() {
            log::warn!("branch-and-bound: a city has fewer than two edges, no tour exists");
            return (TourResult::infeasible(), SearchStats::default());
        }

        let mut search = Search::new(self.matrix, &self.bounds, None);
        search.descend(self.root_bound, 0.0);
        Self::report(search.finish())
    }

    /// Splits the branches below city 0 across `threads` workers. Workers keep
    /// their own incumbents and prune against the best cost any of them has
    /// published; among equal costs the first one published wins.
    ///
    /// There are only `n - 1` top-level branches, so at most that many
    /// workers are started.
    pub fn solve_parallel(&self, threads: usize) -> (TourResult, SearchStats) {
        let n = self.matrix.len();
        let threads = threads.min(n.saturating_sub(1));
        if threads <= 1 {
            return self.solve_with_stats();
        }
        log::info!(
            "branch-and-bound: n={n} root_bound={} threads={threads}",
            self.root_bound
        );
        if !self.root_bound.is_finite() {
            log::warn!("branch-and-bound: a city has fewer than two edges, no tour exists");
            return (TourResult::infeasible(), SearchStats::default());
        }

        let (job_tx, job_rx) = unbounded();
        for next in (0..n).filter(|&next| next != START) {
            // receiver is still held here, so this cannot fail
            let _ = job_tx.send(next);
        }
        drop(job_tx);

        let (outcome_tx, outcome_rx) = unbounded::<Outcome>();
        let shared = SharedBest::new();
        let shared = &shared;
        let matrix = self.matrix;
        let bounds = &self.bounds;
        let root_bound = self.root_bound;

        thread::scope(|scope| {
            for worker in 0..threads {
                let job_rx = job_rx.clone();
                let outcome_tx = outcome_tx.clone();
                scope.spawn(move || {
                    let mut search = Search::new(matrix, bounds, Some(shared));
                    for next in job_rx.iter() {
                        log::trace!("worker {worker}: branch 0 -> {next}");
                        search.try_extend(next, root_bound, 0.0);
                    }
                    if outcome_tx.send(search.finish()).is_err() {
                        log::error!("worker {worker}: result channel closed");
                    }
                });
            }
        });
        drop(outcome_tx);

        let mut stats = SearchStats::default();
        let mut best: Option<Outcome> = None;
        for outcome in outcome_rx.try_iter() {
            stats += outcome.stats;
            let better = match &best {
                None => true,
                Some(current) => {
                    outcome.cost < current.cost
                        || (outcome.cost == current.cost && outcome.sequence < current.sequence)
                }
            };
            if better {
                best = Some(outcome);
            }
        }

        match best {
            Some(mut outcome) => {
                outcome.stats = stats;
                Self::report(outcome)
            }
            None => (TourResult::infeasible(), stats),
        }
    }

    fn report(outcome: Outcome) -> (TourResult, SearchStats) {
        let stats = outcome.stats;
        log::debug!("branch-and-bound: {stats}");
        let result = outcome.into_result();
        if result.is_feasible() {
            log::info!("branch-and-bound: cost={}", result.cost());
        } else {
            log::warn!("branch-and-bound: no closing edge reachable, no tour exists");
        }
        (result, stats)
    }
}

/// Optimal closed tour by branch-and-bound. Cost is infinite when no tour exists.
pub fn solve_branch_and_bound(matrix: &DistanceMatrix) -> TourResult {
    BranchAndBoundSolver::new(matrix).solve()
}

pub fn solve_branch_and_bound_parallel(matrix: &DistanceMatrix, threads: usize) -> TourResult {
    BranchAndBoundSolver::new(matrix).solve_parallel(threads).0
}
