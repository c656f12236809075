use tsp_branch_bound::BranchAndBoundSolver;
use tsp_brute_force::solve_brute_force_with_limit;
use tsp_core::{DistanceMatrix, Result, TourResult};
use tsp_held_karp::HeldKarpSolver;

use crate::{SolverConfig, Strategy};

/// Dispatches a solve to one exact strategy. All strategies return an optimal
/// tour; the choice only trades time against memory.
#[derive(Debug, Clone, Default)]
pub struct SolverSelector {
    config: SolverConfig,
}

impl SolverSelector {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Strategy that will run for an `n`-city matrix; never [`Strategy::Auto`].
    pub fn resolve(&self, n: usize) -> Strategy {
        match self.config.strategy {
            Strategy::Auto
                if n <= self.config.auto_held_karp_up_to
                    && n <= self.config.held_karp_max_cities =>
            {
                Strategy::HeldKarp
            }
            Strategy::Auto => Strategy::BranchAndBound,
            chosen => chosen,
        }
    }

    pub fn solve(&self, matrix: &DistanceMatrix) -> Result<TourResult> {
        let strategy = self.resolve(matrix.len());
        log::debug!("selector: n={} strategy={strategy}", matrix.len());
        match strategy {
            // resolve never yields Auto
            Strategy::BranchAndBound | Strategy::Auto => Ok(BranchAndBoundSolver::new(matrix)
                .solve_parallel(self.config.threads)
                .0),
            Strategy::HeldKarp => HeldKarpSolver::new(matrix)
                .with_max_cities(self.config.held_karp_max_cities)
                .solve(),
            Strategy::HeldKarpMemoized => HeldKarpSolver::new(matrix)
                .with_max_cities(self.config.held_karp_max_cities)
                .solve_memoized(),
            Strategy::BruteForce => {
                solve_brute_force_with_limit(matrix, self.config.brute_force_max_cities)
            }
        }
    }
}
