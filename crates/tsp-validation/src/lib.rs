#![deny(clippy::all)]

//! Seeded random instances and a three-way agreement check between
//! branch-and-bound, Held-Karp and brute force.

use std::fmt;

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use tsp_branch_bound::BranchAndBoundSolver;
use tsp_brute_force::solve_brute_force;
use tsp_core::{DistanceMatrix, Result};
use tsp_held_karp::solve_held_karp;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InstanceKind {
    Symmetric,
    Asymmetric,
}

impl fmt::Display for InstanceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstanceKind::Symmetric => f.write_str("symmetric"),
            InstanceKind::Asymmetric => f.write_str("asymmetric"),
        }
    }
}

/// Complete graph with integral costs drawn uniformly from `1..=max_cost`.
pub fn random_instance(
    rng: &mut impl Rng,
    n: usize,
    kind: InstanceKind,
    max_cost: u32,
) -> Result<DistanceMatrix> {
    let mut costs = vec![0.0; n * n];
    for i in 0..n {
        for j in 0..n {
            if i == j || (kind == InstanceKind::Symmetric && j < i) {
                continue;
            }
            let cost = f64::from(rng.gen_range(1..=max_cost));
            costs[i * n + j] = cost;
            if kind == InstanceKind::Symmetric {
                costs[j * n + i] = cost;
            }
        }
    }
    DistanceMatrix::new(n, costs)
}

/// One line of the agreement report.
#[derive(Clone, Debug, PartialEq)]
pub struct CheckRow {
    pub seed: u64,
    pub n: usize,
    pub kind: InstanceKind,
    pub branch_and_bound: f64,
    pub held_karp: f64,
    /// `None` when N is above the brute-force limit.
    pub brute_force: Option<f64>,
    pub pruned: u64,
}

impl CheckRow {
    pub const HEADER: &'static str = "seed,n,kind,branch_and_bound,held_karp,brute_force,pruned,agree";

    pub fn agree(&self) -> bool {
        self.branch_and_bound == self.held_karp
            && self.brute_force.is_none_or(|cost| cost == self.held_karp)
    }

    pub fn to_csv(&self) -> String {
        let brute_force = self.brute_force.map(|c| c.to_string()).unwrap_or_default();
        format!(
            "{},{},{},{},{},{},{},{}",
            self.seed,
            self.n,
            self.kind,
            self.branch_and_bound,
            self.held_karp,
            brute_force,
            self.pruned,
            self.agree()
        )
    }
}

/// Generates the instance for `seed` and solves it with every exact strategy.
pub fn cross_check(
    seed: u64,
    n: usize,
    kind: InstanceKind,
    brute_force_up_to: usize,
) -> Result<CheckRow> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let matrix = random_instance(&mut rng, n, kind, 100)?;

    let (bnb, stats) = BranchAndBoundSolver::new(&matrix).solve_with_stats();
    let dp = solve_held_karp(&matrix)?;
    let brute_force = if n <= brute_force_up_to {
        Some(solve_brute_force(&matrix)?.cost())
    } else {
        None
    };

    let row = CheckRow {
        seed,
        n,
        kind,
        branch_and_bound: bnb.cost(),
        held_karp: dp.cost(),
        brute_force,
        pruned: stats.pruned,
    };
    if !row.agree() {
        log::error!("disagreement: {}", row.to_csv());
    }
    Ok(row)
}
