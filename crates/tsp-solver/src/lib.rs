#![deny(clippy::all)]

//! Exact Traveling-Salesman solving over a [`DistanceMatrix`].
//!
//! Two interchangeable exact strategies share one contract, matrix in and
//! [`TourResult`] out:
//!
//! - [`solve_branch_and_bound`]: depth-first search over the permutation tree
//!   with lower-bound pruning. Worst case factorial, usually far less.
//! - [`solve_held_karp`]: bitmask dynamic programming over `2^N × N` states.
//!   Predictable time, memory caps N near 20.
//!
//! [`SolverSelector`] picks between them from a [`SolverConfig`].
//!
//! ```
//! use tsp_solver::{solve_branch_and_bound, solve_held_karp, DistanceMatrix};
//!
//! let m = DistanceMatrix::from_rows(&[
//!     vec![0.0, 10.0, 15.0, 20.0],
//!     vec![10.0, 0.0, 35.0, 25.0],
//!     vec![15.0, 35.0, 0.0, 30.0],
//!     vec![20.0, 25.0, 30.0, 0.0],
//! ])
//! .unwrap();
//!
//! assert_eq!(solve_branch_and_bound(&m).cost(), 80.0);
//! assert_eq!(solve_held_karp(&m).unwrap().cost(), 80.0);
//! ```

mod config;
mod selector;

pub use config::{ConfigError, SolverConfig, Strategy};
pub use selector::SolverSelector;

pub use tsp_branch_bound::{solve_branch_and_bound, BranchAndBoundSolver, SearchStats};
pub use tsp_core::{City, DistanceMatrix, Error, ProblemInput, Result, TourResult};
pub use tsp_held_karp::{solve_held_karp, HeldKarpSolver};
