#![deny(clippy::all)]

//! Shared primitives for the exact TSP solvers.
//!
//! Every solver consumes a [`DistanceMatrix`] and produces a [`TourResult`].
//! Missing edges are encoded with [`DistanceMatrix::NO_EDGE`]; a zero
//! off-diagonal cost is an ordinary edge.

mod error;
pub mod geo;
pub mod input;
mod matrix;
mod tour;
mod visited;

pub use error::{Error, Result};
pub use geo::{Metric, Point};
pub use input::ProblemInput;
pub use matrix::DistanceMatrix;
pub use tour::TourResult;
pub use visited::VisitedSet;

/// City identifier, 0-indexed. City 0 is the fixed start of every tour.
pub type City = usize;

/// The fixed start and end of every tour.
pub const START: City = 0;
