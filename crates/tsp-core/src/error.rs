use thiserror::Error as ThisError;

use crate::City;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("city {index} is out of range for a {cities}-city matrix")]
    InvalidIndex { index: City, cities: usize },
    #[error("distance matrix is not square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("cost buffer has {len} entries, expected {expected} for a square matrix")]
    BufferLength { len: usize, expected: usize },
    #[error("invalid cost {value} on edge ({from}, {to}); costs must be non-negative")]
    InvalidCost { from: City, to: City, value: f64 },
    #[error(
        "Held-Karp table for {cities} cities does not fit the configured ceiling of {limit} cities"
    )]
    ResourceExhausted { cities: usize, limit: usize },
    #[error("{cities} cities exceeds the limit of {limit} for this solver")]
    TooManyCities { cities: usize, limit: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
