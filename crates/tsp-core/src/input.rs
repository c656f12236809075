//! JSON problem descriptions.
//!
//! ```json
//! { "costs": [[0, 3, null], [3, 0, 4], [5, 4, 0]] }
//! { "points": [{ "x": 0, "y": 0 }, { "x": 3, "y": 4 }], "metric": "att" }
//! ```
//!
//! `null` in `costs` marks a missing edge.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{DistanceMatrix, Metric, Point, Result};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProblemInput {
    Matrix {
        costs: Vec<Vec<Option<f64>>>,
        /// Treat off-diagonal zeros as missing edges.
        #[serde(default)]
        zero_is_missing: bool,
    },
    Points {
        points: Vec<Point>,
        #[serde(default)]
        metric: Metric,
    },
}

impl ProblemInput {
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn into_matrix(self) -> Result<DistanceMatrix> {
        match self {
            ProblemInput::Matrix {
                costs,
                zero_is_missing,
            } => {
                let rows: Vec<Vec<f64>> = costs
                    .into_iter()
                    .map(|row| {
                        row.into_iter()
                            .map(|c| c.unwrap_or(DistanceMatrix::NO_EDGE))
                            .collect()
                    })
                    .collect();
                if zero_is_missing {
                    DistanceMatrix::with_zero_as_missing(&rows)
                } else {
                    DistanceMatrix::from_rows(&rows)
                }
            }
            ProblemInput::Points { points, metric } => DistanceMatrix::from_points(&points, metric),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn parses_matrix_with_missing_edges() {
        let input: ProblemInput =
            serde_json::from_str(r#"{ "costs": [[0, 3, null], [3, 0, 4], [5, 4, 0]] }"#).unwrap();
        let m = input.into_matrix().unwrap();
        assert_eq!(m.len(), 3);
        assert!(!m.has_edge(0, 2));
        assert_eq!(m.edge(2, 0), 5.0);
    }

    #[test]
    fn parses_legacy_zero_convention() {
        let input: ProblemInput = serde_json::from_str(
            r#"{ "costs": [[0, 0, 1], [0, 0, 1], [1, 1, 0]], "zero_is_missing": true }"#,
        )
        .unwrap();
        let m = input.into_matrix().unwrap();
        assert!(!m.has_edge(0, 1));
        assert!(m.has_edge(0, 2));
    }

    #[test]
    fn parses_points_with_metric() {
        let input = ProblemInput::from_reader(
            r#"{ "points": [{ "x": 0, "y": 0 }, { "x": 3, "y": 4 }], "metric": "euclidean" }"#
                .as_bytes(),
        )
        .unwrap();
        let m = input.into_matrix().unwrap();
        assert_eq!(m.edge(0, 1), 5.0);
        assert_eq!(m.edge(1, 0), 5.0);
    }

    #[test]
    fn points_default_to_euclidean() {
        let input: ProblemInput =
            serde_json::from_str(r#"{ "points": [{ "x": 1, "y": 1 }, { "x": 1, "y": 3 }] }"#)
                .unwrap();
        assert!(matches!(
            input,
            ProblemInput::Points {
                metric: Metric::Euclidean,
                ..
            }
        ));
    }

    #[test]
    fn ragged_matrix_is_rejected() {
        let input: ProblemInput = serde_json::from_str(r#"{ "costs": [[0, 1], [1]] }"#).unwrap();
        assert!(matches!(input.into_matrix(), Err(Error::NotSquare { .. })));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = ProblemInput::from_reader("{ \"cities\": 3 }".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
