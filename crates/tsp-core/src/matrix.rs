use crate::geo::{Metric, Point};
use crate::{City, Error, Result};

/// Immutable square matrix of non-negative edge costs.
///
/// Stored row-major in a flat buffer; `edge(i, j)` reads `costs[i * n + j]`.
/// The diagonal is always 0. A missing edge is [`DistanceMatrix::NO_EDGE`].
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    costs: Vec<f64>,
}

impl DistanceMatrix {
    /// Sentinel cost of an edge that does not exist.
    pub const NO_EDGE: f64 = f64::INFINITY;

    /// Builds a matrix from `n * n` row-major costs.
    pub fn new(n: usize, mut costs: Vec<f64>) -> Result<Self> {
        let expected = n
            .checked_mul(n)
            .ok_or_else(|| Error::invalid_input(format!("{n} cities overflow the cost buffer")))?;
        if costs.len() != expected {
            return Err(Error::BufferLength {
                len: costs.len(),
                expected,
            });
        }

        for from in 0..n {
            for to in 0..n {
                let value = costs[from * n + to];
                if from == to {
                    if value != 0.0 {
                        log::debug!("normalising diagonal entry ({from}, {from}) = {value} to 0");
                    }
                    costs[from * n + to] = 0.0;
                } else if value.is_nan() || value < 0.0 {
                    return Err(Error::InvalidCost { from, to, value });
                }
            }
        }

        Ok(Self { n, costs })
    }

    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let n = rows.len();
        let mut costs = Vec::with_capacity(n * n);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != n {
                return Err(Error::NotSquare {
                    row,
                    len: values.len(),
                    expected: n,
                });
            }
            costs.extend_from_slice(values);
        }
        Self::new(n, costs)
    }

    /// Builds a matrix from rows written in the "zero means no edge" convention:
    /// every off-diagonal zero becomes [`DistanceMatrix::NO_EDGE`].
    pub fn with_zero_as_missing(rows: &[Vec<f64>]) -> Result<Self> {
        let mut matrix = Self::from_rows(rows)?;
        let n = matrix.n;
        for from in 0..n {
            for to in 0..n {
                let cell = &mut matrix.costs[from * n + to];
                if from != to && *cell == 0.0 {
                    *cell = Self::NO_EDGE;
                }
            }
        }
        Ok(matrix)
    }

    /// Complete matrix of pairwise distances between `points` under `metric`.
    pub fn from_points(points: &[Point], metric: Metric) -> Result<Self> {
        if let Some(i) = points.iter().position(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Err(Error::invalid_input(format!("point {i} has a non-finite coordinate")));
        }
        let n = points.len();
        let mut costs = vec![0.0; n * n];
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    costs[i * n + j] = metric.distance(&points[i], &points[j]);
                }
            }
        }
        Self::new(n, costs)
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Checked cost lookup.
    pub fn cost(&self, from: City, to: City) -> Result<f64> {
        self.check(from)?;
        self.check(to)?;
        Ok(self.edge(from, to))
    }

    /// Unchecked cost lookup for solver hot paths; panics on an out-of-range city.
    #[inline(always)]
    pub fn edge(&self, from: City, to: City) -> f64 {
        self.costs[from * self.n + to]
    }

    #[inline(always)]
    pub fn has_edge(&self, from: City, to: City) -> bool {
        self.edge(from, to).is_finite()
    }

    pub fn row(&self, from: City) -> Result<&[f64]> {
        self.check(from)?;
        Ok(&self.costs[from * self.n..(from + 1) * self.n])
    }

    pub fn is_symmetric(&self) -> bool {
        (0..self.n).all(|i| (i + 1..self.n).all(|j| self.edge(i, j) == self.edge(j, i)))
    }

    /// True when every existing edge has an integral cost.
    pub fn is_integral(&self) -> bool {
        self.costs
            .iter()
            .all(|c| !c.is_finite() || c.fract() == 0.0)
    }

    /// Sum of consecutive edge costs along `route`, summed left to right.
    /// A closed tour must repeat its first city at the end.
    pub fn route_cost(&self, route: &[City]) -> Result<f64> {
        for &city in route {
            self.check(city)?;
        }
        Ok(route
            .windows(2)
            .fold(0.0, |total, leg| total + self.edge(leg[0], leg[1])))
    }

    fn check(&self, city: City) -> Result<()> {
        if city < self.n {
            Ok(())
        } else {
            Err(Error::InvalidIndex {
                index: city,
                cities: self.n,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> DistanceMatrix {
        DistanceMatrix::from_rows(&[
            vec![0.0, 10.0, 15.0, 20.0],
            vec![10.0, 0.0, 35.0, 25.0],
            vec![15.0, 35.0, 0.0, 30.0],
            vec![20.0, 25.0, 30.0, 0.0],
        ])
        .unwrap()
    }

    #[test]
    fn cost_rejects_out_of_range_city() {
        let m = square();
        assert_eq!(m.cost(1, 3).unwrap(), 25.0);
        assert!(matches!(
            m.cost(4, 0),
            Err(Error::InvalidIndex { index: 4, cities: 4 })
        ));
        assert!(matches!(m.cost(0, 7), Err(Error::InvalidIndex { index: 7, .. })));
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = DistanceMatrix::from_rows(&[vec![0.0, 1.0], vec![1.0]]).unwrap_err();
        assert!(matches!(err, Error::NotSquare { row: 1, len: 1, expected: 2 }));
    }

    #[test]
    fn rejects_wrong_buffer_length() {
        let err = DistanceMatrix::new(4, vec![1.0; 15]).unwrap_err();
        assert!(matches!(err, Error::BufferLength { len: 15, expected: 16 }));
        assert_eq!(
            err.to_string(),
            "cost buffer has 15 entries, expected 16 for a square matrix"
        );

        let err = DistanceMatrix::new(usize::MAX, Vec::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn rejects_negative_and_nan_costs() {
        let err = DistanceMatrix::from_rows(&[vec![0.0, -1.0], vec![1.0, 0.0]]).unwrap_err();
        assert!(matches!(err, Error::InvalidCost { from: 0, to: 1, .. }));

        let err = DistanceMatrix::from_rows(&[vec![0.0, 1.0], vec![f64::NAN, 0.0]]).unwrap_err();
        assert!(matches!(err, Error::InvalidCost { from: 1, to: 0, .. }));
    }

    #[test]
    fn diagonal_is_normalised() {
        let m = DistanceMatrix::from_rows(&[vec![9999.0, 3.0], vec![4.0, 9999.0]]).unwrap();
        assert_eq!(m.edge(0, 0), 0.0);
        assert_eq!(m.edge(1, 1), 0.0);
        assert_eq!(m.edge(1, 0), 4.0);
    }

    #[test]
    fn zero_cost_edges_are_real_unless_asked_otherwise() {
        let rows = vec![vec![0.0, 0.0, 2.0], vec![0.0, 0.0, 1.0], vec![2.0, 1.0, 0.0]];
        let plain = DistanceMatrix::from_rows(&rows).unwrap();
        assert!(plain.has_edge(0, 1));

        let legacy = DistanceMatrix::with_zero_as_missing(&rows).unwrap();
        assert!(!legacy.has_edge(0, 1));
        assert!(legacy.has_edge(0, 2));
        assert_eq!(legacy.edge(2, 2), 0.0);
    }

    #[test]
    fn route_cost_sums_closing_edge() {
        let m = square();
        assert_eq!(m.route_cost(&[0, 1, 3, 2, 0]).unwrap(), 80.0);
        assert_eq!(m.route_cost(&[0]).unwrap(), 0.0);
        assert!(m.route_cost(&[0, 5, 0]).is_err());
    }

    #[test]
    fn symmetry_and_integrality() {
        let m = square();
        assert!(m.is_symmetric());
        assert!(m.is_integral());

        let skew = DistanceMatrix::from_rows(&[vec![0.0, 1.5], vec![2.0, 0.0]]).unwrap();
        assert!(!skew.is_symmetric());
        assert!(!skew.is_integral());

        let holes =
            DistanceMatrix::from_rows(&[vec![0.0, DistanceMatrix::NO_EDGE], vec![2.0, 0.0]])
                .unwrap();
        assert!(holes.is_integral());
    }

    #[test]
    fn points_must_be_finite() {
        let points = [Point { x: 0.0, y: 0.0 }, Point { x: f64::NAN, y: 1.0 }];
        let err = DistanceMatrix::from_points(&points, Metric::Euclidean).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn row_view() {
        let m = square();
        assert_eq!(m.row(2).unwrap(), &[15.0, 35.0, 0.0, 30.0]);
        assert!(m.row(4).is_err());
    }
}
