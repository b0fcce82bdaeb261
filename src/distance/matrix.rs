//! Symmetric distance matrix.

use crate::error::{Result, TspError};

/// Complete symmetric weight table over cities `0..n`.
///
/// Stored row-major. The diagonal is never queried by the search and is
/// stored as zero.
///
/// # Examples
///
/// ```
/// use tsp_tabu::distance::DistanceMatrix;
///
/// let m = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, 4.0],
///     vec![1.0, 0.0, 2.0],
///     vec![4.0, 2.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(m.len(), 3);
/// assert_eq!(m.tour_length(&[0, 1, 2]).unwrap(), 7.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds a matrix from full rows, labelling cities by index in errors.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_rows_labeled(rows, |i| i.to_string())
    }

    /// Builds a matrix from full rows, using `label` to name cities in errors.
    ///
    /// Fails if there are fewer than 3 cities, the table is not square, or
    /// any off-diagonal pair is negative, non-finite, or asymmetric.
    pub fn from_rows_labeled<F>(rows: Vec<Vec<f64>>, label: F) -> Result<Self>
    where
        F: Fn(usize) -> String,
    {
        let n = rows.len();
        if n < 3 {
            return Err(TspError::TooFewCities { found: n });
        }
        for (row, r) in rows.iter().enumerate() {
            if r.len() != n {
                return Err(TspError::NonSquareMatrix {
                    row,
                    len: r.len(),
                    expected: n,
                });
            }
        }

        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let forward = rows[i][j];
                let backward = rows[j][i];
                for w in [forward, backward] {
                    if !w.is_finite() {
                        return Err(TspError::NonFiniteWeight {
                            a: label(i),
                            b: label(j),
                        });
                    }
                    if w < 0.0 {
                        return Err(TspError::NegativeWeight {
                            a: label(i),
                            b: label(j),
                            weight: w,
                        });
                    }
                }
                if forward != backward {
                    return Err(TspError::AsymmetricWeight {
                        a: label(i),
                        b: label(j),
                        forward,
                        backward,
                    });
                }
                data[i * n + j] = forward;
                data[j * n + i] = forward;
            }
        }

        Ok(Self { n, data })
    }

    /// Builds a matrix by evaluating `weight(i, j)` for every `i < j`.
    pub fn from_fn<F>(n: usize, weight: F) -> Result<Self>
    where
        F: Fn(usize, usize) -> f64,
    {
        let mut rows = vec![vec![0.0; n]; n];
        for i in 0..n {
            for j in (i + 1)..n {
                let w = weight(i, j);
                rows[i][j] = w;
                rows[j][i] = w;
            }
        }
        Self::from_rows(rows)
    }

    /// Euclidean distances between planar points.
    pub fn from_points(points: &[(f64, f64)]) -> Result<Self> {
        Self::from_fn(points.len(), |i, j| {
            let (dx, dy) = (points[i].0 - points[j].0, points[i].1 - points[j].1);
            (dx * dx + dy * dy).sqrt()
        })
    }

    /// Number of cities.
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    /// Always false for a validated matrix.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Weight of the edge between `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[inline]
    pub fn get(&self, a: usize, b: usize) -> f64 {
        assert!(a < self.n && b < self.n, "city index out of range");
        self.data[a * self.n + b]
    }

    /// Cyclic length of `tour`, including the closing edge back to the start.
    ///
    /// Fails with [`TspError::InvalidTour`] unless `tour` visits every city
    /// exactly once, or [`TspError::UnknownCity`] for an out-of-range index.
    pub fn tour_length(&self, tour: &[usize]) -> Result<f64> {
        if tour.len() != self.n {
            return Err(TspError::InvalidTour(format!(
                "expected {} cities, got {}",
                self.n,
                tour.len()
            )));
        }
        let mut seen = vec![false; self.n];
        for &city in tour {
            if city >= self.n {
                return Err(TspError::UnknownCity(city.to_string()));
            }
            if std::mem::replace(&mut seen[city], true) {
                return Err(TspError::InvalidTour(format!("city {city} visited twice")));
            }
        }
        Ok(self.cyclic_length(tour))
    }

    /// Cyclic length without validating the tour.
    pub(crate) fn cyclic_length(&self, tour: &[usize]) -> f64 {
        let n = tour.len();
        (0..n)
            .map(|k| self.data[tour[k] * self.n + tour[(k + 1) % n]])
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square4() -> DistanceMatrix {
        // 0-1=1, 0-2=4, 0-3=3, 1-2=2, 1-3=5, 2-3=1
        DistanceMatrix::from_rows(vec![
            vec![0.0, 1.0, 4.0, 3.0],
            vec![1.0, 0.0, 2.0, 5.0],
            vec![4.0, 2.0, 0.0, 1.0],
            vec![3.0, 5.0, 1.0, 0.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_tour_length_includes_closing_edge() {
        let m = square4();
        assert_eq!(m.tour_length(&[0, 1, 2, 3]).unwrap(), 1.0 + 2.0 + 1.0 + 3.0);
        assert_eq!(m.tour_length(&[0, 2, 1, 3]).unwrap(), 4.0 + 2.0 + 5.0 + 3.0);
    }

    #[test]
    fn test_tour_length_rotation_and_reversal_invariant() {
        let m = square4();
        let base = m.tour_length(&[0, 1, 3, 2]).unwrap();
        assert_eq!(m.tour_length(&[1, 3, 2, 0]).unwrap(), base);
        assert_eq!(m.tour_length(&[2, 3, 1, 0]).unwrap(), base);
    }

    #[test]
    fn test_tour_length_rejects_bad_tours() {
        let m = square4();
        assert!(matches!(
            m.tour_length(&[0, 1, 2]),
            Err(TspError::InvalidTour(_))
        ));
        assert!(matches!(
            m.tour_length(&[0, 1, 1, 2]),
            Err(TspError::InvalidTour(_))
        ));
        assert!(matches!(
            m.tour_length(&[0, 1, 2, 7]),
            Err(TspError::UnknownCity(_))
        ));
    }

    #[test]
    fn test_too_few_cities() {
        let err = DistanceMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap_err();
        assert_eq!(err, TspError::TooFewCities { found: 2 });
    }

    #[test]
    fn test_non_square() {
        let err = DistanceMatrix::from_rows(vec![
            vec![0.0, 1.0, 2.0],
            vec![1.0, 0.0],
            vec![2.0, 3.0, 0.0],
        ])
        .unwrap_err();
        assert!(matches!(err, TspError::NonSquareMatrix { row: 1, .. }));
    }

    #[test]
    fn test_asymmetric() {
        let err = DistanceMatrix::from_rows(vec![
            vec![0.0, 1.0, 2.0],
            vec![1.0, 0.0, 3.0],
            vec![2.0, 4.0, 0.0],
        ])
        .unwrap_err();
        assert!(matches!(err, TspError::AsymmetricWeight { .. }));
    }

    #[test]
    fn test_negative_and_non_finite() {
        let err = DistanceMatrix::from_fn(3, |_, _| -1.0).unwrap_err();
        assert!(matches!(err, TspError::NegativeWeight { .. }));

        let err = DistanceMatrix::from_fn(3, |_, _| f64::NAN).unwrap_err();
        assert!(matches!(err, TspError::NonFiniteWeight { .. }));
    }

    #[test]
    fn test_diagonal_ignored() {
        let m = DistanceMatrix::from_rows(vec![
            vec![9.0, 1.0, 2.0],
            vec![1.0, -5.0, 3.0],
            vec![2.0, 3.0, f64::NAN],
        ])
        .unwrap();
        assert_eq!(m.get(1, 1), 0.0);
        assert_eq!(m.get(2, 1), 3.0);
    }

    #[test]
    fn test_from_points() {
        let m = DistanceMatrix::from_points(&[(0.0, 0.0), (3.0, 4.0), (3.0, 0.0)]).unwrap();
        assert!((m.get(0, 1) - 5.0).abs() < 1e-10);
        assert!((m.tour_length(&[0, 1, 2]).unwrap() - 12.0).abs() < 1e-10);
    }
}
