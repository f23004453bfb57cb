//! Dense distance matrix.

use super::haversine_km;
use crate::models::{Coordinate, Spot};

/// A dense n×n distance matrix in kilometers, stored in row-major order.
///
/// Built from a start position and a spot list: index 0 is the start and
/// index `i + 1` is spot `i`.
///
/// # Examples
///
/// ```
/// use spot_routing::models::{Coordinate, Spot};
/// use spot_routing::distance::DistanceMatrix;
///
/// let start = Coordinate::new(0.0, 0.0).unwrap();
/// let spots = vec![
///     Spot::new("A", Coordinate::new(0.0, 1.0).unwrap()),
///     Spot::new("B", Coordinate::new(0.0, 2.0).unwrap()),
/// ];
/// let dm = DistanceMatrix::from_start_and_spots(start, &spots);
/// assert_eq!(dm.size(), 3);
/// assert!((dm.get(0, 2) - 2.0 * dm.get(0, 1)).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes haversine distances between every pair of coordinates.
    pub fn from_coordinates(points: &[Coordinate]) -> Self {
        let n = points.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = haversine_km(&points[i], &points[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Builds the matrix for `start` followed by every spot location.
    pub fn from_start_and_spots(start: Coordinate, spots: &[Spot]) -> Self {
        let points: Vec<Coordinate> = std::iter::once(start)
            .chain(spots.iter().map(Spot::coordinate))
            .collect();
        Self::from_coordinates(&points)
    }

    #[cfg(test)]
    fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    #[cfg(test)]
    fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the nearest of `candidates` to `from`.
    ///
    /// Ties go to the candidate that appears first in `candidates`.
    /// Returns `None` if `candidates` is empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for &c in candidates {
            let d = self.get(from, c);
            if best.map_or(true, |(_, best_d)| d < best_d) {
                best = Some((c, d));
            }
        }
        best.map(|(c, _)| c)
    }
}
