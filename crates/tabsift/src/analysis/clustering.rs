//! K-means clustering over two numeric columns.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SiftError};

/// A 2D data point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// One cluster: its member points and centroid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    pub points: Vec<Point>,
    pub centroid: Point,
}

/// Result of a k-means run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterResult {
    pub k: usize,
    pub clusters: Vec<Cluster>,
    /// The full input point sequence, for chart overlays.
    pub points: Vec<Point>,
}

/// K-means model configuration.
///
/// The random source is seedable for reproducible runs; without a seed the
/// generator is seeded from the system at the process boundary.
#[derive(Debug, Clone)]
pub struct KMeans {
    k: usize,
    max_iterations: usize,
    tolerance: f64,
    seed: Option<u64>,
}

impl KMeans {
    /// Create a model with the given cluster count and default settings
    /// (100 iterations, 0.001 per-coordinate convergence tolerance).
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iterations: 100,
            tolerance: 1e-3,
            seed: None,
        }
    }

    /// Sets the iteration cap.
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the per-coordinate convergence tolerance.
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the random seed for centroid initialization.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Run Lloyd-style k-means over the points.
    ///
    /// Centroids initialize to randomly sampled input points (duplicates
    /// possible). Each round assigns every point to its nearest centroid
    /// (first minimum wins on ties) and recomputes centroids as coordinate
    /// means. A cluster left with no members has its centroid reseeded to a
    /// random input point and the round does not count as converged.
    pub fn fit(&self, points: &[Point]) -> Result<ClusterResult> {
        if self.k == 0 {
            return Err(SiftError::Config(
                "cluster count must be at least 1".to_string(),
            ));
        }
        if points.len() < self.k {
            return Err(SiftError::ClusterCount {
                points: points.len(),
                k: self.k,
            });
        }

        let mut rng = match self.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };

        let mut centroids: Vec<Point> = (0..self.k)
            .map(|_| points[rng.usize(0..points.len())])
            .collect();
        let mut members: Vec<Vec<Point>> = vec![Vec::new(); self.k];

        for _ in 0..self.max_iterations {
            for cluster in &mut members {
                cluster.clear();
            }

            for &point in points {
                let mut nearest = 0;
                let mut nearest_distance = f64::INFINITY;
                for (index, centroid) in centroids.iter().enumerate() {
                    let distance = point.distance(centroid);
                    if distance < nearest_distance {
                        nearest_distance = distance;
                        nearest = index;
                    }
                }
                members[nearest].push(point);
            }

            let mut converged = true;
            for (index, cluster) in members.iter().enumerate() {
                if cluster.is_empty() {
                    centroids[index] = points[rng.usize(0..points.len())];
                    converged = false;
                    continue;
                }

                let count = cluster.len() as f64;
                let centroid = Point::new(
                    cluster.iter().map(|p| p.x).sum::<f64>() / count,
                    cluster.iter().map(|p| p.y).sum::<f64>() / count,
                );
                if (centroid.x - centroids[index].x).abs() > self.tolerance
                    || (centroid.y - centroids[index].y).abs() > self.tolerance
                {
                    converged = false;
                }
                centroids[index] = centroid;
            }

            if converged {
                break;
            }
        }

        let clusters = members
            .into_iter()
            .zip(centroids)
            .map(|(points, centroid)| Cluster { points, centroid })
            .collect();

        Ok(ClusterResult {
            k: self.k,
            clusters,
            points: points.to_vec(),
        })
    }
}
