//! All-pairs shortest path lengths (in hops) over an undirected graph.
//!
//! The matrix is computed with Floyd–Warshall in O(n³) time and O(n²)
//! memory, which caps practical layouts at a few hundred nodes. It is built
//! once per topology; changing the edge set means building a new matrix.
use log::debug;

use super::topology::validate_edges;
use crate::graph::Graph;
use crate::utils::LayoutError;

/// Symmetric hop-distance matrix. `None` marks an unreachable pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceMatrix {
    size: usize,
    distances: Vec<Option<u32>>,
}

impl DistanceMatrix {
    /// Builds the matrix for `node_count` nodes joined by `edges`.
    ///
    /// Every edge has length 1 in both directions. Self-loops leave the
    /// diagonal at zero.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::NodeIndexOutOfRange` if an edge endpoint is not a
    /// valid node index.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_layout::graph::DistanceMatrix;
    ///
    /// let matrix = DistanceMatrix::build(4, &[(0, 1), (1, 2)]).expect("valid edges");
    /// assert_eq!(matrix.get(0, 2), Some(2));
    /// assert_eq!(matrix.get(2, 0), Some(2));
    /// assert_eq!(matrix.get(0, 3), None);
    /// assert_eq!(matrix.get(3, 3), Some(0));
    /// ```
    pub fn build(node_count: usize, edges: &[(usize, usize)]) -> Result<Self, LayoutError> {
        validate_edges(node_count, edges)?;
        Ok(Self::floyd_warshall(node_count, edges))
    }

    /// Builds the matrix for a graph whose edges were checked on construction.
    pub fn from_graph(graph: &Graph) -> Self {
        Self::floyd_warshall(graph.node_count(), graph.edges())
    }

    fn floyd_warshall(n: usize, edges: &[(usize, usize)]) -> Self {
        let mut distances: Vec<Option<u32>> = vec![None; n * n];
        for i in 0..n {
            distances[i * n + i] = Some(0);
        }
        for &(i, j) in edges {
            if i != j {
                distances[i * n + j] = Some(1);
                distances[j * n + i] = Some(1);
            }
        }

        for k in 0..n {
            for i in 0..n {
                let Some(ik) = distances[i * n + k] else { continue };
                for j in 0..n {
                    if let Some(kj) = distances[k * n + j] {
                        let through_k = ik.saturating_add(kj);
                        let current = &mut distances[i * n + j];
                        if current.map_or(true, |d| through_k < d) {
                            *current = Some(through_k);
                        }
                    }
                }
            }
        }

        debug!("Built {}x{} distance matrix", n, n);
        Self { size: n, distances }
    }

    /// Number of nodes (the matrix is `len() x len()`).
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Hop count between `i` and `j`, or `None` when unreachable or out of range.
    pub fn get(&self, i: usize, j: usize) -> Option<u32> {
        if i >= self.size || j >= self.size {
            return None;
        }
        self.distances[i * self.size + j]
    }

    /// Hop count as a float, with unreachable pairs mapped to infinity.
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        self.get(i, j).map_or(f64::INFINITY, f64::from)
    }

    pub fn is_reachable(&self, i: usize, j: usize) -> bool {
        self.get(i, j).is_some()
    }

    /// Rows of the matrix with unreachable pairs mapped to infinity.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.size)
            .map(|i| (0..self.size).map(|j| self.distance(i, j)).collect())
            .collect()
    }
}
