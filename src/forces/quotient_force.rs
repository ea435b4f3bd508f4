use crate::graph::{DistanceMatrix, GraphNode};
use crate::spatial::Point;
use crate::utils::MIN_FORCE_DISTANCE;

/// A pairwise force law evaluated against graph-theoretic distances.
///
/// Implementors only supply `magnitude`; direction, the distance floor and
/// per-node accumulation are shared.
pub trait ForceLaw {
    /// Signed force magnitude along the unit vector from the origin node to
    /// its partner. Positive values attract, negative values repel.
    ///
    /// `graph_distance` is `None` when the nodes lie in different components.
    fn magnitude(&self, distance: f64, graph_distance: Option<u32>) -> f64;

    /// Force exerted on `a` by `b`.
    ///
    /// The Euclidean distance is floored at `MIN_FORCE_DISTANCE`, so
    /// coincident points get a zero direction instead of a division by zero.
    fn pair_force(&self, a: &Point, b: &Point, graph_distance: Option<u32>) -> (f64, f64) {
        let dx = b.x - a.x;
        let dy = b.y - a.y;
        let d = dx.hypot(dy).max(MIN_FORCE_DISTANCE);
        let m = self.magnitude(d, graph_distance);
        (m * dx / d, m * dy / d)
    }

    /// Sums the force on every node over all `(a, b)` pairs where it is `a`.
    ///
    /// Pair entries are positions in `nodes`; the matrix is indexed by each
    /// node's `index`. Pairs of a node with itself and pairs naming missing
    /// nodes contribute nothing. Forces are one-sided: `(a, b)` moves only
    /// `a`, so symmetric behaviour needs both `(a, b)` and `(b, a)`.
    fn accumulate(
        &self,
        nodes: &[GraphNode],
        pairs: &[(usize, usize)],
        distances: &DistanceMatrix,
    ) -> Vec<(f64, f64)> {
        let mut forces = vec![(0.0, 0.0); nodes.len()];
        for &(a, b) in pairs {
            if a == b {
                continue;
            }
            let (Some(origin), Some(partner)) = (nodes.get(a), nodes.get(b)) else {
                continue;
            };
            let graph_distance = distances.get(origin.index, partner.index);
            let (fx, fy) = self.pair_force(&origin.point, &partner.point, graph_distance);
            forces[a].0 += fx;
            forces[a].1 += fy;
        }
        forces
    }
}

/// Quotient force `weight * d^alpha / g^beta`, where `d` is the Euclidean
/// distance and `g` the shortest-path distance in the graph.
///
/// # Examples
///
/// ```
/// use rs_layout::forces::{ForceLaw, QuotientForce};
///
/// let spring = QuotientForce::new(1.0, 2.0, 1.0);
/// // Two hops apart in the graph, three units apart on screen.
/// assert_eq!(spring.magnitude(3.0, Some(2)), 4.5);
/// // Different components: the graph distance imposes no pull.
/// assert_eq!(spring.magnitude(3.0, None), 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuotientForce {
    /// Coefficient; positive attracts, negative repels.
    pub weight: f64,
    /// Exponent on the Euclidean distance.
    pub alpha: f64,
    /// Exponent on the graph distance.
    pub beta: f64,
}

impl QuotientForce {
    pub const fn new(weight: f64, alpha: f64, beta: f64) -> Self {
        Self { weight, alpha, beta }
    }

    pub fn is_attractive(&self) -> bool {
        self.weight > 0.0
    }
}

impl ForceLaw for QuotientForce {
    fn magnitude(&self, distance: f64, graph_distance: Option<u32>) -> f64 {
        let graph_factor = match graph_distance {
            Some(g) => f64::from(g).powf(self.beta),
            // inf^0 is 1: a law that ignores graph distance still acts
            // across components.
            None if self.beta == 0.0 => 1.0,
            None => return 0.0,
        };
        if graph_factor == 0.0 || !graph_factor.is_finite() {
            return 0.0;
        }
        self.weight * distance.powf(self.alpha) / graph_factor
    }
}

/// Ordered pairs for attraction: every edge in both directions.
///
/// # Examples
///
/// ```
/// use rs_layout::forces::edge_pairs;
///
/// assert_eq!(edge_pairs(&[(0, 1), (1, 2)]), vec![(0, 1), (1, 0), (1, 2), (2, 1)]);
/// ```
pub fn edge_pairs(edges: &[(usize, usize)]) -> Vec<(usize, usize)> {
    edges.iter().flat_map(|&(i, j)| [(i, j), (j, i)]).collect()
}

/// Ordered pairs for repulsion: every pair of distinct nodes, both directions.
///
/// # Examples
///
/// ```
/// use rs_layout::forces::all_pairs;
///
/// assert_eq!(all_pairs(3), vec![(0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1)]);
/// ```
pub fn all_pairs(node_count: usize) -> Vec<(usize, usize)> {
    (0..node_count)
        .flat_map(|i| (0..node_count).filter(move |&j| j != i).map(move |j| (i, j)))
        .collect()
}
