use crate::spatial::Point;
use crate::utils::LayoutError;

/// A simulated particle bound to a node of the input graph.
///
/// `index` addresses the node in the edge list and the distance matrix and
/// never changes once the node is created.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphNode {
    pub point: Point,
    pub index: usize,
}

impl GraphNode {
    pub fn new(x: f64, y: f64, index: usize) -> Self {
        Self { point: Point::new(x, y), index }
    }

    pub fn position(&self) -> (f64, f64) {
        (self.point.x, self.point.y)
    }
}

/// Undirected graph topology: a node count plus a list of index pairs.
///
/// Edge direction is ignored. Self-loops and duplicate edges are kept as
/// given; see `deduplicated` to drop them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    node_count: usize,
    edges: Vec<(usize, usize)>,
}

impl Graph {
    /// Creates a graph, rejecting edges that reference missing nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_layout::graph::Graph;
    /// use rs_layout::utils::LayoutError;
    ///
    /// let path = Graph::new(3, vec![(0, 1), (1, 2)]).expect("valid graph");
    /// assert_eq!(path.edges().len(), 2);
    ///
    /// let err = Graph::new(2, vec![(0, 5)]).unwrap_err();
    /// assert_eq!(err, LayoutError::NodeIndexOutOfRange { index: 5, node_count: 2 });
    /// ```
    pub fn new(node_count: usize, edges: Vec<(usize, usize)>) -> Result<Self, LayoutError> {
        validate_edges(node_count, &edges)?;
        Ok(Self { node_count, edges })
    }

    /// Builds a graph from adjacency lists, one edge per listed neighbour.
    ///
    /// Lists that name every edge from both ends yield each edge twice, which
    /// doubles its attraction during layout.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_layout::graph::Graph;
    ///
    /// let graph = Graph::from_adjacency(&[vec![1], vec![0, 2], vec![1]]).expect("valid graph");
    /// assert_eq!(graph.node_count(), 3);
    /// assert_eq!(graph.edges(), &[(0, 1), (1, 0), (1, 2), (2, 1)]);
    /// ```
    pub fn from_adjacency(adjacency: &[Vec<usize>]) -> Result<Self, LayoutError> {
        let edges = adjacency
            .iter()
            .enumerate()
            .flat_map(|(i, neighbours)| neighbours.iter().map(move |&j| (i, j)))
            .collect();
        Self::new(adjacency.len(), edges)
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Copy of the graph with each undirected edge listed once as `(low, high)`
    /// and self-loops removed.
    pub fn deduplicated(&self) -> Self {
        let mut edges: Vec<(usize, usize)> = self
            .edges
            .iter()
            .filter(|(i, j)| i != j)
            .map(|&(i, j)| if i < j { (i, j) } else { (j, i) })
            .collect();
        edges.sort_unstable();
        edges.dedup();
        Self { node_count: self.node_count, edges }
    }
}

/// Fails on the first edge endpoint that is not below `node_count`.
pub(crate) fn validate_edges(node_count: usize, edges: &[(usize, usize)]) -> Result<(), LayoutError> {
    for &(i, j) in edges {
        for index in [i, j] {
            if index >= node_count {
                return Err(LayoutError::NodeIndexOutOfRange { index, node_count });
            }
        }
    }
    Ok(())
}
