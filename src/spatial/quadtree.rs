//! Barnes-Hut quadtree over a rectangular domain.
//!
//! Nodes live in a single arena (`Vec`) and refer to their children by index,
//! so the whole tree is one contiguous allocation with no parent/child
//! ownership cycles. Every leaf holds at most one point; inserting a second,
//! distinct point into an occupied leaf subdivides it into four quadrants.
//! Points closer than the merge threshold are folded into the stored point by
//! adding their masses. Each node keeps the center of mass of its subtree,
//! refreshed on the way back up from every insertion.
//!
//! # Example
//!
//! ```
//! use rs_layout::spatial::{Boundary, InsertOutcome, Point, QuadTree};
//!
//! let mut tree = QuadTree::new(Boundary::new(0.0, 0.0, 400.0, 400.0));
//! assert_eq!(tree.insert(Point::new(100.0, 100.0)), InsertOutcome::Inserted);
//! assert_eq!(tree.insert(Point::new(300.0, 300.0)), InsertOutcome::Inserted);
//! assert_eq!(tree.insert(Point::new(500.0, 500.0)), InsertOutcome::OutOfBounds);
//!
//! let com = tree.center_of_mass().expect("tree is not empty");
//! assert_eq!((com.x, com.y, com.mass), (200.0, 200.0, 2.0));
//! ```
use std::fmt;

use log::{debug, warn};

use crate::spatial::{Boundary, Point, Quadrant};
use crate::utils::{DEFAULT_MERGE_THRESHOLD, MAX_TREE_DEPTH};

/// Index of a node inside a `QuadTree` arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Result of inserting a point into a `QuadTree`.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The point now occupies its own leaf.
    Inserted,
    /// The point was closer than the merge threshold to a stored point and its
    /// mass was added to that point.
    Merged,
    /// The point lies outside the root boundary and was discarded.
    OutOfBounds,
}

impl InsertOutcome {
    /// True unless the point was discarded.
    pub fn is_stored(self) -> bool {
        !matches!(self, InsertOutcome::OutOfBounds)
    }
}

/// A single node of the arena.
#[derive(Clone, Debug)]
pub struct QuadTreeNode {
    boundary: Boundary,
    point: Option<Point>,
    children: [Option<NodeId>; 4],
    center_of_mass: Option<Point>,
    depth: usize,
}

impl QuadTreeNode {
    fn empty(boundary: Boundary, depth: usize) -> Self {
        Self {
            boundary,
            point: None,
            children: [None; 4],
            center_of_mass: None,
            depth,
        }
    }

    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// The stored point of an occupied leaf. Always `None` for internal nodes.
    pub fn point(&self) -> Option<Point> {
        self.point
    }

    pub fn child(&self, quadrant: Quadrant) -> Option<NodeId> {
        self.children[quadrant.index()]
    }

    /// Existing children paired with their quadrant, in `Quadrant::ALL` order.
    pub fn children(&self) -> impl Iterator<Item = (Quadrant, NodeId)> + '_ {
        Quadrant::ALL
            .iter()
            .filter_map(move |&q| self.children[q.index()].map(|id| (q, id)))
    }

    pub fn center_of_mass(&self) -> Option<Point> {
        self.center_of_mass
    }

    pub fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}

/// What a depth-first traversal reports for each visited node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeView {
    pub id: NodeId,
    pub depth: usize,
    /// Slot in the parent; `None` for the root.
    pub quadrant: Option<Quadrant>,
    pub boundary: Boundary,
    pub is_leaf: bool,
    /// Set only for occupied leaves.
    pub point: Option<Point>,
    /// Set only for non-empty internal nodes.
    pub center_of_mass: Option<Point>,
}

/// Arena-backed Barnes-Hut quadtree.
#[derive(Clone, Debug)]
pub struct QuadTree {
    nodes: Vec<QuadTreeNode>,
    merge_threshold: f64,
}

impl QuadTree {
    pub const ROOT: NodeId = NodeId(0);

    /// Creates an empty tree covering `boundary` with the default merge threshold.
    pub fn new(boundary: Boundary) -> Self {
        Self::with_merge_threshold(boundary, DEFAULT_MERGE_THRESHOLD)
    }

    /// Creates an empty tree with a custom merge threshold.
    ///
    /// A negative or NaN threshold is treated as zero, in which case only
    /// exactly coincident points merge.
    pub fn with_merge_threshold(boundary: Boundary, merge_threshold: f64) -> Self {
        Self {
            nodes: vec![QuadTreeNode::empty(boundary, 0)],
            merge_threshold: if merge_threshold > 0.0 { merge_threshold } else { 0.0 },
        }
    }

    /// Builds a tree from `points`, discarding (and logging) any outside `boundary`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_layout::spatial::{Boundary, Point, QuadTree};
    ///
    /// let points = [Point::new(1.0, 1.0), Point::new(3.0, 3.0), Point::new(9.0, 9.0)];
    /// let tree = QuadTree::from_points(Boundary::new(0.0, 0.0, 4.0, 4.0), points);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn from_points<I>(boundary: Boundary, points: I) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        let mut tree = Self::new(boundary);
        let discarded = points
            .into_iter()
            .filter(|&p| !tree.insert(p).is_stored())
            .count();
        debug!("Built quadtree with {} points discarded", discarded);
        tree
    }

    pub fn boundary(&self) -> Boundary {
        self.nodes[Self::ROOT.0].boundary
    }

    pub fn merge_threshold(&self) -> f64 {
        self.merge_threshold
    }

    pub fn root(&self) -> &QuadTreeNode {
        &self.nodes[Self::ROOT.0]
    }

    pub fn node(&self, id: NodeId) -> Option<&QuadTreeNode> {
        self.nodes.get(id.0)
    }

    /// Number of nodes in the arena, empty leaves included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of stored (possibly merged) particles.
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| n.point.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.iter().all(|n| n.point.is_none())
    }

    /// Depth of the deepest node; a lone root has depth 0.
    pub fn depth(&self) -> usize {
        self.nodes.iter().map(|n| n.depth).max().unwrap_or(0)
    }

    pub fn center_of_mass(&self) -> Option<Point> {
        self.root().center_of_mass
    }

    /// Sum of `|mass|` over stored particles, whatever the tree shape.
    pub fn total_mass(&self) -> f64 {
        self.points().map(|p| p.mass.abs()).sum()
    }

    /// Removes every point, keeping the root boundary and threshold.
    pub fn clear(&mut self) {
        let boundary = self.boundary();
        self.nodes.clear();
        self.nodes.push(QuadTreeNode::empty(boundary, 0));
    }

    /// Inserts `point`, merging it into a stored point closer than the merge
    /// threshold, subdividing otherwise.
    ///
    /// Points outside the root boundary are not stored; the returned
    /// `InsertOutcome::OutOfBounds` lets callers audit them.
    pub fn insert(&mut self, point: Point) -> InsertOutcome {
        if !self.boundary().contains(&point) {
            warn!("Discarding point ({}, {}) outside the root boundary", point.x, point.y);
            return InsertOutcome::OutOfBounds;
        }
        self.insert_at(Self::ROOT, point)
    }

    fn insert_at(&mut self, id: NodeId, point: Point) -> InsertOutcome {
        let outcome = if !self.nodes[id.0].is_leaf() {
            let child = self.child_for(id, &point);
            self.insert_at(child, point)
        } else {
            match self.nodes[id.0].point {
                None => {
                    self.nodes[id.0].point = Some(point);
                    InsertOutcome::Inserted
                }
                Some(existing) => {
                    let dist = existing.distance_to(&point);
                    let depth = self.nodes[id.0].depth;
                    if dist < self.merge_threshold || dist == 0.0 || depth >= MAX_TREE_DEPTH {
                        if depth >= MAX_TREE_DEPTH && dist >= self.merge_threshold {
                            warn!(
                                "Maximum tree depth {} reached; merging points {} apart",
                                MAX_TREE_DEPTH, dist
                            );
                        }
                        if let Some(stored) = self.nodes[id.0].point.as_mut() {
                            stored.mass += point.mass;
                            debug!(
                                "Merged point ({}, {}) into ({}, {}), mass now {}",
                                point.x, point.y, stored.x, stored.y, stored.mass
                            );
                        }
                        InsertOutcome::Merged
                    } else {
                        self.subdivide(id);
                        self.nodes[id.0].point = None;
                        let existing_child = self.child_for(id, &existing);
                        let reinserted = self.insert_at(existing_child, existing);
                        debug_assert_eq!(reinserted, InsertOutcome::Inserted);
                        let child = self.child_for(id, &point);
                        self.insert_at(child, point)
                    }
                }
            }
        };
        self.update_center_of_mass(id);
        outcome
    }

    /// Child slot for `point` below an internal node.
    fn child_for(&self, id: NodeId, point: &Point) -> NodeId {
        let node = &self.nodes[id.0];
        let quadrant = node.boundary.quadrant_of(point.x, point.y);
        match node.children[quadrant.index()] {
            Some(child) => child,
            None => id,
        }
    }

    fn subdivide(&mut self, id: NodeId) {
        let (boundary, depth) = {
            let node = &self.nodes[id.0];
            (node.boundary, node.depth)
        };
        debug!("Subdividing node {} at depth {}", id.0, depth);
        for (slot, quad) in boundary.subdivide().into_iter().enumerate() {
            let child = NodeId(self.nodes.len());
            self.nodes.push(QuadTreeNode::empty(quad, depth + 1));
            self.nodes[id.0].children[slot] = Some(child);
        }
    }

    fn update_center_of_mass(&mut self, id: NodeId) {
        let node = &self.nodes[id.0];
        let center = if node.is_leaf() {
            node.point
        } else {
            let mut total = 0.0;
            let mut weighted_x = 0.0;
            let mut weighted_y = 0.0;
            for child in node.children.iter().flatten() {
                if let Some(c) = self.nodes[child.0].center_of_mass {
                    let w = c.mass.abs();
                    total += w;
                    weighted_x += c.x * w;
                    weighted_y += c.y * w;
                }
            }
            if total > 0.0 {
                Some(Point::with_mass(weighted_x / total, weighted_y / total, total))
            } else {
                None
            }
        };
        self.nodes[id.0].center_of_mass = center;
    }

    /// Depth-first, pre-order walk over every node (children in TL, TR, BL, BR order).
    pub fn traverse(&self) -> Traversal<'_> {
        Traversal {
            tree: self,
            stack: vec![(Self::ROOT, None)],
        }
    }

    /// Stored particles, in traversal order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.traverse().filter_map(|view| view.point)
    }

    fn fmt_node(
        &self,
        f: &mut fmt::Formatter<'_>,
        id: NodeId,
        prefix: &str,
        is_last: bool,
        name: &str,
    ) -> fmt::Result {
        let node = &self.nodes[id.0];
        let connector = if is_last { "└── " } else { "├── " };
        let b = node.boundary;
        write!(f, "{}{}{} @ [{}, {}, {}x{}]", prefix, connector, name, b.x, b.y, b.width, b.height)?;
        let summary = if node.is_leaf() { ("Leaf Point", node.point) } else { ("Center of Mass", node.center_of_mass) };
        match summary {
            (label, Some(p)) => writeln!(f, " | {}: ({}, {}) m={}", label, p.x, p.y, p.mass)?,
            (label, None) => writeln!(f, " | {}: none", label)?,
        }

        let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
        let children: Vec<(Quadrant, NodeId)> = node.children().collect();
        let count = children.len();
        for (i, (quadrant, child)) in children.into_iter().enumerate() {
            self.fmt_node(f, child, &child_prefix, i + 1 == count, quadrant.label())?;
        }
        Ok(())
    }
}

impl fmt::Display for QuadTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_node(f, Self::ROOT, "", true, "Root")
    }
}

/// Iterator returned by `QuadTree::traverse`.
pub struct Traversal<'a> {
    tree: &'a QuadTree,
    stack: Vec<(NodeId, Option<Quadrant>)>,
}

impl<'a> Iterator for Traversal<'a> {
    type Item = NodeView;

    fn next(&mut self) -> Option<Self::Item> {
        let (id, quadrant) = self.stack.pop()?;
        let node = &self.tree.nodes[id.0];
        // Reverse push keeps TL first when popping.
        for q in Quadrant::ALL.iter().rev() {
            if let Some(child) = node.children[q.index()] {
                self.stack.push((child, Some(*q)));
            }
        }
        let is_leaf = node.is_leaf();
        Some(NodeView {
            id,
            depth: node.depth,
            quadrant,
            boundary: node.boundary,
            is_leaf,
            point: if is_leaf { node.point } else { None },
            center_of_mass: if is_leaf { None } else { node.center_of_mass },
        })
    }
}
