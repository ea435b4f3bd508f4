//! Force-directed placement of graph nodes under a cooling schedule.
//!
//! Each step evaluates two quotient forces over the current positions:
//! attraction along every edge (both directions) and repulsion between every
//! ordered pair of distinct nodes. The summed force, scaled by the current
//! temperature, is added to each position (explicit Euler with the
//! temperature as step size, no velocity), and the result is clamped into the
//! configured domain.
//!
//! Two drivers are provided:
//! - `run` performs a fixed number of steps with the temperature falling
//!   linearly from the configured start to zero.
//! - `tick` performs one step per call with a geometric schedule and reports
//!   `TickStatus::Settled` once the temperature drops below the stop
//!   threshold, for callers that step from a frame loop.
//!
//! # Example
//!
//! ```
//! use rs_layout::graph::Graph;
//! use rs_layout::layout::FdpLayout;
//! use rs_layout::spatial::Boundary;
//! use rs_layout::utils::LayoutConfig;
//!
//! let graph = Graph::new(3, vec![(0, 1), (1, 2)]).expect("valid graph");
//! let config = LayoutConfig::default().with_domain(Boundary::new(0.0, 0.0, 4.0, 4.0));
//! let mut layout = FdpLayout::new(&graph, &[(0.5, 0.5), (3.0, 1.0), (1.0, 3.5)], config)
//!     .expect("valid layout");
//!
//! let report = layout.run(50).expect("valid run");
//! assert_eq!(report.steps, 50);
//! for (x, y) in layout.positions() {
//!     assert!((0.0..=4.0).contains(&x) && (0.0..=4.0).contains(&y));
//! }
//! ```
use log::{debug, info, warn};

use crate::forces::{all_pairs, edge_pairs, ForceLaw};
use crate::graph::{DistanceMatrix, Graph, GraphNode};
use crate::layout::{CoolingSchedule, Temperatures};
use crate::spatial::{Boundary, QuadTree};
use crate::utils::{LayoutConfig, LayoutError};

/// Summary of a completed `FdpLayout::run`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunReport {
    pub steps: usize,
    /// Temperature of the last step, zero for a complete linear run.
    pub final_temperature: f64,
    /// Largest single-step displacement of any node over the run.
    pub max_displacement: f64,
}

/// Outcome of `FdpLayout::tick`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickStatus {
    /// A step was performed and the layout is still cooling.
    Running,
    /// The temperature is below the stop threshold; positions are final.
    Settled,
}

/// Mutable layout state: node positions, fixed topology and temperature.
#[derive(Clone, Debug)]
pub struct FdpLayout {
    nodes: Vec<GraphNode>,
    edges: Vec<(usize, usize)>,
    distances: DistanceMatrix,
    attractive_pairs: Vec<(usize, usize)>,
    repulsive_pairs: Vec<(usize, usize)>,
    config: LayoutConfig,
    cooling: Temperatures,
}

impl FdpLayout {
    /// Creates a layout for `graph` with one initial position per node.
    ///
    /// The distance matrix is computed here, once; the topology cannot change
    /// afterwards.
    ///
    /// # Errors
    ///
    /// Fails if the configuration is invalid, if the number of positions
    /// differs from the node count, or if a position is not finite.
    pub fn new(graph: &Graph, positions: &[(f64, f64)], config: LayoutConfig) -> Result<Self, LayoutError> {
        config.validate()?;
        if positions.len() != graph.node_count() {
            return Err(LayoutError::PositionCountMismatch {
                expected: graph.node_count(),
                actual: positions.len(),
            });
        }
        if let Some(index) = positions.iter().position(|(x, y)| !x.is_finite() || !y.is_finite()) {
            return Err(LayoutError::NonFinitePosition { index });
        }

        let nodes = positions
            .iter()
            .enumerate()
            .map(|(index, &(x, y))| GraphNode::new(x, y, index))
            .collect();
        let edges = graph.edges().to_vec();

        Ok(Self {
            nodes,
            attractive_pairs: edge_pairs(&edges),
            repulsive_pairs: all_pairs(graph.node_count()),
            distances: DistanceMatrix::from_graph(graph),
            edges,
            cooling: geometric_schedule(&config).temperatures(),
            config,
        })
    }

    /// Creates a layout with nodes scattered uniformly over the config domain.
    pub fn with_random_positions(graph: &Graph, config: LayoutConfig) -> Result<Self, LayoutError> {
        let positions = random_positions(graph.node_count(), &config.domain);
        Self::new(graph, &positions, config)
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn node(&self, index: usize) -> Option<&GraphNode> {
        self.nodes.get(index)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Current positions, indexed by node index.
    pub fn positions(&self) -> Vec<(f64, f64)> {
        self.nodes.iter().map(GraphNode::position).collect()
    }

    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    pub fn distance_matrix(&self) -> &DistanceMatrix {
        &self.distances
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Temperature the next `tick` will use.
    pub fn temperature(&self) -> f64 {
        self.cooling.current()
    }

    /// Restarts the `tick` schedule from the configured start temperature.
    pub fn reset_temperature(&mut self) {
        self.cooling = geometric_schedule(&self.config).temperatures();
    }

    /// Pairs attracted to each other: every edge in both directions.
    pub fn attractive_pairs(&self) -> &[(usize, usize)] {
        &self.attractive_pairs
    }

    /// Pairs repelling each other: every ordered pair of distinct nodes.
    pub fn repulsive_pairs(&self) -> &[(usize, usize)] {
        &self.repulsive_pairs
    }

    /// Net force on every node at the current positions.
    pub fn compute_forces(&self) -> Vec<(f64, f64)> {
        let attraction = self.config.attractive.accumulate(&self.nodes, &self.attractive_pairs, &self.distances);
        let repulsion = self.config.repulsive.accumulate(&self.nodes, &self.repulsive_pairs, &self.distances);
        attraction
            .into_iter()
            .zip(repulsion)
            .map(|(a, r)| (a.0 + r.0, a.1 + r.1))
            .collect()
    }

    /// Advances the layout by one step at `temperature`.
    ///
    /// Returns the largest displacement of any node.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::InvalidTemperature` for negative or non-finite
    /// temperatures; positions are left untouched.
    pub fn step(&mut self, temperature: f64) -> Result<f64, LayoutError> {
        if !(temperature >= 0.0 && temperature.is_finite()) {
            return Err(LayoutError::InvalidTemperature(temperature));
        }
        if self.nodes.is_empty() {
            warn!("Layout step requested for an empty graph");
            return Ok(0.0);
        }

        let forces = self.compute_forces();
        let domain = self.config.domain;
        let mut max_displacement: f64 = 0.0;
        for (node, (fx, fy)) in self.nodes.iter_mut().zip(forces) {
            let target_x = node.point.x + fx * temperature;
            let target_y = node.point.y + fy * temperature;
            if !target_x.is_finite() || !target_y.is_finite() {
                warn!("Non-finite force on node {}; position left unchanged", node.index);
                continue;
            }
            let (x, y) = domain.clamp(target_x, target_y);
            max_displacement = max_displacement.max((x - node.point.x).hypot(y - node.point.y));
            node.point.x = x;
            node.point.y = y;
        }

        debug!("Step at temperature {:.4}: max displacement {:.6}", temperature, max_displacement);
        Ok(max_displacement)
    }

    /// Runs `iterations` steps with the temperature falling linearly from the
    /// configured start temperature to zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_layout::graph::Graph;
    /// use rs_layout::layout::FdpLayout;
    /// use rs_layout::utils::LayoutConfig;
    ///
    /// let graph = Graph::new(2, vec![(0, 1)]).expect("valid graph");
    /// let mut layout = FdpLayout::new(&graph, &[(1.0, 1.0), (3.0, 2.0)], LayoutConfig::default())
    ///     .expect("valid layout");
    /// let report = layout.run(100).expect("valid run");
    /// assert_eq!(report.steps, 100);
    /// assert_eq!(report.final_temperature, 0.0);
    /// ```
    pub fn run(&mut self, iterations: usize) -> Result<RunReport, LayoutError> {
        let schedule = CoolingSchedule::Linear {
            start: self.config.start_temperature,
            steps: iterations,
        };
        let mut report = RunReport {
            steps: 0,
            final_temperature: self.config.start_temperature,
            max_displacement: 0.0,
        };
        for temperature in schedule.temperatures() {
            let displacement = self.step(temperature)?;
            report.steps += 1;
            report.final_temperature = temperature;
            report.max_displacement = report.max_displacement.max(displacement);
        }
        info!(
            "Layout of {} nodes finished after {} steps (max displacement {:.6})",
            self.nodes.len(),
            report.steps,
            report.max_displacement
        );
        Ok(report)
    }

    /// Runs the configured number of iterations.
    pub fn run_default(&mut self) -> Result<RunReport, LayoutError> {
        self.run(self.config.iterations)
    }

    /// Performs one externally driven step.
    ///
    /// Steps at the next temperature of the geometric schedule built from the
    /// config. Once the schedule is exhausted no step is taken and
    /// `TickStatus::Settled` is returned.
    pub fn tick(&mut self) -> Result<TickStatus, LayoutError> {
        let Some(temperature) = self.cooling.peek() else {
            return Ok(TickStatus::Settled);
        };
        self.step(temperature)?;
        self.cooling.next();
        if self.cooling.peek().is_none() {
            info!("Layout settled at temperature {:.4}", self.cooling.current());
        }
        Ok(TickStatus::Running)
    }

    /// Builds a quadtree over the domain from the current node positions.
    ///
    /// Positions are only guaranteed to lie inside the domain after the first
    /// step; earlier outliers are left out of the tree.
    pub fn spatial_index(&self) -> QuadTree {
        let mut tree = QuadTree::with_merge_threshold(self.config.domain, self.config.merge_threshold);
        for node in &self.nodes {
            if !tree.insert(node.point).is_stored() {
                debug!("Node {} left out of the quadtree", node.index);
            }
        }
        tree
    }
}

fn geometric_schedule(config: &LayoutConfig) -> CoolingSchedule {
    CoolingSchedule::Geometric {
        start: config.start_temperature,
        factor: config.cooling_factor,
        stop: config.stop_temperature,
    }
}

/// Uniformly random positions inside `domain`.
pub fn random_positions(node_count: usize, domain: &Boundary) -> Vec<(f64, f64)> {
    (0..node_count)
        .map(|_| {
            (
                domain.x + rand::random::<f64>() * domain.width,
                domain.y + rand::random::<f64>() * domain.height,
            )
        })
        .collect()
}
