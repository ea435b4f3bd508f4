use crate::forces::QuotientForce;
use crate::spatial::Boundary;
use crate::utils::LayoutConfig;

/// Distance below which two inserted points are treated as one particle.
pub const DEFAULT_MERGE_THRESHOLD: f64 = 0.001;

/// Floor applied to Euclidean distances before evaluating a force law.
pub const MIN_FORCE_DISTANCE: f64 = 0.001;

/// Subdivision stops at this depth; deeper insertions merge instead.
pub const MAX_TREE_DEPTH: usize = 64;

pub const DEFAULT_ATTRACTIVE_FORCE: QuotientForce = QuotientForce {
    weight: 1.0,
    alpha: 2.0,
    beta: 1.0,
};

pub const DEFAULT_REPULSIVE_FORCE: QuotientForce = QuotientForce {
    weight: -0.1,
    alpha: -1.0,
    beta: 0.0,
};

pub const DEFAULT_LAYOUT_CONFIG: LayoutConfig = LayoutConfig {
    domain: Boundary { x: 0.0, y: 0.0, width: 400.0, height: 400.0 },
    merge_threshold: DEFAULT_MERGE_THRESHOLD,
    attractive: DEFAULT_ATTRACTIVE_FORCE,
    repulsive: DEFAULT_REPULSIVE_FORCE,
    iterations: 100,
    start_temperature: 1.0,
    stop_temperature: 0.01,
    cooling_factor: 0.99,
};
