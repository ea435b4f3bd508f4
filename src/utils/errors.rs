use std::fmt;
use std::error::Error;

/// Represents errors that can occur while configuring or running a layout.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// An edge or pair references a node index that does not exist.
    NodeIndexOutOfRange { index: usize, node_count: usize },
    /// The number of initial positions does not match the number of nodes.
    PositionCountMismatch { expected: usize, actual: usize },
    /// The layout domain has a negative or non-finite extent.
    InvalidDomain,
    /// A temperature is negative or non-finite.
    InvalidTemperature(f64),
    /// A distance threshold is negative or non-finite.
    InvalidThreshold(f64),
    /// The geometric cooling factor is outside the open interval (0, 1).
    InvalidCoolingFactor(f64),
    /// An initial position contains NaN or an infinite coordinate.
    NonFinitePosition { index: usize },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LayoutError::NodeIndexOutOfRange { index, node_count } => {
                write!(f, "Node index {} is out of range for a graph of {} nodes", index, node_count)
            }
            LayoutError::PositionCountMismatch { expected, actual } => {
                write!(f, "Expected {} initial positions, got {}", expected, actual)
            }
            LayoutError::InvalidDomain => write!(f, "Invalid layout domain"),
            LayoutError::InvalidTemperature(t) => write!(f, "Invalid temperature value: {}", t),
            LayoutError::InvalidThreshold(t) => write!(f, "Invalid threshold value: {}", t),
            LayoutError::InvalidCoolingFactor(c) => write!(f, "Invalid cooling factor: {}", c),
            LayoutError::NonFinitePosition { index } => {
                write!(f, "Initial position of node {} is not finite", index)
            }
        }
    }
}

impl Error for LayoutError {}
