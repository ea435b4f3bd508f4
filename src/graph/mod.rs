mod topology;
mod distance_matrix;

pub use topology::*;
pub use distance_matrix::*;
