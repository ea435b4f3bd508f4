mod primitives;
mod quadtree;

pub use primitives::*;
pub use quadtree::*;
