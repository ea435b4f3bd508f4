mod cooling;
mod fdp_layout;

pub use cooling::*;
pub use fdp_layout::*;

#[cfg(test)]
mod cooling_tests;
