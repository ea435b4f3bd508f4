//! Force-directed graph layout backed by a Barnes-Hut quadtree.
//!
//! - [`spatial`]: points, boundaries and the arena quadtree with center-of-mass aggregation.
//! - [`graph`]: graph topology and the Floyd–Warshall hop-distance matrix.
//! - [`forces`]: the quotient force law and pair generation.
//! - [`layout`]: the annealed layout engine.
//! - [`utils`]: configuration, defaults and errors.
pub mod utils;
pub mod spatial;
pub mod graph;
pub mod forces;
pub mod layout;

/// ### General helper function
/// - Asserts that two floating point numbers are approximately equal.
///
/// ### Arguments
///
/// * `a` - The first floating point number.
/// * `b` - The second floating point number.
/// * `epsilon` - The maximum difference between `a` and `b` for them to be considered equal.
/// * `optional_message` - An optional message to display if the assertion fails.
///
pub fn assert_float_eq(a: f64, b: f64, epsilon: f64, optional_message: Option<&str>) {
    match optional_message {
        Some(message) => assert!((a - b).abs() < epsilon, "a: {:?},\nb: {:?},\nepsilon: {:?},\n message: {:?}", a, b, epsilon, message),
        None => assert!((a - b).abs() < epsilon, "Expected {} to be approximately equal to {} (epsilon: {})", a, b, epsilon),
    }
}
