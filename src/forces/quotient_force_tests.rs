use approx::{assert_abs_diff_eq, assert_relative_eq};
use crate::assert_float_eq;
use crate::forces::{all_pairs, edge_pairs, ForceLaw, QuotientForce};
use crate::graph::{DistanceMatrix, GraphNode};
use crate::spatial::Point;
use crate::utils::{DEFAULT_ATTRACTIVE_FORCE, DEFAULT_REPULSIVE_FORCE};

fn two_linked_nodes() -> (Vec<GraphNode>, DistanceMatrix) {
    let nodes = vec![GraphNode::new(0.0, 0.0, 0), GraphNode::new(2.0, 1.0, 1)];
    let matrix = DistanceMatrix::build(2, &[(0, 1)]).expect("valid edges");
    (nodes, matrix)
}

#[test]
fn test_attractive_force_on_two_nodes() {
    let (nodes, matrix) = two_linked_nodes();
    let forces = DEFAULT_ATTRACTIVE_FORCE.accumulate(&nodes, &edge_pairs(&[(0, 1)]), &matrix);
    // d = sqrt(5), magnitude d^2 / 1 = 5 along (2, 1) / sqrt(5).
    let d = 5.0_f64.sqrt();
    assert_relative_eq!(forces[0].0, 5.0 * 2.0 / d, epsilon = 1e-12);
    assert_relative_eq!(forces[0].1, 5.0 * 1.0 / d, epsilon = 1e-12);
    assert_float_eq(forces[0].0, 4.472, 1e-3, None);
    assert_float_eq(forces[0].1, 2.236, 1e-3, None);
}

#[test]
fn test_repulsive_force_on_two_nodes() {
    let (nodes, matrix) = two_linked_nodes();
    let forces = DEFAULT_REPULSIVE_FORCE.accumulate(&nodes, &all_pairs(2), &matrix);
    // magnitude -0.1 / sqrt(5) along (2, 1) / sqrt(5).
    assert_relative_eq!(forces[0].0, -0.04, epsilon = 1e-12);
    assert_relative_eq!(forces[0].1, -0.02, epsilon = 1e-12);
    assert_relative_eq!(forces[1].0, 0.04, epsilon = 1e-12);
    assert_relative_eq!(forces[1].1, 0.02, epsilon = 1e-12);
}

#[test]
fn test_edge_forces_obey_third_law_exactly() {
    let nodes = vec![
        GraphNode::new(0.3, 1.7, 0),
        GraphNode::new(4.1, -2.9, 1),
        GraphNode::new(-1.3, 0.2, 2),
    ];
    let edges = [(0, 1), (1, 2)];
    let matrix = DistanceMatrix::build(3, &edges).expect("valid edges");
    for law in [QuotientForce::new(1.0, 2.0, 1.0), QuotientForce::new(1.0, 2.0, 0.0)] {
        for &(a, b) in &edges {
            let forward = law.pair_force(&nodes[a].point, &nodes[b].point, matrix.get(a, b));
            let backward = law.pair_force(&nodes[b].point, &nodes[a].point, matrix.get(b, a));
            assert_eq!(forward.0, -backward.0);
            assert_eq!(forward.1, -backward.1);
        }
        let forces = law.accumulate(&nodes, &edge_pairs(&edges), &matrix);
        let net_x: f64 = forces.iter().map(|f| f.0).sum();
        let net_y: f64 = forces.iter().map(|f| f.1).sum();
        assert_abs_diff_eq!(net_x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(net_y, 0.0, epsilon = 1e-9);
    }
}

#[test]
fn test_graph_distance_exponent() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(3.0, 4.0);
    let scaled = QuotientForce::new(1.0, 2.0, 1.0);
    let unscaled = QuotientForce::new(1.0, 2.0, 0.0);
    // Three hops apart: beta = 1 divides by three, beta = 0 ignores hops.
    assert_relative_eq!(scaled.pair_force(&a, &b, Some(3)).0, 25.0 / 3.0 * 0.6, epsilon = 1e-12);
    assert_relative_eq!(unscaled.pair_force(&a, &b, Some(3)).0, 25.0 * 0.6, epsilon = 1e-12);
}

#[test]
fn test_unreachable_pairs_never_produce_nan() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(1.0, 1.0);
    for beta in [1.0, 2.0, -1.0] {
        let law = QuotientForce::new(1.0, 2.0, beta);
        assert_eq!(law.pair_force(&a, &b, None), (0.0, 0.0));
    }
    // Repulsion ignores graph distance, so it still separates components.
    let (fx, fy) = DEFAULT_REPULSIVE_FORCE.pair_force(&a, &b, None);
    assert!(fx < 0.0 && fy < 0.0);
    assert!(fx.is_finite() && fy.is_finite());
}

#[test]
fn test_disconnected_components_only_repel() {
    let nodes = vec![GraphNode::new(1.0, 1.0, 0), GraphNode::new(2.0, 1.0, 1), GraphNode::new(1.0, 3.0, 2)];
    let matrix = DistanceMatrix::build(3, &[(0, 1)]).expect("valid edges");
    let pairs = all_pairs(3);
    let attraction = QuotientForce::new(1.0, 2.0, 1.0).accumulate(&nodes, &pairs, &matrix);
    assert_eq!(attraction[2], (0.0, 0.0));
    let repulsion = DEFAULT_REPULSIVE_FORCE.accumulate(&nodes, &pairs, &matrix);
    assert!(repulsion.iter().all(|f| f.0.is_finite() && f.1.is_finite()));
    assert!(repulsion[2].1 > 0.0);
}

#[test]
fn test_coincident_points_use_distance_floor() {
    let a = Point::new(1.0, 1.0);
    let forces = DEFAULT_REPULSIVE_FORCE.pair_force(&a, &a, Some(1));
    assert_eq!(forces, (0.0, 0.0));
}

#[test]
fn test_self_loops_and_unknown_nodes_contribute_nothing() {
    let nodes = vec![GraphNode::new(0.0, 0.0, 0), GraphNode::new(1.0, 0.0, 1)];
    let matrix = DistanceMatrix::build(2, &[(0, 0)]).expect("valid edges");
    let forces = DEFAULT_ATTRACTIVE_FORCE.accumulate(&nodes, &[(0, 0), (1, 7)], &matrix);
    assert_eq!(forces, vec![(0.0, 0.0), (0.0, 0.0)]);
}

#[test]
fn test_duplicate_edges_double_count() {
    let (nodes, matrix) = two_linked_nodes();
    let once = DEFAULT_ATTRACTIVE_FORCE.accumulate(&nodes, &edge_pairs(&[(0, 1)]), &matrix);
    let twice = DEFAULT_ATTRACTIVE_FORCE.accumulate(&nodes, &edge_pairs(&[(0, 1), (1, 0)]), &matrix);
    assert_relative_eq!(twice[0].0, 2.0 * once[0].0, epsilon = 1e-12);
    assert_relative_eq!(twice[1].1, 2.0 * once[1].1, epsilon = 1e-12);
}

#[test]
fn test_pair_generation() {
    assert!(all_pairs(0).is_empty());
    assert!(all_pairs(1).is_empty());
    assert_eq!(all_pairs(10).len(), 90);
    assert_eq!(edge_pairs(&[(2, 2)]), vec![(2, 2), (2, 2)]);
    assert!(QuotientForce::new(1.0, 2.0, 1.0).is_attractive());
    assert!(!DEFAULT_REPULSIVE_FORCE.is_attractive());
}
