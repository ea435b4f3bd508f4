// demos/basic_layout.rs
// Run with `RUST_LOG=info cargo run --example basic_layout`.

use rs_layout::graph::Graph;
use rs_layout::layout::{FdpLayout, TickStatus};
use rs_layout::spatial::Boundary;
use rs_layout::utils::{LayoutConfig, LayoutError};

fn main() -> Result<(), LayoutError> {
    env_logger::init();

    // Six-node graph as adjacency lists.
    let adjacency = vec![vec![1], vec![0, 3, 4], vec![3, 5], vec![1, 2, 4], vec![1, 3], vec![2]];
    let graph = Graph::from_adjacency(&adjacency)?.deduplicated();

    let positions: Vec<(f64, f64)> = [
        (0.6897927410102785, 1.8633360657738784),
        (1.998349565808713, 2.148706089170453),
        (0.5146614361273951, 0.9543305881316088),
        (1.2990912822525318, 1.5576078551919947),
        (1.2641901566595386, 1.8782536273884058),
        (0.11634882392203322, 1.890762445560767),
    ]
    .iter()
    .map(|&(x, y)| (x * 100.0, y * 100.0))
    .collect();

    let config = LayoutConfig::default().with_domain(Boundary::new(0.0, 0.0, 400.0, 400.0));
    let mut layout = FdpLayout::new(&graph, &positions, config)?;

    // Frame-driven cooling: one tick per frame until the layout settles.
    let mut frames = 0;
    while layout.tick()? == TickStatus::Running {
        frames += 1;
    }
    println!("Settled after {} frames", frames);

    for node in layout.nodes() {
        println!("Node {}: ({:.3}, {:.3})", node.index, node.point.x, node.point.y);
    }

    println!("\nQuadtree of the final layout:");
    print!("{}", layout.spatial_index());

    // Fixed-iteration run from the same start for comparison.
    let mut fixed = FdpLayout::new(&graph, &positions, config)?;
    let report = fixed.run_default()?;
    println!(
        "\nLinear run: {} steps, max displacement {:.3}",
        report.steps, report.max_displacement
    );

    Ok(())
}
