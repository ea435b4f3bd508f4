// rs_layout_wasm/src/lib.rs
// This is the public API for the wasm wrapper of the layout library.

use wasm_bindgen::prelude::*;
use rs_layout::graph::Graph;
use rs_layout::layout::{FdpLayout, TickStatus};
use rs_layout::spatial::Boundary;
use rs_layout::utils::{LayoutConfig, LayoutError};

fn to_js(error: LayoutError) -> JsValue {
    let message = JsValue::from_str(&error.to_string());
    web_sys::console::error_1(&message);
    message
}

/// Pairs up a flat `[a0, b0, a1, b1, ...]` array, rejecting odd lengths.
fn pairs<T: Copy>(flat: &[T], name: &str) -> Result<Vec<(T, T)>, String> {
    if flat.len() % 2 != 0 {
        return Err(format!("Expected an even number of values in {}, got {}", name, flat.len()));
    }
    Ok(flat.chunks_exact(2).map(|c| (c[0], c[1])).collect())
}

#[wasm_bindgen]
pub struct WasmLayout {
    layout: FdpLayout,
}

#[wasm_bindgen]
impl WasmLayout {
    /// `edges` holds index pairs and `positions` holds `x, y` pairs, both flattened.
    #[wasm_bindgen(constructor)]
    pub fn new(node_count: usize, edges: Vec<u32>, positions: Vec<f64>, width: f64, height: f64) -> Result<WasmLayout, JsValue> {
        let edges = pairs(&edges, "edges")
            .map_err(|e| JsValue::from_str(&e))?
            .into_iter()
            .map(|(a, b)| (a as usize, b as usize))
            .collect();
        let graph = Graph::new(node_count, edges).map_err(to_js)?;
        let config = LayoutConfig::default().with_domain(Boundary::new(0.0, 0.0, width, height));
        let positions = pairs(&positions, "positions").map_err(|e| JsValue::from_str(&e))?;
        let layout = FdpLayout::new(&graph, &positions, config).map_err(to_js)?;
        Ok(Self { layout })
    }

    #[wasm_bindgen]
    pub fn step(&mut self, temperature: f64) -> Result<f64, JsValue> {
        self.layout.step(temperature).map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn run(&mut self, iterations: usize) -> Result<usize, JsValue> {
        self.layout.run(iterations).map(|report| report.steps).map_err(to_js)
    }

    /// Returns `true` while the layout is still cooling.
    #[wasm_bindgen]
    pub fn tick(&mut self) -> Result<bool, JsValue> {
        self.layout
            .tick()
            .map(|status| status == TickStatus::Running)
            .map_err(to_js)
    }

    #[wasm_bindgen(getter)]
    pub fn temperature(&self) -> f64 {
        self.layout.temperature()
    }

    /// Node positions flattened as `[x0, y0, x1, y1, ...]`.
    #[wasm_bindgen]
    pub fn positions(&self) -> Vec<f64> {
        self.layout
            .positions()
            .into_iter()
            .flat_map(|(x, y)| [x, y])
            .collect()
    }

    /// Quadtree of the current positions, eight values per node in traversal order:
    /// `x, y, width, height, is_leaf, px, py, mass`. `px, py, mass` hold the leaf
    /// point or the internal center of mass and are NaN for empty leaves.
    #[wasm_bindgen]
    pub fn tree(&self) -> Vec<f64> {
        let tree = self.layout.spatial_index();
        tree.traverse()
            .flat_map(|view| {
                let b = view.boundary;
                let summary = view.point.or(view.center_of_mass);
                let (px, py, mass) = summary.map_or((f64::NAN, f64::NAN, f64::NAN), |p| (p.x, p.y, p.mass));
                let is_leaf = if view.is_leaf { 1.0 } else { 0.0 };
                [b.x, b.y, b.width, b.height, is_leaf, px, py, mass]
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_splits_even_input() {
        assert_eq!(pairs(&[1, 2, 3, 4], "edges"), Ok(vec![(1, 2), (3, 4)]));
        assert_eq!(pairs::<f64>(&[], "positions"), Ok(vec![]));
    }

    #[test]
    fn test_pairs_rejects_odd_input() {
        let err = pairs(&[0, 1, 1], "edges").unwrap_err();
        assert_eq!(err, "Expected an even number of values in edges, got 3");
        assert!(pairs(&[0.0, 0.0, 1.0, 1.0, 9.0], "positions").is_err());
    }
}
