// src/utils/layout_config.rs
use crate::forces::QuotientForce;
use crate::spatial::Boundary;
use crate::utils::{
    DEFAULT_LAYOUT_CONFIG,
    errors::LayoutError
};

/// Tunable parameters of a force-directed layout run.
///
/// Every value the engine depends on lives here; nothing is read from globals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Region node positions are clamped into after every step.
    pub domain: Boundary,
    /// Merge distance used when building a quadtree from the layout.
    pub merge_threshold: f64,
    pub attractive: QuotientForce,
    pub repulsive: QuotientForce,
    /// Number of steps performed by `FdpLayout::run_default`.
    pub iterations: usize,
    pub start_temperature: f64,
    /// `FdpLayout::tick` settles once the temperature drops below this.
    pub stop_temperature: f64,
    /// Per-tick multiplier of the externally driven cooling schedule.
    pub cooling_factor: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        DEFAULT_LAYOUT_CONFIG
    }
}

impl LayoutConfig {
    /// Creates a configuration, taking every unspecified value from the defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_layout::spatial::Boundary;
    /// use rs_layout::utils::LayoutConfig;
    ///
    /// let config = LayoutConfig::new(
    ///     Some(Boundary::new(0.0, 0.0, 10.0, 10.0)),
    ///     None, None, None, Some(250), None, None, None,
    /// );
    /// assert_eq!(config.iterations, 250);
    /// assert_eq!(config.start_temperature, 1.0);
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        domain: Option<Boundary>,
        merge_threshold: Option<f64>,
        attractive: Option<QuotientForce>,
        repulsive: Option<QuotientForce>,
        iterations: Option<usize>,
        start_temperature: Option<f64>,
        stop_temperature: Option<f64>,
        cooling_factor: Option<f64>,
    ) -> Self {
        let default = DEFAULT_LAYOUT_CONFIG;
        Self {
            domain: domain.unwrap_or(default.domain),
            merge_threshold: merge_threshold.unwrap_or(default.merge_threshold),
            attractive: attractive.unwrap_or(default.attractive),
            repulsive: repulsive.unwrap_or(default.repulsive),
            iterations: iterations.unwrap_or(default.iterations),
            start_temperature: start_temperature.unwrap_or(default.start_temperature),
            stop_temperature: stop_temperature.unwrap_or(default.stop_temperature),
            cooling_factor: cooling_factor.unwrap_or(default.cooling_factor),
        }
    }

    /// Default configuration whose domain is the square `[0, sqrt(n)]²`.
    ///
    /// This keeps the expected node density constant as graphs grow.
    pub fn for_node_count(node_count: usize) -> Self {
        let side = (node_count as f64).sqrt();
        Self {
            domain: Boundary::new(0.0, 0.0, side, side),
            ..DEFAULT_LAYOUT_CONFIG
        }
    }

    pub fn with_domain(mut self, domain: Boundary) -> Self {
        self.domain = domain;
        self
    }

    pub fn with_forces(mut self, attractive: QuotientForce, repulsive: QuotientForce) -> Self {
        self.attractive = attractive;
        self.repulsive = repulsive;
        self
    }

    /// Checks that every parameter is usable by the engine.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if !self.domain.is_valid() { return Err(LayoutError::InvalidDomain); }
        if !(self.merge_threshold >= 0.0 && self.merge_threshold.is_finite()) {
            return Err(LayoutError::InvalidThreshold(self.merge_threshold));
        }
        if !(self.start_temperature > 0.0 && self.start_temperature.is_finite()) {
            return Err(LayoutError::InvalidTemperature(self.start_temperature));
        }
        if !(self.stop_temperature >= 0.0 && self.stop_temperature.is_finite()) {
            return Err(LayoutError::InvalidThreshold(self.stop_temperature));
        }
        if !(self.cooling_factor > 0.0 && self.cooling_factor < 1.0) {
            return Err(LayoutError::InvalidCoolingFactor(self.cooling_factor));
        }
        Ok(())
    }
}
