// src/utils/constants_config.rs
use crate::barnes_hut::BarnesHut;
use crate::geometry::{Rect, Vec2};
use crate::quadtree::QuadTreeConfig;
use crate::utils::{
    DEFAULT_SIMULATION_CONSTANTS,
    errors::QuadTreeError
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConstants {
    pub gravitational_constant: f64,
    pub theta: f64,
    pub attraction_radius: f64,
    pub world_width: f64,
    pub world_height: f64,
    pub max_depth: usize,
}


impl Default for SimulationConstants {
    fn default() -> Self {
        DEFAULT_SIMULATION_CONSTANTS
    }
}

impl SimulationConstants {
    /// Creates a new set of constants, falling back to the defaults for every `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_barnes_hut::utils::SimulationConstants;
    ///
    /// let constants = SimulationConstants::new(Some(1.0), Some(0.8), None, None, None, None);
    /// assert_eq!(constants.gravitational_constant, 1.0);
    /// assert_eq!(constants.theta, 0.8);
    /// assert_eq!(constants.world_width, 800.0);
    /// ```
    pub fn new(
        gravitational_constant: Option<f64>,
        theta: Option<f64>,
        attraction_radius: Option<f64>,
        world_width: Option<f64>,
        world_height: Option<f64>,
        max_depth: Option<usize>,
    ) -> Self {
        let default = DEFAULT_SIMULATION_CONSTANTS;
        Self {
            gravitational_constant: gravitational_constant.unwrap_or(default.gravitational_constant),
            theta: theta.unwrap_or(default.theta),
            attraction_radius: attraction_radius.unwrap_or(default.attraction_radius),
            world_width: world_width.unwrap_or(default.world_width),
            world_height: world_height.unwrap_or(default.world_height),
            max_depth: max_depth.unwrap_or(default.max_depth),
        }
    }

    /// Checks that every constant lies in its usable range.
    pub fn validate(&self) -> Result<(), QuadTreeError> {
        if !self.gravitational_constant.is_finite() {
            return Err(QuadTreeError::InvalidParameter("Gravitational constant must be finite".to_string()));
        }
        if !self.theta.is_finite() || self.theta < 0.0 {
            return Err(QuadTreeError::InvalidParameter("Theta must be a non-negative number".to_string()));
        }
        if !self.attraction_radius.is_finite() || self.attraction_radius <= 0.0 {
            return Err(QuadTreeError::InvalidParameter("Attraction radius must be positive".to_string()));
        }
        if !(self.world_width > 0.0 && self.world_height > 0.0)
            || !self.world_width.is_finite()
            || !self.world_height.is_finite()
        {
            return Err(QuadTreeError::InvalidBounds);
        }
        if self.max_depth == 0 {
            return Err(QuadTreeError::InvalidParameter("Maximum depth must be at least 1".to_string()));
        }
        Ok(())
    }

    /// The world region, anchored at the origin.
    pub fn world_bounds(&self) -> Rect {
        Rect::new(Vec2::ZERO, Vec2::new(self.world_width, self.world_height))
    }

    pub fn quadtree_config(&self) -> QuadTreeConfig {
        QuadTreeConfig { max_depth: self.max_depth }
    }

    pub fn barnes_hut(&self) -> BarnesHut {
        BarnesHut::new(self.theta, self.gravitational_constant)
    }
}
