use crate::utils;

/// Deepest level a quadtree may split to before insertion gives up.
pub const DEFAULT_MAX_DEPTH: usize = 32;

pub const DEFAULT_SIMULATION_CONSTANTS: utils::SimulationConstants = utils::SimulationConstants {
    gravitational_constant: 9.81,
    theta: 0.5,
    attraction_radius: 100.0,
    world_width: 800.0,
    world_height: 600.0,
    max_depth: DEFAULT_MAX_DEPTH,
};
