//! Particle population and the per-step driver built on the quadtree and
//! the force evaluators.
mod particle;
mod simulation;

pub use particle::*;
pub use simulation::*;
