use crate::barnes_hut::Body;
use crate::geometry::{Rect, Vec2};

/// A point mass moving through the world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Unique within a simulation; stored in the tree as the leaf payload.
    pub id: usize,
    pub position: Vec2,
    pub velocity: Vec2,
    /// Per-axis speed the movement algorithms drive the particle with.
    pub acceleration: Vec2,
    pub mass: f64,
}

impl Particle {
    pub fn new(id: usize, position: Vec2, velocity: Vec2, acceleration: Vec2, mass: f64) -> Self {
        Particle {
            id,
            position,
            velocity,
            acceleration,
            mass,
        }
    }

    /// The particle as seen by the force evaluators.
    pub fn body(&self) -> Body<usize> {
        Body::new(self.id, self.position, self.mass)
    }

    pub fn is_inside(&self, world: &Rect) -> bool {
        world.contains(self.position)
    }
}

/// How particles move on each step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Particles start at the world center and move in straight lines,
    /// restarting from the center with a random velocity once they leave.
    #[default]
    Drift,
    /// Particles wander and bounce back when they cross the world's edge.
    Nomadic,
    /// Particles are pulled by every other particle through the Barnes–Hut approximation.
    BarnesHut,
    /// Particles are pulled by their neighbours within the attraction radius.
    Attraction,
}

impl Algorithm {
    /// Whether the algorithm needs a quadtree of the population.
    pub fn uses_tree(self) -> bool {
        matches!(self, Algorithm::BarnesHut | Algorithm::Attraction)
    }
}
