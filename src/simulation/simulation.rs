use log::{debug, log_enabled, trace, warn, Level};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::barnes_hut::nearby_displacement;
use crate::geometry::{Rect, Vec2};
use crate::quadtree::{QuadTree, QueryList};
use crate::simulation::{Algorithm, Particle};
use crate::utils::{QuadTreeError, SimulationConstants};

const QUERY_LIST_SIZE: usize = 32;

/// Summary of a single [`Simulation::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepReport {
    /// Number of the step, starting at 1.
    pub step: u64,
    /// Particles stored in the tree; 0 for algorithms that do not build one.
    pub inserted: usize,
    /// Particles left out of the tree, e.g. because they drifted outside the world.
    pub skipped: usize,
    pub nodes: usize,
    pub depth: usize,
}

/// A population of particles advanced one step at a time.
///
/// Algorithms that need spatial queries build a fresh quadtree on every
/// step, evaluate the displacement of each particle in parallel against it,
/// and drop it before the step returns.
///
/// # Example
///
/// ```
/// use rs_barnes_hut::simulation::{Algorithm, Simulation};
/// use rs_barnes_hut::utils::SimulationConstants;
///
/// let constants = SimulationConstants::default();
/// let mut sim = Simulation::new(200, Algorithm::BarnesHut, constants, 42)
///     .expect("Failed to initialize simulation");
///
/// sim.simulate(5).expect("Simulation failed");
/// assert_eq!(sim.steps(), 5);
/// assert_eq!(sim.particles.len(), 200);
/// ```
pub struct Simulation {
    pub particles: Vec<Particle>,
    pub algorithm: Algorithm,
    pub constants: SimulationConstants,
    rng: StdRng,
    steps: u64,
}

impl Simulation {
    /// Creates a simulation with `count` randomly seeded particles.
    ///
    /// # Errors
    ///
    /// Returns the first problem found by [`SimulationConstants::validate`].
    pub fn new(count: usize, algorithm: Algorithm, constants: SimulationConstants, seed: u64) -> Result<Self, QuadTreeError> {
        let mut sim = Self::with_particles(Vec::with_capacity(count), algorithm, constants, seed)?;
        sim.populate(count);
        Ok(sim)
    }

    /// Creates a simulation from an existing population.
    pub fn with_particles(
        particles: Vec<Particle>,
        algorithm: Algorithm,
        constants: SimulationConstants,
        seed: u64,
    ) -> Result<Self, QuadTreeError> {
        constants.validate()?;
        Ok(Simulation {
            particles,
            algorithm,
            constants,
            rng: StdRng::seed_from_u64(seed),
            steps: 0,
        })
    }

    /// Number of steps taken so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn world(&self) -> Rect {
        self.constants.world_bounds()
    }

    /// Appends `count` particles seeded for the current algorithm.
    pub fn populate(&mut self, count: usize) {
        let world = self.world();
        let center = world.center();
        let start = self.particles.len();
        for id in start..start + count {
            let rng = &mut self.rng;
            let particle = match self.algorithm {
                Algorithm::Drift => Particle::new(
                    id,
                    center,
                    Vec2::new(rng.random_range(-10.0..10.0), rng.random_range(-10.0..10.0)),
                    Vec2::new(rng.random_range(0.1..5.0), rng.random_range(0.1..5.0)),
                    rng.random_range(0.1..6.0),
                ),
                _ => Particle::new(
                    id,
                    Vec2::new(
                        rng.random_range(world.nw.x..world.se.x),
                        rng.random_range(world.nw.y..world.se.y),
                    ),
                    Vec2::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0)),
                    Vec2::new(rng.random_range(0.1..1.0), rng.random_range(0.1..1.0)),
                    rng.random_range(0.1..6.0),
                ),
            };
            self.particles.push(particle);
        }
        debug!("Seeded {} particles for {:?}", count, self.algorithm);
    }

    /// Total mass of the population.
    pub fn total_mass(&self) -> f64 {
        self.particles.iter().map(|p| p.mass).sum()
    }

    /// Builds a tree over the world holding every particle that fits.
    ///
    /// Particles that cannot be stored are logged and counted instead of
    /// failing the whole build. Only an allocation failure is returned.
    pub fn build_tree(&self) -> Result<(QuadTree<usize>, usize), QuadTreeError> {
        let mut tree = QuadTree::with_config(self.world(), self.constants.quadtree_config())?;
        let mut skipped = 0;
        for particle in &self.particles {
            match tree.insert(particle.id, particle.position, particle.mass) {
                Ok(_) => {}
                Err(QuadTreeError::AllocationFailure) => return Err(QuadTreeError::AllocationFailure),
                Err(e) => {
                    warn!("Skipping particle {}: {}", particle.id, e);
                    skipped += 1;
                }
            }
        }
        Ok((tree, skipped))
    }

    /// Advances every particle by one step.
    pub fn step(&mut self) -> Result<StepReport, QuadTreeError> {
        self.steps += 1;
        let mut report = StepReport {
            step: self.steps,
            ..StepReport::default()
        };

        if self.algorithm.uses_tree() {
            let (tree, skipped) = self.build_tree()?;
            report.inserted = tree.len();
            report.skipped = skipped;
            report.nodes = tree.count_nodes();
            report.depth = tree.depth();
            if log_enabled!(Level::Trace) {
                trace!("{}", tree);
            }

            let deltas = if self.algorithm == Algorithm::BarnesHut {
                self.barnes_hut_deltas(&tree)
            } else {
                self.attraction_deltas(&tree)?
            };
            for (particle, delta) in self.particles.iter_mut().zip(deltas) {
                particle.position += delta;
            }
        } else if self.algorithm == Algorithm::Drift {
            self.drift();
        } else {
            self.wander();
        }

        debug!(
            "Step {}: {} inserted, {} skipped, {} nodes, depth {}",
            report.step, report.inserted, report.skipped, report.nodes, report.depth
        );
        Ok(report)
    }

    /// Runs the simulation for the given number of steps.
    pub fn simulate(&mut self, steps: usize) -> Result<(), QuadTreeError> {
        for _ in 0..steps {
            self.step()?;
        }
        Ok(())
    }

    fn barnes_hut_deltas(&self, tree: &QuadTree<usize>) -> Vec<Vec2> {
        let bh = self.constants.barnes_hut();
        self.particles
            .par_iter()
            .map(|particle| bh.displacement(tree, &particle.body()))
            .collect()
    }

    fn attraction_deltas(&self, tree: &QuadTree<usize>) -> Result<Vec<Vec2>, QuadTreeError> {
        let world = self.world();
        let radius = self.constants.attraction_radius;
        let g = self.constants.gravitational_constant;
        self.particles
            .par_iter()
            .map_init(
                || QueryList::new(QUERY_LIST_SIZE),
                |list, particle| {
                    let list = list.as_mut().map_err(|e| e.clone())?;
                    let mut delta = nearby_displacement(tree, &particle.body(), radius, g, list)?;
                    // push strays back towards the world
                    if particle.position.x < world.nw.x || particle.position.x > world.se.x {
                        delta.x = -delta.x;
                    }
                    if particle.position.y < world.nw.y || particle.position.y > world.se.y {
                        delta.y = -delta.y;
                    }
                    Ok(delta)
                },
            )
            .collect()
    }

    /// Straight-line motion, restarting from the center once outside the world.
    fn drift(&mut self) {
        let world = self.world();
        let center = world.center();
        let mut resets = 0;
        for particle in &mut self.particles {
            particle.velocity = Vec2::new(
                direction(particle.velocity.x) * particle.acceleration.x,
                direction(particle.velocity.y) * particle.acceleration.y,
            );
            particle.position += particle.velocity;
            if !particle.is_inside(&world) {
                particle.position = center;
                particle.velocity = Vec2::new(
                    self.rng.random_range(-10.0..10.0),
                    self.rng.random_range(-10.0..10.0),
                );
                resets += 1;
            }
        }
        trace!("{} particles restarted from the center", resets);
    }

    /// Motion that reverses on each axis where a particle is outside the world.
    fn wander(&mut self) {
        let world = self.world();
        for particle in &mut self.particles {
            let mut dir = Vec2::new(direction(particle.velocity.x), direction(particle.velocity.y));
            if particle.position.x < world.nw.x || particle.position.x > world.se.x {
                dir.x = -dir.x;
            }
            if particle.position.y < world.nw.y || particle.position.y > world.se.y {
                dir.y = -dir.y;
            }
            particle.velocity = Vec2::new(dir.x * particle.acceleration.x, dir.y * particle.acceleration.y);
            particle.position += particle.velocity;
        }
    }
}

fn direction(speed: f64) -> f64 {
    if speed > 0.0 { 1.0 } else { -1.0 }
}
