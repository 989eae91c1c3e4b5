// demos/basic_simulation.rs

use rs_barnes_hut::simulation::{Algorithm, Simulation};
use rs_barnes_hut::utils::{QuadTreeError, SimulationConstants};

fn main() -> Result<(), QuadTreeError> {
    env_logger::init();

    let constants = SimulationConstants::new(Some(0.5), Some(0.7), None, None, None, None);
    let mut sim = Simulation::new(2_000, Algorithm::BarnesHut, constants, 7)?;

    println!("Initial state:");
    println!("Particles: {}, total mass: {:.3}", sim.particles.len(), sim.total_mass());
    println!("First particle: {}", sim.particles[0].position);

    for _ in 0..10 {
        let report = sim.step()?;
        println!(
            "Step {}: inserted={}, skipped={}, nodes={}, depth={}",
            report.step, report.inserted, report.skipped, report.nodes, report.depth
        );
    }

    println!("\nAfter {} steps:", sim.steps());
    println!("First particle: {}", sim.particles[0].position);

    // the same world, driven by neighbour attraction only
    sim.algorithm = Algorithm::Attraction;
    sim.simulate(5)?;
    let world = sim.world();
    let inside = sim.particles.iter().filter(|p| p.is_inside(&world)).count();
    println!("Particles still inside the world after attraction: {}", inside);

    Ok(())
}
