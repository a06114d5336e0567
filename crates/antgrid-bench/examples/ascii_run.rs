//! Print a short run as text frames.
//!
//! Demonstrates: build config → Simulator → step → inspect metrics and
//! render each generation.

use antgrid_bench::{render_ascii, swarm_profile};
use antgrid_engine::Simulator;

fn main() {
    println!("=== antgrid ASCII run ===\n");

    let config = swarm_profile(7);
    let mut sim = Simulator::new(config).unwrap();

    let report = sim.seed_report();
    println!(
        "seeded with {:?}: {} candidates, {} ants\n",
        report.strategy, report.candidates, report.placed
    );
    println!("generation 0");
    println!("{}", render_ascii(sim.grid()));

    for _ in 0..10 {
        let m = sim.step();
        println!(
            "generation {} ants={} spawned={} +trail={} -trail={} ({}us)",
            m.generation, m.ants, m.spawned, m.flipped_to_trail, m.flipped_to_empty, m.total_us
        );
        println!("{}", render_ascii(sim.grid()));
    }

    if sim.is_extinct() {
        println!("grid went extinct");
    }
}
