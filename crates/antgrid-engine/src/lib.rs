//! Langton's-ant simulation engine.
//!
//! Seeds a toroidal trail grid from a [`SimulationConfig`], places ants, and
//! advances generations with [`Simulator`]. All randomness flows from one
//! injected [`rand::Rng`]; the default ChaCha source is seeded from
//! `config.seed`, so a run is reproducible bit for bit.
//!
//! [`simulate()`] is the one-call entry point: seed, run the configured
//! number of generations, and return every snapshot.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod ant;
pub mod config;
pub mod contribution;
pub mod hash;
pub mod metrics;
pub mod seed;
pub mod simulator;

pub use ant::{AntAgent, AntRegistry};
pub use config::{AntCount, ConfigError, SeedMode, SimulationConfig};
pub use contribution::{ContributionCell, ContributionLevel};
pub use hash::snapshot_hash;
pub use metrics::StepMetrics;
pub use seed::{SeedReport, Seeded, Strategy};
pub use simulator::Simulator;

use antgrid_space::Grid;

/// Seed a grid from `config` and run `config.generations` steps.
///
/// Returns `config.generations + 1` snapshots, generation 0 first.
///
/// # Examples
///
/// ```
/// use antgrid_engine::{simulate, SimulationConfig};
///
/// let frames = simulate(&SimulationConfig {
///     generations: 5,
///     ..Default::default()
/// })
/// .unwrap();
/// assert_eq!(frames.len(), 6);
/// assert_eq!(frames[0].width(), 53);
/// ```
pub fn simulate(config: &SimulationConfig) -> Result<Vec<Grid>, ConfigError> {
    let mut sim = Simulator::new(config.clone())?;
    Ok(sim.run_configured())
}
