//! The generation loop.
//!
//! [`Simulator`] owns the grid, the ant registry and the random source
//! exclusively. Each [`step()`](Simulator::step) advances one generation:
//!
//! 1. **Uncover**: lift every ant's overlay, restoring the trail beneath.
//! 2. **Promote**: every level-4 marker becomes an ant site; a new ant is
//!    appended unless one already stands there.
//! 3. **Rule**: coloured cell ⇒ turn clockwise and erase; empty cell ⇒
//!    turn counter-clockwise and paint a random ordinary level.
//! 4. **Move**: one cell along the new heading, wrapping at the edges.
//! 5. **Re-cover**: draw every ant over its new cell.
//!
//! Every phase walks the registry in order, so a fixed seed reproduces a
//! run exactly. Ants that share a cell are kept apart in the registry and
//! never merge.

use std::time::Instant;

use antgrid_core::{Generation, TrailLevel};
use antgrid_space::Grid;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::ant::{AntAgent, AntRegistry};
use crate::config::{ConfigError, SimulationConfig};
use crate::metrics::StepMetrics;
use crate::seed::{self, placement, SeedReport};

/// A seeded Langton's-ant simulation.
///
/// Created from a [`SimulationConfig`] via [`new()`](Simulator::new), which
/// seeds a [`ChaCha8Rng`] from `config.seed`, or
/// [`with_rng()`](Simulator::with_rng) for any other random source.
///
/// # Example
///
/// ```
/// use antgrid_engine::{SeedMode, SimulationConfig, Simulator};
///
/// let config = SimulationConfig {
///     mode: SeedMode::Empty,
///     ..Default::default()
/// };
/// let mut sim = Simulator::new(config).unwrap();
/// let frames = sim.run(10);
/// assert_eq!(frames.len(), 11);
/// ```
#[derive(Debug)]
pub struct Simulator<R: Rng = ChaCha8Rng> {
    config: SimulationConfig,
    grid: Grid,
    ants: AntRegistry,
    rng: R,
    generation: Generation,
    report: SeedReport,
    last_metrics: StepMetrics,
}

impl Simulator<ChaCha8Rng> {
    /// Validate `config` and seed generation 0 from `config.seed`.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> Simulator<R> {
    /// Validate `config` and seed generation 0, drawing all randomness
    /// (seeding included) from `rng`.
    pub fn with_rng(config: SimulationConfig, mut rng: R) -> Result<Self, ConfigError> {
        let seeded = seed::seed(&config, &mut rng)?;
        Ok(Self {
            config,
            grid: seeded.grid,
            ants: seeded.ants,
            rng,
            generation: Generation::default(),
            report: seeded.report,
            last_metrics: StepMetrics::default(),
        })
    }

    /// Advance one generation.
    pub fn step(&mut self) -> StepMetrics {
        let start = Instant::now();
        let codec = self.config.codec;

        // Uncover.
        for ant in &self.ants {
            self.grid.at_mut(ant.position).uncover(&codec);
        }

        // Promote.
        let markers: Vec<(usize, usize)> = self
            .grid
            .cells()
            .filter(|(_, cell)| cell.level() == TrailLevel::MARKER && !cell.is_occupied())
            .map(|(pos, _)| pos)
            .collect();
        let mut spawned = 0;
        for pos in markers {
            let cell = self.grid.at_mut(pos);
            cell.set_level(TrailLevel::ANT, &codec);
            cell.cover(codec.ant);
            if !self.ants.occupies(pos) {
                let heading = placement::random_heading(&mut self.rng);
                let id = self.ants.push(AntAgent {
                    position: pos,
                    heading,
                    color: codec.ant,
                });
                spawned += 1;
                debug!(
                    generation = self.generation.0,
                    ant = %id,
                    x = pos.0,
                    y = pos.1,
                    ?heading,
                    "marker promoted to ant"
                );
            }
        }

        // Rule, then move. Each ant only reads and writes its own cell
        // before moving, so interleaving the two per ant matches running
        // them as separate passes.
        let torus = *self.grid.torus();
        let mut flipped_to_trail = 0;
        let mut flipped_to_empty = 0;
        for ant in self.ants.iter_mut() {
            let cell = self.grid.at_mut(ant.position);
            if cell.level().is_colored() {
                ant.heading = ant.heading.clockwise();
                cell.flip(TrailLevel::EMPTY, &codec);
                flipped_to_empty += 1;
            } else {
                ant.heading = ant.heading.counter_clockwise();
                let shade = self.rng.gen_range(0..TrailLevel::ORDINARY_COUNT);
                cell.flip(TrailLevel::ordinary(shade), &codec);
                flipped_to_trail += 1;
            }
            ant.position = torus.step(ant.position, ant.heading);
        }

        // Re-cover.
        for ant in &self.ants {
            self.grid.at_mut(ant.position).cover(ant.color);
        }

        self.generation = self.generation.next();
        let metrics = StepMetrics {
            generation: self.generation.0,
            ants: self.ants.len(),
            spawned,
            flipped_to_trail,
            flipped_to_empty,
            total_us: start.elapsed().as_micros() as u64,
        };
        trace!(
            generation = metrics.generation,
            ants = metrics.ants,
            spawned = metrics.spawned,
            flipped_to_trail = metrics.flipped_to_trail,
            flipped_to_empty = metrics.flipped_to_empty,
            total_us = metrics.total_us,
            "step"
        );
        self.last_metrics = metrics.clone();
        metrics
    }

    /// Run `generations` steps and collect a snapshot before the first
    /// step and after each one: `generations + 1` grids in total.
    ///
    /// Runs to completion even if the grid goes extinct.
    pub fn run(&mut self, generations: u64) -> Vec<Grid> {
        let capacity = usize::try_from(generations)
            .ok()
            .and_then(|g| g.checked_add(1))
            .unwrap_or(usize::MAX);
        let mut frames = Vec::with_capacity(capacity);
        frames.push(self.snapshot());
        for _ in 0..generations {
            self.step();
            frames.push(self.snapshot());
        }
        frames
    }

    /// [`run()`](Self::run) for the configured number of generations.
    pub fn run_configured(&mut self) -> Vec<Grid> {
        self.run(self.config.generations)
    }

    /// Deep copy of the current grid.
    pub fn snapshot(&self) -> Grid {
        self.grid.snapshot()
    }

    /// The current grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The ant registry.
    pub fn ants(&self) -> &AntRegistry {
        &self.ants
    }

    /// Generations stepped so far.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Summary of the seeding pass.
    pub fn seed_report(&self) -> &SeedReport {
        &self.report
    }

    /// Metrics from the most recent step (all zero before the first).
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// The configuration this simulator was built from.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// True when no cell carries trail or an ant.
    pub fn is_extinct(&self) -> bool {
        self.grid.is_extinct()
    }
}
