//! Initial grid and ant population.
//!
//! Seeding runs in two stages. A strategy paints the trail and returns its
//! candidate spawn sites; [`placement`] then turns candidates (plus random
//! fillers, if a fixed count asks for more) into ants. Strategies differ
//! only in the first stage.
//!
//! | mode | contributions present | absent |
//! |------|----------------------|--------|
//! | `random` | random | random |
//! | `empty` | empty | empty |
//! | `contribution` | contribution | simulated |
//! | `auto` | contribution | simulated |

mod contribution;
mod empty;
pub mod placement;
mod random;
mod simulated;

use antgrid_space::Grid;
use rand::Rng;
use tracing::info;

use crate::ant::AntRegistry;
use crate::config::{AntCount, ConfigError, SeedMode, SimulationConfig};
use placement::UnderAnt;

/// The concrete seeding algorithm a [`SeedMode`] resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// 25% density random trail, one in five coloured cells a spawn marker.
    Random,
    /// Blank grid, first ant at the centre.
    Empty,
    /// Caller-supplied contribution triples.
    Contribution,
    /// Procedurally synthesised contribution-like pattern.
    Simulated,
}

impl Strategy {
    /// Pick the strategy for `mode`, given whether contribution data exists.
    pub fn resolve(mode: SeedMode, has_contributions: bool) -> Self {
        match mode {
            SeedMode::Random => Self::Random,
            SeedMode::Empty => Self::Empty,
            SeedMode::Contribution | SeedMode::Auto if has_contributions => Self::Contribution,
            SeedMode::Contribution | SeedMode::Auto => Self::Simulated,
        }
    }
}

/// Summary of one seeding pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedReport {
    /// Algorithm that ran.
    pub strategy: Strategy,
    /// Candidate spawn sites the strategy produced.
    pub candidates: usize,
    /// Requested ant count.
    pub requested: AntCount,
    /// Ants actually placed.
    pub placed: usize,
    /// Contribution triples dropped for lying outside the grid.
    pub dropped_contributions: usize,
}

/// Output of [`seed`]: generation 0.
#[derive(Clone, Debug)]
pub struct Seeded {
    /// Fully initialised grid with ant overlays applied.
    pub grid: Grid,
    /// Initial ants in placement order.
    pub ants: AntRegistry,
    /// What happened.
    pub report: SeedReport,
}

/// Build generation 0 for `config`, drawing all randomness from `rng`.
///
/// Every strategy is total for a valid config; the only errors are
/// validation failures.
pub fn seed<R: Rng + ?Sized>(
    config: &SimulationConfig,
    rng: &mut R,
) -> Result<Seeded, ConfigError> {
    config.validate()?;
    let codec = &config.codec;
    let mut grid = Grid::new_empty(config.width, config.height, codec)?;
    let strategy = Strategy::resolve(config.mode, config.has_contributions());

    let mut dropped_contributions = 0;
    let (candidates, under) = match strategy {
        Strategy::Random => (random::paint(&mut grid, codec, rng), UnderAnt::Erase),
        Strategy::Empty => (empty::paint(&grid), UnderAnt::Keep),
        Strategy::Contribution => {
            let painted = contribution::paint(&mut grid, codec, &config.contributions);
            dropped_contributions = painted.dropped;
            (painted.candidates, UnderAnt::Erase)
        }
        Strategy::Simulated => (simulated::paint(&mut grid, codec, rng), UnderAnt::Erase),
    };

    let candidate_count = candidates.len();
    let ants = placement::place_ants(&mut grid, codec, candidates, config.ant_count, under, rng);

    let report = SeedReport {
        strategy,
        candidates: candidate_count,
        requested: config.ant_count,
        placed: ants.len(),
        dropped_contributions,
    };
    info!(
        mode = %config.mode,
        strategy = ?report.strategy,
        candidates = report.candidates,
        placed = report.placed,
        dropped = report.dropped_contributions,
        "seeded grid"
    );

    Ok(Seeded { grid, ants, report })
}
