//! Reusable simulation fixtures.
//!
//! - [`config`]: a config with explicit dimensions, mode and ant count.
//! - [`contribution_fixture`]: a small hand-written contribution calendar.
//! - [`grid_with_levels`]: a grid painted from a row-major level table.

use antgrid_core::{Cell, TrailCodec, TrailLevel};
use antgrid_engine::{AntCount, ContributionCell, SeedMode, SimulationConfig};
use antgrid_space::Grid;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Width and height of [`contribution_fixture`].
pub const CONTRIBUTION_FIXTURE_SIZE: (usize, usize) = (6, 7);

pub fn config(width: usize, height: usize, mode: SeedMode, ant_count: AntCount) -> SimulationConfig {
    SimulationConfig {
        width,
        height,
        mode,
        ant_count,
        ..Default::default()
    }
}

/// Blank grid, one ant in the centre.
pub fn empty_config(width: usize, height: usize) -> SimulationConfig {
    config(width, height, SeedMode::Empty, AntCount::Fixed(1))
}

/// Random trail with an ant on every marker.
pub fn random_config(width: usize, height: usize, seed: u64) -> SimulationConfig {
    SimulationConfig {
        seed,
        ..config(width, height, SeedMode::Random, AntCount::AllMarkers)
    }
}

pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Six weeks of activity with two level-4 days, at `(2, 3)` and `(5, 1)`,
/// plus one entry outside the grid.
pub fn contribution_fixture() -> Vec<ContributionCell> {
    let mut days = Vec::new();
    for x in 0..6i64 {
        for y in 0..7i64 {
            let level = (x + y) % 4;
            days.push(ContributionCell {
                count: level as u32 * 3,
                ..ContributionCell::new(x, y, level)
            });
        }
    }
    days.push(ContributionCell::new(2, 3, 4));
    days.push(ContributionCell::new(5, 1, 7));
    days.push(ContributionCell::new(-1, 0, 3));
    days
}

/// Grid whose stored levels come from `rows[y][x]`. No ants.
///
/// # Panics
///
/// Panics if `rows` is empty or ragged, or a level is outside `0..=5`.
pub fn grid_with_levels(rows: &[&[u8]], codec: &TrailCodec) -> Grid {
    let height = rows.len();
    let width = rows.first().map_or(0, |r| r.len());
    let mut grid = Grid::new_empty(width, height, codec).expect("fixture grid must be non-empty");
    for (y, row) in rows.iter().enumerate() {
        assert_eq!(row.len(), width, "ragged fixture row {y}");
        for (x, &raw) in row.iter().enumerate() {
            let level = TrailLevel::try_from(raw).expect("fixture level out of range");
            grid.set(x as i64, y as i64, Cell::trail(level, codec));
        }
    }
    grid
}
