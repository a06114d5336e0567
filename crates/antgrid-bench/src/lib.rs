//! Benchmark profiles for the antgrid simulation engine.
//!
//! Provides pre-built [`SimulationConfig`] profiles for benchmarking and
//! examples:
//!
//! - [`github_profile`]: the 53x7 contribution-graph shape, one ant
//! - [`swarm_profile`]: 53x7 random trail with an ant on every marker
//! - [`stress_profile`]: 316x316 grid (~100K cells) with 256 ants
//! - [`render_ascii`]: plain-text frame dump for examples and debugging

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use antgrid_core::TrailLevel;
use antgrid_engine::{AntCount, SeedMode, SimulationConfig};
use antgrid_space::Grid;

/// Build the everyday profile: 53x7 grid, auto mode, one ant, 50 generations.
pub fn github_profile(seed: u64) -> SimulationConfig {
    SimulationConfig {
        seed,
        ..Default::default()
    }
}

/// Build a busy small profile: 53x7 random trail, one ant per marker.
///
/// Promotion keeps adding ants, so per-step cost grows over the run.
pub fn swarm_profile(seed: u64) -> SimulationConfig {
    SimulationConfig {
        mode: SeedMode::Random,
        ant_count: AntCount::AllMarkers,
        seed,
        ..Default::default()
    }
}

/// Build a stress profile: 316x316 grid (~100K cells).
///
/// Starts blank so the ant population stays fixed at 256.
pub fn stress_profile(seed: u64) -> SimulationConfig {
    SimulationConfig {
        width: 316,
        height: 316,
        generations: 100,
        mode: SeedMode::Empty,
        ant_count: AntCount::Fixed(256),
        seed,
        ..Default::default()
    }
}

/// Render a grid as text, one row per line.
///
/// `@` marks an ant, `#` a marker, `+` an ordinary trail level and `.` an
/// empty cell.
pub fn render_ascii(grid: &Grid) -> String {
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let cell = grid.at((x, y));
            let glyph = if cell.is_occupied() {
                '@'
            } else if cell.level() == TrailLevel::MARKER {
                '#'
            } else if cell.level().is_colored() {
                '+'
            } else {
                '.'
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}
