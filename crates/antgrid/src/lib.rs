//! antgrid: Langton's ants on a toroidal contribution-graph grid.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! antgrid sub-crates. For most users, adding `antgrid` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use antgrid::prelude::*;
//!
//! // A blank 53×7 grid with two ants, run for 20 generations.
//! let config = SimulationConfig {
//!     mode: SeedMode::Empty,
//!     ant_count: AntCount::Fixed(2),
//!     generations: 20,
//!     seed: 42,
//!     ..Default::default()
//! };
//! let frames = simulate(&config).unwrap();
//! assert_eq!(frames.len(), 21);
//!
//! // Frame 0 is the seeded state: the first ant sits in the centre.
//! let centre = frames[0].view(26, 3);
//! assert!(centre.alive);
//! assert_eq!(centre.display_color, TrailCodec::default().ant);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `antgrid-core` | Colours, trail levels, palette codec, cells, headings, ids |
//! | [`space`] | `antgrid-space` | Toroidal coordinates and the grid snapshot type |
//! | [`engine`] | `antgrid-engine` | Configuration, seeding, the simulator, hashing |
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for configuration and colours, and
//!   `Serialize` for grids (`{ width, height, cells[x][y] }`).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core vocabulary (`antgrid-core`).
///
/// Contains [`types::Color`], [`types::TrailLevel`], the
/// [`types::TrailCodec`] palette, and the two-part [`types::Cell`] record.
pub use antgrid_core as types;

/// Toroidal topology and grid storage (`antgrid-space`).
///
/// [`space::Torus`] owns the wrap arithmetic; [`space::Grid`] is the
/// snapshot type handed to renderers.
pub use antgrid_space as space;

/// Simulation engine (`antgrid-engine`).
///
/// [`engine::Simulator`] for stepwise control, [`engine::simulate`] for a
/// whole run in one call, and [`engine::seed`] for the seeding strategies.
pub use antgrid_engine as engine;

/// Common imports for typical antgrid usage.
///
/// ```rust
/// use antgrid::prelude::*;
/// ```
///
/// This imports the configuration types, the simulator, the grid and cell
/// views, and the palette.
pub mod prelude {
    // Core types
    pub use antgrid_core::{Cell, CellView, Color, Heading, TrailCodec, TrailLevel};

    // Space
    pub use antgrid_space::{Grid, Torus};

    // Engine
    pub use antgrid_engine::{
        simulate, snapshot_hash, AntCount, ConfigError, ContributionCell, SeedMode,
        SimulationConfig, Simulator, StepMetrics,
    };
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn prelude_covers_a_full_run() {
        let config = SimulationConfig {
            width: 10,
            height: 4,
            generations: 8,
            mode: SeedMode::Random,
            ant_count: AntCount::AllMarkers,
            ..Default::default()
        };
        let mut sim = Simulator::new(config).unwrap();
        let frames = sim.run_configured();
        assert_eq!(frames.len(), 9);
        assert_eq!(sim.generation().0, 8);
    }

    #[test]
    fn invalid_config_surfaces_error() {
        let config = SimulationConfig {
            width: 0,
            ..Default::default()
        };
        assert!(matches!(
            simulate(&config),
            Err(ConfigError::EmptyGrid { width: 0, height: 7 })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_round_trips_through_json() {
        let config = SimulationConfig {
            mode: SeedMode::Contribution,
            ant_count: AntCount::AllMarkers,
            contributions: vec![ContributionCell::new(3, 2, 4)],
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: SimulationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);

        let frames = simulate(&back).unwrap();
        let value = serde_json::to_value(&frames[0]).unwrap();
        assert_eq!(value["cells"][3][2]["alive"], true);
    }
}
