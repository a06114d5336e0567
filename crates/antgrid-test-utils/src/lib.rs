//! Test utilities for antgrid development.
//!
//! Configuration builders, fixed-seed random sources and hand-painted
//! grids shared by the integration tests and benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    config, contribution_fixture, empty_config, grid_with_levels, random_config, seeded_rng,
    CONTRIBUTION_FIXTURE_SIZE,
};
