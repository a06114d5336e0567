//! Toroidal grid storage for antgrid simulations.
//!
//! [`Torus`] owns the wrap-around coordinate arithmetic; [`Grid`] is the
//! cell store built on it and the snapshot type handed to renderers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod torus;

pub use error::SpaceError;
pub use grid::Grid;
pub use torus::Torus;
