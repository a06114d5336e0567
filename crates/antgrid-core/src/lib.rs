//! Core types for the antgrid simulation workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! per-cell vocabulary shared by every other crate: colours, trail levels
//! and their palette mapping, the two-part cell record, ant headings, and
//! the strongly-typed ids.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod color;
pub mod error;
pub mod heading;
pub mod id;
pub mod trail;

pub use cell::{Cell, CellView};
pub use color::Color;
pub use error::{LevelOutOfRange, ParseColorError};
pub use heading::Heading;
pub use id::{AntId, Generation};
pub use trail::{TrailCodec, TrailLevel};
