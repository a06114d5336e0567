//! The per-cell record: trail history plus an optional ant overlay.
//!
//! A cell is a stack of depth two. The bottom is the stored
//! [`TrailLevel`] and its palette colour; the top is an optional ant
//! overlay. Keeping the overlay as its own field means the underlying
//! level never has to be recovered by comparing display colours.

use crate::color::Color;
use crate::trail::{TrailCodec, TrailLevel};

/// State of one grid position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    level: TrailLevel,
    trail_color: Color,
    overlay: Option<Color>,
}

impl Cell {
    /// An unoccupied cell at `level`, coloured through `codec`.
    pub fn trail(level: TrailLevel, codec: &TrailCodec) -> Self {
        Self {
            level,
            trail_color: codec.level_to_color(level),
            overlay: None,
        }
    }

    /// An unoccupied, empty cell.
    pub fn empty(codec: &TrailCodec) -> Self {
        Self::trail(TrailLevel::EMPTY, codec)
    }

    /// Stored level. While occupied this is the level to restore on uncover.
    pub fn level(&self) -> TrailLevel {
        self.level
    }

    /// Palette colour of the stored level, ignoring any overlay.
    pub fn trail_color(&self) -> Color {
        self.trail_color
    }

    /// The ant colour drawn over this cell, if occupied.
    pub fn overlay(&self) -> Option<Color> {
        self.overlay
    }

    /// Whether an ant overlay is present.
    pub fn is_occupied(&self) -> bool {
        self.overlay.is_some()
    }

    /// True iff the cell carries trail or an ant.
    pub fn alive(&self) -> bool {
        self.level.is_colored() || self.overlay.is_some()
    }

    /// What a renderer should draw.
    pub fn display_color(&self) -> Color {
        self.overlay.unwrap_or(self.trail_color)
    }

    /// Overwrite the stored level and recolour it. The overlay is untouched.
    pub fn set_level(&mut self, level: TrailLevel, codec: &TrailCodec) {
        self.level = level;
        self.trail_color = codec.level_to_color(level);
    }

    /// Draw an ant over this cell, keeping the stored level.
    pub fn cover(&mut self, ant_color: Color) {
        self.overlay = Some(ant_color);
    }

    /// Remove the ant overlay and reveal what was underneath.
    ///
    /// Levels `1..=4` are restored with their palette colour. Anything else
    /// (empty, or the reserved ant level) restores to an empty cell.
    /// Returns `false` if the cell was not occupied.
    pub fn uncover(&mut self, codec: &TrailCodec) -> bool {
        if self.overlay.take().is_none() {
            return false;
        }
        if !self.level.is_restorable() {
            self.level = TrailLevel::EMPTY;
        }
        self.trail_color = codec.level_to_color(self.level);
        true
    }

    /// Replace the cell with a bare trail level, dropping any overlay.
    pub fn flip(&mut self, level: TrailLevel, codec: &TrailCodec) {
        *self = Self::trail(level, codec);
    }

    /// Flatten into the renderer-facing view at `(x, y)`.
    pub fn view(&self, x: usize, y: usize) -> CellView {
        CellView {
            x,
            y,
            alive: self.alive(),
            trail_level: self.level,
            display_color: self.display_color(),
        }
    }
}

/// Renderer-facing flattening of a [`Cell`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CellView {
    /// Column.
    pub x: usize,
    /// Row.
    pub y: usize,
    /// Trail present or ant present.
    pub alive: bool,
    /// Stored level, `0..=5`.
    pub trail_level: TrailLevel,
    /// Overlay colour if occupied, trail colour otherwise.
    pub display_color: Color,
}
