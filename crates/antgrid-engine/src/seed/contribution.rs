//! Trail painted from contribution triples.

use antgrid_core::{TrailCodec, TrailLevel};
use antgrid_space::Grid;
use tracing::debug;

use crate::contribution::ContributionCell;

pub(super) struct Painted {
    pub candidates: Vec<(usize, usize)>,
    pub dropped: usize,
}

/// Apply every in-range triple, then return the cells at the highest level.
///
/// Levels are capped at the marker level; non-positive levels leave the
/// cell as it is. Later triples for the same cell overwrite earlier ones.
/// The peak is read from the painted grid, so dropped triples never count
/// towards it and capped levels count as 4.
pub(super) fn paint(grid: &mut Grid, codec: &TrailCodec, data: &[ContributionCell]) -> Painted {
    let mut dropped = 0;
    for c in data {
        if !grid.torus().contains(c.x, c.y) {
            dropped += 1;
            continue;
        }
        if c.level <= 0 {
            continue;
        }
        let capped = c.level.min(i64::from(TrailLevel::MARKER.get()));
        if let Ok(level) = TrailLevel::new(capped) {
            grid.get_mut(c.x, c.y).set_level(level, codec);
        }
    }
    if dropped > 0 {
        debug!(
            dropped,
            width = grid.width(),
            height = grid.height(),
            "dropped out-of-range contributions"
        );
    }

    let top = grid
        .cells()
        .map(|(_, cell)| cell.level())
        .max()
        .unwrap_or(TrailLevel::EMPTY);
    let candidates = if top.is_colored() {
        grid.cells()
            .filter(|(_, cell)| cell.level() == top)
            .map(|(pos, _)| pos)
            .collect()
    } else {
        Vec::new()
    };

    Painted {
        candidates,
        dropped,
    }
}
