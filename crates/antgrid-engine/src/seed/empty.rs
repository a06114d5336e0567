//! Blank grid seeded from the centre.

use antgrid_space::Grid;

/// Leave the grid blank. The only candidate is the centre cell, so the
/// first ant always lands there; any further ants are fillers.
pub(super) fn paint(grid: &Grid) -> Vec<(usize, usize)> {
    vec![grid.torus().center()]
}
