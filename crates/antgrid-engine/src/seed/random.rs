//! Sparse random trail.

use antgrid_core::{TrailCodec, TrailLevel};
use antgrid_space::Grid;
use rand::Rng;

/// Probability that a cell starts coloured.
const POPULATION_DENSITY: f64 = 0.25;
/// Share of coloured cells that get an ordinary shade; the rest are markers.
const ORDINARY_SHARE: f64 = 0.8;

/// Colour each cell independently and return the marker cells.
pub(super) fn paint<R: Rng + ?Sized>(
    grid: &mut Grid,
    codec: &TrailCodec,
    rng: &mut R,
) -> Vec<(usize, usize)> {
    let mut markers = Vec::new();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if !rng.gen_bool(POPULATION_DENSITY) {
                continue;
            }
            let level = if rng.gen_bool(ORDINARY_SHARE) {
                TrailLevel::ordinary(rng.gen_range(0..TrailLevel::ORDINARY_COUNT))
            } else {
                markers.push((x, y));
                TrailLevel::MARKER
            };
            grid.at_mut((x, y)).set_level(level, codec);
        }
    }
    markers
}
