//! Turning candidate spawn sites into ants.
//!
//! Candidates are shuffled, then taken in order: all of them for
//! [`AntCount::AllMarkers`], up to `n` for `Fixed(n)`. A fixed count larger
//! than the candidate list is topped up with random free cells.
//!
//! Filler sampling is rejection-based but capped at
//! [`FILLER_ATTEMPTS_PER_CELL`] × cell count draws; after that the first
//! free cell in row-major order is used. A grid with no free cell left
//! stops placement early with a warning, so a request larger than the
//! grid yields at most one ant per cell.

use antgrid_core::{Heading, TrailCodec, TrailLevel};
use antgrid_space::{Grid, Torus};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::warn;

use crate::ant::{AntAgent, AntRegistry};
use crate::config::AntCount;

/// Random draws per grid cell before filler placement falls back to a
/// linear scan.
pub const FILLER_ATTEMPTS_PER_CELL: usize = 64;

/// What happens to the stored level under a freshly placed ant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum UnderAnt {
    /// Stored level becomes the reserved ant level, so the cell empties
    /// when the ant leaves.
    Erase,
    /// Stored level is left alone.
    Keep,
}

/// Uniform random heading.
pub(crate) fn random_heading<R: Rng + ?Sized>(rng: &mut R) -> Heading {
    Heading::from_index(rng.gen_range(0..4u8))
}

pub(crate) fn place_ants<R: Rng + ?Sized>(
    grid: &mut Grid,
    codec: &TrailCodec,
    mut candidates: Vec<(usize, usize)>,
    count: AntCount,
    under: UnderAnt,
    rng: &mut R,
) -> AntRegistry {
    let mut ants = AntRegistry::new();
    candidates.shuffle(rng);

    let on_sites = match count {
        AntCount::AllMarkers => candidates.len(),
        AntCount::Fixed(n) => n.min(candidates.len()),
    };
    for &pos in &candidates[..on_sites] {
        spawn(grid, codec, &mut ants, pos, under, rng);
    }

    if let AntCount::Fixed(requested) = count {
        while ants.len() < requested {
            match free_cell(grid.torus(), &ants, rng) {
                Some(pos) => spawn(grid, codec, &mut ants, pos, under, rng),
                None => {
                    warn!(
                        requested,
                        placed = ants.len(),
                        cells = grid.cell_count(),
                        "no free cell left, placing fewer ants than requested"
                    );
                    break;
                }
            }
        }
    }

    ants
}

fn spawn<R: Rng + ?Sized>(
    grid: &mut Grid,
    codec: &TrailCodec,
    ants: &mut AntRegistry,
    pos: (usize, usize),
    under: UnderAnt,
    rng: &mut R,
) {
    let heading = random_heading(rng);
    let cell = grid.at_mut(pos);
    if under == UnderAnt::Erase {
        cell.set_level(TrailLevel::ANT, codec);
    }
    cell.cover(codec.ant);
    ants.push(AntAgent {
        position: pos,
        heading,
        color: codec.ant,
    });
}

/// A cell no ant stands on, or `None` if every cell is taken.
fn free_cell<R: Rng + ?Sized>(
    torus: &Torus,
    ants: &AntRegistry,
    rng: &mut R,
) -> Option<(usize, usize)> {
    // Seeded ants never share a cell, so this is an exact fullness test.
    if ants.len() >= torus.cell_count() {
        return None;
    }
    let attempts = FILLER_ATTEMPTS_PER_CELL.saturating_mul(torus.cell_count());
    for _ in 0..attempts {
        let pos = (
            rng.gen_range(0..torus.width()),
            rng.gen_range(0..torus.height()),
        );
        if !ants.occupies(pos) {
            return Some(pos);
        }
    }
    (0..torus.cell_count())
        .map(|i| torus.position(i))
        .find(|&pos| !ants.occupies(pos))
}
