//! Hashing utilities for snapshot comparison.
//!
//! Uses FNV-1a for fast, deterministic hashing of grid state. These hashes
//! are not cryptographically secure; they exist for cheap equality checks
//! between runs that should be identical.

use antgrid_space::Grid;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

/// Sentinel folded in for a cell with no ant overlay. Colours are 24-bit,
/// so it cannot collide with a real overlay.
const NO_OVERLAY: u32 = u32::MAX;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_u32(mut hash: u64, v: u32) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

#[inline]
fn fnv1a_u64(mut hash: u64, v: u64) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Hash a grid's dimensions and every cell's level, trail colour and
/// overlay, in row-major order.
pub fn snapshot_hash(grid: &Grid) -> u64 {
    let mut hash = FNV_OFFSET;
    hash = fnv1a_u64(hash, grid.width() as u64);
    hash = fnv1a_u64(hash, grid.height() as u64);
    for (_, cell) in grid.cells() {
        hash = fnv1a_byte(hash, cell.level().get());
        hash = fnv1a_u32(hash, cell.trail_color().to_u32());
        hash = fnv1a_u32(hash, cell.overlay().map_or(NO_OVERLAY, |c| c.to_u32()));
    }
    hash
}
