//! Toroidal coordinate arithmetic.

use crate::error::SpaceError;
use antgrid_core::Heading;

/// A `width × height` lattice whose edges wrap in both axes.
///
/// Coordinates are `(x, y)` with `x` the column and `y` the row. Every
/// signed coordinate resolves to exactly one cell via
/// `((n % size) + size) % size`, so lookups never go out of bounds.
///
/// # Examples
///
/// ```
/// use antgrid_space::Torus;
/// use antgrid_core::Heading;
///
/// let t = Torus::new(53, 7).unwrap();
/// assert_eq!(t.wrap(-1, 7), (52, 0));
/// assert_eq!(t.step((52, 3), Heading::Right), (0, 3));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Torus {
    width: usize,
    height: usize,
}

impl Torus {
    /// Maximum dimension size: coordinate arithmetic uses `i64`.
    pub const MAX_DIM: usize = i64::MAX as usize;

    /// Create a torus. Either dimension being zero, or a cell count that
    /// overflows `usize`, is an error.
    pub fn new(width: usize, height: usize) -> Result<Self, SpaceError> {
        if width == 0 || height == 0 {
            return Err(SpaceError::EmptySpace);
        }
        if width > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        // Cell count must fit `usize` for row-major indexing.
        if width.checked_mul(height).is_none() {
            return Err(SpaceError::DimensionTooLarge {
                name: "width",
                value: width,
                max: usize::MAX / height,
            });
        }
        Ok(Self { width, height })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total cells.
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Resolve any signed coordinate onto the torus.
    pub fn wrap(&self, x: i64, y: i64) -> (usize, usize) {
        (wrap_axis(x, self.width), wrap_axis(y, self.height))
    }

    /// Row-major index of a wrapped coordinate.
    pub fn index(&self, x: i64, y: i64) -> usize {
        let (x, y) = self.wrap(x, y);
        y * self.width + x
    }

    /// Inverse of [`index`](Self::index) for in-range indices.
    pub fn position(&self, index: usize) -> (usize, usize) {
        (index % self.width, index / self.width)
    }

    /// The cell one step from `pos` along `heading`, wrapping at the edges.
    pub fn step(&self, pos: (usize, usize), heading: Heading) -> (usize, usize) {
        let (dx, dy) = heading.offset();
        self.wrap(pos.0 as i64 + dx, pos.1 as i64 + dy)
    }

    /// Centre cell `(⌊w/2⌋, ⌊h/2⌋)`.
    pub fn center(&self) -> (usize, usize) {
        (self.width / 2, self.height / 2)
    }

    /// Whether a signed coordinate lies inside the grid without wrapping.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as u64) < self.width as u64 && (y as u64) < self.height as u64
    }
}

/// `((n % size) + size) % size`, done in `i128` so it cannot overflow.
fn wrap_axis(n: i64, size: usize) -> usize {
    let size = size as i128;
    (((n as i128 % size) + size) % size) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_rejects_empty() {
        assert_eq!(Torus::new(0, 7), Err(SpaceError::EmptySpace));
        assert_eq!(Torus::new(53, 0), Err(SpaceError::EmptySpace));
    }

    #[test]
    fn new_rejects_overflowing_cell_count() {
        let side = 1usize << (usize::BITS / 2);
        assert_eq!(
            Torus::new(side, side),
            Err(SpaceError::DimensionTooLarge {
                name: "width",
                value: side,
                max: usize::MAX / side,
            })
        );
        assert!(Torus::new(side - 1, side).is_ok());
    }

    #[test]
    fn wrap_each_edge() {
        let t = Torus::new(5, 4).unwrap();
        assert_eq!(t.step((4, 2), Heading::Right), (0, 2));
        assert_eq!(t.step((0, 2), Heading::Left), (4, 2));
        assert_eq!(t.step((1, 0), Heading::Up), (1, 3));
        assert_eq!(t.step((1, 3), Heading::Down), (1, 0));
    }

    #[test]
    fn wrap_far_out_of_range() {
        let t = Torus::new(53, 7).unwrap();
        assert_eq!(t.wrap(-54, -8), (52, 6));
        assert_eq!(t.wrap(106, 14), (0, 0));
        let (x, y) = t.wrap(i64::MIN, i64::MAX);
        assert!(x < 53 && y < 7);
    }

    #[test]
    fn single_cell_wraps_to_self() {
        let t = Torus::new(1, 1).unwrap();
        for h in Heading::ALL {
            assert_eq!(t.step((0, 0), h), (0, 0));
        }
    }

    #[test]
    fn center_floors() {
        assert_eq!(Torus::new(53, 7).unwrap().center(), (26, 3));
        assert_eq!(Torus::new(4, 4).unwrap().center(), (2, 2));
    }

    #[test]
    fn contains_is_strict() {
        let t = Torus::new(3, 2).unwrap();
        assert!(t.contains(2, 1));
        assert!(!t.contains(-1, 0));
        assert!(!t.contains(3, 0));
        assert!(!t.contains(0, 2));
    }

    proptest! {
        #[test]
        fn index_position_roundtrip(w in 1usize..60, h in 1usize..10, x in -200i64..200, y in -200i64..200) {
            let t = Torus::new(w, h).unwrap();
            let (wx, wy) = t.wrap(x, y);
            prop_assert!(wx < w && wy < h);
            prop_assert_eq!(t.position(t.index(x, y)), (wx, wy));
        }

        #[test]
        fn step_then_reverse_returns(w in 1usize..60, h in 1usize..10, x in 0usize..60, y in 0usize..10, hi in 0u8..4) {
            let t = Torus::new(w, h).unwrap();
            let pos = (x % w, y % h);
            let heading = Heading::from_index(hi);
            let back = heading.clockwise().clockwise();
            prop_assert_eq!(t.step(t.step(pos, heading), back), pos);
        }
    }
}
