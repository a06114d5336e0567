//! Cardinal headings for ants.

/// Direction an ant faces.
///
/// Discriminants follow the clockwise order used by the turn rule:
/// turning right adds one, turning left adds three, both modulo four.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Heading {
    /// Towards row 0 (y - 1).
    Up = 0,
    /// Towards higher columns (x + 1).
    Right = 1,
    /// Towards higher rows (y + 1).
    Down = 2,
    /// Towards column 0 (x - 1).
    Left = 3,
}

impl Heading {
    /// All headings in clockwise order starting from [`Heading::Up`].
    pub const ALL: [Heading; 4] = [Heading::Up, Heading::Right, Heading::Down, Heading::Left];

    /// Heading for `n mod 4`.
    pub fn from_index(n: u8) -> Self {
        Self::ALL[(n % 4) as usize]
    }

    /// Numeric value in `0..4`.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Turn right: `(h + 1) mod 4`.
    pub fn clockwise(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Turn left: `(h + 3) mod 4`.
    pub fn counter_clockwise(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// Returns the `(dx, dy)` step for this heading.
    pub fn offset(self) -> (i64, i64) {
        match self {
            Heading::Up => (0, -1),
            Heading::Right => (1, 0),
            Heading::Down => (0, 1),
            Heading::Left => (-1, 0),
        }
    }
}
