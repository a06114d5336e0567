//! Trail levels and the palette codec that maps them to colours.
//!
//! A cell's persistent history is a [`TrailLevel`] in `0..=4`. Level `5` is
//! reserved for "ant placed here with nothing underneath" and never appears
//! as a genuine trail value. [`TrailCodec`] maps levels to display colours
//! and back.

use crate::color::Color;
use crate::error::LevelOutOfRange;
use std::fmt;

/// Persistent per-cell automaton state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct TrailLevel(u8);

impl TrailLevel {
    /// No trail.
    pub const EMPTY: Self = Self(0);
    /// Spawn marker: promotes to a new ant the first time it is observed.
    pub const MARKER: Self = Self(4);
    /// Ant-occupied marker. Reserved; restores to empty when uncovered.
    pub const ANT: Self = Self(5);
    /// Number of ordinary trail shades (levels `1..=3`).
    pub const ORDINARY_COUNT: usize = 3;

    /// Construct a level, rejecting values outside `0..=5`.
    pub fn new(value: i64) -> Result<Self, LevelOutOfRange> {
        match u8::try_from(value) {
            Ok(v) if v <= Self::ANT.0 => Ok(Self(v)),
            _ => Err(LevelOutOfRange { value }),
        }
    }

    /// The ordinary level for palette index `0..3` (levels `1..=3`).
    ///
    /// # Panics
    ///
    /// Panics if `index >= ORDINARY_COUNT`.
    pub fn ordinary(index: usize) -> Self {
        assert!(
            index < Self::ORDINARY_COUNT,
            "ordinary trail index {index} out of range"
        );
        Self(index as u8 + 1)
    }

    /// Raw numeric value.
    pub fn get(self) -> u8 {
        self.0
    }

    /// True for every non-zero level, including the marker and ant levels.
    pub fn is_colored(self) -> bool {
        self.0 != 0
    }

    /// True for levels `1..=3`.
    pub fn is_ordinary(self) -> bool {
        (1..=3).contains(&self.0)
    }

    /// True for levels `1..=4`: real trail that survives an ant visit.
    pub fn is_restorable(self) -> bool {
        (1..=4).contains(&self.0)
    }
}

impl fmt::Display for TrailLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<TrailLevel> for u8 {
    fn from(level: TrailLevel) -> Self {
        level.0
    }
}

impl TryFrom<u8> for TrailLevel {
    type Error = LevelOutOfRange;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        Self::new(i64::from(v))
    }
}

/// Palette mapping between trail levels and display colours.
///
/// The default is the GitHub dark contribution palette. Ants are drawn in
/// [`ant`](TrailCodec::ant), which is deliberately outside the level
/// mapping so that [`color_to_level`](TrailCodec::color_to_level) decodes
/// it as empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrailCodec {
    /// Colour of level 0.
    pub background: Color,
    /// Colours of levels 1, 2 and 3, in that order.
    pub trail: [Color; TrailLevel::ORDINARY_COUNT],
    /// Colour of the spawn marker, level 4.
    pub marker: Color,
    /// Colour drawn over any cell an ant occupies.
    pub ant: Color,
}

impl Default for TrailCodec {
    fn default() -> Self {
        Self::github_dark()
    }
}

impl TrailCodec {
    /// GitHub's dark-theme contribution greens with a bright-green ant.
    pub const fn github_dark() -> Self {
        Self {
            background: Color::from_u32(0x161b22),
            trail: [
                Color::from_u32(0x0e4429),
                Color::from_u32(0x006d32),
                Color::from_u32(0x26a641),
            ],
            marker: Color::from_u32(0x39d353),
            ant: Color::from_u32(0x00ff00),
        }
    }

    /// Display colour of an unoccupied cell at `level`.
    ///
    /// Level 5 has no trail colour of its own: it is only ever visible
    /// through an ant overlay, so it maps to the background.
    pub fn level_to_color(&self, level: TrailLevel) -> Color {
        match level.get() {
            1..=3 => self.trail[level.get() as usize - 1],
            4 => self.marker,
            _ => self.background,
        }
    }

    /// Inverse of [`level_to_color`](Self::level_to_color) on `0..=4`.
    ///
    /// Unknown colours decode to [`TrailLevel::EMPTY`]; this never fails.
    pub fn color_to_level(&self, color: Color) -> TrailLevel {
        if color == self.marker {
            return TrailLevel::MARKER;
        }
        self.trail
            .iter()
            .position(|&c| c == color)
            .map(TrailLevel::ordinary)
            .unwrap_or(TrailLevel::EMPTY)
    }
}
