//! Simulation configuration, validation, and error types.
//!
//! [`SimulationConfig`] is the input for constructing a
//! [`Simulator`](crate::Simulator). [`validate()`](SimulationConfig::validate)
//! checks structural invariants up front so that seeding and stepping are
//! total afterwards.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use antgrid_core::TrailCodec;
use antgrid_space::SpaceError;

use crate::contribution::ContributionCell;

// ── AntCount ───────────────────────────────────────────────────────

/// How many ants seeding should place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AntCount {
    /// Exactly this many ants (best effort when the grid is too small).
    /// Zero is rejected by validation.
    Fixed(usize),
    /// One ant on every candidate spawn site, however many there are.
    /// Written as `-1` by callers that use raw integers.
    AllMarkers,
}

impl AntCount {
    /// Map the raw integer form: `-1` is [`AllMarkers`](Self::AllMarkers),
    /// `n >= 1` is `Fixed(n)`, anything else is an error.
    pub fn from_raw(value: i64) -> Result<Self, ConfigError> {
        match value {
            -1 => Ok(Self::AllMarkers),
            n if n >= 1 => usize::try_from(n)
                .map(Self::Fixed)
                .map_err(|_| ConfigError::InvalidAntCount { value }),
            _ => Err(ConfigError::InvalidAntCount { value }),
        }
    }
}

impl Default for AntCount {
    fn default() -> Self {
        Self::Fixed(1)
    }
}

// ── SeedMode ───────────────────────────────────────────────────────

/// Which initial pattern to seed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SeedMode {
    /// Sparse random trail with scattered spawn markers.
    Random,
    /// Blank grid, first ant in the centre.
    Empty,
    /// Contribution data if supplied, otherwise a simulated pattern.
    Contribution,
    /// Same dispatch as `Contribution`; the default.
    #[default]
    Auto,
}

impl SeedMode {
    /// Lower-case name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Empty => "empty",
            Self::Contribution => "contribution",
            Self::Auto => "auto",
        }
    }
}

impl fmt::Display for SeedMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeedMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(Self::Random),
            "empty" => Ok(Self::Empty),
            "contribution" => Ok(Self::Contribution),
            "auto" => Ok(Self::Auto),
            other => Err(ConfigError::UnknownSeedMode {
                name: other.to_string(),
            }),
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating or applying a [`SimulationConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Width or height is zero.
    EmptyGrid {
        /// Configured width.
        width: usize,
        /// Configured height.
        height: usize,
    },
    /// Ant count is neither `-1` nor a positive integer.
    InvalidAntCount {
        /// The rejected value.
        value: i64,
    },
    /// `width * height` does not fit in `u32`.
    CellCountOverflow {
        /// Configured width.
        width: usize,
        /// Configured height.
        height: usize,
    },
    /// Seed mode name not recognised.
    UnknownSeedMode {
        /// The rejected name.
        name: String,
    },
    /// Grid construction failed.
    Space(SpaceError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { width, height } => {
                write!(f, "grid {width}x{height} has no cells")
            }
            Self::InvalidAntCount { value } => {
                write!(f, "ant count must be -1 or at least 1, got {value}")
            }
            Self::CellCountOverflow { width, height } => {
                write!(f, "grid {width}x{height} exceeds u32::MAX cells")
            }
            Self::UnknownSeedMode { name } => {
                write!(
                    f,
                    "unknown seed mode '{name}' (expected random, empty, contribution or auto)"
                )
            }
            Self::Space(e) => write!(f, "space: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

// ── SimulationConfig ───────────────────────────────────────────────

/// Complete configuration for one simulation run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimulationConfig {
    /// Columns. Default: 53 (weeks in a contribution graph).
    pub width: usize,
    /// Rows. Default: 7 (days in a week).
    pub height: usize,
    /// Steps to run after seeding. Default: 50.
    pub generations: u64,
    /// Ants to place at seeding time. Default: one.
    pub ant_count: AntCount,
    /// Initial pattern. Default: [`SeedMode::Auto`].
    pub mode: SeedMode,
    /// Pre-fetched contribution triples. Only bounds-checked.
    pub contributions: Vec<ContributionCell>,
    /// RNG seed for the default ChaCha source.
    pub seed: u64,
    /// Level ↔ colour palette.
    pub codec: TrailCodec,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 53,
            height: 7,
            generations: 50,
            ant_count: AntCount::default(),
            mode: SeedMode::default(),
            contributions: Vec::new(),
            seed: 0,
            codec: TrailCodec::default(),
        }
    }
}

impl SimulationConfig {
    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.width,
                height: self.height,
            });
        }
        match self.width.checked_mul(self.height) {
            Some(n) if u32::try_from(n).is_ok() => {}
            _ => {
                return Err(ConfigError::CellCountOverflow {
                    width: self.width,
                    height: self.height,
                })
            }
        }
        if self.ant_count == AntCount::Fixed(0) {
            return Err(ConfigError::InvalidAntCount { value: 0 });
        }
        Ok(())
    }

    /// Whether any contribution data was supplied.
    pub fn has_contributions(&self) -> bool {
        !self.contributions.is_empty()
    }
}
