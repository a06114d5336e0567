//! Synthetic contribution-like pattern for when no real data exists.
//!
//! Each cell's activity score is a uniform draw plus three biases:
//! recency (towards high `x`), weekday (rows 1–5), and periodic streaks
//! (`sin(x / 2) > 0.5`). Fixed thresholds bucket the score into levels.

use antgrid_core::{TrailCodec, TrailLevel};
use antgrid_space::Grid;
use rand::Rng;

const RECENCY_WEIGHT: f64 = 0.3;
const WEEKDAY_BONUS: f64 = 0.2;
const STREAK_BONUS: f64 = 0.3;
const STREAK_FREQUENCY: f64 = 0.5;
const STREAK_THRESHOLD: f64 = 0.5;

/// `(exclusive lower bound, level)`, highest first.
const THRESHOLDS: [(f64, u8); 4] = [(0.8, 4), (0.6, 3), (0.4, 2), (0.25, 1)];

/// Deterministic part of the score for column `x`, row `y`.
pub(super) fn bias(x: usize, y: usize, width: usize) -> f64 {
    let recency = (x as f64 / width as f64) * RECENCY_WEIGHT;
    let weekday = if (1..=5).contains(&y) {
        WEEKDAY_BONUS
    } else {
        0.0
    };
    let streak = if (x as f64 * STREAK_FREQUENCY).sin() > STREAK_THRESHOLD {
        STREAK_BONUS
    } else {
        0.0
    };
    recency + weekday + streak
}

/// Level for a total activity score.
pub(super) fn bucket(score: f64) -> TrailLevel {
    THRESHOLDS
        .iter()
        .find(|(floor, _)| score > *floor)
        .map(|&(_, level)| TrailLevel::new(i64::from(level)).unwrap_or(TrailLevel::EMPTY))
        .unwrap_or(TrailLevel::EMPTY)
}

/// Paint the synthetic pattern and return the level-4 cells.
pub(super) fn paint<R: Rng + ?Sized>(
    grid: &mut Grid,
    codec: &TrailCodec,
    rng: &mut R,
) -> Vec<(usize, usize)> {
    let width = grid.width();
    let mut markers = Vec::new();
    for y in 0..grid.height() {
        for x in 0..width {
            let score = rng.gen::<f64>() + bias(x, y, width);
            let level = bucket(score);
            if level == TrailLevel::MARKER {
                markers.push((x, y));
            }
            if level.is_colored() {
                grid.at_mut((x, y)).set_level(level, codec);
            }
        }
    }
    markers
}
