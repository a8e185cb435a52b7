//! Scoring module - line clear points, levels and gravity
//!
//! Classic rules: a lock that clears N rows scores `LINE_SCORES[N] * (level + 1)`.
//! The table grows faster than linearly, so clearing several rows with one
//! piece always pays at least as much as clearing them one by one.

use crate::types::{DROP_INTERVALS, LINES_PER_LEVEL, LINE_SCORES, MIN_TICK_MS};

/// Points for clearing `lines` rows in a single lock at `level`.
///
/// A 4-cell piece can complete at most four rows; larger counts (only
/// reachable on hand-built boards) are paid per extra row at the 4-row rate.
pub fn line_clear_points(lines: usize, level: u32) -> u32 {
    let multiplier = level.saturating_add(1);
    let base = match lines {
        0 => 0,
        1..=4 => LINE_SCORES[lines],
        n => LINE_SCORES[4].saturating_mul(n as u32) / 4,
    };
    base.saturating_mul(multiplier)
}

/// Level management
/// Level increases every 10 lines cleared
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL
}

/// Gravity tick for `level`, scaled from the 1000ms table to `base_tick_ms`.
pub fn tick_interval_ms(level: u32, base_tick_ms: u32) -> u32 {
    let idx = (level as usize).min(DROP_INTERVALS.len() - 1);
    let scaled = (DROP_INTERVALS[idx] as u64 * base_tick_ms as u64 / 1000) as u32;
    scaled.max(MIN_TICK_MS.min(base_tick_ms))
}
