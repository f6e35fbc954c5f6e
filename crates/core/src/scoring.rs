//! Line scores, level progression, and gravity pacing.

use brickfall_types::{BASE_FALL_MS, FALL_FLOOR_MS, FALL_STEP_MS, LINES_PER_LEVEL, LINE_SCORES};

/// Points for clearing `lines` rows at once at the given level.
///
/// The level multiplier is the level in effect *before* the clear is
/// applied to the line total.
pub fn score_for_clear(lines: usize, level: u32) -> u32 {
    if lines == 0 || lines >= LINE_SCORES.len() {
        return 0;
    }
    LINE_SCORES[lines] * level
}

/// Level reached after clearing `total_lines` in all: one level per ten
/// lines, starting at 1.
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Gravity interval for a level: 1000ms at level 1, 50ms faster per level,
/// floored at 100ms.
pub fn fall_interval_ms(level: u32) -> u32 {
    BASE_FALL_MS
        .saturating_sub(level.saturating_sub(1).saturating_mul(FALL_STEP_MS))
        .max(FALL_FLOOR_MS)
}
