//! Per-column digit transitions.
//!
//! Every frame the counter turns its scaled progress (value × 1000) into one
//! [`ColumnTransition`] per displayed column. A column shows two digits, the
//! one it is leaving and the one it is heading to, split vertically by a
//! permille offset.
//!
//! Only the least significant column moves freely. Any other column moves
//! only while every column below it sits on its rollover digit (9), exactly
//! like the wheels of an odometer: 0999 → 1000 turns four wheels at once,
//! 0998 → 0999 turns one.

use super::config::RotationMode;

/// Scale factor between a counter value and its scaled progress.
pub const SCALE: u64 = 1000;

/// Offset of a column whose flip is complete.
pub const FULL_OFFSET: u16 = 1000;

/// Direction the counter is moving in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountDirection {
    /// Goal is at or above the current value.
    Up,
    /// Goal is below the current value.
    Down,
}

impl CountDirection {
    /// The direction from `current` towards `goal`. Equal values count up.
    pub fn between(current: u64, goal: u64) -> Self {
        if goal >= current {
            CountDirection::Up
        } else {
            CountDirection::Down
        }
    }

    /// Whether the counter is counting up.
    #[inline]
    pub fn is_up(self) -> bool {
        self == CountDirection::Up
    }
}

/// The two digits visible in one column and how far the flip has gone.
///
/// `offset_permille` is 0 when only the lower slot is visible at rest and
/// 1000 when only the upper slot is; in between both are visible with a
/// proportional vertical split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnTransition {
    /// Column index, 1 = least significant.
    pub position: u32,
    /// Digit in the upper slot.
    pub upper_digit: u8,
    /// Digit in the lower slot.
    pub lower_digit: u8,
    /// Flip progress, 0..=1000.
    pub offset_permille: u16,
    /// Whether the rotation cascade reached this column.
    pub rotating: bool,
}

impl ColumnTransition {
    /// Whether the column is at one of its resting extremes.
    pub fn is_at_rest(&self) -> bool {
        self.offset_permille == 0 || self.offset_permille == FULL_OFFSET
    }

    /// The single digit shown when the column is at rest.
    ///
    /// Returns `None` while the column is between digits.
    pub fn resting_digit(&self) -> Option<u8> {
        match self.offset_permille {
            0 => Some(self.lower_digit),
            FULL_OFFSET => Some(self.upper_digit),
            _ => None,
        }
    }
}

/// Computes column transitions for a fixed column count and rotation mode.
///
/// The computation is pure: the same inputs always give the same columns.
///
/// # Example
///
/// ```
/// use mechanical_counter::widget::counter::{CountDirection, DigitTransitionComputer, RotationMode};
///
/// let computer = DigitTransitionComputer::new(4, RotationMode::MoreUp);
/// // Halfway between 0999 and 1000.
/// let columns = computer.compute(999_500, CountDirection::Up);
/// assert!(columns.iter().all(|c| c.rotating && c.offset_permille == 500));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitTransitionComputer {
    column_count: u32,
    rotation_mode: RotationMode,
}

impl DigitTransitionComputer {
    /// Create a computer for `column_count` columns.
    pub fn new(column_count: u32, rotation_mode: RotationMode) -> Self {
        Self {
            column_count,
            rotation_mode,
        }
    }

    /// Number of columns produced per computation.
    #[inline]
    pub fn column_count(&self) -> u32 {
        self.column_count
    }

    /// Rotation mode applied to every column.
    #[inline]
    pub fn rotation_mode(&self) -> RotationMode {
        self.rotation_mode
    }

    /// Compute the transitions of all columns, least significant first.
    pub fn compute(&self, scaled_progress: u64, direction: CountDirection) -> Vec<ColumnTransition> {
        let mut columns = Vec::with_capacity(self.column_count as usize);
        self.compute_into(scaled_progress, direction, &mut columns);
        columns
    }

    /// Compute the transitions into `columns`, replacing its contents.
    pub fn compute_into(
        &self,
        scaled_progress: u64,
        direction: CountDirection,
        columns: &mut Vec<ColumnTransition>,
    ) {
        columns.clear();
        let fraction = (scaled_progress % SCALE) as u16;
        let mut should_rotate = true;

        for position in 1..=self.column_count {
            let low = low_digit(scaled_progress, position);
            let high = (low + 1) % 10;
            let show_high = if should_rotate { fraction } else { 0 };

            let (upper_digit, lower_digit, offset_permille) =
                if leaving_digit_on_top(direction, self.rotation_mode) {
                    (low, high, FULL_OFFSET - show_high)
                } else {
                    (high, low, show_high)
                };

            columns.push(ColumnTransition {
                position,
                upper_digit,
                lower_digit,
                offset_permille,
                rotating: should_rotate,
            });

            should_rotate = should_rotate
                && match direction {
                    CountDirection::Up => low == 9,
                    CountDirection::Down => high == 0,
                };
        }
    }
}

/// The digit a column shows at the start of the current integer step.
///
/// Columns beyond the range of `u64` always read 0.
pub fn low_digit(scaled_progress: u64, position: u32) -> u8 {
    position
        .checked_add(2)
        .and_then(|exp| 10u64.checked_pow(exp))
        .map_or(0, |divisor| (scaled_progress / divisor % 10) as u8)
}

/// Whether the lower-valued digit sits in the upper slot.
///
/// Counting up with upward motion the leaving digit is on top and slides
/// out; every other combination mirrors one of these two layouts.
fn leaving_digit_on_top(direction: CountDirection, mode: RotationMode) -> bool {
    match (direction, mode) {
        (CountDirection::Up, RotationMode::AlwaysUp | RotationMode::MoreUp) => true,
        (CountDirection::Up, RotationMode::AlwaysDown | RotationMode::MoreDown) => false,
        (CountDirection::Down, RotationMode::AlwaysUp | RotationMode::MoreDown) => false,
        (CountDirection::Down, RotationMode::AlwaysDown | RotationMode::MoreUp) => true,
    }
}
