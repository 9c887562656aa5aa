//! Column geometry.
//!
//! Converts column transitions into cell positions. Glyph measurement and
//! text drawing belong to the host renderer; this module only needs the
//! largest digit box, measured once.

use mechanical_counter_core::{CounterError, Result};

use super::digits::{ColumnTransition, FULL_OFFSET};

/// Share of the glyph width used as the gap between columns.
const MARGIN_RATIO: f32 = 0.1;

/// Largest digit glyph box and the derived column margin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphMetrics {
    max_width: f32,
    max_height: f32,
    margin: f32,
}

impl GlyphMetrics {
    /// Create metrics from an already known maximum glyph box.
    pub fn new(max_width: f32, max_height: f32) -> Result<Self> {
        check_box(0, max_width, max_height)?;
        Ok(Self {
            max_width,
            max_height,
            margin: (max_width * MARGIN_RATIO).floor(),
        })
    }

    /// Measure the digits 0 through 9 and keep the largest width and height.
    ///
    /// `measure` returns the `(width, height)` of a digit's glyph box.
    pub fn measure<F>(mut measure: F) -> Result<Self>
    where
        F: FnMut(u8) -> (f32, f32),
    {
        let mut max_width = 0.0f32;
        let mut max_height = 0.0f32;
        for digit in 0..10u8 {
            let (width, height) = measure(digit);
            check_box(digit, width, height)?;
            max_width = max_width.max(width);
            max_height = max_height.max(height);
        }
        Self::new(max_width, max_height)
    }

    /// Widest digit glyph.
    #[inline]
    pub fn max_width(&self) -> f32 {
        self.max_width
    }

    /// Tallest digit glyph.
    #[inline]
    pub fn max_height(&self) -> f32 {
        self.max_height
    }

    /// Horizontal gap between columns.
    #[inline]
    pub fn margin(&self) -> f32 {
        self.margin
    }
}

fn check_box(digit: u8, width: f32, height: f32) -> Result<()> {
    let usable = |v: f32| v.is_finite() && v >= 0.0;
    if !usable(width) || !usable(height) {
        return Err(CounterError::InvalidMetrics {
            digit,
            width,
            height,
        });
    }
    Ok(())
}

/// Vertical slot of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Slot above the cell center.
    Upper,
    /// Slot below the cell center.
    Lower,
}

/// Where a column's two digits are drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnPlacement {
    /// Left edge of the column cell.
    pub x: f32,
    /// Vertical offset of the upper digit from the cell center.
    pub upper_y: f32,
    /// Vertical offset of the lower digit from the cell center.
    pub lower_y: f32,
}

/// Layout of a counter's columns.
///
/// Column 1 (least significant) is the rightmost cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterLayout {
    metrics: GlyphMetrics,
    column_count: u32,
}

impl CounterLayout {
    /// Create a layout for `column_count` columns.
    pub fn new(metrics: GlyphMetrics, column_count: u32) -> Self {
        Self {
            metrics,
            column_count,
        }
    }

    /// Metrics the layout was built from.
    pub fn metrics(&self) -> GlyphMetrics {
        self.metrics
    }

    /// Total width of all columns and the gaps between them.
    pub fn width(&self) -> f32 {
        let n = self.column_count as f32;
        let gaps = self.column_count.saturating_sub(1) as f32;
        n * self.metrics.max_width + gaps * self.metrics.margin
    }

    /// Height of one cell.
    pub fn height(&self) -> f32 {
        self.metrics.max_height
    }

    /// Left edge of the cell for `position`.
    pub fn column_x(&self, position: u32) -> f32 {
        let from_left = self.column_count.saturating_sub(position) as f32;
        from_left * (self.metrics.max_width + self.metrics.margin)
    }

    /// Vertical offset of `slot` from the cell center for a flip offset.
    ///
    /// At offset 0 the lower slot sits on the center; at 1000 the upper slot
    /// does.
    pub fn slot_y(&self, slot: Slot, offset_permille: u16) -> f32 {
        let height = self.metrics.max_height;
        let base = match slot {
            Slot::Upper => -height,
            Slot::Lower => 0.0,
        };
        let offset = offset_permille.min(FULL_OFFSET) as f32;
        base + offset * height / FULL_OFFSET as f32
    }

    /// Placement of both digits of a column.
    pub fn place(&self, transition: &ColumnTransition) -> ColumnPlacement {
        ColumnPlacement {
            x: self.column_x(transition.position),
            upper_y: self.slot_y(Slot::Upper, transition.offset_permille),
            lower_y: self.slot_y(Slot::Lower, transition.offset_permille),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(columns: u32) -> CounterLayout {
        CounterLayout::new(GlyphMetrics::new(20.0, 30.0).unwrap(), columns)
    }

    #[test]
    fn test_measure_keeps_maximum() {
        let metrics = GlyphMetrics::measure(|digit| {
            if digit == 4 {
                (22.5, 30.0)
            } else {
                (18.0, 31.0 - digit as f32)
            }
        })
        .unwrap();
        assert_eq!(metrics.max_width(), 22.5);
        assert_eq!(metrics.max_height(), 31.0);
        assert_eq!(metrics.margin(), 2.0);
    }

    #[test]
    fn test_measure_rejects_bad_box() {
        let err = GlyphMetrics::measure(|digit| {
            if digit == 3 {
                (f32::NAN, 1.0)
            } else {
                (1.0, 1.0)
            }
        })
        .unwrap_err();
        assert!(matches!(err, CounterError::InvalidMetrics { digit: 3, .. }));
        assert!(GlyphMetrics::new(-1.0, 3.0).is_err());
    }

    #[test]
    fn test_canvas_size() {
        let layout = layout(4);
        assert_eq!(layout.width(), 4.0 * 20.0 + 3.0 * 2.0);
        assert_eq!(layout.height(), 30.0);
        assert_eq!(self::layout(1).width(), 20.0);
    }

    #[test]
    fn test_column_x_right_to_left() {
        let layout = layout(4);
        assert_eq!(layout.column_x(4), 0.0);
        assert_eq!(layout.column_x(3), 22.0);
        assert_eq!(layout.column_x(1), 66.0);
    }

    #[test]
    fn test_slot_y_resting_positions() {
        let layout = layout(1);
        // Offset 0: lower digit centered, upper one cell above.
        assert_eq!(layout.slot_y(Slot::Lower, 0), 0.0);
        assert_eq!(layout.slot_y(Slot::Upper, 0), -30.0);
        // Offset 1000: upper digit centered, lower one cell below.
        assert_eq!(layout.slot_y(Slot::Upper, 1000), 0.0);
        assert_eq!(layout.slot_y(Slot::Lower, 1000), 30.0);
        // Halfway: both half visible.
        assert_eq!(layout.slot_y(Slot::Upper, 500), -15.0);
        assert_eq!(layout.slot_y(Slot::Lower, 500), 15.0);
    }

    #[test]
    fn test_place() {
        let layout = layout(3);
        let transition = ColumnTransition {
            position: 2,
            upper_digit: 4,
            lower_digit: 5,
            offset_permille: 250,
            rotating: true,
        };
        let placement = layout.place(&transition);
        assert_eq!(placement.x, 22.0);
        assert_eq!(placement.upper_y, -22.5);
        assert_eq!(placement.lower_y, 7.5);
    }
}
