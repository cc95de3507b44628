//! Comb layout geometry.
//!
//! This module provides pure functions for:
//! - Mapping a nibble to the length of its comb segment
//! - Placing byte rows evenly between the top and bottom boundaries
//! - Computing the two L-shaped line pairs drawn for each byte
//!
//! All coordinates are world units. The camera maps them to the screen.

use egui::{pos2, Pos2};

/// Logical screen width the diagram is laid out for.
pub const SCREEN_WIDTH: f32 = 1920.0;
/// Logical screen height the diagram is laid out for.
pub const SCREEN_HEIGHT: f32 = 1080.0;
pub const SCREEN_CENTER: Pos2 = pos2(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0);

/// X coordinate of the vertical axis.
pub const AXIS_X: f32 = SCREEN_CENTER.x;
/// Top boundary of the comb region.
pub const TOP_Y: f32 = SCREEN_CENTER.y - 250.0;
/// Bottom boundary (baseline) of the comb region.
pub const BOTTOM_Y: f32 = SCREEN_CENTER.y + 250.0;

/// Length used for the horizontal axis on each side of the vertical axis.
pub const MAX_NIBBLE_LEN: f32 = BASE_LEN + 16.0 * STEP_LEN;

/// Stroke width of comb segments and axes.
pub const LINE_THICKNESS: f32 = 2.0;

const BASE_LEN: f32 = 20.0;
const STEP_LEN: f32 = 18.0;

/// Returns the segment length for a nibble: `20 + (nibble + 1) * 18`.
///
/// Only the low four bits of `nibble` are used, so the result always lies in
/// `[38, 308]`.
pub fn nibble_length(nibble: u8) -> f32 {
    BASE_LEN + f32::from((nibble & 0x0f) + 1) * STEP_LEN
}

/// Returns the y coordinate of row `index` out of `divisions` rows.
///
/// The span is cut into `divisions + 1` bands and each row sits in the middle
/// of its band, so no row lands on either boundary.
pub fn row_y(top_y: f32, bottom_y: f32, index: usize, divisions: usize) -> f32 {
    let step = (bottom_y - top_y) / (divisions as f32 + 1.0);
    top_y + (index as f32 + 0.5) * step
}

/// Two-point line in world space.
pub type Segment = [Pos2; 2];

/// One side of a comb row: the horizontal arm and the drop to the baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LShape {
    pub horizontal: Segment,
    pub vertical: Segment,
}

/// Geometry for one byte.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombRow {
    pub byte: u8,
    pub y: f32,
    pub left_len: f32,
    pub right_len: f32,
    pub left: LShape,
    pub right: LShape,
}

impl CombRow {
    /// Builds the row for `byte` at height `y`, branching from `axis_x` and
    /// dropping to `bottom_y`.
    ///
    /// Joins are padded by half the stroke width so butt caps overlap at the
    /// corners.
    pub fn new(byte: u8, axis_x: f32, y: f32, bottom_y: f32, thickness: f32) -> Self {
        let half = thickness * 0.5;
        let left_len = nibble_length(byte >> 4);
        let right_len = nibble_length(byte & 0x0f);

        let left_corner = pos2(axis_x - left_len - half, y);
        let left = LShape {
            horizontal: [pos2(axis_x + half, y), pos2(left_corner.x - half, y)],
            vertical: [left_corner, pos2(left_corner.x, bottom_y + half)],
        };

        let right_corner = pos2(axis_x + right_len + half, y);
        let right = LShape {
            horizontal: [pos2(axis_x - half, y), pos2(right_corner.x + half, y)],
            vertical: [right_corner, pos2(right_corner.x, bottom_y + half)],
        };

        Self {
            byte,
            y,
            left_len,
            right_len,
            left,
            right,
        }
    }

    /// Returns the four line segments of this row, left side first.
    pub fn segments(&self) -> [Segment; 4] {
        [
            self.left.horizontal,
            self.left.vertical,
            self.right.horizontal,
            self.right.vertical,
        ]
    }
}

/// Lays out `divisions` rows along the axis from `start` to `end`.
///
/// Rows drop to `bottom_y`. `divisions` is clamped to `bytes.len()`; an empty
/// result is returned when there are no rows or the axis has no height.
pub fn comb_rows(
    start: Pos2,
    end: Pos2,
    bottom_y: f32,
    divisions: usize,
    bytes: &[u8],
    thickness: f32,
) -> Vec<CombRow> {
    let divisions = divisions.min(bytes.len());
    if divisions < 1 || end.y == start.y {
        return Vec::new();
    }

    bytes[..divisions]
        .iter()
        .enumerate()
        .map(|(i, &byte)| {
            let y = row_y(start.y, end.y, i, divisions);
            CombRow::new(byte, start.x, y, bottom_y, thickness)
        })
        .collect()
}

/// Lays out every byte against the standard axis and boundaries.
pub fn standard_rows(bytes: &[u8]) -> Vec<CombRow> {
    comb_rows(
        pos2(AXIS_X, TOP_Y),
        pos2(AXIS_X, BOTTOM_Y),
        BOTTOM_Y,
        bytes.len(),
        bytes,
        LINE_THICKNESS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nibble_length_bounds() {
        assert_eq!(nibble_length(0), 38.0);
        assert_eq!(nibble_length(4), 110.0);
        assert_eq!(nibble_length(0xa), 218.0);
        assert_eq!(nibble_length(15), 308.0);
        // High bits are masked off.
        assert_eq!(nibble_length(0x1f), 308.0);
        assert_eq!(MAX_NIBBLE_LEN, 308.0);
    }

    #[test]
    fn test_nibble_length_strictly_increasing() {
        for n in 0..15u8 {
            assert!(nibble_length(n) < nibble_length(n + 1));
        }
    }

    #[test]
    fn test_boundaries_match_screen_center() {
        assert_eq!(AXIS_X, 960.0);
        assert_eq!(TOP_Y, 290.0);
        assert_eq!(BOTTOM_Y, 790.0);
    }

    #[test]
    fn test_row_y_spacing() {
        assert_eq!(row_y(290.0, 790.0, 0, 3), 352.5);
        assert_eq!(row_y(290.0, 790.0, 1, 3), 477.5);
        assert_eq!(row_y(290.0, 790.0, 2, 3), 602.5);
        // A single row sits a quarter of the way down.
        assert_eq!(row_y(0.0, 100.0, 0, 1), 25.0);
    }

    #[test]
    fn test_row_geometry_for_0x4a() {
        let row = CombRow::new(0x4a, 960.0, 352.5, 790.0, 2.0);
        assert_eq!(row.left_len, 110.0);
        assert_eq!(row.right_len, 218.0);

        assert_eq!(row.left.horizontal, [pos2(961.0, 352.5), pos2(848.0, 352.5)]);
        assert_eq!(row.left.vertical, [pos2(849.0, 352.5), pos2(849.0, 791.0)]);
        assert_eq!(row.right.horizontal, [pos2(959.0, 352.5), pos2(1180.0, 352.5)]);
        assert_eq!(row.right.vertical, [pos2(1179.0, 352.5), pos2(1179.0, 791.0)]);
    }

    #[test]
    fn test_no_rows_for_empty_input() {
        assert!(standard_rows(&[]).is_empty());
        assert!(comb_rows(pos2(0.0, 0.0), pos2(0.0, 10.0), 10.0, 0, &[1, 2], 2.0).is_empty());
    }

    #[test]
    fn test_no_rows_for_flat_axis() {
        let rows = comb_rows(pos2(5.0, 40.0), pos2(5.0, 40.0), 40.0, 2, &[1, 2], 2.0);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_divisions_clamped_to_bytes() {
        let rows = comb_rows(pos2(0.0, 0.0), pos2(0.0, 100.0), 100.0, 5, &[0x11, 0x22], 2.0);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].byte, 0x22);
    }
}
