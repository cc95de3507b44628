//! Thick polyline/polygon stroking.

use egui::Pos2;

use crate::layout::Segment;

/// Computes the line segments that stroke `points` with the given thickness.
///
/// Consecutive points are joined, and the last point is joined back to the
/// first when `closed` is set. Each segment is extended by half the thickness
/// at both ends so butt-capped strokes meet without gaps at the corners.
/// Zero-length segments are skipped and fewer than two points yield nothing.
pub fn stroke_polygon(points: &[Pos2], thickness: f32, closed: bool) -> Vec<Segment> {
    if points.len() < 2 {
        return Vec::new();
    }

    let edges = if closed { points.len() } else { points.len() - 1 };
    let mut segments = Vec::with_capacity(edges);
    for i in 0..edges {
        let from = points[i];
        let to = points[(i + 1) % points.len()];
        let dir = to - from;
        let length = dir.length();
        if length == 0.0 {
            continue;
        }

        let extend = dir / length * (thickness * 0.5);
        segments.push([from - extend, to + extend]);
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_too_few_points() {
        assert!(stroke_polygon(&[], 2.0, true).is_empty());
        assert!(stroke_polygon(&[pos2(1.0, 1.0)], 2.0, true).is_empty());
    }

    #[test]
    fn test_open_polyline_extends_ends() {
        let points = [pos2(0.0, 0.0), pos2(10.0, 0.0), pos2(10.0, 10.0)];
        let segments = stroke_polygon(&points, 2.0, false);
        assert_eq!(
            segments,
            vec![
                [pos2(-1.0, 0.0), pos2(11.0, 0.0)],
                [pos2(10.0, -1.0), pos2(10.0, 11.0)],
            ]
        );
    }

    #[test]
    fn test_closed_polygon_wraps() {
        let points = [pos2(0.0, 0.0), pos2(4.0, 0.0), pos2(4.0, 4.0)];
        let segments = stroke_polygon(&points, 0.0, true);
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[2], [pos2(4.0, 4.0), pos2(0.0, 0.0)]);
    }

    #[test]
    fn test_zero_length_segments_skipped() {
        let points = [pos2(1.0, 1.0), pos2(1.0, 1.0), pos2(3.0, 1.0)];
        let segments = stroke_polygon(&points, 2.0, false);
        assert_eq!(segments, vec![[pos2(0.0, 1.0), pos2(4.0, 1.0)]]);
    }
}
