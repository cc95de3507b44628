//! 2D camera mapping world coordinates to screen coordinates.

use egui::{Pos2, Rect, Vec2};

use crate::layout::SCREEN_CENTER;

/// Smallest zoom the camera accepts.
pub const MIN_ZOOM: f32 = 0.1;

/// Pan/zoom camera.
///
/// A world point at `target` is drawn at screen point `offset`; distances
/// around it are scaled by `zoom`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera2D {
    /// World point shown at the screen offset
    pub target: Pos2,
    /// Screen point the target maps to, normally the canvas centre
    pub offset: Pos2,
    /// Scale factor (1.0 = one world unit per point)
    pub zoom: f32,
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera2D {
    /// Creates a camera looking at the centre of the layout at zoom 1.0.
    pub fn new() -> Self {
        Self {
            target: SCREEN_CENTER,
            offset: SCREEN_CENTER,
            zoom: 1.0,
        }
    }

    /// Keeps the target centred in `canvas`.
    pub fn center_on(&mut self, canvas: Rect) {
        self.offset = canvas.center();
    }

    pub fn world_to_screen(&self, world: Pos2) -> Pos2 {
        self.offset + (world - self.target) * self.zoom
    }

    pub fn screen_to_world(&self, screen: Pos2) -> Pos2 {
        self.target + (screen - self.offset) / self.zoom
    }

    /// Scales a world-space length (stroke width, font size) to screen points.
    pub fn scale(&self, length: f32) -> f32 {
        length * self.zoom
    }

    /// Adds `delta` notches of zoom, 0.05 per notch, never below [`MIN_ZOOM`].
    pub fn zoom_by(&mut self, delta: f32) {
        self.zoom = (self.zoom + delta * 0.05).max(MIN_ZOOM);
    }

    /// Moves the target by a screen-space delta converted to world units.
    pub fn pan_by_screen(&mut self, delta: Vec2) {
        self.target += delta / self.zoom;
    }
}
