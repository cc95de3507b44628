//! View state and the per-frame interaction rules.
//!
//! The GUI collects a [`FrameInput`] from the windowing layer once per frame
//! and hands it to [`ViewState::apply`]. Keeping the rules here, away from
//! egui's input types, lets them be tested without a window.

use egui::Pos2;

use crate::camera::Camera2D;

/// Input sampled for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// "Toggle labels" key went down this frame (auto-repeat excluded)
    pub toggle_labels: bool,
    /// "Toggle vertical axis" key went down this frame
    pub toggle_axis: bool,
    /// Wheel movement in notches, positive = away from the user
    pub wheel: f32,
    /// Primary mouse button is held
    pub primary_down: bool,
    /// Latest pointer position in screen coordinates
    pub pointer: Option<Pos2>,
    /// The user asked to close the window
    pub close_requested: bool,
}

impl FrameInput {
    /// Returns true when the frame loop should stop.
    pub fn should_close(&self) -> bool {
        self.close_requested
    }
}

/// Pan-by-drag progress.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    is_dragging: bool,
    last_pointer: Pos2,
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub fn last_pointer(&self) -> Pos2 {
        self.last_pointer
    }
}

/// Everything the renderer needs besides the byte buffer.
///
/// Responsibilities:
/// - Camera target and zoom
/// - Label and vertical-axis visibility
/// - Drag state for gesture continuity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub camera: Camera2D,
    show_labels: bool,
    show_vertical_axis: bool,
    drag: DragState,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// Creates a view at zoom 1.0 with labels and the vertical axis shown.
    pub fn new() -> Self {
        Self {
            camera: Camera2D::new(),
            show_labels: true,
            show_vertical_axis: true,
            drag: DragState::default(),
        }
    }

    // ===== Queries =====

    pub fn show_labels(&self) -> bool {
        self.show_labels
    }

    pub fn show_vertical_axis(&self) -> bool {
        self.show_vertical_axis
    }

    pub fn zoom(&self) -> f32 {
        self.camera.zoom
    }

    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    // ===== Mutations =====

    pub fn toggle_labels(&mut self) {
        self.show_labels = !self.show_labels;
    }

    pub fn toggle_vertical_axis(&mut self) {
        self.show_vertical_axis = !self.show_vertical_axis;
    }

    /// Applies wheel movement; zero is ignored.
    pub fn scroll(&mut self, wheel: f32) {
        if wheel != 0.0 {
            self.camera.zoom_by(wheel);
        }
    }

    /// Advances the drag gesture for one frame.
    ///
    /// The first held frame only records the pointer. Later frames move the
    /// camera target opposite to the pointer motion, scaled to world units, so
    /// the content follows the pointer. A frame without a pointer position
    /// leaves the gesture where it was.
    pub fn drag_pan(&mut self, primary_down: bool, pointer: Option<Pos2>) {
        if !primary_down {
            self.drag.is_dragging = false;
            return;
        }
        let Some(current) = pointer else {
            return;
        };

        if self.drag.is_dragging {
            let delta = self.drag.last_pointer - current;
            self.camera.pan_by_screen(delta);
        } else {
            self.drag.is_dragging = true;
        }
        self.drag.last_pointer = current;
    }

    /// Runs the interaction rules for one frame, in order: label toggle, axis
    /// toggle, wheel zoom, drag pan.
    pub fn apply(&mut self, input: &FrameInput) {
        if input.toggle_labels {
            self.toggle_labels();
            tracing::debug!(show_labels = self.show_labels, "labels toggled");
        }
        if input.toggle_axis {
            self.toggle_vertical_axis();
            tracing::debug!(show_vertical_axis = self.show_vertical_axis, "vertical axis toggled");
        }
        self.scroll(input.wheel);
        self.drag_pan(input.primary_down, input.pointer);
    }
}
