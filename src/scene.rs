//! Per-frame draw list for the comb diagram.
//!
//! [`Scene::build`] turns the byte buffer and view flags into world-space
//! lines and labels. The GUI maps them through the camera and paints them, so
//! everything about *what* is drawn can be checked here without a window.

use egui::{pos2, Pos2};

use crate::layout::{
    self, CombRow, Segment, AXIS_X, BOTTOM_Y, LINE_THICKNESS, MAX_NIBBLE_LEN, TOP_Y,
};
use crate::theme::ThemeColors;
use crate::view_state::ViewState;

/// World-space font size of byte and tick labels.
pub const LABEL_FONT_SIZE: f32 = 10.0;

/// Gap between the vertical axis top and the top boundary.
const VERTICAL_AXIS_INSET: f32 = 8.0;
/// Distance of tick labels below the baseline.
const TICK_LABEL_DROP: f32 = 20.0;
/// Byte label position relative to the axis point of its row.
const BYTE_LABEL_DX: f32 = 5.0;
const BYTE_LABEL_DY: f32 = -10.0;

/// Which palette entry a primitive is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ink {
    Line,
    Axis,
    Accent,
    Label,
}

impl Ink {
    pub fn color(self, colors: &ThemeColors) -> egui::Color32 {
        match self {
            Ink::Line => colors.line,
            Ink::Axis => colors.axis,
            Ink::Accent => colors.accent,
            Ink::Label => colors.label,
        }
    }
}

/// What a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    VerticalAxis,
    HorizontalAxis,
    /// Arm or drop of the comb row with this index
    Comb(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneLine {
    pub kind: LineKind,
    pub points: Segment,
    pub thickness: f32,
    pub ink: Ink,
}

/// Text anchored at its top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneLabel {
    pub text: String,
    pub pos: Pos2,
    pub size: f32,
    pub ink: Ink,
}

/// Draw list for one frame, in painting order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub lines: Vec<SceneLine>,
    pub labels: Vec<SceneLabel>,
}

impl Scene {
    /// Builds the diagram for `bytes` as seen with the flags in `view`.
    pub fn build(bytes: &[u8], view: &ViewState) -> Self {
        let mut scene = Scene::default();

        if view.show_vertical_axis() {
            scene.push_line(
                LineKind::VerticalAxis,
                [pos2(AXIS_X, TOP_Y + VERTICAL_AXIS_INSET), pos2(AXIS_X, BOTTOM_Y)],
                Ink::Accent,
            );
        }

        scene.push_line(
            LineKind::HorizontalAxis,
            [
                pos2(AXIS_X - MAX_NIBBLE_LEN, BOTTOM_Y),
                pos2(AXIS_X + MAX_NIBBLE_LEN, BOTTOM_Y),
            ],
            Ink::Axis,
        );

        let rows = layout::standard_rows(bytes);
        for (index, row) in rows.iter().enumerate() {
            for segment in row.segments() {
                scene.push_line(LineKind::Comb(index), segment, Ink::Line);
            }
        }

        if view.show_labels() {
            scene.push_byte_labels(&rows);
            scene.push_tick_labels();
        }

        scene
    }

    /// Number of comb rows in the scene.
    pub fn comb_row_count(&self) -> usize {
        self.lines
            .iter()
            .filter_map(|line| match line.kind {
                LineKind::Comb(index) => Some(index + 1),
                _ => None,
            })
            .max()
            .unwrap_or(0)
    }

    fn push_line(&mut self, kind: LineKind, points: Segment, ink: Ink) {
        self.lines.push(SceneLine {
            kind,
            points,
            thickness: LINE_THICKNESS,
            ink,
        });
    }

    fn push_label(&mut self, text: String, pos: Pos2) {
        self.labels.push(SceneLabel {
            text,
            pos,
            size: LABEL_FONT_SIZE,
            ink: Ink::Label,
        });
    }

    fn push_byte_labels(&mut self, rows: &[CombRow]) {
        for row in rows {
            self.push_label(
                format!("{:02X}", row.byte),
                pos2(AXIS_X + BYTE_LABEL_DX, row.y + BYTE_LABEL_DY),
            );
        }
    }

    /// Nibble values 0-F under the end of each possible segment, both sides.
    fn push_tick_labels(&mut self) {
        let y = BOTTOM_Y + TICK_LABEL_DROP;
        for nibble in 0..=15u8 {
            let len = layout::nibble_length(nibble);
            let text = format!("{:X}", nibble);
            self.push_label(text.clone(), pos2(AXIS_X - len, y));
            self.push_label(text, pos2(AXIS_X + len, y));
        }
    }
}
