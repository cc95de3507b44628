//! Comb scene rendering
//!
//! Paints a world-space [`Scene`] through the camera: every point is mapped to
//! the screen, and stroke widths and font sizes scale with the zoom.

use eframe::egui;
use egui::{Align2, FontId, Stroke};
use tetsuo::{Camera2D, Scene, SceneLabel, SceneLine, ThemeColors};

/// Paints all lines, then all labels, of `scene`.
///
/// # Arguments
/// * `painter` - Painter clipped to the canvas
/// * `scene` - World-space draw list for this frame
/// * `camera` - Camera with its offset already centred on the canvas
/// * `colors` - Palette for the current theme
pub fn render_scene(
    painter: &egui::Painter,
    scene: &Scene,
    camera: &Camera2D,
    colors: &ThemeColors,
) {
    for line in &scene.lines {
        let (points, stroke) = screen_line(line, camera, colors);
        painter.line_segment(points, stroke);
    }

    for label in &scene.labels {
        painter.text(
            camera.world_to_screen(label.pos),
            Align2::LEFT_TOP,
            &label.text,
            label_font(label, camera),
            label.ink.color(colors),
        );
    }
}

/// Maps a scene line to screen points and a zoomed stroke.
pub fn screen_line(
    line: &SceneLine,
    camera: &Camera2D,
    colors: &ThemeColors,
) -> ([egui::Pos2; 2], Stroke) {
    let [from, to] = line.points;
    (
        [camera.world_to_screen(from), camera.world_to_screen(to)],
        Stroke::new(camera.scale(line.thickness), line.ink.color(colors)),
    )
}

fn label_font(label: &SceneLabel, camera: &Camera2D) -> FontId {
    FontId::proportional(camera.scale(label.size))
}
