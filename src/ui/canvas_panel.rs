//! Canvas panel UI rendering
//!
//! Fills the window with the diagram: clears to the theme background, centres
//! the camera on the available area and paints the frame's scene.

use crate::rendering::scene_renderer;
use tetsuo::{ByteBuffer, Scene, ThemeColors, ViewState};

/// Renders the full-window canvas for this frame.
pub fn render_canvas_panel(
    ctx: &egui::Context,
    bytes: &ByteBuffer,
    view: &mut ViewState,
    theme_colors: &ThemeColors,
) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(theme_colors.background))
        .show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::drag());
            view.camera.center_on(response.rect);

            let scene = Scene::build(bytes.as_slice(), view);
            scene_renderer::render_scene(&painter, &scene, &view.camera, theme_colors);
        });
}
