//! Canvas input handling for toggles, zoom and pan.
//!
//! Translates egui's raw input into a [`FrameInput`]:
//! - `L` toggles labels, `Y` toggles the vertical axis (key-down edges only)
//! - Mouse wheel zooms
//! - Left mouse + drag pans
//! - `Escape` closes the window

use eframe::egui;
use egui::{Event, Key, MouseWheelUnit, Pos2};
use tetsuo::FrameInput;

pub const TOGGLE_LABELS_KEY: Key = Key::L;
pub const TOGGLE_AXIS_KEY: Key = Key::Y;
pub const CLOSE_KEY: Key = Key::Escape;

/// Pixel-precise scroll distance counted as one wheel notch.
// Tuning value for trackpads and smooth scrolling, picked by feel.
pub const POINTS_PER_NOTCH: f32 = 50.0;

/// Samples this frame's input from the egui context.
pub fn collect_frame_input(ctx: &egui::Context) -> FrameInput {
    ctx.input(|i| {
        let mut input = frame_input_from_events(
            &i.events,
            i.pointer.primary_down(),
            i.pointer.latest_pos(),
        );
        input.close_requested |= i.viewport().close_requested();
        input
    })
}

/// Builds a [`FrameInput`] from the frame's event list and pointer state.
pub fn frame_input_from_events(
    events: &[Event],
    primary_down: bool,
    pointer: Option<Pos2>,
) -> FrameInput {
    let mut input = FrameInput {
        primary_down,
        pointer,
        ..Default::default()
    };

    for event in events {
        match event {
            Event::Key {
                key,
                pressed: true,
                repeat: false,
                ..
            } => match *key {
                TOGGLE_LABELS_KEY => input.toggle_labels = !input.toggle_labels,
                TOGGLE_AXIS_KEY => input.toggle_axis = !input.toggle_axis,
                CLOSE_KEY => input.close_requested = true,
                _ => {}
            },
            Event::MouseWheel { unit, delta, .. } => {
                input.wheel += wheel_notches(*unit, delta.y);
            }
            _ => {}
        }
    }

    input
}

/// Converts a vertical wheel delta to notches.
pub fn wheel_notches(unit: MouseWheelUnit, delta_y: f32) -> f32 {
    match unit {
        MouseWheelUnit::Point => delta_y / POINTS_PER_NOTCH,
        MouseWheelUnit::Line | MouseWheelUnit::Page => delta_y,
    }
}
