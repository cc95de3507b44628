//! UI panel rendering subsystem
//!
//! - Canvas panel (full-window diagram)
//! - Input handling (keyboard toggles, wheel zoom, drag panning)

pub mod canvas_panel;
pub mod input;
