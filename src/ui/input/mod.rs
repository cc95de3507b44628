//! Input handling subsystem for canvas interactions.
//!
//! This module contains all input handling logic:
//! - Keyboard toggles and close shortcut
//! - Mouse wheel zoom and drag panning

pub mod canvas_input_handler;
