//! Rendering subsystem for drawing the comb diagram
//!
//! - Scene rendering (camera-mapped lines and labels)

pub mod scene_renderer;
