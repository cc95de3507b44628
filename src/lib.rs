pub mod hex_parser;
pub mod key;
pub mod layout;
pub mod camera;
pub mod geometry;
pub mod scene;
pub mod view_state;
pub mod theme;

// Export parsing
pub use hex_parser::{ByteBuffer, parse_hex_bytes, parse_hex_token, MAX_BYTES};

// Export Base58 key conversion
pub use key::{decode_private_key, encode_private_key, hex_to_private_key, private_key_to_hex};

// Export layout
pub use layout::{CombRow, LShape, Segment, comb_rows, nibble_length, row_y};

// Export camera and interaction state
pub use camera::{Camera2D, MIN_ZOOM};
pub use view_state::{ViewState, FrameInput, DragState};

// Export drawing
pub use scene::{Scene, SceneLine, SceneLabel, LineKind, Ink};
pub use geometry::stroke_polygon;

// Export theme support
pub use theme::{Theme, ThemeColors, ThemeManager, hex_to_color32};
