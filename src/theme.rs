//! Colour themes for the comb viewer.
//!
//! Built-in themes are "Light" (white paper, black ink, red axis) and "Dark".
//!
//! # Examples
//!
//! ```
//! use tetsuo::theme::ThemeManager;
//!
//! let mut manager = ThemeManager::new();
//! manager.set_current_theme("Dark").unwrap();
//! println!("Dark background: {:?}", manager.current_theme().colors.background);
//! ```

use egui::Color32;
use std::collections::HashMap;

/// Palette covering every ink used by the diagram
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub background: Color32,
    /// Comb segments
    pub line: Color32,
    /// Horizontal baseline
    pub axis: Color32,
    /// Vertical axis
    pub accent: Color32,
    /// Byte and tick labels
    pub label: Color32,
}

/// A named palette
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Lookup of the built-in themes plus the current selection
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    current_theme_name: String,
}

impl ThemeManager {
    /// Creates a manager holding all built-in themes, "Light" selected
    pub fn new() -> Self {
        let mut themes = HashMap::new();

        themes.insert("Light".to_string(), light_theme());
        themes.insert("Dark".to_string(), dark_theme());

        Self {
            themes,
            current_theme_name: "Light".to_string(),
        }
    }

    /// Gets the currently selected theme
    pub fn current_theme(&self) -> &Theme {
        self.themes
            .get(&self.current_theme_name)
            .unwrap_or_else(|| &self.themes["Light"])
    }

    /// Selects a theme by name
    pub fn set_current_theme(&mut self, name: &str) -> Result<(), String> {
        if self.themes.contains_key(name) {
            self.current_theme_name = name.to_string();
            Ok(())
        } else {
            Err(format!("Theme '{}' not found", name))
        }
    }

    /// Applies a theme's background to egui visuals
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;
        visuals.panel_fill = colors.background;
        visuals.window_fill = colors.background;
        visuals.extreme_bg_color = colors.background;
        visuals.override_text_color = Some(colors.label);
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates the Light theme (the classic black-on-white diagram)
fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        colors: ThemeColors {
            background: Color32::WHITE,
            line: Color32::BLACK,
            axis: Color32::BLACK,
            accent: Color32::from_rgb(230, 41, 55),
            label: Color32::BLACK,
        },
    }
}

/// Creates the Dark theme
fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        colors: ThemeColors {
            background: hex_to_color32("#1e1e1e"),
            line: hex_to_color32("#e0e0e0"),
            axis: hex_to_color32("#a0a0a0"),
            accent: hex_to_color32("#ff5555"),
            label: hex_to_color32("#f1fa8c"),
        },
    }
}

/// Converts a hex color string (like "#282a36") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}
