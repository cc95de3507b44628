//! Command-line options for the viewer.

use clap::{Parser, ValueEnum};

/// Comb viewer: draws the hex bytes read from standard input as a comb diagram
#[derive(Parser, Debug)]
#[command(name = "tetsuo-gui")]
#[command(version)]
#[command(about = "Visualize a line of hex bytes as a symmetric comb diagram")]
pub struct Args {
    /// Start in a normal window instead of fullscreen
    #[arg(long)]
    pub windowed: bool,

    /// Colour theme
    #[arg(long, value_enum, default_value_t = ThemeArg::Light)]
    pub theme: ThemeArg,

    /// Take the bytes from a Base58 private key (first 32 bytes) instead of stdin
    #[arg(long, value_name = "KEY")]
    pub base58: Option<String>,

    /// Print the bytes as a Base58 key and exit without opening the window
    #[arg(long)]
    pub print_key: bool,
}

/// Built-in themes selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
}

impl ThemeArg {
    /// Name of the matching theme in the theme manager.
    pub fn theme_name(self) -> &'static str {
        match self {
            ThemeArg::Light => "Light",
            ThemeArg::Dark => "Dark",
        }
    }
}
