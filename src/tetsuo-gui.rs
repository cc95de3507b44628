//! Tetsuo comb viewer GUI application
//!
//! Reads one line of hex bytes from standard input and draws each byte as a
//! pair of L-shaped "comb" lines branching from a vertical axis: the high
//! nibble sets the left arm, the low nibble the right arm.
//!
//! Controls:
//! - `L` toggles byte and tick labels
//! - `Y` toggles the vertical axis
//! - Mouse wheel zooms, left drag pans
//! - `Escape` closes the window
//!
//! `--base58 <KEY>` takes the bytes from a Base58 private key instead of
//! stdin, and `--print-key` prints the bytes as a Base58 key without opening
//! the window.
//!
//! The application is built with a modular architecture:
//! - `cli` - Command-line options
//! - `logging` - Tracing subscriber setup
//! - `io/` - Standard input reading
//! - `ui/` - Canvas panel and input handling
//! - `rendering/` - Camera-mapped painting of the scene

use clap::Parser;
use eframe::egui;

mod cli;
mod io;
mod logging;
mod rendering;
mod ui;

use tetsuo::layout::{SCREEN_HEIGHT, SCREEN_WIDTH};
use tetsuo::{key, ByteBuffer, ThemeManager, ViewState};
use ui::input::canvas_input_handler;

const WINDOW_TITLE: &str = "256K Tetsuo";

/// Loads the bytes, then launches the viewer window.
fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    logging::init()?;

    let bytes = match &args.base58 {
        Some(encoded) => key::decode_private_key(encoded)?,
        None => ByteBuffer::parse(&io::read_stdin_line()?),
    };
    tracing::debug!(count = bytes.len(), bytes = %bytes.to_hex_string(), "parsed input");

    if args.print_key {
        println!("{}", key::encode_private_key(bytes.as_slice()));
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([SCREEN_WIDTH, SCREEN_HEIGHT])
            .with_fullscreen(!args.windowed)
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    let theme_name = args.theme.theme_name();
    tracing::debug!(theme = theme_name, fullscreen = !args.windowed, "opening window");

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(TetsuoViewerApp::new(cc, bytes, theme_name)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to open window: {}", e))
}

/// The comb viewer application.
///
/// Holds the immutable byte buffer and the view state; each frame applies
/// input to the view, then renders from it.
struct TetsuoViewerApp {
    /// Bytes read at startup
    bytes: ByteBuffer,
    /// Camera, display flags and drag state
    view: ViewState,
    /// Palettes, with the selected one current
    themes: ThemeManager,
}

impl TetsuoViewerApp {
    fn new(cc: &eframe::CreationContext, bytes: ByteBuffer, theme_name: &str) -> Self {
        let mut themes = ThemeManager::new();
        if let Err(e) = themes.set_current_theme(theme_name) {
            tracing::warn!("{}, using {}", e, themes.current_theme().name);
        }

        let theme = themes.current_theme();
        let mut visuals = if theme.name == "Light" {
            egui::Visuals::light()
        } else {
            egui::Visuals::dark()
        };
        themes.apply_theme(theme, &mut visuals);
        cc.egui_ctx.set_visuals(visuals);

        Self {
            bytes,
            view: ViewState::new(),
            themes,
        }
    }
}

impl eframe::App for TetsuoViewerApp {
    /// One frame: sample input, update the view, then draw.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let input = canvas_input_handler::collect_frame_input(ctx);
        if input.should_close() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        self.view.apply(&input);

        let colors = &self.themes.current_theme().colors;
        ui::canvas_panel::render_canvas_panel(ctx, &self.bytes, &mut self.view, colors);
    }
}
