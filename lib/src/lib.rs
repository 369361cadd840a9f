//! Octant Renderer - truecolor Unicode block art for the terminal
//!
//! Each 2×4 block of pixels becomes one octant glyph drawn with a
//! foreground/background color pair via 24-bit SGR escape codes.
//!
//! # Example
//! ```no_run
//! use octant_rendr::{RenderConfig, load_image, render_image};
//!
//! let input = load_image("photo.jpg").unwrap();
//! let config = RenderConfig {
//!     columns: Some(80),
//!     ..Default::default()
//! };
//! render_image(&input, &config, &mut std::io::stdout().lock()).unwrap();
//! ```

pub mod ansi;
pub mod cell;
pub mod color;
pub mod config;
pub mod error;
pub mod glyphs;
pub mod grid;
pub mod pattern;
pub mod processor;
pub mod quantize;

// Re-export main types for convenience
pub use cell::{Cell, CellRenderer, RenderedCell};
pub use config::{PaletteMode, RenderConfig};
pub use error::RenderError;
pub use glyphs::GlyphTable;
pub use processor::{load_image, render_image, render_to_string};
