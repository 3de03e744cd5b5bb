//! huedeck - Colour harmony palette engine
//!
//! A library for converting colours among hex, RGB, and HSL, deriving the
//! five named colour-harmony palettes from a base colour, and mapping
//! pointer angles on a radial picker to hues and back. The engine modules
//! are pure and stateless; `Session` carries the caller-side picker state
//! and feeds the JSON export document.

pub mod cli;
pub mod contrast;
pub mod convert;
pub mod error;
pub mod export;
pub mod output;
pub mod session;
pub mod types;
pub mod wheel;

pub use contrast::{brightness, contrasting_text_colour};
pub use convert::{hex_to_hsl, hex_to_rgb, hsl_to_hex, hsl_to_rgb, rgb_to_hex, rgb_to_hsl};
pub use error::{HuedeckError, Result};
pub use export::PaletteExport;
pub use session::Session;
pub use types::{generate_harmonies, Colour, Harmony, HarmonyKind, Hsl, Rgb};
pub use wheel::{
    angle_from_pointer, indicator_position, pointer_position_from_angle, wheel_wedges, Wedge,
};
