//! Core domain types for huedeck.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Colour` - the canonical colour value (HSL storage, hex derived)
//! - `Rgb` / `Hsl` - component triples used by the conversion functions
//! - `Harmony` / `HarmonyKind` - named harmony palettes

mod colour;
mod harmony;

pub use colour::{Colour, Hsl, Rgb};
pub use harmony::{generate_harmonies, Harmony, HarmonyKind};
