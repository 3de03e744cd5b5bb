//! Picker session state.
//!
//! The engine itself is stateless; `Session` is the caller-side state a UI
//! over it would own: the selected colour, the wheel's saturation/lightness
//! sliders, and palettes saved during the session (in process memory only).

use crate::error::Result;
use crate::export::PaletteExport;
use crate::types::{generate_harmonies, Colour, Harmony};

/// Session defaults: the application's original base colour and wheel
/// slider positions.
pub const DEFAULT_HEX: &str = "#ff5733";
pub const DEFAULT_SATURATION: u8 = 70;
pub const DEFAULT_LIGHTNESS: u8 = 50;

/// Interactive picker state.
///
/// Harmonies are always derived from the selected colour's hue plus the
/// current slider values, recomputed on every change; nothing is cached.
#[derive(Debug, Clone)]
pub struct Session {
    colour: Colour,
    saturation: u8,
    lightness: u8,
    saved: Vec<Harmony>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            colour: Colour::from_hex(DEFAULT_HEX),
            saturation: DEFAULT_SATURATION,
            lightness: DEFAULT_LIGHTNESS,
            saved: Vec::new(),
        }
    }

    /// The currently selected colour.
    pub fn colour(&self) -> Colour {
        self.colour
    }

    /// Current saturation slider value, percent.
    pub fn saturation(&self) -> u8 {
        self.saturation
    }

    /// Current lightness slider value, percent.
    pub fn lightness(&self) -> u8 {
        self.lightness
    }

    /// Palettes saved so far, in save order.
    pub fn saved(&self) -> &[Harmony] {
        &self.saved
    }

    /// Select a colour from hex input. Both sliders snap to the parsed
    /// colour's saturation and lightness.
    pub fn set_hex(&mut self, hex: &str) -> Result<()> {
        let colour = Colour::parse(hex)?;
        self.saturation = colour.saturation();
        self.lightness = colour.lightness();
        self.colour = colour;
        Ok(())
    }

    /// Select a colour from a wheel angle, keeping the slider values.
    /// Sub-degree drag positions round to the nearest whole hue.
    pub fn select_angle(&mut self, angle: f64) {
        self.colour = Colour::from_hsl(angle.round() as i32, self.saturation, self.lightness);
    }

    /// Move the saturation slider; the selected colour follows.
    pub fn set_saturation(&mut self, saturation: u8) {
        self.saturation = saturation.min(100);
        self.colour = Colour::from_hsl(self.colour.hue(), self.saturation, self.lightness);
    }

    /// Move the lightness slider; the selected colour follows.
    pub fn set_lightness(&mut self, lightness: u8) {
        self.lightness = lightness.min(100);
        self.colour = Colour::from_hsl(self.colour.hue(), self.saturation, self.lightness);
    }

    /// Derive the five harmony palettes for the current selection.
    pub fn harmonies(&self) -> Vec<Harmony> {
        generate_harmonies(self.colour.hue(), self.saturation, self.lightness)
    }

    /// Save a palette. Append-only; saving the same palette twice keeps
    /// both copies.
    pub fn save_palette(&mut self, harmony: Harmony) {
        self.saved.push(harmony);
    }

    /// Build the export document: current harmonies, then saved palettes.
    pub fn export(&self) -> Result<PaletteExport> {
        PaletteExport::assemble(self.harmonies(), &self.saved, self.colour.hex())
    }

    /// Default file name for a written export,
    /// e.g. `color-harmony-ff5833.json`.
    pub fn export_file_name(&self) -> String {
        format!(
            "color-harmony-{}.json",
            self.colour.hex().trim_start_matches('#')
        )
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
