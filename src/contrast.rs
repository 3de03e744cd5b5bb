//! Perceptual brightness and overlay text colour selection.
//!
//! Uses the BT.601 luma weights rather than WCAG relative luminance: the
//! output drives a binary light-or-dark text decision over a swatch, not a
//! contrast-ratio audit.

use crate::convert::hex_to_rgb;

/// Perceptual brightness of a hex colour, 0.0-255.0.
///
/// Weighted luma `(299 r + 587 g + 114 b) / 1000`, unrounded. Malformed hex
/// input inherits the conversion fallback and reports black's brightness.
pub fn brightness(hex: &str) -> f64 {
    let rgb = hex_to_rgb(hex);
    (rgb.r as f64 * 299.0 + rgb.g as f64 * 587.0 + rgb.b as f64 * 114.0) / 1000.0
}

/// The legible text colour to overlay on a swatch of the given colour.
///
/// Black over bright backgrounds, white otherwise. The threshold is a strict
/// `> 128`: mid-grey (brightness exactly 128) gets white text.
pub fn contrasting_text_colour(hex: &str) -> &'static str {
    if brightness(hex) > 128.0 {
        "#000000"
    } else {
        "#ffffff"
    }
}
