//! Colour types and parsing.

use std::fmt;
use std::str::FromStr;

use crate::convert;
use crate::error::{HuedeckError, Result};

/// An RGB colour triple with 0-255 components.
///
/// Intermediate representation only; the canonical value is [`Colour`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new colour from RGB components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black. Also the silent fallback for malformed hex input.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::new(255, 255, 255);
}

/// An HSL colour triple.
///
/// Hue is in degrees. It is normally in [0, 360), but [`convert::rgb_to_hsl`]
/// may emit exactly 360 after rounding, and harmony arithmetic accepts any
/// integer; consumers normalize modulo 360. Saturation and lightness are
/// integer percentages in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hsl {
    pub h: i32,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    /// Create a new HSL triple.
    pub const fn new(h: i32, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }
}

/// The canonical colour value.
///
/// Stores HSL only; hex and RGB are derived on demand. The one-source-of-truth
/// layout means a saturation or lightness edit can never leave a stale hex
/// behind, at the cost of hex round-tripping within rounding tolerance rather
/// than byte-for-byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Colour {
    hsl: Hsl,
}

impl Colour {
    /// Create from HSL components. Hue is normalized into [0, 360);
    /// saturation and lightness are clamped to 100.
    pub fn from_hsl(h: i32, s: u8, l: u8) -> Self {
        Self {
            hsl: Hsl::new(h.rem_euclid(360), s.min(100), l.min(100)),
        }
    }

    /// Create from an RGB triple.
    pub fn from_rgb(rgb: Rgb) -> Self {
        let hsl = convert::rgb_to_hsl(rgb);
        // rgb_to_hsl can round hue up to 360
        Self::from_hsl(hsl.h, hsl.s, hsl.l)
    }

    /// Create from a hex string, falling back to black on malformed input.
    ///
    /// Accepts an optional leading `#` and exactly six hex digits. Anything
    /// else (shorthand, wrong length, non-hex characters) silently yields
    /// black; use [`Colour::parse`] to surface malformed input instead.
    pub fn from_hex(hex: &str) -> Self {
        Self::from_rgb(convert::hex_to_rgb(hex))
    }

    /// Parse a hex colour string, rejecting malformed input.
    ///
    /// Supports formats:
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#RRGGBB` (6 digits)
    ///
    /// The `#` is optional in both.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(parse_error(s));
        }

        match hex.len() {
            3 => {
                // #RGB -> #RRGGBB
                let mut digits = hex.chars().map(|c| c.to_digit(16).unwrap_or(0) as u8);
                let r = digits.next().unwrap_or(0);
                let g = digits.next().unwrap_or(0);
                let b = digits.next().unwrap_or(0);
                Ok(Self::from_rgb(Rgb::new(
                    r << 4 | r,
                    g << 4 | g,
                    b << 4 | b,
                )))
            }
            6 => Ok(Self::from_rgb(convert::hex_to_rgb(hex))),
            _ => Err(parse_error(s)),
        }
    }

    /// Hue in degrees, [0, 360).
    pub fn hue(&self) -> i32 {
        self.hsl.h
    }

    /// Saturation percent, [0, 100].
    pub fn saturation(&self) -> u8 {
        self.hsl.s
    }

    /// Lightness percent, [0, 100].
    pub fn lightness(&self) -> u8 {
        self.hsl.l
    }

    /// The stored HSL triple.
    pub fn hsl(&self) -> Hsl {
        self.hsl
    }

    /// Derive the RGB triple.
    pub fn rgb(&self) -> Rgb {
        convert::hsl_to_rgb(self.hsl.h as f64, self.hsl.s as f64, self.hsl.l as f64)
    }

    /// Derive the hex string, lowercase `#rrggbb`.
    pub fn hex(&self) -> String {
        convert::rgb_to_hex(self.rgb())
    }
}

impl FromStr for Colour {
    type Err = HuedeckError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hex())
    }
}

fn parse_error(s: &str) -> HuedeckError {
    HuedeckError::Parse {
        message: format!("Invalid hex colour: {}", s),
        help: Some("Use #RGB or #RRGGBB format".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_6digit() {
        let c = Colour::parse("#ff0000").unwrap();
        assert_eq!(c.hsl(), Hsl::new(0, 100, 50));

        let c = Colour::parse("00ff00").unwrap();
        assert_eq!(c.hsl(), Hsl::new(120, 100, 50));
    }

    #[test]
    fn test_parse_3digit() {
        // #f00 expands to #ff0000
        let red = Colour::parse("#f00").unwrap();
        assert_eq!(red, Colour::parse("#ff0000").unwrap());

        let grey = Colour::parse("#888").unwrap();
        assert_eq!(grey, Colour::from_rgb(Rgb::new(0x88, 0x88, 0x88)));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Colour::parse("#ggg").is_err());
        assert!(Colour::parse("#12345").is_err());
        assert!(Colour::parse("notacolor").is_err());
        assert!(Colour::parse("").is_err());
    }

    #[test]
    fn test_from_hex_falls_back_to_black() {
        assert_eq!(Colour::from_hex("nope"), Colour::from_rgb(Rgb::BLACK));
        // Shorthand is not accepted by the permissive path
        assert_eq!(Colour::from_hex("#f00"), Colour::from_rgb(Rgb::BLACK));
    }

    #[test]
    fn test_from_hsl_normalizes_hue() {
        assert_eq!(Colour::from_hsl(-30, 50, 50), Colour::from_hsl(330, 50, 50));
        assert_eq!(Colour::from_hsl(360, 50, 50).hue(), 0);
        assert_eq!(Colour::from_hsl(725, 50, 50).hue(), 5);
    }

    #[test]
    fn test_from_hsl_clamps_percentages() {
        let c = Colour::from_hsl(0, 150, 200);
        assert_eq!(c.saturation(), 100);
        assert_eq!(c.lightness(), 100);
    }

    #[test]
    fn test_hex_derivation() {
        assert_eq!(Colour::from_hsl(0, 100, 50).hex(), "#ff0000");
        assert_eq!(Colour::from_hsl(0, 0, 100).hex(), "#ffffff");
        assert_eq!(format!("{}", Colour::from_hsl(240, 100, 50)), "#0000ff");
    }

    #[test]
    fn test_hex_round_trip_within_tolerance() {
        // HSL-only storage quantizes to integer degrees/percent, so a hex
        // round trip is close but not necessarily byte-identical.
        let c = Colour::from_hex("#ff5733");
        assert_eq!(c.hsl(), Hsl::new(11, 100, 60));
        let back = c.rgb();
        assert!((back.r as i32 - 0xff).abs() <= 2);
        assert!((back.g as i32 - 0x57).abs() <= 2);
        assert!((back.b as i32 - 0x33).abs() <= 2);
    }

    #[test]
    fn test_from_str() {
        let c: Colour = "#26d9d9".parse().unwrap();
        assert_eq!(c.hue(), 180);
    }
}
