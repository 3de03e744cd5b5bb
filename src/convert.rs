//! Colour space conversions between hex, RGB, and HSL.
//!
//! All functions are pure and total: malformed hex input falls back to black
//! rather than erroring, out-of-range hues wrap, and achromatic colours
//! (zero saturation) degrade to hue 0 by definition.

use crate::types::{Hsl, Rgb};

/// HSL → RGB.
///
/// `h` is in degrees (any real value; it is divided by 360 and not rejected,
/// so callers should pre-normalize far-out-of-range hues), `s` and `l` are
/// percentages. Channels are rounded to the nearest integer.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let h = h / 360.0;
    let s = s / 100.0;
    let l = l / 100.0;

    let (r, g, b) = if s == 0.0 {
        // achromatic
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    };

    Rgb::new(
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
    )
}

/// The piecewise hue-to-channel ramp of the standard HSL model.
fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

/// RGB → HSL.
///
/// Any grey (max channel == min channel, including pure black and white)
/// reports hue 0 and saturation 0. The rounded hue can come out as exactly
/// 360 for hues just below the wrap point; consumers normalize modulo 360.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (h / 6.0, s)
    };

    Hsl::new(
        (h * 360.0).round() as i32,
        (s * 100.0).round() as u8,
        (l * 100.0).round() as u8,
    )
}

/// RGB → hex, lowercase `#rrggbb`.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

/// Hex → RGB, permissive.
///
/// Accepts an optional leading `#` and exactly six hex digits,
/// case-insensitive. Any other shape (3-digit shorthand, wrong length,
/// non-hex characters) yields black. This is a silent default for free-form
/// user input, not an error signal; strict parsing lives in
/// [`crate::types::Colour::parse`].
pub fn hex_to_rgb(hex: &str) -> Rgb {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Rgb::BLACK;
    }
    Rgb::new(
        u8::from_str_radix(&digits[0..2], 16).unwrap_or(0),
        u8::from_str_radix(&digits[2..4], 16).unwrap_or(0),
        u8::from_str_radix(&digits[4..6], 16).unwrap_or(0),
    )
}

/// HSL → hex, through RGB.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    rgb_to_hex(hsl_to_rgb(h, s, l))
}

/// Hex → HSL, through RGB. Malformed input yields black's HSL (0, 0, 0).
pub fn hex_to_hsl(hex: &str) -> Hsl {
    rgb_to_hsl(hex_to_rgb(hex))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_hsl_to_rgb_primaries() {
        assert_eq!(hsl_to_rgb(0.0, 100.0, 50.0), Rgb::new(255, 0, 0));
        assert_eq!(hsl_to_rgb(120.0, 100.0, 50.0), Rgb::new(0, 255, 0));
        assert_eq!(hsl_to_rgb(240.0, 100.0, 50.0), Rgb::new(0, 0, 255));
    }

    #[test]
    fn test_hsl_to_rgb_achromatic() {
        // s == 0 short-circuits to r = g = b = l
        assert_eq!(hsl_to_rgb(123.0, 0.0, 60.0), Rgb::new(153, 153, 153));
        assert_eq!(hsl_to_rgb(0.0, 0.0, 0.0), Rgb::BLACK);
        assert_eq!(hsl_to_rgb(0.0, 0.0, 100.0), Rgb::WHITE);
    }

    #[test]
    fn test_hsl_to_rgb_hue_wraps_at_360() {
        assert_eq!(hsl_to_rgb(360.0, 70.0, 50.0), hsl_to_rgb(0.0, 70.0, 50.0));
    }

    #[test]
    fn test_hsl_to_hex_known_literals() {
        assert_eq!(hsl_to_hex(0.0, 70.0, 50.0), "#d92626");
        assert_eq!(hsl_to_hex(180.0, 70.0, 50.0), "#26d9d9");
        assert_eq!(hsl_to_hex(120.0, 100.0, 25.0), "#008000");
        // The default base colour's nominal triple; note #ff5733 itself sits
        // at a fractional hue (~10.59 degrees).
        assert_eq!(hsl_to_hex(10.0, 100.0, 60.0), "#ff5533");
    }

    #[test]
    fn test_rgb_to_hsl_primaries() {
        assert_eq!(rgb_to_hsl(Rgb::new(255, 0, 0)), Hsl::new(0, 100, 50));
        assert_eq!(rgb_to_hsl(Rgb::new(0, 255, 0)), Hsl::new(120, 100, 50));
        assert_eq!(rgb_to_hsl(Rgb::new(0, 0, 255)), Hsl::new(240, 100, 50));
    }

    #[test]
    fn test_rgb_to_hsl_achromatic_reports_hue_zero() {
        for x in [0u8, 1, 64, 127, 128, 200, 254, 255] {
            let hsl = rgb_to_hsl(Rgb::new(x, x, x));
            let expected_l = (x as f64 / 255.0 * 100.0).round() as u8;
            assert_eq!(hsl, Hsl::new(0, 0, expected_l));
        }
    }

    #[test]
    fn test_rgb_to_hsl_hue_can_round_to_360() {
        // A red a hair on the magenta side rounds up to the wrap point.
        let hsl = rgb_to_hsl(Rgb::new(255, 0, 1));
        assert_eq!(hsl.h, 360);
        assert_eq!(rgb_to_hsl(Rgb::new(255, 0, 1)).h.rem_euclid(360), 0);
    }

    #[test]
    fn test_hex_rgb_round_trip_exact() {
        for rgb in [
            Rgb::new(0, 0, 0),
            Rgb::new(255, 255, 255),
            Rgb::new(255, 87, 51),
            Rgb::new(1, 2, 3),
            Rgb::new(0x1a, 0x1a, 0x2e),
            Rgb::new(128, 128, 128),
        ] {
            assert_eq!(hex_to_rgb(&rgb_to_hex(rgb)), rgb);
        }
    }

    #[test]
    fn test_hex_to_rgb_case_insensitive() {
        assert_eq!(hex_to_rgb("#FF5733"), Rgb::new(255, 87, 51));
        assert_eq!(hex_to_rgb("ff5733"), Rgb::new(255, 87, 51));
    }

    #[test]
    fn test_hex_to_rgb_malformed_falls_back_to_black() {
        assert_eq!(hex_to_rgb("notacolor"), Rgb::BLACK);
        assert_eq!(hex_to_rgb("#12"), Rgb::BLACK);
        assert_eq!(hex_to_rgb("#f00"), Rgb::BLACK);
        assert_eq!(hex_to_rgb("#1234567"), Rgb::BLACK);
        assert_eq!(hex_to_rgb("##ff5733"), Rgb::BLACK);
        assert_eq!(hex_to_rgb(""), Rgb::BLACK);
    }

    #[test]
    fn test_hsl_round_trip_within_tolerance() {
        // Integer-percent HSL through 8-bit RGB and back lands within one
        // unit on every component for moderately saturated colours.
        for h in (0..360).step_by(15) {
            for s in [50u8, 70, 100] {
                for l in [30u8, 50, 70] {
                    let rgb = hsl_to_rgb(h as f64, s as f64, l as f64);
                    let back = rgb_to_hsl(rgb);
                    let dh = (back.h.rem_euclid(360) - h).rem_euclid(360).min(
                        (h - back.h.rem_euclid(360)).rem_euclid(360),
                    );
                    assert!(dh <= 1, "hue {} -> {} (s={}, l={})", h, back.h, s, l);
                    assert!((back.s as i32 - s as i32).abs() <= 1);
                    assert!((back.l as i32 - l as i32).abs() <= 1);
                }
            }
        }
    }

    #[test]
    fn test_hex_to_hsl_composition() {
        assert_eq!(hex_to_hsl("#ff5733"), Hsl::new(11, 100, 60));
        assert_eq!(hex_to_hsl("bogus"), Hsl::new(0, 0, 0));
    }
}
