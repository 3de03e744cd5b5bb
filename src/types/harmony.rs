//! Colour harmony kinds and palette generation.
//!
//! A harmony is a fixed set of hue offsets from a base hue; saturation and
//! lightness are carried through unchanged, so every palette varies hue only.

use serde::{Deserialize, Serialize};

use crate::convert::hsl_to_hex;

/// The five supported harmony kinds, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HarmonyKind {
    Complementary,
    Analogous,
    Triadic,
    Tetradic,
    SplitComplementary,
}

impl HarmonyKind {
    /// All kinds, in the fixed order palettes are generated and rendered.
    pub const ALL: [HarmonyKind; 5] = [
        Self::Complementary,
        Self::Analogous,
        Self::Triadic,
        Self::Tetradic,
        Self::SplitComplementary,
    ];

    /// Display name, as it appears in palette listings and exports.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Complementary => "Complementary",
            Self::Analogous => "Analogous",
            Self::Triadic => "Triadic",
            Self::Tetradic => "Tetradic",
            Self::SplitComplementary => "Split Complementary",
        }
    }

    /// Hue offsets from the base hue, in degrees. The base itself (offset 0)
    /// is not listed; generated palettes always lead with it.
    pub fn offsets(&self) -> &'static [i32] {
        match self {
            Self::Complementary => &[180],
            Self::Analogous => &[30, 330],
            Self::Triadic => &[120, 240],
            Self::Tetradic => &[90, 180, 270],
            Self::SplitComplementary => &[150, 210],
        }
    }

    /// Look up a kind by its display name, case-insensitively.
    /// Accepts `split-complementary` as well as the spaced form.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase().replace('-', " ");
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().to_ascii_lowercase() == name)
    }
}

/// A named harmony palette: the base colour's hex first, then the offset
/// hues, in the kind's fixed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Harmony {
    pub name: String,
    pub colors: Vec<String>,
}

/// Generate the five harmony palettes for a base HSL triple.
///
/// The hue may be any integer; it is normalized into [0, 360) first, so a
/// hue of -30 and a hue of 330 generate identical palettes. Deterministic:
/// the same inputs always produce the same sequence.
pub fn generate_harmonies(hue: i32, saturation: u8, lightness: u8) -> Vec<Harmony> {
    let hue = hue.rem_euclid(360);
    let s = saturation as f64;
    let l = lightness as f64;
    let base = hsl_to_hex(hue as f64, s, l);

    HarmonyKind::ALL
        .into_iter()
        .map(|kind| {
            let mut colors = Vec::with_capacity(1 + kind.offsets().len());
            colors.push(base.clone());
            colors.extend(
                kind.offsets()
                    .iter()
                    .map(|offset| hsl_to_hex(((hue + offset) % 360) as f64, s, l)),
            );
            Harmony {
                name: kind.name().to_string(),
                colors,
            }
        })
        .collect()
}
