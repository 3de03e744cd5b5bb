pub mod convert;
pub mod export;
pub mod harmonies;

use clap::{Parser, Subcommand};

use crate::error::{HuedeckError, Result};
use crate::types::Colour;

/// huedeck - Colour harmony palette generator
#[derive(Parser, Debug)]
#[command(name = "huedeck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Derive the five harmony palettes from a base colour
    Harmonies(harmonies::HarmoniesArgs),

    /// Show a colour in hex, RGB, and HSL, with its perceptual brightness
    Convert(convert::ConvertArgs),

    /// Write a palette export document (JSON) for a base colour
    Export(export::ExportArgs),
}

/// Parse a colour argument: either a hex string (`#RRGGBB`, `RRGGBB`,
/// `#RGB`) or a comma-separated `h,s,l` triple.
pub fn parse_colour_arg(input: &str) -> Result<Colour> {
    let input = input.trim();

    if input.contains(',') {
        let parts: Vec<&str> = input.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(triple_error(input));
        }
        let h: i32 = parts[0].parse().map_err(|_| triple_error(input))?;
        let s: u8 = parts[1].parse().map_err(|_| triple_error(input))?;
        let l: u8 = parts[2].parse().map_err(|_| triple_error(input))?;
        if s > 100 || l > 100 {
            return Err(HuedeckError::Parse {
                message: format!("Saturation and lightness must be 0-100: {}", input),
                help: Some("Hue may be any integer; it wraps modulo 360".to_string()),
            });
        }
        Ok(Colour::from_hsl(h, s, l))
    } else {
        Colour::parse(input)
    }
}

fn triple_error(input: &str) -> HuedeckError {
    HuedeckError::Parse {
        message: format!("Invalid HSL triple: {}", input),
        help: Some("Use h,s,l with integer degrees and percentages, e.g. 210,70,50".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Hsl;

    #[test]
    fn test_parse_colour_arg_hex() {
        let c = parse_colour_arg("#ff0000").unwrap();
        assert_eq!(c.hsl(), Hsl::new(0, 100, 50));
    }

    #[test]
    fn test_parse_colour_arg_triple() {
        let c = parse_colour_arg("210, 70, 50").unwrap();
        assert_eq!(c.hsl(), Hsl::new(210, 70, 50));

        // Negative hue wraps
        let c = parse_colour_arg("-30,50,50").unwrap();
        assert_eq!(c.hue(), 330);
    }

    #[test]
    fn test_parse_colour_arg_invalid() {
        assert!(parse_colour_arg("210,70").is_err());
        assert!(parse_colour_arg("210,70,50,10").is_err());
        assert!(parse_colour_arg("a,b,c").is_err());
        assert!(parse_colour_arg("210,700,50").is_err());
        assert!(parse_colour_arg("nothex").is_err());
    }
}
