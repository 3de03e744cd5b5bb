use clap::Args;

use crate::cli::parse_colour_arg;
use crate::error::{HuedeckError, Result};
use crate::output::{plural, Printer};
use crate::types::generate_harmonies;

/// Derive harmony palettes from a base colour
#[derive(Args, Debug)]
pub struct HarmoniesArgs {
    /// Base colour: hex (#RRGGBB) or h,s,l triple
    #[arg(required = true)]
    pub colour: String,

    /// Print the palettes as JSON instead of one line per palette
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: HarmoniesArgs, printer: &Printer) -> Result<()> {
    let colour = parse_colour_arg(&args.colour)?;
    let hsl = colour.hsl();
    let harmonies = generate_harmonies(hsl.h, hsl.s, hsl.l);

    printer.status(
        "Deriving",
        &format!(
            "{} from {}",
            plural(harmonies.len(), "palette", "palettes"),
            colour.hex()
        ),
    );

    if args.json {
        let json = serde_json::to_string_pretty(&harmonies).map_err(|e| HuedeckError::Export {
            message: format!("Cannot serialize palettes: {}", e),
            help: None,
        })?;
        println!("{}", json);
    } else {
        for harmony in &harmonies {
            println!("{}: {}", harmony.name, harmony.colors.join(" "));
        }
    }

    Ok(())
}
