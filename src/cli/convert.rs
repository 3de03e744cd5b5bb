use clap::Args;

use crate::cli::parse_colour_arg;
use crate::contrast::{brightness, contrasting_text_colour};
use crate::error::Result;
use crate::output::Printer;

/// Show a colour in every representation
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Colour: hex (#RRGGBB) or h,s,l triple
    #[arg(required = true)]
    pub colour: String,
}

pub fn run(args: ConvertArgs, printer: &Printer) -> Result<()> {
    let colour = parse_colour_arg(&args.colour)?;
    let hex = colour.hex();
    let rgb = colour.rgb();
    let hsl = colour.hsl();

    printer.info("Converting", &args.colour);

    println!("hex: {}", hex);
    println!("rgb: {}, {}, {}", rgb.r, rgb.g, rgb.b);
    println!("hsl: {}, {}, {}", hsl.h, hsl.s, hsl.l);
    println!("brightness: {:.1}", brightness(&hex));
    println!("text: {}", contrasting_text_colour(&hex));

    Ok(())
}
