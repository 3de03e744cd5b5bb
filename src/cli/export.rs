use std::path::PathBuf;

use clap::Args;

use crate::cli::parse_colour_arg;
use crate::error::{HuedeckError, Result};
use crate::output::{display_path, plural, Printer};
use crate::session::Session;
use crate::types::HarmonyKind;

/// Write a palette export document
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Base colour: hex (#RRGGBB) or h,s,l triple
    #[arg(required = true)]
    pub colour: String,

    /// Output file (defaults to color-harmony-<hex>.json)
    #[arg(long, short = 'o')]
    pub out: Option<PathBuf>,

    /// Also mark a harmony as a saved palette (repeatable),
    /// e.g. --save complementary --save triadic
    #[arg(long, value_name = "NAME")]
    pub save: Vec<String>,
}

pub fn run(args: ExportArgs, printer: &Printer) -> Result<()> {
    let colour = parse_colour_arg(&args.colour)?;

    let mut session = Session::new();
    session.set_hex(&colour.hex())?;

    for name in &args.save {
        let kind = HarmonyKind::from_name(name).ok_or_else(|| HuedeckError::Parse {
            message: format!("Unknown harmony: {}", name),
            help: Some(
                "Available harmonies: complementary, analogous, triadic, tetradic, \
                 split-complementary"
                    .to_string(),
            ),
        })?;
        let palette = session
            .harmonies()
            .into_iter()
            .find(|h| h.name == kind.name())
            .ok_or_else(|| HuedeckError::Export {
                message: format!("Harmony {} was not generated", kind.name()),
                help: None,
            })?;
        session.save_palette(palette);
    }

    let export = session.export()?;
    let path = args
        .out
        .unwrap_or_else(|| PathBuf::from(session.export_file_name()));
    export.write_to(&path)?;

    printer.success(
        "Exported",
        &format!(
            "{} to {}",
            plural(export.palettes.len(), "palette", "palettes"),
            display_path(&path)
        ),
    );

    Ok(())
}
