use clap::Parser;
use huedeck::cli::{Cli, Commands};
use huedeck::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Harmonies(args) => huedeck::cli::harmonies::run(args, &printer)?,
        Commands::Convert(args) => huedeck::cli::convert::run(args, &printer)?,
        Commands::Export(args) => huedeck::cli::export::run(args, &printer)?,
    }

    Ok(())
}
