use clap::Parser;
use icongen::cli::{Cli, Commands};
use icongen::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command.unwrap_or_default() {
        Commands::Generate(args) => icongen::cli::generate::run(args, &printer)?,
        Commands::Targets(args) => icongen::cli::targets::run(args, &printer)?,
        Commands::Check(args) => icongen::cli::check::run(args, &printer)?,
    }

    Ok(())
}
