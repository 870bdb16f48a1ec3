pub mod check;
pub mod generate;
pub mod targets;

use clap::{Parser, Subcommand};

/// icongen - Brand icon and favicon set generator
#[derive(Parser, Debug)]
#[command(name = "icongen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Defaults to `generate` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Draw the icon and write the favicon and app icon files
    Generate(generate::GenerateArgs),

    /// List the files that `generate` writes
    Targets(targets::TargetsArgs),

    /// Verify a generated output directory
    Check(check::CheckArgs),
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Generate(generate::GenerateArgs::default())
    }
}
