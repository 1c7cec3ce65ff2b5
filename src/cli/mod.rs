// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction, built on `clap`.
// This layer only routes — the parsing itself lives in Layer 2.
//
// One command is supported:
//   `parse` — analyzes a sentence and prints the three buckets

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, ParseArgs};

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "sentence-parse",
    version = "0.1.0",
    about = "Extract entities, verbs and nuance pairs from a sentence."
)]
pub struct Cli {
    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dispatch to the matching subcommand handler.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Parse(args) => Self::run_parse(args),
        }
    }

    /// Handles the `parse` subcommand: constructs the Parser over
    /// the pretrained model, parses once, prints the result.
    fn run_parse(args: ParseArgs) -> Result<()> {
        tracing::info!("Parsing: {}", args.sentence);

        let parser = crate::application::parser::Parser::new()?;
        let result = parser.parse(&args.sentence)?;

        if args.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!("{result}");
        }
        Ok(())
    }
}
