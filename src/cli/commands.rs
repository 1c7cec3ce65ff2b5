// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the `parse` subcommand and its flags. clap's derive
// macros generate help text, error messages and type conversion.

use clap::{Args, Subcommand};

/// The top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a sentence and print its entities, verbs and nuances
    Parse(ParseArgs),
}

/// All arguments for the `parse` command.
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// The sentence to analyze
    #[arg(default_value = "I code good program carefully")]
    pub sentence: String,

    /// Print the result as pretty JSON instead of key-value text
    #[arg(long)]
    pub json: bool,
}
