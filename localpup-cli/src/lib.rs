//! Command-line interface for scoring Localpup hotel listings offline.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod score;

pub use error::CliError;

use score::ScoreArgs;

pub(crate) const ARG_SCORE_ITEMS: &str = "items";
pub(crate) const ARG_SCORE_PROFILE: &str = "profile";
pub(crate) const ARG_SCORE_TOP_PERCENT: &str = "top-percent";
pub(crate) const ARG_SCORE_OUTPUT: &str = "output";
pub(crate) const ENV_SCORE_ITEMS: &str = "LOCALPUP_CMDS_SCORE_ITEMS";

/// Run the Localpup CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, inputs
/// cannot be read or parsed, or the report cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Score(args) => score::run_score(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "localpup",
    about = "Offline composite scoring for Localpup hotel listings",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score, rank, and summarise hotels from a JSON file.
    Score(ScoreArgs),
}

#[cfg(test)]
mod tests;
