//! Command-line interface definitions.

pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{AdviseArgs, CatalogArgs, RecommendArgs};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "trickcoach",
    version,
    about = "Recommend the next skateboard trick to learn",
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to a config file (overrides TRICKCOACH_CONFIG)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to a catalog JSON file (overrides the embedded catalog)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Machine-readable JSON output on stdout
    #[arg(long, global = true)]
    pub robot: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl Cli {
    #[must_use]
    pub const fn output_format(&self) -> OutputFormat {
        if self.robot {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Recommend the next tricks to attempt
    Recommend(RecommendArgs),
    /// Check whether a safety advisory applies to a trick
    Advise(AdviseArgs),
    /// List catalog tricks or show one profile
    Catalog(CatalogArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_recommend_with_flags() {
        let cli = Cli::parse_from([
            "trickcoach",
            "--robot",
            "recommend",
            "--age",
            "25",
            "--progress",
            "progress.json",
        ]);
        assert!(cli.robot);
        assert_eq!(cli.output_format(), OutputFormat::Json);
        assert!(matches!(cli.command, Commands::Recommend(_)));
    }

    #[test]
    fn parses_advise_with_trick_id() {
        let cli = Cli::parse_from(["trickcoach", "advise", "kickflip", "--age", "14"]);
        let Commands::Advise(args) = cli.command else {
            panic!("expected advise command");
        };
        assert_eq!(args.trick_id, "kickflip");
        assert_eq!(args.age, 14);
    }
}
