//! CLI command implementations.
//!
//! Each subcommand has its own module with an Args struct and a
//! `run(ctx, args)` function.

pub mod advise;
pub mod catalog;
pub mod recommend;

use std::path::Path;

use crate::app::AppContext;
use crate::cli::Commands;
use crate::error::{CoachError, Result};
use crate::progress::ProgressMap;

pub use advise::AdviseArgs;
pub use catalog::CatalogArgs;
pub use recommend::RecommendArgs;

pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Recommend(args) => recommend::run(ctx, args),
        Commands::Advise(args) => advise::run(ctx, args),
        Commands::Catalog(args) => catalog::run(ctx, args),
    }
}

/// Load a progress snapshot from a JSON file; no path means a fresh learner.
pub(crate) fn load_progress(path: Option<&Path>) -> Result<ProgressMap> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path).map_err(|err| {
                CoachError::Progress(format!("read {}: {err}", path.display()))
            })?;
            serde_json::from_str(&raw)
                .map_err(|err| CoachError::Progress(format!("parse {}: {err}", path.display())))
        }
        None => Ok(ProgressMap::new()),
    }
}
