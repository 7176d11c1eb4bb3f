//! trickcoach recommend - next tricks to attempt

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use serde::Serialize;

use crate::app::AppContext;
use crate::engine::{self, RecommendOptions, ScoredCandidate};
use crate::error::Result;

use super::load_progress;

#[derive(Args, Debug)]
pub struct RecommendArgs {
    /// Learner age in years
    #[arg(long)]
    pub age: u32,

    /// Path to a progress JSON file (trick id -> 0|1|2)
    #[arg(long)]
    pub progress: Option<PathBuf>,

    /// Maximum number of recommendations
    #[arg(long, short)]
    pub limit: Option<usize>,

    /// Show the per-candidate score breakdown
    #[arg(long)]
    pub explain: bool,
}

#[derive(Serialize)]
struct RecommendOutput<'a> {
    recommendations: Vec<&'a ScoredCandidate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    candidates: Option<&'a [ScoredCandidate]>,
}

pub fn run(ctx: &AppContext, args: &RecommendArgs) -> Result<()> {
    let progress = load_progress(args.progress.as_deref())?;
    let options = RecommendOptions {
        limit: args.limit.unwrap_or(ctx.config.recommend.limit),
        risk_ceiling: ctx.config.recommend.risk_ceiling,
    };

    let scored = engine::score_all(&ctx.catalog, &progress, args.age);
    let picked = engine::select(&scored, options.limit, options.risk_ceiling);

    let by_id = |id: &str| scored.iter().find(|c| c.id == id);

    if ctx.robot() {
        let output = RecommendOutput {
            recommendations: picked.iter().filter_map(|id| by_id(id)).collect(),
            candidates: args.explain.then_some(scored.as_slice()),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if picked.is_empty() {
        println!("{}", "Nothing left to recommend - session the park!".yellow());
        return Ok(());
    }

    println!("{}", "Next tricks to try:".bold());
    for (rank, id) in picked.iter().enumerate() {
        let name = ctx
            .catalog
            .get(id)
            .map_or_else(|| id.clone(), |trick| trick.name.clone());
        match by_id(id) {
            Some(candidate) if args.explain => {
                println!(
                    "  {}. {} {}",
                    rank + 1,
                    name.green().bold(),
                    format!(
                        "(composite {:.2} | safety {:.2} progression {:.2} challenge {:.2} risk {:.2} familiarity {:.2})",
                        candidate.composite,
                        candidate.dimensions.safety,
                        candidate.dimensions.progression,
                        candidate.dimensions.challenge,
                        candidate.dimensions.risk,
                        candidate.dimensions.familiarity,
                    )
                    .dimmed()
                );
            }
            _ => println!("  {}. {}", rank + 1, name.green().bold()),
        }
    }

    Ok(())
}
