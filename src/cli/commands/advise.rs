//! trickcoach advise - safety advisory for one trick

use std::path::PathBuf;

use chrono::Utc;
use clap::Args;
use colored::Colorize;

use crate::advisory::{AdvisoryCheck, AdvisoryPrefs, AdvisoryReason};
use crate::app::AppContext;
use crate::error::{CoachError, Result};

use super::load_progress;

#[derive(Args, Debug)]
pub struct AdviseArgs {
    /// Target trick id
    pub trick_id: String,

    /// Learner age in years
    #[arg(long)]
    pub age: u32,

    /// Path to a progress JSON file (trick id -> 0|1|2)
    #[arg(long)]
    pub progress: Option<PathBuf>,

    /// Path to an advisory prefs JSON file (opt-out, last shown)
    #[arg(long)]
    pub prefs: Option<PathBuf>,
}

pub fn run(ctx: &AppContext, args: &AdviseArgs) -> Result<()> {
    let progress = load_progress(args.progress.as_deref())?;
    let prefs = load_prefs(args.prefs.as_deref())?;
    let check = AdvisoryCheck {
        cooldown_ms: ctx.config.advisory.cooldown_ms,
    };

    let decision = check.evaluate(
        &ctx.catalog,
        &args.trick_id,
        &progress,
        args.age,
        &prefs,
        Utc::now(),
    )?;

    if ctx.robot() {
        println!("{}", serde_json::to_string_pretty(&decision)?);
        return Ok(());
    }

    if decision.show {
        let reason = match decision.reason {
            Some(AdvisoryReason::Beginner) => "build a foundation with easier tricks first",
            Some(AdvisoryReason::Difficulty) => "this is a big complexity jump from what you've landed",
            Some(AdvisoryReason::Impact) => "this hits much harder than anything you've landed",
            None => "take care out there",
        };
        println!("{} {}", "Heads up:".yellow().bold(), reason);
    } else {
        println!("{}", "No advisory - send it.".green());
    }

    Ok(())
}

fn load_prefs(path: Option<&std::path::Path>) -> Result<AdvisoryPrefs> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .map_err(|err| CoachError::Config(format!("read {}: {err}", path.display())))?;
            Ok(serde_json::from_str(&raw)?)
        }
        None => Ok(AdvisoryPrefs::default()),
    }
}
