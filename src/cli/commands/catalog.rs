//! trickcoach catalog - inspect the loaded trick catalog

use clap::Args;
use colored::Colorize;
use itertools::Itertools;

use crate::app::AppContext;
use crate::error::{CoachError, Result};

#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Show a single trick profile instead of the full list
    pub trick_id: Option<String>,
}

pub fn run(ctx: &AppContext, args: &CatalogArgs) -> Result<()> {
    match &args.trick_id {
        Some(id) => show(ctx, id),
        None => list(ctx),
    }
}

fn list(ctx: &AppContext) -> Result<()> {
    if ctx.robot() {
        let tricks: Vec<_> = ctx.catalog.iter().collect();
        println!("{}", serde_json::to_string_pretty(&tricks)?);
        return Ok(());
    }

    println!("{} ({} tricks)", "Catalog".bold(), ctx.catalog.len());
    for trick in ctx.catalog.iter() {
        println!(
            "  {:<16} {:<20} {} c{} b{} i{}  [{}]",
            trick.id.green(),
            trick.name,
            trick.stance.as_str().cyan(),
            trick.complexity,
            trick.balance,
            trick.impact,
            trick.families.iter().join(", "),
        );
    }
    Ok(())
}

fn show(ctx: &AppContext, id: &str) -> Result<()> {
    let trick = ctx
        .catalog
        .get(id)
        .ok_or_else(|| CoachError::UnknownTrick(id.to_string()))?;

    if ctx.robot() {
        println!("{}", serde_json::to_string_pretty(trick)?);
        return Ok(());
    }

    println!("{} ({})", trick.name.bold(), trick.id);
    println!("  stance:         {}", trick.stance.as_str());
    println!("  families:       {}", trick.families.iter().join(", "));
    println!("  complexity:     {}/10", trick.complexity);
    println!("  balance:        {}/10", trick.balance);
    println!("  impact:         {}/10", trick.impact);
    if !trick.prerequisites.is_empty() {
        println!("  prerequisites:  {}", trick.prerequisites.iter().join(", "));
    }
    if !trick.similar.is_empty() {
        println!("  similar:        {}", trick.similar.iter().join(", "));
    }
    if trick.board_rotation > 0 {
        println!("  board rotation: {}°", trick.board_rotation);
    }
    if trick.flip_count > 0 {
        println!("  flips:          {}", trick.flip_count);
    }
    if trick.vertical_rotation {
        println!("  vertical rotation");
    }
    if trick.footplant {
        println!("  footplant technique");
    }
    Ok(())
}
