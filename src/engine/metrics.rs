//! Per-trick base metrics derived from the catalog and a progress snapshot.
//!
//! Everything here is pure and per-candidate. The only cross-catalog state
//! is precomputed once per request into a [`LearnerContext`] so a full
//! recommendation pass stays O(N·P) instead of O(N²).

use crate::catalog::{Stance, TrickCatalog, TrickProfile};
use crate::progress::{MasteryLevel, ProgressMap};

use serde::Serialize;

fn clamp01(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}

const fn stance_index(stance: Stance) -> usize {
    match stance {
        Stance::Regular => 0,
        Stance::Switch => 1,
        Stance::Fakie => 2,
        Stance::Nollie => 3,
    }
}

/// Request-scoped aggregates over the whole catalog and progress snapshot.
#[derive(Debug, Clone)]
pub struct LearnerContext {
    mastered_by_stance: [usize; 4],
    max_stance_mastered: usize,
    highest_mastered_complexity: u8,
    /// Any footplant trick at in-progress or mastered level.
    pub footplant_experience: bool,
    pub age: u32,
}

impl LearnerContext {
    #[must_use]
    pub fn new(catalog: &TrickCatalog, progress: &ProgressMap, age: u32) -> Self {
        let mut mastered_by_stance = [0usize; 4];
        let mut highest_mastered_complexity = 0u8;
        let mut footplant_experience = false;

        for trick in catalog.iter() {
            let level = progress.level(&trick.id);
            if level.is_mastered() {
                mastered_by_stance[stance_index(trick.stance)] += 1;
                highest_mastered_complexity = highest_mastered_complexity.max(trick.complexity);
            }
            if trick.footplant && level.is_attempted() {
                footplant_experience = true;
            }
        }

        Self {
            mastered_by_stance,
            max_stance_mastered: mastered_by_stance.iter().copied().max().unwrap_or(0),
            highest_mastered_complexity,
            footplant_experience,
            age,
        }
    }

    #[must_use]
    pub const fn mastered_in_stance(&self, stance: Stance) -> usize {
        self.mastered_by_stance[stance_index(stance)]
    }

    #[must_use]
    pub const fn highest_mastered_complexity(&self) -> u8 {
        self.highest_mastered_complexity
    }
}

/// The six normalized base metrics for one candidate trick.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct BaseMetrics {
    /// Reward for practicing under-represented stances (1.0 / 0.7 / 0.4).
    pub stance_progression: f32,
    /// Best mastered-ratio across the trick's families.
    pub family_mastery: f32,
    /// Averaged mastery of prerequisites (1 mastered, 0.5 in progress).
    pub prereq_strength: f32,
    /// Averaged experience with similar tricks (1 mastered, 0.4 in progress).
    pub similar_experience: f32,
    /// Age-based multiplier on the impact term of the risk score.
    pub age_impact_factor: f32,
    /// How far the trick sits above the hardest mastered trick.
    pub skill_gap: f32,
}

/// Compute all six base metrics for one trick.
#[must_use]
pub fn compute_metrics(
    catalog: &TrickCatalog,
    trick: &TrickProfile,
    progress: &ProgressMap,
    ctx: &LearnerContext,
) -> BaseMetrics {
    BaseMetrics {
        stance_progression: stance_progression(trick, ctx),
        family_mastery: family_mastery(catalog, trick, progress),
        prereq_strength: reference_average(&trick.prerequisites, progress, 0.5),
        similar_experience: reference_average(&trick.similar, progress, 0.4),
        age_impact_factor: age_impact_factor(trick, ctx.age),
        skill_gap: skill_gap(trick, ctx),
    }
}

/// 1.0 when the trick's stance is under-represented among mastered tricks,
/// 0.7 when moderately represented, 0.4 when saturated.
fn stance_progression(trick: &TrickProfile, ctx: &LearnerContext) -> f32 {
    let max = ctx.max_stance_mastered;
    if max == 0 {
        // Nothing mastered yet: every stance is unexplored.
        return 1.0;
    }
    let current = ctx.mastered_in_stance(trick.stance) as f32;
    let max = max as f32;
    if current < 0.3 * max {
        1.0
    } else if current < 0.6 * max {
        0.7
    } else {
        0.4
    }
}

/// Highest mastered-over-total ratio across the trick's family tags.
///
/// A trick without family tags, or a family with no members, contributes
/// nothing and the metric bottoms out at 0.
fn family_mastery(catalog: &TrickCatalog, trick: &TrickProfile, progress: &ProgressMap) -> f32 {
    let mut best = 0.0f32;
    for family in &trick.families {
        let mut total = 0usize;
        let mut mastered = 0usize;
        for member in catalog.family_members(family) {
            total += 1;
            if progress.level(&member.id).is_mastered() {
                mastered += 1;
            }
        }
        if total > 0 {
            best = best.max(mastered as f32 / total as f32);
        }
    }
    clamp01(best)
}

/// Average mastery weight over a reference list.
///
/// Mastered counts 1.0, in-progress counts `in_progress_weight`, anything
/// else (including ids missing from the catalog) counts 0. An empty list
/// is neutral evidence and returns 1.0.
fn reference_average(ids: &[String], progress: &ProgressMap, in_progress_weight: f32) -> f32 {
    if ids.is_empty() {
        return 1.0;
    }
    let sum: f32 = ids
        .iter()
        .map(|id| match progress.level(id) {
            MasteryLevel::Mastered => 1.0,
            MasteryLevel::InProgress => in_progress_weight,
            MasteryLevel::NotAttempted => 0.0,
        })
        .sum();
    clamp01(sum / ids.len() as f32)
}

/// Nudges learners under 15 or over 50 toward lower-impact tricks.
///
/// The raw factor can exceed 1.0 for very low impact values; it is clamped
/// with the rest of the metrics so every published metric stays in [0,1].
fn age_impact_factor(trick: &TrickProfile, age: u32) -> f32 {
    let impact = f32::from(trick.impact);
    let raw = if age < 15 {
        impact.mul_add(-0.08, 1.2)
    } else if age > 50 {
        impact.mul_add(-0.12, 1.2)
    } else {
        1.0
    };
    clamp01(raw)
}

/// `(complexity - highest mastered complexity) / 5`, normalized into [0,1].
fn skill_gap(trick: &TrickProfile, ctx: &LearnerContext) -> f32 {
    let gap = f32::from(trick.complexity) - f32::from(ctx.highest_mastered_complexity);
    clamp01(gap / 5.0)
}
