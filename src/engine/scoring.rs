//! Five-dimension scoring of candidate tricks.
//!
//! All weights are fixed: downstream progress data was tuned against these
//! exact magnitudes, so they are literals here rather than configuration.

use serde::Serialize;

use crate::catalog::{Stance, TrickProfile};
use crate::progress::MasteryLevel;

use super::metrics::{BaseMetrics, LearnerContext};

fn clamp01(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}

/// The five dimension scores, each clamped to [0,1].
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct DimensionScores {
    pub safety: f32,
    pub progression: f32,
    pub challenge: f32,
    pub risk: f32,
    pub familiarity: f32,
}

/// One trick's full scoring result for a single recommendation request.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredCandidate {
    pub id: String,
    pub metrics: BaseMetrics,
    pub dimensions: DimensionScores,
    pub composite: f32,
}

impl ScoredCandidate {
    /// All-zero candidate for a mastered trick; the selector discards it.
    #[must_use]
    pub fn zeroed(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            metrics: BaseMetrics::default(),
            dimensions: DimensionScores::default(),
            composite: 0.0,
        }
    }
}

/// Score one trick against the learner's current state.
///
/// Mastered tricks short-circuit to an all-zero candidate.
#[must_use]
pub fn score_candidate(
    trick: &TrickProfile,
    metrics: &BaseMetrics,
    level: MasteryLevel,
    ctx: &LearnerContext,
) -> ScoredCandidate {
    if level.is_mastered() {
        return ScoredCandidate::zeroed(trick.id.clone());
    }

    let in_progress = level == MasteryLevel::InProgress;
    let dimensions = DimensionScores {
        safety: safety(trick, metrics, ctx),
        progression: progression(metrics, in_progress),
        challenge: challenge(trick, metrics),
        risk: risk(trick, metrics),
        familiarity: familiarity(metrics),
    };

    ScoredCandidate {
        id: trick.id.clone(),
        metrics: *metrics,
        composite: composite(&dimensions, in_progress),
        dimensions,
    }
}

/// How well the learner's foundation supports attempting this trick.
fn safety(trick: &TrickProfile, m: &BaseMetrics, ctx: &LearnerContext) -> f32 {
    let mut score = 0.3 * m.prereq_strength
        + 0.2 * m.similar_experience
        + 0.2 * m.family_mastery
        + 0.02 * (10.0 - f32::from(trick.complexity))
        + 0.01 * (10.0 - f32::from(trick.balance));
    if trick.vertical_rotation {
        score *= 0.8;
    }
    if trick.footplant && !ctx.footplant_experience {
        score *= 0.7;
    }
    clamp01(score)
}

/// How naturally this trick continues the learner's current arc.
/// In-progress tricks get a 1.3x boost so unfinished work surfaces first.
fn progression(m: &BaseMetrics, in_progress: bool) -> f32 {
    let mut score = 0.25 * m.prereq_strength
        + 0.2 * (1.0 - m.skill_gap)
        + 0.2 * m.family_mastery
        + 0.15 * m.stance_progression
        + 0.2 * m.similar_experience;
    if in_progress {
        score *= 1.3;
    }
    clamp01(score)
}

/// How much the trick stretches the learner. Dampened to at most half when
/// prerequisites are weak, so an unprepared learner is not pushed too hard.
fn challenge(trick: &TrickProfile, m: &BaseMetrics) -> f32 {
    let mut score = 0.3 * (f32::from(trick.complexity) / 10.0)
        + 0.2 * (f32::from(trick.balance) / 10.0)
        + 0.15 * m.stance_progression;
    if trick.vertical_rotation {
        score += 0.1;
    }
    if trick.board_rotation > 180 {
        score += 0.1;
    }
    score += f32::from(trick.flip_count) * 0.1;
    clamp01(score * m.prereq_strength.max(0.5))
}

/// Physical risk of attempting the trick now.
fn risk(trick: &TrickProfile, m: &BaseMetrics) -> f32 {
    // The stance weight lands on an already-0.15 indicator, so the real
    // contribution tops out at 0.0225. Kept as-is: recorded score data
    // depends on this magnitude.
    let stance_indicator = if trick.stance == Stance::Regular { 0.0 } else { 0.15 };
    let mut score = 0.25 * (f32::from(trick.complexity) / 10.0)
        + 0.25 * (f32::from(trick.impact) / 10.0) * m.age_impact_factor
        + 0.2 * (f32::from(trick.balance) / 10.0)
        + 0.15 * stance_indicator;
    if trick.vertical_rotation {
        score += 0.15;
    }
    clamp01(score * (1.0 - 0.3 * m.prereq_strength))
}

/// How close the trick sits to territory the learner already knows.
fn familiarity(m: &BaseMetrics) -> f32 {
    clamp01(
        0.35 * m.family_mastery
            + 0.35 * m.similar_experience
            + 0.3 * (1.0 - m.stance_progression),
    )
}

/// Weighted blend of the five dimensions, boosted 1.2x for in-progress tricks.
fn composite(d: &DimensionScores, in_progress: bool) -> f32 {
    let mut score = 0.25 * d.safety
        + 0.3 * d.progression
        + 0.2 * d.challenge
        + 0.15 * (1.0 - d.risk)
        + 0.1 * d.familiarity;
    if in_progress {
        score *= 1.2;
    }
    clamp01(score)
}
