//! Slot-based selection over scored candidates.
//!
//! Selection runs an ordered table of criteria; each criterion fills one
//! slot in the recommendation list. Adding a sixth slot means adding a
//! table entry, not code.

use serde::Serialize;
use tracing::debug;

use super::scoring::ScoredCandidate;

/// Candidates at or above this risk are excluded from risk-filtered slots.
pub const DEFAULT_RISK_CEILING: f32 = 0.7;

/// Default recommendation list length.
pub const DEFAULT_LIMIT: usize = 5;

/// A sortable dimension of a scored candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Safety,
    Progression,
    Challenge,
    Risk,
    Familiarity,
    Composite,
}

impl Dimension {
    #[must_use]
    pub fn value(self, candidate: &ScoredCandidate) -> f32 {
        match self {
            Self::Safety => candidate.dimensions.safety,
            Self::Progression => candidate.dimensions.progression,
            Self::Challenge => candidate.dimensions.challenge,
            Self::Risk => candidate.dimensions.risk,
            Self::Familiarity => candidate.dimensions.familiarity,
            Self::Composite => candidate.composite,
        }
    }
}

/// One slot's selection rule: a primary sort key, tiebreakers applied in
/// order, and whether high-risk candidates may fill the slot.
#[derive(Debug, Clone, Copy)]
pub struct SelectionCriterion {
    pub primary: Dimension,
    pub tiebreakers: &'static [Dimension],
    pub allow_high_risk: bool,
}

/// The five fixed slots, applied in order. Only the last slot may hand out
/// a high-risk trick; it exists so there is always one adventurous pick.
pub const CRITERIA: [SelectionCriterion; 5] = [
    SelectionCriterion {
        primary: Dimension::Safety,
        tiebreakers: &[Dimension::Familiarity],
        allow_high_risk: false,
    },
    SelectionCriterion {
        primary: Dimension::Progression,
        tiebreakers: &[Dimension::Safety],
        allow_high_risk: false,
    },
    SelectionCriterion {
        primary: Dimension::Composite,
        tiebreakers: &[],
        allow_high_risk: false,
    },
    SelectionCriterion {
        primary: Dimension::Challenge,
        tiebreakers: &[Dimension::Familiarity],
        allow_high_risk: false,
    },
    SelectionCriterion {
        primary: Dimension::Challenge,
        tiebreakers: &[],
        allow_high_risk: true,
    },
];

/// Build an ordered recommendation list from scored candidates.
///
/// Zero-composite candidates (including every mastered trick) are dropped
/// up front. Each criterion picks the best not-yet-selected candidate from
/// its (possibly risk-filtered) pool; a fallback pass then fills any
/// remaining slots by composite score, ignoring the risk ceiling.
#[must_use]
pub fn select(candidates: &[ScoredCandidate], limit: usize, risk_ceiling: f32) -> Vec<String> {
    let eligible: Vec<&ScoredCandidate> =
        candidates.iter().filter(|c| c.composite > 0.0).collect();

    let mut picked: Vec<String> = Vec::with_capacity(limit);

    for criterion in CRITERIA.iter().take(limit) {
        let pool = eligible.iter().copied().filter(|c| {
            !picked.iter().any(|id| id == &c.id)
                && (criterion.allow_high_risk || c.dimensions.risk < risk_ceiling)
        });
        if let Some(best) = best_by_criterion(pool, criterion) {
            debug!(
                slot = picked.len() + 1,
                primary = ?criterion.primary,
                trick = %best.id,
                "slot filled"
            );
            picked.push(best.id.clone());
        }
    }

    // Fallback fill: highest composite among the rest, no risk filter.
    while picked.len() < limit {
        let pool = eligible
            .iter()
            .copied()
            .filter(|c| !picked.iter().any(|id| id == &c.id));
        match best_by_key(pool, |c| vec![c.composite]) {
            Some(best) => {
                debug!(trick = %best.id, "fallback slot filled by composite");
                picked.push(best.id.clone());
            }
            None => break,
        }
    }

    picked
}

fn best_by_criterion<'a>(
    pool: impl Iterator<Item = &'a ScoredCandidate>,
    criterion: &SelectionCriterion,
) -> Option<&'a ScoredCandidate> {
    best_by_key(pool, |c| {
        let mut key = Vec::with_capacity(1 + criterion.tiebreakers.len());
        key.push(criterion.primary.value(c));
        key.extend(criterion.tiebreakers.iter().map(|d| d.value(c)));
        key
    })
}

/// First candidate with the strictly greatest key wins, so exact ties keep
/// catalog order and the whole pass stays deterministic.
fn best_by_key<'a>(
    pool: impl Iterator<Item = &'a ScoredCandidate>,
    key: impl Fn(&ScoredCandidate) -> Vec<f32>,
) -> Option<&'a ScoredCandidate> {
    let mut best: Option<(&ScoredCandidate, Vec<f32>)> = None;
    for candidate in pool {
        let candidate_key = key(candidate);
        match &best {
            Some((_, best_key)) if !key_greater(&candidate_key, best_key) => {}
            _ => best = Some((candidate, candidate_key)),
        }
    }
    best.map(|(candidate, _)| candidate)
}

fn key_greater(a: &[f32], b: &[f32]) -> bool {
    for (x, y) in a.iter().zip(b) {
        if x > y {
            return true;
        }
        if x < y {
            return false;
        }
    }
    false
}
