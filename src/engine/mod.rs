//! The recommendation engine: metrics, scoring, selection.
//!
//! Pure computation over an immutable catalog and a caller-supplied
//! progress snapshot. No I/O, no shared mutable state; identical inputs
//! always produce identical output.

pub mod metrics;
pub mod scoring;
pub mod selection;

use tracing::debug;

use crate::catalog::TrickCatalog;
use crate::progress::ProgressMap;

pub use metrics::{BaseMetrics, LearnerContext, compute_metrics};
pub use scoring::{DimensionScores, ScoredCandidate, score_candidate};
pub use selection::{
    CRITERIA, DEFAULT_LIMIT, DEFAULT_RISK_CEILING, Dimension, SelectionCriterion, select,
};

/// Tunable knobs for a recommendation request. Defaults reproduce the
/// standard five-slot, 0.7-risk-ceiling behavior.
#[derive(Debug, Clone, Copy)]
pub struct RecommendOptions {
    pub limit: usize,
    pub risk_ceiling: f32,
}

impl Default for RecommendOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            risk_ceiling: DEFAULT_RISK_CEILING,
        }
    }
}

/// Score every trick in the catalog against one learner snapshot.
///
/// Mastered tricks come back as all-zero candidates; they are kept here so
/// callers can render a complete breakdown, and dropped during selection.
#[must_use]
pub fn score_all(catalog: &TrickCatalog, progress: &ProgressMap, age: u32) -> Vec<ScoredCandidate> {
    let ctx = LearnerContext::new(catalog, progress, age);
    catalog
        .iter()
        .map(|trick| {
            let level = progress.level(&trick.id);
            if level.is_mastered() {
                return ScoredCandidate::zeroed(trick.id.clone());
            }
            let metrics = compute_metrics(catalog, trick, progress, &ctx);
            score_candidate(trick, &metrics, level, &ctx)
        })
        .collect()
}

/// Recommend the next tricks to attempt: up to five unique ids, ordered.
#[must_use]
pub fn recommend(catalog: &TrickCatalog, progress: &ProgressMap, age: u32) -> Vec<String> {
    recommend_with(catalog, progress, age, RecommendOptions::default())
}

/// [`recommend`] with explicit limit and risk ceiling.
#[must_use]
pub fn recommend_with(
    catalog: &TrickCatalog,
    progress: &ProgressMap,
    age: u32,
    options: RecommendOptions,
) -> Vec<String> {
    let scored = score_all(catalog, progress, age);
    let picked = select(&scored, options.limit, options.risk_ceiling);
    debug!(
        candidates = scored.len(),
        picked = picked.len(),
        age,
        "recommendation pass complete"
    );
    picked
}
