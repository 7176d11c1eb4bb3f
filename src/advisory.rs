//! Safety advisory check.
//!
//! Independent of the scoring pipeline: a plain threshold rule over the
//! same catalog and progress snapshot, gated by an opt-out flag and a
//! cooldown so learners are not nagged on every interaction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::TrickCatalog;
use crate::error::{CoachError, Result};
use crate::progress::ProgressMap;

/// Default advisory cooldown: 15 minutes.
pub const DEFAULT_COOLDOWN_MS: i64 = 900_000;

/// Learner-controlled advisory preferences, persisted by the host app.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdvisoryPrefs {
    #[serde(default)]
    pub opted_out: bool,
    #[serde(default)]
    pub last_shown_at: Option<DateTime<Utc>>,
}

/// Why an advisory is being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryReason {
    /// No mastered tricks yet and the target is non-trivial.
    Beginner,
    /// Target complexity far above anything mastered.
    Difficulty,
    /// Target impact far above anything mastered.
    Impact,
}

/// The advisory outcome: whether to show, and the reason when shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdvisoryDecision {
    pub show: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<AdvisoryReason>,
}

impl AdvisoryDecision {
    const fn hidden() -> Self {
        Self {
            show: false,
            reason: None,
        }
    }

    const fn shown(reason: AdvisoryReason) -> Self {
        Self {
            show: true,
            reason: Some(reason),
        }
    }
}

/// Advisory rule set with a configurable cooldown.
#[derive(Debug, Clone, Copy)]
pub struct AdvisoryCheck {
    pub cooldown_ms: i64,
}

impl Default for AdvisoryCheck {
    fn default() -> Self {
        Self {
            cooldown_ms: DEFAULT_COOLDOWN_MS,
        }
    }
}

impl AdvisoryCheck {
    /// Evaluate the advisory rules for one target trick at a given instant.
    ///
    /// Rules apply in order: opt-out, cooldown, beginner, difficulty gap,
    /// impact gap. The first match wins.
    pub fn evaluate(
        &self,
        catalog: &TrickCatalog,
        trick_id: &str,
        progress: &ProgressMap,
        age: u32,
        prefs: &AdvisoryPrefs,
        now: DateTime<Utc>,
    ) -> Result<AdvisoryDecision> {
        let target = catalog
            .get(trick_id)
            .ok_or_else(|| CoachError::UnknownTrick(trick_id.to_string()))?;

        if prefs.opted_out {
            return Ok(AdvisoryDecision::hidden());
        }

        if let Some(last) = prefs.last_shown_at {
            let elapsed_ms = now.signed_duration_since(last).num_milliseconds();
            if elapsed_ms < self.cooldown_ms {
                debug!(trick = %trick_id, elapsed_ms, "advisory suppressed by cooldown");
                return Ok(AdvisoryDecision::hidden());
            }
        }

        let mut mastered = 0usize;
        let mut highest_complexity = 0u8;
        let mut highest_impact = 0u8;
        for trick in catalog.iter() {
            if progress.level(&trick.id).is_mastered() {
                mastered += 1;
                highest_complexity = highest_complexity.max(trick.complexity);
                highest_impact = highest_impact.max(trick.impact);
            }
        }

        if mastered == 0 && target.complexity > 3 {
            return Ok(AdvisoryDecision::shown(AdvisoryReason::Beginner));
        }

        let complexity_gap = i16::from(target.complexity) - i16::from(highest_complexity);
        if complexity_gap >= complexity_gap_threshold(age) {
            return Ok(AdvisoryDecision::shown(AdvisoryReason::Difficulty));
        }

        let impact_gap = i16::from(target.impact) - i16::from(highest_impact);
        if impact_gap > 2 {
            return Ok(AdvisoryDecision::shown(AdvisoryReason::Impact));
        }

        Ok(AdvisoryDecision::hidden())
    }
}

/// Younger learners get a wider allowance before the difficulty advisory
/// fires; they are expected to leap around the catalog more.
const fn complexity_gap_threshold(age: u32) -> i16 {
    if age < 16 {
        5
    } else if age < 25 {
        4
    } else {
        3
    }
}

/// Evaluate the advisory with default cooldown at the current instant.
pub fn check_advisory(
    catalog: &TrickCatalog,
    trick_id: &str,
    progress: &ProgressMap,
    age: u32,
    prefs: &AdvisoryPrefs,
) -> Result<AdvisoryDecision> {
    AdvisoryCheck::default().evaluate(catalog, trick_id, progress, age, prefs, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::MasteryLevel;
    use chrono::Duration;

    fn catalog() -> TrickCatalog {
        TrickCatalog::builtin().unwrap()
    }

    fn evaluate(
        trick_id: &str,
        progress: &ProgressMap,
        age: u32,
        prefs: &AdvisoryPrefs,
    ) -> AdvisoryDecision {
        AdvisoryCheck::default()
            .evaluate(&catalog(), trick_id, progress, age, prefs, Utc::now())
            .unwrap()
    }

    #[test]
    fn unknown_trick_is_an_error() {
        let result = AdvisoryCheck::default().evaluate(
            &catalog(),
            "darkslide",
            &ProgressMap::new(),
            25,
            &AdvisoryPrefs::default(),
            Utc::now(),
        );
        assert!(matches!(result, Err(CoachError::UnknownTrick(_))));
    }

    #[test]
    fn opt_out_always_hides() {
        let prefs = AdvisoryPrefs {
            opted_out: true,
            last_shown_at: None,
        };
        let decision = evaluate("mctwist", &ProgressMap::new(), 25, &prefs);
        assert!(!decision.show);
        assert!(decision.reason.is_none());
    }

    #[test]
    fn cooldown_suppresses_within_window() {
        let prefs = AdvisoryPrefs {
            opted_out: false,
            last_shown_at: Some(Utc::now() - Duration::minutes(5)),
        };
        let decision = evaluate("mctwist", &ProgressMap::new(), 25, &prefs);
        assert!(!decision.show);
    }

    #[test]
    fn cooldown_expires_after_window() {
        let prefs = AdvisoryPrefs {
            opted_out: false,
            last_shown_at: Some(Utc::now() - Duration::minutes(16)),
        };
        let decision = evaluate("mctwist", &ProgressMap::new(), 25, &prefs);
        assert!(decision.show);
    }

    #[test]
    fn beginner_reason_for_untrained_learner_on_hard_trick() {
        let decision = evaluate("kickflip", &ProgressMap::new(), 25, &AdvisoryPrefs::default());
        assert_eq!(decision.reason, Some(AdvisoryReason::Beginner));
    }

    #[test]
    fn easy_trick_skips_beginner_rule() {
        // Fakie ollie is complexity 3, impact 2: no beginner advisory, the
        // difficulty gap (3) stays under the age-20 threshold of 4, and the
        // impact gap (2) is not above 2.
        let decision = evaluate("fakie-ollie", &ProgressMap::new(), 20, &AdvisoryPrefs::default());
        assert!(!decision.show);
    }

    #[test]
    fn difficulty_reason_for_large_complexity_gap() {
        let mut progress = ProgressMap::new();
        progress.set("ollie", MasteryLevel::Mastered); // complexity 2
        // tre-flip is complexity 8: gap 6 >= 3.
        let decision = evaluate("tre-flip", &progress, 30, &AdvisoryPrefs::default());
        assert_eq!(decision.reason, Some(AdvisoryReason::Difficulty));
    }

    #[test]
    fn difficulty_threshold_widens_for_young_learners() {
        let mut progress = ProgressMap::new();
        progress.set("ollie", MasteryLevel::Mastered); // complexity 2, impact 3
        // varial-kickflip: complexity 6, gap 4.
        let adult = evaluate("varial-kickflip", &progress, 30, &AdvisoryPrefs::default());
        assert_eq!(adult.reason, Some(AdvisoryReason::Difficulty));

        let teen = evaluate("varial-kickflip", &progress, 15, &AdvisoryPrefs::default());
        assert_ne!(teen.reason, Some(AdvisoryReason::Difficulty));

        let young_adult = evaluate("varial-kickflip", &progress, 20, &AdvisoryPrefs::default());
        assert_eq!(young_adult.reason, Some(AdvisoryReason::Difficulty));
    }

    #[test]
    fn impact_reason_for_large_impact_gap() {
        let mut progress = ProgressMap::new();
        progress.set("ollie", MasteryLevel::Mastered); // complexity 2, impact 3
        // drop-in: complexity 3 (gap 1, no difficulty), impact 6 (gap 3 > 2).
        let decision = evaluate("drop-in", &progress, 30, &AdvisoryPrefs::default());
        assert_eq!(decision.reason, Some(AdvisoryReason::Impact));
    }

    #[test]
    fn no_advisory_when_comfortably_within_reach() {
        let mut progress = ProgressMap::new();
        progress.set("ollie", MasteryLevel::Mastered);
        progress.set("kickflip", MasteryLevel::Mastered); // complexity 5, impact 4
        let decision = evaluate("heelflip", &progress, 30, &AdvisoryPrefs::default());
        assert!(!decision.show);
    }

    #[test]
    fn reason_serializes_snake_case() {
        let decision = AdvisoryDecision::shown(AdvisoryReason::Difficulty);
        let json = serde_json::to_string(&decision).unwrap();
        assert_eq!(json, r#"{"show":true,"reason":"difficulty"}"#);

        let hidden = AdvisoryDecision::hidden();
        let json = serde_json::to_string(&hidden).unwrap();
        assert_eq!(json, r#"{"show":false}"#);
    }
}
