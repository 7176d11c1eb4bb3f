//! Learner progress snapshot.
//!
//! The engine never mutates a [`ProgressMap`]; the hosting application owns
//! persistence and hands the engine a fresh snapshot per call.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// How far along a learner is with one trick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum MasteryLevel {
    #[default]
    NotAttempted,
    InProgress,
    Mastered,
}

impl MasteryLevel {
    #[must_use]
    pub const fn is_mastered(self) -> bool {
        matches!(self, Self::Mastered)
    }

    #[must_use]
    pub const fn is_attempted(self) -> bool {
        !matches!(self, Self::NotAttempted)
    }
}

impl TryFrom<u8> for MasteryLevel {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::NotAttempted),
            1 => Ok(Self::InProgress),
            2 => Ok(Self::Mastered),
            other => Err(format!("mastery level must be 0, 1 or 2, got {other}")),
        }
    }
}

impl From<MasteryLevel> for u8 {
    fn from(level: MasteryLevel) -> Self {
        match level {
            MasteryLevel::NotAttempted => 0,
            MasteryLevel::InProgress => 1,
            MasteryLevel::Mastered => 2,
        }
    }
}

/// Snapshot of per-trick mastery, keyed by trick id.
///
/// Keys need not cover the whole catalog; an absent key reads as
/// [`MasteryLevel::NotAttempted`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgressMap {
    levels: HashMap<String, MasteryLevel>,
}

impl ProgressMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mastery level for a trick, defaulting to not-attempted.
    #[must_use]
    pub fn level(&self, trick_id: &str) -> MasteryLevel {
        self.levels.get(trick_id).copied().unwrap_or_default()
    }

    pub fn set(&mut self, trick_id: impl Into<String>, level: MasteryLevel) {
        self.levels.insert(trick_id.into(), level);
    }

    /// Number of tricks at mastered level.
    #[must_use]
    pub fn mastered_count(&self) -> usize {
        self.levels
            .values()
            .filter(|level| level.is_mastered())
            .count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, MasteryLevel)> {
        self.levels.iter().map(|(id, level)| (id.as_str(), *level))
    }
}

impl FromIterator<(String, MasteryLevel)> for ProgressMap {
    fn from_iter<I: IntoIterator<Item = (String, MasteryLevel)>>(iter: I) -> Self {
        Self {
            levels: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_key_reads_not_attempted() {
        let progress = ProgressMap::new();
        assert_eq!(progress.level("ollie"), MasteryLevel::NotAttempted);
    }

    #[test]
    fn set_and_read_back() {
        let mut progress = ProgressMap::new();
        progress.set("ollie", MasteryLevel::Mastered);
        progress.set("kickflip", MasteryLevel::InProgress);

        assert_eq!(progress.level("ollie"), MasteryLevel::Mastered);
        assert_eq!(progress.level("kickflip"), MasteryLevel::InProgress);
        assert_eq!(progress.mastered_count(), 1);
    }

    #[test]
    fn deserialize_from_numeric_levels() {
        let progress: ProgressMap =
            serde_json::from_str(r#"{"ollie": 2, "kickflip": 1, "heelflip": 0}"#).unwrap();
        assert_eq!(progress.level("ollie"), MasteryLevel::Mastered);
        assert_eq!(progress.level("kickflip"), MasteryLevel::InProgress);
        assert_eq!(progress.level("heelflip"), MasteryLevel::NotAttempted);
    }

    #[test]
    fn deserialize_rejects_out_of_range_level() {
        let result: Result<ProgressMap, _> = serde_json::from_str(r#"{"ollie": 3}"#);
        assert!(result.is_err());
    }

    #[test]
    fn serialize_round_trips_as_numbers() {
        let mut progress = ProgressMap::new();
        progress.set("ollie", MasteryLevel::Mastered);
        let json = serde_json::to_string(&progress).unwrap();
        assert_eq!(json, r#"{"ollie":2}"#);
    }
}
