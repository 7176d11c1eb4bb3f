//! Static trick profile records.

use serde::{Deserialize, Serialize};

/// Which way the rider stands and pops relative to their natural stance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stance {
    #[default]
    Regular,
    Switch,
    Fakie,
    Nollie,
}

impl Stance {
    pub const ALL: [Self; 4] = [Self::Regular, Self::Switch, Self::Fakie, Self::Nollie];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Switch => "switch",
            Self::Fakie => "fakie",
            Self::Nollie => "nollie",
        }
    }
}

/// Immutable catalog record for one learnable trick.
///
/// Tricks reference each other by id (prerequisites, similar tricks); the
/// [`TrickCatalog`](super::TrickCatalog) resolves those references, never the
/// record itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrickProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub stance: Stance,
    /// Technique families this trick belongs to (e.g. "flip", "rotation").
    #[serde(default)]
    pub families: Vec<String>,
    /// Ids of tricks whose mastery is a structural precondition.
    #[serde(default)]
    pub prerequisites: Vec<String>,
    /// Ids of tricks sharing technique lineage without being prerequisites.
    #[serde(default)]
    pub similar: Vec<String>,
    /// Technical difficulty, 0-10.
    pub complexity: u8,
    /// Balance demand, 0-10.
    #[serde(default)]
    pub balance: u8,
    /// Physical risk proxy, 0-10.
    #[serde(default)]
    pub impact: u8,
    /// Rotation around a horizontal axis (inverts, flips over coping).
    #[serde(default)]
    pub vertical_rotation: bool,
    /// Footplant technique (boneless, no-comply family).
    #[serde(default)]
    pub footplant: bool,
    /// Board rotation in degrees (shove-its, bigspins).
    #[serde(default)]
    pub board_rotation: u16,
    /// Number of board flips.
    #[serde(default)]
    pub flip_count: u8,
}

impl TrickProfile {
    /// Whether this trick uses any footplant technique.
    #[must_use]
    pub const fn is_footplant(&self) -> bool {
        self.footplant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stance_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Stance::Nollie).unwrap(), "\"nollie\"");
        let stance: Stance = serde_json::from_str("\"fakie\"").unwrap();
        assert_eq!(stance, Stance::Fakie);
    }

    #[test]
    fn profile_deserializes_with_defaults() {
        let profile: TrickProfile = serde_json::from_str(
            r#"{"id": "ollie", "name": "Ollie", "complexity": 2}"#,
        )
        .unwrap();
        assert_eq!(profile.stance, Stance::Regular);
        assert!(profile.prerequisites.is_empty());
        assert!(profile.similar.is_empty());
        assert_eq!(profile.balance, 0);
        assert_eq!(profile.flip_count, 0);
        assert!(!profile.vertical_rotation);
    }
}
