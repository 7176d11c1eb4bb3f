//! trickcoach - deterministic next-trick recommendation for skateboarding.
//!
//! The engine scores every non-mastered trick in a static catalog along
//! five dimensions (safety, progression, challenge, risk, familiarity) and
//! runs a slot-based selector to produce a short, diverse, ordered list of
//! tricks worth attempting next. A separate advisory check flags targets
//! that sit far outside the learner's demonstrated range.
//!
//! Everything in [`engine`] and [`advisory`] is pure computation: the
//! caller supplies the catalog, a progress snapshot and the learner's age,
//! and identical inputs always produce identical output.

pub mod advisory;
pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod progress;

pub use advisory::{AdvisoryDecision, AdvisoryPrefs, AdvisoryReason, check_advisory};
pub use catalog::{Stance, TrickCatalog, TrickProfile};
pub use engine::{RecommendOptions, ScoredCandidate, recommend, recommend_with, score_all};
pub use error::{CoachError, Result};
pub use progress::{MasteryLevel, ProgressMap};
