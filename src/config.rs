//! TOML configuration.
//!
//! Resolution order: explicit `--config` path, then the `TRICKCOACH_CONFIG`
//! environment variable, then `<config dir>/trickcoach/config.toml`, then
//! built-in defaults. Defaults reproduce the standard engine behavior.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::advisory::DEFAULT_COOLDOWN_MS;
use crate::engine::{DEFAULT_LIMIT, DEFAULT_RISK_CEILING};
use crate::error::{CoachError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub recommend: RecommendConfig,
    #[serde(default)]
    pub advisory: AdvisoryConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendConfig {
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default = "default_risk_ceiling")]
    pub risk_ceiling: f32,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            risk_ceiling: default_risk_ceiling(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisoryConfig {
    #[serde(default = "default_cooldown_ms")]
    pub cooldown_ms: i64,
}

impl Default for AdvisoryConfig {
    fn default() -> Self {
        Self {
            cooldown_ms: default_cooldown_ms(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to a catalog JSON file; the embedded catalog is used when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

const fn default_limit() -> usize {
    DEFAULT_LIMIT
}

const fn default_risk_ceiling() -> f32 {
    DEFAULT_RISK_CEILING
}

const fn default_cooldown_ms() -> i64 {
    DEFAULT_COOLDOWN_MS
}

impl Config {
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("TRICKCOACH_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            return Self::load_file(&path);
        }

        if let Some(default) = Self::default_path() {
            if default.is_file() {
                return Self::load_file(&default);
            }
        }

        Ok(Self::default())
    }

    fn load_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|err| CoachError::Config(format!("read {}: {err}", path.display())))?;
        Ok(toml::from_str(&raw)?)
    }

    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("trickcoach/config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_engine_constants() {
        let config = Config::default();
        assert_eq!(config.recommend.limit, 5);
        assert!((config.recommend.risk_ceiling - 0.7).abs() < f32::EPSILON);
        assert_eq!(config.advisory.cooldown_ms, 900_000);
        assert!(config.catalog.path.is_none());
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: Config = toml::from_str(
            r#"
            [recommend]
            limit = 3
            "#,
        )
        .unwrap();
        assert_eq!(config.recommend.limit, 3);
        assert!((config.recommend.risk_ceiling - 0.7).abs() < f32::EPSILON);
        assert_eq!(config.advisory.cooldown_ms, 900_000);
    }

    #[test]
    fn full_toml_round_trips() {
        let config: Config = toml::from_str(
            r#"
            [recommend]
            limit = 4
            risk_ceiling = 0.8

            [advisory]
            cooldown_ms = 60000

            [catalog]
            path = "/tmp/tricks.json"
            "#,
        )
        .unwrap();
        assert_eq!(config.recommend.limit, 4);
        assert_eq!(config.advisory.cooldown_ms, 60_000);
        assert_eq!(config.catalog.path, Some(PathBuf::from("/tmp/tricks.json")));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let result = Config::load(Some(Path::new("/nonexistent/trickcoach.toml")));
        assert!(matches!(result, Err(CoachError::Config(_))));
    }
}
