//! Scoreboard configuration.
//!
//! The only tunable today is which upper bound scores are checked against.

use serde::Deserialize;

use crate::error::ConfigError;
use crate::validation::{LEGACY_SCORE_MAX, SCORE_MAX};

/// Upper bound applied when recording scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCeiling {
    /// Scores up to [`SCORE_MAX`] (5000).
    #[default]
    Documented,
    /// Scores up to [`LEGACY_SCORE_MAX`] (5002), matching the historical
    /// boundary check exactly.
    Legacy,
}

impl ScoreCeiling {
    /// Highest score accepted under this ceiling.
    #[must_use]
    pub const fn max(self) -> u16 {
        match self {
            Self::Documented => SCORE_MAX,
            Self::Legacy => LEGACY_SCORE_MAX,
        }
    }
}

/// Settings applied by a [`Scoreboard`](crate::Scoreboard).
///
/// # Example
///
/// ```
/// use scoreboard::{ScoreCeiling, ScoreboardConfig};
///
/// let config = ScoreboardConfig::from_json(r#"{"scoreCeiling": "legacy"}"#)
///     .expect("valid config");
/// assert_eq!(config.score_ceiling, ScoreCeiling::Legacy);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct ScoreboardConfig {
    /// Upper bound for recorded scores.
    pub score_ceiling: ScoreCeiling,
}

impl ScoreboardConfig {
    /// Parses a configuration from a JSON string. Missing fields take their
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseError`] if the JSON is malformed, names an
    /// unknown field, or holds an unknown ceiling.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })
    }
}
