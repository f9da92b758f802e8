//! Error types for the scoreboard crate.
//!
//! Every rejected mutation surfaces as a [`ValidationError`]; configuration
//! loading has its own [`ConfigError`]. Both follow the project's `thiserror`
//! conventions.

use thiserror::Error;

use crate::ids::{GameId, PlayerId, ResultId};

/// Raised synchronously when an entity would be put into an invalid state.
///
/// A failed operation never mutates the scoreboard: the entity keeps its
/// previous valid value and nothing is registered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The username has fewer characters than allowed.
    #[error("username must be between {min} and {max} characters, got {actual}")]
    UsernameTooShort {
        /// Minimum accepted length.
        min: usize,
        /// Maximum accepted length.
        max: usize,
        /// Length of the rejected input.
        actual: usize,
    },

    /// The username has more characters than allowed.
    #[error("username must be between {min} and {max} characters, got {actual}")]
    UsernameTooLong {
        /// Minimum accepted length.
        min: usize,
        /// Maximum accepted length.
        max: usize,
        /// Length of the rejected input.
        actual: usize,
    },

    /// The game title is empty.
    #[error("title must be a non-empty string")]
    EmptyTitle,

    /// A title was already assigned to the game.
    #[error("title cannot be changed once set (current title '{current}')")]
    TitleAlreadySet {
        /// Title the game keeps.
        current: String,
    },

    /// The score lies outside the accepted range.
    #[error("score must be an integer between {min} and {max}, got {actual}")]
    ScoreOutOfRange {
        /// Lowest accepted score.
        min: u16,
        /// Highest accepted score under the active ceiling.
        max: u16,
        /// Rejected value.
        actual: i64,
    },

    /// The score text is not an integer.
    #[error("score must be an integer, got '{raw}'")]
    ScoreNotInteger {
        /// Rejected input.
        raw: String,
    },

    /// A score was already recorded for the result.
    #[error("score cannot be changed once set (current score {current})")]
    ScoreAlreadySet {
        /// Score the result keeps.
        current: u16,
    },

    /// The player identifier is not registered on this scoreboard.
    #[error("{id} is not a registered player")]
    UnknownPlayer {
        /// Offending identifier.
        id: PlayerId,
    },

    /// The game identifier is not registered on this scoreboard.
    #[error("{id} is not a registered game")]
    UnknownGame {
        /// Offending identifier.
        id: GameId,
    },

    /// The result identifier is not registered on this scoreboard.
    #[error("{id} is not a registered result")]
    UnknownResult {
        /// Offending identifier.
        id: ResultId,
    },
}

/// Errors that can occur when loading a [`ScoreboardConfig`](crate::ScoreboardConfig).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The configuration JSON is malformed or contains unknown fields.
    #[error("invalid scoreboard config JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::BoardToken;

    #[test]
    fn username_too_short_formats_correctly() {
        let err = ValidationError::UsernameTooShort {
            min: 2,
            max: 16,
            actual: 1,
        };
        assert_eq!(
            err.to_string(),
            "username must be between 2 and 16 characters, got 1"
        );
    }

    #[test]
    fn title_already_set_formats_correctly() {
        let err = ValidationError::TitleAlreadySet {
            current: "Chess".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "title cannot be changed once set (current title 'Chess')"
        );
    }

    #[test]
    fn score_out_of_range_formats_correctly() {
        let err = ValidationError::ScoreOutOfRange {
            min: 1,
            max: 5000,
            actual: 5001,
        };
        assert_eq!(
            err.to_string(),
            "score must be an integer between 1 and 5000, got 5001"
        );
    }

    #[test]
    fn score_not_integer_formats_correctly() {
        let err = ValidationError::ScoreNotInteger {
            raw: "12.5".to_owned(),
        };
        assert_eq!(err.to_string(), "score must be an integer, got '12.5'");
    }

    #[test]
    fn unknown_player_formats_correctly() {
        let err = ValidationError::UnknownPlayer {
            id: PlayerId::new(BoardToken::next(), 4),
        };
        assert_eq!(err.to_string(), "player#4 is not a registered player");
    }

    #[test]
    fn config_parse_error_formats_correctly() {
        let err = ConfigError::ParseError {
            message: "unexpected token".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "invalid scoreboard config JSON: unexpected token"
        );
    }
}
