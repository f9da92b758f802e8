//! Result join entity linking one player, one game, and a score.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::ids::{GameId, PlayerId};
use crate::validation::{SCORE_MAX, SCORE_MIN, is_valid_score};

/// Integer score recorded for a single play.
///
/// ## Invariants
/// - At least [`SCORE_MIN`] and at most the ceiling it was validated against
///   ([`SCORE_MAX`] unless a scoreboard is configured otherwise).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u16")]
pub struct Score(u16);

impl Score {
    /// Validate `value` against the documented ceiling.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ScoreOutOfRange`] outside
    /// `SCORE_MIN..=SCORE_MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// use scoreboard::Score;
    ///
    /// assert_eq!(Score::new(10).map(Score::value), Ok(10));
    /// assert!(Score::new(0).is_err());
    /// assert!(Score::new(5001).is_err());
    /// ```
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        Self::with_ceiling(value, SCORE_MAX)
    }

    /// Validate `value` against an explicit ceiling.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ScoreOutOfRange`] outside
    /// `SCORE_MIN..=ceiling`.
    pub fn with_ceiling(value: i64, ceiling: u16) -> Result<Self, ValidationError> {
        if !is_valid_score(value, ceiling) {
            return Err(ValidationError::ScoreOutOfRange {
                min: SCORE_MIN,
                max: ceiling,
                actual: value,
            });
        }
        u16::try_from(value)
            .map(Self)
            .map_err(|_| ValidationError::ScoreOutOfRange {
                min: SCORE_MIN,
                max: ceiling,
                actual: value,
            })
    }

    /// Parse integer text and validate it against `ceiling`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ScoreNotInteger`] for text that is not an
    /// integer and [`ValidationError::ScoreOutOfRange`] outside
    /// `SCORE_MIN..=ceiling`.
    pub fn parse_with_ceiling(raw: &str, ceiling: u16) -> Result<Self, ValidationError> {
        let value = raw
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::ScoreNotInteger {
                raw: raw.to_owned(),
            })?;
        Self::with_ceiling(value, ceiling)
    }

    /// Underlying integer value.
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Score> for u16 {
    fn from(value: Score) -> Self {
        value.0
    }
}

impl TryFrom<i64> for Score {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for Score {
    type Err = ValidationError;

    /// Parse integer text against the documented [`SCORE_MAX`] ceiling.
    /// Fractions, words, and blank input are rejected before the range check.
    /// Use [`Score::parse_with_ceiling`] for a configured ceiling.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse_with_ceiling(raw, SCORE_MAX)
    }
}

/// "This player scored this score in this game."
///
/// The score is fixed once recorded. The player and game sides may be
/// reassigned through the scoreboard, which checks that the replacement is
/// registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameResult {
    player: PlayerId,
    game: GameId,
    score: Score,
}

impl GameResult {
    pub(crate) const fn new(player: PlayerId, game: GameId, score: Score) -> Self {
        Self {
            player,
            game,
            score,
        }
    }

    /// Player who achieved the score.
    #[must_use]
    pub const fn player(&self) -> PlayerId {
        self.player
    }

    /// Game the score was achieved in.
    #[must_use]
    pub const fn game(&self) -> GameId {
        self.game
    }

    /// Recorded score.
    #[must_use]
    pub const fn score(&self) -> Score {
        self.score
    }

    pub(crate) const fn set_player(&mut self, player: PlayerId) {
        self.player = player;
    }

    pub(crate) const fn set_game(&mut self, game: GameId) {
        self.game = game;
    }
}

#[cfg(test)]
mod tests {
    //! Covers score range, parsing, and serde validation.

    use rstest::rstest;

    use super::*;
    use crate::validation::LEGACY_SCORE_MAX;

    #[rstest]
    #[case(1)]
    #[case(2500)]
    #[case(5000)]
    fn accepts_scores_in_range(#[case] value: i64) {
        assert_eq!(
            Score::new(value).map(|score| i64::from(score.value())),
            Ok(value)
        );
    }

    #[rstest]
    #[case(0)]
    #[case(-1)]
    #[case(5001)]
    #[case(5002)]
    #[case(i64::MAX)]
    fn rejects_scores_out_of_range(#[case] value: i64) {
        assert_eq!(
            Score::new(value),
            Err(ValidationError::ScoreOutOfRange {
                min: SCORE_MIN,
                max: SCORE_MAX,
                actual: value,
            })
        );
    }

    #[test]
    fn legacy_ceiling_admits_the_off_by_two_boundary() {
        assert!(Score::with_ceiling(5002, LEGACY_SCORE_MAX).is_ok());
        assert!(Score::with_ceiling(5003, LEGACY_SCORE_MAX).is_err());
    }

    #[rstest]
    #[case("42", Ok(42))]
    #[case(" 7 ", Ok(7))]
    fn parses_integer_text(#[case] raw: &str, #[case] expected: Result<u16, ValidationError>) {
        assert_eq!(raw.parse::<Score>().map(Score::value), expected);
    }

    #[rstest]
    #[case("12.5")]
    #[case("ten")]
    #[case("")]
    fn rejects_non_integer_text(#[case] raw: &str) {
        assert_eq!(
            raw.parse::<Score>(),
            Err(ValidationError::ScoreNotInteger {
                raw: raw.to_owned(),
            })
        );
    }

    #[test]
    fn parsed_text_is_still_range_checked() {
        assert!(matches!(
            "0".parse::<Score>(),
            Err(ValidationError::ScoreOutOfRange { actual: 0, .. })
        ));
    }

    #[test]
    fn parsed_text_honours_an_explicit_ceiling() {
        assert!("5002".parse::<Score>().is_err());
        assert_eq!(
            Score::parse_with_ceiling("5002", LEGACY_SCORE_MAX).map(Score::value),
            Ok(5002)
        );
        assert!(matches!(
            Score::parse_with_ceiling("5002.0", LEGACY_SCORE_MAX),
            Err(ValidationError::ScoreNotInteger { .. })
        ));
    }

    #[test]
    fn deserialising_validates_the_score() {
        let ok: Result<Score, _> = serde_json::from_str("10");
        assert_eq!(ok.ok(), Score::new(10).ok());

        for raw in ["0", "5001", "12.5", "\"10\""] {
            let rejected: Result<Score, _> = serde_json::from_str(raw);
            assert!(rejected.is_err(), "{raw} should be rejected");
        }
    }
}
