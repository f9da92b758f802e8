//! Player data model and player-side derived queries.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::ids::{GameId, PlayerId};
use crate::result::GameResult;
use crate::scoreboard::Scoreboard;
use crate::validation::{USERNAME_MAX, USERNAME_MIN};

/// Display name identifying a player.
///
/// ## Invariants
/// - Between [`USERNAME_MIN`] and [`USERNAME_MAX`] characters inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Validate and construct a [`Username`] from owned input.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UsernameTooShort`] or
    /// [`ValidationError::UsernameTooLong`] when the length is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use scoreboard::Username;
    ///
    /// let name = Username::new("Alice").expect("valid username");
    /// assert_eq!(name.as_ref(), "Alice");
    /// assert!(Username::new("A").is_err());
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::from_owned(name.into())
    }

    fn from_owned(name: String) -> Result<Self, ValidationError> {
        let actual = name.chars().count();
        if actual < USERNAME_MIN {
            return Err(ValidationError::UsernameTooShort {
                min: USERNAME_MIN,
                max: USERNAME_MAX,
                actual,
            });
        }
        if actual > USERNAME_MAX {
            return Err(ValidationError::UsernameTooLong {
                min: USERNAME_MIN,
                max: USERNAME_MAX,
                actual,
            });
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl TryFrom<String> for Username {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// A registered actor.
///
/// The player's results are not stored here; they are derived from the
/// scoreboard's result registry through [`PlayerRef`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    username: Username,
}

impl Player {
    pub(crate) const fn new(username: Username) -> Self {
        Self { username }
    }

    /// Current display name.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Replace the display name. Validation happens in [`Username::new`], so
    /// the previous name survives any rejected update.
    pub(crate) fn set_username(&mut self, username: Username) {
        self.username = username;
    }
}

/// Borrowed view of a registered player with its derived queries.
///
/// Every query rescans the scoreboard, so results always reflect the live
/// registry state.
#[derive(Debug, Clone, Copy)]
pub struct PlayerRef<'a> {
    board: &'a Scoreboard,
    id: PlayerId,
    player: &'a Player,
}

impl<'a> PlayerRef<'a> {
    pub(crate) const fn new(board: &'a Scoreboard, id: PlayerId, player: &'a Player) -> Self {
        Self { board, id, player }
    }

    /// Identifier of the player.
    #[must_use]
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    /// Current display name.
    #[must_use]
    pub const fn username(&self) -> &'a Username {
        self.player.username()
    }

    /// All results recorded for this player, in registration order.
    pub fn results(self) -> impl Iterator<Item = &'a GameResult> + 'a {
        let id = self.id;
        self.board
            .results()
            .map(|(_, result)| result)
            .filter(move |result| result.player() == id)
    }

    /// Distinct games this player has a result in.
    #[must_use]
    pub fn games_played(&self) -> HashSet<GameId> {
        self.results().map(GameResult::game).collect()
    }

    /// Returns `true` if the player has at least one result in `game`.
    #[must_use]
    pub fn played_game(&self, game: GameId) -> bool {
        self.games_played().contains(&game)
    }

    /// Number of results this player has recorded in `game`.
    #[must_use]
    pub fn num_times_played(&self, game: GameId) -> usize {
        self.results().filter(|result| result.game() == game).count()
    }
}

#[cfg(test)]
mod tests {
    //! Covers username validation and serde round-trips.

    #![expect(
        clippy::expect_used,
        reason = "test code uses expect for clear failure messages"
    )]

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Al")]
    #[case("Alice")]
    #[case("exactly16chars!!")]
    fn accepts_valid_usernames(#[case] raw: &str) {
        let name = Username::new(raw);
        assert_eq!(name.map(String::from), Ok(raw.to_owned()));
    }

    #[rstest]
    #[case("", 0)]
    #[case("A", 1)]
    fn rejects_short_usernames(#[case] raw: &str, #[case] actual: usize) {
        assert_eq!(
            Username::new(raw),
            Err(ValidationError::UsernameTooShort {
                min: USERNAME_MIN,
                max: USERNAME_MAX,
                actual,
            })
        );
    }

    #[test]
    fn rejects_long_usernames() {
        let raw = "x".repeat(USERNAME_MAX + 1);
        assert_eq!(
            Username::new(raw),
            Err(ValidationError::UsernameTooLong {
                min: USERNAME_MIN,
                max: USERNAME_MAX,
                actual: USERNAME_MAX + 1,
            })
        );
    }

    #[test]
    fn deserialising_validates_the_username() {
        let ok: Result<Username, _> = serde_json::from_str("\"Bob\"");
        assert!(ok.is_ok());

        let err: Result<Username, _> = serde_json::from_str("\"B\"");
        assert!(err.is_err());

        let wrong_type: Result<Username, _> = serde_json::from_str("42");
        assert!(wrong_type.is_err());
    }

    #[test]
    fn player_serialises_username_as_string() {
        let player = Player::new(Username::new("Alice").expect("valid username"));
        let json = serde_json::to_value(&player).expect("player serialises");
        assert_eq!(json, serde_json::json!({ "username": "Alice" }));
    }
}
