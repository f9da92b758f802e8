//! Game data model and game-side derived queries.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::ids::{GameId, PlayerId};
use crate::result::GameResult;
use crate::scoreboard::Scoreboard;
use crate::validation::is_valid_title;

/// Title identifying a game. Non-empty; whitespace is kept as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Title(String);

impl Title {
    /// Validate and construct a [`Title`] from owned input.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyTitle`] for an empty string.
    pub fn new(title: impl Into<String>) -> Result<Self, ValidationError> {
        Self::from_owned(title.into())
    }

    fn from_owned(title: String) -> Result<Self, ValidationError> {
        if !is_valid_title(&title) {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(Self(title))
    }
}

impl AsRef<str> for Title {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Title> for String {
    fn from(value: Title) -> Self {
        value.0
    }
}

impl TryFrom<String> for Title {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// A registered activity.
///
/// ## Invariants
/// - `title` is fixed at construction and never replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    title: Title,
}

impl Game {
    pub(crate) const fn new(title: Title) -> Self {
        Self { title }
    }

    /// Title assigned at construction.
    #[must_use]
    pub const fn title(&self) -> &Title {
        &self.title
    }
}

/// A player's average score in one game.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Standing {
    /// Ranked player.
    pub player: PlayerId,
    /// Arithmetic mean of the player's scores in the game.
    pub average: f64,
    /// Number of results the average is taken over.
    pub plays: usize,
}

/// Borrowed view of a registered game with its derived queries.
#[derive(Debug, Clone, Copy)]
pub struct GameRef<'a> {
    board: &'a Scoreboard,
    id: GameId,
    game: &'a Game,
}

impl<'a> GameRef<'a> {
    pub(crate) const fn new(board: &'a Scoreboard, id: GameId, game: &'a Game) -> Self {
        Self { board, id, game }
    }

    /// Identifier of the game.
    #[must_use]
    pub const fn id(&self) -> GameId {
        self.id
    }

    /// Title assigned at construction.
    #[must_use]
    pub const fn title(&self) -> &'a Title {
        self.game.title()
    }

    /// All results recorded in this game, in registration order.
    pub fn results(self) -> impl Iterator<Item = &'a GameResult> + 'a {
        let id = self.id;
        self.board
            .results()
            .map(|(_, result)| result)
            .filter(move |result| result.game() == id)
    }

    /// Distinct players with at least one result in this game.
    #[must_use]
    pub fn players(&self) -> HashSet<PlayerId> {
        self.results().map(GameResult::player).collect()
    }

    /// Mean of `player`'s scores in this game, or `0.0` if they have none.
    ///
    /// A player without results and a player averaging zero cannot be told
    /// apart here; scores start at 1, so a real average is never zero.
    #[must_use]
    pub fn average_score(&self, player: PlayerId) -> f64 {
        let (total, plays) = self.totals(player);
        mean(total, plays)
    }

    /// Players of this game ranked by average score, highest first.
    ///
    /// Equal averages keep the order in which the players were registered.
    #[must_use]
    pub fn leaderboard(&self) -> Vec<Standing> {
        let mut standings: Vec<Standing> = self
            .board
            .players()
            .filter_map(|(player, _)| {
                let (total, plays) = self.totals(player);
                (plays > 0).then(|| Standing {
                    player,
                    average: mean(total, plays),
                    plays,
                })
            })
            .collect();
        standings.sort_by(|a, b| b.average.total_cmp(&a.average));
        standings
    }

    fn totals(&self, player: PlayerId) -> (u64, usize) {
        self.results()
            .filter(|result| result.player() == player)
            .fold((0, 0), |(total, plays), result| {
                (total + u64::from(result.score().value()), plays + 1)
            })
    }
}

#[expect(
    clippy::cast_precision_loss,
    clippy::float_arithmetic,
    reason = "averages are reported as floating point; totals stay far below 2^52"
)]
fn mean(total: u64, plays: usize) -> f64 {
    if plays == 0 {
        return 0.0;
    }
    total as f64 / plays as f64
}
