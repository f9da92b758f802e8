//! The scoreboard owning every player, game, and result registry.
//!
//! A [`Scoreboard`] replaces process-wide entity lists: it is created by the
//! embedding program and passed explicitly to whatever needs it. All
//! constructors validate first and register second, so a rejected call
//! leaves every registry untouched.
//!
//! Each scoreboard holds a process-unique token stamped into every
//! identifier it issues. Identifiers from another scoreboard are rejected
//! as unknown even when their position happens to exist here.

use tracing::debug;

use crate::config::ScoreboardConfig;
use crate::error::ValidationError;
use crate::game::{Game, GameRef, Title};
use crate::ids::{BoardToken, GameId, PlayerId, ResultId};
use crate::player::{Player, PlayerRef, Username};
use crate::registry::Registry;
use crate::result::{GameResult, Score};

/// Process-scoped repository of players, games, and results.
///
/// # Examples
///
/// ```
/// use scoreboard::Scoreboard;
///
/// let mut board = Scoreboard::new();
/// let alice = board.add_player("Alice").expect("valid username");
/// let bob = board.add_player("Bob").expect("valid username");
/// let chess = board.add_game("Chess").expect("valid title");
/// board.record_result(alice, chess, 10).expect("valid result");
/// board.record_result(bob, chess, 20).expect("valid result");
///
/// let winner = board.highest_scored(chess).expect("players registered");
/// assert_eq!(winner.id(), bob);
/// ```
#[derive(Debug, Clone)]
pub struct Scoreboard {
    config: ScoreboardConfig,
    players: Registry<PlayerId, Player>,
    games: Registry<GameId, Game>,
    results: Registry<ResultId, GameResult>,
}

impl Scoreboard {
    /// Create an empty scoreboard with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty scoreboard applying `config`.
    #[must_use]
    pub fn with_config(config: ScoreboardConfig) -> Self {
        let board = BoardToken::next();
        debug!(?board, ceiling = config.score_ceiling.max(), "created scoreboard");
        Self {
            config,
            players: Registry::new(board),
            games: Registry::new(board),
            results: Registry::new(board),
        }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &ScoreboardConfig {
        &self.config
    }

    /// Validate `name` and register a new player.
    ///
    /// # Errors
    ///
    /// Returns a username [`ValidationError`] when `name` is not 2 to 16
    /// characters long. Nothing is registered in that case.
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<PlayerId, ValidationError> {
        let username = Username::new(name).inspect_err(|err| {
            debug!(error = %err, "rejected player");
        })?;
        debug!(username = %username, "registering player");
        Ok(self.players.insert(Player::new(username)))
    }

    /// Validate `title` and register a new game.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyTitle`] for an empty title.
    pub fn add_game(&mut self, title: impl Into<String>) -> Result<GameId, ValidationError> {
        let validated = Title::new(title).inspect_err(|err| {
            debug!(error = %err, "rejected game");
        })?;
        debug!(title = %validated, "registering game");
        Ok(self.games.insert(Game::new(validated)))
    }

    /// Record that `player` scored `score` in `game`.
    ///
    /// The score is checked against the configured [`ScoreCeiling`](crate::ScoreCeiling).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownPlayer`] or
    /// [`ValidationError::UnknownGame`] for identifiers not registered here,
    /// and [`ValidationError::ScoreOutOfRange`] for a score outside the
    /// accepted range.
    pub fn record_result(
        &mut self,
        player: PlayerId,
        game: GameId,
        score: i64,
    ) -> Result<ResultId, ValidationError> {
        self.ensure_player(player)?;
        self.ensure_game(game)?;
        let recorded = Score::with_ceiling(score, self.config.score_ceiling.max())
            .inspect_err(|err| debug!(%player, %game, error = %err, "rejected result"))?;
        Ok(self.insert_result(player, game, recorded))
    }

    /// Record that `player` scored the integer written in `raw` in `game`.
    ///
    /// Behaves like [`Scoreboard::record_result`], including the configured
    /// ceiling, for scores that arrive as text.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownPlayer`] or
    /// [`ValidationError::UnknownGame`] for identifiers not registered here,
    /// [`ValidationError::ScoreNotInteger`] when `raw` is not an integer, and
    /// [`ValidationError::ScoreOutOfRange`] for a score outside the accepted
    /// range.
    pub fn record_result_text(
        &mut self,
        player: PlayerId,
        game: GameId,
        raw: &str,
    ) -> Result<ResultId, ValidationError> {
        self.ensure_player(player)?;
        self.ensure_game(game)?;
        let recorded = Score::parse_with_ceiling(raw, self.config.score_ceiling.max())
            .inspect_err(|err| debug!(%player, %game, error = %err, "rejected result"))?;
        Ok(self.insert_result(player, game, recorded))
    }

    /// Replace the username of `player`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownPlayer`] or a username validation
    /// error; the previous username is kept on failure.
    pub fn rename_player(
        &mut self,
        player: PlayerId,
        name: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let username = Username::new(name)
            .inspect_err(|err| debug!(%player, error = %err, "rejected rename"))?;
        let entry = self
            .players
            .get_mut(player)
            .ok_or(ValidationError::UnknownPlayer { id: player })
            .inspect_err(|err| debug!(error = %err, "rejected rename"))?;
        debug!(%player, from = %entry.username(), to = %username, "renaming player");
        entry.set_username(username);
        Ok(())
    }

    /// Attempt to change the title of `game`.
    ///
    /// Titles are fixed at construction, so this never succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TitleAlreadySet`] for every registered game
    /// and [`ValidationError::UnknownGame`] otherwise.
    pub fn retitle_game(
        &self,
        game: GameId,
        title: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let entry = self
            .games
            .get(game)
            .ok_or(ValidationError::UnknownGame { id: game })
            .inspect_err(|err| debug!(error = %err, "rejected title change"))?;
        let requested = title.into();
        debug!(%game, requested = %requested, "rejected title change");
        Err(ValidationError::TitleAlreadySet {
            current: entry.title().to_string(),
        })
    }

    /// Attempt to change the score of `result`.
    ///
    /// Scores are fixed once recorded, so this never succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ScoreAlreadySet`] for every registered
    /// result and [`ValidationError::UnknownResult`] otherwise.
    pub fn rescore_result(&self, result: ResultId, score: i64) -> Result<(), ValidationError> {
        let entry = self
            .results
            .get(result)
            .ok_or(ValidationError::UnknownResult { id: result })
            .inspect_err(|err| debug!(error = %err, "rejected score change"))?;
        debug!(%result, requested = score, "rejected score change");
        Err(ValidationError::ScoreAlreadySet {
            current: entry.score().value(),
        })
    }

    /// Point `result` at a different registered player.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownResult`] or
    /// [`ValidationError::UnknownPlayer`].
    pub fn reassign_player(
        &mut self,
        result: ResultId,
        player: PlayerId,
    ) -> Result<(), ValidationError> {
        self.ensure_player(player)?;
        let entry = self
            .results
            .get_mut(result)
            .ok_or(ValidationError::UnknownResult { id: result })
            .inspect_err(|err| debug!(error = %err, "rejected reassignment"))?;
        debug!(%result, from = %entry.player(), to = %player, "reassigning result player");
        entry.set_player(player);
        Ok(())
    }

    /// Point `result` at a different registered game.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownResult`] or
    /// [`ValidationError::UnknownGame`].
    pub fn reassign_game(&mut self, result: ResultId, game: GameId) -> Result<(), ValidationError> {
        self.ensure_game(game)?;
        let entry = self
            .results
            .get_mut(result)
            .ok_or(ValidationError::UnknownResult { id: result })
            .inspect_err(|err| debug!(error = %err, "rejected reassignment"))?;
        debug!(%result, from = %entry.game(), to = %game, "reassigning result game");
        entry.set_game(game);
        Ok(())
    }

    /// View of `id` with its derived queries, if registered.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<PlayerRef<'_>> {
        self.players
            .get(id)
            .map(|player| PlayerRef::new(self, id, player))
    }

    /// View of `id` with its derived queries, if registered.
    #[must_use]
    pub fn game(&self, id: GameId) -> Option<GameRef<'_>> {
        self.games.get(id).map(|game| GameRef::new(self, id, game))
    }

    /// The result registered as `id`.
    #[must_use]
    pub fn result(&self, id: ResultId) -> Option<&GameResult> {
        self.results.get(id)
    }

    /// All players in registration order.
    pub fn players(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players.iter()
    }

    /// All games in registration order.
    pub fn games(&self) -> impl Iterator<Item = (GameId, &Game)> {
        self.games.iter()
    }

    /// All results in registration order.
    pub fn results(&self) -> impl Iterator<Item = (ResultId, &GameResult)> {
        self.results.iter()
    }

    /// Number of registered players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Number of registered games.
    #[must_use]
    pub fn game_count(&self) -> usize {
        self.games.len()
    }

    /// Number of recorded results.
    #[must_use]
    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    /// Returns `true` if nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty() && self.games.is_empty() && self.results.is_empty()
    }

    /// The registered player with the highest average score in `game`.
    ///
    /// Every registered player is considered, including those who never
    /// played `game` (their average is zero). On equal averages the player
    /// registered first wins. Returns `None` when no players are registered
    /// or `game` is not registered here.
    #[must_use]
    pub fn highest_scored(&self, game: GameId) -> Option<PlayerRef<'_>> {
        let view = self.game(game)?;
        let mut best: Option<(PlayerId, f64)> = None;
        for (id, _) in self.players.iter() {
            let average = view.average_score(id);
            if best.is_none_or(|(_, top)| average.total_cmp(&top).is_gt()) {
                best = Some((id, average));
            }
        }
        best.and_then(|(id, _)| self.player(id))
    }

    fn insert_result(&mut self, player: PlayerId, game: GameId, score: Score) -> ResultId {
        let id = self.results.insert(GameResult::new(player, game, score));
        debug!(result = %id, %player, %game, %score, "recorded result");
        id
    }

    fn ensure_player(&self, id: PlayerId) -> Result<(), ValidationError> {
        if self.players.contains(id) {
            Ok(())
        } else {
            debug!(player = ?id, "rejected unknown player");
            Err(ValidationError::UnknownPlayer { id })
        }
    }

    fn ensure_game(&self, id: GameId) -> Result<(), ValidationError> {
        if self.games.contains(id) {
            Ok(())
        } else {
            debug!(game = ?id, "rejected unknown game");
            Err(ValidationError::UnknownGame { id })
        }
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::with_config(ScoreboardConfig::default())
    }
}
