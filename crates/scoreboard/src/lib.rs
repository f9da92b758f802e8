//! In-memory model of players, games, and the scored results linking them.
//!
//! Players and games relate many-to-many through results, each carrying a
//! validated score. A [`Scoreboard`] owns the ordered registries of all three
//! entity kinds and answers derived queries by scanning its results.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Validated construction of players, games, and results
//! - Username updates, write-once titles and scores
//! - Per-player and per-game derived queries (games played, players,
//!   averages, rankings)
//! - A configurable score ceiling
//!
//! # Example
//!
//! ```
//! use std::collections::HashSet;
//!
//! use scoreboard::Scoreboard;
//!
//! let mut board = Scoreboard::new();
//! let alice = board.add_player("Alice").expect("valid username");
//! let chess = board.add_game("Chess").expect("valid title");
//! board.record_result(alice, chess, 10).expect("valid result");
//! board.record_result(alice, chess, 30).expect("valid result");
//!
//! let player = board.player(alice).expect("registered player");
//! assert_eq!(player.num_times_played(chess), 2);
//! assert_eq!(player.games_played(), HashSet::from([chess]));
//!
//! let game = board.game(chess).expect("registered game");
//! assert_eq!(game.average_score(alice), 20.0);
//! ```

mod config;
mod error;
mod game;
mod ids;
mod player;
mod registry;
mod result;
mod scoreboard;
mod validation;

pub use config::{ScoreCeiling, ScoreboardConfig};
pub use error::{ConfigError, ValidationError};
pub use game::{Game, GameRef, Standing, Title};
pub use ids::{GameId, PlayerId, ResultId};
pub use player::{Player, PlayerRef, Username};
pub use result::{GameResult, Score};
pub use scoreboard::Scoreboard;
pub use validation::{
    LEGACY_SCORE_MAX, SCORE_MAX, SCORE_MIN, USERNAME_MAX, USERNAME_MIN, is_valid_score,
    is_valid_title, is_valid_username,
};
