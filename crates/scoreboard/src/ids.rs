//! Typed identifiers handed out by the registries.
//!
//! An identifier pairs the token of the scoreboard that issued it with the
//! insertion position of the entity in its registry. Identifier equality is
//! entity identity: two players sharing a username are still distinct
//! players, and an identifier issued by one scoreboard never addresses an
//! entity of another.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

static NEXT_BOARD: AtomicU64 = AtomicU64::new(0);

/// Process-unique token naming the scoreboard that issued an identifier.
///
/// Clones of a scoreboard share its token, so identifiers stay valid on
/// every copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub(crate) struct BoardToken(u64);

impl BoardToken {
    /// Allocate a token no other scoreboard in this process holds.
    pub(crate) fn next() -> Self {
        Self(NEXT_BOARD.fetch_add(1, Ordering::Relaxed))
    }
}

/// Generates a copyable identifier newtype over a board token and a
/// registry position.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident => $prefix:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name {
            board: BoardToken,
            index: usize,
        }

        impl $name {
            /// Zero-based position in the owning registry.
            #[must_use]
            pub const fn index(self) -> usize {
                self.index
            }

            pub(crate) const fn new(board: BoardToken, index: usize) -> Self {
                Self { board, index }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}#{}", $prefix, self.index)
            }
        }

        impl crate::registry::RegistryId for $name {
            fn new(board: BoardToken, index: usize) -> Self {
                Self::new(board, index)
            }

            fn board(self) -> BoardToken {
                self.board
            }

            fn index(self) -> usize {
                self.index
            }
        }
    };
}

define_id! {
    /// Identifies a registered [`Player`](crate::Player).
    PlayerId => "player"
}

define_id! {
    /// Identifies a registered [`Game`](crate::Game).
    GameId => "game"
}

define_id! {
    /// Identifies a registered [`GameResult`](crate::GameResult).
    ResultId => "result"
}
