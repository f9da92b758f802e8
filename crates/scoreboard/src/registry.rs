//! Append-only, insertion-ordered entity registries.
//!
//! A registry owns every instance of one entity kind for as long as the
//! owning [`Scoreboard`](crate::Scoreboard) lives. Entries are never removed,
//! so an identifier handed out by [`Registry::insert`] stays valid. Every
//! registry of one scoreboard shares that scoreboard's [`BoardToken`], and
//! identifiers carrying another token are treated as unregistered.

use std::marker::PhantomData;

use crate::ids::BoardToken;

/// Identifier type that addresses a registry slot.
pub(crate) trait RegistryId: Copy {
    /// Build the identifier for the slot at `index` of board `board`.
    fn new(board: BoardToken, index: usize) -> Self;

    /// Scoreboard that issued this identifier.
    fn board(self) -> BoardToken;

    /// Slot addressed by this identifier.
    fn index(self) -> usize;
}

/// Ordered collection of all entities of one kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry<I, T> {
    board: BoardToken,
    entries: Vec<T>,
    _id: PhantomData<I>,
}

impl<I: RegistryId, T> Registry<I, T> {
    /// Create an empty registry issuing identifiers for `board`.
    #[must_use]
    pub const fn new(board: BoardToken) -> Self {
        Self {
            board,
            entries: Vec::new(),
            _id: PhantomData,
        }
    }

    /// Append `entry` and return its identifier.
    pub fn insert(&mut self, entry: T) -> I {
        let id = I::new(self.board, self.entries.len());
        self.entries.push(entry);
        id
    }

    /// Borrow the entry for `id`, if registered here.
    #[must_use]
    pub fn get(&self, id: I) -> Option<&T> {
        self.slot(id).and_then(|index| self.entries.get(index))
    }

    /// Mutably borrow the entry for `id`, if registered here.
    pub fn get_mut(&mut self, id: I) -> Option<&mut T> {
        self.slot(id).and_then(|index| self.entries.get_mut(index))
    }

    /// Returns `true` if `id` addresses an entry of this registry.
    #[must_use]
    pub fn contains(&self, id: I) -> bool {
        self.slot(id).is_some_and(|index| index < self.entries.len())
    }

    /// Number of registered entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been registered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries with their identifiers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (I, &T)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (I::new(self.board, index), entry))
    }

    /// Position addressed by `id`, or `None` when another board issued it.
    fn slot(&self, id: I) -> Option<usize> {
        (id.board() == self.board).then_some(id.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::PlayerId;

    fn registry() -> Registry<PlayerId, &'static str> {
        Registry::new(BoardToken::next())
    }

    #[test]
    fn insert_assigns_sequential_ids() {
        let mut players = registry();
        let first = players.insert("a");
        let second = players.insert("b");

        assert_eq!(first.index(), 0);
        assert_eq!(second.index(), 1);
        assert_eq!(players.len(), 2);
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let mut players = registry();
        for entry in ["c", "a", "b"] {
            players.insert(entry);
        }

        let entries: Vec<_> = players.iter().map(|(_, entry)| *entry).collect();
        assert_eq!(entries, ["c", "a", "b"]);
    }

    #[test]
    fn unknown_ids_are_absent() {
        let mut players = registry();
        players.insert("a");
        let stranger = PlayerId::new(players.board, 7);

        assert!(!players.contains(stranger));
        assert_eq!(players.get(stranger), None);
        assert!(players.get_mut(stranger).is_none());
    }

    #[test]
    fn ids_from_another_board_are_absent() {
        let mut home = registry();
        let mut away = registry();
        let local = away.insert("z");
        let foreign = home.insert("a");

        assert_eq!(foreign.index(), local.index());
        assert!(!away.contains(foreign));
        assert_eq!(away.get(foreign), None);
        assert!(away.get_mut(foreign).is_none());
        assert_eq!(away.get(local), Some(&"z"));
    }

    #[test]
    fn new_registry_is_empty() {
        assert!(registry().is_empty());
    }
}
