//! Player identification and per-player storage.
//!
//! ## PlayerId
//!
//! Seat index in turn order, supporting 1-255 players.
//!
//! ## PlayerMap
//!
//! One value per seat, backed by a `Vec` for O(1) access by `PlayerId`.
//! The engine keeps its `PlayerState`s in one, and final reports carry
//! scores the same way.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat index. The first player to act is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// 0-based seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat that acts after this one in a game of `player_count` seats.
    ///
    /// An empty table has no next seat; it yields seat 0.
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        let next = (self.index() + 1).checked_rem(player_count).unwrap_or(0);
        Self(next as u8)
    }

    /// Iterate over all seats for a game with `player_count` players.
    ///
    /// ```
    /// use deckbuilder::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(seats, vec![PlayerId(0), PlayerId(1), PlayerId(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

/// Per-player data with O(1) access by `PlayerId`.
///
/// ```
/// use deckbuilder::core::{PlayerId, PlayerMap};
///
/// let mut scores: PlayerMap<u32> = PlayerMap::with_value(2, 0);
/// scores[PlayerId::new(1)] += 6;
/// assert_eq!(scores[PlayerId::new(1)], 6);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Build one entry per seat from a factory.
    pub fn new(player_count: usize, factory: impl FnMut(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        Self {
            data: PlayerId::all(player_count).map(factory).collect(),
        }
    }

    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Project every entry into a new map.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> PlayerMap<U> {
        PlayerMap {
            data: self.data.iter().map(&mut f).collect(),
        }
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 1");
    }

    #[test]
    fn test_next_wraps_round_robin() {
        assert_eq!(PlayerId::new(0).next(3), PlayerId::new(1));
        assert_eq!(PlayerId::new(2).next(3), PlayerId::new(0));
        assert_eq!(PlayerId::new(0).next(1), PlayerId::new(0));
        assert_eq!(PlayerId::new(254).next(255), PlayerId::new(0));
    }

    #[test]
    fn test_next_on_empty_table() {
        assert_eq!(PlayerId::new(0).next(0), PlayerId::new(0));
        assert_eq!(PlayerId::new(3).next(0), PlayerId::new(0));
    }

    #[test]
    fn test_last_seat_display() {
        assert_eq!(PlayerId::new(255).to_string(), "Player 256");
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<usize> = PlayerMap::new(4, |p| p.index() * 10);

        assert_eq!(map[PlayerId::new(0)], 0);
        assert_eq!(map[PlayerId::new(3)], 30);
        assert_eq!(map.player_count(), 4);
    }

    #[test]
    fn test_player_map_mutation_and_iter() {
        let mut map: PlayerMap<i32> = PlayerMap::with_value(3, 0);
        map[PlayerId::new(2)] = 5;

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs[2], (PlayerId::new(2), &5));
        assert_eq!(map.values().sum::<i32>(), 5);
    }

    #[test]
    fn test_player_map_projection() {
        let names: PlayerMap<String> = PlayerMap::new(2, |p| format!("seat-{}", p.index()));
        let lengths = names.map(|n| n.len());
        assert_eq!(lengths[PlayerId::new(1)], 6);
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<u32> = PlayerMap::new(2, |p| p.index() as u32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<i32> = PlayerMap::with_value(0, 0);
    }
}
