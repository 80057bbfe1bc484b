//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Focus is strictly two-player: `PlayerId::FIRST` moves first,
//! `PlayerId::SECOND` replies.
//!
//! ## PlayerMap
//!
//! Fixed two-entry storage indexed by `PlayerId`.
//!
//! ## PlayerRecord
//!
//! Name, color and the reserve/captured counters of one player.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of players in a game of Focus.
pub const PLAYER_COUNT: usize = 2;

/// Player identifier, 0 or 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl TryFrom<u8> for PlayerId {
    type Error = String;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        if (index as usize) < PLAYER_COUNT {
            Ok(Self(index))
        } else {
            Err(format!("player index {index} out of range"))
        }
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> u8 {
        player.0
    }
}

impl PlayerId {
    /// The player who moves first.
    pub const FIRST: PlayerId = PlayerId(0);

    /// The player who moves second.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other player.
    ///
    /// ```
    /// use focus_engine::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::FIRST.opponent(), PlayerId::SECOND);
    /// assert_eq!(PlayerId::SECOND.opponent(), PlayerId::FIRST);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Both player IDs in turn order.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [Self::FIRST, Self::SECOND].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use focus_engine::core::{PlayerId, PlayerMap};
///
/// let mut reserves: PlayerMap<u32> = PlayerMap::with_value(0);
/// reserves[PlayerId::SECOND] += 2;
///
/// assert_eq!(reserves[PlayerId::FIRST], 0);
/// assert_eq!(reserves[PlayerId::SECOND], 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create from explicit first/second entries.
    pub fn new(first: T, second: T) -> Self {
        Self {
            data: [first, second],
        }
    }

    /// Create with values from a factory function.
    pub fn from_fn(factory: impl Fn(PlayerId) -> T) -> Self {
        Self::new(factory(PlayerId::FIRST), factory(PlayerId::SECOND))
    }

    /// Create with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(value.clone(), value)
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all().zip(self.data.iter())
    }

    /// Find the first player whose entry matches.
    pub fn find(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<PlayerId> {
        self.iter().find(|(_, v)| predicate(*v)).map(|(p, _)| p)
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

/// Piece color. Pieces carry nothing but their color.
///
/// Colors are single-character tags chosen by the players at setup
/// (for example `'R'` and `'G'`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub char);

impl From<char> for Color {
    fn from(tag: char) -> Self {
        Self(tag)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One player's identity and piece counters.
///
/// Mutators never fail: the rules check preconditions before calling them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    name: String,
    color: Color,
    reserve: u32,
    captured: u32,
}

impl PlayerRecord {
    /// Create a record with empty reserve and no captures.
    pub fn new(name: impl Into<String>, color: impl Into<Color>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            reserve: 0,
            captured: 0,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Pieces held in reserve.
    #[must_use]
    pub fn reserve(&self) -> u32 {
        self.reserve
    }

    pub fn add_reserve(&mut self) {
        self.reserve += 1;
    }

    /// Take one piece out of reserve. Caller checks `reserve() > 0`.
    pub fn remove_reserve(&mut self) {
        debug_assert!(self.reserve > 0, "reserve underflow for {}", self.name);
        self.reserve = self.reserve.saturating_sub(1);
    }

    /// Opponent pieces captured so far.
    #[must_use]
    pub fn captured(&self) -> u32 {
        self.captured
    }

    pub fn add_captured(&mut self) {
        self.captured += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::FIRST.index(), 0);
        assert_eq!(PlayerId::SECOND.index(), 1);
        assert_eq!(format!("{}", PlayerId::SECOND), "Player 1");

        let players: Vec<_> = PlayerId::all().collect();
        assert_eq!(players, vec![PlayerId::FIRST, PlayerId::SECOND]);
    }

    #[test]
    fn test_opponent_is_involution() {
        for p in PlayerId::all() {
            assert_ne!(p.opponent(), p);
            assert_eq!(p.opponent().opponent(), p);
        }
    }

    #[test]
    fn test_player_map_from_fn() {
        let map: PlayerMap<usize> = PlayerMap::from_fn(|p| p.index() * 10);

        assert_eq!(map[PlayerId::FIRST], 0);
        assert_eq!(map[PlayerId::SECOND], 10);
    }

    #[test]
    fn test_player_map_mutation_and_find() {
        let mut map = PlayerMap::new("a", "b");
        map[PlayerId::SECOND] = "c";

        assert_eq!(map.find(|v| *v == "c"), Some(PlayerId::SECOND));
        assert_eq!(map.find(|v| *v == "b"), None);
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<i32> = PlayerMap::new(1, 2);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }

    #[test]
    fn test_player_id_deserialization_rejects_out_of_range() {
        let id: PlayerId = serde_json::from_str("1").unwrap();
        assert_eq!(id, PlayerId::SECOND);
        assert!(serde_json::from_str::<PlayerId>("2").is_err());
    }

    #[test]
    fn test_record_counters() {
        let mut record = PlayerRecord::new("PlayerA", 'R');
        assert_eq!(record.name(), "PlayerA");
        assert_eq!(record.color(), Color('R'));
        assert_eq!(record.reserve(), 0);
        assert_eq!(record.captured(), 0);

        record.add_reserve();
        record.add_reserve();
        record.remove_reserve();
        record.add_captured();

        assert_eq!(record.reserve(), 1);
        assert_eq!(record.captured(), 1);
    }

    #[test]
    fn test_color_display() {
        assert_eq!(Color::from('G').to_string(), "G");
    }
}
