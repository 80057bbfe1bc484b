//! Game state: board, players, turn and history.
//!
//! `GameState` is a plain value. The rules in `games::focus` are its only
//! mutator during play, but fields are public so custom positions can be
//! assembled for analysis and tests.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::ActionRecord;
use super::board::Board;
use super::player::{PlayerId, PlayerMap, PlayerRecord};

/// Whether the game is still being played.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    /// Terminal: no further actions are accepted.
    Won { winner: PlayerId },
}

/// Complete state of one game.
///
/// Uses an `im` vector for history so cloning a state is cheap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Stacks on the 6×6 grid.
    pub board: Board,

    /// Both players' records.
    pub players: PlayerMap<PlayerRecord>,

    /// Player to move.
    pub current_turn: PlayerId,

    /// In progress or won.
    pub status: GameStatus,

    /// Every completed action, oldest first.
    pub history: Vector<ActionRecord>,
}

impl GameState {
    /// Create a game in the standard opening position.
    ///
    /// The first player moves first.
    #[must_use]
    pub fn new(first: PlayerRecord, second: PlayerRecord) -> Self {
        let board = Board::initial(first.color(), second.color());
        Self::with_board(board, first, second)
    }

    /// Create a game on an arbitrary board, first player to move.
    #[must_use]
    pub fn with_board(board: Board, first: PlayerRecord, second: PlayerRecord) -> Self {
        Self {
            board,
            players: PlayerMap::new(first, second),
            current_turn: PlayerId::FIRST,
            status: GameStatus::InProgress,
            history: Vector::new(),
        }
    }

    // === Players ===

    /// Resolve a player name.
    #[must_use]
    pub fn player_id(&self, name: &str) -> Option<PlayerId> {
        self.players.find(|p| p.name() == name)
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerRecord {
        &self.players[player]
    }

    pub fn player_mut(&mut self, player: PlayerId) -> &mut PlayerRecord {
        &mut self.players[player]
    }

    /// Record of the player to move.
    #[must_use]
    pub fn current_player(&self) -> &PlayerRecord {
        &self.players[self.current_turn]
    }

    // === Turn ===

    /// Hand the move to the other player.
    pub fn switch_turn(&mut self) {
        self.current_turn = self.current_turn.opponent();
    }

    /// Check if the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Won { .. })
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.status {
            GameStatus::Won { winner } => Some(winner),
            GameStatus::InProgress => None,
        }
    }

    // === History ===

    /// Number of completed actions.
    #[must_use]
    pub fn ply(&self) -> u32 {
        self.history.len() as u32
    }

    /// Append a completed action.
    pub fn record_action(&mut self, record: ActionRecord) {
        self.history.push_back(record);
    }

    /// Pieces still in play: on the board or held in reserve.
    #[must_use]
    pub fn pieces_in_play(&self) -> usize {
        let reserves: u32 = self.players.iter().map(|(_, p)| p.reserve()).sum();
        self.board.piece_count() + reserves as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Action, Color, Coord};

    fn new_state() -> GameState {
        GameState::new(PlayerRecord::new("PlayerA", 'R'), PlayerRecord::new("PlayerB", 'G'))
    }

    #[test]
    fn test_new_state() {
        let state = new_state();

        assert_eq!(state.current_turn, PlayerId::FIRST);
        assert_eq!(state.current_player().name(), "PlayerA");
        assert_eq!(state.status, GameStatus::InProgress);
        assert_eq!(state.ply(), 0);
        assert_eq!(state.pieces_in_play(), 36);
        assert_eq!(
            state.board.get(Coord::new(0, 0)).and_then(|s| s.top()),
            Some(Color('R'))
        );
    }

    #[test]
    fn test_player_lookup() {
        let state = new_state();

        assert_eq!(state.player_id("PlayerA"), Some(PlayerId::FIRST));
        assert_eq!(state.player_id("PlayerB"), Some(PlayerId::SECOND));
        assert_eq!(state.player_id("Nobody"), None);
        assert_eq!(state.player(PlayerId::SECOND).color(), Color('G'));
    }

    #[test]
    fn test_switch_turn() {
        let mut state = new_state();

        state.switch_turn();
        assert_eq!(state.current_turn, PlayerId::SECOND);
        state.switch_turn();
        assert_eq!(state.current_turn, PlayerId::FIRST);
    }

    #[test]
    fn test_winner() {
        let mut state = new_state();
        assert!(!state.is_over());
        assert_eq!(state.winner(), None);

        state.status = GameStatus::Won { winner: PlayerId::SECOND };
        assert!(state.is_over());
        assert_eq!(state.winner(), Some(PlayerId::SECOND));
    }

    #[test]
    fn test_clone_shares_history() {
        let mut state = new_state();
        state.record_action(ActionRecord::new(PlayerId::FIRST, Action::reserve((0, 0)), 1));

        let mut fork = state.clone();
        fork.record_action(ActionRecord::new(PlayerId::SECOND, Action::reserve((1, 1)), 2));

        assert_eq!(state.ply(), 1);
        assert_eq!(fork.ply(), 2);
    }

    #[test]
    fn test_state_serialization() {
        let mut state = new_state();
        state.player_mut(PlayerId::FIRST).add_reserve();
        state.switch_turn();

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
