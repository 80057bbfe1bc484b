//! Name-keyed game interface.

use crate::core::{
    Action, ActionRecord, Board, Color, Coord, FocusError, GameConfig, GameState, GameStatus,
    MoveRejection, PlayerId, PlayerRecord,
};
use crate::rules::{MoveOutcome, RulesEngine};

use super::rules::FocusRules;

/// One game of Focus between two named players.
///
/// ## Example
///
/// ```
/// use focus_engine::games::focus::FocusGame;
/// use focus_engine::core::Color;
/// use focus_engine::rules::MoveOutcome;
///
/// let mut game = FocusGame::new(("PlayerA", 'R'), ("PlayerB", 'G')).unwrap();
///
/// assert_eq!(game.move_piece("PlayerA", (0, 0), (1, 0), 1), Ok(MoveOutcome::Moved));
/// assert_eq!(game.show_pieces((1, 0)).unwrap(), &[Color('G'), Color('R')]);
/// assert!(game.show_pieces((0, 0)).unwrap().is_empty());
/// assert_eq!(game.current_turn(), "PlayerB");
/// ```
#[derive(Clone, Debug)]
pub struct FocusGame {
    rules: FocusRules,
    state: GameState,
}

impl FocusGame {
    /// Start a standard game. The first player moves first.
    pub fn new(first: (&str, char), second: (&str, char)) -> Result<Self, FocusError> {
        Self::with_config(first, second, GameConfig::default())
    }

    /// Start a game with custom rule limits.
    pub fn with_config(
        first: (&str, char),
        second: (&str, char),
        config: GameConfig,
    ) -> Result<Self, FocusError> {
        let first = PlayerRecord::new(first.0, first.1);
        let second = PlayerRecord::new(second.0, second.1);
        Self::from_state(GameState::new(first, second), config)
    }

    /// Resume from a prepared state (custom positions, restored games).
    ///
    /// The players must have distinct names and colors, and no stack may
    /// already exceed the configured height.
    pub fn from_state(state: GameState, config: GameConfig) -> Result<Self, FocusError> {
        Self::check_setup(&state, &config)?;
        Ok(Self {
            rules: FocusRules::new(config),
            state,
        })
    }

    fn check_setup(state: &GameState, config: &GameConfig) -> Result<(), FocusError> {
        let first = state.player(PlayerId::FIRST);
        let second = state.player(PlayerId::SECOND);

        if first.name() == second.name() {
            return Err(FocusError::InvalidSetup(format!(
                "both players are named {:?}",
                first.name()
            )));
        }
        if first.color() == second.color() {
            return Err(FocusError::InvalidSetup(format!(
                "both players use color {}",
                first.color()
            )));
        }

        let tallest = state.board.max_height();
        if tallest > config.max_stack_height {
            return Err(FocusError::InvalidSetup(format!(
                "stack of {tallest} exceeds the limit of {}",
                config.max_stack_height
            )));
        }

        Ok(())
    }

    /// Resolve the player attempting an action.
    ///
    /// An unknown name is never the player to move.
    fn mover(&self, player_name: &str) -> Result<PlayerId, FocusError> {
        if let Some(winner) = self.state.winner() {
            return Err(FocusError::GameOver {
                winner: self.state.player(winner).name().to_string(),
            });
        }
        self.state
            .player_id(player_name)
            .ok_or(FocusError::InvalidMove(MoveRejection::NotYourTurn))
    }

    fn named(&self, player_name: &str) -> Result<&PlayerRecord, FocusError> {
        self.state
            .player_id(player_name)
            .map(|id| self.state.player(id))
            .ok_or_else(|| FocusError::UnknownPlayer(player_name.to_string()))
    }

    // === Commands ===

    /// Move the top `count` pieces from `start` to `finish`.
    ///
    /// The stack must be topped by the mover's color and travel exactly
    /// `count` cells along a row or column. On error nothing changes.
    pub fn move_piece(
        &mut self,
        player_name: &str,
        start: impl Into<Coord>,
        finish: impl Into<Coord>,
        count: usize,
    ) -> Result<MoveOutcome, FocusError> {
        let player = self.mover(player_name)?;
        let action = Action::move_stack(start, finish, count);
        self.rules.apply_action(&mut self.state, player, &action)
    }

    /// Place one reserve piece at `location`.
    pub fn reserved_move(
        &mut self,
        player_name: &str,
        location: impl Into<Coord>,
    ) -> Result<MoveOutcome, FocusError> {
        let player = self.mover(player_name)?;
        let action = Action::reserve(location);
        self.rules.apply_action(&mut self.state, player, &action)
    }

    /// Apply a prebuilt action for the player to move.
    pub fn play(&mut self, action: &Action) -> Result<MoveOutcome, FocusError> {
        let player = self.state.current_turn;
        self.rules.apply_action(&mut self.state, player, action)
    }

    // === Queries ===

    /// Pieces at `location`, bottom first.
    pub fn show_pieces(&self, location: impl Into<Coord>) -> Result<&[Color], FocusError> {
        let location = location.into();
        self.state
            .board
            .get(location)
            .map(|stack| stack.as_slice())
            .ok_or(FocusError::OutOfBounds(location))
    }

    /// Pieces a player holds in reserve.
    pub fn show_reserve(&self, player_name: &str) -> Result<u32, FocusError> {
        self.named(player_name).map(PlayerRecord::reserve)
    }

    /// Opponent pieces a player has captured.
    pub fn show_captured(&self, player_name: &str) -> Result<u32, FocusError> {
        self.named(player_name).map(PlayerRecord::captured)
    }

    /// Name of the player to move.
    #[must_use]
    pub fn current_turn(&self) -> &str {
        self.state.current_player().name()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    /// Name of the winner, if any.
    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        self.rules
            .is_terminal(&self.state)
            .map(|id| self.state.player(id).name())
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerRecord {
        self.state.player(player)
    }

    /// Look up a player's record by name.
    pub fn player_by_name(&self, player_name: &str) -> Result<&PlayerRecord, FocusError> {
        self.named(player_name)
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn rules(&self) -> &FocusRules {
        &self.rules
    }

    /// Completed actions, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &ActionRecord> {
        self.state.history.iter()
    }

    /// Every legal action for the player to move.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        self.rules.legal_actions(&self.state, self.state.current_turn)
    }
}

impl std::fmt::Display for FocusGame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.state.board)
    }
}
