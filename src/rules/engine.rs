//! Rules engine trait.
//!
//! Separates what is legal and how actions change a `GameState` from the
//! state itself, so the same rules can drive many independent games.

use crate::core::action::Action;
use crate::core::config::GameConfig;
use crate::core::error::FocusError;
use crate::core::player::PlayerId;
use crate::core::state::GameState;

/// Result of an accepted action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Action applied, turn passed to the opponent.
    Moved,
    /// Action applied and the mover reached the capture target.
    /// The turn does not pass.
    Won { winner: PlayerId },
}

impl MoveOutcome {
    /// Check if a player won with this action.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, MoveOutcome::Won { winner } if *winner == player)
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `validate`: must not mutate; `Ok(())` means `apply_action` will succeed
/// - `apply_action`: validates first and leaves the state untouched on error
/// - `candidate_actions`: may over-approximate, `legal_actions` filters
/// - `is_terminal`: returns None while the game continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Check an action without applying it.
    fn validate(&self, state: &GameState, player: PlayerId, action: &Action) -> Result<(), FocusError>;

    /// Apply an action to the game state.
    fn apply_action(
        &self,
        state: &mut GameState,
        player: PlayerId,
        action: &Action,
    ) -> Result<MoveOutcome, FocusError>;

    /// Actions worth validating for a player.
    fn candidate_actions(&self, state: &GameState, player: PlayerId) -> Vec<Action>;

    /// Winner, if the game is over.
    fn is_terminal(&self, state: &GameState) -> Option<PlayerId>;

    // === Convenience Methods ===

    /// Enumerate every action that would pass validation.
    fn legal_actions(&self, state: &GameState, player: PlayerId) -> Vec<Action> {
        self.candidate_actions(state, player)
            .into_iter()
            .filter(|action| self.validate(state, player, action).is_ok())
            .collect()
    }

    /// Check a single action.
    fn is_legal(&self, state: &GameState, player: PlayerId, action: &Action) -> bool {
        self.validate(state, player, action).is_ok()
    }
}
