//! # focus-engine
//!
//! Rule engine for Focus (Domination), a two-player stacking game on a 6×6
//! board.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: A game is a plain `GameState` value. No globals,
//!    so any number of games can run side by side.
//!
//! 2. **Transactional Actions**: Every action is validated in full before
//!    anything is mutated. A rejected action leaves the game untouched.
//!
//! 3. **Rules Behind a Trait**: `RulesEngine` separates legality and state
//!    transitions from the state they act on.
//!
//! ## Modules
//!
//! - `core`: Players, board and stacks, actions, configuration, state, errors
//! - `rules`: RulesEngine trait and move outcomes
//! - `games`: The Focus rules and the name-keyed `FocusGame` interface
//!
//! ## Example
//!
//! ```
//! use focus_engine::{FocusGame, MoveOutcome};
//!
//! let mut game = FocusGame::new(("PlayerA", 'R'), ("PlayerB", 'G')).unwrap();
//!
//! // Out of turn.
//! assert!(game.move_piece("PlayerB", (0, 2), (0, 1), 1).is_err());
//!
//! assert_eq!(game.move_piece("PlayerA", (0, 1), (0, 2), 1), Ok(MoveOutcome::Moved));
//! assert_eq!(game.show_pieces((0, 2)).unwrap().len(), 2);
//! ```

pub mod core;
pub mod rules;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord,
    Board, Color, Coord, Stack, BOARD_SIZE,
    FocusError, MoveRejection,
    GameConfig, GameState, GameStatus,
    PlayerId, PlayerMap, PlayerRecord,
};

pub use crate::rules::{MoveOutcome, RulesEngine};

pub use crate::games::focus::{FocusGame, FocusRules};
