//! Core engine types: players, board, actions, configuration, state, errors.

pub mod player;
pub mod board;
pub mod config;
pub mod action;
pub mod state;
pub mod error;

pub use player::{Color, PlayerId, PlayerMap, PlayerRecord, PLAYER_COUNT};
pub use board::{Board, Coord, Pieces, Stack, BOARD_SIZE, CELL_COUNT};
pub use config::{GameConfig, DEFAULT_CAPTURES_TO_WIN, DEFAULT_MAX_STACK_HEIGHT};
pub use action::{Action, ActionRecord};
pub use state::{GameState, GameStatus};
pub use error::{FocusError, MoveRejection};
