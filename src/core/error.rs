//! Error types.
//!
//! Every error is local to one call and leaves the game untouched.

use thiserror::Error;

use super::board::Coord;

/// Why a stack move failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MoveRejection {
    #[error("it is not this player's turn")]
    NotYourTurn,

    #[error("start or finish is off the board")]
    OutOfBounds,

    #[error("the mover does not control the starting stack")]
    NotStackOwner,

    #[error("cannot move {requested} pieces from a stack of {available}")]
    BadPieceCount { requested: usize, available: usize },

    #[error("a move must travel in a straight line exactly as far as the pieces moved")]
    BadDistance,
}

/// Errors reported by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FocusError {
    #[error("Invalid move: {0}")]
    InvalidMove(#[from] MoveRejection),

    #[error("Unknown player: {0}")]
    UnknownPlayer(String),

    #[error("Position {0} is off the board")]
    OutOfBounds(Coord),

    #[error("{0} has no pieces in reserve")]
    EmptyReserve(String),

    #[error("Game is over: {winner} has won")]
    GameOver { winner: String },

    #[error("Invalid setup: {0}")]
    InvalidSetup(String),
}
