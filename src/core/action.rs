//! Action representation.
//!
//! Focus has two kinds of turn:
//! - `Move`: pick up the top `count` pieces of a stack you control and carry
//!   them exactly `count` cells in a straight line.
//! - `Reserve`: put one of your reserve pieces onto any cell.

use serde::{Deserialize, Serialize};

use super::board::Coord;
use super::player::PlayerId;

/// A complete game action.
///
/// ## Example
///
/// ```
/// use focus_engine::core::{Action, Coord};
///
/// let step = Action::move_stack((0, 0), (1, 0), 1);
/// assert_eq!(step.destination(), Coord::new(1, 0));
///
/// let drop = Action::reserve((3, 3));
/// assert_eq!(drop.destination(), Coord::new(3, 3));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move the top `count` pieces from `from` to `to`.
    Move { from: Coord, to: Coord, count: usize },
    /// Place a reserve piece at `to`.
    Reserve { to: Coord },
}

impl Action {
    /// Create a stack move.
    #[must_use]
    pub fn move_stack(from: impl Into<Coord>, to: impl Into<Coord>, count: usize) -> Self {
        Action::Move {
            from: from.into(),
            to: to.into(),
            count,
        }
    }

    /// Create a reserve placement.
    #[must_use]
    pub fn reserve(to: impl Into<Coord>) -> Self {
        Action::Reserve { to: to.into() }
    }

    /// Cell that receives pieces.
    #[must_use]
    pub fn destination(&self) -> Coord {
        match *self {
            Action::Move { to, .. } | Action::Reserve { to } => to,
        }
    }

    /// Number of pieces that land on the destination.
    #[must_use]
    pub fn pieces_moved(&self) -> usize {
        match *self {
            Action::Move { count, .. } => count,
            Action::Reserve { .. } => 1,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Move { from, to, count } => write!(f, "move {count} {from} -> {to}"),
            Action::Reserve { to } => write!(f, "reserve -> {to}"),
        }
    }
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Ply number (1 for the opening move).
    pub ply: u32,

    /// Own-color pieces sent to the mover's reserve by overflow.
    pub reserved: u32,

    /// Opponent pieces captured by overflow.
    pub captured: u32,
}

impl ActionRecord {
    /// Create a record with no overflow.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, ply: u32) -> Self {
        Self {
            player,
            action,
            ply,
            reserved: 0,
            captured: 0,
        }
    }
}
