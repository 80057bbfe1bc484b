//! Focus (also sold as Domination).
//!
//! Two players stack pieces on a 6×6 board:
//! - A stack belongs to whoever's color is on top
//! - A stack of N pieces may move up to N of them exactly that many cells
//!   in a straight line, landing on top of whatever is there
//! - Stacks taller than 5 lose pieces from the bottom: the mover's own
//!   color goes to their reserve, the opponent's is captured
//! - A reserve piece may be placed anywhere instead of moving
//! - The first player to capture 5 pieces wins

mod game;
mod rules;

pub use game::FocusGame;
pub use rules::FocusRules;
