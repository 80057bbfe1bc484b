//! Game configuration.
//!
//! The board is always 6×6. The two limits that drive overflow and
//! victory are configurable so variants and test positions can tighten
//! them; the defaults are the standard Focus rules.

use serde::{Deserialize, Serialize};

/// Standard maximum stack height.
pub const DEFAULT_MAX_STACK_HEIGHT: usize = 5;

/// Standard number of captures needed to win.
pub const DEFAULT_CAPTURES_TO_WIN: u32 = 5;

/// Rule limits for one game.
///
/// ```
/// use focus_engine::core::GameConfig;
///
/// let config = GameConfig::default().with_captures_to_win(3);
/// assert_eq!(config.max_stack_height, 5);
/// assert_eq!(config.captures_to_win, 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Stacks taller than this lose pieces from the bottom.
    pub max_stack_height: usize,

    /// Captured pieces needed for the mover to win.
    pub captures_to_win: u32,
}

impl GameConfig {
    /// Create a configuration with explicit limits.
    pub fn new(max_stack_height: usize, captures_to_win: u32) -> Self {
        assert!(max_stack_height > 0, "Stacks must hold at least 1 piece");
        assert!(captures_to_win > 0, "Victory must need at least 1 capture");

        Self {
            max_stack_height,
            captures_to_win,
        }
    }

    /// Set the maximum stack height.
    #[must_use]
    pub fn with_max_stack_height(self, height: usize) -> Self {
        Self::new(height, self.captures_to_win)
    }

    /// Set the capture count needed to win.
    #[must_use]
    pub fn with_captures_to_win(self, captures: u32) -> Self {
        Self::new(self.max_stack_height, captures)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_STACK_HEIGHT, DEFAULT_CAPTURES_TO_WIN)
    }
}
