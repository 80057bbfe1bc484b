//! Rules engine trait for game implementations.
//!
//! `RulesEngine` defines:
//! - Which actions are legal
//! - How actions modify state
//! - When the game is won

pub mod engine;

pub use engine::{MoveOutcome, RulesEngine};
