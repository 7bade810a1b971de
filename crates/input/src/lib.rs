//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events onto [`crate::types::MoveKey`] and tracks which keys
//! are held, including on terminals without key-release events.

pub mod held;
pub mod map;

pub use tui_tilequest_types as types;

pub use held::{HeldKeys, DEFAULT_KEY_RELEASE_TIMEOUT_MS};
pub use map::{map_move_key, should_quit};
