//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules and entity state. It has **no
//! dependencies** on terminal I/O; drawing goes through the [`Surface`] trait.
//!
//! - **Deterministic**: the same key sequence always produces the same path
//! - **Testable**: collision, animation and damage are plain functions of state
//! - **Portable**: any backend that implements [`Surface`] can draw entities
//!
//! # Module Structure
//!
//! - [`tile_map`]: the static world grid with walkability lookups
//! - [`player`]: movement, four-corner hitbox collision and sprite drawing
//! - [`animation`]: the four-frame walk cycle
//! - [`sprite`]: sprite sheet decoding and frame lookup
//! - [`surface`]: drawing target abstraction and a recording implementation
//! - [`combat`]: skills, creatures and damage resolution
//! - [`battle`]: alternating-turn battle loop built on [`combat`]
//!
//! # Example
//!
//! ```
//! use tui_tilequest_core::{Player, TileMap};
//! use tui_tilequest_types::{KeySet, MoveKey, DEFAULT_TILE_SIZE};
//!
//! let map = TileMap::demo();
//! let mut player = Player::with_sprite(16, 16, None);
//!
//! let keys = KeySet::from_keys(&[MoveKey::Right]);
//! player.tick(&keys, &map, DEFAULT_TILE_SIZE);
//! assert_eq!(player.position(), (18, 16));
//! ```

pub mod animation;
pub mod battle;
pub mod combat;
pub mod player;
pub mod sprite;
pub mod surface;
pub mod tile_map;

pub use tui_tilequest_types as types;

// Re-export commonly used types for convenience
pub use animation::WalkAnimation;
pub use battle::{Battle, BattleResult, Side};
pub use combat::{attack, damage_for, AttackEvent, Creature, Element, Skill};
pub use player::{MoveOutcome, Player};
pub use sprite::{SpriteError, SpriteSheet};
pub use surface::{DrawCall, DrawLog, Surface};
pub use tile_map::{MapError, TileMap};
