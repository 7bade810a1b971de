//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (player logic, combat, terminal rendering).
//!
//! # World Units
//!
//! Positions are measured in world pixels. A tile is `tile_size` pixels square
//! (16 by default) and the player moves [`PLAYER_SPEED`] pixels per tick.
//!
//! # Timing and Movement Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `PLAYER_SPEED` | 2 | Pixels moved per tick |
//! | `HITBOX_MARGIN` | 4 | Inset of the collision box from each tile edge |
//! | `ANIMATION_FRAME_TICKS` | 10 | Counter threshold; frame changes every 11th tick |
//!
//! # Sprite Sheets
//!
//! Character sheets are a 4x4 grid of equal frames. Columns are walk frames,
//! rows are facing directions (see [`Direction::sheet_row`]).
//!
//! # Examples
//!
//! ```
//! use tui_tilequest_types::{is_walkable, Direction, MoveKey, KEY_PRIORITY};
//!
//! // Walkable tiles are exactly codes 2 and 3
//! assert!(is_walkable(2));
//! assert!(is_walkable(3));
//! assert!(!is_walkable(0));
//!
//! // Up wins over every other key
//! assert_eq!(KEY_PRIORITY[0], MoveKey::Up);
//! assert_eq!(MoveKey::Up.direction(), Direction::Up);
//!
//! // Parse a direction
//! assert_eq!(Direction::from_str("left"), Some(Direction::Left));
//! ```

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Default tile edge length in world pixels
pub const DEFAULT_TILE_SIZE: i32 = 16;

/// Player movement speed in pixels per tick
pub const PLAYER_SPEED: i32 = 2;

/// Inset applied to every edge of the tile-sized hitbox
pub const HITBOX_MARGIN: i32 = 4;

/// The walk frame advances once the tick counter exceeds this value
pub const ANIMATION_FRAME_TICKS: u32 = 10;

/// Frames visited while walking, in order
pub const WALK_SEQUENCE: [u8; 4] = [0, 1, 2, 3];

/// Sprite sheet grid columns (walk frames)
pub const SPRITE_SHEET_COLUMNS: u32 = 4;

/// Sprite sheet grid rows (facing directions)
pub const SPRITE_SHEET_ROWS: u32 = 4;

/// Rendered sprite edge as a ratio of the tile edge (3/2 = 1.5x)
pub const SPRITE_SCALE_NUMERATOR: i32 = 3;

/// Rendered sprite scale denominator
pub const SPRITE_SCALE_DENOMINATOR: i32 = 2;

/// Tile codes the player may stand on
pub const WALKABLE_TILES: [u8; 2] = [2, 3];

/// Logical location of the player sprite sheet
pub const DEFAULT_SPRITE_PATH: &str = "res/Char.png";

/// Placeholder color drawn when no sprite sheet is available
pub const PLACEHOLDER_COLOR: Rgb = Rgb::new(0, 0, 255);

/// Returns true if the tile code can be walked on.
#[inline]
pub fn is_walkable(code: u8) -> bool {
    WALKABLE_TILES.contains(&code)
}


/// Facing directions
///
/// The direction decides both the movement delta and which sprite sheet row
/// is sampled when drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Down,
    Up,
    Left,
    Right,
}

impl Direction {
    /// Unit step for this direction as `(dx, dy)` with y growing downward.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Down => (0, 1),
            Direction::Up => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Sprite sheet row holding the walk cycle for this direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_tilequest_types::Direction;
    ///
    /// assert_eq!(Direction::Down.sheet_row(), 0);
    /// assert_eq!(Direction::Left.sheet_row(), 1);
    /// assert_eq!(Direction::Right.sheet_row(), 2);
    /// assert_eq!(Direction::Up.sheet_row(), 3);
    /// ```
    pub fn sheet_row(&self) -> u32 {
        match self {
            Direction::Down => 0,
            Direction::Left => 1,
            Direction::Right => 2,
            Direction::Up => 3,
        }
    }

    /// Parse direction from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "down" => Some(Direction::Down),
            "up" => Some(Direction::Up),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Down => "down",
            Direction::Up => "up",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Movement keys understood by the player controller
///
/// These are logical identifiers; the input layer maps physical keys
/// (W/A/S/D, arrows) onto them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKey {
    Up,
    Down,
    Left,
    Right,
}

/// Order in which held keys are considered. Only the first held key moves the
/// player on a given tick.
pub const KEY_PRIORITY: [MoveKey; 4] = [MoveKey::Up, MoveKey::Down, MoveKey::Left, MoveKey::Right];

impl MoveKey {
    /// Facing direction produced by this key
    pub fn direction(&self) -> Direction {
        match self {
            MoveKey::Up => Direction::Up,
            MoveKey::Down => Direction::Down,
            MoveKey::Left => Direction::Left,
            MoveKey::Right => Direction::Right,
        }
    }

    fn bit(&self) -> u8 {
        match self {
            MoveKey::Up => 1 << 0,
            MoveKey::Down => 1 << 1,
            MoveKey::Left => 1 << 2,
            MoveKey::Right => 1 << 3,
        }
    }
}

/// Set of movement keys held during a tick
///
/// Stored as a bitmask so it can be rebuilt every tick without allocating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeySet {
    bits: u8,
}

impl KeySet {
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Build a set from a slice of keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_tilequest_types::{KeySet, MoveKey};
    ///
    /// let keys = KeySet::from_keys(&[MoveKey::Down, MoveKey::Up]);
    /// assert!(keys.contains(MoveKey::Up));
    /// assert_eq!(keys.winning_key(), Some(MoveKey::Up));
    /// ```
    pub fn from_keys(keys: &[MoveKey]) -> Self {
        let mut set = Self::empty();
        for key in keys {
            set.insert(*key);
        }
        set
    }

    pub fn insert(&mut self, key: MoveKey) {
        self.bits |= key.bit();
    }

    pub fn remove(&mut self, key: MoveKey) {
        self.bits &= !key.bit();
    }

    pub fn contains(&self, key: MoveKey) -> bool {
        self.bits & key.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// The key that drives movement this tick, following [`KEY_PRIORITY`].
    pub fn winning_key(&self) -> Option<MoveKey> {
        KEY_PRIORITY.iter().copied().find(|k| self.contains(*k))
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Axis-aligned rectangle in pixels. `x`/`y` may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }
}
