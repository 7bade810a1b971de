//! Player module - movement, tile collision and sprite drawing
//!
//! Each tick the player reads the held movement keys, picks a single direction
//! by fixed priority (Up > Down > Left > Right), tests the candidate position
//! against the tile map and commits it only when every hitbox corner lands on
//! a walkable tile.
//!
//! The walk animation advances whenever a movement key is held, including
//! ticks where the move was blocked. Walking into a wall keeps the feet moving.

use std::path::Path;

use crate::animation::WalkAnimation;
use crate::sprite::SpriteSheet;
use crate::surface::Surface;
use crate::tile_map::TileMap;
use crate::types::{
    Direction, KeySet, Rect, HITBOX_MARGIN, PLACEHOLDER_COLOR, PLAYER_SPEED,
    SPRITE_SCALE_DENOMINATOR, SPRITE_SCALE_NUMERATOR,
};

/// Result of a single [`Player::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// No movement key held.
    Idle,
    /// Candidate position accepted.
    Moved,
    /// Candidate position collided; position unchanged.
    Blocked,
}

/// The player-controlled entity
#[derive(Debug, Clone)]
pub struct Player {
    x: i32,
    y: i32,
    speed: i32,
    direction: Direction,
    is_moving: bool,
    animation: WalkAnimation,
    sprite: Option<SpriteSheet>,
}

impl Player {
    /// Create a player at `(start_x, start_y)` and load its sprite sheet.
    ///
    /// A missing or unreadable sheet is logged and the player falls back to
    /// placeholder drawing for its whole lifetime.
    pub fn new(start_x: i32, start_y: i32, sprite_path: &Path) -> Self {
        let sprite = match SpriteSheet::load(sprite_path) {
            Ok(sheet) => {
                tracing::debug!(
                    path = %sprite_path.display(),
                    width = sheet.width(),
                    height = sheet.height(),
                    "player sprite sheet loaded"
                );
                Some(sheet)
            }
            Err(err) => {
                tracing::warn!(
                    path = %sprite_path.display(),
                    error = %err,
                    "player sprite unavailable, using placeholder"
                );
                None
            }
        };
        Self::with_sprite(start_x, start_y, sprite)
    }

    /// Create a player with an already loaded (or absent) sprite sheet.
    pub fn with_sprite(start_x: i32, start_y: i32, sprite: Option<SpriteSheet>) -> Self {
        Self {
            x: start_x,
            y: start_y,
            speed: PLAYER_SPEED,
            direction: Direction::Down,
            is_moving: false,
            animation: WalkAnimation::new(),
            sprite,
        }
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_moving(&self) -> bool {
        self.is_moving
    }

    /// Sprite sheet column currently displayed.
    pub fn frame(&self) -> u8 {
        self.animation.frame()
    }

    pub fn has_sprite(&self) -> bool {
        self.sprite.is_some()
    }

    /// Advance the player by one tick.
    ///
    /// # Panics
    ///
    /// Panics if `tile_size` is zero.
    pub fn tick(&mut self, keys: &KeySet, map: &TileMap, tile_size: i32) -> MoveOutcome {
        let Some(key) = keys.winning_key() else {
            self.is_moving = false;
            self.animation.stand();
            return MoveOutcome::Idle;
        };

        self.direction = key.direction();
        self.is_moving = true;

        let (dx, dy) = self.direction.delta();
        let next_x = self.x + dx * self.speed;
        let next_y = self.y + dy * self.speed;

        let outcome = if Self::check_collision(next_x, next_y, map, tile_size) {
            tracing::debug!(x = next_x, y = next_y, "move blocked");
            MoveOutcome::Blocked
        } else {
            self.x = next_x;
            self.y = next_y;
            MoveOutcome::Moved
        };

        self.animation.advance();
        outcome
    }

    /// Corners of the inset hitbox for a player standing at `(x, y)`.
    ///
    /// Order: top-left, top-right, bottom-left, bottom-right.
    pub fn hitbox_corners(x: i32, y: i32, tile_size: i32) -> [(i32, i32); 4] {
        let near = HITBOX_MARGIN;
        let far = tile_size - 1 - HITBOX_MARGIN;
        [
            (x + near, y + near),
            (x + far, y + near),
            (x + near, y + far),
            (x + far, y + far),
        ]
    }

    /// Returns true if a player at `(target_x, target_y)` would overlap a
    /// blocking or out-of-bounds tile.
    ///
    /// # Panics
    ///
    /// Panics if `tile_size` is zero.
    pub fn check_collision(target_x: i32, target_y: i32, map: &TileMap, tile_size: i32) -> bool {
        Self::hitbox_corners(target_x, target_y, tile_size)
            .iter()
            .any(|&(px, py)| {
                let (col, row) = TileMap::tile_coord(px, py, tile_size);
                !map.is_walkable(col, row)
            })
    }

    /// Draw the player onto `surface`.
    ///
    /// The sprite is drawn at 1.5x the tile size, centered on the tile cell so
    /// it overflows the collision footprint on every side. Without a sprite
    /// sheet a solid square of the tile footprint is drawn instead.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, tile_size: i32) {
        let Some(sheet) = &self.sprite else {
            surface.fill_rect(
                Rect::new(self.x, self.y, tile_size, tile_size),
                PLACEHOLDER_COLOR,
            );
            return;
        };

        let src = sheet.frame_rect(self.frame() as u32, self.direction.sheet_row());
        surface.draw_image(sheet, src, self.sprite_rect(tile_size));
    }

    /// Destination rectangle of the sprite for the current position.
    pub fn sprite_rect(&self, tile_size: i32) -> Rect {
        let render_size = tile_size * SPRITE_SCALE_NUMERATOR / SPRITE_SCALE_DENOMINATOR;
        let offset = (tile_size - render_size) / 2;
        Rect::new(self.x + offset, self.y + offset, render_size, render_size)
    }
}
