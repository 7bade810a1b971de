//! Runtime configuration.
//!
//! Compile-time defaults live in the types crate; this layer lets a JSON file
//! and command-line flags override them. Every field is optional in the file:
//!
//! ```json
//! {
//!   "tile_size": 16,
//!   "sprite_path": "res/Char.png",
//!   "start_tile": [1, 1],
//!   "map_path": "maps/meadow.json",
//!   "key_release_timeout_ms": 500,
//!   "pixels_per_column": 4,
//!   "log_dir": "logs"
//! }
//! ```
//!
//! An inline `"map": [[1, 1, 1], [1, 2, 1], [1, 1, 1]]` may be given instead
//! of `map_path`. Without either, the built-in demo map is used.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Deserialize;

use crate::core::TileMap;
use crate::input::DEFAULT_KEY_RELEASE_TIMEOUT_MS;
use crate::term::DEFAULT_PIXELS_PER_COLUMN;
use crate::types::{DEFAULT_SPRITE_PATH, DEFAULT_TILE_SIZE, HITBOX_MARGIN, TICK_MS};

/// Largest accepted tile edge in world pixels.
pub const MAX_TILE_SIZE: i32 = 256;

/// Upper bound on the world canvas (map width times height, in pixels).
pub const MAX_WORLD_PIXELS: u64 = 4096 * 4096;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub tile_size: i32,
    pub sprite_path: PathBuf,
    /// Starting tile as `[col, row]`.
    pub start_tile: [i32; 2],
    pub map_path: Option<PathBuf>,
    pub map: Option<Vec<Vec<u8>>>,
    pub key_release_timeout_ms: u32,
    pub pixels_per_column: u32,
    pub log_dir: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
            sprite_path: PathBuf::from(DEFAULT_SPRITE_PATH),
            start_tile: [1, 1],
            map_path: None,
            map: None,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
            pixels_per_column: DEFAULT_PIXELS_PER_COLUMN,
            log_dir: PathBuf::from("logs"),
        }
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("invalid config JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("in config {}", path.display()))
    }

    /// Reject values the movement and rendering math cannot work with.
    pub fn validate(&self) -> Result<()> {
        // The inset hitbox must keep a positive width.
        if self.tile_size <= 2 * HITBOX_MARGIN {
            bail!(
                "tile_size must be greater than {}, got {}",
                2 * HITBOX_MARGIN,
                self.tile_size
            );
        }
        if self.tile_size > MAX_TILE_SIZE {
            bail!(
                "tile_size must be at most {}, got {}",
                MAX_TILE_SIZE,
                self.tile_size
            );
        }
        // A key must survive at least one tick or the player never moves.
        if self.key_release_timeout_ms < TICK_MS {
            bail!(
                "key_release_timeout_ms must be at least {}, got {}",
                TICK_MS,
                self.key_release_timeout_ms
            );
        }
        if self.pixels_per_column == 0 {
            bail!("pixels_per_column must be at least 1");
        }
        if self.map_path.is_some() && self.map.is_some() {
            bail!("set either map_path or map, not both");
        }
        Ok(())
    }

    /// Apply command-line overrides on top of the file values.
    pub fn apply_cli(&mut self, cli: &Cli) -> Result<()> {
        if let Some(path) = &cli.map {
            self.map_path = Some(path.clone());
            self.map = None;
        }
        if let Some(path) = &cli.sprite {
            self.sprite_path = path.clone();
        }
        if let Some(tile_size) = cli.tile_size {
            self.tile_size = tile_size;
        }
        if let Some(dir) = &cli.log_dir {
            self.log_dir = dir.clone();
        }
        self.validate()
    }

    /// Build the tile map this config points at.
    ///
    /// Maps whose world canvas would exceed [`MAX_WORLD_PIXELS`] at the
    /// configured tile size are rejected.
    pub fn tile_map(&self) -> Result<TileMap> {
        let map = if let Some(path) = &self.map_path {
            TileMap::load(path).with_context(|| format!("failed to load map {}", path.display()))?
        } else if let Some(rows) = &self.map {
            TileMap::from_rows(rows.clone()).context("invalid inline map")?
        } else {
            TileMap::demo()
        };

        let pixels = map
            .checked_pixel_size(self.tile_size)
            .and_then(|(w, h)| (w as u64).checked_mul(h as u64))
            .filter(|&area| area <= MAX_WORLD_PIXELS);
        if pixels.is_none() {
            bail!(
                "{}x{} map at tile_size {} exceeds {} world pixels",
                map.cols(),
                map.rows(),
                self.tile_size,
                MAX_WORLD_PIXELS
            );
        }
        Ok(map)
    }

    /// Starting position in world pixels.
    pub fn start_position(&self) -> (i32, i32) {
        (
            self.start_tile[0] * self.tile_size,
            self.start_tile[1] * self.tile_size,
        )
    }
}

/// Command-line flags for the walking demo.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "tui-tilequest", about = "Walk a tile map in the terminal")]
pub struct Cli {
    /// JSON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// JSON tile map, overrides the config
    #[arg(short, long)]
    pub map: Option<PathBuf>,

    /// Sprite sheet PNG (4x4 frames)
    #[arg(short, long)]
    pub sprite: Option<PathBuf>,

    /// Tile edge in world pixels
    #[arg(long)]
    pub tile_size: Option<i32>,

    /// Directory for the log file
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

impl Cli {
    /// Resolve the final configuration: defaults, then file, then flags.
    pub fn resolve(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };
        config.apply_cli(self)?;
        Ok(config)
    }
}
