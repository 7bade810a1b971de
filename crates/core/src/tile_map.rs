//! Tile map module - the static world grid
//!
//! The map is a `rows x cols` grid of tile codes stored in a flat, row-major
//! vector. Codes 2 and 3 are walkable; every other code blocks, and so does
//! any coordinate outside the grid.
//!
//! Coordinates: `(col, row)` where col grows left to right and row grows top to
//! bottom. Pixel positions map to tiles by integer division by `tile_size`.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::types::is_walkable;

/// Errors raised while building a map from external data.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    /// The grid has no rows or no columns.
    #[error("tile map must have at least one row and one column")]
    Empty,

    /// A row differs in length from the first row.
    #[error("tile map row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The map file could not be read.
    #[error("failed to read tile map {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The map JSON is malformed.
    #[error("failed to parse tile map: {0}")]
    Parse(#[from] serde_json::Error),
}

/// On-disk map layout: `{ "tiles": [[1, 1, 1], [1, 2, 1], ...] }`.
#[derive(Debug, Deserialize)]
struct TileMapFile {
    tiles: Vec<Vec<u8>>,
}

/// The world grid - immutable from the player's perspective
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMap {
    cols: usize,
    rows: usize,
    /// Flat array of tile codes, row-major order (row * cols + col)
    tiles: Vec<u8>,
}

impl TileMap {
    /// Create a map of the given size with every tile set to `code`.
    pub fn filled(cols: usize, rows: usize, code: u8) -> Self {
        Self {
            cols,
            rows,
            tiles: vec![code; cols * rows],
        }
    }

    /// Build a map from a list of rows. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, MapError> {
        let expected = rows.first().map(Vec::len).unwrap_or(0);
        if expected == 0 {
            return Err(MapError::Empty);
        }

        let mut tiles = Vec::with_capacity(expected * rows.len());
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != expected {
                return Err(MapError::Ragged {
                    row,
                    expected,
                    found: cells.len(),
                });
            }
            tiles.extend_from_slice(cells);
        }

        Ok(Self {
            cols: expected,
            rows: rows.len(),
            tiles,
        })
    }

    /// Parse a map from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, MapError> {
        let file: TileMapFile = serde_json::from_str(json)?;
        Self::from_rows(file.tiles)
    }

    /// Load a JSON map from disk.
    pub fn load(path: &Path) -> Result<Self, MapError> {
        let json = std::fs::read_to_string(path).map_err(|source| MapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Built-in 20x12 demo level: grass (2) and path (3) surrounded by walls (1)
    /// with a small pond (0) and a rock wall to walk around.
    pub fn demo() -> Self {
        const LAYOUT: [&str; 12] = [
            "11111111111111111111",
            "12222222222222222221",
            "12222222222000022221",
            "12233333333000022221",
            "12232222223000022221",
            "12232211223222222221",
            "12232211223333333321",
            "12232222222222222321",
            "12233333333333333321",
            "12222222211122222221",
            "12222222211122222221",
            "11111111111111111111",
        ];

        let cols = LAYOUT[0].len();
        let tiles = LAYOUT
            .iter()
            .flat_map(|row| row.bytes().map(|b| b - b'0'))
            .collect();

        Self {
            cols,
            rows: LAYOUT.len(),
            tiles,
        }
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline(always)]
    fn index(&self, col: i32, row: i32) -> Option<usize> {
        if col < 0 || row < 0 || col as usize >= self.cols || row as usize >= self.rows {
            return None;
        }
        Some(row as usize * self.cols + col as usize)
    }

    /// Get the tile code at `(col, row)`.
    /// Returns None if out of bounds
    pub fn get(&self, col: i32, row: i32) -> Option<u8> {
        self.index(col, row).map(|idx| self.tiles[idx])
    }

    /// Set the tile code at `(col, row)`.
    /// Returns false if out of bounds
    pub fn set(&mut self, col: i32, row: i32, code: u8) -> bool {
        match self.index(col, row) {
            Some(idx) => {
                self.tiles[idx] = code;
                true
            }
            None => false,
        }
    }

    /// Check if `(col, row)` is inside the grid and walkable.
    pub fn is_walkable(&self, col: i32, row: i32) -> bool {
        self.get(col, row).is_some_and(is_walkable)
    }

    /// Tile coordinate containing pixel `(px, py)`.
    ///
    /// Uses truncating integer division, so small negative pixel values map to
    /// column/row 0.
    ///
    /// # Panics
    ///
    /// Panics if `tile_size` is zero.
    pub fn tile_coord(px: i32, py: i32, tile_size: i32) -> (i32, i32) {
        (px / tile_size, py / tile_size)
    }

    /// Pixel dimensions of the whole map.
    ///
    /// Saturates at `i32::MAX`; use [`TileMap::checked_pixel_size`] to detect
    /// oversized maps.
    pub fn pixel_size(&self, tile_size: i32) -> (i32, i32) {
        let side = |count: usize| {
            i32::try_from(count)
                .unwrap_or(i32::MAX)
                .saturating_mul(tile_size)
        };
        (side(self.cols), side(self.rows))
    }

    /// Pixel dimensions of the whole map, or `None` if they overflow `i32`.
    pub fn checked_pixel_size(&self, tile_size: i32) -> Option<(i32, i32)> {
        let w = i32::try_from(self.cols).ok()?.checked_mul(tile_size)?;
        let h = i32::try_from(self.rows).ok()?.checked_mul(tile_size)?;
        Some((w, h))
    }

    /// Flat view of the tile codes (row-major).
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }
}

impl Default for TileMap {
    fn default() -> Self {
        Self::demo()
    }
}
