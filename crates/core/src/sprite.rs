//! Sprite sheet loading.
//!
//! A sheet is decoded once into RGBA pixels and then sampled by frame. The
//! expected layout is a 4x4 grid of equal frames: columns are walk frames,
//! rows are facing directions.

use std::path::{Path, PathBuf};

use image::ImageReader;

use crate::types::{Rect, SPRITE_SHEET_COLUMNS, SPRITE_SHEET_ROWS};

/// Errors raised while loading a sprite sheet.
#[derive(Debug, thiserror::Error)]
pub enum SpriteError {
    #[error("failed to open sprite sheet {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode sprite sheet {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("sprite sheet is {width}x{height}, too small for a 4x4 frame grid")]
    TooSmall { width: u32, height: u32 },

    #[error("pixel buffer holds {found} bytes, expected {expected}")]
    BufferSize { expected: usize, found: usize },
}

/// Decoded RGBA sprite sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteSheet {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl SpriteSheet {
    /// Load and decode an image file.
    pub fn load(path: &Path) -> Result<Self, SpriteError> {
        let reader = ImageReader::open(path).map_err(|source| SpriteError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let decoded = reader.decode().map_err(|source| SpriteError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        let image = decoded.to_rgba8();
        Self::from_rgba(image.width(), image.height(), image.into_raw())
    }

    /// Wrap an already decoded RGBA buffer.
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self, SpriteError> {
        if width < SPRITE_SHEET_COLUMNS || height < SPRITE_SHEET_ROWS {
            return Err(SpriteError::TooSmall { width, height });
        }
        let expected = (width as usize) * (height as usize) * 4;
        if rgba.len() != expected {
            return Err(SpriteError::BufferSize {
                expected,
                found: rgba.len(),
            });
        }
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width of a single frame.
    pub fn frame_width(&self) -> u32 {
        self.width / SPRITE_SHEET_COLUMNS
    }

    /// Height of a single frame.
    pub fn frame_height(&self) -> u32 {
        self.height / SPRITE_SHEET_ROWS
    }

    /// Source rectangle of the frame at `(column, row)` in the grid.
    pub fn frame_rect(&self, column: u32, row: u32) -> Rect {
        let fw = self.frame_width() as i32;
        let fh = self.frame_height() as i32;
        Rect::new(column as i32 * fw, row as i32 * fh, fw, fh)
    }

    /// RGBA value at `(x, y)`, or None outside the sheet.
    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        Some([
            self.rgba[i],
            self.rgba[i + 1],
            self.rgba[i + 2],
            self.rgba[i + 3],
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_rects_split_the_sheet_into_a_grid() {
        let sheet = SpriteSheet::from_rgba(64, 96, vec![0; 64 * 96 * 4]).unwrap();
        assert_eq!(sheet.frame_width(), 16);
        assert_eq!(sheet.frame_height(), 24);
        assert_eq!(sheet.frame_rect(0, 0), Rect::new(0, 0, 16, 24));
        assert_eq!(sheet.frame_rect(3, 2), Rect::new(48, 48, 16, 24));
    }

    #[test]
    fn rejects_mismatched_buffer() {
        let err = SpriteSheet::from_rgba(8, 8, vec![0; 10]).unwrap_err();
        assert!(matches!(
            err,
            SpriteError::BufferSize {
                expected: 256,
                found: 10
            }
        ));
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let err = SpriteSheet::load(Path::new("definitely/not/here.png")).unwrap_err();
        assert!(matches!(err, SpriteError::Open { .. }));
    }
}
