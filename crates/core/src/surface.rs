//! Drawing target abstraction.
//!
//! Game entities draw through this trait so the core stays free of any
//! terminal or windowing backend.

use crate::sprite::SpriteSheet;
use crate::types::{Rect, Rgb};

/// A pixel surface entities can draw onto.
pub trait Surface {
    /// Fill `rect` with a solid color. Parts outside the surface are clipped.
    fn fill_rect(&mut self, rect: Rect, color: Rgb);

    /// Copy `src` from `sheet` into `dst`, scaling with nearest-neighbour
    /// sampling. Fully transparent source pixels are skipped.
    fn draw_image(&mut self, sheet: &SpriteSheet, src: Rect, dst: Rect);
}

/// A single recorded draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCall {
    Fill { rect: Rect, color: Rgb },
    Image { src: Rect, dst: Rect },
}

/// Surface that records draw calls instead of rasterizing them.
///
/// Useful for headless runs and for asserting what an entity drew.
#[derive(Debug, Clone, Default)]
pub struct DrawLog {
    calls: Vec<DrawCall>,
}

impl DrawLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Surface for DrawLog {
    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        self.calls.push(DrawCall::Fill { rect, color });
    }

    fn draw_image(&mut self, _sheet: &SpriteSheet, src: Rect, dst: Rect) {
        self.calls.push(DrawCall::Image { src, dst });
    }
}
