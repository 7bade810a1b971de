//! PixelCanvas: an RGB pixel buffer that entities draw onto.
//!
//! This module is pure (no I/O). The canvas works in world pixels; the
//! [`GameView`](crate::game_view::GameView) later samples it down into
//! terminal cells.

use crate::core::{SpriteSheet, Surface};
use crate::types::{Rect, Rgb};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelCanvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl PixelCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::default(); (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.pixels
            .resize((width as usize) * (height as usize), Rgb::default());
    }

    pub fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Rgb> {
        self.idx(x, y).map(|i| self.pixels[i])
    }

    pub fn set(&mut self, x: i32, y: i32, color: Rgb) {
        if let Some(i) = self.idx(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Intersection of `rect` with the canvas as half-open pixel ranges.
    fn clip(&self, rect: Rect) -> Option<(i32, i32, i32, i32)> {
        if rect.is_empty() {
            return None;
        }
        let x0 = rect.x.max(0);
        let y0 = rect.y.max(0);
        let x1 = rect.right().min(self.width as i32);
        let y1 = rect.bottom().min(self.height as i32);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0, y0, x1, y1))
    }
}

fn blend(dst: Rgb, [r, g, b, a]: [u8; 4]) -> Rgb {
    if a == u8::MAX {
        return Rgb::new(r, g, b);
    }
    let mix = |s: u8, d: u8| ((s as u32 * a as u32 + d as u32 * (255 - a as u32)) / 255) as u8;
    Rgb::new(mix(r, dst.r), mix(g, dst.g), mix(b, dst.b))
}

impl Surface for PixelCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        let Some((x0, y0, x1, y1)) = self.clip(rect) else {
            return;
        };
        for y in y0..y1 {
            let row = (y as usize) * (self.width as usize);
            self.pixels[row + x0 as usize..row + x1 as usize].fill(color);
        }
    }

    fn draw_image(&mut self, sheet: &SpriteSheet, src: Rect, dst: Rect) {
        if src.is_empty() {
            return;
        }
        let Some((x0, y0, x1, y1)) = self.clip(dst) else {
            return;
        };

        // Nearest-neighbour: each destination pixel samples one source pixel.
        for y in y0..y1 {
            let sy = src.y + (y - dst.y) * src.h / dst.h;
            for x in x0..x1 {
                let sx = src.x + (x - dst.x) * src.w / dst.w;
                let Some(rgba) = sheet.pixel(sx, sy) else {
                    continue;
                };
                if rgba[3] == 0 {
                    continue;
                }
                if let Some(i) = self.idx(x, y) {
                    self.pixels[i] = blend(self.pixels[i], rgba);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_tone_sheet() -> SpriteSheet {
        // 4x4 sheet: left half red, right half transparent.
        let mut rgba = Vec::new();
        for _y in 0..4 {
            for x in 0..4 {
                if x < 2 {
                    rgba.extend_from_slice(&[255, 0, 0, 255]);
                } else {
                    rgba.extend_from_slice(&[0, 0, 0, 0]);
                }
            }
        }
        SpriteSheet::from_rgba(4, 4, rgba).unwrap()
    }

    #[test]
    fn fill_rect_clips_negative_origin() {
        let mut canvas = PixelCanvas::new(4, 4);
        let blue = Rgb::new(0, 0, 255);
        canvas.fill_rect(Rect::new(-2, -2, 4, 4), blue);

        assert_eq!(canvas.get(0, 0), Some(blue));
        assert_eq!(canvas.get(1, 1), Some(blue));
        assert_eq!(canvas.get(2, 2), Some(Rgb::default()));
    }

    #[test]
    fn draw_image_scales_up_with_nearest_neighbour() {
        let mut canvas = PixelCanvas::new(8, 8);
        canvas.draw_image(&two_tone_sheet(), Rect::new(0, 0, 4, 4), Rect::new(0, 0, 8, 8));

        let red = Rgb::new(255, 0, 0);
        assert_eq!(canvas.get(0, 0), Some(red));
        assert_eq!(canvas.get(3, 7), Some(red));
        // Transparent half leaves the background untouched.
        assert_eq!(canvas.get(4, 0), Some(Rgb::default()));
        assert_eq!(canvas.get(7, 7), Some(Rgb::default()));
    }

    #[test]
    fn draw_image_partially_offscreen() {
        let mut canvas = PixelCanvas::new(4, 4);
        canvas.draw_image(&two_tone_sheet(), Rect::new(0, 0, 4, 4), Rect::new(-1, -1, 4, 4));

        // Destination (0,0) samples source (1,1): still in the red half.
        assert_eq!(canvas.get(0, 0), Some(Rgb::new(255, 0, 0)));
        assert_eq!(canvas.get(1, 0), Some(Rgb::default()));
    }
}
