//! GameView: maps the tile map and player into a terminal framebuffer.
//!
//! Rendering happens in two passes. First the world is painted in world pixels
//! onto a [`PixelCanvas`] (tiles, then the player through its own `render`).
//! Then the canvas is sampled down into half-block cells inside a bordered
//! frame, next to a small status panel.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::canvas::PixelCanvas;
use crate::core::{MoveOutcome, Player, Surface, TileMap};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::Rect;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Everything the view needs for one frame.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub map: &'a TileMap,
    pub player: &'a Player,
    pub tile_size: i32,
    pub last_move: MoveOutcome,
}

/// Default world pixels per terminal column.
pub const DEFAULT_PIXELS_PER_COLUMN: u32 = 4;

/// Narrowest side panel worth drawing.
const MIN_PANEL_WIDTH: u16 = 12;

pub struct GameView {
    /// World pixels per terminal column; a row covers twice as many.
    pixels_per_column: u32,
    canvas: PixelCanvas,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(DEFAULT_PIXELS_PER_COLUMN)
    }
}

impl GameView {
    pub fn new(pixels_per_column: u32) -> Self {
        Self {
            pixels_per_column: pixels_per_column.max(1),
            canvas: PixelCanvas::new(0, 0),
        }
    }

    pub fn pixels_per_column(&self) -> u32 {
        self.pixels_per_column
    }

    /// The world canvas painted by the last render.
    pub fn canvas(&self) -> &PixelCanvas {
        &self.canvas
    }

    /// Smallest scale, at least the configured one, that fits the whole map
    /// (plus border) inside `viewport`.
    pub fn fit_scale(&self, map_px: (u32, u32), viewport: Viewport) -> u32 {
        let inner_w = viewport.width.saturating_sub(2).max(1) as u32;
        let inner_h = viewport.height.saturating_sub(2).max(1) as u32 * 2;
        let by_w = map_px.0.div_ceil(inner_w);
        let by_h = map_px.1.div_ceil(inner_h);
        self.pixels_per_column.max(by_w).max(by_h)
    }

    /// Render the scene into an existing framebuffer.
    ///
    /// Callers can reuse the framebuffer across frames; it is resized to the
    /// viewport and cleared first.
    pub fn render_into(&mut self, scene: &Scene<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let (map_w, map_h) = scene.map.pixel_size(scene.tile_size);
        let map_px = (map_w.max(0) as u32, map_h.max(0) as u32);

        self.paint_world(scene, map_px);

        let scale = self.fit_scale(map_px, viewport);
        let cols = map_px.0.div_ceil(scale) as u16;
        let rows = map_px.1.div_ceil(scale * 2) as u16;
        let frame_w = cols.saturating_add(2);
        let frame_h = rows.saturating_add(2);

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);
        self.blit_canvas(fb, start_x + 1, start_y + 1, cols, rows, scale);

        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        self.draw_side_panel(fb, scene, viewport, panel_x, start_y);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&mut self, scene: &Scene<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(scene, viewport, &mut fb);
        fb
    }

    fn paint_world(&mut self, scene: &Scene<'_>, map_px: (u32, u32)) {
        self.canvas.resize(map_px.0, map_px.1);
        self.canvas.clear(Rgb::default());

        let ts = scene.tile_size;
        for row in 0..scene.map.rows() as i32 {
            for col in 0..scene.map.cols() as i32 {
                if let Some(code) = scene.map.get(col, row) {
                    self.canvas
                        .fill_rect(Rect::new(col * ts, row * ts, ts, ts), tile_color(code));
                }
            }
        }

        scene.player.render(&mut self.canvas, ts);
    }

    fn blit_canvas(&self, fb: &mut FrameBuffer, x0: u16, y0: u16, cols: u16, rows: u16, scale: u32) {
        let s = scale as i32;
        let half = s / 2;
        for cy in 0..rows {
            for cx in 0..cols {
                let px = cx as i32 * s + half;
                let top_y = cy as i32 * 2 * s + half;
                let top = self.canvas.get(px, top_y).unwrap_or_default();
                let bottom = self.canvas.get(px, top_y + s).unwrap_or_default();
                fb.set(x0 + cx, y0 + cy, Cell::pixel_pair(top, bottom));
            }
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        scene: &Scene<'_>,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < MIN_PANEL_WIDTH {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let player = scene.player;
        let (x, y) = player.position();
        let mut row = start_y;

        fb.put_str(panel_x, row, "POS", label);
        row += 1;
        fb.put_int(panel_x, row, x as i64, value);
        fb.put_int(panel_x + 6, row, y as i64, value);
        row += 2;

        fb.put_str(panel_x, row, "FACING", label);
        row += 1;
        fb.put_str(panel_x, row, player.direction().as_str(), value);
        row += 2;

        fb.put_str(panel_x, row, "FRAME", label);
        row += 1;
        fb.put_int(panel_x, row, player.frame() as i64, value);
        row += 2;

        fb.put_str(panel_x, row, "STATE", label);
        row += 1;
        let state = match scene.last_move {
            MoveOutcome::Idle => "idle",
            MoveOutcome::Moved => "walking",
            MoveOutcome::Blocked => "blocked",
        };
        fb.put_str(panel_x, row, state, value);
        row += 2;

        fb.put_str(panel_x, row, "SPRITE", label);
        row += 1;
        let sprite = if player.has_sprite() {
            "sheet"
        } else {
            "placeholder"
        };
        fb.put_str(panel_x, row, sprite, value);
        row += 2;

        fb.put_str(panel_x, row, "WASD move", value);
        row += 1;
        fb.put_str(panel_x, row, "q quit", value);
    }
}

/// Display color for a tile code.
pub fn tile_color(code: u8) -> Rgb {
    match code {
        0 => Rgb::new(40, 90, 200),
        1 => Rgb::new(110, 110, 120),
        2 => Rgb::new(70, 160, 70),
        3 => Rgb::new(200, 170, 110),
        _ => Rgb::new(60, 20, 60),
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }
    let put = |fb: &mut FrameBuffer, cx: u16, cy: u16, ch: char| fb.set(cx, cy, Cell { ch, style });

    put(fb, x, y, '┌');
    put(fb, x + w - 1, y, '┐');
    put(fb, x, y + h - 1, '└');
    put(fb, x + w - 1, y + h - 1, '┘');

    for dx in 1..w - 1 {
        put(fb, x + dx, y, '─');
        put(fb, x + dx, y + h - 1, '─');
    }
    for dy in 1..h - 1 {
        put(fb, x, y + dy, '│');
        put(fb, x + w - 1, y + dy, '│');
    }
}
