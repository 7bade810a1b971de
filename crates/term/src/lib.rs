//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It avoids
//! widget/layout libraries and renders into a framebuffer that is flushed to
//! the terminal with diffed redraws.
//!
//! Pipeline:
//! - entities draw in world pixels onto a [`PixelCanvas`] (the `Surface` impl)
//! - [`GameView`] samples the canvas into half-block cells (2 pixels per cell)
//! - [`TerminalRenderer`] writes only the cells that changed

pub mod canvas;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_tilequest_core as core;
pub use tui_tilequest_types as types;

pub use canvas::PixelCanvas;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb, UPPER_HALF_BLOCK};
pub use game_view::{tile_color, GameView, Scene, Viewport, DEFAULT_PIXELS_PER_COLUMN};
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, TerminalRenderer};
