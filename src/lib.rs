//! TUI Tilequest (workspace facade crate).
//!
//! Re-exports the workspace crates under `tui_tilequest::{core,input,term,types}`
//! and hosts the runtime configuration shared by the binaries.

pub mod config;

pub use tui_tilequest_core as core;
pub use tui_tilequest_input as input;
pub use tui_tilequest_term as term;
pub use tui_tilequest_types as types;

pub use config::{Cli, GameConfig};
