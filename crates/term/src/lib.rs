//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It renders into a
//! plain framebuffer that is diffed and flushed to the terminal, with no widget
//! or layout library in between.
//!
//! Only the post-tick pose is drawn; `previous_segments` interpolation is left
//! to graphical front-ends.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{BotStatusView, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
