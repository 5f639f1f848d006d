//! TUI Snake (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so the binary, integration
//! tests and benches can write `tui_snake::{core,adapter,term,input,types}`.

pub use tui_snake_adapter as adapter;
pub use tui_snake_core as core;
pub use tui_snake_input as input;
pub use tui_snake_term as term;
pub use tui_snake_types as types;
