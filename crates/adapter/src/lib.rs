//! Adapter module - external bot control over a local TCP socket
//!
//! This module lets an external controller (for example a solver script) play
//! the game. It is strictly optional: when disabled, or when anything goes
//! wrong on the socket, the game keeps running exactly as it would without it.
//!
//! # Protocol Overview
//!
//! The bridge speaks a **fixed-size binary protocol** over TCP on loopback:
//!
//! 1. **Connection**: Client connects to `127.0.0.1:<port>` (default 5555)
//! 2. **State stream**: After every simulation tick the server writes one
//!    40-byte [`BotStateMessage`] (big-endian, magic `SNKB`)
//! 3. **Commands**: The client may write single bytes at any time,
//!    `0`=up `1`=down `2`=left `3`=right; anything else is ignored
//!
//! There is no handshake and no acknowledgment. One client is served at a time;
//! a second client waits in the listen backlog until the first disconnects.
//!
//! # Environment Variables
//!
//! - `SNAKE_BOT`: Set to "1" or "true" to enable the bridge
//! - `SNAKE_BOT_PORT`: Port number (default: 5555)
//! - `SNAKE_BOT_LOG_PATH`: Append every sent state as a JSON line
//!
//! # Implementation
//!
//! - Plain `std::net` sockets in non-blocking mode, polled from the game loop
//!   (no threads, no runtime)
//! - Connection state is an explicit enum; sockets close when dropped
//! - Sends are best effort and never retried: the next tick supersedes them
//!
//! # Testing
//!
//! ```bash
//! SNAKE_BOT=1 cargo run &
//! nc 127.0.0.1 5555 | xxd
//! ```

pub mod bridge;
pub mod config;
pub mod protocol;
pub mod wire_log;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use bridge::{BotBridge, BridgeState, MAX_DIRS_PER_FRAME};
pub use config::BridgeConfig;
pub use protocol::{BotStateMessage, DecodeError, BOT_STATE_MSG_LEN, FLAG_GAME_OVER, FLAG_YOU_WIN};
pub use wire_log::WireLog;
