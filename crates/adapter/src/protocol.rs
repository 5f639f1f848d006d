//! Binary bot protocol.
//!
//! Server to client: one fixed-size [`BotStateMessage`] per simulation tick,
//! every multi-byte field big-endian, in this order:
//!
//! | offset | field | type |
//! |---|---|---|
//! | 0 | magic (`0x534E4B42`) | u32 |
//! | 4 | version | u16 |
//! | 6 | flags (bit0 game over, bit1 win) | u16 |
//! | 8 | grid_w | i32 |
//! | 12 | grid_h | i32 |
//! | 16 | head_x | i32 |
//! | 20 | head_y | i32 |
//! | 24 | apple_x | i32 |
//! | 28 | apple_y | i32 |
//! | 32 | snake_len | i32 |
//! | 36 | score | i32 |
//!
//! Client to server: a single byte at any time, 0=up 1=down 2=left 3=right.
//! Framing is purely size-based; there is no handshake and no ack.

use serde::Serialize;
use thiserror::Error;

use crate::core::BotView;
use crate::types::{Position, BOT_MAGIC, BOT_PROTOCOL_VERSION};

/// Encoded size of a [`BotStateMessage`].
pub const BOT_STATE_MSG_LEN: usize = 40;

pub const FLAG_GAME_OVER: u16 = 1 << 0;
pub const FLAG_YOU_WIN: u16 = 1 << 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BotStateMessage {
    pub magic: u32,
    pub version: u16,
    pub flags: u16,
    pub grid_w: i32,
    pub grid_h: i32,
    pub head_x: i32,
    pub head_y: i32,
    pub apple_x: i32,
    pub apple_y: i32,
    pub snake_len: i32,
    pub score: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("expected 40 bytes, got {0}")]
    Length(usize),
    #[error("bad magic {0:#010x}")]
    Magic(u32),
}

impl BotStateMessage {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        grid_w: i32,
        grid_h: i32,
        head: Position,
        apple: Position,
        snake_len: i32,
        score: i32,
        game_over: bool,
        you_win: bool,
    ) -> Self {
        let mut flags = 0;
        if game_over {
            flags |= FLAG_GAME_OVER;
        }
        if you_win {
            flags |= FLAG_YOU_WIN;
        }
        Self {
            magic: BOT_MAGIC,
            version: BOT_PROTOCOL_VERSION,
            flags,
            grid_w,
            grid_h,
            head_x: head.x,
            head_y: head.y,
            apple_x: apple.x,
            apple_y: apple.y,
            snake_len,
            score,
        }
    }

    pub fn game_over(&self) -> bool {
        self.flags & FLAG_GAME_OVER != 0
    }

    pub fn you_win(&self) -> bool {
        self.flags & FLAG_YOU_WIN != 0
    }

    pub fn head(&self) -> Position {
        Position::new(self.head_x, self.head_y)
    }

    pub fn apple(&self) -> Position {
        Position::new(self.apple_x, self.apple_y)
    }

    /// Big-endian wire encoding (no heap).
    pub fn encode(&self) -> [u8; BOT_STATE_MSG_LEN] {
        let mut out = [0u8; BOT_STATE_MSG_LEN];
        out[0..4].copy_from_slice(&self.magic.to_be_bytes());
        out[4..6].copy_from_slice(&self.version.to_be_bytes());
        out[6..8].copy_from_slice(&self.flags.to_be_bytes());
        let fields = [
            self.grid_w,
            self.grid_h,
            self.head_x,
            self.head_y,
            self.apple_x,
            self.apple_y,
            self.snake_len,
            self.score,
        ];
        for (i, v) in fields.iter().enumerate() {
            let at = 8 + i * 4;
            out[at..at + 4].copy_from_slice(&v.to_be_bytes());
        }
        out
    }

    /// Parse one record. Used by clients and tests; the server never reads these.
    pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        let bytes: &[u8; BOT_STATE_MSG_LEN] = bytes
            .try_into()
            .map_err(|_| DecodeError::Length(bytes.len()))?;

        let u32_at = |at: usize| {
            u32::from_be_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
        };
        let u16_at = |at: usize| u16::from_be_bytes([bytes[at], bytes[at + 1]]);
        let i32_at = |at: usize| u32_at(at) as i32;

        let magic = u32_at(0);
        if magic != BOT_MAGIC {
            return Err(DecodeError::Magic(magic));
        }

        Ok(Self {
            magic,
            version: u16_at(4),
            flags: u16_at(6),
            grid_w: i32_at(8),
            grid_h: i32_at(12),
            head_x: i32_at(16),
            head_y: i32_at(20),
            apple_x: i32_at(24),
            apple_y: i32_at(28),
            snake_len: i32_at(32),
            score: i32_at(36),
        })
    }
}

impl From<&BotView> for BotStateMessage {
    fn from(v: &BotView) -> Self {
        Self::new(
            v.grid_w,
            v.grid_h,
            v.head,
            v.apple,
            v.snake_len,
            v.score,
            v.game_over,
            v.you_win,
        )
    }
}
