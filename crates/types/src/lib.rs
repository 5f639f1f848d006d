//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no behavior beyond small pure helpers, making
//! them usable in any context (simulation, terminal rendering, bot protocol).
//!
//! # Grid
//!
//! The board is a wrap-around (toroidal) grid. Positions are signed so that a
//! step off any edge can be represented before it is wrapped back in.
//!
//! - **Width**: 20 columns by default (indexed 0-19)
//! - **Height**: 15 rows by default (indexed 0-14)
//! - **Start**: head at `(w / 2, h / 2)`, length 1
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_TICK_MS` | 140 | Tick interval at score 0 |
//! | `TICK_RAMP_MS` | 3 | Interval reduction per point scored |
//! | `MIN_TICK_MS` | 60 | Fastest tick interval |
//! | `FRAME_MS` | 16 | Render/poll cadence (~60 FPS) |
//!
//! # Bot Bridge
//!
//! | Constant | Value |
//! |----------|-------|
//! | `BOT_DEFAULT_PORT` | 5555 |
//! | `BOT_MAGIC` | `0x534E4B42` ("SNKB") |
//! | `BOT_PROTOCOL_VERSION` | 1 |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, Position};
//!
//! assert!(Direction::Up.is_opposite(Direction::Down));
//! assert!(!Direction::Up.is_opposite(Direction::Left));
//!
//! let p = Position::new(9, 0).step(Direction::Right);
//! assert_eq!(p, Position::new(10, 0));
//! assert_eq!(p.wrapped(10, 5), Position::new(0, 0));
//!
//! assert_eq!(Direction::from_wire(3), Some(Direction::Right));
//! assert_eq!(Direction::from_wire(7), None);
//! ```

/// Default board width in cells.
pub const DEFAULT_GRID_W: i32 = 20;

/// Default board height in cells.
pub const DEFAULT_GRID_H: i32 = 15;

/// Tick interval at score 0.
pub const BASE_TICK_MS: u32 = 140;

/// Tick interval reduction per point of score.
pub const TICK_RAMP_MS: u32 = 3;

/// Fastest allowed tick interval.
pub const MIN_TICK_MS: u32 = 60;

/// Frame cadence for rendering and bridge polling.
pub const FRAME_MS: u32 = 16;

/// Default loopback port for the bot bridge.
pub const BOT_DEFAULT_PORT: u16 = 5555;

/// Magic prefix of every state message ("SNKB").
pub const BOT_MAGIC: u32 = 0x534E_4B42;

/// Wire protocol version.
pub const BOT_PROTOCOL_VERSION: u16 = 1;

/// Number of random placement attempts before the apple falls back to a scan.
pub const APPLE_RANDOM_TRIES: u32 = 1024;

/// Movement direction of the snake head.
///
/// The discriminants are the wire encoding of a bot command byte:
/// 0=Up, 1=Down, 2=Left, 3=Right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

impl Direction {
    /// True for the Up/Down and Left/Right pairs.
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Decode a bot command byte. Values outside 0..=3 are rejected.
    pub fn from_wire(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(Direction::Up),
            1 => Some(Direction::Down),
            2 => Some(Direction::Left),
            3 => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn to_wire(self) -> u8 {
        self as u8
    }

    /// Cell delta for one step. Screen coordinates: y grows downward.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Grid coordinate. No inherent bounds; see [`Position::wrapped`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// One cell in `dir`, without wrapping.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Wrap each axis independently into `[0, w)` and `[0, h)`.
    ///
    /// Modular, not reflective: leaving one edge re-enters on the opposite edge.
    pub fn wrapped(self, w: i32, h: i32) -> Self {
        Self {
            x: self.x.rem_euclid(w),
            y: self.y.rem_euclid(h),
        }
    }
}

/// Actions the terminal front-end can request from the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Turn(Direction),
    Restart,
}
