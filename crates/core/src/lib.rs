//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the snake simulation, apple placement and the game
//! rules. It has **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: Same seed and same inputs produce identical games (replays)
//! - **Testable**: Every tick is a plain method call
//! - **Portable**: Runs headless, in the terminal, or behind the bot bridge
//! - **Allocation-free ticks**: Segment storage is reserved once at construction
//!
//! # Module Structure
//!
//! - [`snake`]: [`GridSimulation`], the authoritative snake state and tick
//! - [`turn_queue`]: two-slot buffer of pending turns
//! - [`apple`]: apple placement that never lands inside the snake
//! - [`rng`]: seedable LCG used for placement
//! - [`game`]: [`GameSession`], collision/score/win rules and the bot view
//! - [`error`]: construction errors
//!
//! # Tick Order
//!
//! 1. Snapshot the pose into `previous_segments` (interpolation baseline)
//! 2. Apply at most one buffered turn
//! 3. Shift the body toward the tail
//! 4. Step the head one cell, wrapping on each axis
//! 5. Realize one unit of pending growth at the pre-shift tail cell
//!
//! # Example
//!
//! ```
//! use tui_snake_core::GridSimulation;
//! use tui_snake_types::{Direction, Position};
//!
//! let mut sim = GridSimulation::new(5, 5, 25, Direction::Right).unwrap();
//! sim.queue_dir(Direction::Up);
//! sim.queue_dir(Direction::Left);
//!
//! sim.tick();
//! assert_eq!(sim.head(), Position::new(2, 1));
//! sim.tick();
//! assert_eq!(sim.head(), Position::new(1, 1));
//! ```

pub mod apple;
pub mod error;
pub mod game;
pub mod rng;
pub mod snake;
pub mod turn_queue;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use apple::Apple;
pub use error::SimulationError;
pub use game::{BotView, GameConfig, GameSession, TickOutcome};
pub use rng::SimpleRng;
pub use snake::GridSimulation;
pub use turn_queue::{TurnQueue, TURN_QUEUE_CAPACITY};
