//! Game session - the rules layered on top of the raw simulation.
//!
//! [`GridSimulation`] only moves the snake. This module decides what a tick
//! means for the game: self-collision ends it, eating scores, and filling the
//! board wins it. It also exposes the state a bot client sees each tick.

use crate::apple::Apple;
use crate::error::SimulationError;
use crate::rng::SimpleRng;
use crate::snake::GridSimulation;
use crate::types::{
    Direction, Position, BASE_TICK_MS, DEFAULT_GRID_H, DEFAULT_GRID_W, MIN_TICK_MS, TICK_RAMP_MS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub grid_w: i32,
    pub grid_h: i32,
    pub start_dir: Direction,
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_w: DEFAULT_GRID_W,
            grid_h: DEFAULT_GRID_H,
            start_dir: Direction::Right,
            seed: 1,
        }
    }
}

/// What happened during one [`GameSession::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    pub ticked: bool,
    pub ate: bool,
    pub game_over: bool,
    pub you_win: bool,
}

/// Post-tick view handed to the bot bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotView {
    pub grid_w: i32,
    pub grid_h: i32,
    pub head: Position,
    pub apple: Position,
    pub snake_len: i32,
    pub score: i32,
    pub game_over: bool,
    pub you_win: bool,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    sim: GridSimulation,
    apple: Apple,
    rng: SimpleRng,
    score: u32,
    ticks: u64,
    game_over: bool,
    you_win: bool,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Result<Self, SimulationError> {
        let mut rng = SimpleRng::new(config.seed);
        let (sim, apple) = Self::fresh_board(&config, &mut rng)?;
        Ok(Self {
            config,
            sim,
            apple,
            rng,
            score: 0,
            ticks: 0,
            game_over: false,
            you_win: false,
        })
    }

    fn fresh_board(
        config: &GameConfig,
        rng: &mut SimpleRng,
    ) -> Result<(GridSimulation, Apple), SimulationError> {
        let capacity = config.grid_w.saturating_mul(config.grid_h);
        let sim = GridSimulation::new(config.grid_w, config.grid_h, capacity, config.start_dir)?;
        let apple = Apple::spawn(&sim, rng);
        Ok((sim, apple))
    }

    /// Start over on the same board. The RNG stream continues, so a replay of
    /// the same inputs still reproduces every episode.
    pub fn restart(&mut self) -> Result<(), SimulationError> {
        let (sim, apple) = Self::fresh_board(&self.config, &mut self.rng)?;
        self.sim = sim;
        self.apple = apple;
        self.score = 0;
        self.ticks = 0;
        self.game_over = false;
        self.you_win = false;
        Ok(())
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn sim(&self) -> &GridSimulation {
        &self.sim
    }

    pub fn apple(&self) -> Position {
        self.apple.position()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn you_win(&self) -> bool {
        self.you_win
    }

    pub fn is_finished(&self) -> bool {
        self.game_over || self.you_win
    }

    pub fn queue_dir(&mut self, dir: Direction) {
        if !self.is_finished() {
            self.sim.queue_dir(dir);
        }
    }

    /// Tick interval for the current score, clamped at `MIN_TICK_MS`.
    pub fn tick_interval_ms(&self) -> u32 {
        BASE_TICK_MS
            .saturating_sub(self.score.saturating_mul(TICK_RAMP_MS))
            .max(MIN_TICK_MS)
    }

    /// Advance one tick and apply the rules. No-op once the game has ended.
    pub fn tick(&mut self) -> TickOutcome {
        if self.is_finished() {
            return TickOutcome::default();
        }

        self.sim.tick();
        self.ticks += 1;
        let mut outcome = TickOutcome {
            ticked: true,
            ..TickOutcome::default()
        };

        if self.sim.body_occupies(self.sim.head()) {
            self.game_over = true;
            outcome.game_over = true;
            return outcome;
        }

        if self.apple.try_eat_and_respawn(&mut self.sim, &mut self.rng) {
            self.score += 1;
            outcome.ate = true;
        }

        if self.board_full() {
            self.you_win = true;
            outcome.you_win = true;
        }

        outcome
    }

    /// Every cell is (or is about to be) covered by the snake.
    fn board_full(&self) -> bool {
        let area = self.sim.capacity();
        let len = self.sim.len() + self.sim.pending_growth() as usize;
        len >= area || self.sim.occupies(self.apple.position())
    }

    pub fn bot_view(&self) -> BotView {
        BotView {
            grid_w: self.sim.grid_w(),
            grid_h: self.sim.grid_h(),
            head: self.sim.head(),
            apple: self.apple.position(),
            snake_len: self.sim.len() as i32,
            score: self.score as i32,
            game_over: self.game_over,
            you_win: self.you_win,
        }
    }
}
