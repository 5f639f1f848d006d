//! Snake simulation on a wrapping grid.
//!
//! [`GridSimulation`] owns the authoritative snake: segment positions (head
//! first), the direction applied on the next tick, a growth counter and a
//! two-slot turn buffer. It never checks for self-collision; that rule lives in
//! [`crate::game::GameSession`].

use crate::error::SimulationError;
use crate::turn_queue::TurnQueue;
use crate::types::{Direction, Position};

#[derive(Debug, Clone)]
pub struct GridSimulation {
    grid_w: i32,
    grid_h: i32,
    capacity: usize,
    /// Active segments, head at index 0. `len() <= capacity`.
    segments: Vec<Position>,
    /// Pose at the start of the most recent tick, index-aligned with `segments`.
    previous: Vec<Position>,
    pending_growth: u32,
    direction: Direction,
    turns: TurnQueue,
}

impl GridSimulation {
    /// Create a length-1 snake centered on a `grid_w` x `grid_h` board.
    ///
    /// Both segment buffers are reserved up front for `capacity` segments, so
    /// growth never reallocates. Nothing is returned on failure.
    pub fn new(
        grid_w: i32,
        grid_h: i32,
        capacity: i32,
        start_dir: Direction,
    ) -> Result<Self, SimulationError> {
        if grid_w <= 0 || grid_h <= 0 {
            return Err(SimulationError::InvalidDimensions { grid_w, grid_h });
        }
        if capacity <= 0 {
            return Err(SimulationError::InvalidCapacity(capacity));
        }
        let capacity = capacity as usize;

        let mut segments = Vec::new();
        segments
            .try_reserve_exact(capacity)
            .map_err(|_| SimulationError::Allocation(capacity))?;
        let mut previous = Vec::new();
        previous
            .try_reserve_exact(capacity)
            .map_err(|_| SimulationError::Allocation(capacity))?;

        let head = Position::new(grid_w / 2, grid_h / 2);
        segments.push(head);
        previous.push(head);

        Ok(Self {
            grid_w,
            grid_h,
            capacity,
            segments,
            previous,
            pending_growth: 0,
            direction: start_dir,
            turns: TurnQueue::new(),
        })
    }

    /// Release the segment storage.
    pub fn destroy(self) {}

    pub fn grid_w(&self) -> i32 {
        self.grid_w
    }

    pub fn grid_h(&self) -> i32 {
        self.grid_h
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn head(&self) -> Position {
        self.segments[0]
    }

    pub fn segments(&self) -> &[Position] {
        &self.segments
    }

    /// Interpolation baseline for renderers that animate between ticks.
    pub fn previous_segments(&self) -> &[Position] {
        &self.previous
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_growth(&self) -> u32 {
        self.pending_growth
    }

    pub fn queued_turns(&self) -> &[Direction] {
        self.turns.as_slice()
    }

    pub fn occupies(&self, p: Position) -> bool {
        self.segments.contains(&p)
    }

    /// Like [`Self::occupies`] but ignores the head; used for self-collision.
    pub fn body_occupies(&self, p: Position) -> bool {
        self.segments[1..].contains(&p)
    }

    pub fn add_growth(&mut self, n: i32) {
        if n > 0 {
            self.pending_growth = self.pending_growth.saturating_add(n as u32);
        }
    }

    /// Buffer a turn for an upcoming tick.
    ///
    /// The request is compared with the last buffered turn (or the current
    /// direction when nothing is buffered). Reversals and repeats are dropped.
    pub fn queue_dir(&mut self, dir: Direction) {
        let last = self.turns.last().unwrap_or(self.direction);
        if dir == last || dir.is_opposite(last) {
            return;
        }
        self.turns.push(dir);
    }

    /// Advance one step.
    ///
    /// Order: snapshot the pose, apply at most one buffered turn, shift the
    /// body toward the tail, step the head with wrap, then realize one unit of
    /// growth at the pre-shift tail cell.
    pub fn tick(&mut self) {
        self.previous.copy_from_slice(&self.segments);

        if let Some(dir) = self.turns.pop() {
            self.direction = dir;
        }

        let len = self.segments.len();
        let old_tail = self.segments[len - 1];
        self.segments.copy_within(0..len - 1, 1);

        self.segments[0] = self.segments[0]
            .step(self.direction)
            .wrapped(self.grid_w, self.grid_h);

        if self.pending_growth > 0 && len < self.capacity {
            self.segments.push(old_tail);
            // A fresh segment starts where it is, not from stale data.
            self.previous.push(old_tail);
            self.pending_growth -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sim(w: i32, h: i32, dir: Direction) -> GridSimulation {
        GridSimulation::new(w, h, w * h, dir).unwrap()
    }

    #[test]
    fn init_rejects_non_positive_inputs() {
        assert_eq!(
            GridSimulation::new(0, 5, 10, Direction::Up).unwrap_err(),
            SimulationError::InvalidDimensions { grid_w: 0, grid_h: 5 }
        );
        assert!(GridSimulation::new(5, -1, 10, Direction::Up).is_err());
        assert_eq!(
            GridSimulation::new(5, 5, 0, Direction::Up).unwrap_err(),
            SimulationError::InvalidCapacity(0)
        );
    }

    #[test]
    fn init_centers_head() {
        let s = sim(7, 4, Direction::Right);
        assert_eq!(s.len(), 1);
        assert_eq!(s.head(), Position::new(3, 2));
        assert_eq!(s.previous_segments(), &[Position::new(3, 2)]);
        assert!(s.queued_turns().is_empty());
        assert_eq!(s.pending_growth(), 0);
        assert_eq!(s.direction(), Direction::Right);
    }

    #[test]
    fn queue_drops_reversal_and_repeat() {
        let mut s = sim(5, 5, Direction::Right);
        s.queue_dir(Direction::Left);
        s.queue_dir(Direction::Right);
        assert!(s.queued_turns().is_empty());

        s.queue_dir(Direction::Up);
        // Compared against the queued Up now, not the current Right.
        s.queue_dir(Direction::Down);
        s.queue_dir(Direction::Up);
        assert_eq!(s.queued_turns(), &[Direction::Up]);
    }

    #[test]
    fn third_turn_replaces_second() {
        let mut s = sim(5, 5, Direction::Right);
        s.queue_dir(Direction::Up);
        s.queue_dir(Direction::Left);
        s.queue_dir(Direction::Down);
        assert_eq!(s.queued_turns(), &[Direction::Up, Direction::Down]);
    }

    #[test]
    fn add_growth_ignores_non_positive() {
        let mut s = sim(5, 5, Direction::Right);
        s.add_growth(0);
        s.add_growth(-3);
        assert_eq!(s.pending_growth(), 0);
        s.add_growth(2);
        assert_eq!(s.pending_growth(), 2);
    }

    #[test]
    fn tick_wraps_right_edge() {
        let mut s = sim(10, 3, Direction::Right);
        for _ in 0..4 {
            s.tick();
        }
        assert_eq!(s.head(), Position::new(9, 1));
        s.tick();
        assert_eq!(s.head(), Position::new(0, 1));
    }

    #[test]
    fn growth_appends_pre_shift_tail() {
        let mut s = sim(10, 10, Direction::Right);
        s.add_growth(1);
        let tail_before = *s.segments().last().unwrap();
        s.tick();
        assert_eq!(s.len(), 2);
        assert_eq!(s.segments()[1], tail_before);
        assert_eq!(s.previous_segments()[1], tail_before);
        assert_eq!(s.pending_growth(), 0);
    }

    #[test]
    fn growth_stops_at_capacity() {
        let mut s = GridSimulation::new(10, 10, 2, Direction::Right).unwrap();
        s.add_growth(5);
        s.tick();
        s.tick();
        s.tick();
        assert_eq!(s.len(), 2);
        assert_eq!(s.pending_growth(), 4);
    }

    #[test]
    fn previous_segments_hold_pre_tick_pose() {
        let mut s = sim(10, 10, Direction::Right);
        s.add_growth(2);
        s.tick();
        s.tick();
        let before = s.segments().to_vec();
        s.tick();
        assert_eq!(s.previous_segments(), before.as_slice());
    }

    #[test]
    fn body_occupies_excludes_head() {
        let mut s = sim(10, 10, Direction::Right);
        s.add_growth(1);
        s.tick();
        assert!(!s.body_occupies(s.head()));
        assert!(s.occupies(s.head()));
        assert!(s.body_occupies(s.segments()[1]));
    }
}
