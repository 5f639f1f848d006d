//! Two-slot buffer of pending turns.
//!
//! Key presses (and bot commands) arrive on frames while the snake advances on
//! ticks. Buffering up to two turns keeps quick sequences like "up, then left"
//! that land between two ticks. When full, a new request replaces the second
//! slot; the first queued turn is never lost.

use arrayvec::ArrayVec;

use crate::types::Direction;

pub const TURN_QUEUE_CAPACITY: usize = 2;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TurnQueue {
    slots: ArrayVec<Direction, TURN_QUEUE_CAPACITY>,
}

impl TurnQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Most recently queued turn.
    pub fn last(&self) -> Option<Direction> {
        self.slots.last().copied()
    }

    pub fn as_slice(&self) -> &[Direction] {
        &self.slots
    }

    /// Append `dir`, overwriting the newest entry when full.
    pub fn push(&mut self, dir: Direction) {
        if let Err(err) = self.slots.try_push(dir) {
            if let Some(newest) = self.slots.last_mut() {
                *newest = err.element();
            }
        }
    }

    /// Remove the oldest entry; the remaining one shifts to the front.
    pub fn pop(&mut self) -> Option<Direction> {
        if self.slots.is_empty() {
            None
        } else {
            Some(self.slots.remove(0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_pop_fifo() {
        let mut q = TurnQueue::new();
        q.push(Direction::Up);
        q.push(Direction::Left);
        assert_eq!(q.as_slice(), &[Direction::Up, Direction::Left]);
        assert_eq!(q.pop(), Some(Direction::Up));
        assert_eq!(q.as_slice(), &[Direction::Left]);
        assert_eq!(q.pop(), Some(Direction::Left));
        assert_eq!(q.pop(), None);
        assert!(q.is_empty());
    }

    #[test]
    fn full_queue_overwrites_second_slot() {
        let mut q = TurnQueue::new();
        q.push(Direction::Up);
        q.push(Direction::Left);
        q.push(Direction::Down);
        assert_eq!(q.len(), 2);
        assert_eq!(q.as_slice(), &[Direction::Up, Direction::Down]);
        assert_eq!(q.last(), Some(Direction::Down));
    }
}
