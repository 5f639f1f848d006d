//! Apple placement and respawn.
//!
//! The apple never spawns inside the snake. Random tries are cheap while the
//! board is sparse; a row-major scan guarantees progress when it is crowded.

use crate::rng::SimpleRng;
use crate::snake::GridSimulation;
use crate::types::{Position, APPLE_RANDOM_TRIES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Apple {
    pos: Position,
}

impl Apple {
    /// Place a new apple against the snake's current occupancy.
    pub fn spawn(sim: &GridSimulation, rng: &mut SimpleRng) -> Self {
        let mut apple = Self {
            pos: Position::default(),
        };
        apple.respawn(sim, rng);
        apple
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    /// Move to a free cell. On a completely full board the position is kept.
    ///
    /// Returns false when no free cell exists.
    pub fn respawn(&mut self, sim: &GridSimulation, rng: &mut SimpleRng) -> bool {
        match find_free_cell(sim, rng) {
            Some(p) => {
                self.pos = p;
                true
            }
            None => false,
        }
    }

    /// Eat the apple if the head is on it: queue one unit of growth (realized
    /// on the next tick) and respawn.
    pub fn try_eat_and_respawn(&mut self, sim: &mut GridSimulation, rng: &mut SimpleRng) -> bool {
        if self.pos != sim.head() {
            return false;
        }
        sim.add_growth(1);
        self.respawn(sim, rng);
        true
    }
}

fn find_free_cell(sim: &GridSimulation, rng: &mut SimpleRng) -> Option<Position> {
    let (w, h) = (sim.grid_w(), sim.grid_h());

    for _ in 0..APPLE_RANDOM_TRIES {
        let p = rng.next_cell(w, h);
        if !sim.occupies(p) {
            return Some(p);
        }
    }

    scan_free_cell(sim)
}

/// First unoccupied cell in row-major order.
fn scan_free_cell(sim: &GridSimulation) -> Option<Position> {
    let (w, h) = (sim.grid_w(), sim.grid_h());
    (0..h)
        .flat_map(|y| (0..w).map(move |x| Position::new(x, y)))
        .find(|&p| !sim.occupies(p))
}
