//! Construction errors for the simulation.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    #[error("grid dimensions must be positive, got {grid_w}x{grid_h}")]
    InvalidDimensions { grid_w: i32, grid_h: i32 },

    #[error("snake capacity must be positive, got {0}")]
    InvalidCapacity(i32),

    #[error("could not allocate segment storage for {0} segments")]
    Allocation(usize),
}
