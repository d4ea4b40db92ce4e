use crate::world::Position;
use thiserror::Error;

/// Errors raised at the edges of the simulation (creation, lookup, config).
///
/// The per-tick rules never fail; a missing effect is a normal outcome.
#[derive(Error, Debug)]
pub enum SimError {
    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Scenario file could not be parsed
    #[error("Invalid scenario: {0}")]
    Config(#[from] toml::de::Error),

    /// Grid too small for anything to move
    #[error("Degenerate grid {width}x{height}: need at least two cells")]
    DegenerateGrid { width: usize, height: usize },

    /// Entity placed outside the grid
    #[error("Position ({}, {}) is outside the {width}x{height} grid", .position.row, .position.col)]
    OutOfBounds {
        position: Position,
        width: usize,
        height: usize,
    },

    #[error("Food pile at ({}, {}) has no food", .0.row, .0.col)]
    EmptyFoodPile(Position),

    #[error("No colony with index {0}")]
    UnknownColony(usize),

    #[error("No simulation with id {0}")]
    UnknownSimulation(u64),
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, SimError>;
