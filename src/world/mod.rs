pub mod grid;
pub mod position;

pub use grid::{Grid, Neighbors, PheromoneCell, MAX_PHEROMONE};
pub use position::Position;
