pub mod ant_behavior;
pub mod eater_behavior;
pub mod engine;
pub mod state;

pub use engine::{advance, SimulationEngine, TickReport};
pub use state::{Simulation, SimulationId, SimulationSnapshot};
