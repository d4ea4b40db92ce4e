//! # Ant Ecosystem
//!
//! Ant colonies foraging on a 2D grid, laying and following pheromone
//! trails, and hunted by ant-eaters, advanced one discrete tick at a time.
//!
//! The kernel is [`simulation::advance`]: it takes a [`Simulation`] and an
//! injected [`RandomSource`] and mutates every entity in a fixed order.
//! [`SimulationStore`] and the binary are thin drivers around it.

pub mod ant;
pub mod ant_eater;
pub mod cli;
pub mod colony;
pub mod config;
pub mod direction;
pub mod error;
pub mod food;
pub mod rng;
pub mod simulation;
pub mod store;
pub mod world;

pub use ant::Ant;
pub use ant_eater::{AntEater, EaterState};
pub use cli::Args;
pub use colony::{Colony, Nest};
pub use config::ScenarioConfig;
pub use direction::{Direction, Heading};
pub use error::{Result, SimError};
pub use food::FoodPile;
pub use rng::RandomSource;
pub use simulation::{Simulation, SimulationEngine, SimulationId, TickReport};
pub use store::SimulationStore;
pub use world::{Grid, Position};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        Ant, AntEater, Args, Colony, EaterState, FoodPile, Grid, Position, RandomSource, Result,
        ScenarioConfig, SimError, Simulation, SimulationEngine, SimulationStore, TickReport,
    };
}
