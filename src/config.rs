//! Scenario files: grid size, pacing and the initial entities, in TOML.
//!
//! ```toml
//! width = 20
//! height = 15
//! tick_ms = 100
//!
//! [[colonies]]
//! row = 7
//! col = 10
//! food = 25
//!
//! [[food_piles]]
//! row = 2
//! col = 3
//! amount = 40
//!
//! [[ant_eaters]]
//! row = 12
//! col = 4
//! ```

use crate::error::Result;
use crate::simulation::state::{Simulation, SimulationId};
use crate::world::Position;
use serde::Deserialize;
use std::path::Path;

/// Nest food given to a colony when the scenario does not say
pub const DEFAULT_NEST_FOOD: u32 = 10;

fn default_side() -> usize {
    10
}

fn default_tick_ms() -> u64 {
    100
}

fn default_nest_food() -> u32 {
    DEFAULT_NEST_FOOD
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    #[serde(default = "default_side")]
    pub width: usize,
    #[serde(default = "default_side")]
    pub height: usize,
    /// Pause between ticks when run in real time
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    #[serde(default)]
    pub colonies: Vec<ColonySpec>,
    #[serde(default)]
    pub food_piles: Vec<FoodPileSpec>,
    #[serde(default)]
    pub ant_eaters: Vec<AntEaterSpec>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColonySpec {
    pub row: usize,
    pub col: usize,
    #[serde(default = "default_nest_food")]
    pub food: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FoodPileSpec {
    pub row: usize,
    pub col: usize,
    pub amount: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AntEaterSpec {
    pub row: usize,
    pub col: usize,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            width: default_side(),
            height: default_side(),
            tick_ms: default_tick_ms(),
            colonies: Vec::new(),
            food_piles: Vec::new(),
            ant_eaters: Vec::new(),
        }
    }
}

impl ScenarioConfig {
    /// Load a scenario from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    /// Parse a scenario from a TOML string
    pub fn parse_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Build a fresh simulation with this scenario's entities
    pub fn build(&self, id: SimulationId) -> Result<Simulation> {
        let mut sim = Simulation::new(id, self.width, self.height, self.tick_ms)?;
        for c in &self.colonies {
            sim.add_colony(Position::new(c.row, c.col), c.food)?;
        }
        for f in &self.food_piles {
            sim.add_food_pile(Position::new(f.row, f.col), f.amount)?;
        }
        for e in &self.ant_eaters {
            sim.add_ant_eater(Position::new(e.row, e.col))?;
        }
        Ok(sim)
    }
}
