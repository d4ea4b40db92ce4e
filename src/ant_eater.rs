use crate::world::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Phase of an ant-eater's hunting cycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EaterState {
    #[default]
    Hungry,
    Eating,
    Sleeping,
}

impl fmt::Display for EaterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EaterState::Hungry => "hungry",
            EaterState::Eating => "eating",
            EaterState::Sleeping => "sleeping",
        })
    }
}

/// Predator roaming the grid.
///
/// `countdown` counts ticks left to swallow the current prey while Eating,
/// and ticks left to wake up while Sleeping. It is not used while Hungry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AntEater {
    pub position: Position,
    pub state: EaterState,
    pub countdown: u32,
    pub ants_eaten: u32,
}

impl AntEater {
    /// A hungry ant-eater that has not eaten yet
    pub fn new(position: Position) -> Self {
        Self {
            position,
            state: EaterState::Hungry,
            countdown: 0,
            ants_eaten: 0,
        }
    }
}
