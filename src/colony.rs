use crate::ant::Ant;
use crate::world::Position;
use serde::{Deserialize, Serialize};

/// Nest food consumed to raise one ant
pub const SPAWN_COST: u32 = 5;
/// Weight of a freshly spawned ant
pub const SPAWN_WEIGHT: u32 = 1;

/// A colony's home cell and its food reserve
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nest {
    pub position: Position,
    pub food: u32,
}

impl Nest {
    /// Spend `amount` food if the reserve covers it
    #[inline]
    pub fn spend(&mut self, amount: u32) -> bool {
        match self.food.checked_sub(amount) {
            Some(rest) => {
                self.food = rest;
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn store(&mut self, amount: u32) {
        self.food = self.food.saturating_add(amount);
    }
}

/// A nest plus the ants living off it
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Colony {
    pub nest: Nest,
    pub ants: Vec<Ant>,
    #[serde(skip)]
    next_ant_id: u32,
}

impl Colony {
    /// New colony with no ants
    pub fn new(position: Position, food: u32) -> Self {
        Self {
            nest: Nest { position, food },
            ants: Vec::new(),
            next_ant_id: 0,
        }
    }

    /// Raise one ant at the nest if the reserve holds [`SPAWN_COST`] food.
    ///
    /// On success the cost is debited and the new ant (weight 1, empty
    /// handed, not yet moved) is appended; otherwise nothing changes.
    pub fn try_spawn(&mut self) -> Option<Ant> {
        if !self.nest.spend(SPAWN_COST) {
            return None;
        }
        let ant = Ant::new(self.next_ant_id, self.nest.position, SPAWN_WEIGHT);
        self.next_ant_id += 1;
        self.ants.push(ant.clone());
        tracing::debug!(
            ant = ant.id,
            nest = %self.nest.position,
            food_left = self.nest.food,
            "ant spawned"
        );
        Some(ant)
    }

    /// Remove and return the first ant standing on `pos`
    pub fn remove_ant_at(&mut self, pos: Position) -> Option<Ant> {
        let idx = self.ants.iter().position(|a| a.position == pos)?;
        Some(self.ants.remove(idx))
    }

    #[inline]
    pub fn has_ant_at(&self, pos: Position) -> bool {
        self.ants.iter().any(|a| a.position == pos)
    }
}
