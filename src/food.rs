use crate::world::Position;
use serde::{Deserialize, Serialize};

/// A depletable food source at a fixed cell
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodPile {
    pub position: Position,
    pub amount: u32,
}

impl FoodPile {
    pub fn new(position: Position, amount: u32) -> Self {
        Self { position, amount }
    }

    /// Take up to `wanted` units, returning how much was actually taken
    pub fn take(&mut self, wanted: u32) -> u32 {
        let taken = wanted.min(self.amount);
        self.amount -= taken;
        taken
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.amount == 0
    }
}

/// Take up to `wanted` units from the pile at `pos`, dropping the pile once
/// it is exhausted. Returns `None` when no pile sits at `pos`.
pub fn take_food_at(piles: &mut Vec<FoodPile>, pos: Position, wanted: u32) -> Option<u32> {
    let idx = piles.iter().position(|p| p.position == pos)?;
    let taken = piles[idx].take(wanted);
    if piles[idx].is_empty() {
        piles.remove(idx);
    }
    Some(taken)
}
