use crate::direction::Heading;
use crate::world::Position;
use serde::{Deserialize, Serialize};

/// Heaviest an ant can get by feeding
pub const MAX_WEIGHT: u32 = 5;

/// A worker ant. Its position is a plain coordinate, not a cell reference.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ant {
    pub id: u32,
    pub position: Position,
    pub weight: u32,
    /// Food units carried back to the nest, if any
    pub carrying: Option<u32>,
    pub last_direction: Heading,
}

impl Ant {
    /// Create a new ant at the given position
    pub fn new(id: u32, position: Position, weight: u32) -> Self {
        Self {
            id,
            position,
            weight: weight.min(MAX_WEIGHT),
            carrying: None,
            last_direction: Heading::STILL,
        }
    }

    #[inline]
    pub fn is_carrying(&self) -> bool {
        self.carrying.is_some()
    }

    /// How much food the ant can still pick up
    #[inline]
    pub fn capacity(&self) -> u32 {
        MAX_WEIGHT.saturating_sub(self.weight)
    }

    /// Move ant to `target`, recording the step as its last direction
    pub fn move_to(&mut self, target: Position) {
        self.last_direction = self.position.heading_to(target);
        self.position = target;
    }

    /// Gain one unit of weight, up to [`MAX_WEIGHT`]
    #[inline]
    pub fn gain_weight(&mut self) {
        self.weight = (self.weight + 1).min(MAX_WEIGHT);
    }

    /// Lose one unit of weight, floored at zero
    #[inline]
    pub fn lose_weight(&mut self) {
        self.weight = self.weight.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ant_creation() {
        let ant = Ant::new(42, Position::new(3, 4), 1);

        assert_eq!(ant.id, 42);
        assert_eq!(ant.position, Position::new(3, 4));
        assert_eq!(ant.weight, 1);
        assert!(!ant.is_carrying());
        assert_eq!(ant.last_direction, Heading::STILL);
    }

    #[test]
    fn test_ant_movement_records_heading() {
        let mut ant = Ant::new(1, Position::new(2, 2), 1);

        ant.move_to(Position::new(2, 3));
        assert_eq!(ant.position, Position::new(2, 3));
        assert_eq!(ant.last_direction, Heading { d_row: 0, d_col: 1 });

        ant.move_to(Position::new(1, 3));
        assert_eq!(ant.last_direction, Heading { d_row: -1, d_col: 0 });
    }

    #[test]
    fn test_weight_bounds() {
        let mut ant = Ant::new(1, Position::new(0, 0), 4);

        ant.gain_weight();
        ant.gain_weight();
        assert_eq!(ant.weight, MAX_WEIGHT);
        assert_eq!(ant.capacity(), 0);

        let mut starving = Ant::new(2, Position::new(0, 0), 0);
        starving.lose_weight();
        assert_eq!(starving.weight, 0);
        assert_eq!(starving.capacity(), MAX_WEIGHT);
    }
}
