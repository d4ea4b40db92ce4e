//! Per-tick rules for a single ant.
//!
//! An ant's state is implicit: resting in the nest, leaving it, foraging
//! empty handed, or carrying food home. The rules run in a fixed order each
//! tick (deliver, then nest or field behavior), starting from where the ant
//! ended the previous tick.

use crate::ant::{Ant, MAX_WEIGHT};
use crate::colony::Nest;
use crate::food::{take_food_at, FoodPile};
use crate::rng::RandomSource;
use crate::world::{Grid, Neighbors, Position};
use tracing::debug;

/// Weight at which a resting ant always leaves the nest
pub const DEPART_WEIGHT: u32 = 3;
/// Chance that a lighter ant leaves the nest anyway
pub const WANDER_OFF_CHANCE: f64 = 0.1;
/// Chance per tick in the nest of burning one unit of weight
pub const ENERGY_LOSS_CHANCE: f64 = 0.02;
/// Chance that a loaded ant follows the strongest trail instead of heading straight home
pub const TRAIL_FOLLOW_CHANCE: f64 = 0.8;
/// Pheromone laid on each cell a loaded ant steps onto
pub const TRAIL_DEPOSIT: f32 = 20.0;

/// What an ant did to the food economy this tick
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AntOutcome {
    pub delivered: u32,
    pub picked_up: u32,
}

/// Advance one ant by one tick
pub fn step_ant<R: RandomSource>(
    ant: &mut Ant,
    nest: &mut Nest,
    grid: &mut Grid,
    food_piles: &mut Vec<FoodPile>,
    rng: &mut R,
) -> AntOutcome {
    let mut outcome = AntOutcome::default();

    if ant.position == nest.position {
        // ants in the nest wear its scent down; nothing else decays
        grid.decay_at(nest.position);

        if let Some(load) = ant.carrying.take() {
            nest.store(load);
            outcome.delivered = load;
            debug!(ant = ant.id, load, nest_food = nest.food, "food delivered");
        }
        rest_in_nest(ant, nest, grid, rng);
    } else {
        outcome.picked_up = roam(ant, nest.position, grid, food_piles, rng);
    }

    outcome
}

fn rest_in_nest<R: RandomSource>(ant: &mut Ant, nest: &mut Nest, grid: &Grid, rng: &mut R) {
    if !ant.is_carrying() && ant.weight < MAX_WEIGHT && nest.food > 0 && nest.spend(1) {
        ant.gain_weight();
    }

    if !ant.is_carrying() && (ant.weight >= DEPART_WEIGHT || rng.chance(WANDER_OFF_CHANCE)) {
        let neighbors = grid.neighbors(ant.position);
        let target = faintest_trail(grid, &neighbors).or_else(|| rng.pick(neighbors.as_slice()));
        if let Some(target) = target {
            ant.move_to(target);
        }
    }

    if rng.chance(ENERGY_LOSS_CHANCE) {
        ant.lose_weight();
    }
}

/// Field behavior; returns the amount of food picked up
fn roam<R: RandomSource>(
    ant: &mut Ant,
    home: Position,
    grid: &mut Grid,
    food_piles: &mut Vec<FoodPile>,
    rng: &mut R,
) -> u32 {
    let here = ant.position;
    let mut picked_up = 0;

    // a full ant still shoulders an empty load and heads home marking the way
    if !ant.is_carrying() {
        if let Some(taken) = take_food_at(food_piles, here, ant.capacity()) {
            ant.carrying = Some(taken);
            picked_up = taken;
            debug!(ant = ant.id, taken, at = %here, "food picked up");
        }
    }

    let neighbors = grid.neighbors(here);
    if ant.is_carrying() {
        let target = match strongest_trail(grid, &neighbors) {
            Some(trail) if rng.chance(TRAIL_FOLLOW_CHANCE) => Some(trail),
            _ => neighbors.iter().min_by_key(|p| p.manhattan(home)),
        };
        if let Some(target) = target {
            ant.move_to(target);
            grid.deposit(target, TRAIL_DEPOSIT);
        }
    } else {
        let scented = neighbors.filtered(|p| grid.pheromone(p) > 0.0);
        let target = rng
            .pick(scented.as_slice())
            .or_else(|| rng.pick(neighbors.as_slice()));
        if let Some(target) = target {
            ant.move_to(target);
        }
    }

    picked_up
}

/// Neighbor with the highest positive pheromone; ties go to the first
fn strongest_trail(grid: &Grid, neighbors: &Neighbors) -> Option<Position> {
    pick_trail(grid, neighbors, |candidate, best| candidate > best)
}

/// Neighbor with the lowest positive pheromone; ties go to the first
fn faintest_trail(grid: &Grid, neighbors: &Neighbors) -> Option<Position> {
    pick_trail(grid, neighbors, |candidate, best| candidate < best)
}

fn pick_trail(
    grid: &Grid,
    neighbors: &Neighbors,
    better: impl Fn(f32, f32) -> bool,
) -> Option<Position> {
    let mut best: Option<(Position, f32)> = None;
    for pos in neighbors.iter() {
        let value = grid.pheromone(pos);
        if value <= 0.0 {
            continue;
        }
        match best {
            Some((_, current)) if !better(value, current) => {}
            _ => best = Some((pos, value)),
        }
    }
    best.map(|(pos, _)| pos)
}
