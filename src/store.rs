//! In-process registry of simulations, owned by whatever drives them.
//!
//! Simulations share no state, so the store advances them in parallel, one
//! rayon task per simulation, each with its own seeded generator.

use crate::error::{Result, SimError};
use crate::simulation::engine::TickReport;
use crate::simulation::state::{Simulation, SimulationId};
use rayon::prelude::*;
use std::collections::BTreeMap;
use tracing::info;

struct Slot {
    simulation: Simulation,
    rng: fastrand::Rng,
}

/// Simulations keyed by id; ids are handed out sequentially from 0
pub struct SimulationStore {
    seed: u64,
    next_id: SimulationId,
    slots: BTreeMap<SimulationId, Slot>,
}

impl Default for SimulationStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-simulation seed so replicas of one scenario diverge
#[inline]
fn slot_seed(seed: u64, id: SimulationId) -> u64 {
    seed ^ id.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

impl SimulationStore {
    /// Store with a random base seed
    pub fn new() -> Self {
        Self::with_seed(fastrand::u64(..))
    }

    /// Store whose simulations replay identically for the same `seed`
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            next_id: 0,
            slots: BTreeMap::new(),
        }
    }

    /// Create an empty simulation and return its id
    pub fn create(&mut self, width: usize, height: usize, tick_ms: u64) -> Result<SimulationId> {
        self.create_with(|id| Simulation::new(id, width, height, tick_ms))
    }

    /// Create a simulation with `build`, which receives the id to use.
    /// Ids are only consumed when `build` succeeds.
    pub fn create_with<F>(&mut self, build: F) -> Result<SimulationId>
    where
        F: FnOnce(SimulationId) -> Result<Simulation>,
    {
        let id = self.next_id;
        let simulation = build(id)?;
        self.next_id += 1;
        info!(
            id,
            width = simulation.width(),
            height = simulation.height(),
            "simulation created"
        );
        self.slots.insert(
            id,
            Slot {
                simulation,
                rng: fastrand::Rng::with_seed(slot_seed(self.seed, id)),
            },
        );
        Ok(id)
    }

    pub fn get(&self, id: SimulationId) -> Result<&Simulation> {
        self.slots
            .get(&id)
            .map(|s| &s.simulation)
            .ok_or(SimError::UnknownSimulation(id))
    }

    pub fn get_mut(&mut self, id: SimulationId) -> Result<&mut Simulation> {
        self.slots
            .get_mut(&id)
            .map(|s| &mut s.simulation)
            .ok_or(SimError::UnknownSimulation(id))
    }

    /// Delete a simulation, handing it back to the caller
    pub fn remove(&mut self, id: SimulationId) -> Result<Simulation> {
        let slot = self
            .slots
            .remove(&id)
            .ok_or(SimError::UnknownSimulation(id))?;
        info!(id, ticks = slot.simulation.tick(), "simulation removed");
        Ok(slot.simulation)
    }

    /// Ids in ascending order
    pub fn ids(&self) -> Vec<SimulationId> {
        self.slots.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Advance a single simulation by one tick
    pub fn advance(&mut self, id: SimulationId) -> Result<TickReport> {
        let slot = self
            .slots
            .get_mut(&id)
            .ok_or(SimError::UnknownSimulation(id))?;
        Ok(slot.simulation.advance(&mut slot.rng))
    }

    /// Advance every simulation by one tick in parallel; reports come back
    /// sorted by id
    pub fn advance_all(&mut self) -> Vec<(SimulationId, TickReport)> {
        let mut reports: Vec<_> = self
            .slots
            .par_iter_mut()
            .map(|(&id, slot)| (id, slot.simulation.advance(&mut slot.rng)))
            .collect();
        reports.sort_unstable_by_key(|(id, _)| *id);
        reports
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Position;

    #[test]
    fn test_create_get_remove() {
        let mut store = SimulationStore::with_seed(1);

        let a = store.create(10, 10, 100).unwrap();
        let b = store.create(5, 8, 50).unwrap();
        assert_eq!((a, b), (0, 1));
        assert_eq!(store.ids(), vec![0, 1]);
        assert_eq!(store.get(b).unwrap().height(), 8);

        let removed = store.remove(a).unwrap();
        assert_eq!(removed.id(), a);
        assert!(matches!(store.get(a), Err(SimError::UnknownSimulation(0))));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_failed_create_keeps_ids_dense() {
        let mut store = SimulationStore::with_seed(1);

        assert!(store.create(1, 1, 100).is_err());
        assert_eq!(store.create(3, 3, 100).unwrap(), 0);
    }

    #[test]
    fn test_advance_all_touches_every_simulation() {
        let mut store = SimulationStore::with_seed(3);
        for _ in 0..4 {
            let id = store.create(8, 8, 100).unwrap();
            store
                .get_mut(id)
                .unwrap()
                .add_colony(Position::new(4, 4), 20)
                .unwrap();
        }

        let reports = store.advance_all();
        let ids: Vec<_> = reports.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
        for (id, report) in reports {
            assert_eq!(report.tick, 1);
            assert_eq!(report.spawned, 1);
            assert_eq!(store.get(id).unwrap().tick(), 1);
        }

        assert_eq!(store.advance(2).unwrap().tick, 2);
        assert!(store.advance(9).is_err());
    }

    #[test]
    fn test_same_seed_replays() {
        let run = || {
            let mut store = SimulationStore::with_seed(77);
            let id = store
                .create_with(|id| {
                    let mut sim = Simulation::new(id, 12, 12, 100)?;
                    sim.add_colony(Position::new(6, 6), 40)?;
                    sim.add_food_pile(Position::new(2, 9), 30)?;
                    sim.add_ant_eater(Position::new(9, 3))?;
                    Ok(sim)
                })
                .unwrap();
            for _ in 0..200 {
                store.advance_all();
            }
            let sim = store.get(id).unwrap();
            (
                sim.ants().cloned().collect::<Vec<_>>(),
                sim.ant_eaters().to_vec(),
                sim.pheromone_cells(),
            )
        };

        assert_eq!(run(), run());
    }
}
