use crate::ant::Ant;
use crate::ant_eater::AntEater;
use crate::colony::Colony;
use crate::error::{Result, SimError};
use crate::food::FoodPile;
use crate::world::{Grid, PheromoneCell, Position};
use serde::Serialize;

/// Identifier handed out by the simulation store
pub type SimulationId = u64;

/// One simulated ecosystem: the grid and every entity living on it.
///
/// Grid dimensions are fixed at creation and every entity position stays
/// inside `[0, height) x [0, width)`.
#[derive(Clone, Debug)]
pub struct Simulation {
    id: SimulationId,
    tick_ms: u64,
    tick: u64,
    pub(crate) grid: Grid,
    pub(crate) colonies: Vec<Colony>,
    pub(crate) food_piles: Vec<FoodPile>,
    pub(crate) ant_eaters: Vec<AntEater>,
}

/// Read-only view of a simulation, ready for serialization
#[derive(Debug, Serialize)]
pub struct SimulationSnapshot<'a> {
    pub id: SimulationId,
    pub tick: u64,
    pub width: usize,
    pub height: usize,
    pub tick_ms: u64,
    pub colonies: &'a [Colony],
    pub food_piles: &'a [FoodPile],
    pub ant_eaters: &'a [AntEater],
    pub pheromones: Vec<PheromoneCell>,
}

impl Simulation {
    /// Create an empty simulation on a zero-pheromone grid.
    ///
    /// Grids without room to move (any side of 0, or a single cell) are
    /// rejected, as are grids whose cell count does not fit in `usize`.
    /// `tick_ms` only paces external drivers.
    pub fn new(id: SimulationId, width: usize, height: usize, tick_ms: u64) -> Result<Self> {
        if !matches!(width.checked_mul(height), Some(cells) if cells >= 2) {
            return Err(SimError::DegenerateGrid { width, height });
        }
        Ok(Self {
            id,
            tick_ms,
            tick: 0,
            grid: Grid::new(width, height),
            colonies: Vec::new(),
            food_piles: Vec::new(),
            ant_eaters: Vec::new(),
        })
    }

    #[inline]
    pub fn id(&self) -> SimulationId {
        self.id
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    #[inline]
    pub fn tick_ms(&self) -> u64 {
        self.tick_ms
    }

    /// Ticks advanced so far
    #[inline]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub(crate) fn bump_tick(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }

    fn check_bounds(&self, position: Position) -> Result<()> {
        if self.grid.contains(position) {
            Ok(())
        } else {
            Err(SimError::OutOfBounds {
                position,
                width: self.width(),
                height: self.height(),
            })
        }
    }

    /// Found a colony at `position` with `food` in its nest; returns its index
    pub fn add_colony(&mut self, position: Position, food: u32) -> Result<usize> {
        self.check_bounds(position)?;
        self.colonies.push(Colony::new(position, food));
        Ok(self.colonies.len() - 1)
    }

    pub fn add_food_pile(&mut self, position: Position, amount: u32) -> Result<()> {
        self.check_bounds(position)?;
        if amount == 0 {
            return Err(SimError::EmptyFoodPile(position));
        }
        self.food_piles.push(FoodPile::new(position, amount));
        Ok(())
    }

    pub fn add_ant_eater(&mut self, position: Position) -> Result<()> {
        self.check_bounds(position)?;
        self.ant_eaters.push(AntEater::new(position));
        Ok(())
    }

    /// Spawn an ant on demand in the colony at `colony_index`.
    ///
    /// `Ok(None)` means the nest could not afford it.
    pub fn spawn_ant(&mut self, colony_index: usize) -> Result<Option<Ant>> {
        let colony = self
            .colonies
            .get_mut(colony_index)
            .ok_or(SimError::UnknownColony(colony_index))?;
        Ok(colony.try_spawn())
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn colonies(&self) -> &[Colony] {
        &self.colonies
    }

    pub fn colonies_mut(&mut self) -> &mut [Colony] {
        &mut self.colonies
    }

    /// All ants, colony by colony
    pub fn ants(&self) -> impl Iterator<Item = &Ant> + '_ {
        self.colonies.iter().flat_map(|c| c.ants.iter())
    }

    pub fn food_piles(&self) -> &[FoodPile] {
        &self.food_piles
    }

    pub fn ant_eaters(&self) -> &[AntEater] {
        &self.ant_eaters
    }

    pub fn ant_eaters_mut(&mut self) -> &mut [AntEater] {
        &mut self.ant_eaters
    }

    pub fn pheromone_cells(&self) -> Vec<PheromoneCell> {
        self.grid.pheromone_cells()
    }

    /// Total food sitting in piles and nests
    pub fn total_food(&self) -> u64 {
        let piles: u64 = self.food_piles.iter().map(|p| p.amount as u64).sum();
        let nests: u64 = self.colonies.iter().map(|c| c.nest.food as u64).sum();
        piles + nests
    }

    pub fn snapshot(&self) -> SimulationSnapshot<'_> {
        SimulationSnapshot {
            id: self.id,
            tick: self.tick,
            width: self.width(),
            height: self.height(),
            tick_ms: self.tick_ms,
            colonies: &self.colonies,
            food_piles: &self.food_piles,
            ant_eaters: &self.ant_eaters,
            pheromones: self.pheromone_cells(),
        }
    }
}
