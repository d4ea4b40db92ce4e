use crate::direction::Direction;
use crate::world::position::Position;
use serde::Serialize;

/// Upper bound of a cell's pheromone intensity
pub const MAX_PHEROMONE: f32 = 100.0;

/// Up to four in-bounds neighbors, kept in north/south/east/west order
#[derive(Clone, Copy, Debug)]
pub struct Neighbors {
    cells: [Position; 4],
    len: usize,
}

impl Neighbors {
    #[inline]
    pub fn as_slice(&self) -> &[Position] {
        &self.cells[..self.len]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.as_slice().iter().copied()
    }

    /// Neighbors for which `keep` holds, order preserved
    pub fn filtered(&self, mut keep: impl FnMut(Position) -> bool) -> Neighbors {
        let mut out = *self;
        out.len = 0;
        for pos in self.iter() {
            if keep(pos) {
                out.cells[out.len] = pos;
                out.len += 1;
            }
        }
        out
    }
}

/// A cell with a non-zero pheromone value, as returned by queries
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PheromoneCell {
    pub row: usize,
    pub col: usize,
    pub pheromone: f32,
}

/// Pheromone field: `height` rows by `width` columns, stored row-major
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    pheromone: Vec<f32>,
}

impl Grid {
    /// Create a grid with zero pheromone everywhere
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pheromone: vec![0.0; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    #[inline]
    fn index(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| pos.row * self.width + pos.col)
    }

    /// Pheromone at `pos`; zero outside the grid
    #[inline]
    pub fn pheromone(&self, pos: Position) -> f32 {
        debug_assert!(self.contains(pos), "pheromone read outside grid at {pos}");
        self.index(pos).map_or(0.0, |i| self.pheromone[i])
    }

    /// In-bounds orthogonal neighbors of `pos`. No wraparound.
    pub fn neighbors(&self, pos: Position) -> Neighbors {
        let mut cells = [pos; 4];
        let mut len = 0usize;
        for direction in Direction::ALL {
            if let Some(next) = pos.step(direction, self.width, self.height) {
                cells[len] = next;
                len += 1;
            }
        }
        Neighbors { cells, len }
    }

    /// Add `amount` pheromone at `pos`, capped at [`MAX_PHEROMONE`]
    pub fn deposit(&mut self, pos: Position, amount: f32) {
        debug_assert!(self.contains(pos), "deposit outside grid at {pos}");
        if let Some(i) = self.index(pos) {
            let cell = &mut self.pheromone[i];
            *cell = (*cell + amount).clamp(0.0, MAX_PHEROMONE);
        }
    }

    /// Remove one unit of pheromone at `pos`, floored at zero
    pub fn decay_at(&mut self, pos: Position) {
        debug_assert!(self.contains(pos), "decay outside grid at {pos}");
        if let Some(i) = self.index(pos) {
            let cell = &mut self.pheromone[i];
            if *cell > 0.0 {
                *cell = (*cell - 1.0).max(0.0);
            }
        }
    }

    /// Every cell with pheromone above zero, row-major
    pub fn pheromone_cells(&self) -> Vec<PheromoneCell> {
        self.pheromone
            .iter()
            .enumerate()
            .filter(|(_, p)| **p > 0.0)
            .map(|(i, &pheromone)| PheromoneCell {
                row: i / self.width,
                col: i % self.width,
                pheromone,
            })
            .collect()
    }
}
