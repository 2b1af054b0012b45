use crate::config::{HazardCounts, MAX_BOARD_DIM, MIN_BOARD_DIM};
use crate::error::SetupError;
use crate::types::{Position, Terrain};
use crate::utils;
use rand::Rng;

/// The terrain grid of the arena. Robots are tracked by the game roster,
/// never stored in the grid.
#[derive(Debug, Clone)]
pub struct Board {
    rows: i32,
    cols: i32,
    cells: Vec<Terrain>, // row-major
}

impl Board {
    /// Creates an empty board with each dimension clamped to the allowed range.
    pub fn new(rows: i32, cols: i32) -> Self {
        let rows = rows.clamp(MIN_BOARD_DIM, MAX_BOARD_DIM);
        let cols = cols.clamp(MIN_BOARD_DIM, MAX_BOARD_DIM);
        Board {
            rows,
            cols,
            cells: vec![Terrain::Empty; (rows * cols) as usize],
        }
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        utils::in_bounds(pos, self.rows, self.cols)
    }

    /// Terrain at `pos`; off-board cells read as empty so that callers can
    /// probe neighbours near the edges freely.
    pub fn terrain_at(&self, pos: Position) -> Terrain {
        if self.in_bounds(pos) {
            self.cells[self.index(pos)]
        } else {
            Terrain::Empty
        }
    }

    /// Overwrites a single in-bounds cell. Off-board writes are ignored.
    pub fn set_terrain(&mut self, pos: Position, terrain: Terrain) {
        if self.in_bounds(pos) {
            let idx = self.index(pos);
            self.cells[idx] = terrain;
        }
    }

    fn index(&self, pos: Position) -> usize {
        (pos.row * self.cols + pos.col) as usize
    }

    fn position_of(&self, index: usize) -> Position {
        let index = index as i32;
        Position::new(index / self.cols, index % self.cols)
    }

    /// All empty cells in row-major order
    pub fn empty_cells(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, terrain)| terrain.is_empty())
            .map(|(i, _)| self.position_of(i))
            .collect()
    }

    /// Scatters mounds, pits and flames over distinct empty cells.
    ///
    /// Fails without touching the board if the request does not fit.
    pub fn place_hazards<R: Rng + ?Sized>(
        &mut self,
        counts: HazardCounts,
        rng: &mut R,
    ) -> Result<(), SetupError> {
        let mut free = self.empty_cells();
        if counts.total() > free.len() {
            return Err(SetupError::BoardTooCrowded {
                requested: counts.total(),
                available: free.len(),
            });
        }

        log::info!(
            "Placing {} mounds, {} pits, {} flames...",
            counts.mounds,
            counts.pits,
            counts.flames
        );
        for (terrain, count) in [
            (Terrain::Mound, counts.mounds),
            (Terrain::Pit, counts.pits),
            (Terrain::Flame, counts.flames),
        ] {
            for _ in 0..count {
                let pick = rng.gen_range(0..free.len());
                let pos = free.swap_remove(pick);
                self.set_terrain(pos, terrain);
            }
        }
        Ok(())
    }

    /// Picks a random empty cell that no position in `occupied` holds.
    pub fn random_free_cell<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        occupied: &[Position],
    ) -> Option<Position> {
        let free: Vec<Position> = self
            .empty_cells()
            .into_iter()
            .filter(|pos| !occupied.contains(pos))
            .collect();
        if free.is_empty() {
            None
        } else {
            Some(free[rng.gen_range(0..free.len())])
        }
    }
}
