#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use adjacency::*;
pub use board::*;
pub use error::*;
pub use flood::*;
pub use generator::*;
pub use input::*;
pub use session::*;
pub use tile::*;
pub use types::*;

mod adjacency;
mod board;
mod error;
mod flood;
mod generator;
mod input;
mod session;
mod tile;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Validates the board size and that `0 < mines < width * height`.
    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidDimension);
        }
        let total = mult(size.0, size.1);
        if mines == 0 || mines >= total {
            return Err(GameError::InvalidMineCount { mines, total });
        }
        Ok(Self::new_unchecked(size, mines))
    }

    pub const fn beginner() -> Self {
        Self::new_unchecked((9, 9), 10)
    }

    pub const fn intermediate() -> Self {
        Self::new_unchecked((16, 16), 40)
    }

    pub const fn expert() -> Self {
        Self::new_unchecked((30, 16), 99)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    /// Largest mine count that leaves room for the safe zone of any first click.
    pub const fn max_mines(&self) -> CellCount {
        self.total_cells().saturating_sub(largest_safe_zone(self.size))
    }

    pub const fn fits_safe_start(&self) -> bool {
        self.mines <= self.max_mines()
    }
}

/// The truth grid: every tile is either a mine or its adjacent mine count.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    truth: Array2<Truth>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn from_mine_mask(mine_mask: &Array2<bool>) -> Self {
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count();
        Self {
            truth: count_adjacent(mine_mask),
            // the mask never holds more tiles than `CellCount` can count
            mine_count: mine_count as CellCount,
        }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if !in_bounds(coords, size) {
                return Err(GameError::OutOfBounds(coords));
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(&mine_mask))
    }

    pub fn size(&self) -> Coord2 {
        let (x, y) = self.truth.dim();
        (x as Coord, y as Coord)
    }

    pub fn truth(&self) -> &Array2<Truth> {
        &self.truth
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        self.truth.len() as CellCount
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords].is_mine()
    }

    pub fn iter_mines(&self) -> impl Iterator<Item = Coord2> + '_ {
        iter_coords(self.size()).filter(|&coords| self.contains_mine(coords))
    }
}

impl Index<Coord2> for MineLayout {
    type Output = Truth;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.truth[coords.to_nd_index()]
    }
}
