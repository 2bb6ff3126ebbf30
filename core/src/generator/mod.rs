use alloc::vec::Vec;

use crate::*;
pub use random::*;

mod random;

/// Strategy for choosing which tiles of the eligible pool receive mines.
pub trait MinePlacer {
    /// Picks `count` distinct coordinates out of `pool`.
    ///
    /// Callers guarantee `count <= pool.len()`.
    fn place(self, pool: &[Coord2], count: CellCount) -> Vec<Coord2>;
}

/// The first-clicked tile together with its neighbors.
pub fn safe_zone(start: Coord2, size: Coord2) -> impl Iterator<Item = Coord2> {
    core::iter::once(start).chain(neighbors(start, size))
}

/// Size of the biggest safe zone a first click can produce on a board of `size`.
pub const fn largest_safe_zone(size: Coord2) -> CellCount {
    let x = if size.0 < 3 { size.0 } else { 3 };
    let y = if size.1 < 3 { size.1 } else { 3 };
    mult(x, y)
}
