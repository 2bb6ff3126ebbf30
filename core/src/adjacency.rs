use ndarray::Array2;

use crate::*;

/// Number of mines among the neighbors of `coords`.
pub fn adjacent_mine_count(mine_mask: &Array2<bool>, coords: Coord2) -> u8 {
    let count = mine_mask
        .iter_neighbors(coords)
        .filter(|&pos| mine_mask[pos.to_nd_index()])
        .count();
    // at most 8 neighbors
    count as u8
}

/// Derives the truth grid from a mine mask: mines stay mines, every other tile gets its
/// adjacent mine count.
pub fn count_adjacent(mine_mask: &Array2<bool>) -> Array2<Truth> {
    let (width, height) = mine_mask.dim();
    let mut truth = Array2::default((width, height));

    for ((x, y), &is_mine) in mine_mask.indexed_iter() {
        // the mask was built from a `Coord2` size, so both indices fit
        let coords = (x as Coord, y as Coord);
        truth[[x, y]] = if is_mine {
            Truth::Mine
        } else {
            Truth::SafeCount(adjacent_mine_count(mine_mask, coords))
        };
    }

    truth
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask(size: Coord2, mines: &[Coord2]) -> Array2<bool> {
        let mut mask = Array2::default(size.to_nd_index());
        for &coords in mines {
            mask[coords.to_nd_index()] = true;
        }
        mask
    }

    #[test]
    fn counts_match_hand_computed_layout() {
        // . . . .
        // . x . .
        // . . . x
        let mines = mask((4, 3), &[(1, 1), (3, 2)]);
        let truth = count_adjacent(&mines);

        let expected = [
            [1, 1, 1, 0],
            [1, 9, 2, 1],
            [1, 1, 2, 9],
        ];
        for (y, row) in expected.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                let want = if value == 9 {
                    Truth::Mine
                } else {
                    Truth::SafeCount(value)
                };
                assert_eq!(truth[[x, y]], want, "tile ({x}, {y})");
            }
        }
    }

    #[test]
    fn surrounded_tile_counts_eight() {
        let mut all = mask((3, 3), &[]);
        all.fill(true);
        all[[1, 1]] = false;

        assert_eq!(count_adjacent(&all)[[1, 1]], Truth::SafeCount(8));
    }

    #[test]
    fn counts_agree_with_exhaustive_recount() {
        let mines = mask((5, 5), &[(0, 0), (4, 0), (2, 2), (0, 4), (3, 4)]);
        let truth = count_adjacent(&mines);

        for ((x, y), &value) in truth.indexed_iter() {
            if mines[[x, y]] {
                assert_eq!(value, Truth::Mine);
                continue;
            }
            let mut expected = 0;
            for dy in -1i32..=1 {
                for dx in -1i32..=1 {
                    let (nx, ny) = (x as i32 + dx, y as i32 + dy);
                    if (dx, dy) == (0, 0) || !(0..5).contains(&nx) || !(0..5).contains(&ny) {
                        continue;
                    }
                    if mines[[nx as usize, ny as usize]] {
                        expected += 1;
                    }
                }
            }
            assert_eq!(value, Truth::SafeCount(expected), "tile ({x}, {y})");
        }
    }
}
