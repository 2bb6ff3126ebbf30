use alloc::collections::{BTreeSet, VecDeque};
use alloc::vec::Vec;
use ndarray::Array2;

use crate::*;

/// Reveals the connected zero region around `start` together with its numbered border.
///
/// `start` must already be revealed with a zero count. Flagged tiles are left alone and do
/// not propagate the cascade. Returns the tiles revealed by the cascade, in visiting order.
pub fn flood_reveal(
    start: Coord2,
    truth: &Array2<Truth>,
    visible: &mut Array2<Visibility>,
    unopened_safe: &mut BTreeSet<Coord2>,
) -> Vec<Coord2> {
    let mut revealed = Vec::new();
    let mut visited = BTreeSet::from([start]);
    let mut frontier: VecDeque<_> = truth.iter_neighbors(start).collect();
    visited.extend(frontier.iter().copied());
    log::trace!("Starting flood-fill from {:?}, frontier: {:?}", start, frontier);

    while let Some(coords) = frontier.pop_front() {
        let index = coords.to_nd_index();
        match visible[index] {
            Visibility::Revealed(_) | Visibility::Flagged => {
                log::trace!("Skipping tile at {:?}", coords);
                continue;
            }
            Visibility::Hidden => {}
        }

        let tile = truth[index];
        if tile.is_mine() {
            log::error!("Flood-fill reached mine at {:?}, leaving it hidden", coords);
            continue;
        }

        visible[index] = Visibility::Revealed(tile);
        unopened_safe.remove(&coords);
        revealed.push(coords);
        log::trace!("Flood revealed tile at {:?}: {:?}", coords, tile);

        if tile.is_zero() {
            for next in truth.iter_neighbors(coords) {
                if visited.insert(next) {
                    frontier.push_back(next);
                }
            }
        }
    }

    revealed
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Grids {
        truth: Array2<Truth>,
        visible: Array2<Visibility>,
        unopened: BTreeSet<Coord2>,
    }

    fn grids(size: Coord2, mines: &[Coord2]) -> Grids {
        let mut mask = Array2::default(size.to_nd_index());
        for &coords in mines {
            mask[coords.to_nd_index()] = true;
        }
        let truth = count_adjacent(&mask);
        let unopened = iter_coords(size)
            .filter(|coords| !mines.contains(coords))
            .collect();
        Grids {
            truth,
            visible: Array2::default(size.to_nd_index()),
            unopened,
        }
    }

    fn open_start(g: &mut Grids, start: Coord2) -> Vec<Coord2> {
        g.visible[start.to_nd_index()] = Visibility::Revealed(g.truth[start.to_nd_index()]);
        g.unopened.remove(&start);
        flood_reveal(start, &g.truth, &mut g.visible, &mut g.unopened)
    }

    #[test]
    fn reveals_zero_component_and_numbered_border_only() {
        // column x = 2 is a wall of mines splitting the board
        let mines = [(2, 0), (2, 1), (2, 2), (2, 3)];
        let mut g = grids((5, 4), &mines);

        let revealed = open_start(&mut g, (0, 0));

        let set: BTreeSet<_> = revealed.iter().copied().collect();
        assert_eq!(set.len(), revealed.len(), "tile revealed twice");
        for y in 0..4 {
            assert!(g.visible[[0, y]].is_revealed());
            assert!(g.visible[[1, y]].is_revealed());
            assert_eq!(g.visible[[2, y]], Visibility::Hidden);
            assert_eq!(g.visible[[3, y]], Visibility::Hidden);
            assert_eq!(g.visible[[4, y]], Visibility::Hidden);
        }
        assert_eq!(revealed.len(), 7);
        assert_eq!(g.unopened.len(), 8);
    }

    #[test]
    fn mine_free_board_opens_completely() {
        let mut g = grids((6, 5), &[]);

        let revealed = open_start(&mut g, (3, 2));

        assert_eq!(revealed.len(), 29);
        assert!(g.unopened.is_empty());
        assert!(g.visible.iter().all(|v| *v == Visibility::Revealed(Truth::SafeCount(0))));
    }

    #[test]
    fn flagged_tiles_block_the_cascade() {
        let mut g = grids((5, 1), &[]);
        g.visible[[2, 0]] = Visibility::Flagged;

        let revealed = open_start(&mut g, (0, 0));

        assert_eq!(revealed, [(1, 0)]);
        assert_eq!(g.visible[[2, 0]], Visibility::Flagged);
        assert_eq!(g.visible[[3, 0]], Visibility::Hidden);
    }

    #[test]
    fn numbered_border_does_not_propagate() {
        // . . . . .
        // . . . . x
        let mut g = grids((5, 2), &[(4, 1)]);

        open_start(&mut g, (0, 0));

        assert_eq!(g.visible[[3, 0]], Visibility::Revealed(Truth::SafeCount(1)));
        assert_eq!(g.visible[[3, 1]], Visibility::Revealed(Truth::SafeCount(1)));
        assert_eq!(g.visible[[4, 0]], Visibility::Hidden);
        assert_eq!(g.visible[[4, 1]], Visibility::Hidden);
        assert_eq!(g.unopened.len(), 1);
    }
}
