use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::index;

use super::*;

/// Uniform placement without replacement, reproducible from its seed.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMinePlacer {
    seed: u64,
}

impl RandomMinePlacer {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinePlacer for RandomMinePlacer {
    fn place(self, pool: &[Coord2], count: CellCount) -> Vec<Coord2> {
        let amount = usize::from(count);
        if amount > pool.len() {
            log::warn!(
                "Pool too small, requested {} mines but only {} tiles are eligible",
                count,
                pool.len()
            );
        }
        let amount = amount.min(pool.len());

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mines: Vec<_> = index::sample(&mut rng, pool.len(), amount)
            .into_iter()
            .map(|i| pool[i])
            .collect();

        log::debug!(
            "Placed {} mines from a pool of {} with seed {}",
            mines.len(),
            pool.len(),
            self.seed
        );
        mines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;

    fn pool(size: Coord2) -> Vec<Coord2> {
        iter_coords(size).collect()
    }

    #[test]
    fn places_exact_count_of_distinct_pool_tiles() {
        let pool = pool((6, 6));
        let mines = RandomMinePlacer::new(7).place(&pool, 12);

        let distinct: BTreeSet<_> = mines.iter().copied().collect();
        assert_eq!(mines.len(), 12);
        assert_eq!(distinct.len(), 12);
        assert!(mines.iter().all(|m| pool.contains(m)));
    }

    #[test]
    fn same_seed_same_mines() {
        let pool = pool((9, 9));
        let first = RandomMinePlacer::new(42).place(&pool, 10);
        let second = RandomMinePlacer::new(42).place(&pool, 10);

        assert_eq!(first, second);
    }

    #[test]
    fn full_pool_takes_everything() {
        let pool = pool((3, 2));
        let mines: BTreeSet<_> = RandomMinePlacer::new(1).place(&pool, 6).into_iter().collect();

        assert_eq!(mines.len(), 6);
    }

    #[test]
    fn safe_zone_sizes() {
        assert_eq!(safe_zone((0, 0), (5, 5)).count(), 4);
        assert_eq!(safe_zone((2, 0), (5, 5)).count(), 6);
        assert_eq!(safe_zone((2, 2), (5, 5)).count(), 9);
        assert_eq!(largest_safe_zone((5, 5)), 9);
        assert_eq!(largest_safe_zone((2, 7)), 6);
        assert_eq!(largest_safe_zone((1, 1)), 1);
    }
}
