use alloc::vec;
use alloc::vec::Vec;
use rand::prelude::*;

use crate::types::{mult, CellCount, Coord, Coord2};

/// Mine placement strategy. Contract: exactly `count` distinct in-bounds
/// coordinates for the given board size.
pub trait MinePlacer {
    fn pick_mines(&mut self, size: Coord2, count: CellCount) -> Vec<Coord2>;
}

/// Uniform random placement from a caller-provided seed. The RNG state
/// advances across calls, so consecutive boards from one placer differ.
#[derive(Clone, Debug)]
pub struct RandomPlacer {
    rng: SmallRng,
}

impl RandomPlacer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl MinePlacer for RandomPlacer {
    fn pick_mines(&mut self, size: Coord2, count: CellCount) -> Vec<Coord2> {
        let total = mult(size.0, size.1);

        // optimize for full boards
        if count >= total {
            return (0..size.0)
                .flat_map(|x| (0..size.1).map(move |y| (x, y)))
                .collect();
        }

        let mut taken = vec![false; total as usize];
        let mut free_slots = total;
        let mut picked = Vec::with_capacity(count as usize);

        while (picked.len() as CellCount) < count {
            let mut place: CellCount = self.rng.random_range(0..free_slots);
            for (i, slot) in taken.iter_mut().enumerate() {
                if *slot {
                    place += 1;
                }
                if i as CellCount == place {
                    *slot = true;
                    free_slots -= 1;
                    let i = i as CellCount;
                    let height = size.1 as CellCount;
                    picked.push(((i / height) as Coord, (i % height) as Coord));
                    break;
                }
            }
        }

        picked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;

    #[test]
    fn picks_exactly_count_distinct_coords() {
        let mut placer = RandomPlacer::new(7);

        let picked = placer.pick_mines((9, 7), 20);
        let unique: BTreeSet<_> = picked.iter().copied().collect();

        assert_eq!(picked.len(), 20);
        assert_eq!(unique.len(), 20);
        for (x, y) in picked {
            assert!(x < 9 && y < 7);
        }
    }

    #[test]
    fn same_seed_gives_same_board() {
        let a = RandomPlacer::new(42).pick_mines((8, 8), 10);
        let b = RandomPlacer::new(42).pick_mines((8, 8), 10);

        assert_eq!(a, b);
    }

    #[test]
    fn rng_state_advances_between_boards() {
        let mut placer = RandomPlacer::new(42);

        let first = placer.pick_mines((16, 16), 40);
        let second = placer.pick_mines((16, 16), 40);

        assert_ne!(first, second);
    }

    #[test]
    fn full_board_request_short_circuits() {
        let picked = RandomPlacer::new(0).pick_mines((3, 2), 6);

        assert_eq!(picked.len(), 6);
        let unique: BTreeSet<_> = picked.iter().copied().collect();
        assert_eq!(unique.len(), 6);
    }
}
