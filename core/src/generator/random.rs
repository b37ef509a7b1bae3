use std::collections::BTreeSet;

use rand::RngExt;

use super::*;

/// Rejection-sampling placement: draw a uniform cell, keep it when it is
/// free, repeat until the requested count is reached. Coins are placed
/// first; obstacles additionally avoid the coin cells. Termination is
/// guaranteed by [`GameConfig::new`], which requires
/// `coins + obstacles < total_cells`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomLayoutGenerator {
    seed: u64,
}

impl RandomLayoutGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl LayoutGenerator for RandomLayoutGenerator {
    fn generate(self, config: &GameConfig, spawn: Coord2) -> BoardLayout {
        use rand::prelude::*;

        let mut rng = SmallRng::seed_from_u64(self.seed);

        let mut coins = BTreeSet::new();
        while coins.len() < usize::from(config.coins) {
            let cell = random_cell(&mut rng, config.grid);
            if cell == spawn {
                continue;
            }
            coins.insert(cell);
        }

        let mut obstacles = BTreeSet::new();
        while obstacles.len() < usize::from(config.obstacles) {
            let cell = random_cell(&mut rng, config.grid);
            if cell == spawn || coins.contains(&cell) {
                continue;
            }
            obstacles.insert(cell);
        }

        log::debug!(
            "placed {} coins and {} obstacles from seed {}",
            coins.len(),
            obstacles.len(),
            self.seed
        );
        BoardLayout::from_sets(coins, obstacles)
    }
}

fn random_cell(rng: &mut impl rand::Rng, grid: Grid) -> Coord2 {
    (
        rng.random_range(0..grid.width),
        rng.random_range(0..grid.height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(seed: u64) -> BoardLayout {
        let config = GameConfig::default();
        RandomLayoutGenerator::new(seed).generate(&config, config.grid.center())
    }

    #[test]
    fn layout_has_the_requested_counts() {
        let layout = generate(7);

        assert_eq!(layout.coin_count(), 10);
        assert_eq!(layout.obstacle_count(), 8);
    }

    #[test]
    fn layout_never_touches_the_spawn_cell() {
        for seed in 0..32 {
            let layout = generate(seed);
            assert!(!layout.occupies(GameConfig::default().grid.center()));
        }
    }

    #[test]
    fn coin_and_obstacle_sets_are_disjoint() {
        for seed in 0..32 {
            let layout = generate(seed);
            assert!(layout.coins().is_disjoint(layout.obstacles()));
        }
    }

    #[test]
    fn all_cells_are_in_bounds() {
        let grid = GameConfig::default().grid;
        let layout = generate(11);

        for &cell in layout.coins().iter().chain(layout.obstacles()) {
            assert!(grid.contains(cell));
        }
    }

    #[test]
    fn same_seed_reproduces_the_layout() {
        assert_eq!(generate(42), generate(42));
    }

    #[test]
    fn different_seeds_diverge() {
        assert_ne!(generate(1), generate(2));
    }

    #[test]
    fn nearly_full_board_still_terminates() {
        // 3x3 grid with every non-spawn cell occupied
        let config = GameConfig::new(Grid::new(3, 3), 5, 3, 30).unwrap();
        let layout = RandomLayoutGenerator::new(1).generate(&config, config.grid.center());

        assert_eq!(layout.coin_count(), 5);
        assert_eq!(layout.obstacle_count(), 3);
        assert!(!layout.occupies(config.grid.center()));
    }
}
