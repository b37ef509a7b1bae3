use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use render::*;
pub use theme::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod render;
mod theme;
mod types;

/// Seed for the very first board, so a fresh install shows a reproducible
/// layout. Resets should pass [`random_seed`] instead so replays differ.
pub const DEFAULT_LAYOUT_SEED: u64 = 42;

/// Fresh entropy-derived seed for replay layouts.
pub fn random_seed() -> u64 {
    rand::random()
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub grid: Grid,
    pub coins: CellCount,
    pub obstacles: CellCount,
    pub time_limit_secs: u32,
}

impl GameConfig {
    pub const fn new_unchecked(
        grid: Grid,
        coins: CellCount,
        obstacles: CellCount,
        time_limit_secs: u32,
    ) -> Self {
        Self {
            grid,
            coins,
            obstacles,
            time_limit_secs,
        }
    }

    /// Validates the combination eagerly: placement terminates only when
    /// `coins + obstacles` leaves at least the spawn cell free.
    pub fn new(
        grid: Grid,
        coins: CellCount,
        obstacles: CellCount,
        time_limit_secs: u32,
    ) -> Result<Self> {
        if grid.total_cells() == 0 {
            return Err(GameError::EmptyGrid);
        }
        if coins == 0 {
            return Err(GameError::NoCoins);
        }
        if coins.saturating_add(obstacles) >= grid.total_cells() {
            return Err(GameError::TooManyEntities);
        }
        Ok(Self::new_unchecked(grid, coins, obstacles, time_limit_secs))
    }

    pub const fn total_cells(&self) -> CellCount {
        self.grid.total_cells()
    }
}

impl Default for GameConfig {
    /// Classic setup: 12×12 board, 10 coins, 8 obstacles, 30 second limit.
    fn default() -> Self {
        Self::new_unchecked(Grid::new(12, 12), 10, 8, 30)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_passes_validation() {
        let config = GameConfig::default();

        assert!(GameConfig::new(config.grid, config.coins, config.obstacles, 30).is_ok());
    }

    #[test]
    fn empty_grid_is_rejected() {
        assert_eq!(
            GameConfig::new(Grid::new(0, 12), 1, 0, 30),
            Err(GameError::EmptyGrid)
        );
        assert_eq!(
            GameConfig::new(Grid::new(12, 0), 1, 0, 30),
            Err(GameError::EmptyGrid)
        );
    }

    #[test]
    fn at_least_one_coin_is_required() {
        assert_eq!(
            GameConfig::new(Grid::new(4, 4), 0, 3, 30),
            Err(GameError::NoCoins)
        );
    }

    #[test]
    fn overfull_board_is_rejected() {
        let grid = Grid::new(10, 10);

        // 99 entities leave the spawn cell free, 100 do not
        assert!(GameConfig::new(grid, 59, 40, 30).is_ok());
        assert_eq!(
            GameConfig::new(grid, 60, 40, 30),
            Err(GameError::TooManyEntities)
        );
    }
}
