use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::*;

pub use random::*;

mod random;

/// Strategy producing the coin/obstacle layout of a fresh session.
pub trait LayoutGenerator {
    fn generate(self, config: &GameConfig, spawn: Coord2) -> BoardLayout;
}

/// The result of entity placement: two disjoint sets of cells, neither
/// containing the player spawn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardLayout {
    coins: BTreeSet<Coord2>,
    obstacles: BTreeSet<Coord2>,
}

impl BoardLayout {
    /// Builds a layout from explicit coordinates, validating bounds and
    /// disjointness.
    pub fn from_coords(grid: Grid, coins: &[Coord2], obstacles: &[Coord2]) -> Result<Self> {
        let coins: BTreeSet<Coord2> = coins.iter().copied().collect();
        let obstacles: BTreeSet<Coord2> = obstacles.iter().copied().collect();

        for &cell in coins.iter().chain(obstacles.iter()) {
            if !grid.contains(cell) {
                return Err(GameError::InvalidCoords);
            }
        }
        if !coins.is_disjoint(&obstacles) {
            return Err(GameError::OverlappingEntities);
        }

        Ok(Self::from_sets(coins, obstacles))
    }

    pub(crate) fn from_sets(coins: BTreeSet<Coord2>, obstacles: BTreeSet<Coord2>) -> Self {
        debug_assert!(coins.is_disjoint(&obstacles));
        Self { coins, obstacles }
    }

    pub(crate) fn into_sets(self) -> (BTreeSet<Coord2>, BTreeSet<Coord2>) {
        (self.coins, self.obstacles)
    }

    pub fn coins(&self) -> &BTreeSet<Coord2> {
        &self.coins
    }

    pub fn obstacles(&self) -> &BTreeSet<Coord2> {
        &self.obstacles
    }

    pub fn coin_count(&self) -> CellCount {
        self.coins.len().try_into().unwrap()
    }

    pub fn obstacle_count(&self) -> CellCount {
        self.obstacles.len().try_into().unwrap()
    }

    pub fn occupies(&self, cell: Coord2) -> bool {
        self.coins.contains(&cell) || self.obstacles.contains(&cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_coords_accepts_a_disjoint_in_bounds_layout() {
        let layout =
            BoardLayout::from_coords(Grid::new(4, 4), &[(0, 0), (1, 1)], &[(2, 2)]).unwrap();

        assert_eq!(layout.coin_count(), 2);
        assert_eq!(layout.obstacle_count(), 1);
        assert!(layout.occupies((1, 1)));
        assert!(layout.occupies((2, 2)));
        assert!(!layout.occupies((3, 3)));
    }

    #[test]
    fn from_coords_rejects_out_of_bounds_cells() {
        assert_eq!(
            BoardLayout::from_coords(Grid::new(4, 4), &[(4, 0)], &[]),
            Err(GameError::InvalidCoords)
        );
        assert_eq!(
            BoardLayout::from_coords(Grid::new(4, 4), &[], &[(0, 4)]),
            Err(GameError::InvalidCoords)
        );
    }

    #[test]
    fn from_coords_rejects_overlapping_sets() {
        assert_eq!(
            BoardLayout::from_coords(Grid::new(4, 4), &[(1, 1)], &[(1, 1)]),
            Err(GameError::OverlappingEntities)
        );
    }
}
