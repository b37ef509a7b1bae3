use serde::{Deserialize, Serialize};

/// Single coordinate axis used for grid width, height, and positions.
pub type Coord = u8;

/// Count type used for entity counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// One of the four cardinal movement commands, `y` growing downward.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    pub const fn delta(self) -> (i8, i8) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// WASD binding for keyboard-driven shells.
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'w' => Some(Self::Up),
            's' => Some(Self::Down),
            'a' => Some(Self::Left),
            'd' => Some(Self::Right),
            _ => None,
        }
    }
}

/// Immutable board dimensions. Every coordinate handed around by the crate
/// satisfies `x < width && y < height`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub width: Coord,
    pub height: Coord,
}

impl Grid {
    pub const fn new(width: Coord, height: Coord) -> Self {
        Self { width, height }
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.width, self.height)
    }

    pub const fn contains(&self, (x, y): Coord2) -> bool {
        x < self.width && y < self.height
    }

    /// Center cell; the player token spawns here.
    pub const fn center(&self) -> Coord2 {
        (self.width / 2, self.height / 2)
    }

    /// Applies `direction` to `coords`, returning a value only when the
    /// target remains in bounds.
    pub fn step(&self, coords: Coord2, direction: Direction) -> Option<Coord2> {
        let (dx, dy) = direction.delta();

        let next_x = coords.0.checked_add_signed(dx)?;
        if next_x >= self.width {
            return None;
        }

        let next_y = coords.1.checked_add_signed(dy)?;
        if next_y >= self.height {
            return None;
        }

        Some((next_x, next_y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deltas_are_unit_cardinal_steps() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn wasd_mapping_ignores_case_and_unknown_keys() {
        assert_eq!(Direction::from_key('w'), Some(Direction::Up));
        assert_eq!(Direction::from_key('A'), Some(Direction::Left));
        assert_eq!(Direction::from_key('s'), Some(Direction::Down));
        assert_eq!(Direction::from_key('D'), Some(Direction::Right));
        assert_eq!(Direction::from_key('q'), None);
        assert_eq!(Direction::from_key(' '), None);
    }

    #[test]
    fn contains_rejects_cells_on_and_past_the_edge() {
        let grid = Grid::new(3, 2);

        assert!(grid.contains((0, 0)));
        assert!(grid.contains((2, 1)));
        assert!(!grid.contains((3, 0)));
        assert!(!grid.contains((0, 2)));
    }

    #[test]
    fn step_stays_inside_the_grid() {
        let grid = Grid::new(3, 3);

        assert_eq!(grid.step((1, 1), Direction::Up), Some((1, 0)));
        assert_eq!(grid.step((1, 1), Direction::Right), Some((2, 1)));
        assert_eq!(grid.step((0, 0), Direction::Up), None);
        assert_eq!(grid.step((0, 0), Direction::Left), None);
        assert_eq!(grid.step((2, 2), Direction::Down), None);
        assert_eq!(grid.step((2, 2), Direction::Right), None);
    }

    #[test]
    fn step_on_a_single_cell_grid_always_fails() {
        let grid = Grid::new(1, 1);

        for direction in Direction::ALL {
            assert_eq!(grid.step((0, 0), direction), None);
        }
    }

    #[test]
    fn center_is_the_half_point() {
        assert_eq!(Grid::new(12, 12).center(), (6, 6));
        assert_eq!(Grid::new(5, 3).center(), (2, 1));
        assert_eq!(Grid::new(1, 1).center(), (0, 0));
    }
}
