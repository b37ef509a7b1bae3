use thiserror::Error;

/// Configuration-time failures. Gameplay itself never errors: out-of-phase
/// or out-of-bounds commands are ignored, and glyph problems fall back to
/// procedural art.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Grid must have at least one cell")]
    EmptyGrid,
    #[error("At least one coin is required")]
    NoCoins,
    #[error("Coins and obstacles do not fit on the grid")]
    TooManyEntities,
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Coin and obstacle cells must be disjoint")]
    OverlappingEntities,
    #[error("An entity occupies the player spawn cell")]
    SpawnOccupied,
}

pub type Result<T> = core::result::Result<T, GameError>;
