use serde::{Deserialize, Serialize};

/// RGBA palette for the board and the procedural fallback glyphs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub background: [u8; 4],
    pub grid_line: [u8; 4],
    pub coin: [u8; 4],
    pub coin_ring: [u8; 4],
    pub obstacle: [u8; 4],
    pub player: [u8; 4],
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: [20, 22, 28, 255],
            grid_line: [35, 40, 55, 255],
            coin: [255, 215, 0, 255],
            coin_ring: [255, 240, 120, 255],
            obstacle: [200, 60, 60, 255],
            player: [50, 220, 90, 255],
        }
    }
}
