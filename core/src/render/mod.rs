use image::{Rgba, RgbaImage, imageops};

use crate::*;

pub use glyph::*;

mod glyph;

// Glyph padding inside a cell, in pixels per 32 px of cell size.
const COIN_INSET_32: u32 = 6;
const TOKEN_INSET_32: u32 = 4;

/// Deterministic compositor from session state to a pixel frame.
///
/// Glyph sprites are resolved once at construction — external art when the
/// provider has it, procedural fallback otherwise — so [`render`] is a pure
/// function of the session: background, grid lines, coins, obstacles, then
/// the player on top.
///
/// [`render`]: SceneRenderer::render
pub struct SceneRenderer {
    cell_px: u32,
    theme: Theme,
    coin_inset: u32,
    token_inset: u32,
    coin: RgbaImage,
    obstacle: RgbaImage,
    player: RgbaImage,
}

impl SceneRenderer {
    pub fn new(cell_px: u32, theme: Theme, glyphs: &dyn GlyphProvider) -> Self {
        assert!(cell_px > 0, "cell size must be positive");

        let coin_inset = cell_px * COIN_INSET_32 / 32;
        let token_inset = cell_px * TOKEN_INSET_32 / 32;
        let coin_size = cell_px - 2 * coin_inset;
        let token_size = cell_px - 2 * token_inset;

        let coin = resolve_sprite(glyphs, GlyphKind::Coin, coin_size)
            .unwrap_or_else(|| coin_sprite(coin_size, &theme));
        let obstacle = resolve_sprite(glyphs, GlyphKind::Obstacle, token_size)
            .unwrap_or_else(|| square_sprite(token_size, theme.obstacle));
        let player = resolve_sprite(glyphs, GlyphKind::Player, token_size)
            .unwrap_or_else(|| square_sprite(token_size, theme.player));

        Self {
            cell_px,
            theme,
            coin_inset,
            token_inset,
            coin,
            obstacle,
            player,
        }
    }

    pub const fn cell_px(&self) -> u32 {
        self.cell_px
    }

    /// Pixel dimensions of a frame for `grid`.
    pub const fn frame_size(&self, grid: Grid) -> (u32, u32) {
        (
            grid.width as u32 * self.cell_px,
            grid.height as u32 * self.cell_px,
        )
    }

    pub fn render(&self, session: &GameSession) -> RgbaImage {
        let grid = session.grid();
        let (width, height) = self.frame_size(grid);
        let mut frame = RgbaImage::from_pixel(width, height, Rgba(self.theme.background));

        self.draw_grid_lines(&mut frame, grid);
        for &cell in session.coins() {
            self.blit(&mut frame, &self.coin, cell, self.coin_inset);
        }
        for &cell in session.obstacles() {
            self.blit(&mut frame, &self.obstacle, cell, self.token_inset);
        }
        // player last, above anything sharing the cell
        self.blit(&mut frame, &self.player, session.player(), self.token_inset);

        frame
    }

    fn draw_grid_lines(&self, frame: &mut RgbaImage, grid: Grid) {
        let color = Rgba(self.theme.grid_line);
        let (width, height) = self.frame_size(grid);

        for line in 0..=u32::from(grid.width) {
            let x = (line * self.cell_px).min(width - 1);
            for y in 0..height {
                frame.put_pixel(x, y, color);
            }
        }
        for line in 0..=u32::from(grid.height) {
            let y = (line * self.cell_px).min(height - 1);
            for x in 0..width {
                frame.put_pixel(x, y, color);
            }
        }
    }

    fn blit(&self, frame: &mut RgbaImage, sprite: &RgbaImage, cell: Coord2, inset: u32) {
        let x = i64::from(cell.0) * i64::from(self.cell_px) + i64::from(inset);
        let y = i64::from(cell.1) * i64::from(self.cell_px) + i64::from(inset);
        imageops::overlay(frame, sprite, x, y);
    }
}

fn resolve_sprite(glyphs: &dyn GlyphProvider, kind: GlyphKind, size: u32) -> Option<RgbaImage> {
    glyphs
        .glyph(kind)
        .map(|img| imageops::resize(&img, size, size, imageops::FilterType::Lanczos3))
}

/// Formats a remaining-seconds value as `MM:SS`: negatives clamp to zero,
/// fractions truncate.
pub fn format_remaining(seconds: f64) -> String {
    let secs = seconds.max(0.0) as u64;
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
