use image::{Rgba, RgbaImage};
use std::path::PathBuf;

use crate::Theme;

/// Entity classes that have a visual glyph.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GlyphKind {
    Coin,
    Obstacle,
    Player,
}

impl GlyphKind {
    /// Conventional file name inside a glyph directory.
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Coin => "coin.png",
            Self::Obstacle => "obstacle.png",
            Self::Player => "player.png",
        }
    }
}

/// Capability for supplying external glyph art.
///
/// Returning `None` means "draw the procedural fallback"; providers never
/// surface load errors to the renderer.
pub trait GlyphProvider {
    fn glyph(&self, kind: GlyphKind) -> Option<RgbaImage>;
}

/// Always draws the procedural fallbacks.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoGlyphs;

impl GlyphProvider for NoGlyphs {
    fn glyph(&self, _kind: GlyphKind) -> Option<RgbaImage> {
        None
    }
}

/// Looks for `coin.png` / `obstacle.png` / `player.png` in a directory.
/// Missing or undecodable files fall back with a warning.
#[derive(Clone, Debug)]
pub struct FileGlyphs {
    root: PathBuf,
}

impl FileGlyphs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl GlyphProvider for FileGlyphs {
    fn glyph(&self, kind: GlyphKind) -> Option<RgbaImage> {
        let path = self.root.join(kind.file_name());
        if !path.exists() {
            return None;
        }

        match image::open(&path) {
            Ok(img) => Some(img.to_rgba8()),
            Err(err) => {
                log::warn!("unreadable glyph {}: {}", path.display(), err);
                None
            }
        }
    }
}

/// Gold disc with a lighter inner ring.
pub(crate) fn coin_sprite(size: u32, theme: &Theme) -> RgbaImage {
    let mut sprite = RgbaImage::new(size, size);
    let half = size as f32 / 2.0;
    let disc_r = half * 0.875;
    let ring_r = half * 0.625;
    let ring_w = (half * 0.07).max(1.0);

    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 + 0.5 - half;
            let dy = y as f32 + 0.5 - half;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist > disc_r {
                continue;
            }

            let color = if (dist - ring_r).abs() <= ring_w {
                theme.coin_ring
            } else {
                theme.coin
            };
            sprite.put_pixel(x, y, Rgba(color));
        }
    }

    sprite
}

pub(crate) fn square_sprite(size: u32, color: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(size, size, Rgba(color))
}
