//! Two-colour rasterisation of a [`GridMatrix`].

use crate::color::Color;
use crate::fold::GridMatrix;
use crate::raster::RasterView;
use image::RgbImage;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Colours for `true` (prime) and `false` cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub foreground: Color,
    pub background: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            foreground: Color::WHITE,
            background: Color::BLACK,
        }
    }
}

impl Palette {
    #[inline]
    pub fn pick(&self, set: bool) -> Color {
        if set {
            self.foreground
        } else {
            self.background
        }
    }
}

/// Paints pixel `(x, y)` from `grid.get(x, y)`.
///
/// The image is `grid.width()` by `grid.height()` pixels.
pub fn render(grid: &GridMatrix, palette: &Palette) -> RgbImage {
    let width = grid.width();
    let height = grid.height();
    let mut buf = vec![0u8; width * height * 3];
    if width > 0 {
        buf.par_chunks_mut(width * 3)
            .enumerate()
            .for_each(|(y, out)| {
                for (px, &set) in out.chunks_exact_mut(3).zip(grid.row(y)) {
                    px.copy_from_slice(&palette.pick(set).0);
                }
            });
    }
    RgbImage::from_raw(width as u32, height as u32, buf)
        .unwrap_or_else(|| RgbImage::new(width as u32, height as u32))
}
