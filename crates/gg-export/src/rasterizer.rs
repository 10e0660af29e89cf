use std::collections::HashMap;

use gg_core::error::CoreError;
use gg_core::frame::{AsciiGrid, FrameBuffer};

use crate::font::{self, CELL_HEIGHT, CELL_WIDTH};

/// Fond blanc.
pub const BACKGROUND: (u8, u8, u8) = (255, 255, 255);
/// Glyphes noirs.
pub const FOREGROUND: (u8, u8, u8) = (0, 0, 0);

/// Convertit une AsciiGrid en pixels RGBA avec la police bitmap 6×12.
/// Maintien d'un cache atlas pour éviter de redécoder les bitmaps par cellule.
pub struct Rasterizer {
    char_width: u32,
    char_height: u32,
    /// Maps a char to its 1D alpha buffer (size = char_width * char_height)
    glyph_cache: HashMap<char, Vec<u8>>,
    /// Fallback for chars the font does not cover (all zeros).
    empty_glyph: Vec<u8>,
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer {
    /// Pré-calcule l'atlas de tous les caractères couverts par la police.
    #[must_use]
    pub fn new() -> Self {
        let glyph_cache: HashMap<char, Vec<u8>> = font::covered()
            .filter_map(|ch| font::alpha_mask(ch).map(|mask| (ch, mask)))
            .collect();
        Self {
            char_width: CELL_WIDTH,
            char_height: CELL_HEIGHT,
            glyph_cache,
            empty_glyph: vec![0u8; (CELL_WIDTH * CELL_HEIGHT) as usize],
        }
    }

    /// Dimensions du FrameBuffer pour une grille donnée.
    ///
    /// # Example
    /// ```
    /// use gg_export::rasterizer::Rasterizer;
    /// assert_eq!(Rasterizer::new().target_dimensions(64, 32), (384, 384));
    /// ```
    #[must_use]
    pub fn target_dimensions(&self, grid_w: u32, grid_h: u32) -> (u32, u32) {
        (grid_w * self.char_width, grid_h * self.char_height)
    }

    /// Rendu de la grille dans un nouveau FrameBuffer aux dimensions cibles.
    #[must_use]
    pub fn render(&self, grid: &AsciiGrid) -> FrameBuffer {
        let (w, h) = self.target_dimensions(grid.width, grid.height);
        let mut fb = FrameBuffer::new(w, h);
        // Dimensions match by construction.
        let _ = self.render_into(grid, &mut fb);
        fb
    }

    /// Rendu de la grille sur `fb`, qui doit avoir les dimensions cibles.
    ///
    /// # Errors
    /// Returns `CoreError::InvalidDimensions` if `fb` does not match
    /// [`Rasterizer::target_dimensions`].
    pub fn render_into(&self, grid: &AsciiGrid, fb: &mut FrameBuffer) -> Result<(), CoreError> {
        let (expected_w, expected_h) = self.target_dimensions(grid.width, grid.height);
        if fb.width != expected_w || fb.height != expected_h {
            log::error!(
                "Rasterizer dimension mismatch: fb={}x{} expected={}x{}",
                fb.width,
                fb.height,
                expected_w,
                expected_h
            );
            return Err(CoreError::InvalidDimensions {
                width: fb.width,
                height: fb.height,
            });
        }
        if expected_w == 0 || expected_h == 0 {
            return Ok(());
        }

        let stride = expected_w as usize * 4;
        let band_size = stride * self.char_height as usize;
        let cw = self.char_width as usize;

        for (gy, band) in fb.data.chunks_exact_mut(band_size).enumerate() {
            for gx in 0..grid.width {
                let ch = grid.get(gx, gy as u32);
                let char_alpha = self.glyph_cache.get(&ch).unwrap_or(&self.empty_glyph);
                let cx_start = gx as usize * cw;

                for cy in 0..self.char_height as usize {
                    let fb_y_offset = cy * stride;
                    for cx in 0..cw {
                        let alpha_f = f32::from(char_alpha[cy * cw + cx]) / 255.0;
                        let blend = |fg: u8, bg: u8| {
                            (f32::from(fg) * alpha_f + f32::from(bg) * (1.0 - alpha_f)) as u8
                        };

                        let px_idx = fb_y_offset + (cx_start + cx) * 4;
                        band[px_idx] = blend(FOREGROUND.0, BACKGROUND.0);
                        band[px_idx + 1] = blend(FOREGROUND.1, BACKGROUND.1);
                        band[px_idx + 2] = blend(FOREGROUND.2, BACKGROUND.2);
                        band[px_idx + 3] = 255;
                    }
                }
            }
        }
        Ok(())
    }
}
