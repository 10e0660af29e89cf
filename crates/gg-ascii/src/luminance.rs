use gg_core::charset::LuminanceLut;
use gg_core::frame::{AsciiGrid, FrameBuffer, LumaGrid};

/// Convert a frame to a luminance grid of identical dimensions.
///
/// # Example
/// ```
/// use gg_core::frame::FrameBuffer;
/// use gg_ascii::luminance::to_luma;
///
/// let frame = FrameBuffer::filled(2, 2, [0, 0, 0, 255]);
/// let luma = to_luma(&frame);
/// assert_eq!(luma.values, vec![0, 0, 0, 0]);
/// ```
#[must_use]
pub fn to_luma(frame: &FrameBuffer) -> LumaGrid {
    let mut grid = LumaGrid::new(frame.width, frame.height);
    for y in 0..frame.height {
        for x in 0..frame.width {
            grid.set(x, y, frame.luminance(x, y));
        }
    }
    grid
}

/// Map each luminance cell to a glyph via `lut`.
///
/// # Example
/// ```
/// use gg_core::charset::LuminanceLut;
/// use gg_core::frame::LumaGrid;
/// use gg_ascii::luminance::map_glyphs;
///
/// let mut luma = LumaGrid::new(2, 1);
/// luma.set(1, 0, 255);
/// let grid = map_glyphs(&luma, &LuminanceLut::default());
/// assert_eq!(grid.to_text(), " @\n");
/// ```
#[must_use]
pub fn map_glyphs(luma: &LumaGrid, lut: &LuminanceLut) -> AsciiGrid {
    AsciiGrid {
        cells: luma.values.iter().map(|&v| lut.map(v)).collect(),
        width: luma.width,
        height: luma.height,
    }
}

/// Frame → glyph grid, through the luminance grid.
///
/// The frame is expected to already have the target grid dimensions.
#[must_use]
pub fn to_ascii(frame: &FrameBuffer, lut: &LuminanceLut) -> AsciiGrid {
    let grid = map_glyphs(&to_luma(frame), lut);
    log::debug!("Grille ASCII {}×{}", grid.width, grid.height);
    grid
}
