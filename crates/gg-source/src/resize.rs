use gg_core::error::CoreError;
use gg_core::frame::FrameBuffer;

/// Rééchantillonneur plus-proche-voisin.
///
/// Destination `(x, y)` copies source `(x * src_w / dst_w, y * src_h / dst_h)`
/// with floor division. No interpolation, no antialiasing. Keeps a column
/// lookup table between calls so repeated resizes to the same width do not
/// recompute it.
///
/// # Example
/// ```
/// use gg_source::resize::Resizer;
/// let r = Resizer::new();
/// ```
#[derive(Default)]
pub struct Resizer {
    /// Source column for each destination column.
    x_map: Vec<u32>,
    /// (src_w, dst_w) the table was built for.
    x_key: (u32, u32),
}

impl Resizer {
    /// Create a new resizer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resize `src` into `dst`. Dimensions of `dst` determine output size.
    ///
    /// # Errors
    /// Returns `CoreError::InvalidDimensions` if either image has a zero
    /// dimension.
    ///
    /// # Example
    /// ```
    /// use gg_source::resize::Resizer;
    /// use gg_core::frame::FrameBuffer;
    /// let mut r = Resizer::new();
    /// let src = FrameBuffer::new(100, 100);
    /// let mut dst = FrameBuffer::new(50, 25);
    /// r.resize_into(&src, &mut dst).unwrap();
    /// ```
    pub fn resize_into(&mut self, src: &FrameBuffer, dst: &mut FrameBuffer) -> Result<(), CoreError> {
        if dst.width == 0 || dst.height == 0 {
            return Err(CoreError::InvalidDimensions {
                width: dst.width,
                height: dst.height,
            });
        }
        if src.width == 0 || src.height == 0 {
            return Err(CoreError::InvalidDimensions {
                width: src.width,
                height: src.height,
            });
        }

        if src.width == dst.width && src.height == dst.height {
            dst.data.copy_from_slice(&src.data);
            return Ok(());
        }

        if self.x_key != (src.width, dst.width) {
            self.x_map.clear();
            self.x_map
                .extend((0..dst.width).map(|x| nearest(x, src.width, dst.width)));
            self.x_key = (src.width, dst.width);
        }

        let src_stride = src.width as usize * 4;
        let dst_stride = dst.width as usize * 4;
        for (y, dst_row) in dst.data.chunks_exact_mut(dst_stride).enumerate() {
            let sy = nearest(y as u32, src.height, dst.height) as usize;
            let src_row = &src.data[sy * src_stride..(sy + 1) * src_stride];
            for (px, &sx) in dst_row.chunks_exact_mut(4).zip(&self.x_map) {
                let sx = sx as usize * 4;
                px.copy_from_slice(&src_row[sx..sx + 4]);
            }
        }

        log::debug!(
            "Resize {}×{} → {}×{}",
            src.width,
            src.height,
            dst.width,
            dst.height
        );
        Ok(())
    }
}

/// Floor-division source coordinate, computed in 64 bits.
#[inline(always)]
fn nearest(dst_coord: u32, src_len: u32, dst_len: u32) -> u32 {
    (u64::from(dst_coord) * u64::from(src_len) / u64::from(dst_len)) as u32
}

/// Convenience for one-shot usage.
///
/// # Errors
/// Returns `CoreError::InvalidDimensions` if `width`, `height` or the source
/// has a zero dimension.
///
/// # Example
/// ```
/// use gg_source::resize::resize_frame;
/// use gg_core::frame::FrameBuffer;
/// let src = FrameBuffer::new(100, 100);
/// let dst = resize_frame(&src, 64, 32).unwrap();
/// assert_eq!((dst.width, dst.height), (64, 32));
/// ```
pub fn resize_frame(src: &FrameBuffer, width: u32, height: u32) -> Result<FrameBuffer, CoreError> {
    if width == 0 || height == 0 {
        return Err(CoreError::InvalidDimensions { width, height });
    }
    let mut dst = FrameBuffer::new(width, height);
    Resizer::new().resize_into(src, &mut dst)?;
    Ok(dst)
}
