/// 10 caractères, du plus clair au plus dense.
pub const RAMP: &str = " .:-=+*#%@";

/// Lookup table mapping luminance [0..255] → character.
///
/// Pre-computed once for O(1) per-pixel cost. The ramp index for luminance
/// `v` is `floor(v * len / 255)`, clamped to the last ramp entry so that
/// 255 lands on the densest glyph.
///
/// # Example
/// ```
/// use gg_core::charset::LuminanceLut;
/// let lut = LuminanceLut::default();
/// assert_eq!(lut.map(0), ' ');
/// assert_eq!(lut.map(255), '@');
/// ```
pub struct LuminanceLut {
    lut: [char; 256],
}

impl LuminanceLut {
    /// Build a LUT from a ramp ordered lightest→densest.
    ///
    /// A ramp shorter than 2 characters falls back to `" @"`.
    ///
    /// # Example
    /// ```
    /// use gg_core::charset::LuminanceLut;
    /// let lut = LuminanceLut::new(" .:#@");
    /// assert_eq!(lut.map(0), ' ');
    /// assert_eq!(lut.map(255), '@');
    /// ```
    #[must_use]
    pub fn new(ramp: &str) -> Self {
        let chars: Vec<char> = ramp.chars().collect();
        if chars.len() < 2 {
            log::warn!("Ramp trop courte ({} caractères), repli sur \" @\"", chars.len());
            return Self::new(" @");
        }
        let len = chars.len();
        let mut lut = [' '; 256];
        for (v, slot) in lut.iter_mut().enumerate() {
            *slot = chars[(v * len / 255).min(len - 1)];
        }
        Self { lut }
    }

    /// Map a luminance value [0..255] to a character.
    ///
    /// # Example
    /// ```
    /// use gg_core::charset::LuminanceLut;
    /// let lut = LuminanceLut::default();
    /// assert_eq!(lut.map(128), '+');
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn map(&self, luminance: u8) -> char {
        self.lut[luminance as usize]
    }
}

impl Default for LuminanceLut {
    fn default() -> Self {
        Self::new(RAMP)
    }
}
