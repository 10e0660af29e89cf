/// Grille de pixels RGBA, row-major, 4 bytes par pixel.
///
/// Produite par le décodage puis par le rééchantillonnage ; chaque étape
/// en produit une nouvelle.
///
/// # Example
/// ```
/// use gg_core::frame::FrameBuffer;
/// let fb = FrameBuffer::new(10, 10);
/// assert_eq!(fb.data.len(), 400);
/// ```
#[derive(Clone, Debug)]
pub struct FrameBuffer {
    /// Pixels RGBA, row-major, 4 bytes par pixel.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl FrameBuffer {
    /// Crée un buffer noir transparent aux dimensions données.
    ///
    /// # Example
    /// ```
    /// use gg_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::new(100, 50);
    /// assert_eq!(fb.width, 100);
    /// assert_eq!(fb.height, 50);
    /// assert_eq!(fb.data.len(), 100 * 50 * 4);
    /// ```
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0u8; width as usize * height as usize * 4],
            width,
            height,
        }
    }

    /// Crée un buffer rempli d'une couleur RGBA uniforme.
    ///
    /// # Example
    /// ```
    /// use gg_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::filled(2, 2, [255, 255, 255, 255]);
    /// assert_eq!(fb.pixel(1, 1), (255, 255, 255, 255));
    /// ```
    #[must_use]
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        Self {
            data: rgba.repeat(width as usize * height as usize),
            width,
            height,
        }
    }

    #[inline(always)]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Accès au pixel (x, y) → (r, g, b, a).
    ///
    /// # Example
    /// ```
    /// use gg_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::new(10, 10);
    /// assert_eq!(fb.pixel(0, 0), (0, 0, 0, 0));
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8, u8) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let idx = self.index(x, y);
        match self.data.get(idx..idx + 4) {
            Some(p) => (p[0], p[1], p[2], p[3]),
            None => (0, 0, 0, 0),
        }
    }

    /// Écrit le pixel (x, y). Out-of-bounds writes are ignored.
    #[inline(always)]
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let idx = self.index(x, y);
        if let Some(p) = self.data.get_mut(idx..idx + 4) {
            p.copy_from_slice(&rgba);
        }
    }

    /// Luminance perceptuelle BT.601 en virgule fixe 16 bits.
    ///
    /// Channels are widened to 16 bits and premultiplied by alpha before
    /// weighting, so a fully transparent pixel reads as black.
    ///
    /// # Example
    /// ```
    /// use gg_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::filled(1, 1, [255, 255, 255, 255]);
    /// assert_eq!(fb.luminance(0, 0), 255);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn luminance(&self, x: u32, y: u32) -> u8 {
        let (r, g, b, a) = self.pixel(x, y);
        let a = u32::from(a);
        let widen = |c: u8| u32::from(c) * 257 * a / 255;
        // Weights sum to 65536; the sum stays below u32::MAX for 16-bit inputs.
        let y = 19595 * widen(r) + 38470 * widen(g) + 7471 * widen(b) + (1 << 15);
        (y >> 24) as u8
    }
}

/// Grille de luminance, une valeur 8 bits par cellule.
///
/// # Example
/// ```
/// use gg_core::frame::LumaGrid;
/// let grid = LumaGrid::new(4, 2);
/// assert_eq!(grid.values.len(), 8);
/// assert_eq!(grid.get(3, 1), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LumaGrid {
    /// Intensités row-major.
    pub values: Vec<u8>,
    /// Width in cells.
    pub width: u32,
    /// Height in cells.
    pub height: u32,
}

impl LumaGrid {
    /// Crée une grille noire.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            values: vec![0u8; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Intensité en (x, y).
    #[inline(always)]
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.values[y as usize * self.width as usize + x as usize]
    }

    /// Écrit l'intensité en (x, y).
    #[inline(always)]
    pub fn set(&mut self, x: u32, y: u32, value: u8) {
        self.values[y as usize * self.width as usize + x as usize] = value;
    }

    /// Lignes de la grille, du haut vers le bas.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.values.chunks(self.width.max(1) as usize)
    }
}

/// Grille de sortie ASCII, un caractère par cellule.
///
/// # Example
/// ```
/// use gg_core::frame::AsciiGrid;
/// let mut grid = AsciiGrid::new(3, 2);
/// grid.set(0, 0, '@');
/// assert_eq!(grid.get(0, 0), '@');
/// assert_eq!(grid.to_text(), "@  \n   \n");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AsciiGrid {
    /// Flat array of glyphs, row-major.
    pub cells: Vec<char>,
    /// Width in characters.
    pub width: u32,
    /// Height in characters.
    pub height: u32,
}

impl AsciiGrid {
    /// Crée une grille remplie d'espaces.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            cells: vec![' '; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Set a glyph at position (x, y).
    #[inline(always)]
    pub fn set(&mut self, x: u32, y: u32, ch: char) {
        self.cells[y as usize * self.width as usize + x as usize] = ch;
    }

    /// Get the glyph at position (x, y).
    #[inline(always)]
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> char {
        self.cells[y as usize * self.width as usize + x as usize]
    }

    /// Lignes de la grille, du haut vers le bas.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.width.max(1) as usize)
    }

    /// Forme textuelle : chaque ligne suivie de `'\n'`.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for row in self.rows() {
            out.extend(row);
            out.push('\n');
        }
        out
    }
}
