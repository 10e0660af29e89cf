//! Police bitmap à chasse fixe, 6×12 px par cellule.
//!
//! Each glyph is 12 rows of 6 columns, `#` = ink. Covers the glyph ramp;
//! characters outside it have no entry and render blank.

/// Largeur d'une cellule en pixels.
pub const CELL_WIDTH: u32 = 6;
/// Hauteur d'une cellule en pixels.
pub const CELL_HEIGHT: u32 = 12;

type Bitmap = [&'static str; CELL_HEIGHT as usize];

const BLANK: &str = "......";

#[rustfmt::skip]
const GLYPHS: &[(char, Bitmap)] = &[
    (' ', [BLANK; 12]),
    ('.', [
        BLANK, BLANK, BLANK, BLANK, BLANK, BLANK, BLANK, BLANK,
        "..##..",
        "..##..",
        BLANK, BLANK,
    ]),
    (':', [
        BLANK, BLANK, BLANK,
        "..##..",
        "..##..",
        BLANK, BLANK, BLANK,
        "..##..",
        "..##..",
        BLANK, BLANK,
    ]),
    ('-', [
        BLANK, BLANK, BLANK, BLANK, BLANK, BLANK,
        ".####.",
        BLANK, BLANK, BLANK, BLANK, BLANK,
    ]),
    ('=', [
        BLANK, BLANK, BLANK, BLANK,
        "#####.",
        BLANK, BLANK,
        "#####.",
        BLANK, BLANK, BLANK, BLANK,
    ]),
    ('+', [
        BLANK, BLANK, BLANK,
        "..#...",
        "..#...",
        "#####.",
        "..#...",
        "..#...",
        BLANK, BLANK, BLANK, BLANK,
    ]),
    ('*', [
        BLANK, BLANK, BLANK,
        "..#...",
        "#.#.#.",
        ".###..",
        "#.#.#.",
        "..#...",
        BLANK, BLANK, BLANK, BLANK,
    ]),
    ('#', [
        BLANK, BLANK,
        ".#.#..",
        ".#.#..",
        "#####.",
        ".#.#..",
        "#####.",
        ".#.#..",
        ".#.#..",
        BLANK, BLANK, BLANK,
    ]),
    ('%', [
        BLANK, BLANK,
        "##....",
        "##..#.",
        "...#..",
        "..#...",
        ".#....",
        "#..##.",
        "...##.",
        BLANK, BLANK, BLANK,
    ]),
    ('@', [
        BLANK, BLANK,
        ".###..",
        "#...#.",
        "#.###.",
        "#.#.#.",
        "#.###.",
        "#.....",
        ".####.",
        BLANK, BLANK, BLANK,
    ]),
];

/// Bitmap d'un caractère, `None` si la police ne le couvre pas.
#[must_use]
pub fn bitmap(ch: char) -> Option<&'static Bitmap> {
    GLYPHS.iter().find(|(c, _)| *c == ch).map(|(_, b)| b)
}

/// Caractères couverts par la police.
pub fn covered() -> impl Iterator<Item = char> {
    GLYPHS.iter().map(|(c, _)| *c)
}

/// Alpha buffer (`CELL_WIDTH * CELL_HEIGHT`, row-major) for `ch`: 255 = ink.
#[must_use]
pub fn alpha_mask(ch: char) -> Option<Vec<u8>> {
    let rows = bitmap(ch)?;
    Some(
        rows.iter()
            .flat_map(|row| row.bytes().map(|b| if b == b'#' { 255 } else { 0 }))
            .collect(),
    )
}
