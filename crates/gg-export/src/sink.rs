use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use gg_core::config::OutputKind;
use gg_core::error::CoreError;
use gg_core::frame::{AsciiGrid, FrameBuffer};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageError};

use crate::rasterizer::Rasterizer;

/// Écrit le texte tel quel sur `out`, puis flush.
///
/// # Errors
/// Returns `CoreError::Write` on any I/O failure.
pub fn write_to<W: Write>(text: &str, out: &mut W, path: &Path) -> Result<(), CoreError> {
    let write_err = |source| CoreError::Write {
        path: path.to_path_buf(),
        source,
    };
    out.write_all(text.as_bytes()).map_err(write_err)?;
    out.flush().map_err(write_err)
}

/// Console sink.
///
/// # Errors
/// Returns `CoreError::Write` if standard output is closed.
pub fn write_stdout(text: &str) -> Result<(), CoreError> {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    write_to(text, &mut lock, Path::new("-"))
}

/// Text file sink. Creates or truncates `path`.
///
/// # Errors
/// Returns `CoreError::Write` if the file cannot be created or written.
pub fn write_text(text: &str, path: &Path) -> Result<(), CoreError> {
    let file = File::create(path).map_err(|source| CoreError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    write_to(text, &mut writer, path)?;
    log::info!("Texte écrit : {}", path.display());
    Ok(())
}

/// Encode un FrameBuffer RGBA en PNG sur `out`.
///
/// # Errors
/// I/O failures map to `CoreError::Write`, encoder failures to `CoreError::Encode`.
pub fn encode_png<W: Write>(fb: &FrameBuffer, out: W, path: &Path) -> Result<(), CoreError> {
    PngEncoder::new(out)
        .write_image(&fb.data, fb.width, fb.height, ExtendedColorType::Rgba8)
        .map_err(|e| match e {
            ImageError::IoError(source) => CoreError::Write {
                path: path.to_path_buf(),
                source,
            },
            other => CoreError::Encode {
                path: path.to_path_buf(),
                message: other.to_string(),
            },
        })
}

/// Image sink: rasterize `grid` and write it as PNG to `path`.
///
/// # Errors
/// `CoreError::Write` if the file cannot be created or written,
/// `CoreError::Encode` if PNG serialization fails.
pub fn write_png(grid: &AsciiGrid, path: &Path) -> Result<(), CoreError> {
    let fb = Rasterizer::new().render(grid);

    let file = File::create(path).map_err(|source| CoreError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    encode_png(&fb, &mut writer, path)?;
    writer.flush().map_err(|source| CoreError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("PNG écrit : {} ({}×{})", path.display(), fb.width, fb.height);
    Ok(())
}

/// Envoie la grille vers le sink choisi.
///
/// Files are named after the sink (`output.txt`, `output.png`) inside `dir`.
/// Returns the written path, `None` for the console.
///
/// # Errors
/// Propagates the sink's `CoreError::Write` / `CoreError::Encode`.
pub fn emit(grid: &AsciiGrid, kind: OutputKind, dir: &Path) -> Result<Option<PathBuf>, CoreError> {
    let path = kind.output_path(dir);
    match (kind, &path) {
        (OutputKind::Stdout, _) | (_, None) => write_stdout(&grid.to_text())?,
        (OutputKind::Txt, Some(p)) => write_text(&grid.to_text(), p)?,
        (OutputKind::Png, Some(p)) => write_png(grid, p)?,
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_grid() -> AsciiGrid {
        let mut grid = AsciiGrid::new(4, 2);
        for (i, ch) in " .:@".chars().enumerate() {
            grid.set(i as u32, 0, ch);
            grid.set(3 - i as u32, 1, ch);
        }
        grid
    }

    #[test]
    fn txt_roundtrip_is_identical() {
        let dir = tempfile::tempdir().unwrap();
        let grid = sample_grid();
        let path = emit(&grid, OutputKind::Txt, dir.path()).unwrap().unwrap();
        assert_eq!(path, dir.path().join("output.txt"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), grid.to_text());
    }

    #[test]
    fn write_to_copies_verbatim() {
        let mut buf = Vec::new();
        write_to(" .\n@%\n", &mut buf, Path::new("-")).unwrap();
        assert_eq!(buf, b" .\n@%\n");
    }

    #[test]
    fn png_has_expected_canvas() {
        let dir = tempfile::tempdir().unwrap();
        let grid = sample_grid();
        let path = emit(&grid, OutputKind::Png, dir.path()).unwrap().unwrap();
        assert_eq!(path, dir.path().join("output.png"));

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (4 * 6, 2 * 12));
        // Top-left cell is a space: white.
        assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
        // '@' in the last column of row 0, ink at (1, 2) of its cell.
        assert_eq!(img.get_pixel(18 + 1, 2).0, [0, 0, 0, 255]);
    }

    #[test]
    fn txt_into_missing_dir_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = emit(&sample_grid(), OutputKind::Txt, &missing).unwrap_err();
        assert!(matches!(err, CoreError::Write { .. }));
    }

    #[test]
    fn png_into_missing_dir_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_png(&sample_grid(), &dir.path().join("nope/output.png")).unwrap_err();
        assert!(matches!(err, CoreError::Write { .. }));
    }

    #[test]
    fn stdout_sink_writes_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let written = emit(&AsciiGrid::new(1, 1), OutputKind::Stdout, dir.path()).unwrap();
        assert_eq!(written, None);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
