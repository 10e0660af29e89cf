use std::path::PathBuf;

use anyhow::{Context, Result};
use gg_ascii::luminance::to_ascii;
use gg_core::charset::LuminanceLut;
use gg_core::config::RunConfig;
use gg_core::frame::AsciiGrid;
use gg_export::sink;
use gg_source::image::load_image;
use gg_source::resize::resize_frame;

/// Load → resample → grayscale → glyphs.
///
/// The configuration is validated before anything touches the disk.
///
/// # Errors
/// Returns an error on missing input, zero dimensions, or decode failure.
pub fn render(config: &RunConfig) -> Result<AsciiGrid> {
    let input = config.validate()?;

    let frame = load_image(input)?;
    let scaled = resize_frame(&frame, config.width, config.height)
        .context("Rééchantillonnage impossible")?;
    log::info!("Grille {}×{}", scaled.width, scaled.height);

    Ok(to_ascii(&scaled, &LuminanceLut::default()))
}

/// Exécution complète : rendu puis écriture vers le sink configuré.
///
/// Returns the written file, `None` when printing to the console.
///
/// # Errors
/// Any stage failure aborts the run.
pub fn run(config: &RunConfig) -> Result<Option<PathBuf>> {
    let grid = render(config)?;
    let written = sink::emit(&grid, config.output, &config.output_dir)?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gg_core::config::OutputKind;
    use gg_core::error::CoreError;
    use image::{Rgba, RgbaImage};
    use std::path::Path;

    fn write_image(dir: &Path, name: &str, img: &RgbaImage) -> PathBuf {
        let path = dir.join(name);
        img.save(&path).unwrap();
        path
    }

    fn config_for(input: PathBuf, output: OutputKind, dir: &Path) -> RunConfig {
        RunConfig {
            input: Some(input),
            output,
            output_dir: dir.to_path_buf(),
            ..RunConfig::default()
        }
    }

    #[test]
    fn default_grid_is_64_by_32() {
        let dir = tempfile::tempdir().unwrap();
        let img = RgbaImage::from_fn(200, 150, |x, y| {
            Rgba([(x % 256) as u8, (y % 256) as u8, 0, 255])
        });
        let input = write_image(dir.path(), "in.png", &img);

        let grid = render(&config_for(input, OutputKind::Stdout, dir.path())).unwrap();
        assert_eq!((grid.width, grid.height), (64, 32));
        let text = grid.to_text();
        assert_eq!(text.lines().count(), 32);
        assert!(text.lines().all(|l| l.chars().count() == 64));
    }

    #[test]
    fn black_two_by_two_gives_blank_rows() {
        let dir = tempfile::tempdir().unwrap();
        let img = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]));
        let input = write_image(dir.path(), "black.png", &img);

        let mut config = config_for(input, OutputKind::Txt, dir.path());
        config.width = 2;
        config.height = 2;
        let written = run(&config).unwrap().unwrap();
        assert_eq!(std::fs::read_to_string(written).unwrap(), "  \n  \n");
    }

    #[test]
    fn txt_output_matches_in_memory_grid() {
        let dir = tempfile::tempdir().unwrap();
        let img = RgbaImage::from_fn(30, 30, |x, _| {
            let v = (x * 255 / 29) as u8;
            Rgba([v, v, v, 255])
        });
        let input = write_image(dir.path(), "ramp.png", &img);
        let mut config = config_for(input, OutputKind::Txt, dir.path());
        config.width = 10;
        config.height = 3;

        let expected = render(&config).unwrap().to_text();
        let written = run(&config).unwrap().unwrap();
        assert_eq!(written, dir.path().join("output.txt"));
        assert_eq!(std::fs::read_to_string(written).unwrap(), expected);
        assert!(expected.starts_with(' '));
        assert!(expected.lines().all(|l| l.ends_with('@')));
    }

    #[test]
    fn png_output_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let img = RgbaImage::from_pixel(8, 8, Rgba([255, 255, 255, 255]));
        let input = write_image(dir.path(), "white.png", &img);
        let mut config = config_for(input, OutputKind::Png, dir.path());
        config.width = 4;
        config.height = 2;

        let written = run(&config).unwrap().unwrap();
        let out = image::open(written).unwrap();
        assert_eq!((out.width(), out.height()), (24, 24));
    }

    #[test]
    fn missing_input_fails_before_decode() {
        let dir = tempfile::tempdir().unwrap();
        let config = RunConfig {
            output: OutputKind::Txt,
            output_dir: dir.path().to_path_buf(),
            ..RunConfig::default()
        };
        let err = run(&config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CoreError>(),
            Some(CoreError::Config(_))
        ));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn undecodable_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("fake.jpg");
        std::fs::write(&input, b"plain text").unwrap();

        let err = run(&config_for(input, OutputKind::Txt, dir.path())).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CoreError>(),
            Some(CoreError::Decode { .. })
        ));
        assert!(!dir.path().join("output.txt").exists());
    }

    #[test]
    fn zero_width_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let img = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]));
        let input = write_image(dir.path(), "in.png", &img);
        let mut config = config_for(input, OutputKind::Txt, dir.path());
        config.width = 0;

        assert!(run(&config).is_err());
        assert!(!dir.path().join("output.txt").exists());
    }
}
