use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use gg_core::error::CoreError;
use gg_core::frame::FrameBuffer;
use image::ImageReader;

/// Charge une image depuis le disque en `FrameBuffer` RGBA.
///
/// The format is detected from the file content, not its extension.
///
/// # Errors
/// Returns `CoreError::Decode` if the file cannot be opened or is not a
/// recognized image.
///
/// # Example
/// ```no_run
/// use gg_source::image::load_image;
/// use std::path::Path;
/// let frame = load_image(Path::new("photo.jpg")).unwrap();
/// ```
pub fn load_image(path: &Path) -> Result<FrameBuffer, CoreError> {
    let decode_err = |source: Box<dyn std::error::Error + Send + Sync>| CoreError::Decode {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(|e| decode_err(e.into()))?;
    let reader = ImageReader::new(BufReader::new(file))
        .with_guessed_format()
        .map_err(|e| decode_err(e.into()))?;
    let format = reader.format();
    let img = reader.decode().map_err(|e| decode_err(e.into()))?;

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    log::info!(
        "Image décodée : {} ({width}×{height}, {format:?})",
        path.display()
    );
    Ok(FrameBuffer {
        data: rgba.into_raw(),
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn loads_png_by_content() {
        let dir = tempfile::tempdir().unwrap();
        // Misleading extension: detection must rely on the bytes.
        let path = dir.path().join("pixel.dat");
        let mut img = RgbaImage::from_pixel(3, 2, Rgba([10, 20, 30, 255]));
        img.put_pixel(2, 1, Rgba([200, 100, 50, 255]));
        img.save_with_format(&path, image::ImageFormat::Png).unwrap();

        let frame = load_image(&path).unwrap();
        assert_eq!((frame.width, frame.height), (3, 2));
        assert_eq!(frame.pixel(0, 0), (10, 20, 30, 255));
        assert_eq!(frame.pixel(2, 1), (200, 100, 50, 255));
    }

    #[test]
    fn loads_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.jpg");
        image::RgbImage::from_pixel(8, 8, image::Rgb([128, 128, 128]))
            .save(&path)
            .unwrap();

        let frame = load_image(&path).unwrap();
        assert_eq!((frame.width, frame.height), (8, 8));
        let (r, _, _, a) = frame.pixel(4, 4);
        assert!(r.abs_diff(128) <= 4, "lossy gray too far: {r}");
        assert_eq!(a, 255);
    }

    #[test]
    fn missing_file_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_image(&dir.path().join("absent.png")).unwrap_err();
        assert!(matches!(err, CoreError::Decode { .. }));
    }

    #[test]
    fn garbage_bytes_are_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.png");
        std::fs::write(&path, b"definitely not an image").unwrap();
        let err = load_image(&path).unwrap_err();
        assert!(matches!(err, CoreError::Decode { .. }));
    }
}
