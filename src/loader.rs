//! Image loading and decoding

use std::io;
use std::path::Path;

use image::io::Reader as ImageReader;
use image::DynamicImage;
use thiserror::Error;

/// Error type for image loading failures
#[derive(Debug, Error)]
pub enum LoadError {
    /// File is missing or unreadable
    #[error("cannot open image file '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },
    /// File content is not a decodable image
    #[error("cannot decode image '{path}': {source}")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },
}

/// Open and decode an image file.
///
/// The format is sniffed from the file content, so a mismatched or missing
/// extension is fine. Returns [`LoadError::Open`] when the file cannot be
/// read and [`LoadError::Decode`] when its content is not a supported image.
pub fn load_image(path: &Path) -> Result<DynamicImage, LoadError> {
    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| LoadError::Open {
            path: path.display().to_string(),
            source: e,
        })?;

    reader.decode().map_err(|e| LoadError::Decode {
        path: path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_missing_file() {
        let err = load_image(Path::new("no/such/file.png")).unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
        assert!(err.to_string().contains("no/such/file.png"));
    }

    #[test]
    fn test_load_non_image_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fake.png");
        fs::write(&path, "this is not an image").unwrap();

        let err = load_image(&path).unwrap_err();
        assert!(matches!(err, LoadError::Decode { .. }));
    }

    #[test]
    fn test_load_png_ignores_wrong_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("actually_png.jpg");
        image::RgbImage::from_pixel(3, 2, image::Rgb([10, 20, 30]))
            .save_with_format(&path, image::ImageFormat::Png)
            .unwrap();

        let img = load_image(&path).unwrap();
        assert_eq!((img.width(), img.height()), (3, 2));
    }
}
