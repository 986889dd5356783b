use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use image::{ImageFormat, RgbaImage};
use log::error;

use crate::error::LsbError;
use crate::result::Result;

use super::Persist;

/// a carrier or stego image, always held as 8 bit RGBA
#[derive(Debug, Clone)]
pub struct ImageMedia {
    image: RgbaImage,
}

impl ImageMedia {
    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    /// Loads any image format the `image` crate is built with, judged by the
    /// file extension, and converts it to RGBA.
    pub fn from_file(f: &Path) -> Result<Self> {
        if ImageFormat::from_path(f).is_err() {
            return Err(LsbError::UnsupportedMedia);
        }
        let image = image::open(f)
            .map_err(|e| {
                error!("Error opening image {f:?}: {e}");
                LsbError::InvalidImageMedia
            })?
            .to_rgba8();

        Ok(Self { image })
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn image_mut(&mut self) -> &mut RgbaImage {
        &mut self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Writes the image as PNG, whatever format it was loaded from, since any
    /// lossy encoding would destroy the hidden bits.
    pub fn save_to_writer<W: Write + Seek>(&self, mut writer: W) -> Result<()> {
        self.image
            .write_to(&mut writer, ImageFormat::Png)
            .map_err(|e| {
                error!("Error saving image: {e}");
                LsbError::ImageEncodingError
            })
    }
}

impl Persist for ImageMedia {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            LsbError::WriteError { source: e }
        })?;
        let mut writer = BufWriter::new(f);
        self.save_to_writer(&mut writer)?;
        writer
            .flush()
            .map_err(|source| LsbError::WriteError { source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::prepare_5x5_image;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn should_reject_unsupported_media() {
        match ImageMedia::from_file(Path::new("Cargo.toml")) {
            Err(LsbError::UnsupportedMedia) => (),
            other => panic!("expected unsupported media, got {other:?}"),
        }
    }

    #[test]
    fn should_reject_a_missing_image_file() {
        match ImageMedia::from_file(Path::new("some_random_file.png")) {
            Err(LsbError::InvalidImageMedia) => (),
            other => panic!("expected invalid image media, got {other:?}"),
        }
    }

    #[test]
    fn should_always_write_png() {
        let media = ImageMedia::from_image(prepare_5x5_image());
        let mut buf = Cursor::new(Vec::new());
        media.save_to_writer(&mut buf).expect("Cannot encode image");

        assert_eq!(&buf.get_ref()[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn should_load_what_was_saved_losslessly() {
        let out_dir = TempDir::new().unwrap();
        let target = out_dir.path().join("saved.png");
        let mut media = ImageMedia::from_image(prepare_5x5_image());

        media.save_as(&target).expect("Cannot save image");
        let loaded = ImageMedia::from_file(&target).expect("Cannot load image");

        assert_eq!(loaded.image(), media.image());
    }
}
