pub mod hide;
pub mod solve;

use std::path::{Path, PathBuf};

use crate::media::capacity::image_capacity_bits;
use crate::media::{ImageMedia, LsbCodecOptions};
use crate::Result;

/// Where a stego image goes when no output is given: next to the carrier,
/// with the extension replaced by `png`.
pub fn default_output_path(carrier: &Path) -> PathBuf {
    carrier.with_extension("png")
}

/// The capacity in bits of the image at `image` for the given options.
pub fn image_capacity(image: impl AsRef<Path>, options: &LsbCodecOptions) -> Result<u64> {
    let media = ImageMedia::from_file(image.as_ref())?;
    Ok(image_capacity_bits(media.image(), options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_replace_the_extension_with_png() {
        assert_eq!(
            default_output_path(Path::new("images/cat.jpg")),
            PathBuf::from("images/cat.png")
        );
        assert_eq!(
            default_output_path(Path::new("carrier")),
            PathBuf::from("carrier.png")
        );
    }
}
