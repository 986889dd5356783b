use image::RgbaImage;

use crate::error::LsbError;
use crate::media::LsbCodecOptions;

/// Number of payload bits a `width` x `height` image can carry with `nlsb`
/// bits on each of `channels` channels per pixel.
///
/// Pixels skipped by an ignore list are not subtracted, the real capacity of a
/// carrier with ignored colors is lower.
pub fn capacity_bits(width: u32, height: u32, nlsb: u8, channels: usize) -> u64 {
    width as u64 * height as u64 * nlsb as u64 * channels as u64
}

pub fn image_capacity_bits(image: &RgbaImage, opts: &LsbCodecOptions) -> u64 {
    let (width, height) = image.dimensions();
    capacity_bits(width, height, opts.nlsb(), opts.color_mode.len())
}

/// Fails with [`LsbError::CapacityExceeded`] when `payload_bits` do not fit.
pub fn ensure_capacity(
    image: &RgbaImage,
    opts: &LsbCodecOptions,
    payload_bits: u64,
) -> Result<(), LsbError> {
    let capacity_bits = image_capacity_bits(image, opts);
    if payload_bits > capacity_bits {
        return Err(LsbError::CapacityExceeded {
            payload_bits,
            capacity_bits,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::prepare_5x5_image;

    #[test]
    fn should_multiply_all_factors() {
        assert_eq!(capacity_bits(1, 1, 8, 1), 8);
        assert_eq!(capacity_bits(2, 1, 4, 2), 16);
        assert_eq!(capacity_bits(1920, 1080, 2, 3), 1920 * 1080 * 6);
        assert_eq!(capacity_bits(0, 10, 8, 3), 0);
    }

    #[test]
    fn should_not_overflow_for_huge_images() {
        assert_eq!(
            capacity_bits(u32::MAX, 2, 8, 3),
            u32::MAX as u64 * 48
        );
    }

    #[test]
    fn should_accept_payloads_up_to_the_capacity() {
        let img = prepare_5x5_image();
        let opts = LsbCodecOptions::default();
        assert_eq!(image_capacity_bits(&img, &opts), 75);

        assert!(ensure_capacity(&img, &opts, 75).is_ok());
        match ensure_capacity(&img, &opts, 76) {
            Err(LsbError::CapacityExceeded {
                payload_bits,
                capacity_bits,
            }) => {
                assert_eq!(payload_bits, 76);
                assert_eq!(capacity_bits, 75);
            }
            other => panic!("expected a capacity error, got {other:?}"),
        }
    }
}
