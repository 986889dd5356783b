use image::RgbaImage;
use log::{debug, info, warn};

use super::signature::{FormatHint, SignatureStatus};
use super::traversal::Traversal;
use crate::bit_stream::BitStream;
use crate::media::capacity::{ensure_capacity, image_capacity_bits};
use crate::media::LsbCodecOptions;
use crate::progress::{NoProgress, ProgressObserver};
use crate::result::Result;

/// Outcome of hiding a payload in a carrier image.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct EmbedReport {
    /// payload bits that made it into the carrier
    pub consumed_bits: u64,
    pub total_bits: u64,
    /// `false` if the pixels ran out first, which can only happen with an ignore list
    pub fully_embedded: bool,
}

/// Bytes recovered from a carrier image.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Extraction {
    pub data: Vec<u8>,
    pub signature: SignatureStatus,
}

/// Hides and solves raw payloads in the low bits of RGBA images.
///
/// ## Example of usage
/// ```rust
/// use image::{Rgba, RgbaImage};
/// use lsbhide_core::media::image::{FormatHint, LsbCodec};
/// use lsbhide_core::media::LsbCodecOptions;
///
/// let mut image = RgbaImage::from_pixel(4, 4, Rgba([200, 100, 50, 255]));
/// let opts = LsbCodecOptions::default().with_nlsb(2).unwrap();
///
/// let report = LsbCodec::embed(&mut image, b"Hi!", &opts).unwrap();
/// assert!(report.fully_embedded);
///
/// let recovered = LsbCodec::extract(&image, &opts, FormatHint::None);
/// assert_eq!(&recovered.data[..3], b"Hi!");
/// ```
pub struct LsbCodec;

#[inline(always)]
fn low_mask(n: u8) -> u8 {
    ((1u16 << n) - 1) as u8
}

/// Writes `count` bits into the top of the low `nlsb` bit window of `channel`.
/// All bits outside of that part of the window keep their value.
#[inline(always)]
fn conceal(channel: u8, bits: u8, count: u8, nlsb: u8) -> u8 {
    let shift = nlsb - count;
    let mask = low_mask(count) << shift;
    (channel & !mask) | ((bits << shift) & mask)
}

impl LsbCodec {
    /// Hides `payload` in `image`, see [`LsbCodec::embed_with_progress`].
    pub fn embed(
        image: &mut RgbaImage,
        payload: &[u8],
        opts: &LsbCodecOptions,
    ) -> Result<EmbedReport> {
        Self::embed_with_progress(image, payload, opts, &mut NoProgress)
    }

    /// Hides `payload` in `image`.
    ///
    /// The payload is checked against the capacity first, an image is never
    /// touched when that check fails. Pixels are visited in the order of
    /// `opts.direction`, the selected channels of each pixel in color mode
    /// order, every channel taking the next `nlsb` payload bits.
    pub fn embed_with_progress(
        image: &mut RgbaImage,
        payload: &[u8],
        opts: &LsbCodecOptions,
        progress: &mut dyn ProgressObserver,
    ) -> Result<EmbedReport> {
        let total_bits = payload.len() * 8;
        ensure_capacity(image, opts, total_bits as u64)?;

        let payload = BitStream::from_bytes(payload);
        let nlsb = opts.nlsb();
        let total_bytes = payload.len() as u64 / 8;
        let (width, height) = image.dimensions();
        debug!(
            "Hiding {total_bytes} bytes in {width}x{height} image, direction={}, color mode={}, nlsb={nlsb}",
            opts.direction, opts.color_mode
        );

        let mut cursor = 0;
        'pixels: for (x, y) in Traversal::new(opts.direction, width, height) {
            if cursor >= total_bits {
                break;
            }
            let pixel = image.get_pixel_mut(x, y);
            if opts.ignore_list.contains(pixel) {
                continue;
            }
            for channel in opts.color_mode.indices() {
                let (bits, count) = payload.read_bits(cursor, nlsb);
                pixel.0[channel] = conceal(pixel.0[channel], bits, count, nlsb);

                let bytes_before = cursor / 8;
                cursor += count as usize;
                if cursor / 8 > bytes_before {
                    progress.on_progress((cursor / 8) as u64, total_bytes);
                }
                if cursor >= total_bits {
                    break 'pixels;
                }
            }
        }

        let report = EmbedReport {
            consumed_bits: cursor as u64,
            total_bits: total_bits as u64,
            fully_embedded: cursor >= total_bits,
        };
        if !report.fully_embedded {
            info!(
                "Image exhausted after {} of {} payload bits, ignored pixels reduced the capacity",
                report.consumed_bits, report.total_bits
            );
        }

        Ok(report)
    }

    /// Recovers all bits of `image`, see [`LsbCodec::extract_with_progress`].
    pub fn extract(image: &RgbaImage, opts: &LsbCodecOptions, hint: FormatHint) -> Extraction {
        Self::extract_with_progress(image, opts, hint, &mut NoProgress)
    }

    /// Reads the low `nlsb` bits of every selected channel of every not ignored
    /// pixel, in the same order [`LsbCodec::embed`] writes them.
    ///
    /// Since the carrier does not know the payload length, everything is read;
    /// a trailing partial byte is dropped and the rest is trimmed according to `hint`.
    pub fn extract_with_progress(
        image: &RgbaImage,
        opts: &LsbCodecOptions,
        hint: FormatHint,
        progress: &mut dyn ProgressObserver,
    ) -> Extraction {
        let nlsb = opts.nlsb();
        let mask = low_mask(nlsb);
        let capacity_bits = image_capacity_bits(image, opts);
        let total_bytes = capacity_bits / 8;
        let (width, height) = image.dimensions();
        debug!(
            "Solving {width}x{height} image, direction={}, color mode={}, nlsb={nlsb}, format={hint:?}",
            opts.direction, opts.color_mode
        );

        let mut bits = BitStream::with_capacity(usize::try_from(capacity_bits).unwrap_or(0));
        for (x, y) in Traversal::new(opts.direction, width, height) {
            let pixel = image.get_pixel(x, y);
            if opts.ignore_list.contains(pixel) {
                continue;
            }
            for channel in opts.color_mode.indices() {
                let bytes_before = bits.len() / 8;
                bits.append_bits(pixel.0[channel] & mask, nlsb);
                if bits.len() / 8 > bytes_before {
                    progress.on_progress((bits.len() / 8) as u64, total_bytes);
                }
            }
        }

        bits.truncate_to_bytes();
        let mut data = bits.into_bytes();
        let signature = hint.trim(&mut data);
        if signature == SignatureStatus::NotFound {
            warn!("No trailing {hint} signature found, the recovered data is most likely garbage");
        }

        Extraction { data, signature }
    }
}
