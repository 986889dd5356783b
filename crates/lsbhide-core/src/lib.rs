//! # lsbhide Core API
//!
//! Hides an arbitrary payload in the least significant bits of the color
//! channels of an image, and solves it back out.
//!
//! Nothing about the payload is stored in the image, neither its length nor the
//! options used. Solving needs the same [`LsbCodecOptions`][opts] that were used
//! for hiding, and returns everything that the carrier holds. A format hint can
//! cut the result right after the last trailing signature of a PNG, JPEG or PDF.
//!
//! # Usage Examples
//!
//! ## Hide a file inside an image
//!
//! ```rust,no_run
//! use lsbhide_core::media::LsbCodecOptions;
//!
//! let options = LsbCodecOptions::default()
//!     .with_color_mode("rgb".parse().unwrap())
//!     .with_nlsb(2)
//!     .unwrap();
//!
//! lsbhide_core::api::hide::prepare()
//!     .with_payload_file("secret.pdf")      // will hide this file inside the image
//!     .with_image("carrier.jpg")            // the output is written as carrier.png
//!     .with_options(options)
//!     .execute()
//!     .expect("Failed to hide file in image");
//! ```
//!
//! ## Solve a file from an image
//!
//! ```rust,no_run
//! use lsbhide_core::media::image::FormatHint;
//! use lsbhide_core::media::LsbCodecOptions;
//!
//! let options = LsbCodecOptions::default().with_nlsb(2).unwrap();
//!
//! lsbhide_core::api::solve::prepare()
//!     .from_secret_file("carrier.png")
//!     .into_payload_file("secret.pdf")
//!     .with_format_hint(FormatHint::Pdf)
//!     .with_options(options)
//!     .execute()
//!     .expect("Failed to solve file from image");
//! ```
//!
//! [opts]: ./media/struct.LsbCodecOptions.html

#![warn(clippy::redundant_else)]

pub mod api;
pub mod bit_stream;
pub mod error;
pub mod media;
pub mod progress;
pub mod result;
pub mod size;

pub use crate::bit_stream::BitStream;
pub use crate::error::LsbError;
pub use crate::media::LsbCodecOptions;
pub use crate::progress::{NoProgress, ProgressObserver};
pub use crate::result::Result;
pub use crate::size::readable_size;

#[cfg(test)]
mod test_utils {
    use image::{ImageBuffer, RgbaImage};

    /// This image has some traits:
    /// --------------x-------------
    /// | 0,0 -> (0, 1, 2, 3 ) | 1,0 -> (4, 5, 6, 7 ) | ...
    /// | 0,1 -> (20,21,22,23) | 1,1 -> (24,25,26,27) | ...
    /// | 0,2 -> (40,41,42,43) | 1,2 -> (44,45,46,47) | ...
    /// y ...
    pub fn prepare_5x5_image() -> RgbaImage {
        ImageBuffer::from_fn(5, 5, |x, y| {
            let i = (4 * x + 20 * y) as u8;
            image::Rgba([i, i + 1, i + 2, i + 3])
        })
    }

    /// Deterministic noise, every channel including alpha differs from its neighbours.
    pub fn prepare_noise_image(width: u32, height: u32) -> RgbaImage {
        ImageBuffer::from_fn(width, height, |x, y| {
            let mut seed = (x.wrapping_mul(73_856_093) ^ y.wrapping_mul(19_349_663)).wrapping_add(1);
            let mut next = || {
                seed ^= seed << 13;
                seed ^= seed >> 17;
                seed ^= seed << 5;
                (seed >> 24) as u8
            };
            image::Rgba([next(), next(), next(), next()])
        })
    }
}
