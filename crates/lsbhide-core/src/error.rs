use thiserror::Error;

use crate::size::readable_size;

#[derive(Error, Debug)]
pub enum LsbError {
    /// Represents a payload that does not fit into the carrier image with the chosen options
    #[error(
        "Capacity Error: Impossible to hide payload ({}) in given image, maximum is {}",
        readable_bits(.payload_bits),
        readable_bits(.capacity_bits)
    )]
    CapacityExceeded {
        payload_bits: u64,
        capacity_bits: u64,
    },

    /// Represents a color mode with unknown or repeated channels, for example `rr` or `rx`
    #[error("Invalid color mode: {0:?}, expected an ordered subset of `r`, `g` and `b`")]
    InvalidColorMode(String),

    /// Represents a malformed entry of the ignore color list, for example `#12345`
    #[error("Invalid color to ignore: {0:?}")]
    InvalidIgnoreColor(String),

    /// Represents a number of least significant bits outside of 1..=8
    #[error("Invalid number of least significant bits: {0}, expected a value between 1 and 8")]
    InvalidBitAllocation(u8),

    /// Represents an unknown traversal direction name
    #[error("Invalid direction: {0:?}")]
    InvalidDirection(String),

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents an unsupported carrier media. For example, a text file
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing payload")]
    PayloadNotSet,
}

fn readable_bits(bits: &u64) -> String {
    readable_size(*bits / 8)
}
