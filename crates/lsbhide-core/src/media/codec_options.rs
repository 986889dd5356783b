use crate::error::LsbError;
use crate::media::image::{ColorMode, Direction, IgnoreList};

/// Lowest and highest number of least significant bits a channel can give away.
pub const NLSB_RANGE: std::ops::RangeInclusive<u8> = 1..=8;

/// Options for LSB image hiding and solving.
///
/// Nothing is stored inside the carrier about how it was written, so solving
/// only works with exactly the options that were used for hiding.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LsbCodecOptions {
    /// The pixel visiting order.
    pub direction: Direction,

    /// The channels used per pixel, in write order.
    pub color_mode: ColorMode,

    /// How many of the low bits of each selected channel carry payload,
    /// the upper `8 - nlsb` bits always stay untouched.
    ///
    /// Note this number influences the capacity directly.
    nlsb: u8,

    /// Pixels with one of these colors are skipped entirely.
    pub ignore_list: IgnoreList,
}

impl Default for LsbCodecOptions {
    fn default() -> Self {
        Self {
            direction: Direction::Horizontal,
            color_mode: ColorMode::rgb(),
            nlsb: 1,
            ignore_list: IgnoreList::default(),
        }
    }
}

impl LsbCodecOptions {
    pub fn new(
        direction: Direction,
        color_mode: ColorMode,
        nlsb: u8,
        ignore_list: IgnoreList,
    ) -> Result<Self, LsbError> {
        Self::default()
            .with_direction(direction)
            .with_color_mode(color_mode)
            .with_ignore_list(ignore_list)
            .with_nlsb(nlsb)
    }

    pub fn nlsb(&self) -> u8 {
        self.nlsb
    }

    pub fn with_nlsb(mut self, nlsb: u8) -> Result<Self, LsbError> {
        if !NLSB_RANGE.contains(&nlsb) {
            return Err(LsbError::InvalidBitAllocation(nlsb));
        }
        self.nlsb = nlsb;
        Ok(self)
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_color_mode(mut self, color_mode: ColorMode) -> Self {
        self.color_mode = color_mode;
        self
    }

    pub fn with_ignore_list(mut self, ignore_list: IgnoreList) -> Self {
        self.ignore_list = ignore_list;
        self
    }

    /// payload bits a single non ignored pixel can take
    pub fn bits_per_pixel(&self) -> u64 {
        self.nlsb as u64 * self.color_mode.len() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_all_bit_allocations_from_1_to_8() {
        for nlsb in 1..=8 {
            let opts = LsbCodecOptions::default().with_nlsb(nlsb).unwrap();
            assert_eq!(opts.nlsb(), nlsb);
        }
    }

    #[test]
    fn should_reject_bit_allocations_out_of_range() {
        for nlsb in [0, 9, 255] {
            assert!(matches!(
                LsbCodecOptions::default().with_nlsb(nlsb),
                Err(LsbError::InvalidBitAllocation(n)) if n == nlsb
            ));
        }
    }

    #[test]
    fn should_count_bits_per_pixel() {
        let opts = LsbCodecOptions::new(
            Direction::Vertical,
            "rg".parse().unwrap(),
            4,
            IgnoreList::default(),
        )
        .unwrap();
        assert_eq!(opts.bits_per_pixel(), 8);
    }
}
