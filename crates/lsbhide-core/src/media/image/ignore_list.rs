use std::str::FromStr;

use image::Rgba;

use super::channel::PixelColor;
use crate::error::LsbError;

/// Pixel colors that are neither written nor read.
///
/// A pixel matching any entry on its red, green and blue values is skipped as
/// a whole, alpha is never compared. Hiding and solving must use the same list,
/// otherwise the bit positions of all later pixels shift.
///
/// The textual form is a `;` separated list of hex colors, each with an
/// optional leading `#`, in the forms `rgb`, `rgba`, `rrggbb` or `rrggbbaa`:
///
/// ```rust
/// use lsbhide_core::media::image::{IgnoreList, PixelColor};
///
/// let list: IgnoreList = "#ffffff;000;".parse().unwrap();
/// assert_eq!(list.colors(), &[PixelColor::new(255, 255, 255), PixelColor::new(0, 0, 0)]);
/// ```
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct IgnoreList {
    colors: Vec<PixelColor>,
}

impl IgnoreList {
    pub fn new(colors: Vec<PixelColor>) -> Self {
        Self { colors }
    }

    pub fn colors(&self) -> &[PixelColor] {
        &self.colors
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn contains(&self, pixel: &Rgba<u8>) -> bool {
        let color = PixelColor::from(pixel);
        self.colors.iter().any(|c| *c == color)
    }
}

impl From<Vec<PixelColor>> for IgnoreList {
    fn from(colors: Vec<PixelColor>) -> Self {
        Self::new(colors)
    }
}

impl FromStr for IgnoreList {
    type Err = LsbError;

    fn from_str(csv: &str) -> Result<Self, Self::Err> {
        let colors = csv
            .split(';')
            .map(str::trim)
            .filter(|hex| !hex.is_empty())
            .map(parse_hex_color)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { colors })
    }
}

fn parse_hex_color(entry: &str) -> Result<PixelColor, LsbError> {
    let invalid = || LsbError::InvalidIgnoreColor(entry.to_string());
    let hex = entry.strip_prefix('#').unwrap_or(entry);
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let digit = |i: usize| u8::from_str_radix(&hex[i..=i], 16).map_err(|_| invalid());
    let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());

    match hex.len() {
        3 | 4 => Ok(PixelColor::new(
            digit(0)? * 0x11,
            digit(1)? * 0x11,
            digit(2)? * 0x11,
        )),
        6 | 8 => Ok(PixelColor::new(pair(0)?, pair(2)?, pair(4)?)),
        _ => Err(invalid()),
    }
}
