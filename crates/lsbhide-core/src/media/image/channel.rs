use std::fmt;
use std::str::FromStr;

use image::Rgba;

use crate::error::LsbError;

/// One of the three color channels that can carry payload bits.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// position of the channel inside an `Rgb`/`Rgba` pixel
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Channel::Red => 'r',
            Channel::Green => 'g',
            Channel::Blue => 'b',
        }
    }
}

impl TryFrom<char> for Channel {
    type Error = LsbError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'r' => Ok(Channel::Red),
            'g' => Ok(Channel::Green),
            'b' => Ok(Channel::Blue),
            _ => Err(LsbError::InvalidColorMode(c.to_string())),
        }
    }
}

/// The ordered, duplicate free selection of channels used per pixel.
///
/// The order matters: the channels of a pixel are written and read in
/// exactly this order, so `"rg"` and `"gr"` produce different carriers.
///
/// ```rust
/// use lsbhide_core::media::image::{Channel, ColorMode};
///
/// let mode: ColorMode = "gb".parse().unwrap();
/// assert_eq!(mode.channels(), &[Channel::Green, Channel::Blue]);
/// assert!("rr".parse::<ColorMode>().is_err());
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ColorMode {
    channels: Vec<Channel>,
}

impl ColorMode {
    pub fn new(channels: Vec<Channel>) -> Result<Self, LsbError> {
        let symbols = || channels.iter().map(|c| c.symbol()).collect::<String>();
        if channels.is_empty() || channels.len() > 3 {
            return Err(LsbError::InvalidColorMode(symbols()));
        }
        for (i, c) in channels.iter().enumerate() {
            if channels[..i].contains(c) {
                return Err(LsbError::InvalidColorMode(symbols()));
            }
        }

        Ok(Self { channels })
    }

    pub fn rgb() -> Self {
        Self {
            channels: vec![Channel::Red, Channel::Green, Channel::Blue],
        }
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    /// the channel indices in write/read order
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.channels.iter().map(|c| c.index())
    }

    /// number of channels used per pixel
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

impl Default for ColorMode {
    fn default() -> Self {
        Self::rgb()
    }
}

impl FromStr for ColorMode {
    type Err = LsbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let channels = s
            .chars()
            .map(Channel::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| LsbError::InvalidColorMode(s.to_string()))?;

        Self::new(channels).map_err(|_| LsbError::InvalidColorMode(s.to_string()))
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.channels {
            write!(f, "{}", c.symbol())?;
        }
        Ok(())
    }
}

/// The red, green and blue values of a pixel, alpha is never part of it.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct PixelColor(pub [u8; 3]);

impl PixelColor {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    pub fn channel(&self, channel: Channel) -> u8 {
        self.0[channel.index()]
    }
}

impl From<&Rgba<u8>> for PixelColor {
    fn from(p: &Rgba<u8>) -> Self {
        Self([p.0[0], p.0[1], p.0[2]])
    }
}
