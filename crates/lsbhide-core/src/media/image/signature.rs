use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use log::warn;

/// The file format expected inside a carrier, used to cut off the trailing
/// carrier bits that follow the real payload.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
pub enum FormatHint {
    Png,
    Jpeg,
    Pdf,
    /// keep everything that was recovered
    #[default]
    None,
}

/// Whether the trailing signature of a [`FormatHint`] was seen while trimming.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SignatureStatus {
    /// the hint has no signature, nothing was trimmed
    NotApplicable,
    Found,
    /// the signature was missing, the data was cut at the legacy fallback position
    NotFound,
}

impl FormatHint {
    /// The end marker and the number of bytes that belong to the file counted
    /// from the start of its last occurrence.
    pub fn trailing_signature(self) -> Option<(&'static [u8], usize)> {
        match self {
            // IEND chunk type followed by its 4 byte CRC
            FormatHint::Png => Some((b"IEND", 8)),
            FormatHint::Jpeg => Some((&[0xFF, 0xD9], 2)),
            FormatHint::Pdf => Some((b"%%EOF", 5)),
            FormatHint::None => None,
        }
    }

    /// Cuts `data` right after the last occurrence of the trailing signature.
    ///
    /// A missing signature is treated like a match at position `-1`, which leaves
    /// the first `offset - 1` bytes only. This mirrors what earlier releases of
    /// the tool wrote to disk; the returned status tells the two cases apart.
    pub fn trim(self, data: &mut Vec<u8>) -> SignatureStatus {
        let Some((signature, offset)) = self.trailing_signature() else {
            return SignatureStatus::NotApplicable;
        };

        let (end, status) = match rfind(data, signature) {
            Some(start) => (start + offset, SignatureStatus::Found),
            None => (offset - 1, SignatureStatus::NotFound),
        };
        data.truncate(end);

        status
    }
}

fn rfind(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    haystack.windows(needle.len()).rposition(|w| w == needle)
}

/// Unknown hints are accepted and mean no trimming.
impl FromStr for FormatHint {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hint = s.trim().trim_start_matches('.').to_lowercase();
        match hint.as_str() {
            "png" => Ok(FormatHint::Png),
            "jpg" | "jpeg" => Ok(FormatHint::Jpeg),
            "pdf" => Ok(FormatHint::Pdf),
            "" => Ok(FormatHint::None),
            _ => {
                warn!("No trailing signature known for {s:?}, the data will not be trimmed");
                Ok(FormatHint::None)
            }
        }
    }
}

impl fmt::Display for FormatHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FormatHint::Png => "png",
            FormatHint::Jpeg => "jpg",
            FormatHint::Pdf => "pdf",
            FormatHint::None => "",
        })
    }
}
