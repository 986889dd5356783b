use std::ops::Range;

/// A growable sequence of bits backed by a byte buffer.
///
/// Bits are addressed most significant bit first, so bit `0` is the highest
/// bit of the first byte. The last byte may be partially used, unused bits
/// are always kept at zero.
///
/// ## Example of usage
/// ```rust
/// use lsbhide_core::BitStream;
///
/// let payload = BitStream::from_bytes(vec![0b0011_1101]);
/// assert_eq!(payload.len(), 8);
/// assert_eq!(payload.read_bits(0, 4), (0b0011, 4));
/// assert_eq!(payload.read_bits(6, 4), (0b01, 2));
///
/// let mut recovered = BitStream::new();
/// recovered.append_bits(0b0011, 4);
/// recovered.append_bits(0b1101, 4);
/// assert_eq!(recovered.into_bytes(), vec![0b0011_1101]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitStream {
    bytes: Vec<u8>,
    len: usize,
}

#[inline(always)]
fn low_mask(n: u8) -> u8 {
    debug_assert!(n <= 8);
    ((1u16 << n) - 1) as u8
}

impl BitStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// an empty stream that can take `bits` without reallocating
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            len: 0,
        }
    }

    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        let bytes = bytes.into();
        let len = bytes.len() * 8;
        Self { bytes, len }
    }

    /// number of bits in the stream
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bit(&self, offset: usize) -> Option<bool> {
        if offset >= self.len {
            return None;
        }
        Some((self.bytes[offset / 8] >> (7 - offset % 8)) & 1 == 1)
    }

    /// Reads up to `n` bits (at most 8) starting at `offset`.
    ///
    /// Returns the bits right aligned together with the number of bits that were
    /// actually available, which is less than `n` only at the end of the stream.
    pub fn read_bits(&self, offset: usize, n: u8) -> (u8, u8) {
        debug_assert!(n <= 8);
        let available = self.len.saturating_sub(offset).min(n as usize) as u8;
        let mut value = 0u8;
        for i in 0..available as usize {
            let byte = self.bytes[(offset + i) / 8];
            let bit = (byte >> (7 - (offset + i) % 8)) & 1;
            value = (value << 1) | bit;
        }
        (value, available)
    }

    /// Appends the lowest `n` bits of `value`, most significant of them first.
    pub fn append_bits(&mut self, value: u8, n: u8) {
        debug_assert!(n <= 8);
        let value = value & low_mask(n);
        for i in (0..n).rev() {
            let bit = (value >> i) & 1;
            let pos = self.len % 8;
            if pos == 0 {
                self.bytes.push(0);
            }
            if let Some(last) = self.bytes.last_mut() {
                *last |= bit << (7 - pos);
            }
            self.len += 1;
        }
    }

    pub fn append(&mut self, other: &BitStream) {
        let mut offset = 0;
        while offset < other.len {
            let (value, n) = other.read_bits(offset, 8);
            self.append_bits(value, n);
            offset += n as usize;
        }
    }

    /// Overwrites the bits starting at `offset` with the bits of `other`.
    /// The stream never grows, bits of `other` past the end are dropped.
    pub fn overwrite(&mut self, offset: usize, other: &BitStream) {
        let end = self.len.min(offset.saturating_add(other.len));
        for (i, pos) in (offset..end).enumerate() {
            let mask = 1 << (7 - pos % 8);
            let byte = &mut self.bytes[pos / 8];
            if other.bit(i).unwrap_or(false) {
                *byte |= mask;
            } else {
                *byte &= !mask;
            }
        }
    }

    /// copies the bits of `range` into a new stream, clamped to the stream length
    pub fn slice(&self, range: Range<usize>) -> BitStream {
        let end = range.end.min(self.len);
        let start = range.start.min(end);
        let mut sliced = BitStream::with_capacity(end - start);
        let mut offset = start;
        while offset < end {
            let n = (end - offset).min(8) as u8;
            let (value, n) = self.read_bits(offset, n);
            sliced.append_bits(value, n);
            offset += n as usize;
        }
        sliced
    }

    /// drops a trailing partial byte, so that the stream holds whole bytes only
    pub fn truncate_to_bytes(&mut self) {
        self.len -= self.len % 8;
        self.bytes.truncate(self.len / 8);
    }

    /// the backing bytes, a trailing partial byte is zero padded
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl From<Vec<u8>> for BitStream {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<&[u8]> for BitStream {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}
