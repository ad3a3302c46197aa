use std::convert::Infallible;

use crate::{raw, MAX_LEN};

/// Errors that may occur when decoding a `UVarint32`.
#[derive(thiserror::Error, Copy, Clone, Debug, Eq, PartialEq)]
pub enum DecodeError {
    /// Reached end-of-buffer unexpectedly.
    ///
    /// This may happen if you attempt to decode an empty buffer or if the buffer ends while the
    /// continuation bit of the last byte read is still set.
    #[error("unexpected end of buffer")]
    UnexpectedEob,
    /// No terminating byte was found within `MAX_DECODE_LEN` bytes.
    #[error("varint too long")]
    TooLong,
}

/// Base integer trait for varints. Provides internal APIs to facilitate the transforms in the
/// UVarint32 trait.
pub trait Int: Sized + Copy {
    fn to_uvarint32_raw(self) -> u32;
    fn from_uvarint32_raw(raw: u32) -> Self;
}

impl Int for u32 {
    #[inline(always)]
    fn to_uvarint32_raw(self) -> u32 {
        self
    }
    #[inline(always)]
    fn from_uvarint32_raw(raw: u32) -> Self {
        raw
    }
}

// Bit pattern reinterpretation: no sign extension, no zigzag.
impl Int for i32 {
    #[inline(always)]
    fn to_uvarint32_raw(self) -> u32 {
        self as u32
    }
    #[inline(always)]
    fn from_uvarint32_raw(raw: u32) -> Self {
        raw as i32
    }
}

/// A single encoded varint value produced by `UVarint32.to_uvarint32_bytes()`.
pub struct EncodedUVarint32 {
    buf: [u8; MAX_LEN],
    len: u8,
}

#[allow(clippy::len_without_is_empty)]
impl EncodedUVarint32 {
    fn new(v: u32) -> Self {
        let mut enc = Self::default();
        let len = encode_into(v, &mut enc.buf);
        enc.len = len as u8;
        enc
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len()]
    }

    /// Returns the number of bytes used to encode the value.
    pub fn len(&self) -> usize {
        self.len as usize
    }
}

impl Default for EncodedUVarint32 {
    fn default() -> Self {
        Self {
            buf: [0u8; MAX_LEN],
            len: 0,
        }
    }
}

/// Panics if `buf` is shorter than the encoding of `v`.
#[inline(always)]
fn encode_into(v: u32, buf: &mut [u8]) -> usize {
    let mut pos = 0;
    raw::encode(v, |b| {
        buf[pos] = b;
        pos += 1;
        Ok::<(), Infallible>(())
    })
    .unwrap_or_else(|never| match never {})
}

/// Trait for integer types that can be varint32 coded.
///
/// Signed integer types are coded by their two's complement bit pattern.
pub trait UVarint32: Sized + Copy + Int {
    /// Returns the number of bytes required to encode `self`.
    /// This value will always be in `[1, MAX_LEN]`
    #[inline]
    fn uvarint32_len(self) -> usize {
        raw::len(self.to_uvarint32_raw())
    }

    /// Encode `self` to buf and return the number of bytes written.
    ///
    /// # Panics
    ///
    /// If `self.uvarint32_len() > buf.len()`.
    #[inline]
    fn encode_uvarint32(self, buf: &mut [u8]) -> usize {
        encode_into(self.to_uvarint32_raw(), buf)
    }

    /// Decode an integer from the bytes in `buf` and return the value and number of bytes consumed.
    #[inline]
    fn decode_uvarint32(buf: &[u8]) -> Result<(Self, usize), DecodeError> {
        let (raw, len) = raw::decode_slice(buf)?;
        Ok((Self::from_uvarint32_raw(raw), len))
    }

    /// Encode `self` to an owned buffer and return it.
    /// Use `as_slice()` to access the encoded bytes.
    #[inline]
    fn to_uvarint32_bytes(self) -> EncodedUVarint32 {
        EncodedUVarint32::new(self.to_uvarint32_raw())
    }
}

impl UVarint32 for u32 {}
impl UVarint32 for i32 {}
