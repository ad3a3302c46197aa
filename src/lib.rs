//! This module implements the Protocol Buffers unsigned varint32 coding.
//!
//! Each output byte carries 7 bits of the value in its low bits, least significant group first.
//! The high bit of a byte is set when another byte follows, so values below 128 take a single
//! byte and any `u32` takes at most [`MAX_LEN`] bytes.
//!
//! Decoding follows the reference varint32 reader: an encoding wider than 32 bits (for example a
//! field written as a 64-bit varint) is accepted and truncated to its low 32 bits, so long as it
//! terminates within [`MAX_DECODE_LEN`] bytes. Longer inputs fail with [`DecodeError::TooLong`].
//!
//! The `UVarint32` trait is implemented for `u32` and `i32`. An `i32` is coded by its bit pattern,
//! not zigzag, so negative values always take 5 bytes.
//!
//! `UVarint32` includes methods to code values directly to/from byte slices, but traits are
//! provided to extend `bytes::{Buf,BufMut}`, and to handle these values in `std::io::{Write,Read}`.
//!
//! ```
//! use bytes::Buf;
//! use uvarint32::{UVarint32, UVarint32Buf, UVarint32BufMut};
//!
//! // value_buf is the maximum size needed to encode a value.
//! let mut value_buf = [0u8; uvarint32::MAX_LEN];
//! assert_eq!(300u32.encode_uvarint32(&mut value_buf), 2);
//! assert_eq!(&value_buf[..2], &[0xac, 0x02]);
//! assert_eq!((300u32, 2), u32::decode_uvarint32(&value_buf).unwrap());
//!
//! let mut buf_mut = vec![];
//! for v in (0u32..100_000).step_by(333) {
//!   buf_mut.put_uvarint32(v);
//! }
//!
//! // NB: need a mutable slice to use as UVarint32Buf
//! let mut buf = buf_mut.as_slice();
//! while let Ok(v) = buf.get_uvarint32::<u32>() {
//!   assert_eq!(v % 333, 0);
//! }
//! assert!(!buf.has_remaining());
//! ```
mod bytes;
pub(crate) mod core;
mod io;
mod raw;

pub use crate::bytes::{UVarint32Buf, UVarint32BufMut, UVarint32Iter};
pub use crate::core::{DecodeError, EncodedUVarint32, Int, UVarint32};
pub use crate::io::{read_uvarint32, read_uvarint32_buf, write_uvarint32};

/// Maximum number of bytes a single encoded `u32` will occupy.
pub const MAX_LEN: usize = 5;

/// Maximum number of bytes the decoder consumes before giving up on a value.
///
/// This is the length of the widest 64-bit varint; anything past the 5th byte is discarded.
pub const MAX_DECODE_LEN: usize = 10;

/// Max value for an n-byte length.
const MAX_VALUE: [u32; 6] = [
    0x0, // placeholder
    0x7f,
    0x3fff,
    0x1fffff,
    0xfffffff,
    0xffffffff,
];

pub(crate) const MAX_1BYTE_VALUE: u8 = MAX_VALUE[1] as u8;
