//! Extensions to `std::io` traits to support reading/writing varints.
use std::io::{BufRead, Error, ErrorKind, Read, Result, Write};

use crate::{raw, DecodeError, UVarint32, MAX_DECODE_LEN};

impl From<DecodeError> for Error {
    fn from(value: DecodeError) -> Self {
        let kind = match value {
            DecodeError::UnexpectedEob => ErrorKind::UnexpectedEof,
            DecodeError::TooLong => ErrorKind::InvalidData,
        };
        Error::new(kind, value)
    }
}

/// Varint code a value and write it to `w`. Returns the number of bytes
/// written.
#[inline]
pub fn write_uvarint32<V: UVarint32>(v: V, w: &mut impl Write) -> Result<usize> {
    let v = v.to_uvarint32_bytes();
    w.write_all(v.as_slice())?;
    Ok(v.len())
}

/// Read and decode a varint value from `r`, one byte at a time.
/// Prefer `read_uvarint32_buf()` wherever possible as it should be more efficient.
///
/// Errors from `r` are returned unchanged; a reader that runs dry mid-value yields
/// `ErrorKind::UnexpectedEof`.
#[inline]
pub fn read_uvarint32<V: UVarint32>(r: &mut impl Read) -> Result<V> {
    raw::decode::<Error, _>(|| {
        let mut b = [0u8; 1];
        r.read_exact(&mut b)?;
        Ok(b[0])
    })
    .map(V::from_uvarint32_raw)
}

/// Read and decode a varint value from `r`.
#[inline]
pub fn read_uvarint32_buf<V: UVarint32>(r: &mut impl BufRead) -> Result<V> {
    let buffered = {
        let buf = r.fill_buf()?;
        if buf.len() >= MAX_DECODE_LEN {
            Some(raw::decode_slice(buf))
        } else {
            None
        }
    };
    match buffered {
        Some(Ok((raw, len))) => {
            r.consume(len);
            Ok(V::from_uvarint32_raw(raw))
        }
        Some(Err(e)) => {
            r.consume(MAX_DECODE_LEN);
            Err(e.into())
        }
        None => read_uvarint32(r),
    }
}
