//! Routines for working with raw (u32) varints.
//!
//! These are written against byte callbacks so that every buffer flavour shares one definition
//! of the coding. Other types should be shuffled to/from raw values using the `core::Int` trait.

use crate::DecodeError;

const CONTINUATION: u8 = 0x80;
const PAYLOAD: u8 = 0x7f;

const fn len_slow(leading_zeros: u32) -> usize {
    let bits = 32 - leading_zeros as usize;
    if bits == 0 {
        1
    } else {
        (bits + 6) / 7
    }
}

const fn compute_len_table() -> [u8; 33] {
    let mut tbl = [0u8; 33];
    let mut i = 0;
    while i < tbl.len() {
        tbl[i] = len_slow(i as u32) as u8;
        i += 1;
    }
    tbl
}

const LEN_TABLE: [u8; 33] = compute_len_table();

/// Return the number of bytes required to encode `v` in `[1,MAX_LEN]`.
#[inline]
pub(crate) const fn len(v: u32) -> usize {
    LEN_TABLE[v.leading_zeros() as usize] as usize
}

/// Encodes `v`, handing each output byte to `put` in order. Returns the number of bytes written.
///
/// Stops at the first error from `put`; bytes already accepted stay written.
#[inline]
pub(crate) fn encode<E, F>(mut v: u32, mut put: F) -> Result<usize, E>
where
    F: FnMut(u8) -> Result<(), E>,
{
    let mut written = 1;
    while v & !u32::from(PAYLOAD) != 0 {
        put((v as u8 & PAYLOAD) | CONTINUATION)?;
        v >>= 7;
        written += 1;
    }
    put(v as u8)?;
    Ok(written)
}

/// Decodes a value, pulling one byte at a time from `next`.
///
/// At most `MAX_DECODE_LEN` bytes are pulled. Groups past bit 31 are consumed and dropped.
#[inline]
pub(crate) fn decode<E, F>(mut next: F) -> Result<u32, E>
where
    F: FnMut() -> Result<u8, E>,
    E: From<DecodeError>,
{
    let first = next()?;
    if first & CONTINUATION == 0 {
        return Ok(first.into());
    }

    let mut result = u32::from(first & PAYLOAD);
    let mut shift = 7;
    while shift < 32 {
        let b = next()?;
        // Bits shifted past 31 by the 5th group fall off the end.
        result |= u32::from(b & PAYLOAD) << shift;
        if b & CONTINUATION == 0 {
            return Ok(result);
        }
        shift += 7;
    }

    // Keep reading up to 64 bits.
    while shift < 64 {
        if next()? & CONTINUATION == 0 {
            return Ok(result);
        }
        shift += 7;
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        max_len = crate::MAX_DECODE_LEN,
        "rejecting varint with no terminating byte"
    );
    Err(DecodeError::TooLong.into())
}

/// Decodes a value from the front of `buf`, returning the raw value and number of bytes consumed.
#[inline]
pub(crate) fn decode_slice(buf: &[u8]) -> Result<(u32, usize), DecodeError> {
    let mut consumed = 0;
    let v = decode::<DecodeError, _>(|| {
        let b = *buf.get(consumed).ok_or(DecodeError::UnexpectedEob)?;
        consumed += 1;
        Ok(b)
    })?;
    Ok((v, consumed))
}
