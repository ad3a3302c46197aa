//! Traits that allow writing/reading `UVarint32` types on `bytes::{BufMut,Buf}`.

use crate::{raw, DecodeError, UVarint32, MAX_1BYTE_VALUE, MAX_DECODE_LEN};

use bytes::{Buf, BufMut};

/// Extension for `buf::BufMut` to write any `UVarint32` type.
pub trait UVarint32BufMut {
    /// Writes a `UVarint32` value to the buffer, advancing it by `v.uvarint32_len()` bytes.
    ///
    /// # Panics
    ///
    /// If the buffer does not have enough remaining capacity, as with `BufMut::put_u8`.
    fn put_uvarint32<V: UVarint32>(&mut self, v: V);
}

impl<Inner: BufMut> UVarint32BufMut for Inner {
    #[inline]
    fn put_uvarint32<V: UVarint32>(&mut self, v: V) {
        let raw = v.to_uvarint32_raw();
        if raw <= u32::from(MAX_1BYTE_VALUE) {
            self.put_u8(raw as u8);
        } else {
            self.put_slice(v.to_uvarint32_bytes().as_slice());
        }
    }
}

fn get_uvarint32_slow<B: Buf>(buf: &mut B) -> Result<u32, DecodeError> {
    raw::decode(|| {
        if buf.has_remaining() {
            Ok(buf.get_u8())
        } else {
            Err(DecodeError::UnexpectedEob)
        }
    })
}

/// Extension for `buf::Buf` to read any `UVarint32` type.
pub trait UVarint32Buf {
    /// Reads a `UVarint32` from the buffer. After a successful read, the
    /// buffer will be advanced by the number of bytes read.
    ///
    /// # Examples
    ///
    /// ```
    /// use uvarint32::{UVarint32BufMut, UVarint32Buf};
    ///
    /// let to_encode = [1u32, 2, 400];
    /// let mut buf = vec![];
    /// for v in &to_encode {
    ///    buf.put_uvarint32(*v);
    /// }
    ///
    /// let mut buf = &buf[..];
    /// for v in &to_encode {
    ///   let decoded = buf.get_uvarint32::<u32>().unwrap();
    ///   assert_eq!(decoded, *v);
    /// }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an `UnexpectedEob` error if the buffer is empty or if the buffer
    /// is not long enough to contain the full encoded value. Every remaining byte
    /// has been consumed when this happens.
    ///
    /// Returns a `TooLong` error if `MAX_DECODE_LEN` bytes were consumed without
    /// finding the end of the value.
    fn get_uvarint32<V: UVarint32>(&mut self) -> Result<V, DecodeError>;

    /// Returns an iterator over `UVarint32` values in the buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use uvarint32::{UVarint32BufMut, UVarint32Buf};
    ///
    /// let to_encode = [1, 2, -30, i32::MIN];
    /// let mut buf = vec![];
    /// for n in to_encode.iter() {
    ///     buf.put_uvarint32(*n);
    /// }
    /// let mut result = vec![];
    /// let mut decode_data = buf.as_slice();
    /// for decoded in decode_data.iter_uvarint32::<i32>() {
    ///     result.push(decoded.unwrap());
    /// }
    /// assert_eq!(to_encode, result.as_slice());
    /// ```
    fn iter_uvarint32<V: UVarint32>(&mut self) -> UVarint32Iter<'_, Self, V>
    where
        Self: Sized,
    {
        UVarint32Iter::new(self)
    }
}

impl<Inner: Buf> UVarint32Buf for Inner {
    #[inline]
    fn get_uvarint32<V: UVarint32>(&mut self) -> Result<V, DecodeError> {
        if self.chunk().len() >= MAX_DECODE_LEN {
            // Only TooLong can fail here; consume the same bytes the slow path would.
            return match raw::decode_slice(self.chunk()) {
                Ok((raw, len)) => {
                    self.advance(len);
                    Ok(V::from_uvarint32_raw(raw))
                }
                Err(e) => {
                    self.advance(MAX_DECODE_LEN);
                    Err(e)
                }
            };
        }

        get_uvarint32_slow(self).map(V::from_uvarint32_raw)
    }
}

/// An iterator over `UVarint32` values in a `Buf`.
pub struct UVarint32Iter<'a, B, V> {
    buf: &'a mut B,
    _marker: std::marker::PhantomData<V>,
}

impl<'a, B, V> UVarint32Iter<'a, B, V> {
    /// Creates a new `UVarint32Iter`.
    pub fn new(buf: &'a mut B) -> Self {
        Self {
            buf,
            _marker: std::marker::PhantomData,
        }
    }
}

impl<'a, B, V> Iterator for UVarint32Iter<'a, B, V>
where
    B: Buf,
    V: UVarint32,
{
    type Item = Result<V, DecodeError>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.buf.has_remaining() {
            Some(self.buf.get_uvarint32())
        } else {
            None
        }
    }
}
