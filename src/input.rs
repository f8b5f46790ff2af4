//! The compressed-input read cursor.
//!
//! `InputCursor` is the sole legal way to pull bytes out of a compressed
//! block. Its read cursor only ever advances; every primitive read advances
//! it by exactly its size.

use crate::error::ErrorKind;

pub(crate) struct InputCursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> InputCursor<'a> {
    #[inline]
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        InputCursor { bytes, pos: 0 }
    }

    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    /// Reads and consumes a single byte.
    #[inline]
    pub(crate) fn read_u8(&mut self) -> Result<u8, ErrorKind> {
        #[cfg(not(feature = "unchecked"))]
        {
            let byte = *self.bytes.get(self.pos).ok_or(ErrorKind::TruncatedInput)?;
            self.pos += 1;
            Ok(byte)
        }
        #[cfg(feature = "unchecked")]
        unsafe {
            debug_assert!(self.pos < self.bytes.len());
            let byte = *self.bytes.get_unchecked(self.pos);
            self.pos += 1;
            Ok(byte)
        }
    }

    /// Reads a little-endian 16-bit value (two consecutive byte reads).
    #[inline]
    pub(crate) fn read_u16_le(&mut self) -> Result<u16, ErrorKind> {
        let lo = self.read_u8()?;
        let hi = self.read_u8()?;
        Ok(u16::from_le_bytes([lo, hi]))
    }

    /// Borrows the next `len` bytes without copying them anywhere; used by
    /// the literal copy, which writes them straight into the output.
    #[inline]
    pub(crate) fn read_slice(&mut self, len: usize) -> Result<&'a [u8], ErrorKind> {
        #[cfg(not(feature = "unchecked"))]
        {
            let slice = self
                .bytes
                .get(self.pos..self.pos + len)
                .ok_or(ErrorKind::TruncatedInput)?;
            self.pos += len;
            Ok(slice)
        }
        #[cfg(feature = "unchecked")]
        unsafe {
            debug_assert!(self.pos + len <= self.bytes.len());
            let slice = self.bytes.get_unchecked(self.pos..self.pos + len);
            self.pos += len;
            Ok(slice)
        }
    }
}
