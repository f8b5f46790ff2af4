//! LZSA2's 4-bit read channel, interleaved with the byte-oriented input.

use crate::error::ErrorKind;
use crate::input::InputCursor;

/// A one-byte cache shared across all nibble reads within a single block.
///
/// Created at block start with `ready = true` (the next fetch loads a fresh
/// byte and returns its high nibble), discarded at block end. Toggles on
/// every call: the high nibble of a freshly fetched byte is returned first,
/// then the low nibble of that same byte on the next call, without touching
/// the input cursor a second time.
pub(crate) struct NibbleStream {
    ready: bool,
    cache: u8,
}

impl NibbleStream {
    #[inline]
    pub(crate) fn new() -> Self {
        NibbleStream {
            ready: true,
            cache: 0,
        }
    }

    #[inline]
    pub(crate) fn next_nibble(&mut self, input: &mut InputCursor) -> Result<u8, ErrorKind> {
        if self.ready {
            self.cache = input.read_u8()?;
            self.ready = false;
            Ok(self.cache >> 4)
        } else {
            self.ready = true;
            Ok(self.cache & 0x0F)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivers_high_then_low_nibble() {
        let mut input = InputCursor::new(&[0xAB, 0xCD]);
        let mut nibbles = NibbleStream::new();
        assert_eq!(nibbles.next_nibble(&mut input).unwrap(), 0xA);
        assert_eq!(nibbles.next_nibble(&mut input).unwrap(), 0xB);
        assert_eq!(nibbles.next_nibble(&mut input).unwrap(), 0xC);
        assert_eq!(nibbles.next_nibble(&mut input).unwrap(), 0xD);
        assert!(input.is_empty());
    }

    #[test]
    fn does_not_consume_byte_twice() {
        let mut input = InputCursor::new(&[0xF0]);
        let mut nibbles = NibbleStream::new();
        nibbles.next_nibble(&mut input).unwrap();
        assert_eq!(input.pos(), 1);
        nibbles.next_nibble(&mut input).unwrap();
        assert_eq!(input.pos(), 1);
    }
}
