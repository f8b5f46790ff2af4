//! The output write cursor and the copy engine.
//!
//! `OutputCursor` owns the caller's output slice for the duration of a block.
//! Its two copy operations are deliberately different: the literal copy is a
//! plain forward copy of disjoint memory, while the match copy must tolerate
//! source/destination overlap (it is how the format expresses run-length
//! expansion), so it advances one byte at a time in ascending address order
//! rather than calling into a bulk copy that would assume non-overlapping
//! regions.

use crate::error::ErrorKind;
use crate::input::InputCursor;

pub(crate) struct OutputCursor<'a> {
    bytes: &'a mut [u8],
    pos: usize,
}

impl<'a> OutputCursor<'a> {
    #[inline]
    pub(crate) fn new(bytes: &'a mut [u8]) -> Self {
        OutputCursor { bytes, pos: 0 }
    }

    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// Copies `len` bytes from the input cursor straight to the output
    /// cursor. Input and output never alias, so this is a plain copy.
    #[inline]
    pub(crate) fn copy_literals(
        &mut self,
        input: &mut InputCursor,
        len: usize,
    ) -> Result<(), ErrorKind> {
        if len == 0 {
            return Ok(());
        }
        let src = input.read_slice(len)?;
        #[cfg(not(feature = "unchecked"))]
        {
            let dst = self
                .bytes
                .get_mut(self.pos..self.pos + len)
                .ok_or(ErrorKind::OutputOverflow)?;
            dst.copy_from_slice(src);
        }
        #[cfg(feature = "unchecked")]
        unsafe {
            debug_assert!(self.pos + len <= self.bytes.len());
            let dst = self.bytes.get_unchecked_mut(self.pos..self.pos + len);
            dst.copy_from_slice(src);
        }
        self.pos += len;
        Ok(())
    }

    /// Copies `len` bytes from `self.pos + offset` (offset is negative) to
    /// `self.pos`, advancing both in lockstep. `offset` must already be
    /// known to be negative; copying forward one byte at a time is what
    /// lets `-offset < len` behave as a tiled run-length expansion instead
    /// of undefined behavior.
    #[inline]
    pub(crate) fn copy_match(&mut self, offset: i32, len: usize) -> Result<(), ErrorKind> {
        debug_assert!(offset < 0);
        let src_start = self.pos as isize + offset as isize;
        if src_start < 0 {
            return Err(ErrorKind::InvalidBackref);
        }
        let src_start = src_start as usize;

        #[cfg(not(feature = "unchecked"))]
        {
            if self.pos + len > self.bytes.len() {
                return Err(ErrorKind::OutputOverflow);
            }
        }

        let mut src = src_start;
        let mut dst = self.pos;
        for _ in 0..len {
            #[cfg(not(feature = "unchecked"))]
            {
                self.bytes[dst] = self.bytes[src];
            }
            #[cfg(feature = "unchecked")]
            unsafe {
                debug_assert!(src < self.bytes.len() && dst < self.bytes.len());
                *self.bytes.get_unchecked_mut(dst) = *self.bytes.get_unchecked(src);
            }
            src += 1;
            dst += 1;
        }
        self.pos = dst;
        Ok(())
    }

    #[inline]
    pub(crate) fn into_pos(self) -> usize {
        self.pos
    }
}
