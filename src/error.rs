//! Errors produced while decoding an LZSA1/LZSA2 block.

use core::fmt;

/// The kind of failure encountered while decoding a block.
///
/// These map directly onto the error taxonomy of the wire format: a block
/// either decodes to a precise output length, or one of its reads/writes ran
/// out of room and decoding stopped at the byte offset recorded in
/// [`DecodeError::written`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A read would advance past the end of the compressed input.
    TruncatedInput,
    /// A write would advance past the end of the caller-supplied output buffer.
    OutputOverflow,
    /// A decoded match offset would read from before the start of the output.
    InvalidBackref,
    /// An escape byte took a value the ladder reserves as undefined.
    MalformedEscape,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ErrorKind::TruncatedInput => "truncated compressed input",
            ErrorKind::OutputOverflow => "output buffer is too small for the decompressed data",
            ErrorKind::InvalidBackref => "match offset refers before the start of the output",
            ErrorKind::MalformedEscape => "escape byte/nibble takes an undefined value",
        };
        f.write_str(msg)
    }
}

/// An error encountered while decoding a block.
///
/// All errors are fatal to the current block: the format has no resync
/// points within a block, so decoding always stops at the point of failure.
/// `written` is the number of output bytes produced before the error, kept
/// around for diagnostic/partial-output use; callers must still treat it as
/// untrusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeError {
    pub kind: ErrorKind,
    pub written: usize,
}

impl DecodeError {
    pub(crate) fn new(kind: ErrorKind, written: usize) -> Self {
        DecodeError { kind, written }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (after writing {} bytes)", self.kind, self.written)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecodeError {}
