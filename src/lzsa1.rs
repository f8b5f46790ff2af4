//! The LZSA1 block decoder.
//!
//! A block is a sequence of commands (token + optional escapes, literal
//! bytes, match offset, optional escapes) followed by an EOD sentinel: a
//! command with match-length seed 15, escape byte 238, and a little-endian
//! 16-bit length of 0 (`00 EE 00 00` at the tail, preceded by whatever token
//! the EOD command itself carries).

use crate::error::{DecodeError, ErrorKind};
use crate::input::InputCursor;
use crate::output::OutputCursor;
use crate::token::Lzsa1Token;

const MATCH_MIN: usize = 3;

/// Resolves the final literal length from its token seed, consuming escape
/// bytes as needed.
#[inline]
fn literal_length(seed: u8, input: &mut InputCursor) -> Result<usize, ErrorKind> {
    let mut len = seed as usize;
    if seed == 7 {
        let n = input.read_u8()?;
        len = match n {
            250 => {
                let a = input.read_u8()?;
                256 + a as usize
            }
            249 => {
                let a = input.read_u8()?;
                let b = input.read_u8()?;
                (a as usize) | ((b as usize) << 8)
            }
            _ => 7 + n as usize,
        };
    }
    Ok(len)
}

/// Resolves the final match length from its token seed. Returns `None` on
/// the EOD sentinel (a two-byte zero length behind escape byte 238).
#[inline]
fn match_length(seed: u8, input: &mut InputCursor) -> Result<Option<usize>, ErrorKind> {
    if seed < 15 {
        return Ok(Some(seed as usize + MATCH_MIN));
    }
    let n = input.read_u8()?;
    let len = match n {
        239 => {
            let a = input.read_u8()?;
            256 + a as usize
        }
        238 => {
            let a = input.read_u8()?;
            let b = input.read_u8()?;
            let len = (a as usize) | ((b as usize) << 8);
            if len == 0 {
                return Ok(None);
            }
            len
        }
        _ => 15 + MATCH_MIN + n as usize,
    };
    Ok(Some(len))
}

/// Resolves the signed match offset. A low byte is always present; the
/// token's top bit selects whether a high byte follows or is implicitly
/// 0xFF (a small negative offset in `[-256, -1]`).
#[inline]
fn match_offset(wide: bool, input: &mut InputCursor) -> Result<i32, ErrorKind> {
    let lo = input.read_u8()? as u16;
    let raw = if wide {
        let hi = input.read_u8()? as u16;
        (hi << 8) | lo
    } else {
        0xFF00 | lo
    };
    Ok(raw as i16 as i32)
}

/// Decodes one LZSA1 block from `input` into `output`, returning the number
/// of bytes written.
pub fn decompress_block(input: &[u8], output: &mut [u8]) -> Result<usize, DecodeError> {
    let mut input = InputCursor::new(input);
    let mut output = OutputCursor::new(output);

    loop {
        let result = (|| -> Result<bool, ErrorKind> {
            let token = Lzsa1Token::parse(input.read_u8()?);

            let lit_len = literal_length(token.lit_len_seed, &mut input)?;
            output.copy_literals(&mut input, lit_len)?;

            let offset = match_offset(token.wide_offset, &mut input)?;

            match match_length(token.match_len_seed, &mut input)? {
                Some(len) => {
                    output.copy_match(offset, len)?;
                    Ok(true)
                }
                None => Ok(false),
            }
        })();

        match result {
            Ok(true) => continue,
            Ok(false) => return Ok(output.into_pos()),
            Err(kind) => return Err(DecodeError::new(kind, output.pos())),
        }
    }
}

#[cfg(feature = "alloc")]
mod alloc_api {
    use super::decompress_block;
    use crate::error::DecodeError;
    #[cfg(not(feature = "std"))]
    use alloc::{vec, vec::Vec};

    /// Decodes one LZSA1 block into a freshly allocated `Vec` of exactly
    /// `uncompressed_size` bytes.
    pub fn decompress(input: &[u8], uncompressed_size: usize) -> Result<Vec<u8>, DecodeError> {
        let mut output = vec![0u8; uncompressed_size];
        let written = decompress_block(input, &mut output)?;
        output.truncate(written);
        Ok(output)
    }
}
#[cfg(feature = "alloc")]
pub use alloc_api::decompress;
