//! The LZSA2 block decoder.
//!
//! LZSA2 layers a nibble-interleaved escape ladder and four match-offset
//! modes (one of which doubles as "repeat the previous match's offset") on
//! top of the same token/literal/match skeleton as LZSA1. A block is a
//! sequence of commands followed by an EOD sentinel: a command whose
//! match-length seed is 7, whose nibble escape is 15, and whose following
//! escape byte is any value other than the in-band codes (≤231, 233) — the
//! canonical encoder always uses 232.

use crate::error::{DecodeError, ErrorKind};
use crate::input::InputCursor;
use crate::nibble::NibbleStream;
use crate::output::OutputCursor;
use crate::token::{Lzsa2Token, OffsetMode};

const MATCH_MIN: usize = 2;

#[inline]
fn literal_length(
    seed: u8,
    nibbles: &mut NibbleStream,
    input: &mut InputCursor,
) -> Result<usize, ErrorKind> {
    let mut len = seed as usize;
    if seed == 3 {
        let n = nibbles.next_nibble(input)?;
        if n < 15 {
            len += n as usize;
        } else {
            let byte = input.read_u8()?;
            len = match byte {
                0..=237 => 3 + 15 + byte as usize,
                239 => {
                    let a = input.read_u8()?;
                    let b = input.read_u8()?;
                    (a as usize) | ((b as usize) << 8)
                }
                // 238 is reserved by the reference decoder's decision tree
                // and never emitted by the canonical encoder; so is any
                // value above 239.
                _ => return Err(ErrorKind::MalformedEscape),
            };
        }
    }
    Ok(len)
}

/// Resolves the final match length. Returns `None` on the EOD sentinel.
#[inline]
fn match_length(
    seed: u8,
    nibbles: &mut NibbleStream,
    input: &mut InputCursor,
) -> Result<Option<usize>, ErrorKind> {
    if seed < 7 {
        return Ok(Some(seed as usize + MATCH_MIN));
    }
    let n = nibbles.next_nibble(input)?;
    if n < 15 {
        return Ok(Some(7 + n as usize + MATCH_MIN));
    }
    let byte = input.read_u8()?;
    let len = match byte {
        0..=231 => 7 + 15 + MATCH_MIN + byte as usize,
        233 => {
            let a = input.read_u8()?;
            let b = input.read_u8()?;
            (a as usize) | ((b as usize) << 8)
        }
        // 232 is the canonical EOD byte; every other value in this branch
        // (234..=255, and the non-canonical 232-adjacent values) is also
        // treated as EOD, preserving the reference decoder's `else` branch
        // bit-for-bit.
        _ => return Ok(None),
    };
    Ok(Some(len))
}

#[inline]
fn match_offset(
    token: &Lzsa2Token,
    nibbles: &mut NibbleStream,
    input: &mut InputCursor,
    last_offset: &mut i32,
) -> Result<i32, ErrorKind> {
    let z_inv = u16::from(!token.z);
    let offset = match token.offset_mode {
        OffsetMode::Bits5 => {
            let n = nibbles.next_nibble(input)? as u16;
            let assembled = (n << 1) | z_inv | 0xFFE0;
            assembled as i16 as i32
        }
        OffsetMode::Bits9 => {
            let b = input.read_u8()? as u16;
            let assembled = b | (z_inv << 8) | 0xFE00;
            assembled as i16 as i32
        }
        OffsetMode::Bits13 => {
            let n = nibbles.next_nibble(input)? as u16;
            let b = input.read_u8()? as u16;
            let assembled = (n << 9) | (z_inv << 8) | b | 0xE000;
            (assembled as i16 as i32) - 512
        }
        OffsetMode::Bits16OrRepeat => {
            if token.z {
                *last_offset
            } else {
                let hi = input.read_u8()? as u16;
                let lo = input.read_u8()? as u16;
                let assembled = (hi << 8) | lo;
                assembled as i16 as i32
            }
        }
    };
    *last_offset = offset;
    Ok(offset)
}

/// Decodes one LZSA2 block from `input` into `output`, returning the number
/// of bytes written.
pub fn decompress_block(input: &[u8], output: &mut [u8]) -> Result<usize, DecodeError> {
    let mut input = InputCursor::new(input);
    let mut output = OutputCursor::new(output);
    let mut nibbles = NibbleStream::new();
    let mut last_offset: i32 = 0;

    loop {
        let result = (|| -> Result<bool, ErrorKind> {
            let token = Lzsa2Token::parse(input.read_u8()?);

            let lit_len = literal_length(token.lit_len_seed, &mut nibbles, &mut input)?;
            output.copy_literals(&mut input, lit_len)?;

            let offset = match_offset(&token, &mut nibbles, &mut input, &mut last_offset)?;

            match match_length(token.match_len_seed, &mut nibbles, &mut input)? {
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

    /// Decodes one LZSA2 block into a freshly allocated `Vec` of exactly
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
