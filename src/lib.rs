/*! Block-level decoders for the LZSA1 and LZSA2 compressed formats.

LZSA is a family of compact LZ77-style formats designed for decoding on
constrained 8/16-bit microcontrollers as well as modern 64-bit hosts; the
canonical use is in-place decompression of firmware, assets, or messages
whose compressed form is loaded from flash/ROM. This crate implements only
the decoders: given a compressed block produced by the canonical encoder, it
reconstructs the original bytes into a caller-supplied output buffer.

# Examples
```
use lzsa::lzsa1;
let input = [0x3F, b'a', b'4', b'9', 0x00, 0xEE, 0x00, 0x00];
let mut out = [0u8; 3];
let n = lzsa1::decompress_block(&input, &mut out).unwrap();
assert_eq!(&out[..n], b"a49");
```

# Feature Flags
- `std` (default): enables `std::error::Error` and the allocating
  `decompress` convenience wrappers.
- `alloc`: enables the allocating `decompress` wrappers without requiring
  `std`.
- `unchecked`: skips the bounds checks on every read/write, matching the
  reference decoder's behavior on trusted, pre-validated input. Off by
  default; corrupted input can trigger undefined behavior with this feature
  enabled, so only use it once the input has been otherwise validated.
*/
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

mod error;
mod input;
mod nibble;
mod output;
mod token;

pub mod lzsa1;
pub mod lzsa2;

pub use error::{DecodeError, ErrorKind};
