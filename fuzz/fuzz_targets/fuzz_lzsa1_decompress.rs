#![no_main]
use libfuzzer_sys::fuzz_target;

use lzsa::lzsa1::decompress_block;

fuzz_target!(|data: &[u8]| {
    // An arbitrary byte string is never valid compressed input, but a
    // bounds-checked decoder must report an error rather than panic or read
    // out of bounds on any input, no matter how it mis-parses the token
    // stream.
    let mut out = vec![0u8; data.len().saturating_mul(64).min(1 << 20)];
    let _ = decompress_block(data, &mut out);
});
