#![no_main]
use libfuzzer_sys::fuzz_target;

use lzsa::lzsa2::decompress_block;

fuzz_target!(|data: &[u8]| {
    let mut out = vec![0u8; data.len().saturating_mul(64).min(1 << 20)];
    let _ = decompress_block(data, &mut out);
});
