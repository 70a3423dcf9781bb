//! Fuzz target for validation and rasterization of parsed regions.
//!
//! Extreme but finite coordinates must be rejected or clamped, never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use regionmask::pipeline::fuzz_build_mask;

fuzz_target!(|data: &[u8]| {
    if data.len() > 64 * 1024 {
        return;
    }

    let _ = fuzz_build_mask(data);
});
