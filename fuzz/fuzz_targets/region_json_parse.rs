//! Fuzz target for region file parsing.
//!
//! Feeds arbitrary bytes to the region JSON parser, checking for panics,
//! crashes, or hangs.

#![no_main]

use libfuzzer_sys::fuzz_target;
use regionmask::source::io_json::from_json_slice;

fuzz_target!(|data: &[u8]| {
    if data.len() > 1024 * 1024 {
        return;
    }

    let _ = from_json_slice(data);
});
