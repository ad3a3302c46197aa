#![no_main]

use std::hint::black_box;

use libfuzzer_sys::fuzz_target;
use uvarint32::UVarint32Buf;

fuzz_target!(|data: &[u8]| {
    // errors are ok, panics are not
    let mut src = data;
    let iter = src.iter_uvarint32::<i32>();
    for v in iter {
        let _ = black_box(v);
    }
});
