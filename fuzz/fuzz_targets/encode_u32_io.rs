#![no_main]

use libfuzzer_sys::fuzz_target;
use uvarint32::{read_uvarint32, write_uvarint32};

fuzz_target!(|data: &[u8]| {
    let mut dst = vec![];
    for chunk in data.chunks_exact(4) {
        let n = i32::from_le_bytes(chunk.try_into().unwrap());
        write_uvarint32(n, &mut dst).unwrap();
    }

    let mut src = &dst[..];
    for chunk in data.chunks_exact(4) {
        let n = i32::from_le_bytes(chunk.try_into().unwrap());
        assert_eq!(read_uvarint32::<i32>(&mut src).unwrap(), n);
    }
});
