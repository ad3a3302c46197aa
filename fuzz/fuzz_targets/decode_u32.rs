#![no_main]

use libfuzzer_sys::fuzz_target;
use uvarint32::{UVarint32, UVarint32Buf, MAX_DECODE_LEN};

fuzz_target!(|data: &[u8]| {
    // slice and Buf decoding must agree on the value and the bytes consumed
    let mut src = data;
    while !src.is_empty() {
        let from_slice = u32::decode_uvarint32(src);
        let before = src.len();
        let from_buf = src.get_uvarint32::<u32>();
        match (from_slice, from_buf) {
            (Ok((v, len)), Ok(w)) => {
                assert_eq!(v, w);
                assert!(len <= MAX_DECODE_LEN);
                assert_eq!(before - src.len(), len);
            }
            (Err(a), Err(b)) => {
                assert_eq!(a, b);
                break;
            }
            (a, b) => panic!("slice {:?} != buf {:?}", a, b),
        }
    }
});
