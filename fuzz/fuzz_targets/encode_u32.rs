#![no_main]

use libfuzzer_sys::fuzz_target;
use uvarint32::{UVarint32, UVarint32Buf, UVarint32BufMut};

fuzz_target!(|data: &[u8]| {
    let mut dst = vec![];
    let mut expected_len = 0;
    for chunk in data.chunks_exact(4) {
        let mut buf = [0; 4];
        buf.copy_from_slice(chunk);
        let n = u32::from_le_bytes(buf);
        expected_len += n.uvarint32_len();
        dst.put_uvarint32(n);
    }
    assert_eq!(dst.len(), expected_len);

    let mut src = &dst[..];
    for chunk in data.chunks_exact(4) {
        let mut buf = [0; 4];
        buf.copy_from_slice(chunk);
        let n = u32::from_le_bytes(buf);
        assert_eq!(src.get_uvarint32::<u32>().unwrap(), n);
    }
    assert!(src.is_empty());
});
