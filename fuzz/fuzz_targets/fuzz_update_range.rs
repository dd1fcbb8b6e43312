#![no_main]
use crc64_xz::{crc64, Crc64};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 16 {
        return;
    }

    // First 16 bytes are an arbitrary offset and length
    let offset = u64::from_le_bytes(data[0..8].try_into().unwrap()) as usize;
    let length = u64::from_le_bytes(data[8..16].try_into().unwrap()) as usize;
    let buf = &data[16..];

    let mut crc = Crc64::new();
    let in_bounds = offset
        .checked_add(length)
        .is_some_and(|end| end <= buf.len());

    match crc.update_range(buf, offset, length) {
        Ok(()) => {
            assert!(in_bounds);
            assert_eq!(crc.value(), crc64(&buf[offset..offset + length]));
        }
        Err(_) => {
            assert!(!in_bounds);
            assert_eq!(crc, Crc64::new());
        }
    }
});
