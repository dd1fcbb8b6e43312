#![no_main]
use crc64_xz::{crc64, Crc64};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // First byte picks the split point
    let body = &data[1..];
    let split = data[0] as usize % (body.len() + 1);
    let (a, b) = body.split_at(split);

    let oneshot = crc64(body);

    let mut chunked = Crc64::new();
    chunked.update(a);
    chunked.update(b);
    assert_eq!(chunked.value(), oneshot, "chunked mismatch");

    let mut bytewise = Crc64::new();
    for &byte in body {
        bytewise.update_byte(byte);
    }
    assert_eq!(bytewise.value(), oneshot, "bytewise mismatch");

    let mut resumed = Crc64::resume(crc64(a));
    resumed.update(b);
    assert_eq!(resumed.value(), oneshot, "resume mismatch");
});
