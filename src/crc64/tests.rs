//! CRC-64 engine tests.
//!
//! Known-answer vectors plus property checks against `crc64fast`.

use super::*;
use proptest::prelude::*;

fn reference(data: &[u8]) -> u64 {
    let mut digest = crc64fast::Digest::new();
    digest.write(data);
    digest.sum64()
}

#[test]
fn test_crc64() {
    assert_eq!(crc64(b""), 0x0000000000000000);
    assert_eq!(crc64(b"123456789"), 0x995DC9BBDF1939FA);
    assert_eq!(crc64(b"a"), 0x330284772E652B05);
    assert_eq!(crc64(&[0u8]), 0x1FADA17364673F59);
    assert_eq!(crc64(&[0u8; 8]), 0xB66A73654282CAC0);
    assert_eq!(
        crc64(b"The quick brown fox jumps over the lazy dog"),
        0x5B5EB8C2E54AA1C4
    );
}

#[test]
fn test_empty_matches_reference() {
    assert_eq!(Crc64::new().value(), reference(b""));
}

#[test]
fn test_table_entries() {
    let table = Crc64::table();
    assert_eq!(table[0], 0);
    assert_eq!(table[1], 0xB32E4CBE03A75F6F);
    // 0x80 reaches the low bit on the final shift
    assert_eq!(table[128], POLY);
    assert_eq!(table[255], 0xE0ADA17364673F59);
}

#[test]
fn test_table_is_deterministic() {
    let first = build_table();
    let second = build_table();
    assert_eq!(first, second);
    assert_eq!(&first, Crc64::table());
}

#[test]
fn test_value_is_idempotent() {
    let mut crc = Crc64::new();
    crc.update(b"1234");
    let a = crc.value();
    let b = crc.value();
    assert_eq!(a, b);

    // Reading must not disturb further updates
    crc.update(b"56789");
    assert_eq!(crc.value(), 0x995DC9BBDF1939FA);
}

#[test]
fn test_order_matters() {
    assert_ne!(crc64(b"ab"), crc64(b"ba"));
}

#[test]
fn test_leading_zeros_change_value() {
    assert_ne!(crc64(b"\x00abc"), crc64(b"abc"));
    assert_ne!(crc64(b"\x00"), crc64(b""));
}

#[test]
fn test_update_range() {
    let buf = b"xx123456789yy";
    let mut crc = Crc64::new();
    crc.update_range(buf, 2, 9).unwrap();
    assert_eq!(crc.value(), 0x995DC9BBDF1939FA);

    let mut empty = Crc64::new();
    empty.update_range(buf, buf.len(), 0).unwrap();
    assert_eq!(empty.value(), 0);
}

#[test]
fn test_update_range_out_of_bounds() {
    let buf = [1u8, 2, 3, 4];
    let mut crc = Crc64::new();
    crc.update(b"abc");
    let before = crc;

    let err = crc.update_range(&buf, 2, 3).unwrap_err();
    assert!(matches!(
        err,
        Crc64Error::OutOfBounds {
            offset: 2,
            length: 3,
            available: 4
        }
    ));
    assert_eq!(crc, before);

    assert!(crc.update_range(&buf, 5, 0).is_err());
    // offset + length overflows usize
    assert!(crc.update_range(&buf, 1, usize::MAX).is_err());
    assert_eq!(crc, before);
}

#[test]
fn test_resume() {
    let partial = crc64(b"12345");
    let mut crc = Crc64::resume(partial);
    crc.update(b"6789");
    assert_eq!(crc.value(), 0x995DC9BBDF1939FA);
    assert_eq!(Crc64::resume(0), Crc64::new());
}

#[test]
fn test_reset() {
    let mut crc = Crc64::new();
    crc.update(b"garbage");
    crc.reset();
    assert_eq!(crc, Crc64::default());
    crc.update(b"123456789");
    assert_eq!(crc.value(), 0x995DC9BBDF1939FA);
}

#[test]
fn test_hasher() {
    let mut crc = Crc64::new();
    Hasher::write(&mut crc, b"123456789");
    assert_eq!(crc.finish(), 0x995DC9BBDF1939FA);
}

#[test]
fn test_io_write() {
    let mut crc = Crc64::new();
    let mut reader: &[u8] = b"123456789";
    let copied = io::copy(&mut reader, &mut crc).unwrap();
    assert_eq!(copied, 9);
    assert_eq!(crc.value(), 0x995DC9BBDF1939FA);
}

proptest! {
    #[test]
    fn single_byte_matches_bulk(data in proptest::collection::vec(any::<u8>(), 0..=2048)) {
        let mut bytewise = Crc64::new();
        for &b in &data {
            bytewise.update_byte(b);
        }
        let mut bulk = Crc64::new();
        bulk.update(&data);
        prop_assert_eq!(bytewise.value(), bulk.value());
    }

    #[test]
    fn split_matches_oneshot(data in proptest::collection::vec(any::<u8>(), 0..=2048), split in any::<usize>()) {
        let split = split % (data.len() + 1);
        let (a, b) = data.split_at(split);

        let mut crc = Crc64::new();
        crc.update(a);
        for &byte in b {
            crc.update_byte(byte);
        }
        prop_assert_eq!(crc.value(), crc64(&data));

        let mut ranged = Crc64::new();
        ranged.update_range(&data, 0, split).unwrap();
        ranged.update_range(&data, split, data.len() - split).unwrap();
        prop_assert_eq!(ranged.value(), crc64(&data));

        let mut resumed = Crc64::resume(crc64(a));
        resumed.update(b);
        prop_assert_eq!(resumed.value(), crc64(&data));
    }

    #[test]
    fn chunked_matches_crc64fast(data in proptest::collection::vec(any::<u8>(), 0..=4096), chunk in 1usize..=257) {
        let mut ours = Crc64::new();
        for part in data.chunks(chunk) {
            ours.update(part);
        }
        prop_assert_eq!(ours.value(), reference(&data));
    }
}
