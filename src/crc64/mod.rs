//! CRC-64 calculation for archive integrity checks.
//!
//! Uses the XZ flavour of CRC-64: the ECMA-182 polynomial processed
//! least-significant-bit first, with an all-ones preset and an inverted
//! output.
//!
//! ```
//! use crc64_xz::Crc64;
//!
//! let mut crc = Crc64::new();
//! crc.update(b"12345");
//! crc.update(b"6789");
//! assert_eq!(crc.value(), 0x995DC9BBDF1939FA);
//! ```

use crate::error::{Crc64Error, Result};
use std::hash::Hasher;
use std::io;

/// Reflected ECMA-182 polynomial (normal form 0x42F0E1EBA9EA3693).
pub const POLY: u64 = 0xC96C5795D7870F42;

/// Register preset and output mask.
const INIT: u64 = !0;

/// Build the 256-entry lookup table for [`POLY`].
///
/// Evaluated at compile time for [`Crc64::table`]; callable at runtime to
/// recompute the same table.
pub const fn build_table() -> [u64; 256] {
    let mut table = [0u64; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = i as u64;
        let mut j = 0;
        while j < 8 {
            if crc & 1 != 0 {
                crc = (crc >> 1) ^ POLY;
            } else {
                crc >>= 1;
            }
            j += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

static CRC64_TABLE: [u64; 256] = build_table();

#[inline(always)]
fn step(crc: u64, byte: u8) -> u64 {
    CRC64_TABLE[((crc ^ byte as u64) & 0xFF) as usize] ^ (crc >> 8)
}

/// Calculate CRC-64 of data in one shot.
pub fn crc64(data: &[u8]) -> u64 {
    let mut crc = Crc64::new();
    crc.update(data);
    crc.value()
}

/// Running CRC-64 checksum.
///
/// Holds only the register; the table is shared by every instance.
/// Reading [`value`](Self::value) does not consume or alter the state, so
/// updates may continue afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Crc64 {
    crc: u64,
}

impl Crc64 {
    pub const fn new() -> Self {
        Self { crc: INIT }
    }

    /// Continue a checksum from a previously extracted [`value`](Self::value).
    pub const fn resume(value: u64) -> Self {
        Self { crc: !value }
    }

    /// The shared lookup table.
    pub fn table() -> &'static [u64; 256] {
        &CRC64_TABLE
    }

    /// Fold a single byte into the register.
    #[inline]
    pub fn update_byte(&mut self, byte: u8) {
        self.crc = step(self.crc, byte);
    }

    /// Fold every byte of `data` into the register, in order.
    #[inline]
    pub fn update(&mut self, data: &[u8]) {
        let mut crc = self.crc;
        for &byte in data {
            crc = step(crc, byte);
        }
        self.crc = crc;
    }

    /// Fold `data[offset..offset + length]` into the register.
    ///
    /// A range outside `data` is rejected with
    /// [`Crc64Error::OutOfBounds`] and the register is left unchanged.
    pub fn update_range(&mut self, data: &[u8], offset: usize, length: usize) -> Result<()> {
        let range = offset
            .checked_add(length)
            .filter(|&end| end <= data.len())
            .map(|end| &data[offset..end])
            .ok_or(Crc64Error::OutOfBounds {
                offset,
                length,
                available: data.len(),
            })?;
        self.update(range);
        Ok(())
    }

    /// Finalized checksum (complement of the register).
    #[inline]
    pub const fn value(&self) -> u64 {
        !self.crc
    }

    /// Return to the freshly constructed state.
    pub fn reset(&mut self) {
        self.crc = INIT;
    }
}

impl Default for Crc64 {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for Crc64 {
    fn finish(&self) -> u64 {
        self.value()
    }

    fn write(&mut self, bytes: &[u8]) {
        self.update(bytes);
    }
}

impl io::Write for Crc64 {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests;
