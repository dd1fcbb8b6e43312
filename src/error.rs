//! Error types for checksum computation.
//!
//! The engine itself can only fail on a bad bulk range; the remaining
//! variants come from byte-range sources in [`file_media`](crate::file_media).
//!
//! | Category | Errors | Description |
//! |----------|--------|-------------|
//! | Range | [`OutOfBounds`] | Bulk update range outside the buffer |
//! | Media | [`InvalidInterval`], [`InvalidOffset`] | Bad read interval |
//! | I/O | [`Io`] | Read errors |
//!
//! [`OutOfBounds`]: Crc64Error::OutOfBounds
//! [`InvalidInterval`]: Crc64Error::InvalidInterval
//! [`InvalidOffset`]: Crc64Error::InvalidOffset
//! [`Io`]: Crc64Error::Io

use std::fmt;
use std::io;

/// Error type for checksum operations.
#[derive(Debug)]
pub enum Crc64Error {
    /// `offset + length` runs past the end of the buffer.
    ///
    /// Returned by [`Crc64::update_range`](crate::Crc64::update_range); the
    /// checksum is left untouched.
    OutOfBounds {
        /// Requested start of the range.
        offset: usize,
        /// Requested number of bytes.
        length: usize,
        /// Length of the buffer that was passed.
        available: usize,
    },

    /// A read interval whose start lies after its end.
    InvalidInterval {
        /// First byte of the interval.
        start: u64,
        /// Last byte of the interval (inclusive).
        end: u64,
    },

    /// A read interval reaching beyond the end of the media.
    InvalidOffset {
        /// The requested offset.
        offset: u64,
        /// The actual media length.
        length: u64,
    },

    /// An I/O error occurred.
    Io(io::Error),
}

impl fmt::Display for Crc64Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                offset,
                length,
                available,
            } => write!(
                f,
                "Range out of bounds: offset {} + length {} exceeds buffer of {} bytes",
                offset, length, available
            ),
            Self::InvalidInterval { start, end } => {
                write!(f, "Invalid interval: start {} is after end {}", start, end)
            }
            Self::InvalidOffset { offset, length } => {
                write!(f, "Invalid offset: {} (media length: {})", offset, length)
            }
            Self::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for Crc64Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Crc64Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

pub type Result<T> = std::result::Result<T, Crc64Error>;
