//! FileMedia - CRC-64 over byte ranges of local files.
//!
//! Ranges are streamed through a fixed buffer into a [`Crc64`], never
//! loaded whole.

use crate::crc64::Crc64;
use crate::error::{Crc64Error, Result};
use std::io::{self, Read, Seek, SeekFrom};

/// Read buffer size for the async path.
#[cfg(feature = "async")]
const CHUNK_SIZE: usize = 64 * 1024;

/// Interval for reading a byte range. `end` is inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReadInterval {
    start: u64,
    end: u64,
}

impl ReadInterval {
    pub fn new(start: u64, end: u64) -> Result<Self> {
        if start > end {
            return Err(Crc64Error::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn end(&self) -> u64 {
        self.end
    }

    /// Number of bytes covered, saturating at `u64::MAX` for `0..=u64::MAX`.
    pub fn byte_count(&self) -> u64 {
        self.end
            .checked_sub(self.start)
            .map_or(0, |span| span.saturating_add(1))
    }

    /// Reject intervals that are inverted or reach past `length`.
    fn check(&self, length: u64) -> Result<()> {
        if self.start > self.end {
            return Err(Crc64Error::InvalidInterval {
                start: self.start,
                end: self.end,
            });
        }
        if self.end >= length {
            return Err(Crc64Error::InvalidOffset {
                offset: self.end,
                length,
            });
        }
        Ok(())
    }
}

fn short_read() -> Crc64Error {
    // File shrank since metadata was read
    io::Error::from(io::ErrorKind::UnexpectedEof).into()
}

/// Local file implementation.
#[derive(Debug, Clone)]
pub struct LocalFileMedia {
    path: String,
    name: String,
    length: u64,
}

impl LocalFileMedia {
    pub fn new(path: &str) -> io::Result<Self> {
        let metadata = std::fs::metadata(path)?;
        let name = std::path::Path::new(path)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();

        Ok(Self {
            path: path.to_string(),
            name,
            length: metadata.len(),
        })
    }

    pub fn length(&self) -> u64 {
        self.length
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Interval covering the whole file, `None` when it is empty.
    fn whole(&self) -> Option<ReadInterval> {
        self.length.checked_sub(1).map(|end| ReadInterval { start: 0, end })
    }

    /// CRC-64 of a byte range.
    pub fn checksum_range_sync(&self, interval: ReadInterval) -> Result<u64> {
        interval.check(self.length)?;
        let mut file = std::fs::File::open(&self.path)?;
        file.seek(SeekFrom::Start(interval.start))?;

        let mut crc = Crc64::new();
        let copied = io::copy(&mut file.take(interval.byte_count()), &mut crc)?;
        if copied != interval.byte_count() {
            return Err(short_read());
        }
        Ok(crc.value())
    }

    /// CRC-64 of the whole file.
    pub fn checksum_sync(&self) -> Result<u64> {
        match self.whole() {
            Some(interval) => self.checksum_range_sync(interval),
            None => Ok(Crc64::new().value()),
        }
    }

    /// Async CRC-64 of a byte range.
    #[cfg(feature = "async")]
    #[cfg_attr(docsrs, doc(cfg(feature = "async")))]
    pub async fn checksum_range(&self, interval: ReadInterval) -> Result<u64> {
        use tokio::io::{AsyncReadExt, AsyncSeekExt};

        interval.check(self.length)?;
        let mut file = tokio::fs::File::open(&self.path).await?;
        file.seek(SeekFrom::Start(interval.start)).await?;

        let mut reader = file.take(interval.byte_count());
        let mut buffer = vec![0u8; CHUNK_SIZE];
        let mut crc = Crc64::new();
        let mut copied = 0u64;
        loop {
            let n = reader.read(&mut buffer).await?;
            if n == 0 {
                break;
            }
            crc.update(&buffer[..n]);
            copied += n as u64;
        }
        if copied != interval.byte_count() {
            return Err(short_read());
        }
        Ok(crc.value())
    }

    /// Async CRC-64 of the whole file.
    #[cfg(feature = "async")]
    #[cfg_attr(docsrs, doc(cfg(feature = "async")))]
    pub async fn checksum(&self) -> Result<u64> {
        match self.whole() {
            Some(interval) => self.checksum_range(interval).await,
            None => Ok(Crc64::new().value()),
        }
    }
}
