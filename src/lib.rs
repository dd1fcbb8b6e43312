//! CRC-64/XZ checksums for archive integrity checks.
//!
//! Table-driven CRC-64 using the reflected ECMA-182 polynomial, as used by
//! the XZ container format. The 256-entry table is evaluated at compile time
//! and shared by every [`Crc64`] instance.
//!
//! ## Features
//! - Core library has **zero dependencies**
//! - `async` - Async file checksums with tokio
//! - `wasm` - Browser WASM bindings

mod crc64;
pub mod error;
pub mod file_media;

#[cfg(feature = "wasm")]
mod wasm_bindings;

pub use crate::crc64::{build_table, crc64, Crc64, POLY};
pub use error::Crc64Error;
pub use file_media::{LocalFileMedia, ReadInterval};

// Re-export WASM bindings when feature is enabled
#[cfg(feature = "wasm")]
pub use wasm_bindings::WasmCrc64;
