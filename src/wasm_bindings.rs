//! WASM bindings for crc64-xz.
//!
//! Provides a browser-compatible checksum API. `u64` values cross the
//! boundary as JavaScript `BigInt`.

use wasm_bindgen::prelude::*;

use crate::crc64::Crc64;

/// CRC-64 of a buffer in one shot.
#[wasm_bindgen]
pub fn crc64(data: &[u8]) -> u64 {
    crate::crc64::crc64(data)
}

/// WASM-compatible running checksum.
#[wasm_bindgen]
pub struct WasmCrc64 {
    inner: Crc64,
}

#[wasm_bindgen]
impl WasmCrc64 {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { inner: Crc64::new() }
    }

    /// Feed a chunk of data.
    #[wasm_bindgen]
    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    /// Feed `data[offset..offset + length]`.
    #[wasm_bindgen(js_name = updateRange)]
    pub fn update_range(
        &mut self,
        data: &[u8],
        offset: usize,
        length: usize,
    ) -> Result<(), JsError> {
        self.inner
            .update_range(data, offset, length)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Current checksum value.
    #[wasm_bindgen]
    pub fn value(&self) -> u64 {
        self.inner.value()
    }

    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.inner.reset();
    }
}
