// Copyright 2022 The Draco Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use byteorder::{LittleEndian, WriteBytesExt};

use crate::status::Status;

/// Byte-aligned output buffer for the Draco bitstream.
///
/// All multi-byte values are little endian.
#[derive(Debug, Clone, Default)]
pub struct EncoderBuffer {
    buffer: Vec<u8>,
}

impl EncoderBuffer {
    /// Create a new empty encoder buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer with initial capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
        }
    }

    /// Get the current buffer data
    pub fn data(&self) -> &[u8] {
        &self.buffer
    }

    pub fn size(&self) -> usize {
        self.buffer.len()
    }

    /// Takes the encoded bytes out of the buffer.
    pub fn into_data(self) -> Vec<u8> {
        self.buffer
    }

    /// Encode raw bytes
    pub fn encode_data(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
    }

    pub fn encode_u8(&mut self, value: u8) -> Status {
        self.buffer.write_u8(value)?;
        Ok(())
    }

    pub fn encode_u16(&mut self, value: u16) -> Status {
        self.buffer.write_u16::<LittleEndian>(value)?;
        Ok(())
    }

    pub fn encode_u32(&mut self, value: u32) -> Status {
        self.buffer.write_u32::<LittleEndian>(value)?;
        Ok(())
    }

    /// Unsigned LEB128, seven bits per byte, high bit set on all but the last byte.
    pub fn encode_varint(&mut self, mut value: u64) -> Status {
        loop {
            let byte = (value & 0x7f) as u8;
            value >>= 7;
            if value == 0 {
                self.buffer.write_u8(byte)?;
                return Ok(());
            }
            self.buffer.write_u8(byte | 0x80)?;
        }
    }
}
