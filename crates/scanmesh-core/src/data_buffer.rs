use byteorder::{ByteOrder, LittleEndian};

/// Raw little-endian storage behind an attribute.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DataBuffer {
    data: Vec<u8>,
}

impl DataBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resize(&mut self, new_size: usize) {
        self.data.resize(new_size, 0);
    }

    /// Writes `values` as consecutive little-endian `f32`s starting at `byte_pos`.
    pub fn write_f32s(&mut self, byte_pos: usize, values: &[f32]) {
        let end = byte_pos + values.len() * 4;
        if end > self.data.len() {
            self.data.resize(end, 0);
        }
        LittleEndian::write_f32_into(values, &mut self.data[byte_pos..end]);
    }

    /// Reads `out.len()` little-endian `f32`s from `byte_pos`. Returns false
    /// when the range is out of bounds.
    pub fn read_f32s(&self, byte_pos: usize, out: &mut [f32]) -> bool {
        let end = byte_pos + out.len() * 4;
        if end > self.data.len() {
            return false;
        }
        LittleEndian::read_f32_into(&self.data[byte_pos..end], out);
        true
    }

    pub fn data_size(&self) -> usize {
        self.data.len()
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f32_values_are_little_endian() {
        let mut buffer = DataBuffer::new();
        buffer.write_f32s(0, &[1.0, -2.5]);
        assert_eq!(&buffer.data()[0..4], &1.0f32.to_le_bytes());

        let mut out = [0.0f32; 2];
        assert!(buffer.read_f32s(0, &mut out));
        assert_eq!(out, [1.0, -2.5]);
        assert!(!buffer.read_f32s(4, &mut out));
    }

    #[test]
    fn f32_writes_grow_the_buffer() {
        let mut buffer = DataBuffer::new();
        buffer.write_f32s(8, &[3.0]);
        assert_eq!(buffer.data_size(), 12);
        assert_eq!(&buffer.data()[0..8], &[0; 8]);
    }
}
