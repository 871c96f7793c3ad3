use crate::data_buffer::DataBuffer;
use crate::draco_types::DataType;
use crate::geometry_indices::{AttributeValueIndex, PointIndex};

/// Semantic of an attribute. Discriminants are the bitstream values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryAttributeType {
    Invalid = -1,
    Position = 0,
    Normal,
    Color,
    TexCoord,
    Generic,
}

/// A typed per-point attribute with identity point-to-value mapping.
#[derive(Debug, Clone)]
pub struct PointAttribute {
    attribute_type: GeometryAttributeType,
    data_type: DataType,
    num_components: u8,
    normalized: bool,
    unique_id: u32,
    buffer: DataBuffer,
    num_unique_entries: usize,
}

impl Default for PointAttribute {
    fn default() -> Self {
        Self {
            attribute_type: GeometryAttributeType::Invalid,
            data_type: DataType::Invalid,
            num_components: 0,
            normalized: false,
            unique_id: 0,
            buffer: DataBuffer::new(),
            num_unique_entries: 0,
        }
    }
}

impl PointAttribute {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the layout and allocates zeroed storage for `num_attribute_values` entries.
    pub fn init(
        &mut self,
        attribute_type: GeometryAttributeType,
        num_components: u8,
        data_type: DataType,
        normalized: bool,
        num_attribute_values: usize,
    ) {
        self.attribute_type = attribute_type;
        self.num_components = num_components;
        self.data_type = data_type;
        self.normalized = normalized;
        self.buffer.resize(num_attribute_values * self.byte_stride());
        self.num_unique_entries = num_attribute_values;
    }

    pub fn mapped_index(&self, point_index: PointIndex) -> AttributeValueIndex {
        AttributeValueIndex(point_index.0)
    }

    /// Stores one `Float32` entry. Extra components are ignored, missing ones
    /// are left untouched.
    pub fn set_f32_value(&mut self, index: AttributeValueIndex, value: &[f32]) {
        debug_assert_eq!(self.data_type, DataType::Float32);
        let n = value.len().min(self.num_components as usize);
        let offset = index.0 as usize * self.byte_stride();
        self.buffer.write_f32s(offset, &value[..n]);
    }

    /// Reads one `Float32` entry into `out`.
    pub fn f32_value(&self, index: AttributeValueIndex, out: &mut [f32]) -> bool {
        let n = out.len().min(self.num_components as usize);
        let offset = index.0 as usize * self.byte_stride();
        self.buffer.read_f32s(offset, &mut out[..n])
    }

    /// Raw bytes of one entry.
    pub fn value_bytes(&self, index: AttributeValueIndex) -> Option<&[u8]> {
        let stride = self.byte_stride();
        let offset = index.0 as usize * stride;
        self.buffer.data().get(offset..offset + stride)
    }

    pub fn size(&self) -> usize {
        self.num_unique_entries
    }

    pub fn buffer(&self) -> &DataBuffer {
        &self.buffer
    }

    pub fn attribute_type(&self) -> GeometryAttributeType {
        self.attribute_type
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    pub fn num_components(&self) -> u8 {
        self.num_components
    }

    pub fn normalized(&self) -> bool {
        self.normalized
    }

    pub fn byte_stride(&self) -> usize {
        self.num_components as usize * self.data_type.byte_length()
    }

    pub fn unique_id(&self) -> u32 {
        self.unique_id
    }

    pub fn set_unique_id(&mut self, id: u32) {
        self.unique_id = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_allocates_storage() {
        let mut att = PointAttribute::new();
        att.init(GeometryAttributeType::Position, 3, DataType::Float32, false, 4);
        assert_eq!(att.size(), 4);
        assert_eq!(att.byte_stride(), 12);
        assert_eq!(att.buffer().data_size(), 48);
    }

    #[test]
    fn f32_entries() {
        let mut att = PointAttribute::new();
        att.init(GeometryAttributeType::Normal, 3, DataType::Float32, false, 2);
        att.set_f32_value(AttributeValueIndex(1), &[0.0, 1.0, 0.0, 99.0]);

        let mut out = [0.0f32; 3];
        assert!(att.f32_value(AttributeValueIndex(1), &mut out));
        assert_eq!(out, [0.0, 1.0, 0.0]);
        assert_eq!(att.value_bytes(AttributeValueIndex(1)).map(<[u8]>::len), Some(12));
        assert!(att.value_bytes(AttributeValueIndex(2)).is_none());
    }
}
