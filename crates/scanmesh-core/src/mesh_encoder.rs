use tracing::debug;

use crate::compression_config::{EncodedGeometryType, MeshEncodingMethod, SequentialDecoderType};
use crate::draco_types::DataType;
use crate::encoder_buffer::EncoderBuffer;
use crate::encoder_options::{EncoderOptions, MAX_SPEED};
use crate::geometry_attribute::GeometryAttributeType;
use crate::geometry_indices::{AttributeValueIndex, PointIndex};
use crate::mesh::Mesh;
use crate::status::{CodecError, Status};
use crate::version::{DEFAULT_MESH_VERSION, DRACO_MESH_BITSTREAM_VERSION_MAJOR};

/// Point counts below this use varint indices in raw v2.2 connectivity.
const VARINT_INDEX_POINT_LIMIT: usize = 1 << 21;

/// Writes a mesh as a Draco bitstream with sequential connectivity and
/// uncompressed `Float32` attributes.
///
/// Only bitstream version 2.2 is written; any other pinned version is
/// rejected before a byte is emitted.
pub struct MeshEncoder {
    options: EncoderOptions,
}

impl MeshEncoder {
    pub fn new() -> Self {
        Self {
            options: EncoderOptions::default(),
        }
    }

    pub fn encode(&mut self, mesh: &Mesh, options: &EncoderOptions, out_buffer: &mut EncoderBuffer) -> Status {
        self.options = options.clone();

        self.validate_options()?;
        self.validate_mesh(mesh)?;

        self.encode_header(out_buffer)?;
        self.encode_connectivity(mesh, out_buffer)?;
        self.encode_attributes(mesh, out_buffer)
    }

    fn validate_options(&self) -> Status {
        let encoding_speed = self.options.encoding_speed();
        let decoding_speed = self.options.decoding_speed();
        for (name, speed) in [("encoding", encoding_speed), ("decoding", decoding_speed)] {
            if !(0..=MAX_SPEED).contains(&speed) {
                return Err(CodecError::InvalidParameter(format!(
                    "{name} speed {speed} outside 0..={MAX_SPEED}"
                )));
            }
        }

        match self.options.version() {
            Some(version) if version == DEFAULT_MESH_VERSION => Ok(()),
            Some((major, minor)) => {
                let message = format!("mesh bitstream version {major}.{minor}");
                Err(if major == DRACO_MESH_BITSTREAM_VERSION_MAJOR {
                    CodecError::UnsupportedVersion(message)
                } else {
                    CodecError::UnknownVersion(message)
                })
            }
            None if self.options.pins_version() => Err(CodecError::UnknownVersion(format!(
                "mesh bitstream version {}.{}",
                self.options.get_global_int("version_major", -1),
                self.options.get_global_int("version_minor", -1)
            ))),
            None => Ok(()),
        }
    }

    fn validate_mesh(&self, mesh: &Mesh) -> Status {
        if mesh.named_attribute(GeometryAttributeType::Position).is_none() {
            return Err(CodecError::DracoError("Mesh has no position attribute".to_string()));
        }

        for att in mesh.attributes() {
            if att.data_type() != DataType::Float32 {
                return Err(CodecError::UnsupportedFeature(format!(
                    "{:?} attribute stored as {:?}",
                    att.attribute_type(),
                    att.data_type()
                )));
            }
            if att.size() != mesh.num_points() {
                return Err(CodecError::DracoError(format!(
                    "{:?} attribute has {} values for {} points",
                    att.attribute_type(),
                    att.size(),
                    mesh.num_points()
                )));
            }
        }

        let num_points = mesh.num_points();
        if u32::try_from(num_points).is_err() {
            return Err(CodecError::InvalidParameter(format!(
                "{num_points} points exceed the u32 point index range"
            )));
        }
        if let Some((face_id, face)) = mesh
            .faces()
            .iter()
            .enumerate()
            .find(|(_, face)| face.iter().any(|p| usize::from(*p) >= num_points))
        {
            return Err(CodecError::DracoError(format!(
                "Face {face_id} references point {:?} outside {num_points} points",
                face
            )));
        }
        Ok(())
    }

    fn encode_header(&self, buffer: &mut EncoderBuffer) -> Status {
        buffer.encode_data(b"DRACO");

        let (major, minor) = DEFAULT_MESH_VERSION;
        buffer.encode_u8(major)?;
        buffer.encode_u8(minor)?;
        buffer.encode_u8(EncodedGeometryType::TriangularMesh as u8)?;

        // Speeds below the maximum select edgebreaker in the reference codec.
        if self.options.encoding_speed() < MAX_SPEED || self.options.decoding_speed() < MAX_SPEED {
            debug!(
                encoding_speed = self.options.encoding_speed(),
                decoding_speed = self.options.decoding_speed(),
                "edgebreaker unavailable, writing sequential connectivity"
            );
        }
        buffer.encode_u8(MeshEncodingMethod::MeshSequentialEncoding as u8)?;

        // Flags: no metadata.
        buffer.encode_u16(0)
    }

    fn encode_connectivity(&self, mesh: &Mesh, out_buffer: &mut EncoderBuffer) -> Status {
        let num_points = mesh.num_points();
        out_buffer.encode_varint(mesh.num_faces() as u64)?;
        out_buffer.encode_varint(num_points as u64)?;

        // Raw connectivity. Written even when there are no faces; decoders
        // always read it.
        out_buffer.encode_u8(1)?;
        let indices = mesh.faces().iter().flat_map(|face| face.iter().map(|p| p.0));
        if num_points < 256 {
            for index in indices {
                out_buffer.encode_u8(index as u8)?;
            }
        } else if num_points < 65536 {
            for index in indices {
                out_buffer.encode_u16(index as u16)?;
            }
        } else if num_points < VARINT_INDEX_POINT_LIMIT {
            for index in indices {
                out_buffer.encode_varint(u64::from(index))?;
            }
        } else {
            for index in indices {
                out_buffer.encode_u32(index)?;
            }
        }
        Ok(())
    }

    fn encode_attributes(&self, mesh: &Mesh, out_buffer: &mut EncoderBuffer) -> Status {
        // A single sequential attribute encoder carries every attribute.
        out_buffer.encode_u8(1)?;
        out_buffer.encode_varint(mesh.num_attributes() as u64)?;

        for att in mesh.attributes() {
            out_buffer.encode_u8(att.attribute_type() as u8)?;
            out_buffer.encode_u8(att.data_type() as u8)?;
            out_buffer.encode_u8(att.num_components())?;
            out_buffer.encode_u8(u8::from(att.normalized()))?;
            out_buffer.encode_varint(u64::from(att.unique_id()))?;
        }

        for _ in mesh.attributes() {
            out_buffer.encode_u8(SequentialDecoderType::Generic as u8)?;
        }

        for att in mesh.attributes() {
            // validate_mesh keeps the point count within u32.
            for point in 0..mesh.num_points() as u32 {
                let value_index: AttributeValueIndex = att.mapped_index(PointIndex(point));
                let bytes = att.value_bytes(value_index).ok_or_else(|| {
                    CodecError::IoError(format!("{:?} value {} out of buffer", att.attribute_type(), point))
                })?;
                out_buffer.encode_data(bytes);
            }
        }
        Ok(())
    }
}

impl Default for MeshEncoder {
    fn default() -> Self {
        Self::new()
    }
}
