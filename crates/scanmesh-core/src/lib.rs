//! scanmesh core library
//!
//! The intermediate mesh model handed to compression backends, the codec's
//! native status taxonomy, and a sequential Draco mesh bitstream writer.

// =============================================================================
// Mesh model
// =============================================================================

pub mod data_buffer;
pub mod draco_types;
pub mod geometry_attribute;
pub mod geometry_indices;
pub mod mesh;
pub mod point_cloud;

// =============================================================================
// Codec
// =============================================================================

pub mod codec;
pub mod compression_config;
pub mod encoder_buffer;
pub mod encoder_options;
pub mod mesh_encoder;
pub mod status;
pub mod version;

// =============================================================================
// Re-exports
// =============================================================================

pub use codec::{MeshCodec, SequentialCodec};
pub use data_buffer::DataBuffer;
pub use draco_types::DataType;
pub use encoder_buffer::EncoderBuffer;
pub use encoder_options::{EncoderOptions, DEFAULT_SPEED, MAX_SPEED};
pub use geometry_attribute::{GeometryAttributeType, PointAttribute};
pub use geometry_indices::{AttributeValueIndex, FaceIndex, PointIndex};
pub use mesh::Mesh;
pub use mesh_encoder::MeshEncoder;
pub use point_cloud::PointCloud;
pub use status::{CodecError, ErrorCode, Status, StatusResult};
