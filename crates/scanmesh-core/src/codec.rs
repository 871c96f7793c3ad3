//! The codec seam.
//!
//! Anything that turns a [`Mesh`] into bytes can stand in for the bundled
//! [`SequentialCodec`], including plain closures.

use tracing::debug_span;

use crate::encoder_buffer::EncoderBuffer;
use crate::encoder_options::EncoderOptions;
use crate::mesh::Mesh;
use crate::mesh_encoder::MeshEncoder;
use crate::status::StatusResult;

/// A mesh compression backend.
pub trait MeshCodec {
    /// Encodes `mesh` and returns the bitstream.
    fn encode(&self, mesh: &Mesh, options: &EncoderOptions) -> StatusResult<Vec<u8>>;
}

impl<F> MeshCodec for F
where
    F: Fn(&Mesh, &EncoderOptions) -> StatusResult<Vec<u8>>,
{
    fn encode(&self, mesh: &Mesh, options: &EncoderOptions) -> StatusResult<Vec<u8>> {
        self(mesh, options)
    }
}

/// The bundled backend: a Draco mesh bitstream with sequential connectivity.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialCodec;

impl MeshCodec for SequentialCodec {
    fn encode(&self, mesh: &Mesh, options: &EncoderOptions) -> StatusResult<Vec<u8>> {
        let _span = debug_span!(
            "sequential_encode",
            points = mesh.num_points(),
            faces = mesh.num_faces()
        )
        .entered();

        // Header, counts and raw indices, then the attribute values.
        let estimate = 32 + mesh.num_faces() * 12 + mesh.num_points() * 24;
        let mut buffer = EncoderBuffer::with_capacity(estimate);
        MeshEncoder::new().encode(mesh, options, &mut buffer)?;
        Ok(buffer.into_data())
    }
}
