//! Draco encoding of anchor collections.
//!
//! Codec failures never escape [`DracoEncoder::encode`]: they come back as
//! the status of an [`EncoderResult`], with no data attached.

use std::fmt;

use scanmesh_core::{CodecError, EncoderOptions, ErrorCode, MeshCodec, SequentialCodec};
use tracing::{debug, debug_span};

use crate::anchor::{FaceAnchor, MeshAnchor, PlaneAnchor};
use crate::draco_mesh::{DracoMesh, MAX_CODEC_ELEMENTS};
use crate::enumerator::{EnumerateGeometry, GeometryEnumerator};

/// A Draco encoder status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EncoderStatusCode {
    /// Everything is OK.
    #[default]
    Ok,
    /// A general error.
    GeneralError,
    /// An input or output error.
    InputOutputError,
    /// An invalid parameter error.
    InvalidParameter,
    /// The input isn't compatible with the current Draco version.
    InvalidUnsupportedVersion,
    /// The input was created with an unknown Draco version.
    InvalidUnknownVersion,
    /// The input contains an unsupported feature.
    InvalidUnsupportedFeature,
}

impl EncoderStatusCode {
    pub const fn name(self) -> &'static str {
        match self {
            EncoderStatusCode::Ok => "OK",
            EncoderStatusCode::GeneralError => "GENERAL_ERROR",
            EncoderStatusCode::InputOutputError => "INPUT_OUTPUT_ERROR",
            EncoderStatusCode::InvalidParameter => "INVALID_PARAMETER",
            EncoderStatusCode::InvalidUnsupportedVersion => "INVALID_UNSUPPORTED_VERSION",
            EncoderStatusCode::InvalidUnknownVersion => "INVALID_UNKNOWN_VERSION",
            EncoderStatusCode::InvalidUnsupportedFeature => "INVALID_UNSUPPORTED_FEATURE",
        }
    }
}

impl From<ErrorCode> for EncoderStatusCode {
    fn from(code: ErrorCode) -> Self {
        match code {
            ErrorCode::Ok => EncoderStatusCode::Ok,
            ErrorCode::DracoError => EncoderStatusCode::GeneralError,
            ErrorCode::IoError => EncoderStatusCode::InputOutputError,
            ErrorCode::InvalidParameter => EncoderStatusCode::InvalidParameter,
            ErrorCode::UnsupportedVersion => EncoderStatusCode::InvalidUnsupportedVersion,
            ErrorCode::UnknownVersion => EncoderStatusCode::InvalidUnknownVersion,
            ErrorCode::UnsupportedFeature => EncoderStatusCode::InvalidUnsupportedFeature,
        }
    }
}

impl fmt::Display for EncoderStatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A Draco encoder status: a code plus the codec's message on failure.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EncoderStatus {
    code: EncoderStatusCode,
    error_message: Option<String>,
}

impl EncoderStatus {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn code(&self) -> EncoderStatusCode {
        self.code
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_ok(&self) -> bool {
        self.code == EncoderStatusCode::Ok
    }
}

impl From<&CodecError> for EncoderStatus {
    fn from(err: &CodecError) -> Self {
        Self {
            code: err.code().into(),
            error_message: Some(err.message().to_string()),
        }
    }
}

impl fmt::Display for EncoderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error_message {
            Some(message) if !self.is_ok() => write!(f, "{}: {}", self.code, message),
            _ => write!(f, "{}", self.code),
        }
    }
}

/// The outcome of a Draco encode.
///
/// `data` is present when the encode succeeded with geometry to write.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EncoderResult {
    status: EncoderStatus,
    data: Option<Vec<u8>>,
}

impl EncoderResult {
    fn success(data: Vec<u8>) -> Self {
        Self {
            status: EncoderStatus::ok(),
            data: Some(data),
        }
    }

    fn empty() -> Self {
        Self::default()
    }

    fn failure(err: &CodecError) -> Self {
        Self {
            status: err.into(),
            data: None,
        }
    }

    pub fn status(&self) -> &EncoderStatus {
        &self.status
    }

    /// The encoded bytes, if any.
    pub fn data(&self) -> Option<&[u8]> {
        self.data.as_deref()
    }

    pub fn into_data(self) -> Option<Vec<u8>> {
        self.data
    }

    pub fn is_ok(&self) -> bool {
        self.status.is_ok()
    }
}

/// Encodes enumerated geometry with a [`MeshCodec`].
#[derive(Debug, Clone, Default)]
pub struct DracoEncoder<C = SequentialCodec> {
    codec: C,
}

impl DracoEncoder {
    /// An encoder backed by the bundled sequential codec.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: MeshCodec> DracoEncoder<C> {
    pub fn with_codec(codec: C) -> Self {
        Self { codec }
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Encodes a built mesh. An empty mesh is not handed to the codec and
    /// yields an OK status without data.
    pub fn encode(&self, mesh: &DracoMesh, options: &EncoderOptions) -> EncoderResult {
        if mesh.is_empty() {
            debug!("no vertices to encode");
            return EncoderResult::empty();
        }

        let _span = debug_span!(
            "draco_encode",
            points = mesh.mesh().num_points(),
            faces = mesh.mesh().num_faces(),
            encoding_speed = options.encoding_speed(),
            decoding_speed = options.decoding_speed()
        )
        .entered();

        match self.codec.encode(mesh.mesh(), options) {
            Ok(data) => {
                debug!(bytes = data.len(), "encoded");
                EncoderResult::success(data)
            }
            Err(err) => {
                debug!(error = %err, "codec failed");
                EncoderResult::failure(&err)
            }
        }
    }

    /// Builds a mesh from `enumerator` and encodes it. `None` options use the
    /// defaults (speed 0 for both encoding and decoding).
    pub fn encode_enumerator<E: EnumerateGeometry>(
        &self,
        enumerator: &E,
        options: Option<&EncoderOptions>,
    ) -> EncoderResult {
        let (num_vertices, num_faces) = (enumerator.total_vertex_count(), enumerator.total_face_count());
        if num_vertices > MAX_CODEC_ELEMENTS || num_faces > MAX_CODEC_ELEMENTS {
            let err = CodecError::InvalidParameter(format!(
                "{num_vertices} vertices and {num_faces} faces exceed the codec's {MAX_CODEC_ELEMENTS} index limit"
            ));
            debug!(error = %err, "geometry too large");
            return EncoderResult::failure(&err);
        }

        let mesh = DracoMesh::new(enumerator);
        match options {
            Some(options) => self.encode(&mesh, options),
            None => self.encode(&mesh, &EncoderOptions::default()),
        }
    }

    /// Encodes a set of face anchors into a single Draco mesh.
    pub fn encode_face_anchors(&self, anchors: &[FaceAnchor], options: Option<&EncoderOptions>) -> EncoderResult {
        self.encode_enumerator(&GeometryEnumerator::for_face_anchors(anchors), options)
    }

    /// Encodes a set of mesh anchors into a single Draco mesh.
    pub fn encode_mesh_anchors(&self, anchors: &[MeshAnchor], options: Option<&EncoderOptions>) -> EncoderResult {
        self.encode_enumerator(&GeometryEnumerator::for_mesh_anchors(anchors), options)
    }

    /// Encodes a set of plane anchors into a single Draco mesh.
    pub fn encode_plane_anchors(&self, anchors: &[PlaneAnchor], options: Option<&EncoderOptions>) -> EncoderResult {
        self.encode_enumerator(&GeometryEnumerator::for_plane_anchors(anchors), options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Face, FaceIndex, GeometryEnumeration, Vertex, VertexIndex};
    use scanmesh_core::{Mesh, StatusResult};

    fn triangle() -> Vec<FaceAnchor> {
        vec![FaceAnchor::new(vec![[0.0; 3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]], vec![0, 1, 2])]
    }

    #[test]
    fn status_mapping_is_one_to_one() {
        let mapped: Vec<EncoderStatusCode> = ErrorCode::ALL.into_iter().map(EncoderStatusCode::from).collect();
        for (i, a) in mapped.iter().enumerate() {
            for b in &mapped[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(mapped[0], EncoderStatusCode::Ok);
        assert!(mapped[1..].iter().all(|code| *code != EncoderStatusCode::Ok));
    }

    #[test]
    fn codec_failures_become_status() {
        let cases = [
            (CodecError::DracoError("a".into()), EncoderStatusCode::GeneralError),
            (CodecError::IoError("b".into()), EncoderStatusCode::InputOutputError),
            (CodecError::InvalidParameter("c".into()), EncoderStatusCode::InvalidParameter),
            (CodecError::UnsupportedVersion("d".into()), EncoderStatusCode::InvalidUnsupportedVersion),
            (CodecError::UnknownVersion("e".into()), EncoderStatusCode::InvalidUnknownVersion),
            (CodecError::UnsupportedFeature("f".into()), EncoderStatusCode::InvalidUnsupportedFeature),
        ];
        for (err, expected) in cases {
            let message = err.message().to_string();
            let codec = move |_: &Mesh, _: &EncoderOptions| -> StatusResult<Vec<u8>> { Err(err.clone()) };
            let result = DracoEncoder::with_codec(codec).encode_face_anchors(&triangle(), None);
            assert_eq!(result.status().code(), expected);
            assert_eq!(result.status().error_message(), Some(message.as_str()));
            assert!(result.data().is_none());
        }
    }

    #[test]
    fn options_reach_the_codec() {
        let codec = |_: &Mesh, options: &EncoderOptions| -> StatusResult<Vec<u8>> {
            Ok(vec![options.encoding_speed() as u8, options.decoding_speed() as u8])
        };
        let encoder = DracoEncoder::with_codec(codec);

        let result = encoder.encode_face_anchors(&triangle(), None);
        assert_eq!(result.data(), Some(&[0u8, 0][..]));

        let options = EncoderOptions::with_speed(3, 7);
        let result = encoder.encode_face_anchors(&triangle(), Some(&options));
        assert_eq!(result.into_data(), Some(vec![3, 7]));
    }

    #[test]
    fn empty_input_skips_codec() {
        let codec = |_: &Mesh, _: &EncoderOptions| -> StatusResult<Vec<u8>> {
            Err(CodecError::DracoError("should not be called".into()))
        };
        let result = DracoEncoder::with_codec(codec).encode_mesh_anchors(&[], None);
        assert!(result.is_ok());
        assert!(result.data().is_none());
    }

    #[test]
    fn status_display() {
        assert_eq!(EncoderStatus::ok().to_string(), "OK");
        let status = EncoderStatus::from(&CodecError::InvalidParameter("speed".into()));
        assert_eq!(status.to_string(), "INVALID_PARAMETER: speed");
    }

    #[test]
    fn bundled_codec_encodes_triangle() {
        let result = DracoEncoder::new().encode_face_anchors(&triangle(), None);
        assert!(result.is_ok());
        assert!(result.data().unwrap().starts_with(b"DRACO"));
    }

    #[test]
    fn bundled_codec_rejects_speed() {
        let options = EncoderOptions::with_speed(12, 0);
        let result = DracoEncoder::new().encode_face_anchors(&triangle(), Some(&options));
        assert_eq!(result.status().code(), EncoderStatusCode::InvalidParameter);
        assert!(result.status().error_message().is_some());
        assert!(result.data().is_none());
    }

    /// Reports more vertices than the codec can index but visits nothing.
    struct OversizedGeometry;

    impl EnumerateGeometry for OversizedGeometry {
        fn supported_enumerations(&self) -> GeometryEnumeration {
            GeometryEnumeration::VERTEX | GeometryEnumeration::FACE
        }

        fn total_vertex_count(&self) -> usize {
            MAX_CODEC_ELEMENTS.saturating_add(1)
        }

        fn total_face_count(&self) -> usize {
            1
        }

        fn for_each_vertex<F: FnMut(VertexIndex, Vertex)>(&self, _visit: F) {}

        fn for_each_face<F: FnMut(FaceIndex, Face)>(&self, _visit: F) {}
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn oversized_geometry_is_rejected_before_building() {
        let codec = |_: &Mesh, _: &EncoderOptions| -> StatusResult<Vec<u8>> {
            Err(CodecError::DracoError("should not be called".into()))
        };
        let result = DracoEncoder::with_codec(codec).encode_enumerator(&OversizedGeometry, None);
        assert_eq!(result.status().code(), EncoderStatusCode::InvalidParameter);
        assert!(result.status().error_message().unwrap().contains("index limit"));
        assert!(result.data().is_none());
    }
}
