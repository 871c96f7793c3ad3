//! Anchor geometry export.
//!
//! This crate turns collections of capture anchors into a single mesh and
//! writes it as a Draco bitstream or as Wavefront OBJ text.
//!
//! # Supported Anchors
//!
//! | Anchor  | Vertices | Faces | Normals | Space       |
//! |---------|----------|-------|---------|-------------|
//! | Face    | ✓        | ✓     | -       | anchor-local |
//! | Mesh    | ✓        | ✓     | ✓       | anchor-local |
//! | Plane   | ✓        | ✓     | -       | world        |
//!
//! # Enumeration
//!
//! Every collection is wrapped in a [`GeometryEnumerator`], which implements
//! [`EnumerateGeometry`]. Both encoders take any enumerator:
//!
//! ```ignore
//! use scanmesh_io::{DracoEncoder, GeometryEnumerator, ObjEncoder};
//!
//! let enumerator = GeometryEnumerator::for_mesh_anchors(&anchors);
//!
//! // Wavefront OBJ, `None` when the collection has no vertices
//! let obj = ObjEncoder::new().encode(&enumerator);
//!
//! // Draco, with default options (speed 0/0)
//! let result = DracoEncoder::new().encode_enumerator(&enumerator, None);
//! if !result.is_ok() {
//!     eprintln!("{}", result.status());
//! }
//! ```
//!
//! # Codecs
//!
//! [`DracoEncoder`] is generic over [`MeshCodec`]. The default is the
//! sequential codec from `scanmesh-core`; any closure with the codec's
//! signature works too:
//!
//! ```ignore
//! let encoder = DracoEncoder::with_codec(|mesh: &Mesh, options: &EncoderOptions| {
//!     my_codec::encode(mesh, options.encoding_speed())
//! });
//! ```

pub mod anchor;
pub mod coloring;
pub mod draco_encoder;
pub mod draco_mesh;
pub mod enumerator;
pub mod geometry;
pub mod obj_writer;

// Re-export main types for convenience
pub use anchor::{
    FaceAnchor, FaceBuffer, MeshAnchor, MeshClassification, MeshGeometry, PlaneAnchor,
    PlaneClassification,
};
pub use coloring::{ClassificationColoring, DefaultClassificationColoring, SimpleColor};
pub use draco_encoder::{DracoEncoder, EncoderResult, EncoderStatus, EncoderStatusCode};
pub use draco_mesh::{DracoMesh, MAX_CODEC_ELEMENTS};
pub use enumerator::{
    EnumerateGeometry, FaceAnchorEnumerator, GeometryEnumerator, MeshAnchorEnumerator,
    PlaneAnchorEnumerator,
};
pub use geometry::{Face, FaceIndex, GeometryEnumeration, Normal, NormalIndex, Vertex, VertexIndex};
pub use obj_writer::ObjEncoder;

pub use scanmesh_core::{EncoderOptions, MeshCodec, SequentialCodec, DEFAULT_SPEED};
