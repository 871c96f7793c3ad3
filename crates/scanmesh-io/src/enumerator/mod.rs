//! Geometry enumeration over anchor collections.
//!
//! An enumerator merges every anchor of one collection into a single
//! logical geometry. Anchors are visited in collection order in every pass,
//! and face indices local to an anchor are shifted by the number of vertices
//! of all anchors before it:
//!
//! ```text
//! global(anchor k, local i) = i + vertex_count(anchor 0) + ... + vertex_count(anchor k-1)
//! ```
//!
//! The same visiting order in the vertex, face and normal passes is what
//! keeps every face pointing at vertices of its own anchor.
//!
//! Face and mesh anchor vertices are emitted in anchor-local space. Anchors
//! of a multi-anchor collection are therefore not registered against each
//! other unless the caller pre-transforms them. Plane anchor outlines are
//! emitted in world space.

mod face_anchor;
mod mesh_anchor;
mod plane_anchor;

pub use face_anchor::FaceAnchorEnumerator;
pub use mesh_anchor::MeshAnchorEnumerator;
pub use plane_anchor::PlaneAnchorEnumerator;

use tracing::trace;

use crate::anchor::{FaceAnchor, MeshAnchor, PlaneAnchor};
use crate::geometry::{Face, FaceIndex, GeometryEnumeration, Normal, NormalIndex, Vertex, VertexIndex};

/// A producer of vertex, face and normal streams.
///
/// Every stream is a pure function of the borrowed anchors: calling a method
/// twice visits the same entries in the same order. Streams outside
/// [`supported_enumerations`](Self::supported_enumerations) visit nothing.
pub trait EnumerateGeometry {
    /// The streams this enumerator produces.
    fn supported_enumerations(&self) -> GeometryEnumeration;

    fn total_vertex_count(&self) -> usize;

    fn total_face_count(&self) -> usize;

    /// Visits every vertex with its global index.
    fn for_each_vertex<F>(&self, visit: F)
    where
        F: FnMut(VertexIndex, Vertex);

    /// Visits every face with its global index. Face vertex indices are global.
    fn for_each_face<F>(&self, visit: F)
    where
        F: FnMut(FaceIndex, Face);

    /// Visits every normal with the global index of its vertex.
    fn for_each_normal<F>(&self, _visit: F)
    where
        F: FnMut(NormalIndex, Normal),
    {
    }

    fn supports(&self, enumeration: GeometryEnumeration) -> bool {
        self.supported_enumerations().contains(enumeration)
    }
}

/// Per-anchor index offsets, computed once per collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct BlockOffsets {
    blocks: Vec<Block>,
    total_vertices: usize,
    total_faces: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Block {
    pub vertex_offset: usize,
    pub vertex_count: usize,
    pub face_offset: usize,
    pub face_count: usize,
}

impl BlockOffsets {
    /// Builds the table from `(vertex_count, face_count)` per anchor, in
    /// collection order. Faces of an anchor without vertices are dropped.
    pub(crate) fn new<I>(counts: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut offsets = Self::default();
        for (index, (vertex_count, face_count)) in counts.into_iter().enumerate() {
            let face_count = if vertex_count == 0 { 0 } else { face_count };
            trace!(
                anchor = index,
                vertex_offset = offsets.total_vertices,
                face_offset = offsets.total_faces,
                vertex_count,
                face_count,
                "anchor offsets"
            );
            offsets.blocks.push(Block {
                vertex_offset: offsets.total_vertices,
                vertex_count,
                face_offset: offsets.total_faces,
                face_count,
            });
            offsets.total_vertices += vertex_count;
            offsets.total_faces += face_count;
        }
        offsets
    }

    /// The block of anchor `index`.
    pub(crate) fn block(&self, index: usize) -> Block {
        self.blocks[index]
    }

    /// Blocks that contribute vertices, paired with their anchor index.
    pub(crate) fn non_empty(&self) -> impl Iterator<Item = (usize, Block)> + '_ {
        self.blocks
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, block)| block.vertex_count > 0)
    }

    pub(crate) fn total_vertices(&self) -> usize {
        self.total_vertices
    }

    pub(crate) fn total_faces(&self) -> usize {
        self.total_faces
    }
}

/// Translates an anchor-local triangle to global indices.
#[inline]
pub(crate) fn global_face(local: [usize; 3], vertex_offset: usize) -> Face {
    Face {
        vertex_indices: local.map(|i| VertexIndex(i).offset_by(vertex_offset)),
    }
}

/// An enumerator over one anchor collection of any kind.
#[derive(Debug, Clone)]
pub enum GeometryEnumerator<'a> {
    Face(FaceAnchorEnumerator<'a>),
    Mesh(MeshAnchorEnumerator<'a>),
    Plane(PlaneAnchorEnumerator<'a>),
}

impl<'a> GeometryEnumerator<'a> {
    pub fn for_face_anchors(anchors: &'a [FaceAnchor]) -> Self {
        GeometryEnumerator::Face(FaceAnchorEnumerator::new(anchors))
    }

    pub fn for_mesh_anchors(anchors: &'a [MeshAnchor]) -> Self {
        GeometryEnumerator::Mesh(MeshAnchorEnumerator::new(anchors))
    }

    pub fn for_plane_anchors(anchors: &'a [PlaneAnchor]) -> Self {
        GeometryEnumerator::Plane(PlaneAnchorEnumerator::new(anchors))
    }
}

impl<'a> From<FaceAnchorEnumerator<'a>> for GeometryEnumerator<'a> {
    fn from(enumerator: FaceAnchorEnumerator<'a>) -> Self {
        GeometryEnumerator::Face(enumerator)
    }
}

impl<'a> From<MeshAnchorEnumerator<'a>> for GeometryEnumerator<'a> {
    fn from(enumerator: MeshAnchorEnumerator<'a>) -> Self {
        GeometryEnumerator::Mesh(enumerator)
    }
}

impl<'a> From<PlaneAnchorEnumerator<'a>> for GeometryEnumerator<'a> {
    fn from(enumerator: PlaneAnchorEnumerator<'a>) -> Self {
        GeometryEnumerator::Plane(enumerator)
    }
}

impl EnumerateGeometry for GeometryEnumerator<'_> {
    fn supported_enumerations(&self) -> GeometryEnumeration {
        match self {
            GeometryEnumerator::Face(e) => e.supported_enumerations(),
            GeometryEnumerator::Mesh(e) => e.supported_enumerations(),
            GeometryEnumerator::Plane(e) => e.supported_enumerations(),
        }
    }

    fn total_vertex_count(&self) -> usize {
        match self {
            GeometryEnumerator::Face(e) => e.total_vertex_count(),
            GeometryEnumerator::Mesh(e) => e.total_vertex_count(),
            GeometryEnumerator::Plane(e) => e.total_vertex_count(),
        }
    }

    fn total_face_count(&self) -> usize {
        match self {
            GeometryEnumerator::Face(e) => e.total_face_count(),
            GeometryEnumerator::Mesh(e) => e.total_face_count(),
            GeometryEnumerator::Plane(e) => e.total_face_count(),
        }
    }

    fn for_each_vertex<F>(&self, visit: F)
    where
        F: FnMut(VertexIndex, Vertex),
    {
        match self {
            GeometryEnumerator::Face(e) => e.for_each_vertex(visit),
            GeometryEnumerator::Mesh(e) => e.for_each_vertex(visit),
            GeometryEnumerator::Plane(e) => e.for_each_vertex(visit),
        }
    }

    fn for_each_face<F>(&self, visit: F)
    where
        F: FnMut(FaceIndex, Face),
    {
        match self {
            GeometryEnumerator::Face(e) => e.for_each_face(visit),
            GeometryEnumerator::Mesh(e) => e.for_each_face(visit),
            GeometryEnumerator::Plane(e) => e.for_each_face(visit),
        }
    }

    fn for_each_normal<F>(&self, visit: F)
    where
        F: FnMut(NormalIndex, Normal),
    {
        match self {
            GeometryEnumerator::Face(e) => e.for_each_normal(visit),
            GeometryEnumerator::Mesh(e) => e.for_each_normal(visit),
            GeometryEnumerator::Plane(e) => e.for_each_normal(visit),
        }
    }
}
