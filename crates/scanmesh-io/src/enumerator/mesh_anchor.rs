use tracing::warn;

use super::{global_face, BlockOffsets, EnumerateGeometry};
use crate::anchor::MeshAnchor;
use crate::geometry::{Face, FaceIndex, GeometryEnumeration, Normal, NormalIndex, Vertex, VertexIndex};

/// Enumerates a set of mesh anchors as one geometry, normals included.
///
/// Vertex and face buffers are read in each anchor's native layout and
/// vertices stay in anchor-local space.
#[derive(Debug, Clone)]
pub struct MeshAnchorEnumerator<'a> {
    anchors: &'a [MeshAnchor],
    offsets: BlockOffsets,
}

impl<'a> MeshAnchorEnumerator<'a> {
    pub fn new(anchors: &'a [MeshAnchor]) -> Self {
        for (index, anchor) in anchors.iter().enumerate() {
            let geometry = &anchor.geometry;
            if geometry.normals.len() != geometry.vertices.len() {
                warn!(
                    anchor = index,
                    vertices = geometry.vertices.len(),
                    normals = geometry.normals.len(),
                    "normal count differs from vertex count, missing normals are zero"
                );
            }
        }
        let offsets = BlockOffsets::new(
            anchors
                .iter()
                .map(|anchor| (anchor.vertex_count(), anchor.face_count())),
        );
        Self { anchors, offsets }
    }
}

impl EnumerateGeometry for MeshAnchorEnumerator<'_> {
    fn supported_enumerations(&self) -> GeometryEnumeration {
        GeometryEnumeration::VERTEX | GeometryEnumeration::FACE | GeometryEnumeration::NORMAL
    }

    fn total_vertex_count(&self) -> usize {
        self.offsets.total_vertices()
    }

    fn total_face_count(&self) -> usize {
        self.offsets.total_faces()
    }

    fn for_each_vertex<F>(&self, mut visit: F)
    where
        F: FnMut(VertexIndex, Vertex),
    {
        for (anchor_index, block) in self.offsets.non_empty() {
            let vertices = &self.anchors[anchor_index].geometry.vertices;
            for (local, point) in vertices.iter().enumerate() {
                visit(VertexIndex(block.vertex_offset + local), Vertex::from_point(*point));
            }
        }
    }

    fn for_each_face<F>(&self, mut visit: F)
    where
        F: FnMut(FaceIndex, Face),
    {
        for (anchor_index, block) in self.offsets.non_empty() {
            let faces = &self.anchors[anchor_index].geometry.faces;
            for (local, indices) in faces.iter().enumerate() {
                visit(
                    FaceIndex(block.face_offset + local),
                    global_face(indices, block.vertex_offset),
                );
            }
        }
    }

    fn for_each_normal<F>(&self, mut visit: F)
    where
        F: FnMut(NormalIndex, Normal),
    {
        for (anchor_index, block) in self.offsets.non_empty() {
            let normals = &self.anchors[anchor_index].geometry.normals;
            for local in 0..block.vertex_count {
                let direction = normals.get(local).copied().unwrap_or([0.0; 3]);
                visit(VertexIndex(block.vertex_offset + local), Normal::from_array(direction));
            }
        }
    }
}
