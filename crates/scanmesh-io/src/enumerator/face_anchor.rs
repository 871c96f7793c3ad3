use super::{global_face, BlockOffsets, EnumerateGeometry};
use crate::anchor::FaceAnchor;
use crate::geometry::{Face, FaceIndex, GeometryEnumeration, Vertex, VertexIndex};

/// Enumerates a set of face anchors as one geometry.
///
/// Vertices stay in each anchor's local space; the anchor transform is not
/// applied.
#[derive(Debug, Clone)]
pub struct FaceAnchorEnumerator<'a> {
    anchors: &'a [FaceAnchor],
    offsets: BlockOffsets,
}

impl<'a> FaceAnchorEnumerator<'a> {
    pub fn new(anchors: &'a [FaceAnchor]) -> Self {
        let offsets = BlockOffsets::new(
            anchors
                .iter()
                .map(|anchor| (anchor.vertex_count(), anchor.triangle_count())),
        );
        Self { anchors, offsets }
    }
}

impl EnumerateGeometry for FaceAnchorEnumerator<'_> {
    fn supported_enumerations(&self) -> GeometryEnumeration {
        GeometryEnumeration::VERTEX | GeometryEnumeration::FACE
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
            let anchor = &self.anchors[anchor_index];
            for (local, point) in anchor.vertices.iter().enumerate() {
                visit(VertexIndex(block.vertex_offset + local), Vertex::from_point(*point));
            }
        }
    }

    fn for_each_face<F>(&self, mut visit: F)
    where
        F: FnMut(FaceIndex, Face),
    {
        for (anchor_index, block) in self.offsets.non_empty() {
            let anchor = &self.anchors[anchor_index];
            for (local, triangle) in anchor.triangle_indices.chunks_exact(3).enumerate() {
                let indices = [
                    usize::from(triangle[0]),
                    usize::from(triangle[1]),
                    usize::from(triangle[2]),
                ];
                visit(
                    FaceIndex(block.face_offset + local),
                    global_face(indices, block.vertex_offset),
                );
            }
        }
    }
}
