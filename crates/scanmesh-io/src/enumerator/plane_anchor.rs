use super::{global_face, BlockOffsets, EnumerateGeometry};
use crate::anchor::PlaneAnchor;
use crate::geometry::{Face, FaceIndex, GeometryEnumeration, Vertex, VertexIndex};

/// Enumerates a set of plane anchors as one geometry.
///
/// Each plane contributes its outline polygon, triangulated as a fan from
/// the first outline vertex. Outline vertices are transformed into world
/// space by the anchor transform.
#[derive(Debug, Clone)]
pub struct PlaneAnchorEnumerator<'a> {
    anchors: &'a [PlaneAnchor],
    offsets: BlockOffsets,
}

impl<'a> PlaneAnchorEnumerator<'a> {
    pub fn new(anchors: &'a [PlaneAnchor]) -> Self {
        let offsets = BlockOffsets::new(
            anchors
                .iter()
                .map(|anchor| (anchor.vertex_count(), anchor.face_count())),
        );
        Self { anchors, offsets }
    }
}

impl EnumerateGeometry for PlaneAnchorEnumerator<'_> {
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
            for (local, point) in anchor.local_outline().into_iter().enumerate() {
                let position = anchor.transform * point.extend(1.0);
                visit(VertexIndex(block.vertex_offset + local), Vertex { position });
            }
        }
    }

    fn for_each_face<F>(&self, mut visit: F)
    where
        F: FnMut(FaceIndex, Face),
    {
        for (_, block) in self.offsets.non_empty() {
            for local in 0..block.face_count {
                visit(
                    FaceIndex(block.face_offset + local),
                    global_face([0, local + 1, local + 2], block.vertex_offset),
                );
            }
        }
    }
}
