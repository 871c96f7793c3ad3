//! Assembly of enumerated geometry into the codec's mesh model.

use scanmesh_core::draco_types::DataType;
use scanmesh_core::geometry_attribute::{GeometryAttributeType, PointAttribute};
use scanmesh_core::geometry_indices::{
    AttributeValueIndex, FaceIndex as MeshFaceIndex, PointIndex,
};
use scanmesh_core::mesh::Mesh;
use scanmesh_core::EncoderOptions;
use tracing::debug_span;

use crate::draco_encoder::{DracoEncoder, EncoderResult};
use crate::enumerator::EnumerateGeometry;
use crate::geometry::GeometryEnumeration;

/// Largest vertex or face count the codec's `u32` indices can address.
pub const MAX_CODEC_ELEMENTS: usize = u32::MAX as usize;

/// Narrows a global index to the codec's index type.
pub(crate) fn codec_index(index: usize) -> Option<u32> {
    u32::try_from(index).ok()
}

/// A mesh ready for the Draco codec.
///
/// Positions are always present. Normals are added when the enumerator
/// produces them. Connectivity uses the enumerator's global indices as-is.
#[derive(Debug, Clone, Default)]
pub struct DracoMesh {
    mesh: Mesh,
}

impl DracoMesh {
    /// Drains `enumerator` into a new mesh.
    ///
    /// The codec indexes points and faces with `u32`. Vertices and faces
    /// past [`MAX_CODEC_ELEMENTS`] are not stored, and face corners that
    /// reference them are clamped to `u32::MAX`, which the codec's range
    /// check rejects. [`DracoEncoder`] refuses such enumerators before
    /// building a mesh.
    pub fn new<E: EnumerateGeometry>(enumerator: &E) -> Self {
        let num_vertices = enumerator.total_vertex_count();
        let num_faces = enumerator.total_face_count();
        let _span = debug_span!("draco_build_mesh", vertices = num_vertices, faces = num_faces).entered();

        let mut position = PointAttribute::new();
        position.init(GeometryAttributeType::Position, 3, DataType::Float32, false, num_vertices);
        enumerator.for_each_vertex(|index, vertex| {
            if let Some(i) = codec_index(index.0) {
                position.set_f32_value(AttributeValueIndex(i), &vertex.xyz().to_array());
            }
        });

        let normal = enumerator.supports(GeometryEnumeration::NORMAL).then(|| {
            let mut normal = PointAttribute::new();
            normal.init(GeometryAttributeType::Normal, 3, DataType::Float32, false, num_vertices);
            enumerator.for_each_normal(|index, n| {
                if let Some(i) = codec_index(index.0) {
                    normal.set_f32_value(AttributeValueIndex(i), &n.direction.to_array());
                }
            });
            normal
        });

        let mut mesh = Mesh::new();
        mesh.set_num_points(num_vertices);
        mesh.add_attribute(position);
        if let Some(normal) = normal {
            mesh.add_attribute(normal);
        }

        mesh.set_num_faces(num_faces);
        enumerator.for_each_face(|index, face| {
            if let Some(i) = codec_index(index.0) {
                let points = face
                    .vertex_indices
                    .map(|v| PointIndex(codec_index(v.0).unwrap_or(u32::MAX)));
                mesh.set_face(MeshFaceIndex(i), points);
            }
        });

        Self { mesh }
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn into_mesh(self) -> Mesh {
        self.mesh
    }

    /// True when there are no vertices to encode.
    pub fn is_empty(&self) -> bool {
        self.mesh.num_points() == 0
    }

    /// Encodes with the bundled sequential codec.
    pub fn encode(&self, options: &EncoderOptions) -> EncoderResult {
        DracoEncoder::new().encode(self, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor::{FaceAnchor, FaceBuffer, MeshAnchor, MeshGeometry};
    use crate::enumerator::GeometryEnumerator;

    #[test]
    fn face_anchor_mesh_has_positions_only() {
        let anchors = [FaceAnchor::new(vec![[0.0; 3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]], vec![0, 1, 2])];
        let mesh = DracoMesh::new(&GeometryEnumerator::for_face_anchors(&anchors));

        assert_eq!(mesh.mesh().num_points(), 3);
        assert_eq!(mesh.mesh().num_faces(), 1);
        assert_eq!(mesh.mesh().num_attributes(), 1);
        assert!(mesh.mesh().named_attribute(GeometryAttributeType::Normal).is_none());

        let mut value = [0.0f32; 3];
        let position = mesh.mesh().named_attribute(GeometryAttributeType::Position).unwrap();
        assert!(position.f32_value(AttributeValueIndex(1), &mut value));
        assert_eq!(value, [1.0, 0.0, 0.0]);
    }

    #[test]
    fn mesh_anchor_mesh_carries_normals_and_global_faces() {
        let block = |n: usize| MeshAnchor::new(MeshGeometry {
            vertices: vec![[0.0; 3]; n],
            normals: vec![[0.0, 1.0, 0.0]; n],
            faces: FaceBuffer::U32(vec![[0, 1, 2]]),
            classifications: None,
        });
        let anchors = [block(4), block(3)];
        let mesh = DracoMesh::new(&GeometryEnumerator::for_mesh_anchors(&anchors)).into_mesh();

        assert_eq!(mesh.num_points(), 7);
        assert_eq!(mesh.num_attributes(), 2);
        assert_eq!(mesh.face(MeshFaceIndex(1)), [PointIndex(4), PointIndex(5), PointIndex(6)]);

        let mut normal = [0.0f32; 3];
        let att = mesh.named_attribute(GeometryAttributeType::Normal).unwrap();
        assert!(att.f32_value(AttributeValueIndex(6), &mut normal));
        assert_eq!(normal, [0.0, 1.0, 0.0]);
    }

    #[test]
    fn indices_past_u32_do_not_wrap() {
        assert_eq!(codec_index(7), Some(7));
        assert_eq!(codec_index(MAX_CODEC_ELEMENTS), Some(u32::MAX));
        #[cfg(target_pointer_width = "64")]
        assert_eq!(codec_index(MAX_CODEC_ELEMENTS + 1), None);
    }

    #[test]
    fn empty_enumerator_gives_empty_mesh() {
        let mesh = DracoMesh::new(&GeometryEnumerator::for_mesh_anchors(&[]));
        assert!(mesh.is_empty());
        assert_eq!(mesh.mesh().num_faces(), 0);
    }
}
