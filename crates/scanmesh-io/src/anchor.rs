//! Anchor geometry as delivered by the capture session.
//!
//! Each anchor owns its local vertex and index buffers. Indices inside an
//! anchor are local to that anchor.

use glam::{Mat4, Vec3};
use num_traits::AsPrimitive;

/// Classification of a reconstructed mesh face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MeshClassification {
    #[default]
    None = 0,
    Wall,
    Floor,
    Ceiling,
    Table,
    Seat,
    Window,
    Door,
}

impl MeshClassification {
    pub const ALL: [MeshClassification; 8] = [
        MeshClassification::None,
        MeshClassification::Wall,
        MeshClassification::Floor,
        MeshClassification::Ceiling,
        MeshClassification::Table,
        MeshClassification::Seat,
        MeshClassification::Window,
        MeshClassification::Door,
    ];
}

/// Classification of a detected plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlaneClassification {
    #[default]
    None = 0,
    Wall,
    Floor,
    Ceiling,
    Table,
    Seat,
    Window,
    Door,
}

impl PlaneClassification {
    pub const ALL: [PlaneClassification; 8] = [
        PlaneClassification::None,
        PlaneClassification::Wall,
        PlaneClassification::Floor,
        PlaneClassification::Ceiling,
        PlaneClassification::Table,
        PlaneClassification::Seat,
        PlaneClassification::Window,
        PlaneClassification::Door,
    ];
}

/// A tracked face. Vertices are in anchor-local space.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceAnchor {
    pub transform: Mat4,
    pub vertices: Vec<[f32; 3]>,
    /// Three indices per triangle. A trailing partial triangle is ignored.
    pub triangle_indices: Vec<u16>,
}

impl FaceAnchor {
    pub fn new(vertices: Vec<[f32; 3]>, triangle_indices: Vec<u16>) -> Self {
        Self {
            transform: Mat4::IDENTITY,
            vertices,
            triangle_indices,
        }
    }

    pub fn with_transform(mut self, transform: Mat4) -> Self {
        self.transform = transform;
        self
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangle_indices.len() / 3
    }
}

/// A mesh index source, stored with two or four bytes per index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FaceBuffer {
    U16(Vec<[u16; 3]>),
    U32(Vec<[u32; 3]>),
}

impl FaceBuffer {
    pub fn len(&self) -> usize {
        match self {
            FaceBuffer::U16(faces) => faces.len(),
            FaceBuffer::U32(faces) => faces.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn bytes_per_index(&self) -> usize {
        match self {
            FaceBuffer::U16(_) => 2,
            FaceBuffer::U32(_) => 4,
        }
    }

    /// The local indices of face `index`, widened to `usize`.
    pub fn face(&self, index: usize) -> Option<[usize; 3]> {
        match self {
            FaceBuffer::U16(faces) => faces.get(index).map(widen),
            FaceBuffer::U32(faces) => faces.get(index).map(widen),
        }
    }

    /// Every face in buffer order.
    pub fn iter(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
        (0..self.len()).filter_map(move |i| self.face(i))
    }
}

impl Default for FaceBuffer {
    fn default() -> Self {
        FaceBuffer::U32(Vec::new())
    }
}

fn widen<I: AsPrimitive<usize>>(face: &[I; 3]) -> [usize; 3] {
    [face[0].as_(), face[1].as_(), face[2].as_()]
}

/// Reconstructed surface geometry of one mesh anchor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshGeometry {
    pub vertices: Vec<[f32; 3]>,
    /// One normal per vertex.
    pub normals: Vec<[f32; 3]>,
    pub faces: FaceBuffer,
    /// One classification per face, when the session classifies surfaces.
    pub classifications: Option<Vec<MeshClassification>>,
}

/// A reconstructed surface patch. Vertices are in anchor-local space.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshAnchor {
    pub transform: Mat4,
    pub geometry: MeshGeometry,
}

impl MeshAnchor {
    pub fn new(geometry: MeshGeometry) -> Self {
        Self {
            transform: Mat4::IDENTITY,
            geometry,
        }
    }

    pub fn with_transform(mut self, transform: Mat4) -> Self {
        self.transform = transform;
        self
    }

    pub fn vertex_count(&self) -> usize {
        self.geometry.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.geometry.faces.len()
    }

    /// Classification of a local face; `None` when unclassified.
    pub fn face_classification(&self, local_face: usize) -> MeshClassification {
        self.geometry
            .classifications
            .as_ref()
            .and_then(|c| c.get(local_face).copied())
            .unwrap_or_default()
    }
}

/// A detected plane.
///
/// The plane lies in the anchor's local XZ plane. Its outline is the
/// boundary polygon when one was detected, otherwise the rectangle spanned by
/// `center` and `extent`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneAnchor {
    pub transform: Mat4,
    pub center: Vec3,
    pub extent: Vec3,
    pub boundary_vertices: Vec<[f32; 3]>,
    pub classification: PlaneClassification,
}

impl PlaneAnchor {
    /// A rectangular plane with no boundary polygon.
    pub fn new(transform: Mat4, center: Vec3, extent: Vec3) -> Self {
        Self {
            transform,
            center,
            extent,
            boundary_vertices: Vec::new(),
            classification: PlaneClassification::None,
        }
    }

    pub fn with_boundary(mut self, boundary_vertices: Vec<[f32; 3]>) -> Self {
        self.boundary_vertices = boundary_vertices;
        self
    }

    pub fn with_classification(mut self, classification: PlaneClassification) -> Self {
        self.classification = classification;
        self
    }

    fn has_boundary(&self) -> bool {
        self.boundary_vertices.len() >= 3
    }

    fn has_area(&self) -> bool {
        self.extent.x > 0.0 && self.extent.z > 0.0
    }

    /// Number of outline vertices.
    pub fn vertex_count(&self) -> usize {
        if self.has_boundary() {
            self.boundary_vertices.len()
        } else if self.has_area() {
            4
        } else {
            0
        }
    }

    /// Number of fan triangles covering the outline.
    pub fn face_count(&self) -> usize {
        self.vertex_count().saturating_sub(2)
    }

    /// Outline vertices in anchor-local space, counter-clockwise seen from +Y.
    pub fn local_outline(&self) -> Vec<Vec3> {
        if self.has_boundary() {
            return self.boundary_vertices.iter().copied().map(Vec3::from_array).collect();
        }
        if !self.has_area() {
            return Vec::new();
        }
        let half_x = self.extent.x * 0.5;
        let half_z = self.extent.z * 0.5;
        vec![
            self.center + Vec3::new(-half_x, 0.0, -half_z),
            self.center + Vec3::new(-half_x, 0.0, half_z),
            self.center + Vec3::new(half_x, 0.0, half_z),
            self.center + Vec3::new(half_x, 0.0, -half_z),
        ]
    }
}
