//! Geometric primitives produced by the enumerators.

use bitflags::bitflags;
use glam::{Vec3, Vec4};

bitflags! {
    /// The geometry streams an enumerator can produce.
    ///
    /// Asking an enumerator for a stream outside its set yields an empty
    /// sequence, so callers check the set instead of handling errors.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct GeometryEnumeration: u32 {
        /// Face enumeration.
        const FACE = 1 << 0;
        /// Vertex enumeration.
        const VERTEX = 1 << 1;
        /// Normal enumeration.
        const NORMAL = 1 << 2;
    }
}

/// A global, zero-based vertex index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct VertexIndex(pub usize);

/// A normal shares the index of the vertex it belongs to.
pub type NormalIndex = VertexIndex;

/// A global, zero-based face index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct FaceIndex(pub usize);

impl VertexIndex {
    /// The index shifted by a block's vertex offset.
    #[inline]
    pub fn offset_by(self, offset: usize) -> Self {
        Self(self.0 + offset)
    }
}

/// A vertex position in homogeneous coordinates. `w` is normally 1.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vertex {
    pub position: Vec4,
}

impl Vertex {
    pub fn from_point(point: [f32; 3]) -> Self {
        Self {
            position: Vec3::from_array(point).extend(1.0),
        }
    }

    /// The position with `w` dropped.
    pub fn xyz(&self) -> Vec3 {
        self.position.truncate()
    }
}

/// A triangle given by three vertex indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Face {
    pub vertex_indices: [VertexIndex; 3],
}

impl Face {
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self {
            vertex_indices: [VertexIndex(a), VertexIndex(b), VertexIndex(c)],
        }
    }
}

/// A per-vertex direction vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Normal {
    pub direction: Vec3,
}

impl Normal {
    pub fn from_array(direction: [f32; 3]) -> Self {
        Self {
            direction: Vec3::from_array(direction),
        }
    }
}
