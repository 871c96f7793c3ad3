//! Typed 32-bit indices for the mesh model.

macro_rules! define_index {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        pub struct $name(pub u32);

        impl From<$name> for usize {
            fn from(v: $name) -> Self {
                v.0 as usize
            }
        }
    };
}

define_index!(
    /// Index into an attribute's value storage.
    AttributeValueIndex
);
define_index!(
    /// Index of a point of a point cloud or mesh.
    PointIndex
);
define_index!(
    /// Index of a mesh face.
    FaceIndex
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widen_to_usize() {
        assert_eq!(usize::from(PointIndex(7)), 7);
        assert_eq!(usize::from(FaceIndex(u32::MAX)), u32::MAX as usize);
    }
}
