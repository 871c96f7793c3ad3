// Draco mesh bitstream version constants.

/// Latest major version of the Draco Mesh bitstream.
pub const DRACO_MESH_BITSTREAM_VERSION_MAJOR: u8 = 2;

/// Latest minor version of the Draco Mesh bitstream.
pub const DRACO_MESH_BITSTREAM_VERSION_MINOR: u8 = 2;

/// The only version the sequential writer produces, and the only one a
/// pinned version may name.
pub const DEFAULT_MESH_VERSION: (u8, u8) = (
    DRACO_MESH_BITSTREAM_VERSION_MAJOR,
    DRACO_MESH_BITSTREAM_VERSION_MINOR,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mesh_version() {
        assert_eq!(DEFAULT_MESH_VERSION, (2, 2));
    }
}
