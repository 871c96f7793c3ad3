#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodedGeometryType {
    InvalidGeometryType = -1,
    PointCloud = 0,
    TriangularMesh = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshEncodingMethod {
    MeshSequentialEncoding = 0,
    MeshEdgebreakerEncoding = 1,
}

/// Per-attribute decoder selected by a sequential attribute encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequentialDecoderType {
    Generic = 0,
    Integer = 1,
    Quantization = 2,
    Normals = 3,
}
