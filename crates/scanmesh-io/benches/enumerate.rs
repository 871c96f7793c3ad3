//! Benchmarks for anchor enumeration and export.
//!
//! Run with: cargo bench -p scanmesh-io

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use scanmesh_io::{
    DracoEncoder, DracoMesh, EnumerateGeometry, FaceBuffer, GeometryEnumerator, MeshAnchor,
    MeshGeometry, ObjEncoder,
};

// =============================================================================
// Test Scan Generation
// =============================================================================

/// A square grid patch with `n * n` quads, offset along X by `shift`.
fn grid_patch(n: u32, shift: f32) -> MeshAnchor {
    let mut vertices = Vec::with_capacity(((n + 1) * (n + 1)) as usize);
    for z in 0..=n {
        for x in 0..=n {
            vertices.push([shift + x as f32 / n as f32, 0.0, z as f32 / n as f32]);
        }
    }
    let stride = n + 1;
    let mut faces = Vec::with_capacity((n * n * 2) as usize);
    for z in 0..n {
        for x in 0..n {
            let i = z * stride + x;
            faces.push([i, i + stride, i + 1]);
            faces.push([i + 1, i + stride, i + stride + 1]);
        }
    }
    let normals = vec![[0.0, 1.0, 0.0]; vertices.len()];
    MeshAnchor::new(MeshGeometry {
        vertices,
        normals,
        faces: FaceBuffer::U32(faces),
        classifications: None,
    })
}

/// A scan made of `blocks` patches of 64x64 quads.
fn scan(blocks: u32) -> Vec<MeshAnchor> {
    (0..blocks).map(|b| grid_patch(64, b as f32)).collect()
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_enumerate(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumerate");
    for blocks in [1, 16, 64] {
        let anchors = scan(blocks);
        let enumerator = GeometryEnumerator::for_mesh_anchors(&anchors);
        group.throughput(Throughput::Elements(enumerator.total_face_count() as u64));
        group.bench_function(format!("faces_{blocks}_blocks"), |b| {
            b.iter(|| {
                let mut sum = 0usize;
                enumerator.for_each_face(|_, face| sum += face.vertex_indices[2].0);
                black_box(sum)
            })
        });
    }
    group.finish();
}

fn bench_export(c: &mut Criterion) {
    let anchors = scan(16);
    let enumerator = GeometryEnumerator::for_mesh_anchors(&anchors);

    let mut group = c.benchmark_group("export");
    group.throughput(Throughput::Elements(enumerator.total_vertex_count() as u64));
    group.bench_function("obj", |b| b.iter(|| ObjEncoder::new().encode(black_box(&enumerator))));
    group.bench_function("draco_build", |b| b.iter(|| DracoMesh::new(black_box(&enumerator))));
    group.bench_function("draco", |b| {
        let encoder = DracoEncoder::new();
        b.iter(|| encoder.encode_enumerator(black_box(&enumerator), None))
    });
    group.finish();
}

criterion_group!(benches, bench_enumerate, bench_export);
criterion_main!(benches);
