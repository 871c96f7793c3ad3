//! Example exporting a synthetic room scan to OBJ and Draco.
//!
//! Builds a floor and two walls as plane anchors plus one reconstructed mesh
//! patch, then writes `room_planes.obj`, `room_planes.drc` and
//! `room_mesh.obj` to the current directory.
//!
//! Run with `RUST_LOG=debug` to see the encoder spans.

use std::fs;
use std::io;

use glam::{Mat4, Quat, Vec3};
use scanmesh_io::{
    ClassificationColoring, DefaultClassificationColoring, DracoEncoder, EncoderOptions,
    FaceBuffer, GeometryEnumerator, MeshAnchor, MeshGeometry, ObjEncoder, PlaneAnchor,
    PlaneClassification,
};

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let planes = room_planes();
    let coloring = DefaultClassificationColoring;
    for plane in &planes {
        let color = coloring.color_for_plane_classification(plane.classification);
        println!("{:?}: {} vertices, color {:?}", plane.classification, plane.vertex_count(), color.to_array());
    }

    // ========================================================================
    // Planes
    // ========================================================================

    if let Some(obj) = ObjEncoder::new().encode_plane_anchors(&planes) {
        fs::write("room_planes.obj", &obj)?;
        println!("✓ room_planes.obj ({} bytes)", obj.len());
    }

    let options = EncoderOptions::with_speed(5, 5);
    let result = DracoEncoder::new().encode_plane_anchors(&planes, Some(&options));
    match result.data() {
        Some(data) => {
            fs::write("room_planes.drc", data)?;
            println!("✓ room_planes.drc ({} bytes)", data.len());
        }
        None => println!("✗ draco: {}", result.status()),
    }

    // ========================================================================
    // Mesh
    // ========================================================================

    let patches = [grid_patch(8)];
    let enumerator = GeometryEnumerator::for_mesh_anchors(&patches);
    if let Some(obj) = ObjEncoder::new().encode(&enumerator) {
        fs::write("room_mesh.obj", &obj)?;
        println!("✓ room_mesh.obj ({} bytes)", obj.len());
    }

    Ok(())
}

fn room_planes() -> Vec<PlaneAnchor> {
    let floor = PlaneAnchor::new(Mat4::IDENTITY, Vec3::ZERO, Vec3::new(4.0, 0.0, 3.0))
        .with_classification(PlaneClassification::Floor);

    // Vertical planes: local +Y turned to face into the room.
    let north = Mat4::from_rotation_translation(
        Quat::from_rotation_x(std::f32::consts::FRAC_PI_2),
        Vec3::new(0.0, 1.25, -1.5),
    );
    let north_wall = PlaneAnchor::new(north, Vec3::ZERO, Vec3::new(4.0, 0.0, 2.5))
        .with_classification(PlaneClassification::Wall);

    let east = Mat4::from_rotation_translation(
        Quat::from_rotation_z(std::f32::consts::FRAC_PI_2),
        Vec3::new(2.0, 1.25, 0.0),
    );
    let east_wall = PlaneAnchor::new(east, Vec3::ZERO, Vec3::new(2.5, 0.0, 3.0))
        .with_classification(PlaneClassification::Wall)
        .with_boundary(vec![
            [-1.25, 0.0, -1.5],
            [-1.25, 0.0, 1.5],
            [1.25, 0.0, 1.5],
            [1.25, 0.0, 0.5],
            [0.5, 0.0, -1.5],
        ]);

    vec![floor, north_wall, east_wall]
}

fn grid_patch(n: usize) -> MeshAnchor {
    let mut vertices = Vec::with_capacity((n + 1) * (n + 1));
    for z in 0..=n {
        for x in 0..=n {
            let (fx, fz) = (x as f32 / n as f32, z as f32 / n as f32);
            vertices.push([fx, 0.05 * (fx * 6.0).sin(), fz]);
        }
    }
    let stride = (n + 1) as u32;
    let mut faces = Vec::with_capacity(n * n * 2);
    for z in 0..n as u32 {
        for x in 0..n as u32 {
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
