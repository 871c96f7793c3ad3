//! Property-based tests for raw connectivity sizing.
//!
//! Run with: cargo test -p scanmesh-core -- proptest

use proptest::prelude::*;
use scanmesh_core::*;

fn varint_len(mut value: u64) -> usize {
    let mut len = 1;
    while value >= 0x80 {
        value >>= 7;
        len += 1;
    }
    len
}

/// Point count plus faces indexing into it, possibly none.
fn arb_layout() -> impl Strategy<Value = (usize, Vec<[u32; 3]>)> {
    prop_oneof![1usize..256, 256usize..65536, 65536usize..70000].prop_flat_map(|num_points| {
        let faces = prop::collection::vec(prop::array::uniform3(0..num_points as u32), 0..20);
        (Just(num_points), faces)
    })
}

fn build_mesh(num_points: usize, faces: &[[u32; 3]]) -> Mesh {
    let mut mesh = Mesh::new();
    mesh.set_num_points(num_points);
    let mut pos_att = PointAttribute::new();
    pos_att.init(GeometryAttributeType::Position, 3, DataType::Float32, false, num_points);
    mesh.add_attribute(pos_att);
    for face in faces {
        mesh.add_face(face.map(PointIndex));
    }
    mesh
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Index width follows the point count.
    #[test]
    fn connectivity_width_follows_point_count((num_points, faces) in arb_layout()) {
        let mesh = build_mesh(num_points, &faces);
        let data = SequentialCodec.encode(&mesh, &EncoderOptions::default()).unwrap();

        let indices: usize = match num_points {
            0..=255 => faces.len() * 3,
            256..=65535 => faces.len() * 6,
            _ => faces.iter().flatten().map(|i| varint_len(u64::from(*i))).sum(),
        };
        let header = 11;
        let counts = varint_len(faces.len() as u64) + varint_len(num_points as u64) + 1;
        let attributes = 1 + 1 + 5 + 1 + num_points * 12;
        prop_assert_eq!(data.len(), header + counts + indices + attributes);
    }
}
