//! OBJ text encoding of enumerated geometry.
//!
//! Produces `v`, `vn` and `f` lines only. Face indices are written one-based.

use std::io::{self, BufWriter, Write};

use tracing::debug_span;

use crate::anchor::{FaceAnchor, MeshAnchor, PlaneAnchor};
use crate::enumerator::{EnumerateGeometry, GeometryEnumerator};
use crate::geometry::{Face, GeometryEnumeration};

/// Wavefront OBJ encoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjEncoder;

impl ObjEncoder {
    pub fn new() -> Self {
        Self
    }

    /// Encodes `enumerator` as OBJ text. Returns `None` when there are no
    /// vertices.
    pub fn encode<E: EnumerateGeometry>(&self, enumerator: &E) -> Option<Vec<u8>> {
        let mut out = Vec::new();
        match self.write_to(enumerator, &mut out) {
            Ok(true) => Some(out),
            // Writing into a Vec never fails.
            Ok(false) | Err(_) => None,
        }
    }

    /// Streams OBJ text into `writer`. Returns `Ok(false)` and writes nothing
    /// when there are no vertices.
    pub fn write_to<E, W>(&self, enumerator: &E, writer: W) -> io::Result<bool>
    where
        E: EnumerateGeometry,
        W: Write,
    {
        let num_vertices = enumerator.total_vertex_count();
        if num_vertices == 0 {
            return Ok(false);
        }
        let num_faces = enumerator.total_face_count();
        let with_normals = enumerator.supports(GeometryEnumeration::NORMAL);
        let _span = debug_span!("obj_encode", vertices = num_vertices, faces = num_faces, normals = with_normals).entered();

        let mut writer = BufWriter::new(writer);
        // The visitors can't return errors, so the first one is parked here
        // and every later line is skipped.
        let mut error: Option<io::Error> = None;

        enumerator.for_each_vertex(|_, vertex| {
            let p = vertex.xyz();
            emit(&mut writer, &mut error, |w| writeln!(w, "v {} {} {}", p.x, p.y, p.z));
        });
        if with_normals {
            enumerator.for_each_normal(|_, normal| {
                let n = normal.direction;
                emit(&mut writer, &mut error, |w| writeln!(w, "vn {} {} {}", n.x, n.y, n.z));
            });
        }
        enumerator.for_each_face(|_, face| {
            emit(&mut writer, &mut error, |w| write_face(w, face, with_normals));
        });

        if let Some(err) = error {
            // Discard buffered lines; dropping the writer would flush them.
            let _ = writer.into_parts();
            return Err(err);
        }
        writer.flush()?;
        Ok(true)
    }

    /// Encodes a set of face anchors as one OBJ document.
    pub fn encode_face_anchors(&self, anchors: &[FaceAnchor]) -> Option<Vec<u8>> {
        self.encode(&GeometryEnumerator::for_face_anchors(anchors))
    }

    /// Encodes a set of mesh anchors as one OBJ document.
    pub fn encode_mesh_anchors(&self, anchors: &[MeshAnchor]) -> Option<Vec<u8>> {
        self.encode(&GeometryEnumerator::for_mesh_anchors(anchors))
    }

    /// Encodes a set of plane anchors as one OBJ document.
    pub fn encode_plane_anchors(&self, anchors: &[PlaneAnchor]) -> Option<Vec<u8>> {
        self.encode(&GeometryEnumerator::for_plane_anchors(anchors))
    }
}

/// Writes one line unless an earlier line failed, keeping the first error.
fn emit<W: Write>(writer: &mut W, error: &mut Option<io::Error>, line: impl FnOnce(&mut W) -> io::Result<()>) {
    if error.is_some() {
        return;
    }
    if let Err(err) = line(writer) {
        *error = Some(err);
    }
}

/// Global zero-based indices to OBJ one-based indices.
fn one_based(face: Face) -> [usize; 3] {
    face.vertex_indices.map(|v| v.0 + 1)
}

fn write_face<W: Write>(writer: &mut W, face: Face, with_normals: bool) -> io::Result<()> {
    let [a, b, c] = one_based(face);
    if with_normals {
        writeln!(writer, "f {a}//{a} {b}//{b} {c}//{c}")
    } else {
        writeln!(writer, "f {a} {b} {c}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor::{FaceBuffer, MeshGeometry};
    use glam::{Mat4, Vec3};

    fn text(bytes: Option<Vec<u8>>) -> String {
        String::from_utf8(bytes.expect("no output")).unwrap()
    }

    #[test]
    fn single_triangle() {
        let anchors = [FaceAnchor::new(vec![[0.0; 3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]], vec![0, 1, 2])];
        let obj = text(ObjEncoder::new().encode_face_anchors(&anchors));
        assert_eq!(obj, "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n");
    }

    #[test]
    fn second_anchor_faces_are_shifted() {
        let anchors = [
            FaceAnchor::new(vec![[0.0; 3]; 3], vec![0, 1, 2]),
            FaceAnchor::new(vec![[0.5; 3]; 3], vec![2, 1, 0]),
        ];
        let obj = text(ObjEncoder::new().encode_face_anchors(&anchors));
        let faces: Vec<&str> = obj.lines().filter(|l| l.starts_with("f ")).collect();
        assert_eq!(faces, vec!["f 1 2 3", "f 6 5 4"]);
    }

    #[test]
    fn mesh_anchors_write_normals() {
        let anchors = [MeshAnchor::new(MeshGeometry {
            vertices: vec![[0.0; 3], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]],
            normals: vec![[0.0, 1.0, 0.0]; 3],
            faces: FaceBuffer::U16(vec![[0, 2, 1]]),
            classifications: None,
        })];
        let obj = text(ObjEncoder::new().encode_mesh_anchors(&anchors));
        let lines: Vec<&str> = obj.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[3], "vn 0 1 0");
        assert_eq!(lines[6], "f 1//1 3//3 2//2");
    }

    #[test]
    fn plane_anchors_have_no_normals() {
        let anchors = [PlaneAnchor::new(Mat4::IDENTITY, Vec3::ZERO, Vec3::new(2.0, 0.0, 2.0))];
        let obj = text(ObjEncoder::new().encode_plane_anchors(&anchors));
        assert_eq!(obj.lines().filter(|l| l.starts_with("v ")).count(), 4);
        assert!(!obj.contains("vn "));
        assert!(obj.contains("f 1 2 3\nf 1 3 4\n"));
    }

    #[test]
    fn empty_input_writes_nothing() {
        let encoder = ObjEncoder::new();
        assert!(encoder.encode_mesh_anchors(&[]).is_none());

        let mut out = Vec::new();
        let written = encoder
            .write_to(&GeometryEnumerator::for_face_anchors(&[]), &mut out)
            .unwrap();
        assert!(!written);
        assert!(out.is_empty());
    }

    #[test]
    fn fractional_coordinates_round_trip() {
        let anchors = [FaceAnchor::new(vec![[0.1, -2.5, 3.25]; 3], vec![0, 1, 2])];
        let obj = text(ObjEncoder::new().encode_face_anchors(&anchors));
        assert!(obj.starts_with("v 0.1 -2.5 3.25\n"));
    }

    /// Rejects every write and counts the attempts.
    #[derive(Default)]
    struct ClosedPipe {
        writes: usize,
    }

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            self.writes += 1;
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn first_write_error_stops_output() {
        // Enough text to overflow the write buffer several times.
        let anchors = [FaceAnchor::new(vec![[0.1, -2.5, 3.25]; 2000], vec![0, 1, 2])];
        let enumerator = GeometryEnumerator::for_face_anchors(&anchors);

        let mut pipe = ClosedPipe::default();
        let err = ObjEncoder::new().write_to(&enumerator, &mut pipe).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(pipe.writes, 1);
    }
}
