use cgmath::{InnerSpace, Vector3 as Vec3};

/// Corners of the unit cube. 0..4 lie on z = 0, 4..8 on z = 1.
pub const CUBE_VERTICES: [Vec3<f32>; 8] = [
    Vec3 { x: 0.0, y: 0.0, z: 0.0 },
    Vec3 { x: 1.0, y: 0.0, z: 0.0 },
    Vec3 { x: 1.0, y: 1.0, z: 0.0 },
    Vec3 { x: 0.0, y: 1.0, z: 0.0 },
    Vec3 { x: 0.0, y: 0.0, z: 1.0 },
    Vec3 { x: 1.0, y: 0.0, z: 1.0 },
    Vec3 { x: 1.0, y: 1.0, z: 1.0 },
    Vec3 { x: 0.0, y: 1.0, z: 1.0 },
];

/// Vertex indices per face: front, back, left, right, bottom, top.
pub const FACE_INDICES: [[usize; 4]; 6] = [
    [0, 1, 5, 4],
    [2, 3, 7, 6],
    [0, 3, 7, 4],
    [1, 2, 6, 5],
    [0, 1, 2, 3],
    [4, 5, 6, 7],
];

/// Die value shown on each face, in `FACE_INDICES` order. Opposite faces sum to 7.
pub const FACE_VALUES: [u8; 6] = [1, 6, 2, 5, 3, 4];

/// Side names in `FACE_INDICES` order, used in log output.
pub const FACE_NAMES: [&str; 6] = ["front", "back", "left", "right", "bottom", "top"];

const CUBE_CENTER: Vec3<f32> = Vec3 { x: 0.5, y: 0.5, z: 0.5 };

/// One quadrilateral side of the die.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    pub vertices: [Vec3<f32>; 4],
    pub value: u8,
}

impl Face {
    pub fn center(&self) -> Vec3<f32> {
        (self.vertices[0] + self.vertices[1] + self.vertices[2] + self.vertices[3]) / 4.0
    }

    /// Unit normal pointing away from the cube center.
    pub fn normal(&self) -> Vec3<f32> {
        let e1 = self.vertices[1] - self.vertices[0];
        let e2 = self.vertices[3] - self.vertices[0];
        let n = e1.cross(e2).normalize();
        if n.dot(self.center() - CUBE_CENTER) < 0.0 { -n } else { n }
    }

    /// The four boundary segments in winding order.
    pub fn edges(&self) -> [(Vec3<f32>, Vec3<f32>); 4] {
        let v = &self.vertices;
        [(v[0], v[1]), (v[1], v[2]), (v[2], v[3]), (v[3], v[0])]
    }
}

pub fn build_faces() -> [Face; 6] {
    std::array::from_fn(|i| Face {
        vertices: FACE_INDICES[i].map(|idx| CUBE_VERTICES[idx]),
        value: FACE_VALUES[i],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    #[test]
    fn test_faces_are_planar_unit_squares() {
        for face in build_faces() {
            let n = face.normal();
            let v0 = face.vertices[0];
            for v in face.vertices {
                assert!((v - v0).dot(n).abs() < EPS);
            }
            for (a, b) in face.edges() {
                assert!(((b - a).magnitude() - 1.0).abs() < EPS);
            }
            // adjacent edges are perpendicular, so the quad is a convex square
            let e1 = face.vertices[1] - v0;
            let e2 = face.vertices[3] - v0;
            assert!(e1.dot(e2).abs() < EPS);
            assert!(((face.vertices[2] - v0) - (e1 + e2)).magnitude() < EPS);
        }
    }

    #[test]
    fn test_values_are_a_permutation() {
        let mut values: Vec<u8> = build_faces().iter().map(|f| f.value).collect();
        values.sort();
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_opposite_faces_sum_to_seven() {
        let faces = build_faces();
        for a in &faces {
            let b = faces.iter().find(|f| f.value == 7 - a.value).unwrap();
            for v in a.vertices {
                assert!(!b.vertices.contains(&v), "faces {} and {} share a vertex", a.value, b.value);
            }
            assert!((a.normal() + b.normal()).magnitude() < EPS);
        }
    }

    #[test]
    fn test_normals_point_outward() {
        for face in build_faces() {
            let outward = face.center() - CUBE_CENTER;
            assert!((face.normal() - outward * 2.0).magnitude() < EPS);
        }
    }

    #[test]
    fn test_face_names_match_normals() {
        let expected = [
            ("front", Vec3::new(0.0, -1.0, 0.0)),
            ("back", Vec3::new(0.0, 1.0, 0.0)),
            ("left", Vec3::new(-1.0, 0.0, 0.0)),
            ("right", Vec3::new(1.0, 0.0, 0.0)),
            ("bottom", Vec3::new(0.0, 0.0, -1.0)),
            ("top", Vec3::new(0.0, 0.0, 1.0)),
        ];
        for ((face, name), (want_name, want_normal)) in build_faces().iter().zip(FACE_NAMES).zip(expected) {
            assert_eq!(name, want_name);
            assert!((face.normal() - want_normal).magnitude() < EPS);
        }
    }
}
