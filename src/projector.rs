use cgmath::{Vector2 as Vec2, Vector3 as Vec3};

use crate::geometry::Face;

/// Map face-local pip coordinates onto the face plane.
///
/// The basis is `v1 - v0` and `v3 - v0`, so this is exact only for
/// parallelogram faces (every cube face is one). Output order follows input.
pub fn project(pips: &[Vec2<f32>], face: &Face) -> Vec<Vec3<f32>> {
    let v0 = face.vertices[0];
    let e1 = face.vertices[1] - v0;
    let e2 = face.vertices[3] - v0;
    pips.iter().map(|p| v0 + e1 * p.x + e2 * p.y).collect()
}
