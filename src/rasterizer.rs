use crate::vertex::RasterPoint;
use cgmath::{Vector2 as Vec2, Vector3 as Vec3, dot};

/// Weights of `p` relative to the triangle's three vertices, in vertex order.
pub fn get_barycentric_coords(vertices: &[Vec2<f32>; 3], p: &Vec2<f32>) -> Option<(f32, f32, f32)> {
    let v0 = vertices[1] - vertices[0];
    let v1 = vertices[2] - vertices[0];
    let v2 = *p - vertices[0];

    let d00 = dot(v0, v0);
    let d01 = dot(v0, v1);
    let d11 = dot(v1, v1);
    let d20 = dot(v2, v0);
    let d21 = dot(v2, v1);

    let denom = d00 * d11 - d01 * d01;
    if denom.abs() < 1e-9 {
        // degenerate, zero area
        return None;
    }

    let w1 = (d11 * d20 - d01 * d21) / denom;
    let w2 = (d00 * d21 - d01 * d20) / denom;
    Some((1.0 - w1 - w2, w1, w2))
}

pub fn interpolate_depth(points: &[RasterPoint; 3], bary: (f32, f32, f32)) -> f32 {
    let (w0, w1, w2) = bary;
    points[0].z * w0 + points[1].z * w1 + points[2].z * w2
}

pub fn interpolate_color(points: &[RasterPoint; 3], bary: (f32, f32, f32)) -> Vec3<f32> {
    let (w0, w1, w2) = bary;
    points[0].color * w0 + points[1].color * w1 + points[2].color * w2
}

pub fn interpolate_world_pos(points: &[RasterPoint; 3], bary: (f32, f32, f32)) -> Vec3<f32> {
    let (w0, w1, w2) = bary;
    points[0].world_pos * w0 + points[1].world_pos * w1 + points[2].world_pos * w2
}

pub fn interpolate_alpha(points: &[RasterPoint; 3], bary: (f32, f32, f32)) -> f32 {
    let (w0, w1, w2) = bary;
    points[0].alpha * w0 + points[1].alpha * w1 + points[2].alpha * w2
}

/// Pixel bounding box `(min_x, min_y, max_x, max_y)`, clamped to the target.
pub fn get_box(vertices: &[Vec2<f32>; 3], width: usize, height: usize) -> (i32, i32, i32, i32) {
    let min_x = vertices.iter().map(|v| v.x).fold(f32::INFINITY, f32::min);
    let max_x = vertices.iter().map(|v| v.x).fold(f32::NEG_INFINITY, f32::max);
    let min_y = vertices.iter().map(|v| v.y).fold(f32::INFINITY, f32::min);
    let max_y = vertices.iter().map(|v| v.y).fold(f32::NEG_INFINITY, f32::max);

    (
        (min_x.floor() as i32).max(0),
        (min_y.floor() as i32).max(0),
        (max_x.ceil() as i32).min(width as i32 - 1),
        (max_y.ceil() as i32).min(height as i32 - 1),
    )
}

pub fn is_inside_triangle(vertices: &[Vec2<f32>; 3], p: &Vec2<f32>) -> bool {
    let v0 = vertices[1] - vertices[0];
    let v1 = vertices[2] - vertices[1];
    let v2 = vertices[0] - vertices[2];

    let p0 = *p - vertices[0];
    let p1 = *p - vertices[1];
    let p2 = *p - vertices[2];

    let cross0 = v0.x * p0.y - v0.y * p0.x;
    let cross1 = v1.x * p1.y - v1.y * p1.x;
    let cross2 = v2.x * p2.y - v2.y * p2.x;

    (cross0 >= 0.0 && cross1 >= 0.0 && cross2 >= 0.0)
        || (cross0 <= 0.0 && cross1 <= 0.0 && cross2 <= 0.0)
}
