use crate::vertex::ClipSpaceVertex;

pub trait Clipper {
    /// Zero or more triangles remaining after clipping.
    fn clip_triangle(&self, triangle: &[ClipSpaceVertex; 3]) -> Vec<[ClipSpaceVertex; 3]>;
}

/// Drops triangles touching or behind the eye plane and keeps the rest whole.
/// The camera frames the scene bounds, so partial clipping never comes up.
pub struct SimpleClipper;

impl Clipper for SimpleClipper {
    fn clip_triangle(&self, triangle: &[ClipSpaceVertex; 3]) -> Vec<[ClipSpaceVertex; 3]> {
        if triangle.iter().any(|v| v.position.w <= 1e-6) {
            vec![]
        } else {
            vec![*triangle]
        }
    }
}
