use crate::vertex::{ClipSpaceVertex, Triangle};
use cgmath::Matrix4 as Mat4;

pub struct VertexShaderUniforms<'a> {
    pub mvp_matrix: &'a Mat4<f32>,
}

pub trait VertexShader {
    /// World-space triangle in, clip-space triangle out.
    fn shade_triangle(&self, triangle: &Triangle, uniforms: &VertexShaderUniforms) -> [ClipSpaceVertex; 3];
}

pub struct DefaultVertexShader;

impl VertexShader for DefaultVertexShader {
    fn shade_triangle(&self, triangle: &Triangle, uniforms: &VertexShaderUniforms) -> [ClipSpaceVertex; 3] {
        triangle.vertices.map(|v| ClipSpaceVertex {
            position: *uniforms.mvp_matrix * v.pos.extend(1.0),
            world_pos: v.pos,
            color: v.color,
            alpha: v.alpha,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vertex::ColoredVertex;
    use cgmath::{SquareMatrix, Vector3 as Vec3, Vector4 as Vec4};

    #[test]
    fn test_identity_passes_through() {
        let v = |x: f32| ColoredVertex::new(Vec3::new(x, 1.0, 2.0), Vec3::new(0.5, 0.5, 0.5), 0.9);
        let tri = Triangle::new(v(0.0), v(1.0), v(2.0));
        let mvp = Mat4::identity();
        let out = DefaultVertexShader.shade_triangle(&tri, &VertexShaderUniforms { mvp_matrix: &mvp });
        assert_eq!(out[1].position, Vec4::new(1.0, 1.0, 2.0, 1.0));
        assert_eq!(out[2].world_pos, Vec3::new(2.0, 1.0, 2.0));
        assert_eq!(out[0].alpha, 0.9);
    }
}
