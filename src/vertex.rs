use cgmath::{Vector2 as Vec2, Vector3 as Vec3, Vector4 as Vec4};

/// Model-space vertex with an RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColoredVertex {
    pub pos: Vec3<f32>,
    pub color: Vec3<f32>,
    pub alpha: f32,
}

impl ColoredVertex {
    pub fn new(pos: Vec3<f32>, color: Vec3<f32>, alpha: f32) -> Self {
        Self { pos, color, alpha }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    pub vertices: [ColoredVertex; 3],
}

impl Triangle {
    pub fn new(v0: ColoredVertex, v1: ColoredVertex, v2: ColoredVertex) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }

    pub fn get_center(&self) -> Vec3<f32> {
        (self.vertices[0].pos + self.vertices[1].pos + self.vertices[2].pos) / 3.0
    }
}

/// Output of the vertex stage.
#[derive(Debug, Clone, Copy)]
pub struct ClipSpaceVertex {
    pub position: Vec4<f32>,
    pub world_pos: Vec3<f32>,
    pub color: Vec3<f32>,
    pub alpha: f32,
}

/// Screen-space point with depth in 0..=1 (0 = near plane).
#[derive(Debug, Clone, Copy)]
pub struct RasterPoint {
    pub pos: Vec2<f32>,
    pub z: f32,
    pub world_pos: Vec3<f32>,
    pub color: Vec3<f32>,
    pub alpha: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct RasterTriangle {
    pub vertices: [RasterPoint; 3],
}
