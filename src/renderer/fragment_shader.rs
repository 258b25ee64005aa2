use cgmath::Vector3 as Vec3;

use crate::color::{Rgb, sample_gradient};

#[derive(Debug)]
pub struct FragmentData {
    pub world_pos: Vec3<f32>,
    /// Interpolated vertex color.
    pub color: Vec3<f32>,
    pub alpha: f32,
}

pub trait FragmentShader: Sync {
    /// Final color (0.0..=1.0 channels) and opacity of one fragment.
    fn shade(&self, data: &FragmentData) -> (Rgb, f32);
}

/// Passes the interpolated vertex color through. Faces, shadows, flat pips.
pub struct VertexColorShader;

impl FragmentShader for VertexColorShader {
    fn shade(&self, data: &FragmentData) -> (Rgb, f32) {
        (data.color, data.alpha)
    }
}

/// Looks the color up in a colormap by world height, limits 0..=1.
pub struct HeightGradientShader<'a> {
    pub colors: &'a [Rgb],
}

impl FragmentShader for HeightGradientShader<'_> {
    fn shade(&self, data: &FragmentData) -> (Rgb, f32) {
        (sample_gradient(self.colors, data.world_pos.z), 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment(z: f32) -> FragmentData {
        FragmentData {
            world_pos: Vec3::new(0.3, 0.3, z),
            color: Vec3::new(0.2, 0.4, 0.6),
            alpha: 0.5,
        }
    }

    #[test]
    fn test_vertex_color_passthrough() {
        assert_eq!(VertexColorShader.shade(&fragment(0.0)), (Vec3::new(0.2, 0.4, 0.6), 0.5));
    }

    #[test]
    fn test_gradient_by_height() {
        let colors = [Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0)];
        let shader = HeightGradientShader { colors: &colors };
        assert_eq!(shader.shade(&fragment(-0.5)).0, colors[0]);
        assert_eq!(shader.shade(&fragment(1.5)).0, colors[1]);
        assert_eq!(shader.shade(&fragment(0.5)).1, 1.0);
    }
}
