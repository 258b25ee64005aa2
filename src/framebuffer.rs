use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};
use rayon::prelude::*;

use crate::color::{Rgb, from_argb, to_argb};

/// Color and depth targets. Colors are `0xAARRGGBB`, depth is 0..=1 with
/// smaller values closer to the camera.
#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u32>,
    pub depth: Vec<f32>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        FrameBuffer {
            width,
            height,
            data: vec![0; width * height],
            depth: vec![f32::INFINITY; width * height],
        }
    }

    pub fn clear(&mut self, color: u32) {
        self.data.fill(color);
        self.depth.fill(f32::INFINITY);
    }

    pub fn pixel(&self, x: usize, y: usize) -> u32 {
        self.data[y * self.width + x]
    }

    /// Source-over blend. Passes the depth test on ties so coplanar overlays
    /// land on top of the surface they cover.
    pub fn blend_pixel(&mut self, x: usize, y: usize, color: Rgb, alpha: f32, depth: f32) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = y * self.width + x;
        if depth > self.depth[idx] {
            return;
        }
        let alpha = alpha.clamp(0.0, 1.0);
        let dst = from_argb(self.data[idx]);
        self.data[idx] = to_argb(color * alpha + dst * (1.0 - alpha));
        self.depth[idx] = depth;
    }

    /// Box-filter downsample by `factor` in each direction.
    pub fn ssaa(&self, factor: usize) -> Self {
        let factor = factor.max(1);
        let new_width = self.width / factor;
        let new_height = self.height / factor;
        let mut new_data = vec![0; new_width * new_height];
        let count = (factor * factor) as u32;

        if new_width > 0 {
            new_data
                .par_chunks_mut(new_width)
                .enumerate()
                .for_each(|(y, row)| {
                    for (x, out) in row.iter_mut().enumerate() {
                        let (mut a, mut r, mut g, mut b) = (0u32, 0u32, 0u32, 0u32);
                        for dy in 0..factor {
                            for dx in 0..factor {
                                let color = self.data[(y * factor + dy) * self.width + x * factor + dx];
                                a += (color >> 24) & 0xFF;
                                r += (color >> 16) & 0xFF;
                                g += (color >> 8) & 0xFF;
                                b += color & 0xFF;
                            }
                        }
                        *out = (a / count) << 24 | (r / count) << 16 | (g / count) << 8 | b / count;
                    }
                });
        }

        Self {
            width: new_width,
            height: new_height,
            data: new_data,
            depth: vec![f32::INFINITY; new_width * new_height],
        }
    }

    pub fn to_image(&self) -> RgbaImage {
        ImageBuffer::from_fn(self.width as u32, self.height as u32, |x, y| {
            let color = self.pixel(x as usize, y as usize);
            Rgba([
                ((color >> 16) & 0xFF) as u8,
                ((color >> 8) & 0xFF) as u8,
                (color & 0xFF) as u8,
                ((color >> 24) & 0xFF) as u8,
            ])
        })
    }

    /// Encoding is picked from the file extension.
    pub fn save_to_image(&self, path: &Path) -> Result<(), image::ImageError> {
        self.to_image().save(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector3 as Vec3;

    #[test]
    fn test_depth_test() {
        let mut fb = FrameBuffer::new(4, 4);
        fb.blend_pixel(1, 1, Vec3::new(0.0, 1.0, 0.0), 1.0, 0.5);
        fb.blend_pixel(1, 1, Vec3::new(1.0, 0.0, 0.0), 1.0, 0.7);
        assert_eq!(fb.pixel(1, 1), 0xFF00FF00);
        assert_eq!(fb.depth[5], 0.5);
        fb.blend_pixel(1, 1, Vec3::new(0.0, 0.0, 1.0), 1.0, 0.2);
        assert_eq!(fb.pixel(1, 1), 0xFF0000FF);
        assert_eq!(fb.depth[5], 0.2);
        // out of range writes are ignored
        fb.blend_pixel(9, 9, Vec3::new(1.0, 1.0, 1.0), 1.0, 0.0);
        assert!(fb.depth.iter().filter(|d| d.is_finite()).count() == 1);
    }

    #[test]
    fn test_blend_over_background() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.clear(0xFF000000);
        fb.blend_pixel(0, 0, Vec3::new(1.0, 1.0, 1.0), 0.5, 0.5);
        assert_eq!(fb.pixel(0, 0), 0xFF808080);
        // coplanar overlay passes, farther one does not
        fb.blend_pixel(0, 0, Vec3::new(0.0, 0.0, 0.0), 1.0, 0.5);
        assert_eq!(fb.pixel(0, 0), 0xFF000000);
        fb.blend_pixel(0, 0, Vec3::new(1.0, 1.0, 1.0), 1.0, 0.6);
        assert_eq!(fb.pixel(0, 0), 0xFF000000);
    }

    #[test]
    fn test_ssaa_averages() {
        let mut fb = FrameBuffer::new(4, 2);
        fb.clear(0xFF000000);
        fb.data[0] = 0xFFFFFFFF;
        fb.data[1] = 0xFFFFFFFF;
        let small = fb.ssaa(2);
        assert_eq!((small.width, small.height), (2, 1));
        assert_eq!(small.data[0], 0xFF7F7F7F);
        assert_eq!(small.data[1], 0xFF000000);
    }

    #[test]
    fn test_to_image_channels() {
        let mut fb = FrameBuffer::new(1, 1);
        fb.clear(0xFF112233);
        assert_eq!(fb.to_image().get_pixel(0, 0), &Rgba([0x11, 0x22, 0x33, 0xFF]));
    }
}
