pub mod clip;
pub mod fragment_shader;
pub mod vertex_shader;

use std::f32::consts::PI;

use cgmath::{InnerSpace, Matrix4 as Mat4, Vector2 as Vec2, Vector3 as Vec3};
use log::debug;

use crate::camera::Camera;
use crate::color::{Rgb, to_argb};
use crate::framebuffer::FrameBuffer;
use crate::rasterizer;
use crate::scene::{FacePolygon, PipShading, PipSphere, Scene};
use crate::vertex::{ClipSpaceVertex, ColoredVertex, RasterPoint, RasterTriangle, Triangle};

use self::clip::{Clipper, SimpleClipper};
use self::fragment_shader::{FragmentData, FragmentShader, HeightGradientShader, VertexColorShader};
use self::vertex_shader::{DefaultVertexShader, VertexShader, VertexShaderUniforms};

/// Pulls edges toward the camera so they win against the faces they border.
pub const EDGE_DEPTH_BIAS: f32 = 1e-3;

/// Pulls a polygon that exactly covers the one drawn before it (a shadow
/// overlay) past that polygon's edges, so the overlay darkens them too.
pub const OVERLAY_DEPTH_BIAS: f32 = 2.0 * EDGE_DEPTH_BIAS;

pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

enum DrawItem<'a> {
    Polygon(&'a FacePolygon),
    Sphere(&'a PipSphere),
}

pub struct Renderer {
    pub(crate) camera: Camera,
    pub(crate) framebuffer: FrameBuffer,
    pub(crate) viewport: Viewport,
}

impl Renderer {
    pub fn new(camera: Camera, w: usize, h: usize) -> Self {
        Self {
            camera,
            framebuffer: FrameBuffer::new(w, h),
            viewport: Viewport {
                x: 0,
                y: 0,
                w: w as i32,
                h: h as i32,
            },
        }
    }

    pub fn into_framebuffer(self) -> FrameBuffer {
        self.framebuffer
    }

    /// Draws the whole scene over its background. Primitives go back to front
    /// by view depth so translucent layers blend over what lies behind them;
    /// the depth buffer still resolves pips that cross a face plane.
    pub fn render_scene(&mut self, scene: &Scene) -> usize {
        self.framebuffer.clear(to_argb(scene.background));
        let mvp = self.camera.get_view_proj_mat();

        let mut items: Vec<(f32, DrawItem)> = scene
            .faces
            .iter()
            .map(|f| (self.camera.view_depth(polygon_center(f)), DrawItem::Polygon(f)))
            .chain(
                scene
                    .pips
                    .iter()
                    .map(|p| (self.camera.view_depth(p.center), DrawItem::Sphere(p))),
            )
            .collect();
        // stable, so a shadow overlay stays right behind its face
        items.sort_by(|a, b| b.0.total_cmp(&a.0));

        let mut drawn = 0;
        let mut last_polygon: Option<&[Vec3<f32>; 4]> = None;
        for (_, item) in items {
            drawn += match item {
                DrawItem::Polygon(poly) => {
                    let depth_bias = if last_polygon == Some(&poly.vertices) {
                        OVERLAY_DEPTH_BIAS
                    } else {
                        0.0
                    };
                    last_polygon = Some(&poly.vertices);
                    self.draw_polygon(poly, depth_bias, &mvp)
                }
                DrawItem::Sphere(sphere) => {
                    last_polygon = None;
                    self.draw_sphere(sphere, &mvp)
                }
            };
        }
        debug!("rasterized {drawn} triangles");
        drawn
    }

    fn draw_polygon(&mut self, poly: &FacePolygon, depth_bias: f32, mvp: &Mat4<f32>) -> usize {
        let v = poly.vertices.map(|pos| ColoredVertex::new(pos, poly.fill, poly.alpha));
        let triangles = [Triangle::new(v[0], v[1], v[2]), Triangle::new(v[0], v[2], v[3])];
        let drawn = self.draw_triangles(&triangles, mvp, &VertexColorShader, depth_bias);

        if let Some(edge) = poly.edge {
            let thickness = (edge.width * self.viewport.h as f32 / 1000.0).max(1.0);
            for i in 0..4 {
                let (a, b) = (poly.vertices[i], poly.vertices[(i + 1) % 4]);
                self.draw_edge(a, b, edge.color, poly.alpha, thickness, mvp);
            }
        }
        drawn
    }

    fn draw_sphere(&mut self, sphere: &PipSphere, mvp: &Mat4<f32>) -> usize {
        let eye = self.camera.eye();
        let (color, alpha) = match &sphere.shading {
            PipShading::Flat { color, alpha } => (*color, *alpha),
            PipShading::Gradient(_) => (Vec3::new(0.0, 0.0, 0.0), 1.0),
        };
        // back hemisphere never shows through the front one
        let front: Vec<Triangle> = sphere_triangles(sphere, color, alpha)
            .into_iter()
            .filter(|t| {
                let c = t.get_center();
                (c - sphere.center).dot(eye - c) > 0.0
            })
            .collect();

        match &sphere.shading {
            PipShading::Flat { .. } => self.draw_triangles(&front, mvp, &VertexColorShader, 0.0),
            PipShading::Gradient(colors) => {
                self.draw_triangles(&front, mvp, &HeightGradientShader { colors }, 0.0)
            }
        }
    }

    fn draw_triangles(
        &mut self,
        triangles: &[Triangle],
        mvp: &Mat4<f32>,
        shader: &dyn FragmentShader,
        depth_bias: f32,
    ) -> usize {
        let vertex_shader = DefaultVertexShader;
        let clipper = SimpleClipper;
        let uniforms = VertexShaderUniforms { mvp_matrix: mvp };

        let mut drawn = 0;
        for triangle in triangles {
            let clip_space_triangle = vertex_shader.shade_triangle(triangle, &uniforms);
            for clipped in clipper.clip_triangle(&clip_space_triangle) {
                let raster_triangle = self.viewport_transform(&clipped);
                self.rasterize_triangle(&raster_triangle, shader, depth_bias);
                drawn += 1;
            }
        }
        drawn
    }

    fn to_screen(&self, clip: &ClipSpaceVertex) -> (Vec2<f32>, f32) {
        let ndc = clip.position / clip.position.w;
        let screen_x = (ndc.x + 1.0) * 0.5 * self.viewport.w as f32 + self.viewport.x as f32;
        let screen_y =
            self.viewport.h as f32 - (ndc.y + 1.0) * 0.5 * self.viewport.h as f32 + self.viewport.y as f32;
        (Vec2::new(screen_x, screen_y), (ndc.z + 1.0) * 0.5)
    }

    fn viewport_transform(&self, clip_triangle: &[ClipSpaceVertex; 3]) -> RasterTriangle {
        let vertices = clip_triangle.map(|clip_v| {
            let (pos, z) = self.to_screen(&clip_v);
            RasterPoint {
                pos,
                z,
                world_pos: clip_v.world_pos,
                color: clip_v.color,
                alpha: clip_v.alpha,
            }
        });
        RasterTriangle { vertices }
    }

    /// `depth_bias` is subtracted from every fragment depth before the test.
    pub fn rasterize_triangle(&mut self, triangle: &RasterTriangle, shader: &dyn FragmentShader, depth_bias: f32) {
        let points = &triangle.vertices;
        let corners = [points[0].pos, points[1].pos, points[2].pos];
        let (min_x, min_y, max_x, max_y) =
            rasterizer::get_box(&corners, self.framebuffer.width, self.framebuffer.height);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                if !rasterizer::is_inside_triangle(&corners, &p) {
                    continue;
                }
                let Some(bary) = rasterizer::get_barycentric_coords(&corners, &p) else {
                    continue;
                };

                let fragment = FragmentData {
                    world_pos: rasterizer::interpolate_world_pos(points, bary),
                    color: rasterizer::interpolate_color(points, bary),
                    alpha: rasterizer::interpolate_alpha(points, bary),
                };
                let depth = rasterizer::interpolate_depth(points, bary) - depth_bias;
                let (color, alpha) = shader.shade(&fragment);
                self.framebuffer
                    .blend_pixel(x as usize, y as usize, color, alpha, depth);
            }
        }
    }

    /// Thick screen-space line, depth tested against the scene.
    fn draw_edge(&mut self, a: Vec3<f32>, b: Vec3<f32>, color: Rgb, alpha: f32, thickness: f32, mvp: &Mat4<f32>) {
        let project = |p: Vec3<f32>| ClipSpaceVertex {
            position: *mvp * p.extend(1.0),
            world_pos: p,
            color,
            alpha,
        };
        let (ca, cb) = (project(a), project(b));
        if ca.position.w <= 1e-6 || cb.position.w <= 1e-6 {
            return;
        }
        let (sa, za) = self.to_screen(&ca);
        let (sb, zb) = self.to_screen(&cb);

        let delta = sb - sa;
        let steps = delta.x.abs().max(delta.y.abs()).ceil().max(1.0) as usize;
        let half = thickness * 0.5;
        for step in 0..=steps {
            let t = step as f32 / steps as f32;
            let p = sa + delta * t;
            let z = za + (zb - za) * t - EDGE_DEPTH_BIAS;
            let (x0, x1) = ((p.x - half).round() as i64, (p.x + half).round() as i64);
            let (y0, y1) = ((p.y - half).round() as i64, (p.y + half).round() as i64);
            for y in y0.max(0)..y1.max(y0 + 1) {
                for x in x0.max(0)..x1.max(x0 + 1) {
                    self.framebuffer.blend_pixel(x as usize, y as usize, color, alpha, z);
                }
            }
        }
    }
}

fn polygon_center(poly: &FacePolygon) -> Vec3<f32> {
    let v = &poly.vertices;
    (v[0] + v[1] + v[2] + v[3]) / 4.0
}

/// Tessellates a pip on a `resolution`×`resolution` (u, v) grid,
/// u around the z axis and v from pole to pole. Degenerate pole slivers
/// are dropped.
pub fn sphere_triangles(sphere: &PipSphere, color: Rgb, alpha: f32) -> Vec<Triangle> {
    let n = sphere.resolution.max(3);
    let point = |i: usize, j: usize| {
        let u = 2.0 * PI * i as f32 / (n - 1) as f32;
        let v = PI * j as f32 / (n - 1) as f32;
        let offset = Vec3::new(u.cos() * v.sin(), u.sin() * v.sin(), v.cos());
        ColoredVertex::new(sphere.center + offset * sphere.radius, color, alpha)
    };

    let mut triangles = Vec::with_capacity(2 * (n - 1) * (n - 1));
    for i in 0..n - 1 {
        for j in 0..n - 1 {
            let (a, b, c, d) = (point(i, j), point(i + 1, j), point(i + 1, j + 1), point(i, j + 1));
            for tri in [Triangle::new(a, b, c), Triangle::new(a, c, d)] {
                let [p0, p1, p2] = tri.vertices.map(|v| v.pos);
                if (p1 - p0).cross(p2 - p0).magnitude2() > 1e-14 {
                    triangles.push(tri);
                }
            }
        }
    }
    triangles
}
