use cgmath::{Deg, InnerSpace, Matrix4 as Mat4, Point3, Rad, Vector3 as Vec3};

use crate::scene::{Bounds, ViewAngles};

pub const FOVY_DEGREES: f32 = 30.0;

#[derive(Debug)]
pub struct Frustum {
    mat: Mat4<f32>,
}

impl Frustum {
    #[rustfmt::skip]
    pub fn new(near: f32, aspect: f32, far: f32, fovy: Rad<f32>) -> Self {
        let tan_half_fovy = (fovy.0 / 2.0).tan();
        let a = 1.0 / (aspect * tan_half_fovy);
        let b = 1.0 / tan_half_fovy;
        let c = -(far + near) / (far - near);
        let d = -2.0 * far * near / (far - near);

        let mat = Mat4::new(
            a,    0.0,   0.0,   0.0,
            0.0,  b,     0.0,   0.0,
            0.0,  0.0,   c,    -1.0,
            0.0,  0.0,   d,     0.0,
        );

        Self { mat }
    }

    pub fn get_mat(&self) -> &Mat4<f32> {
        &self.mat
    }
}

/// Perspective camera orbiting the center of the view bounds, z up.
#[derive(Debug)]
pub struct Camera {
    frustum: Frustum,
    pub(crate) eye: Vec3<f32>,
    pub(crate) at: Vec3<f32>,
    pub(crate) up: Vec3<f32>,
}

impl Camera {
    pub fn orbit(view: ViewAngles, bounds: Bounds, aspect: f32) -> Self {
        let elev: Rad<f32> = Deg(view.elevation).into();
        let azim: Rad<f32> = Deg(view.azimuth).into();
        let dir = Vec3::new(
            elev.0.cos() * azim.0.cos(),
            elev.0.cos() * azim.0.sin(),
            elev.0.sin(),
        );

        // The whole bounding sphere has to fit the narrower of the two FOVs.
        let fovy: Rad<f32> = Deg(FOVY_DEGREES).into();
        let fovx = 2.0 * ((fovy.0 / 2.0).tan() * aspect).atan();
        let half_fov = fovy.0.min(fovx) / 2.0;
        let radius = bounds.radius();
        let distance = radius / half_fov.sin();

        let at = bounds.center();
        let eye = at + dir * distance;
        let up = if elev.0.cos().abs() < 1e-4 {
            // looking straight down or up: keep the azimuth direction on screen
            -Vec3::new(azim.0.cos(), azim.0.sin(), 0.0) * elev.0.sin().signum()
        } else {
            Vec3::unit_z()
        };

        let near = (distance - radius * 1.05).max(1e-3);
        let far = distance + radius * 1.05;
        Self {
            frustum: Frustum::new(near, aspect, far, fovy),
            eye,
            at,
            up,
        }
    }

    pub fn eye(&self) -> Vec3<f32> {
        self.eye
    }

    pub fn get_view_mat(&self) -> Mat4<f32> {
        Mat4::look_at_rh(
            Point3::new(self.eye.x, self.eye.y, self.eye.z),
            Point3::new(self.at.x, self.at.y, self.at.z),
            self.up,
        )
    }

    pub fn get_view_proj_mat(&self) -> Mat4<f32> {
        self.frustum.get_mat() * self.get_view_mat()
    }

    /// Distance of `p` in front of the camera along the viewing axis.
    pub fn view_depth(&self, p: Vec3<f32>) -> f32 {
        (p - self.eye).dot((self.at - self.eye).normalize())
    }
}
