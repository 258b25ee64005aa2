//! Scene composition: turns a color scheme and a viewpoint into the list of
//! primitives the renderer draws. Nothing here touches pixels.

use cgmath::Vector3 as Vec3;
use log::debug;
use serde::Deserialize;

use crate::color::{self, BLACK, Rgb};
use crate::error::{DiceError, Result};
use crate::geometry::{FACE_NAMES, build_faces};
use crate::pips::pip_positions;
use crate::projector::project;
use crate::scheme::ColorScheme;

/// Hand-tuned brightness multiplier per face, in geometry order.
pub const LIGHTING_FACTORS: [f32; 6] = [1.0, 0.9, 0.95, 0.85, 0.92, 0.88];

/// Opacity of the black overlay drawn over each face, in geometry order.
pub const SHADOW_ALPHAS: [f32; 6] = [0.15, 0.2, 0.18, 0.22, 0.17, 0.25];

pub const DEFAULT_GRADIENT_STEPS: usize = 10;

/// Camera orientation in degrees. Elevation is measured from the xy plane,
/// azimuth around the z axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewAngles {
    pub elevation: f32,
    pub azimuth: f32,
}

impl ViewAngles {
    pub fn new(elevation: f32, azimuth: f32) -> Result<Self> {
        if !elevation.is_finite() || !azimuth.is_finite() {
            return Err(DiceError::InvalidArgument(format!(
                "view angles must be finite, got elevation={elevation} azimuth={azimuth}"
            )));
        }
        Ok(Self { elevation, azimuth })
    }
}

impl Default for ViewAngles {
    fn default() -> Self {
        Self { elevation: 22.0, azimuth: 45.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderStyle {
    /// Flat faces, plain translucent pips.
    Basic,
    /// Per-face lighting, shadow overlays and metallic pips.
    #[default]
    Enhanced,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneOptions {
    pub style: RenderStyle,
    pub gradient_steps: usize,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            style: RenderStyle::Enhanced,
            gradient_steps: DEFAULT_GRADIENT_STEPS,
        }
    }
}

impl RenderStyle {
    /// Heading shown for the rendered die, e.g. as the window title.
    pub fn title(self) -> &'static str {
        match self {
            RenderStyle::Basic => "3D Dice",
            RenderStyle::Enhanced => "Enhanced 3D Dice",
        }
    }
}

struct StyleParams {
    face_alpha: f32,
    edge_width: f32,
    pip_radius: f32,
    sphere_resolution: usize,
    bounds: Bounds,
}

impl RenderStyle {
    fn params(self) -> StyleParams {
        match self {
            RenderStyle::Basic => StyleParams {
                face_alpha: 0.9,
                edge_width: 2.0,
                pip_radius: 0.08,
                sphere_resolution: 10,
                bounds: Bounds { min: 0.0, max: 1.0 },
            },
            RenderStyle::Enhanced => StyleParams {
                face_alpha: 0.98,
                edge_width: 2.5,
                pip_radius: 0.062,
                sphere_resolution: 25,
                bounds: Bounds { min: -0.2, max: 1.2 },
            },
        }
    }
}

/// Axis-aligned view volume, identical on all three axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f32,
    pub max: f32,
}

impl Bounds {
    pub fn center(&self) -> Vec3<f32> {
        let c = (self.min + self.max) * 0.5;
        Vec3::new(c, c, c)
    }

    /// Radius of the sphere enclosing the box.
    pub fn radius(&self) -> f32 {
        (self.max - self.min) * 0.5 * 3f32.sqrt()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub color: Rgb,
    /// Line width in points at a 1000px tall image.
    pub width: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FacePolygon {
    pub vertices: [Vec3<f32>; 4],
    pub fill: Rgb,
    pub alpha: f32,
    pub edge: Option<Edge>,
    pub value: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PipShading {
    Flat { color: Rgb, alpha: f32 },
    /// Colormap indexed by world z, clamped to 0..=1.
    Gradient(Vec<Rgb>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PipSphere {
    pub center: Vec3<f32>,
    pub radius: f32,
    /// Samples along each of the u and v parameters.
    pub resolution: usize,
    pub shading: PipShading,
}

/// Everything one render pass draws.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub background: Rgb,
    pub bounds: Bounds,
    pub view: ViewAngles,
    /// Face polygons, each followed by its shadow overlay in the enhanced style.
    pub faces: Vec<FacePolygon>,
    pub pips: Vec<PipSphere>,
}

pub fn compose_scene(
    scheme: &ColorScheme,
    view: ViewAngles,
    options: &SceneOptions,
) -> Result<Scene> {
    let view = ViewAngles::new(view.elevation, view.azimuth)?;
    let params = options.style.params();
    let enhanced = options.style == RenderStyle::Enhanced;

    let edge = Edge {
        color: scheme.edge_rgb()?,
        width: params.edge_width,
    };
    let pip_shading = if enhanced {
        PipShading::Gradient(color::metallic_gradient(scheme.pip_rgb()?, options.gradient_steps)?)
    } else {
        PipShading::Flat {
            color: scheme.pip_rgb()?,
            alpha: 0.8,
        }
    };

    let mut faces = Vec::with_capacity(12);
    let mut pips = Vec::with_capacity(21);
    for (i, face) in build_faces().iter().enumerate() {
        let base = scheme.face_rgb(i)?;
        let fill = if enhanced {
            color::scale(base, LIGHTING_FACTORS[i])
        } else {
            base
        };
        faces.push(FacePolygon {
            vertices: face.vertices,
            fill,
            alpha: params.face_alpha,
            edge: Some(edge),
            value: face.value,
        });
        if enhanced {
            faces.push(FacePolygon {
                vertices: face.vertices,
                fill: BLACK,
                alpha: SHADOW_ALPHAS[i],
                edge: None,
                value: face.value,
            });
        }

        let layout = pip_positions(face.value as i32);
        debug!("{} face: value {}, {} pips", FACE_NAMES[i], face.value, layout.len());
        for center in project(layout, face) {
            pips.push(PipSphere {
                center,
                radius: params.pip_radius,
                resolution: params.sphere_resolution,
                shading: pip_shading.clone(),
            });
        }
    }

    debug!(
        "composed {} scene: {} polygons, {} pips",
        scheme.name,
        faces.len(),
        pips.len()
    );
    Ok(Scene {
        background: scheme.background_rgb()?,
        bounds: params.bounds,
        view,
        faces,
        pips,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderConfigError;
    use crate::scheme::{CLASSIC, COOL};
    use cgmath::InnerSpace;

    #[test]
    fn test_enhanced_scene_contents() {
        let scene = compose_scene(&CLASSIC, ViewAngles::default(), &SceneOptions::default()).unwrap();
        assert_eq!(scene.faces.len(), 12);
        assert_eq!(scene.pips.len(), 21);
        assert_eq!(scene.bounds, Bounds { min: -0.2, max: 1.2 });
        for (i, pair) in scene.faces.chunks(2).enumerate() {
            let (face, shadow) = (&pair[0], &pair[1]);
            assert_eq!(face.vertices, shadow.vertices);
            assert_eq!(shadow.fill, BLACK);
            assert_eq!(shadow.alpha, SHADOW_ALPHAS[i]);
            assert!(shadow.edge.is_none());
            assert_eq!(face.alpha, 0.98);
        }
        assert!(scene.pips.iter().all(|p| p.radius == 0.062 && p.resolution == 25));
        assert!(matches!(&scene.pips[0].shading, PipShading::Gradient(c) if c.len() == 10));
    }

    #[test]
    fn test_lighting_factors_applied() {
        let scene = compose_scene(&COOL, ViewAngles::default(), &SceneOptions::default()).unwrap();
        for i in 0..6 {
            let expected = color::scale(COOL.face_rgb(i).unwrap(), LIGHTING_FACTORS[i]);
            assert!((scene.faces[i * 2].fill - expected).magnitude() < 1e-6);
        }
        assert_eq!(scene.background, COOL.background_rgb().unwrap());
        assert_eq!(scene.faces[0].edge.unwrap().color, COOL.edge_rgb().unwrap());
    }

    #[test]
    fn test_basic_style() {
        let options = SceneOptions {
            style: RenderStyle::Basic,
            ..SceneOptions::default()
        };
        let scene = compose_scene(&CLASSIC, ViewAngles::new(20.0, 45.0).unwrap(), &options).unwrap();
        assert_eq!(scene.faces.len(), 6);
        assert_eq!(scene.faces[3].fill, CLASSIC.face_rgb(3).unwrap());
        assert!(scene.pips.iter().all(|p| p.radius == 0.08));
        assert!(matches!(scene.pips[0].shading, PipShading::Flat { alpha, .. } if alpha == 0.8));
    }

    #[test]
    fn test_titles_follow_style() {
        assert_eq!(RenderStyle::Basic.title(), "3D Dice");
        assert_eq!(RenderStyle::Enhanced.title(), "Enhanced 3D Dice");
        assert_eq!(RenderStyle::default().title(), "Enhanced 3D Dice");
    }

    #[test]
    fn test_pips_sit_on_their_faces() {
        let scene = compose_scene(&CLASSIC, ViewAngles::default(), &SceneOptions::default()).unwrap();
        let faces = build_faces();
        let mut pips = scene.pips.iter();
        for face in &faces {
            let n = face.normal();
            for _ in 0..face.value {
                let pip = pips.next().unwrap();
                assert!((pip.center - face.vertices[0]).dot(n).abs() < 1e-6);
            }
        }
        assert!(pips.next().is_none());
    }

    #[test]
    fn test_non_finite_angles_rejected() {
        assert!(matches!(ViewAngles::new(f32::NAN, 0.0), Err(DiceError::InvalidArgument(_))));
        let view = ViewAngles { elevation: 0.0, azimuth: f32::INFINITY };
        assert!(matches!(
            compose_scene(&CLASSIC, view, &SceneOptions::default()),
            Err(DiceError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_bad_color_is_render_config_error() {
        let broken = ColorScheme {
            pip_color: "#12zz45",
            ..CLASSIC
        };
        assert!(matches!(
            compose_scene(&broken, ViewAngles::default(), &SceneOptions::default()),
            Err(DiceError::RenderConfig(RenderConfigError::InvalidColor(_)))
        ));
    }

    #[test]
    fn test_zero_gradient_steps_rejected() {
        let options = SceneOptions {
            gradient_steps: 0,
            ..SceneOptions::default()
        };
        assert!(matches!(
            compose_scene(&CLASSIC, ViewAngles::default(), &options),
            Err(DiceError::InvalidArgument(_))
        ));
    }
}
