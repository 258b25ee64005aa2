//! Software-rendered six-sided die.
//!
//! The pipeline runs one way: cube faces ([`geometry`]) → pip layouts
//! ([`pips`]) → pips projected onto faces ([`projector`]) → a [`scene::Scene`]
//! colored by a [`scheme::ColorScheme`] → the CPU rasterizer
//! ([`renderer`]) → a PNG file or a window.

pub mod camera;
pub mod color;
pub mod config;
pub mod display;
pub mod error;
pub mod framebuffer;
pub mod geometry;
pub mod pips;
pub mod projector;
pub mod rasterizer;
pub mod renderer;
pub mod scene;
pub mod scheme;
pub mod vertex;

use std::path::Path;

use log::{debug, info};

pub use config::{RenderConfig, load_config};
pub use error::{DiceError, RenderConfigError, Result};
pub use framebuffer::FrameBuffer;
pub use scene::{RenderStyle, Scene, SceneOptions, ViewAngles, compose_scene};
pub use scheme::ColorScheme;

use camera::Camera;
use renderer::Renderer;

/// Scheme and view of each die in the demo gallery.
pub const GALLERY: [(&str, f32, f32); 4] = [
    ("classic", 22.0, 45.0),
    ("modern", 25.0, 40.0),
    ("warm", 20.0, 50.0),
    ("cool", 22.0, 45.0),
];

/// Renders the die described by `config` into a finished, downsampled frame.
pub fn render_image(config: &RenderConfig) -> Result<FrameBuffer> {
    config.validate()?;
    let scheme = ColorScheme::lookup(&config.color_scheme);
    let scene = compose_scene(scheme, config.view()?, &config.scene_options())?;

    let (w, h) = config.target_size()?;
    let camera = Camera::orbit(scene.view, scene.bounds, w as f32 / h as f32);
    debug!("camera eye {:?}, {}x{} target", camera.eye(), w, h);

    let mut renderer = Renderer::new(camera, w, h);
    renderer.render_scene(&scene);
    let framebuffer = renderer.into_framebuffer();
    Ok(if config.ssaa > 1 {
        framebuffer.ssaa(config.ssaa)
    } else {
        framebuffer
    })
}

pub fn save_dice_image(framebuffer: &FrameBuffer, path: &Path) -> Result<()> {
    framebuffer.save_to_image(path)?;
    info!("Image saved as {}", path.display());
    Ok(())
}

/// Renders and then saves to `config.save_path`, or shows a window when
/// there is none.
pub fn render_with(config: &RenderConfig) -> Result<()> {
    info!(
        "rendering {} die ({:?}), elevation {} azimuth {}",
        config.color_scheme, config.style, config.elevation, config.azimuth
    );
    let framebuffer = render_image(config)?;
    match &config.save_path {
        Some(path) => save_dice_image(&framebuffer, path),
        None => display::show(&framebuffer, config.style.title()),
    }
}

/// Renders the enhanced die at the default resolution. Unknown scheme names
/// fall back to `classic`.
pub fn render_die(color_scheme: &str, elevation: f32, azimuth: f32, save_path: Option<&Path>) -> Result<()> {
    let config = RenderConfig {
        color_scheme: color_scheme.to_string(),
        elevation,
        azimuth,
        save_path: save_path.map(Path::to_path_buf),
        ..RenderConfig::default()
    };
    render_with(&config)
}

/// Writes one `<scheme>_dice.png` per [`GALLERY`] entry into `dir`.
pub fn render_gallery(dir: &Path, base: &RenderConfig) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    for (name, elevation, azimuth) in GALLERY {
        let config = RenderConfig {
            color_scheme: name.to_string(),
            elevation,
            azimuth,
            save_path: Some(dir.join(format!("{name}_dice.png"))),
            ..base.clone()
        };
        render_with(&config)?;
    }
    Ok(())
}
