use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;
use serde_json::from_reader;

use crate::error::{DiceError, Result};
use crate::scene::{DEFAULT_GRADIENT_STEPS, RenderStyle, SceneOptions, ViewAngles};

/// Upper bound on supersampled pixels per frame (8192² at ssaa 1).
pub const MAX_PIXELS: usize = 8192 * 8192;

/// One render request, as read from a JSON file. Missing fields take defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    pub color_scheme: String,
    pub elevation: f32,
    pub azimuth: f32,
    pub style: RenderStyle,
    pub width: usize,
    pub height: usize,
    /// Supersampling factor per axis.
    pub ssaa: usize,
    pub gradient_steps: usize,
    /// Write a PNG here instead of opening a window.
    pub save_path: Option<PathBuf>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            color_scheme: "classic".to_string(),
            elevation: 22.0,
            azimuth: 45.0,
            style: RenderStyle::Enhanced,
            width: 1024,
            height: 1024,
            ssaa: 2,
            gradient_steps: DEFAULT_GRADIENT_STEPS,
            save_path: None,
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(DiceError::InvalidArgument(format!(
                "image size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.ssaa == 0 {
            return Err(DiceError::InvalidArgument("ssaa must be at least 1".into()));
        }
        self.target_size()?;
        self.view()?;
        Ok(())
    }

    /// Supersampled render target size, bounded by [`MAX_PIXELS`].
    pub fn target_size(&self) -> Result<(usize, usize)> {
        let too_large = || {
            DiceError::InvalidArgument(format!(
                "image {}x{} at ssaa {} exceeds {MAX_PIXELS} pixels",
                self.width, self.height, self.ssaa
            ))
        };
        let w = self.width.checked_mul(self.ssaa).ok_or_else(too_large)?;
        let h = self.height.checked_mul(self.ssaa).ok_or_else(too_large)?;
        match w.checked_mul(h) {
            Some(pixels) if pixels <= MAX_PIXELS => Ok((w, h)),
            _ => Err(too_large()),
        }
    }

    pub fn view(&self) -> Result<ViewAngles> {
        ViewAngles::new(self.elevation, self.azimuth)
    }

    pub fn scene_options(&self) -> SceneOptions {
        SceneOptions {
            style: self.style,
            gradient_steps: self.gradient_steps,
        }
    }
}

pub fn load_config(path: &Path) -> Result<RenderConfig> {
    let file = File::open(path)?;
    let config: RenderConfig = from_reader(BufReader::new(file))?;
    config.validate()?;
    info!("loaded render config from {}", path.display());
    Ok(config)
}
