use std::error::Error;
use std::path::{Path, PathBuf};

use dice_renderer::{RenderConfig, load_config, render_gallery, render_with};

const USAGE: &str = "usage:
  dice-renderer [scheme] [elevation] [azimuth] [save_path]
  dice-renderer --config <render.json>
  dice-renderer --gallery <output_dir>";

fn parse_angle(arg: &str, name: &str) -> Result<f32, Box<dyn Error>> {
    arg.parse()
        .map_err(|_| format!("{name} must be a number, got {arg:?}\n{USAGE}").into())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("-h" | "--help") => {
            println!("{USAGE}");
        }
        Some("--config") => {
            let path = args.get(1).ok_or(USAGE)?;
            let config = load_config(Path::new(path))?;
            render_with(&config)?;
        }
        Some("--gallery") => {
            let dir = args.get(1).ok_or(USAGE)?;
            render_gallery(Path::new(dir), &RenderConfig::default())?;
        }
        _ => {
            if args.len() > 4 {
                return Err(USAGE.into());
            }
            let mut config = RenderConfig::default();
            if let Some(scheme) = args.first() {
                config.color_scheme = scheme.clone();
            }
            if let Some(elevation) = args.get(1) {
                config.elevation = parse_angle(elevation, "elevation")?;
            }
            if let Some(azimuth) = args.get(2) {
                config.azimuth = parse_angle(azimuth, "azimuth")?;
            }
            config.save_path = args.get(3).map(PathBuf::from);
            render_with(&config)?;
        }
    }
    Ok(())
}
