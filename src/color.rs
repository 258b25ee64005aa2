use cgmath::Vector3 as Vec3;

use crate::error::{DiceError, RenderConfigError, Result};

/// Linear RGB triple with channels in 0.0..=1.0.
pub type Rgb = Vec3<f32>;

pub const BLACK: Rgb = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

/// Parse `#rrggbb` or `#rgb` (the leading `#` is optional).
pub fn parse_hex(s: &str) -> Result<Rgb> {
    let invalid = || DiceError::from(RenderConfigError::InvalidColor(s.to_string()));
    let hex = s.strip_prefix('#').unwrap_or(s);
    if !hex.is_ascii() {
        return Err(invalid());
    }
    let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());
    let (r, g, b) = match hex.len() {
        6 => (channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?),
        3 => {
            let r = channel(&hex[0..1])?;
            let g = channel(&hex[1..2])?;
            let b = channel(&hex[2..3])?;
            (r * 17, g * 17, b * 17)
        }
        _ => return Err(invalid()),
    };
    Ok(Vec3::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0))
}

/// Returns (hue, saturation, value), all in 0.0..=1.0.
pub fn rgb_to_hsv(c: Rgb) -> (f32, f32, f32) {
    let max = c.x.max(c.y).max(c.z);
    let min = c.x.min(c.y).min(c.z);
    let v = max;
    if max == min {
        return (0.0, 0.0, v);
    }
    let delta = max - min;
    let s = delta / max;
    let rc = (max - c.x) / delta;
    let gc = (max - c.y) / delta;
    let bc = (max - c.z) / delta;
    let h = if c.x == max {
        bc - gc
    } else if c.y == max {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };
    ((h / 6.0).rem_euclid(1.0), s, v)
}

pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Rgb {
    if s == 0.0 {
        return Vec3::new(v, v, v);
    }
    let h6 = h * 6.0;
    let sector = h6.floor();
    let f = h6 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match (sector as i32).rem_euclid(6) {
        0 => Vec3::new(v, t, p),
        1 => Vec3::new(q, v, p),
        2 => Vec3::new(p, v, t),
        3 => Vec3::new(p, q, v),
        4 => Vec3::new(t, p, v),
        _ => Vec3::new(v, p, q),
    }
}

/// Colormap for pip spheres: saturation damped and value lifted along a
/// linear decay, `steps` entries long.
pub fn metallic_gradient(base: Rgb, steps: usize) -> Result<Vec<Rgb>> {
    if steps < 1 {
        return Err(DiceError::InvalidArgument(format!(
            "gradient steps must be at least 1, got {steps}"
        )));
    }
    let (h, s, v) = rgb_to_hsv(base);
    Ok((0..steps)
        .map(|i| {
            let factor = 1.0 - i as f32 / (2 * steps) as f32;
            hsv_to_rgb(h, (s - 0.1 * factor).max(0.0), (v + 0.1 * factor).min(1.0))
        })
        .collect())
}

/// Linear lookup into an evenly spaced colormap, `t` clamped to 0..=1.
pub fn sample_gradient(colors: &[Rgb], t: f32) -> Rgb {
    match colors {
        [] => BLACK,
        [only] => *only,
        _ => {
            let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
            let pos = t * (colors.len() - 1) as f32;
            let i = (pos.floor() as usize).min(colors.len() - 2);
            let f = pos - i as f32;
            colors[i] * (1.0 - f) + colors[i + 1] * f
        }
    }
}

pub fn scale(c: Rgb, factor: f32) -> Rgb {
    Vec3::new(
        (c.x * factor).clamp(0.0, 1.0),
        (c.y * factor).clamp(0.0, 1.0),
        (c.z * factor).clamp(0.0, 1.0),
    )
}

/// Pack into the framebuffer's `0xAARRGGBB` layout with full alpha.
pub fn to_argb(c: Rgb) -> u32 {
    let r = (c.x.clamp(0.0, 1.0) * 255.0).round() as u32;
    let g = (c.y.clamp(0.0, 1.0) * 255.0).round() as u32;
    let b = (c.z.clamp(0.0, 1.0) * 255.0).round() as u32;
    0xFF00_0000 | r << 16 | g << 8 | b
}

pub fn from_argb(color: u32) -> Rgb {
    Vec3::new(
        ((color >> 16) & 0xFF) as f32 / 255.0,
        ((color >> 8) & 0xFF) as f32 / 255.0,
        (color & 0xFF) as f32 / 255.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::InnerSpace;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#ffffff").unwrap(), Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(parse_hex("000000").unwrap(), BLACK);
        assert_eq!(parse_hex("#f00").unwrap(), Vec3::new(1.0, 0.0, 0.0));
        let c = parse_hex("#333333").unwrap();
        assert!((c.x - 0.2).abs() < EPS);
    }

    #[test]
    fn test_parse_hex_rejects_garbage() {
        for bad in ["", "#12345", "#gggggg", "not a color", "#ffé"] {
            assert!(matches!(
                parse_hex(bad),
                Err(DiceError::RenderConfig(RenderConfigError::InvalidColor(_)))
            ));
        }
    }

    #[test]
    fn test_hsv_round_trip_on_scheme_colors() {
        for hex in ["#1a1a1a", "#1b5e20", "#e65100", "#0d47a1", "#ff9800"] {
            let c = parse_hex(hex).unwrap();
            let (h, s, v) = rgb_to_hsv(c);
            assert!((hsv_to_rgb(h, s, v) - c).magnitude() < EPS, "{hex}");
        }
    }

    #[test]
    fn test_hsv_primaries() {
        assert_eq!(rgb_to_hsv(Vec3::new(1.0, 0.0, 0.0)), (0.0, 1.0, 1.0));
        let (h, _, _) = rgb_to_hsv(Vec3::new(0.0, 0.0, 1.0));
        assert!((h - 2.0 / 3.0).abs() < EPS);
    }

    #[test]
    fn test_metallic_gradient_length() {
        let base = parse_hex("#1a1a1a").unwrap();
        for steps in [1, 2, 10, 25] {
            assert_eq!(metallic_gradient(base, steps).unwrap().len(), steps);
        }
        assert!(matches!(metallic_gradient(base, 0), Err(DiceError::InvalidArgument(_))));
    }

    #[test]
    fn test_metallic_gradient_brightens_base() {
        let base = parse_hex("#0d47a1").unwrap();
        let colors = metallic_gradient(base, 10).unwrap();
        let (_, s0, v0) = rgb_to_hsv(base);
        let (_, s, v) = rgb_to_hsv(colors[0]);
        assert!((v - (v0 + 0.1)).abs() < EPS);
        assert!((s - (s0 - 0.1)).abs() < EPS);
        // the boost decays along the ramp
        let (_, _, v_last) = rgb_to_hsv(colors[9]);
        assert!(v_last < v);
    }

    #[test]
    fn test_sample_gradient_endpoints() {
        let ramp = [BLACK, Vec3::new(1.0, 1.0, 1.0)];
        assert_eq!(sample_gradient(&ramp, -3.0), BLACK);
        assert_eq!(sample_gradient(&ramp, 2.0), Vec3::new(1.0, 1.0, 1.0));
        assert!((sample_gradient(&ramp, 0.5).x - 0.5).abs() < EPS);
        assert_eq!(sample_gradient(&[], 0.5), BLACK);
    }

    #[test]
    fn test_argb_packing() {
        assert_eq!(to_argb(Vec3::new(1.0, 0.0, 0.0)), 0xFFFF0000);
        assert_eq!(to_argb(Vec3::new(0.0, 0.0, 2.0)), 0xFF0000FF);
        assert_eq!(from_argb(0xFF00FF00), Vec3::new(0.0, 1.0, 0.0));
    }
}
