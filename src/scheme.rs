use log::warn;

use crate::color::{Rgb, parse_hex};
use crate::error::Result;

/// A named set of colors applied to one render. Colors are hex strings and
/// are only parsed when a scene is composed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    pub name: &'static str,
    pub face_colors: [&'static str; 6],
    pub edge_color: &'static str,
    pub pip_color: &'static str,
    pub background: &'static str,
}

pub const CLASSIC: ColorScheme = ColorScheme {
    name: "classic",
    face_colors: ["#ffffff", "#fafafa", "#f7f7f7", "#f4f4f4", "#f1f1f1", "#eeeeee"],
    edge_color: "#333333",
    pip_color: "#1a1a1a",
    background: "#111111",
};

pub const MODERN: ColorScheme = ColorScheme {
    name: "modern",
    face_colors: ["#e8f5e9", "#c8e6c9", "#a5d6a7", "#81c784", "#66bb6a", "#4caf50"],
    edge_color: "#1b5e20",
    pip_color: "#1b5e20",
    background: "#081c08",
};

pub const WARM: ColorScheme = ColorScheme {
    name: "warm",
    face_colors: ["#fff3e0", "#ffe0b2", "#ffcc80", "#ffb74d", "#ffa726", "#ff9800"],
    edge_color: "#e65100",
    pip_color: "#e65100",
    background: "#160c00",
};

pub const COOL: ColorScheme = ColorScheme {
    name: "cool",
    face_colors: ["#e3f2fd", "#bbdefb", "#90caf9", "#64b5f6", "#42a5f5", "#2196f3"],
    edge_color: "#0d47a1",
    pip_color: "#0d47a1",
    background: "#050c14",
};

/// Off-white die on black, used by the plain rendering style.
pub const BASIC: ColorScheme = ColorScheme {
    name: "basic",
    face_colors: ["#f8f8f8", "#f0f0f0", "#f5f5f5", "#efefef", "#f3f3f3", "#ededed"],
    edge_color: "#333333",
    pip_color: "#2c2c2c",
    background: "#000000",
};

pub const SCHEMES: [&ColorScheme; 5] = [&CLASSIC, &MODERN, &WARM, &COOL, &BASIC];

pub const DEFAULT_SCHEME: &ColorScheme = &CLASSIC;

impl ColorScheme {
    /// Exact, case-sensitive match on the catalog name.
    pub fn find(name: &str) -> Option<&'static ColorScheme> {
        SCHEMES.iter().copied().find(|s| s.name == name)
    }

    /// Unknown names fall back to [`DEFAULT_SCHEME`].
    pub fn lookup(name: &str) -> &'static ColorScheme {
        Self::find(name).unwrap_or_else(|| {
            warn!("unknown color scheme {name:?}, using {}", DEFAULT_SCHEME.name);
            DEFAULT_SCHEME
        })
    }

    pub fn face_rgb(&self, index: usize) -> Result<Rgb> {
        parse_hex(self.face_colors[index % 6])
    }

    pub fn edge_rgb(&self) -> Result<Rgb> {
        parse_hex(self.edge_color)
    }

    pub fn pip_rgb(&self) -> Result<Rgb> {
        parse_hex(self.pip_color)
    }

    pub fn background_rgb(&self) -> Result<Rgb> {
        parse_hex(self.background)
    }
}
