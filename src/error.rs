/// Errors raised while building or rendering a die.
#[derive(Debug, thiserror::Error)]
pub enum DiceError {
    #[error("invalid face value {0}, expected 1..=6")]
    InvalidFaceValue(i32),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("render configuration error: {0}")]
    RenderConfig(#[from] RenderConfigError),
}

/// Failures surfaced by the rendering side: colors, image encoding, window, config files.
#[derive(Debug, thiserror::Error)]
pub enum RenderConfigError {
    #[error("invalid color {0:?}")]
    InvalidColor(String),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("window error: {0}")]
    Window(#[from] minifb::Error),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<image::ImageError> for DiceError {
    fn from(err: image::ImageError) -> Self {
        DiceError::RenderConfig(err.into())
    }
}

impl From<minifb::Error> for DiceError {
    fn from(err: minifb::Error) -> Self {
        DiceError::RenderConfig(err.into())
    }
}

impl From<serde_json::Error> for DiceError {
    fn from(err: serde_json::Error) -> Self {
        DiceError::RenderConfig(err.into())
    }
}

impl From<std::io::Error> for DiceError {
    fn from(err: std::io::Error) -> Self {
        DiceError::RenderConfig(err.into())
    }
}

pub type Result<T> = std::result::Result<T, DiceError>;
