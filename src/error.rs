use std::path::PathBuf;

/// Failures of the font and image collaborators.
///
/// The layout itself never fails; only loading fonts and writing images do.
#[derive(Debug)]
pub enum BackendError {
    // Files
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    // Fonts
    InvalidFont(String),
    MissingLineMetrics,

    // Images
    Image(image::ImageError),
}

impl std::fmt::Display for BackendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BackendError::*;
        match self {
            Io { path, source } => write!(f, "failed to access {}: {source}", path.display()),
            InvalidFont(msg) => write!(f, "invalid font: {msg}"),
            MissingLineMetrics => write!(f, "font has no horizontal line metrics"),
            Image(e) => write!(f, "image error: {e}"),
        }
    }
}

impl std::error::Error for BackendError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BackendError::Io { source, .. } => Some(source),
            BackendError::Image(e) => Some(e),
            _ => None,
        }
    }
}

impl From<image::ImageError> for BackendError {
    fn from(e: image::ImageError) -> Self {
        BackendError::Image(e)
    }
}
