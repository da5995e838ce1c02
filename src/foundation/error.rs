/// Convenience result type used across textfx.
pub type TextFxResult<T> = Result<T, TextFxError>;

/// Error taxonomy for effect construction and frame rendering.
///
/// The numeric core (easing, keyframes, Ken Burns math) is total and never produces these; they
/// come from malformed configuration or from the rendering collaborator.
#[derive(thiserror::Error, Debug)]
pub enum TextFxError {
    /// Invalid caller-provided data (keyframe tracks, sizes, parameters).
    #[error("validation error: {0}")]
    Validation(String),

    /// Failures raised while producing or compositing rasters.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when reading or decoding configuration documents.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TextFxError {
    /// Build a [`TextFxError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TextFxError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`TextFxError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<serde_json::Error> for TextFxError {
    fn from(err: serde_json::Error) -> Self {
        Self::config(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
