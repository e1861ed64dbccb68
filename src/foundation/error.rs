/// Convenience result type used across Squiggly.
pub type SquigglyResult<T> = Result<T, SquigglyError>;

/// Top-level error taxonomy used by library APIs.
///
/// Degenerate geometry (inverted or zero-width regions, zero amplitude) is never an error; it
/// simply draws nothing.
#[derive(thiserror::Error, Debug)]
pub enum SquigglyError {
    /// Invalid user-provided configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// A decoration is attached to offsets the layout cannot resolve.
    #[error("layout error: {0}")]
    Layout(String),

    /// Errors while creating or reading back a draw surface.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SquigglyError {
    /// Build a [`SquigglyError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SquigglyError::Layout`] value.
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    /// Build a [`SquigglyError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`SquigglyError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
