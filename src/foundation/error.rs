/// Convenience result type used across chaosfx.
pub type ChaosResult<T> = Result<T, ChaosError>;

/// Top-level error taxonomy used by the effects pipeline.
///
/// Filters never fail on knob values: out-of-range inputs degrade to a no-op. The only
/// caller-visible contract violation on the pixel path is a buffer whose byte length does not
/// match its declared dimensions.
#[derive(thiserror::Error, Debug)]
pub enum ChaosError {
    /// Invalid user-provided configuration (params files, preset names, locks).
    #[error("validation error: {0}")]
    Validation(String),

    /// Raw pixel data does not match the declared `width * height * 4` layout.
    #[error("dimension error: {0}")]
    Dimension(String),

    /// A [`crate::CancelToken`] was tripped between pipeline stages.
    #[error("pipeline cancelled")]
    Cancelled,

    /// Errors when serializing or deserializing parameter records.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ChaosError {
    /// Build a [`ChaosError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ChaosError::Dimension`] value.
    pub fn dimension(msg: impl Into<String>) -> Self {
        Self::Dimension(msg.into())
    }

    /// Build a [`ChaosError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ChaosError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
