/// Convenience result type used across Kinetra.
pub type KinetraResult<T> = Result<T, KinetraError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum KinetraError {
    /// Invalid user-provided or declarative effect data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while configuring or driving smoothed signals.
    #[error("signal error: {0}")]
    Signal(String),

    /// Device capability data that cannot be interpreted.
    #[error("device error: {0}")]
    Device(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl KinetraError {
    /// Build a [`KinetraError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`KinetraError::Signal`] value.
    pub fn signal(msg: impl Into<String>) -> Self {
        Self::Signal(msg.into())
    }

    /// Build a [`KinetraError::Device`] value.
    pub fn device(msg: impl Into<String>) -> Self {
        Self::Device(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
