//! Render error types.

use thiserror::Error;

/// Result type for render operations.
pub type RenderResult<T> = std::result::Result<T, RenderError>;

/// Errors that can occur while applying or painting a control sequence.
///
/// Parsing never fails (truncated or unknown controls just stop the
/// parse), so everything here originates in the host hooks.
#[derive(Debug, Error)]
pub enum RenderError {
    /// No font is loaded for the requested handle.
    #[error("invalid font handle: {0}")]
    InvalidFontHandle(u8),

    /// Host-defined failure from a lookup, metric or paint hook.
    #[error("font host error: {0}")]
    Host(String),
}

impl RenderError {
    /// Create a host error with a message.
    pub fn host<S: Into<String>>(msg: S) -> Self {
        RenderError::Host(msg.into())
    }
}
