use thiserror::Error;

/// Errors produced by the color conversion layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// A hex string failed to parse (wrong length or non-hex characters).
    #[error("Invalid hex color: {0}")]
    MalformedHex(String),
}
