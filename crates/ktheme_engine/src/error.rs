use ktheme_core::ColorError;
use thiserror::Error;

/// Errors surfaced by the theme engine and its derivation operations.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// Validation failed; carries the full error list. Registration is
    /// all-or-nothing, so nothing was applied.
    #[error("Invalid theme: {}", errors.join(", "))]
    InvalidTheme { errors: Vec<String> },

    /// An operation referenced an id that is not in the registry.
    #[error("Theme not found: {0}")]
    ThemeNotFound(String),

    /// An expansion pack id outside the implemented set.
    #[error("Unknown expansion pack: {0}")]
    UnknownExpansionPack(String),

    /// A theme family id outside the planned set.
    #[error("Unknown theme family: {0}")]
    UnknownThemeFamily(String),

    /// A color failed to parse during a derivation operation.
    #[error(transparent)]
    Color(#[from] ColorError),

    /// Theme JSON could not be parsed during import.
    #[error("Failed to import theme: {0}")]
    Import(#[from] serde_json::Error),
}
