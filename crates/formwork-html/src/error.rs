//! Error types for HTML output.

use formwork_core::FormError;
use thiserror::Error;

/// Errors raised while producing HTML text.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum HtmlError {
    /// The form failed to render its tag tree.
    #[error(transparent)]
    Form(#[from] FormError),

    /// Writing markup failed.
    #[error("Failed to write markup: {0}")]
    Write(#[from] std::io::Error),

    /// Serialized markup was not valid UTF-8.
    #[error("Markup is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Result type alias for HTML output.
pub type Result<T> = std::result::Result<T, HtmlError>;
