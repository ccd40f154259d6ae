//! Error types for the `tinymce_richtext` crate.

/// All errors that can occur while configuring or rendering the editor.
///
/// Conversion between editor and database HTML never fails: unrecognised
/// markers are dropped, unwrapped or passed through instead.
#[derive(Debug, thiserror::Error)]
pub enum RichTextError {
    /// The client configuration could not be encoded as JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The widget configuration is invalid.
    #[error("Config error: {0}")]
    Config(String),
}

/// A type alias for `Result<T, RichTextError>`.
pub type Result<T> = std::result::Result<T, RichTextError>;
