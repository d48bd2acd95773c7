//! Error types for the text analysis service.
//!
//! Library crates use [`TasError`] via `thiserror`.
//! The server binary wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all analysis operations.
#[derive(Debug, thiserror::Error)]
pub enum TasError {
    /// The declared content type has no registered processor.
    #[error("unsupported content type: {content_type}")]
    UnsupportedContentType { content_type: String },

    /// Structurally malformed payload for the declared content type.
    #[error("invalid content: {message}")]
    InvalidContent { message: String },

    /// Content or social extraction failed for this specific input.
    /// Caught at the processor boundary and folded into a degraded
    /// result; never surfaced as an API error.
    #[error("extraction failed: {message}")]
    Extraction { message: String },

    /// Unexpected internal error during processing. No partial result
    /// survives this; the whole analysis is discarded.
    #[error("processing failed: {message}")]
    Processing { message: String },

    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, TasError>;

impl TasError {
    /// Create an unsupported-content-type error for the given key.
    pub fn unsupported_content_type(content_type: impl Into<String>) -> Self {
        Self::UnsupportedContentType {
            content_type: content_type.into(),
        }
    }

    /// Create an invalid-content error from any displayable message.
    pub fn invalid_content(msg: impl Into<String>) -> Self {
        Self::InvalidContent {
            message: msg.into(),
        }
    }

    /// Create an extraction error from any displayable message.
    pub fn extraction(msg: impl Into<String>) -> Self {
        Self::Extraction {
            message: msg.into(),
        }
    }

    /// Create a processing error from any displayable message.
    pub fn processing(msg: impl Into<String>) -> Self {
        Self::Processing {
            message: msg.into(),
        }
    }

    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = TasError::unsupported_content_type("text/plain");
        assert_eq!(err.to_string(), "unsupported content type: text/plain");

        let err = TasError::invalid_content("missing url");
        assert_eq!(err.to_string(), "invalid content: missing url");

        let err = TasError::processing("keyword ranking failed");
        assert!(err.to_string().contains("keyword ranking"));
    }
}
