//! Error types for transcript ingestion, configuration, and export.

use thiserror::Error;

/// Errors raised by the transcript subsystem.
#[derive(Debug, Error)]
pub enum TranscriptError {
    /// A raw segment carried an element type other than text or image.
    #[error("unsupported element type '{0}'")]
    UnsupportedElementType(String),

    /// A raw segment was missing a field or had the wrong shape.
    #[error("malformed message segment: {0}")]
    MalformedSegment(String),

    /// A role name was not recognised.
    #[error("invalid role: '{0}'")]
    InvalidRole(String),

    /// The export configuration could not be loaded.
    #[error("invalid export configuration: {0}")]
    Config(String),

    /// Document template rendering failed.
    #[error("template rendering failed: {0}")]
    Template(String),

    /// Writing the exported document failed.
    #[error("failed to write export '{path}': {source}")]
    Export {
        /// Destination path.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}
