/*!
 * Error types for the subtext application.
 *
 * This module contains custom error types for different parts of the
 * application, using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur during caption conversion
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConversionError {
    /// Raw input is blank or contains no recognizable cue timing lines
    #[error("no caption content found in input")]
    EmptyInput,

    /// Parsing completed but produced zero cues
    #[error("no cues could be produced from input")]
    NoCuesProduced,

    /// Unexpected internal fault, caught at the orchestrator boundary
    #[error("conversion failed: {0}")]
    Failed(String),
}

/// Errors that can occur when fetching raw captions from a source
#[derive(Error, Debug)]
pub enum SourceError {
    /// Error when no captions exist for the requested reference
    #[error("captions not found: {0}")]
    NotFound(String),

    /// Error when a source cannot serve the given video reference
    #[error("unsupported video reference: {0}")]
    Unsupported(String),

    /// Error reading from the underlying storage
    #[error("failed to read captions: {0}")]
    Io(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from a caption source
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// Error from caption conversion
    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
