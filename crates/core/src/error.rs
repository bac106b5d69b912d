//! Error types for presentation image extraction.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while extracting images from a presentation.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read or write a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input path does not exist.
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// The input has no file extension.
    #[error("Input has no file extension (expected .pptx or .pptm): {}", .0.display())]
    MissingExtension(PathBuf),

    /// The input has an extension other than .pptx or .pptm.
    #[error("Unsupported file extension '{0}' (expected .pptx or .pptm)")]
    UnsupportedExtension(String),

    /// The input does not start with a ZIP signature.
    #[error("Not a ZIP-based presentation: {}", .0.display())]
    NotAnArchive(PathBuf),

    /// The archive unpacked but has no slide directory.
    #[error("Invalid presentation: missing '{0}' directory")]
    MissingSlideDirectory(String),

    /// ZIP archive error.
    #[error("ZIP error: {0}")]
    Zip(String),

    /// XML parsing error in a slide or relationship part.
    #[error("XML parsing error: {0}")]
    Xml(String),
}
