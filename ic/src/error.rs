//! Template error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that make an issue template unusable
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Missing front matter block in {}", path.display())]
    MissingFrontMatter { path: PathBuf },

    #[error("Missing or empty title in {}", path.display())]
    MissingTitle { path: PathBuf },

    #[error("Empty body in {}", path.display())]
    EmptyBody { path: PathBuf },

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}
