//! Error types for figure rendering.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    /// Output directory could not be created.
    #[error("Cannot create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Drawing backend failed while producing a figure.
    #[error("Failed to draw {path}: {message}")]
    Plot { path: PathBuf, message: String },
}
