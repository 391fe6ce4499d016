use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CullError {
    #[error("Failed to list directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Failed to open {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode {path:?}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to delete {path:?}")]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report: {0}")]
    Report(#[source] std::io::Error),

    #[error("Invalid progress template: {0}")]
    Progress(#[from] indicatif::style::TemplateError),
}

pub type Result<T> = std::result::Result<T, CullError>;
