//! Image loading port
//!
//! Turns a learner-chosen file into bytes plus a MIME type.

use async_trait::async_trait;
use belajar_domain::ImageFile;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageLoadError {
    #[error("Image not found: {0}")]
    NotFound(PathBuf),

    #[error("Not a supported image file: {0}")]
    UnsupportedType(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[async_trait]
pub trait ImageLoader: Send + Sync {
    async fn load(&self, path: &Path) -> Result<ImageFile, ImageLoadError>;
}
