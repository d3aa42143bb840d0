//! Media store port
//!
//! Persists generated media so it can be opened locally.

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MediaStoreError {
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// What is being stored; decides the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Image,
}

impl MediaKind {
    pub fn extension(&self) -> &'static str {
        match self {
            MediaKind::Video => "mp4",
            MediaKind::Image => "png",
        }
    }
}

/// A stored media file and the URL it can be played from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredMedia {
    pub path: PathBuf,
    pub url: String,
}

#[async_trait]
pub trait MediaStore: Send + Sync {
    async fn store(&self, kind: MediaKind, bytes: &[u8]) -> Result<StoredMedia, MediaStoreError>;
}
