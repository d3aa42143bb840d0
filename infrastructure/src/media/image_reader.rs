//! Local image reader: reads a photo from disk for staging or animation.

use async_trait::async_trait;
use belajar_application::{ImageLoadError, ImageLoader};
use belajar_domain::{ImageFile, mime_type_for_extension};
use std::path::Path;
use tracing::debug;

/// [`ImageLoader`] backed by the local filesystem
#[derive(Debug, Clone, Default)]
pub struct LocalImageReader;

impl LocalImageReader {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ImageLoader for LocalImageReader {
    async fn load(&self, path: &Path) -> Result<ImageFile, ImageLoadError> {
        if !path.is_file() {
            return Err(ImageLoadError::NotFound(path.to_path_buf()));
        }

        let mime_type = path
            .extension()
            .and_then(|e| e.to_str())
            .and_then(mime_type_for_extension)
            .ok_or_else(|| ImageLoadError::UnsupportedType(path.to_path_buf()))?;

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| ImageLoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        debug!("Read {} ({} bytes, {})", name, bytes.len(), mime_type);

        Ok(ImageFile::new(name, mime_type, bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reads_png_with_mime_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("PR-Matematika.PNG");
        std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

        let file = LocalImageReader::new().load(&path).await.unwrap();
        assert_eq!(file.name, "PR-Matematika.PNG");
        assert_eq!(file.mime_type, "image/png");
        assert_eq!(file.bytes.len(), 4);
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = LocalImageReader::new()
            .load(&dir.path().join("tidak-ada.jpg"))
            .await
            .unwrap_err();
        assert!(matches!(err, ImageLoadError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_non_image_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catatan.txt");
        std::fs::write(&path, "bukan gambar").unwrap();

        let err = LocalImageReader::new().load(&path).await.unwrap_err();
        assert!(matches!(err, ImageLoadError::UnsupportedType(_)));
    }
}
