//! Local media store: keeps generated videos and images as files.

use async_trait::async_trait;
use belajar_application::{MediaKind, MediaStore, MediaStoreError, StoredMedia};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};
use tracing::info;

/// [`MediaStore`] writing into one output directory.
///
/// Files are named `{animasi|gambar}-{timestamp}-{n}.{ext}` and exposed as
/// `file://` URLs so a local player or viewer can open them.
pub struct LocalMediaStore {
    dir: PathBuf,
    sequence: AtomicU32,
}

impl LocalMediaStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            sequence: AtomicU32::new(1),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn file_name(&self, kind: MediaKind) -> String {
        let prefix = match kind {
            MediaKind::Video => "animasi",
            MediaKind::Image => "gambar",
        };
        let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
        let n = self.sequence.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}-{}.{}", prefix, timestamp, n, kind.extension())
    }
}

fn file_url(path: &Path) -> String {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };
    format!("file://{}", absolute.display())
}

#[async_trait]
impl MediaStore for LocalMediaStore {
    async fn store(&self, kind: MediaKind, bytes: &[u8]) -> Result<StoredMedia, MediaStoreError> {
        let write_error = |path: &Path, source| MediaStoreError::Write {
            path: path.to_path_buf(),
            source,
        };

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| write_error(&self.dir, e))?;

        let path = self.dir.join(self.file_name(kind));
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| write_error(&path, e))?;

        info!("Saved {} bytes to {}", bytes.len(), path.display());
        Ok(StoredMedia {
            url: file_url(&path),
            path,
        })
    }
}
