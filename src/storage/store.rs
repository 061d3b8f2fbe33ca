use std::path::PathBuf;
use tokio::io::AsyncWriteExt;
use tracing::debug;
use crate::errors::OtesError;
use super::sanitize::unique_filename;

#[derive(Debug, Clone)]
pub struct StoredUpload {
    /// Name echoed back to the caller.
    pub file_name: String,
    pub path: PathBuf,
}

/// Flat upload directory. Stored names come only from [`unique_filename`].
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub async fn persist(&self, bytes: &[u8], original_name: &str) -> Result<StoredUpload, OtesError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| OtesError::Persistence(format!("create {}: {}", self.dir.display(), e)))?;

        let file_name = unique_filename(original_name);
        let path = self.dir.join(&file_name);

        // create_new: a token collision must never overwrite an earlier upload
        let mut file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|e| OtesError::Persistence(format!("open {}: {}", path.display(), e)))?;

        file.write_all(bytes)
            .await
            .map_err(|e| OtesError::Persistence(format!("write {}: {}", path.display(), e)))?;
        file.flush()
            .await
            .map_err(|e| OtesError::Persistence(format!("flush {}: {}", path.display(), e)))?;

        debug!(file = %file_name, bytes = bytes.len(), "Persisted upload");
        Ok(StoredUpload { file_name, path })
    }
}
