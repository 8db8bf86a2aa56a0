//! Filesystem-backed blob store

use async_trait::async_trait;
use mediagc_errors::{Error, StorageError};
use mediagc_types::ObjectEntry;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::{key_segments, BlobStore};

/// Blob store mapping keys onto files below a base directory
#[derive(Debug, Clone)]
pub struct LocalBlobStore {
    base: PathBuf,
}

impl LocalBlobStore {
    #[must_use]
    pub fn new<P: Into<PathBuf>>(base: P) -> Self {
        Self { base: base.into() }
    }

    #[must_use]
    pub fn base(&self) -> &Path {
        &self.base
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, Error> {
        let mut path = self.base.clone();
        for segment in key_segments(key)? {
            path.push(segment);
        }
        Ok(path)
    }

    /// Write an object, creating its folder if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or the file cannot be written.
    pub async fn put(&self, key: &str, bytes: &[u8]) -> Result<(), Error> {
        let path = self.path_for(key)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::from_io_with_path(&e, parent))?;
        }
        fs::write(&path, bytes)
            .await
            .map_err(|e| StorageError::from_io_with_path(&e, &path))?;
        Ok(())
    }

    async fn read_entries(dir: &Path, prefix: &str) -> Result<Vec<ObjectEntry>, Error> {
        let list_failed = |e: std::io::Error| StorageError::ListFailed {
            prefix: prefix.to_string(),
            message: e.to_string(),
        };

        let mut entries = Vec::new();
        let mut rd = fs::read_dir(dir).await.map_err(list_failed)?;
        while let Some(entry) = rd.next_entry().await.map_err(list_failed)? {
            let name = entry.file_name().to_string_lossy().into_owned();
            let metadata = entry.metadata().await.map_err(list_failed)?;
            if metadata.is_dir() {
                entries.push(ObjectEntry::folder(name));
            } else {
                entries.push(ObjectEntry::file(name, metadata.len()));
            }
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    /// Remove directories left empty by a removal, stopping at the base
    async fn prune_empty_parents(&self, path: &Path) {
        let mut current = path.parent();
        while let Some(dir) = current {
            if dir == self.base.as_path() || !dir.starts_with(&self.base) {
                break;
            }
            // Fails (and stops) on the first non-empty directory
            if fs::remove_dir(dir).await.is_err() {
                break;
            }
            current = dir.parent();
        }
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    async fn list_root(&self) -> Result<Vec<ObjectEntry>, Error> {
        Self::read_entries(&self.base, "").await
    }

    async fn list(
        &self,
        prefix: &str,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<ObjectEntry>, Error> {
        let dir = if prefix.trim_matches('/').is_empty() {
            self.base.clone()
        } else {
            self.path_for(prefix)?
        };

        let entries = match Self::read_entries(&dir, prefix).await {
            Ok(entries) => entries,
            // Object stores report an unknown prefix, or one naming an object, as empty
            Err(e) => match fs::metadata(&dir).await {
                Ok(metadata) if metadata.is_file() => Vec::new(),
                Err(io) if io.kind() == std::io::ErrorKind::NotFound => Vec::new(),
                _ => return Err(e),
            },
        };

        Ok(entries.into_iter().skip(offset).take(limit).collect())
    }

    async fn remove(&self, paths: &[String]) -> Result<(), Error> {
        let resolved = paths
            .iter()
            .map(|key| self.path_for(key))
            .collect::<Result<Vec<_>, _>>()?;

        let mut first_error = None;
        for path in &resolved {
            match fs::remove_file(path).await {
                Ok(()) => self.prune_empty_parents(path).await,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    tracing::debug!(path = %path.display(), error = %e, "object removal failed");
                    first_error.get_or_insert_with(|| format!("{}: {e}", path.display()));
                }
            }
        }

        match first_error {
            None => Ok(()),
            Some(message) => Err(StorageError::RemoveFailed {
                count: paths.len(),
                message,
            }
            .into()),
        }
    }
}
