#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Blob storage for product images
//!
//! Images live under `{productId}/{filename}` keys. Folders are not
//! first-class: they exist while at least one key carries their prefix.
//! [`BlobStore`] is the seam the reconciler talks to; [`LocalBlobStore`]
//! maps keys onto a directory tree and [`MemoryBlobStore`] keeps them in a
//! map for tests and previews.

mod local;
mod memory;

pub use local::LocalBlobStore;
pub use memory::MemoryBlobStore;

use async_trait::async_trait;
use mediagc_errors::{Error, StorageError};
use mediagc_types::ObjectEntry;
use std::sync::Arc;

/// Listing and bulk removal over a key/prefix object store
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// List the entries at the root of the store
    async fn list_root(&self) -> Result<Vec<ObjectEntry>, Error>;

    /// List the direct children of `prefix`, sorted by name, skipping
    /// `offset` entries and returning at most `limit`
    async fn list(
        &self,
        prefix: &str,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<ObjectEntry>, Error>;

    /// Remove every path in one call; the outcome applies to the whole call
    async fn remove(&self, paths: &[String]) -> Result<(), Error>;
}

#[async_trait]
impl<T: BlobStore + ?Sized> BlobStore for Arc<T> {
    async fn list_root(&self) -> Result<Vec<ObjectEntry>, Error> {
        (**self).list_root().await
    }

    async fn list(
        &self,
        prefix: &str,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<ObjectEntry>, Error> {
        (**self).list(prefix, limit, offset).await
    }

    async fn remove(&self, paths: &[String]) -> Result<(), Error> {
        (**self).remove(paths).await
    }
}

/// Join a folder prefix and an entry name into an object key
#[must_use]
pub fn object_key(prefix: &str, name: &str) -> String {
    let prefix = prefix.trim_matches('/');
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}/{name}")
    }
}

/// Split a key into validated, non-empty segments
///
/// # Errors
///
/// Returns an error for absolute keys, empty keys, and `.`/`..` segments.
pub fn key_segments(key: &str) -> Result<Vec<&str>, Error> {
    let invalid = || StorageError::InvalidPath {
        path: key.to_string(),
    };
    if key.starts_with('/') || key.contains('\\') {
        return Err(invalid().into());
    }
    let segments: Vec<&str> = key.split('/').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() || segments.iter().any(|s| *s == "." || *s == "..") {
        return Err(invalid().into());
    }
    Ok(segments)
}
