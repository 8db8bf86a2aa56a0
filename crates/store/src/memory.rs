//! In-memory blob store

use async_trait::async_trait;
use mediagc_errors::{Error, StorageError};
use mediagc_types::ObjectEntry;
use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::BlobStore;

#[derive(Debug, Default)]
struct Inner {
    objects: BTreeMap<String, u64>,
    fail_root: bool,
    failing_prefixes: HashSet<String>,
    failing_paths: HashSet<String>,
    remove_calls: Vec<Vec<String>>,
}

/// Blob store holding keys and sizes in a map.
///
/// Listing and removal failures can be injected per prefix or per path, and
/// every `remove` call is recorded, which makes it the test double for the
/// reconciler.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryBlobStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from `(key, size)` pairs
    #[must_use]
    pub fn with_objects<I, K>(objects: I) -> Self
    where
        I: IntoIterator<Item = (K, u64)>,
        K: Into<String>,
    {
        let store = Self::new();
        for (key, size) in objects {
            store.insert(key, size);
        }
        store
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn insert(&self, key: impl Into<String>, size: u64) {
        self.lock().objects.insert(key.into(), size);
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.lock().objects.contains_key(key)
    }

    /// All keys, sorted
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.lock().objects.keys().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().objects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().objects.is_empty()
    }

    /// Make `list_root` fail
    pub fn fail_root_listing(&self) {
        self.lock().fail_root = true;
    }

    /// Make `list` fail for this prefix
    pub fn fail_listing(&self, prefix: &str) {
        self.lock()
            .failing_prefixes
            .insert(prefix.trim_matches('/').to_string());
    }

    /// Make any `remove` call that includes this path fail as a whole
    pub fn fail_removal_of(&self, path: impl Into<String>) {
        self.lock().failing_paths.insert(path.into());
    }

    /// Paths passed to each `remove` call, in call order
    #[must_use]
    pub fn remove_calls(&self) -> Vec<Vec<String>> {
        self.lock().remove_calls.clone()
    }

    fn children(objects: &BTreeMap<String, u64>, prefix: &str) -> Vec<ObjectEntry> {
        let mut entries: BTreeMap<String, ObjectEntry> = BTreeMap::new();
        for (key, size) in objects {
            let rest = if prefix.is_empty() {
                key.as_str()
            } else {
                match key
                    .strip_prefix(prefix)
                    .and_then(|rest| rest.strip_prefix('/'))
                {
                    Some(rest) => rest,
                    None => continue,
                }
            };
            match rest.split_once('/') {
                Some((folder, _)) => {
                    entries
                        .entry(folder.to_string())
                        .or_insert_with(|| ObjectEntry::folder(folder));
                }
                None => {
                    entries.insert(rest.to_string(), ObjectEntry::file(rest, *size));
                }
            }
        }
        entries.into_values().collect()
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn list_root(&self) -> Result<Vec<ObjectEntry>, Error> {
        let inner = self.lock();
        if inner.fail_root {
            return Err(StorageError::ListFailed {
                prefix: String::new(),
                message: "root listing unavailable".to_string(),
            }
            .into());
        }
        Ok(Self::children(&inner.objects, ""))
    }

    async fn list(
        &self,
        prefix: &str,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<ObjectEntry>, Error> {
        let inner = self.lock();
        let prefix = prefix.trim_matches('/');
        if inner.failing_prefixes.contains(prefix) {
            return Err(StorageError::ListFailed {
                prefix: prefix.to_string(),
                message: "listing unavailable".to_string(),
            }
            .into());
        }
        Ok(Self::children(&inner.objects, prefix)
            .into_iter()
            .skip(offset)
            .take(limit)
            .collect())
    }

    async fn remove(&self, paths: &[String]) -> Result<(), Error> {
        let mut inner = self.lock();
        inner.remove_calls.push(paths.to_vec());
        if let Some(path) = paths.iter().find(|p| inner.failing_paths.contains(*p)) {
            return Err(StorageError::RemoveFailed {
                count: paths.len(),
                message: format!("refused to remove {path}"),
            }
            .into());
        }
        for path in paths {
            inner.objects.remove(path);
        }
        Ok(())
    }
}
