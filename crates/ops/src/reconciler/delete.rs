use futures::stream::{self, StreamExt};
use mediagc_errors::Error;
use mediagc_events::{AppEvent, CleanupEvent, EventEmitter, FailureContext};
use mediagc_store::object_key;
use mediagc_types::{DeleteOutcome, FolderPurge};
use std::time::Instant;

use super::{elapsed_ms, Reconciler};

impl Reconciler {
    /// Remove `paths` in batches of `batch_size`, one store call per batch
    ///
    /// A batch succeeds or fails as a whole and a failed batch does not stop
    /// the next one. Batches not started before cancellation are not
    /// counted. An empty slice returns `{0, 0}` without touching the store.
    pub async fn delete_batch(&self, paths: &[String]) -> DeleteOutcome {
        let mut outcome = DeleteOutcome::default();
        if paths.is_empty() {
            return outcome;
        }

        let start = Instant::now();
        let batch_size = self.settings.batch_size();
        let batches = paths.len().div_ceil(batch_size);
        self.emit(AppEvent::Cleanup(CleanupEvent::Started {
            total: paths.len(),
            batches,
        }));

        let concurrency = self.settings.delete_concurrency.max(1);
        let mut results = stream::iter(paths.chunks(batch_size).enumerate())
            .map(|(index, chunk)| async move {
                if self.cancel.is_cancelled() {
                    None
                } else {
                    Some(self.remove_chunk(index + 1, batches, chunk).await)
                }
            })
            .buffered(concurrency);

        while let Some(result) = results.next().await {
            match result {
                Some(batch) => outcome += batch,
                None => {
                    tracing::info!(
                        success = outcome.success,
                        failed = outcome.failed,
                        "delete cancelled"
                    );
                    break;
                }
            }
        }

        self.emit(AppEvent::Cleanup(CleanupEvent::Completed {
            success: outcome.success,
            failed: outcome.failed,
            duration_ms: elapsed_ms(start),
        }));
        outcome
    }

    async fn remove_chunk(&self, batch: usize, batches: usize, chunk: &[String]) -> DeleteOutcome {
        match self.store.remove(chunk).await {
            Ok(()) => {
                tracing::debug!(batch, batches, size = chunk.len(), "batch removed");
                self.emit(AppEvent::Cleanup(CleanupEvent::BatchCompleted {
                    batch,
                    batches,
                    size: chunk.len(),
                }));
                DeleteOutcome {
                    success: chunk.len(),
                    failed: 0,
                }
            }
            Err(e) => {
                tracing::warn!(batch, batches, size = chunk.len(), error = %e, "batch removal failed");
                self.emit(AppEvent::Cleanup(CleanupEvent::BatchFailed {
                    batch,
                    batches,
                    size: chunk.len(),
                    failure: FailureContext::from_error(&e),
                }));
                DeleteOutcome {
                    success: 0,
                    failed: chunk.len(),
                }
            }
        }
    }

    /// Delete every object below each folder, descending into sub-folders
    ///
    /// A folder is reported removed only when all of its objects were
    /// deleted. A name that lists no objects is deleted as a single key, so
    /// a stray root-level file is removed too. Folders whose listing fails
    /// end up in `unlisted`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Cancelled`] if the cancellation token fires.
    pub async fn purge_folders(&self, folders: &[String]) -> Result<FolderPurge, Error> {
        let mut purge = FolderPurge::default();

        for folder in folders {
            self.check_cancelled()?;
            let folder = folder.trim_matches('/').to_string();

            let keys = match self.collect_objects(&folder).await {
                Ok(keys) => keys,
                Err(e) => {
                    tracing::warn!(folder = %folder, error = %e, "could not list folder for purge");
                    self.emit(AppEvent::Cleanup(CleanupEvent::FolderUnlisted {
                        folder: folder.clone(),
                        failure: FailureContext::from_error(&e),
                    }));
                    purge.unlisted.push(folder);
                    continue;
                }
            };

            self.emit(AppEvent::Cleanup(CleanupEvent::FolderListed {
                folder: folder.clone(),
                objects: keys.len(),
            }));

            // A root-level object lists as empty; remove it under its own key
            let keys = if keys.is_empty() {
                vec![folder.clone()]
            } else {
                keys
            };

            let outcome = self.delete_batch(&keys).await;
            purge.objects += outcome;
            if outcome.failed == 0 && outcome.success == keys.len() {
                purge.removed.push(folder);
            } else {
                purge.incomplete.push(folder);
            }
        }

        self.check_cancelled()?;
        Ok(purge)
    }

    /// Keys of every object below `folder`, depth first
    async fn collect_objects(&self, folder: &str) -> Result<Vec<String>, Error> {
        let limit = self.settings.list_page_size();
        let mut keys = Vec::new();
        let mut pending = vec![folder.to_string()];

        while let Some(prefix) = pending.pop() {
            let mut offset = 0;
            loop {
                let page = self.store.list(&prefix, limit, offset).await?;
                let fetched = page.len();
                for entry in page {
                    let key = object_key(&prefix, &entry.name);
                    if entry.is_folder {
                        pending.push(key);
                    } else {
                        keys.push(key);
                    }
                }
                if fetched < limit {
                    break;
                }
                offset += fetched;
            }
        }

        Ok(keys)
    }
}
