use futures::stream::{self, StreamExt};
use mediagc_errors::Error;
use mediagc_events::{AppEvent, EventEmitter, FailureContext, ScanEvent};
use mediagc_store::object_key;
use mediagc_types::{ImageName, ObjectEntry, ScanResult};
use std::collections::{HashMap, HashSet};
use std::time::Instant;

use super::{elapsed_ms, Reconciler};

/// Valid base names per product id
type ProductIndex = HashMap<String, HashSet<String>>;

/// What happened to one root entry
enum FolderOutcome {
    Orphaned(String),
    Listed(Vec<(String, u64)>),
    Skipped(String),
    Cancelled,
}

impl Reconciler {
    /// Compare the blob store against the catalog and report orphans
    ///
    /// Nothing is modified. Catalog and root listing failures abort the
    /// scan; a folder whose listing fails is recorded in
    /// `skipped_folders` and the scan moves on.
    ///
    /// # Errors
    ///
    /// Returns the first catalog or root listing error, or
    /// [`Error::Cancelled`] if the cancellation token fires.
    pub async fn scan(&self) -> Result<ScanResult, Error> {
        let start = Instant::now();
        self.emit(AppEvent::Scan(ScanEvent::Started {
            page_size: self.settings.page_size(),
        }));

        let result = self.run_scan().await;
        match &result {
            Ok(scan) => {
                tracing::info!(
                    scanned_products = scan.scanned_products,
                    scanned_folders = scan.scanned_folders,
                    orphaned_folders = scan.orphaned_folders.len(),
                    orphaned_files = scan.orphaned_files.len(),
                    "scan finished"
                );
                self.emit(AppEvent::Scan(ScanEvent::Completed {
                    scanned_products: scan.scanned_products,
                    scanned_folders: scan.scanned_folders,
                    orphaned_folders: scan.orphaned_folders.len(),
                    orphaned_files: scan.orphaned_files.len(),
                    total_orphaned_size: scan.total_orphaned_size,
                    duration_ms: elapsed_ms(start),
                }));
            }
            Err(e) => {
                self.emit(AppEvent::Scan(ScanEvent::Failed {
                    failure: FailureContext::from_error(e),
                }));
            }
        }
        result
    }

    async fn run_scan(&self) -> Result<ScanResult, Error> {
        let (scanned_products, products) = self.load_products().await?;
        self.emit(AppEvent::Scan(ScanEvent::CatalogLoaded {
            products: scanned_products,
        }));

        let folders: Vec<ObjectEntry> = self
            .store
            .list_root()
            .await?
            .into_iter()
            .filter(|entry| !self.is_placeholder(&entry.name))
            .collect();
        self.emit(AppEvent::Scan(ScanEvent::RootListed {
            folders: folders.len(),
        }));

        let mut result = ScanResult {
            scanned_products,
            scanned_folders: folders.len(),
            ..ScanResult::default()
        };

        let concurrency = self.settings.folder_concurrency.max(1);
        let mut outcomes = stream::iter(folders)
            .map(|entry| self.examine_folder(entry.name, &products))
            .buffered(concurrency);

        while let Some(outcome) = outcomes.next().await {
            match outcome {
                FolderOutcome::Orphaned(folder) => {
                    self.emit(AppEvent::Scan(ScanEvent::FolderOrphaned {
                        folder: folder.clone(),
                    }));
                    result.orphaned_folders.push(folder);
                }
                FolderOutcome::Listed(orphans) => {
                    for (path, size) in orphans {
                        self.emit(AppEvent::Scan(ScanEvent::FileOrphaned {
                            path: path.clone(),
                            size,
                        }));
                        result.push_orphaned_file(path, size);
                    }
                }
                FolderOutcome::Skipped(folder) => result.skipped_folders.push(folder),
                FolderOutcome::Cancelled => return Err(Error::Cancelled),
            }
        }

        Ok(result)
    }

    /// Page through the catalog until a short page
    async fn load_products(&self) -> Result<(usize, ProductIndex), Error> {
        let page_size = self.settings.page_size();
        let mut index = ProductIndex::new();
        let mut count = 0;
        let mut offset = 0u64;

        loop {
            self.check_cancelled()?;
            let page = self.catalog.fetch_products(offset, page_size).await?;
            let fetched = page.len();
            tracing::debug!(offset, fetched, "fetched product page");
            self.emit(AppEvent::Scan(ScanEvent::CatalogPage { offset, fetched }));

            for product in page {
                let names = product.base_names();
                index
                    .entry(product.id.as_str().to_string())
                    .or_default()
                    .extend(names);
                count += 1;
            }

            if fetched < page_size {
                break;
            }
            offset += fetched as u64;
        }

        Ok((count, index))
    }

    async fn examine_folder(&self, folder: String, products: &ProductIndex) -> FolderOutcome {
        if self.cancel.is_cancelled() {
            return FolderOutcome::Cancelled;
        }

        let Some(valid) = products.get(&folder) else {
            return FolderOutcome::Orphaned(folder);
        };

        match self.list_files(&folder).await {
            Ok(files) => FolderOutcome::Listed(
                files
                    .into_iter()
                    .filter(|entry| !valid.contains(&ImageName::parse(&entry.name).base))
                    .map(|entry| (object_key(&folder, &entry.name), entry.size_or_zero()))
                    .collect(),
            ),
            Err(e) => {
                tracing::warn!(folder = %folder, error = %e, "skipping folder that could not be listed");
                self.emit(AppEvent::Scan(ScanEvent::FolderSkipped {
                    folder: folder.clone(),
                    failure: FailureContext::from_error(&e),
                }));
                FolderOutcome::Skipped(folder)
            }
        }
    }

    /// Every file directly inside `folder`, placeholder and sub-folders excluded
    async fn list_files(&self, folder: &str) -> Result<Vec<ObjectEntry>, Error> {
        let limit = self.settings.list_page_size();
        let mut files = Vec::new();
        let mut offset = 0;

        loop {
            let page = self.store.list(folder, limit, offset).await?;
            let fetched = page.len();
            files.extend(
                page.into_iter()
                    .filter(|entry| !entry.is_folder && !self.is_placeholder(&entry.name)),
            );
            if fetched < limit {
                break;
            }
            offset += fetched;
        }

        Ok(files)
    }
}
