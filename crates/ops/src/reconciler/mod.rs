//! Orphan reconciliation between the product catalog and the blob store
//!
//! A [`Reconciler`] owns its collaborators and settings. It scans for
//! orphaned folders and files, deletes paths in batches, and purges whole
//! folders. All progress leaves through the injected event sender.

mod delete;
mod scan;

use mediagc_catalog::ProductSource;
use mediagc_config::{
    constants::{
        DEFAULT_BATCH_SIZE, DEFAULT_DELETE_CONCURRENCY, DEFAULT_FOLDER_CONCURRENCY,
        DEFAULT_LIST_PAGE_SIZE, DEFAULT_PAGE_SIZE,
    },
    Config,
};
use mediagc_errors::Error;
use mediagc_events::{EventEmitter, EventSender};
use mediagc_store::BlobStore;
use mediagc_types::PLACEHOLDER_NAME;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Paging, batching and concurrency knobs for a [`Reconciler`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcilerSettings {
    /// Product records fetched per catalog page
    pub page_size: usize,
    /// Entries fetched per folder listing page
    pub list_page_size: usize,
    /// Marker object name ignored at every level
    pub placeholder: String,
    /// Product folders listed concurrently during a scan
    pub folder_concurrency: usize,
    /// Paths per bulk remove call
    pub batch_size: usize,
    /// Remove calls in flight at once
    pub delete_concurrency: usize,
}

impl Default for ReconcilerSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            list_page_size: DEFAULT_LIST_PAGE_SIZE,
            placeholder: PLACEHOLDER_NAME.to_string(),
            folder_concurrency: DEFAULT_FOLDER_CONCURRENCY,
            batch_size: DEFAULT_BATCH_SIZE,
            delete_concurrency: DEFAULT_DELETE_CONCURRENCY,
        }
    }
}

impl ReconcilerSettings {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            page_size: config.catalog.page_size,
            list_page_size: config.storage.list_page_size,
            placeholder: config.storage.placeholder.clone(),
            folder_concurrency: config.scan.folder_concurrency,
            batch_size: config.cleanup.batch_size,
            delete_concurrency: config.cleanup.delete_concurrency,
        }
    }

    // Zero sizes would never terminate a paging loop
    fn page_size(&self) -> usize {
        self.page_size.max(1)
    }

    fn list_page_size(&self) -> usize {
        self.list_page_size.max(1)
    }

    fn batch_size(&self) -> usize {
        self.batch_size.max(1)
    }
}

/// Finds and removes blob store objects no product references
pub struct Reconciler {
    catalog: Arc<dyn ProductSource>,
    store: Arc<dyn BlobStore>,
    settings: ReconcilerSettings,
    tx: Option<EventSender>,
    correlation_id: Option<String>,
    cancel: CancellationToken,
}

impl Reconciler {
    #[must_use]
    pub fn new(catalog: Arc<dyn ProductSource>, store: Arc<dyn BlobStore>) -> Self {
        Self {
            catalog,
            store,
            settings: ReconcilerSettings::default(),
            tx: None,
            correlation_id: None,
            cancel: CancellationToken::new(),
        }
    }

    #[must_use]
    pub fn with_settings(mut self, settings: ReconcilerSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Send progress events to this channel
    #[must_use]
    pub fn with_event_sender(mut self, tx: EventSender) -> Self {
        self.tx = Some(tx);
        self
    }

    /// Tag every emitted event with this correlation id
    #[must_use]
    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }

    /// Stop work between folders and batches once this token is cancelled
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    #[must_use]
    pub fn settings(&self) -> &ReconcilerSettings {
        &self.settings
    }

    #[must_use]
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    fn check_cancelled(&self) -> Result<(), Error> {
        if self.cancel.is_cancelled() {
            Err(Error::Cancelled)
        } else {
            Ok(())
        }
    }

    fn is_placeholder(&self, name: &str) -> bool {
        name == self.settings.placeholder
    }
}

impl EventEmitter for Reconciler {
    fn event_sender(&self) -> Option<&EventSender> {
        self.tx.as_ref()
    }

    fn correlation_id(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }
}

fn elapsed_ms(start: std::time::Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}
