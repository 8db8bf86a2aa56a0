//! Operations context for dependency injection

use crate::reconciler::{Reconciler, ReconcilerSettings};
use mediagc_catalog::ProductSource;
use mediagc_config::Config;
use mediagc_errors::{Error, OpsError};
use mediagc_events::{EventEmitter, EventSender};
use mediagc_store::BlobStore;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Operations context providing access to all system components
pub struct OpsCtx {
    /// Reconciler wired to the catalog and blob store
    pub reconciler: Reconciler,
    /// Event sender for progress reporting
    pub tx: EventSender,
    /// System configuration
    pub config: Config,
    /// Id attached to every event of this run
    pub operation_id: String,
}

impl OpsCtx {
    // No public constructor - use OpsContextBuilder instead

    /// Token that stops the running operation
    #[must_use]
    pub fn cancellation_token(&self) -> &CancellationToken {
        self.reconciler.cancellation_token()
    }
}

impl EventEmitter for OpsCtx {
    fn event_sender(&self) -> Option<&EventSender> {
        Some(&self.tx)
    }

    fn correlation_id(&self) -> Option<&str> {
        Some(&self.operation_id)
    }
}

/// Builder for operations context
pub struct OpsContextBuilder {
    catalog: Option<Arc<dyn ProductSource>>,
    store: Option<Arc<dyn BlobStore>>,
    tx: Option<EventSender>,
    config: Option<Config>,
    cancel: Option<CancellationToken>,
}

impl OpsContextBuilder {
    /// Create new context builder
    #[must_use]
    pub fn new() -> Self {
        Self {
            catalog: None,
            store: None,
            tx: None,
            config: None,
            cancel: None,
        }
    }

    /// Set product catalog
    #[must_use]
    pub fn with_catalog(mut self, catalog: Arc<dyn ProductSource>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Set blob store
    #[must_use]
    pub fn with_store(mut self, store: Arc<dyn BlobStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Set event sender
    #[must_use]
    pub fn with_event_sender(mut self, tx: EventSender) -> Self {
        self.tx = Some(tx);
        self
    }

    /// Set configuration
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Set cancellation token
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Build the context
    ///
    /// # Errors
    ///
    /// Returns an error if a required component is missing or the
    /// configuration is invalid.
    pub fn build(self) -> Result<OpsCtx, Error> {
        let catalog = self.catalog.ok_or_else(|| OpsError::MissingComponent {
            component: "catalog".to_string(),
        })?;
        let store = self.store.ok_or_else(|| OpsError::MissingComponent {
            component: "store".to_string(),
        })?;
        let tx = self.tx.ok_or_else(|| OpsError::MissingComponent {
            component: "event sender".to_string(),
        })?;
        let config = self.config.unwrap_or_default();
        config
            .validate()
            .map_err(|e| OpsError::ContextCreationFailed {
                message: e.to_string(),
            })?;

        let operation_id = uuid::Uuid::new_v4().to_string();
        let reconciler = Reconciler::new(catalog, store)
            .with_settings(ReconcilerSettings::from_config(&config))
            .with_event_sender(tx.clone())
            .with_correlation_id(operation_id.clone())
            .with_cancellation(self.cancel.unwrap_or_default());

        Ok(OpsCtx {
            reconciler,
            tx,
            config,
            operation_id,
        })
    }
}

impl Default for OpsContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
