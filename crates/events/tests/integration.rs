//! Integration tests for events

#[cfg(test)]
mod tests {
    use mediagc_errors::StorageError;
    use mediagc_events::*;

    #[tokio::test]
    async fn test_event_sender_emits_with_meta() {
        let (tx, mut rx) = channel();

        tx.emit_warning("folder listing slow");
        tx.emit(AppEvent::Scan(ScanEvent::CatalogLoaded { products: 3 }));

        let first = rx.recv().await.unwrap();
        assert!(matches!(
            first.event,
            AppEvent::General(GeneralEvent::Warning { .. })
        ));
        assert_eq!(first.meta.level, EventLevel::Warn);
        assert_eq!(first.meta.source, EventSource::GENERAL);

        let second = rx.recv().await.unwrap();
        assert_eq!(second.meta.source, EventSource::SCAN);
        assert_eq!(second.event.message(), "Found 3 products");
    }

    #[tokio::test]
    async fn test_dropped_receiver() {
        let (tx, rx) = channel();
        drop(rx);

        // Should not panic when receiver is dropped
        tx.emit_warning("ignored");
        NullEmitter.emit_error("also ignored");
    }

    #[test]
    fn test_failure_context_from_error() {
        let err = StorageError::ListFailed {
            prefix: "P/".into(),
            message: "timeout".into(),
        };
        let failure = FailureContext::from_error(&err);
        assert_eq!(failure.code.as_deref(), Some("storage.list_failed"));
        assert!(failure.retryable);

        let event = AppEvent::Scan(ScanEvent::FolderSkipped {
            folder: "P".into(),
            failure,
        });
        assert_eq!(event.log_level(), tracing::Level::WARN);
        assert!(event.message().starts_with("Skipped folder P"));
    }

    #[test]
    fn test_event_serialization_is_tagged() {
        let event = AppEvent::Cleanup(CleanupEvent::BatchCompleted {
            batch: 1,
            batches: 3,
            size: 10,
        });
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["domain"], "cleanup");
        assert_eq!(json["event"]["type"], "BatchCompleted");
    }
}
