//! Integration tests for ops crate

#[cfg(test)]
mod tests {
    use mediagc_catalog::{SqliteCatalog, StaticCatalog};
    use mediagc_config::Config;
    use mediagc_errors::Error;
    use mediagc_events::{AppEvent, CleanupEvent, ScanEvent};
    use mediagc_ops::*;
    use mediagc_store::{BlobStore, LocalBlobStore, MemoryBlobStore};
    use mediagc_types::{DeleteOutcome, ImageRef, ObjectEntry, ProductImages, ORPHAN_REASON};
    use std::sync::Arc;
    use tokio_util::sync::CancellationToken;

    fn product(id: &str, urls: &[&str]) -> ProductImages {
        ProductImages::new(id, urls.iter().map(|u| ImageRef::new(*u)).collect())
    }

    fn reconciler(catalog: StaticCatalog, store: &MemoryBlobStore) -> Reconciler {
        Reconciler::new(Arc::new(catalog), Arc::new(store.clone()))
    }

    fn shop_fixture() -> (StaticCatalog, MemoryBlobStore) {
        let catalog = StaticCatalog::new(vec![
            product(
                "123",
                &["https://cdn.shop.test/storage/v1/object/public/products/123/123_abc.jpg"],
            ),
            product("456", &[]),
        ]);
        let store = MemoryBlobStore::with_objects([
            ("123/123_abc.jpg", 100),
            ("123/123_abc_thumb.jpg", 10),
            ("123/123_abc_medium.webp", 40),
            ("123/999_xyz.png", 7),
            ("123/.emptyFolderPlaceholder", 0),
            ("456/stale.jpg", 5),
            ("deleted-product/a.jpg", 1000),
            (".emptyFolderPlaceholder", 0),
        ]);
        (catalog, store)
    }

    #[tokio::test]
    async fn test_scan_reports_orphans() {
        let (catalog, store) = shop_fixture();
        let result = reconciler(catalog, &store).scan().await.unwrap();

        assert_eq!(result.scanned_products, 2);
        assert_eq!(result.scanned_folders, 3);
        assert_eq!(result.orphaned_folders, vec!["deleted-product".to_string()]);
        assert_eq!(
            result.orphaned_paths(),
            vec!["123/999_xyz.png".to_string(), "456/stale.jpg".to_string()]
        );
        assert_eq!(result.orphaned_files[0].reason, ORPHAN_REASON);
        assert_eq!(result.orphaned_files[0].reason, "Not referenced in product images");
        assert_eq!(result.total_orphaned_size, 12);
        assert!(result.skipped_folders.is_empty());
        assert!(store.remove_calls().is_empty());
    }

    #[tokio::test]
    async fn test_thumbnail_url_keeps_every_sibling_variant() {
        let catalog = StaticCatalog::new(vec![product(
            "P",
            &["https://cdn.shop.test/storage/v1/object/public/products/P/123_abc_thumb.webp"],
        )]);
        let store = MemoryBlobStore::with_objects([
            ("P/123_abc_thumb.webp", 1),
            ("P/123_abc_medium.webp", 2),
            ("P/123_abc_full.webp", 3),
            ("P/123_abc.jpg", 4),
            ("P/123_abd_thumb.webp", 5),
        ]);

        let result = reconciler(catalog, &store).scan().await.unwrap();
        assert_eq!(result.scanned_folders, 1);
        assert_eq!(result.orphaned_paths(), vec!["P/123_abd_thumb.webp".to_string()]);
        assert_eq!(result.total_orphaned_size, 5);
    }

    #[tokio::test]
    async fn test_total_size_matches_orphaned_files() {
        let (catalog, store) = shop_fixture();
        let result = reconciler(catalog, &store).scan().await.unwrap();
        let sum: u64 = result.orphaned_files.iter().map(|f| f.size).sum();
        assert_eq!(result.total_orphaned_size, sum);
    }

    #[tokio::test]
    async fn test_placeholder_never_reported() {
        let (catalog, store) = shop_fixture();
        let result = reconciler(catalog, &store).scan().await.unwrap();

        assert!(!result
            .orphaned_folders
            .iter()
            .any(|f| f == ".emptyFolderPlaceholder"));
        assert!(!result
            .orphaned_files
            .iter()
            .any(|f| f.path.ends_with(".emptyFolderPlaceholder")));
    }

    #[tokio::test]
    async fn test_unknown_folder_is_not_descended() {
        let (catalog, store) = shop_fixture();
        // Listing the unknown folder would fail the scan's file analysis
        store.fail_listing("deleted-product");

        let result = reconciler(catalog, &store).scan().await.unwrap();
        assert_eq!(result.orphaned_folders, vec!["deleted-product".to_string()]);
        assert!(result.skipped_folders.is_empty());
        assert!(!result
            .orphaned_files
            .iter()
            .any(|f| f.path.starts_with("deleted-product/")));
    }

    #[tokio::test]
    async fn test_subfolders_inside_product_folder_are_ignored() {
        let catalog = StaticCatalog::new(vec![product("P", &["a.jpg"])]);
        let store = MemoryBlobStore::with_objects([("P/a.jpg", 1), ("P/old/x.jpg", 2)]);

        let result = reconciler(catalog, &store).scan().await.unwrap();
        assert!(result.orphaned_files.is_empty());
        assert!(result.orphaned_folders.is_empty());
    }

    #[tokio::test]
    async fn test_catalog_pagination() {
        let products: Vec<_> = (0..5).map(|i| product(&format!("P{i}"), &[])).collect();
        let catalog = StaticCatalog::new(products);
        let store = MemoryBlobStore::new();

        let settings = ReconcilerSettings {
            page_size: 2,
            ..ReconcilerSettings::default()
        };
        let reconciler = Reconciler::new(Arc::new(catalog.clone()), Arc::new(store))
            .with_settings(settings);
        let result = reconciler.scan().await.unwrap();

        assert_eq!(result.scanned_products, 5);
        assert_eq!(catalog.fetches(), vec![0, 2, 4]);
    }

    #[tokio::test]
    async fn test_exact_page_multiple_fetches_one_empty_page() {
        let products: Vec<_> = (0..4).map(|i| product(&format!("P{i}"), &[])).collect();
        let catalog = StaticCatalog::new(products);

        let settings = ReconcilerSettings {
            page_size: 2,
            ..ReconcilerSettings::default()
        };
        let reconciler =
            Reconciler::new(Arc::new(catalog.clone()), Arc::new(MemoryBlobStore::new()))
                .with_settings(settings);
        let result = reconciler.scan().await.unwrap();

        assert_eq!(result.scanned_products, 4);
        assert_eq!(catalog.fetches(), vec![0, 2, 4]);
    }

    #[tokio::test]
    async fn test_folder_listing_is_paged() {
        let catalog = StaticCatalog::new(vec![product("P", &["keep.jpg"])]);
        let store = MemoryBlobStore::new();
        store.insert("P/keep.jpg", 1);
        for i in 0..7 {
            store.insert(format!("P/junk{i}.jpg"), 1);
        }

        let settings = ReconcilerSettings {
            list_page_size: 3,
            ..ReconcilerSettings::default()
        };
        let result = reconciler(catalog, &store)
            .with_settings(settings)
            .scan()
            .await
            .unwrap();
        assert_eq!(result.orphaned_files.len(), 7);
        assert_eq!(result.total_orphaned_size, 7);
    }

    #[tokio::test]
    async fn test_catalog_failure_is_fatal() {
        let (catalog, store) = shop_fixture();
        let settings = ReconcilerSettings {
            page_size: 1,
            ..ReconcilerSettings::default()
        };
        let result = reconciler(catalog.fail_at(1), &store)
            .with_settings(settings)
            .scan()
            .await;
        assert!(matches!(result, Err(Error::Catalog(_))));
    }

    #[tokio::test]
    async fn test_root_listing_failure_is_fatal() {
        let (catalog, store) = shop_fixture();
        store.fail_root_listing();
        let result = reconciler(catalog, &store).scan().await;
        assert!(matches!(result, Err(Error::Storage(_))));
    }

    #[tokio::test]
    async fn test_folder_listing_failure_skips_folder() {
        let (catalog, store) = shop_fixture();
        store.fail_listing("123");

        let (tx, mut rx) = mediagc_events::channel();
        let result = reconciler(catalog, &store)
            .with_event_sender(tx)
            .scan()
            .await
            .unwrap();

        assert_eq!(result.skipped_folders, vec!["123".to_string()]);
        assert_eq!(result.orphaned_paths(), vec!["456/stale.jpg".to_string()]);
        assert_eq!(result.scanned_folders, 3);

        let mut skipped = false;
        while let Ok(message) = rx.try_recv() {
            if let AppEvent::Scan(ScanEvent::FolderSkipped { folder, .. }) = message.event {
                assert_eq!(folder, "123");
                skipped = true;
            }
        }
        assert!(skipped);
    }

    #[tokio::test]
    async fn test_scan_is_idempotent() {
        let (catalog, store) = shop_fixture();
        let reconciler = reconciler(catalog, &store);
        let first = reconciler.scan().await.unwrap();
        let second = reconciler.scan().await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_folder_concurrency_does_not_change_result() {
        let products: Vec<_> = (0..20)
            .map(|i| product(&format!("P{i:02}"), &[&format!("P{i:02}_main.jpg")]))
            .collect();
        let store = MemoryBlobStore::new();
        for i in 0..20 {
            store.insert(format!("P{i:02}/P{i:02}_main_thumb.jpg"), 1);
            store.insert(format!("P{i:02}/extra{i}.jpg"), 2);
        }
        store.insert("gone/x.jpg", 3);

        let sequential = reconciler(StaticCatalog::new(products.clone()), &store)
            .scan()
            .await
            .unwrap();
        let concurrent = reconciler(StaticCatalog::new(products), &store)
            .with_settings(ReconcilerSettings {
                folder_concurrency: 8,
                ..ReconcilerSettings::default()
            })
            .scan()
            .await
            .unwrap();

        assert_eq!(sequential, concurrent);
        assert_eq!(sequential.orphaned_files.len(), 20);
    }

    #[tokio::test]
    async fn test_cancelled_scan() {
        let (catalog, store) = shop_fixture();
        let token = CancellationToken::new();
        token.cancel();

        let result = reconciler(catalog, &store)
            .with_cancellation(token)
            .scan()
            .await;
        assert!(matches!(result, Err(Error::Cancelled)));
    }

    #[tokio::test]
    async fn test_empty_delete_makes_no_store_call() {
        let store = MemoryBlobStore::new();
        let outcome = reconciler(StaticCatalog::default(), &store)
            .delete_batch(&[])
            .await;
        assert_eq!(outcome, DeleteOutcome::default());
        assert!(store.remove_calls().is_empty());
    }

    #[tokio::test]
    async fn test_delete_batches_and_failure_accounting() {
        let store = MemoryBlobStore::new();
        let paths: Vec<String> = (0..25).map(|i| format!("P/f{i:02}.jpg")).collect();
        for path in &paths {
            store.insert(path.clone(), 1);
        }
        // Second batch (f10..f19) fails as a whole
        store.fail_removal_of("P/f15.jpg");

        let (tx, mut rx) = mediagc_events::channel();
        let outcome = reconciler(StaticCatalog::default(), &store)
            .with_event_sender(tx)
            .delete_batch(&paths)
            .await;

        assert_eq!(
            outcome,
            DeleteOutcome {
                success: 15,
                failed: 10
            }
        );
        let calls = store.remove_calls();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[0].len(), 10);
        assert_eq!(calls[2].len(), 5);
        assert!(store.contains("P/f10.jpg"));
        assert!(!store.contains("P/f20.jpg"));

        let mut failed_batches = Vec::new();
        while let Ok(message) = rx.try_recv() {
            if let AppEvent::Cleanup(CleanupEvent::BatchFailed { batch, batches, .. }) =
                message.event
            {
                failed_batches.push((batch, batches));
            }
        }
        assert_eq!(failed_batches, vec![(2, 3)]);
    }

    #[tokio::test]
    async fn test_delete_concurrency_counts_match() {
        let store = MemoryBlobStore::new();
        let paths: Vec<String> = (0..23).map(|i| format!("P/f{i}.jpg")).collect();
        for path in &paths {
            store.insert(path.clone(), 1);
        }
        store.fail_removal_of("P/f0.jpg");

        let outcome = reconciler(StaticCatalog::default(), &store)
            .with_settings(ReconcilerSettings {
                batch_size: 4,
                delete_concurrency: 3,
                ..ReconcilerSettings::default()
            })
            .delete_batch(&paths)
            .await;

        assert_eq!(outcome.total(), 23);
        assert_eq!(outcome.failed, 4);
        assert_eq!(store.remove_calls().len(), 6);
    }

    #[tokio::test]
    async fn test_cancelled_delete_counts_nothing() {
        let store = MemoryBlobStore::with_objects([("P/a.jpg", 1)]);
        let token = CancellationToken::new();
        token.cancel();

        let outcome = reconciler(StaticCatalog::default(), &store)
            .with_cancellation(token)
            .delete_batch(&["P/a.jpg".to_string()])
            .await;
        assert_eq!(outcome, DeleteOutcome::default());
        assert!(store.remove_calls().is_empty());
    }

    #[tokio::test]
    async fn test_delete_then_rescan_is_clean() {
        let (catalog, store) = shop_fixture();
        let reconciler = reconciler(catalog, &store);

        let result = reconciler.scan().await.unwrap();
        let outcome = reconciler.delete_batch(&result.orphaned_paths()).await;
        assert_eq!(outcome.success, 2);

        let rescan = reconciler.scan().await.unwrap();
        assert!(rescan.orphaned_files.is_empty());
        assert_eq!(rescan.orphaned_folders, vec!["deleted-product".to_string()]);
    }

    #[tokio::test]
    async fn test_purge_folders_removes_nested_objects() {
        let store = MemoryBlobStore::with_objects([
            ("gone/a.jpg", 1),
            ("gone/.emptyFolderPlaceholder", 0),
            ("gone/sizes/a_thumb.jpg", 1),
            ("gone/sizes/deep/a_full.jpg", 1),
            ("keep/b.jpg", 1),
        ]);

        let purge = reconciler(StaticCatalog::default(), &store)
            .with_settings(ReconcilerSettings {
                batch_size: 2,
                list_page_size: 1,
                ..ReconcilerSettings::default()
            })
            .purge_folders(&["gone".to_string()])
            .await
            .unwrap();

        assert_eq!(purge.removed, vec!["gone".to_string()]);
        assert_eq!(purge.objects.success, 4);
        assert_eq!(store.keys(), vec!["keep/b.jpg".to_string()]);
    }

    #[tokio::test]
    async fn test_purge_folders_reports_incomplete_and_unlisted() {
        let store = MemoryBlobStore::with_objects([
            ("a/x.jpg", 1),
            ("b/y.jpg", 1),
            ("c/z.jpg", 1),
        ]);
        store.fail_removal_of("b/y.jpg");
        store.fail_listing("c");

        let purge = reconciler(StaticCatalog::default(), &store)
            .purge_folders(&["a".to_string(), "b".to_string(), "c".to_string()])
            .await
            .unwrap();

        assert_eq!(purge.removed, vec!["a".to_string()]);
        assert_eq!(purge.incomplete, vec!["b".to_string()]);
        assert_eq!(purge.unlisted, vec!["c".to_string()]);
        assert_eq!(
            purge.objects,
            DeleteOutcome {
                success: 1,
                failed: 1
            }
        );
    }

    #[tokio::test]
    async fn test_purge_removes_root_level_file() {
        let store = MemoryBlobStore::with_objects([("stray.jpg", 9), ("P/a.jpg", 1)]);
        let catalog = StaticCatalog::new(vec![product("P", &["a.jpg"])]);
        let reconciler = reconciler(catalog, &store);

        let result = reconciler.scan().await.unwrap();
        assert_eq!(result.orphaned_folders, vec!["stray.jpg".to_string()]);

        let purge = reconciler
            .purge_folders(&result.orphaned_folders)
            .await
            .unwrap();
        assert_eq!(purge.removed, vec!["stray.jpg".to_string()]);
        assert_eq!(
            purge.objects,
            DeleteOutcome {
                success: 1,
                failed: 0
            }
        );
        assert_eq!(store.keys(), vec!["P/a.jpg".to_string()]);
    }

    #[tokio::test]
    async fn test_purge_of_root_level_file_that_cannot_be_removed() {
        let store = MemoryBlobStore::with_objects([("stray.jpg", 9)]);
        store.fail_removal_of("stray.jpg");

        let purge = reconciler(StaticCatalog::default(), &store)
            .purge_folders(&["stray.jpg".to_string()])
            .await
            .unwrap();
        assert!(purge.removed.is_empty());
        assert_eq!(purge.incomplete, vec!["stray.jpg".to_string()]);
        assert!(store.contains("stray.jpg"));
    }

    /// Store that fires the cancellation token on its first removal
    struct CancelOnRemove {
        inner: MemoryBlobStore,
        token: CancellationToken,
    }

    #[async_trait::async_trait]
    impl BlobStore for CancelOnRemove {
        async fn list_root(&self) -> Result<Vec<ObjectEntry>, Error> {
            self.inner.list_root().await
        }

        async fn list(
            &self,
            prefix: &str,
            limit: usize,
            offset: usize,
        ) -> Result<Vec<ObjectEntry>, Error> {
            self.inner.list(prefix, limit, offset).await
        }

        async fn remove(&self, paths: &[String]) -> Result<(), Error> {
            self.token.cancel();
            self.inner.remove(paths).await
        }
    }

    fn ctx_for(catalog: StaticCatalog, store: &MemoryBlobStore) -> OpsCtx {
        let (tx, _rx) = mediagc_events::channel();
        OpsContextBuilder::new()
            .with_catalog(Arc::new(catalog))
            .with_store(Arc::new(store.clone()))
            .with_event_sender(tx)
            .with_config(Config::default())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_builder_requires_components() {
        let (tx, _rx) = mediagc_events::channel();
        let result = OpsContextBuilder::new().with_event_sender(tx).build();
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_builder_rejects_invalid_config() {
        let (tx, _rx) = mediagc_events::channel();
        let mut config = Config::default();
        config.cleanup.batch_size = 0;
        let result = OpsContextBuilder::new()
            .with_catalog(Arc::new(StaticCatalog::default()))
            .with_store(Arc::new(MemoryBlobStore::new()))
            .with_event_sender(tx)
            .with_config(config)
            .build();
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_clean_dry_run_deletes_nothing() {
        let (catalog, store) = shop_fixture();
        let ctx = ctx_for(catalog, &store);

        let report = clean(
            &ctx,
            CleanOptions {
                dry_run: true,
                folders: true,
            },
        )
        .await
        .unwrap();

        assert!(report.dry_run);
        assert!(report.files.is_none());
        assert!(report.folders.is_none());
        assert_eq!(report.scan.orphaned_files.len(), 2);
        assert!(store.remove_calls().is_empty());
    }

    #[tokio::test]
    async fn test_clean_files_only_by_default() {
        let (catalog, store) = shop_fixture();
        let ctx = ctx_for(catalog, &store);

        let report = clean(&ctx, CleanOptions::default()).await.unwrap();
        assert_eq!(
            report.files,
            Some(DeleteOutcome {
                success: 2,
                failed: 0
            })
        );
        assert!(report.folders.is_none());
        assert!(store.contains("deleted-product/a.jpg"));
        assert!(OperationResult::Clean(report).partial_failure().is_none());
    }

    #[tokio::test]
    async fn test_clean_cancelled_mid_delete_is_an_error() {
        let catalog = StaticCatalog::new(vec![product("P", &[])]);
        let inner = MemoryBlobStore::with_objects((0..25).map(|i| (format!("P/{i:02}.jpg"), 1)));
        let token = CancellationToken::new();
        let store = CancelOnRemove {
            inner: inner.clone(),
            token: token.clone(),
        };

        let mut config = Config::default();
        config.cleanup.batch_size = 10;
        config.cleanup.delete_concurrency = 1;
        let (tx, _rx) = mediagc_events::channel();
        let ctx = OpsContextBuilder::new()
            .with_catalog(Arc::new(catalog))
            .with_store(Arc::new(store))
            .with_event_sender(tx)
            .with_config(config)
            .with_cancellation(token)
            .build()
            .unwrap();

        let result = clean(&ctx, CleanOptions::default()).await;
        assert!(matches!(result, Err(Error::Cancelled)));
        assert_eq!(inner.remove_calls().len(), 1);
        assert_eq!(inner.len(), 15);
    }

    #[test]
    fn test_unattempted_orphans_count_as_partial_failure() {
        let mut scan = mediagc_types::ScanResult::default();
        for i in 0..25 {
            scan.orphaned_files.push(mediagc_types::OrphanedFile {
                path: format!("P/{i}.jpg"),
                size: 1,
                reason: ORPHAN_REASON.to_string(),
            });
        }
        let report = mediagc_types::CleanReport {
            scan,
            files: Some(DeleteOutcome {
                success: 10,
                failed: 0,
            }),
            ..Default::default()
        };

        let failure = OperationResult::Clean(report).partial_failure().unwrap();
        assert!(matches!(
            failure,
            mediagc_errors::OpsError::PartialDelete {
                failed: 15,
                total: 25
            }
        ));
    }

    #[tokio::test]
    async fn test_clean_with_folders() {
        let (catalog, store) = shop_fixture();
        store.fail_removal_of("456/stale.jpg");
        let ctx = ctx_for(catalog, &store);

        let report = clean(
            &ctx,
            CleanOptions {
                dry_run: false,
                folders: true,
            },
        )
        .await
        .unwrap();

        let purge = report.folders.clone().unwrap();
        assert_eq!(purge.removed, vec!["deleted-product".to_string()]);
        assert!(!store.contains("deleted-product/a.jpg"));
        // Both orphans share one batch, so both count as failed
        assert_eq!(report.files.unwrap().failed, 2);

        let failure = OperationResult::Clean(report).partial_failure();
        assert!(failure.is_some());
    }

    #[tokio::test]
    async fn test_scan_op_over_sqlite_and_local_store() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = SqliteCatalog::init(&dir.path().join("catalog.sqlite"))
            .await
            .unwrap();
        catalog
            .upsert(
                &product("P1", &["https://cdn.test/P1/hero.jpg?v=3"]),
                "Chair",
            )
            .await
            .unwrap();

        let store = LocalBlobStore::new(dir.path().join("images"));
        store.put("P1/hero.jpg", b"1234").await.unwrap();
        store.put("P1/hero_full.jpg", b"12345678").await.unwrap();
        store.put("P1/old.jpg", b"12").await.unwrap();
        store.put("P2/x.jpg", b"1").await.unwrap();

        let (tx, _rx) = mediagc_events::channel();
        let store: Arc<dyn BlobStore> = Arc::new(store);
        let ctx = OpsContextBuilder::new()
            .with_catalog(Arc::new(catalog))
            .with_store(store.clone())
            .with_event_sender(tx)
            .build()
            .unwrap();

        let result = scan(&ctx).await.unwrap();
        assert_eq!(result.orphaned_folders, vec!["P2".to_string()]);
        assert_eq!(result.orphaned_paths(), vec!["P1/old.jpg".to_string()]);
        assert_eq!(result.total_orphaned_size, 2);

        let report = clean(
            &ctx,
            CleanOptions {
                dry_run: false,
                folders: true,
            },
        )
        .await
        .unwrap();
        assert_eq!(report.files.unwrap().success, 1);
        assert!(store.list("P2", 10, 0).await.unwrap().is_empty());
        assert!(!dir.path().join("images/P2").exists());
    }

    #[tokio::test]
    async fn test_purge_root_level_file_on_local_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalBlobStore::new(dir.path());
        store.put("P/a.jpg", b"1").await.unwrap();
        store.put("stray.jpg", b"12345").await.unwrap();

        let catalog = StaticCatalog::new(vec![product("P", &["a.jpg"])]);
        let reconciler = Reconciler::new(Arc::new(catalog), Arc::new(store));

        let result = reconciler.scan().await.unwrap();
        assert_eq!(result.orphaned_folders, vec!["stray.jpg".to_string()]);

        let purge = reconciler
            .purge_folders(&result.orphaned_folders)
            .await
            .unwrap();
        assert_eq!(purge.removed, vec!["stray.jpg".to_string()]);
        assert!(purge.unlisted.is_empty());
        assert!(!dir.path().join("stray.jpg").exists());
        assert!(dir.path().join("P/a.jpg").exists());
    }
}
