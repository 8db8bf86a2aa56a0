//! `SQLite`-backed product source

use async_trait::async_trait;
use mediagc_errors::{CatalogError, Error};
use mediagc_types::ProductImages;
use sqlx::{Pool, Sqlite};
use std::path::Path;

use crate::{create_pool, queries, run_migrations, ProductSource};

/// Product catalog stored in a `SQLite` database
#[derive(Clone)]
pub struct SqliteCatalog {
    pool: Pool<Sqlite>,
}

impl SqliteCatalog {
    /// Open an existing catalog database
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or cannot be opened.
    pub async fn open(db_path: &Path) -> Result<Self, Error> {
        if !tokio::fs::try_exists(db_path).await.unwrap_or(false) {
            return Err(CatalogError::DatabaseError {
                message: format!("catalog database not found: {}", db_path.display()),
            }
            .into());
        }
        let pool = create_pool(db_path, false).await?;
        Ok(Self { pool })
    }

    /// Create the database if needed and apply the schema
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be created or migrated.
    pub async fn init(db_path: &Path) -> Result<Self, Error> {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| Error::io_with_path(&e, parent))?;
            }
        }
        let pool = create_pool(db_path, true).await?;
        run_migrations(&pool).await?;
        tracing::debug!(path = %db_path.display(), "catalog schema ready");
        Ok(Self { pool })
    }

    #[must_use]
    pub fn with_pool(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    #[must_use]
    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Insert or replace a product record
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub async fn upsert(&self, product: &ProductImages, name: &str) -> Result<(), Error> {
        queries::upsert_product(&self.pool, product, name).await
    }

    /// Number of product records
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn count(&self) -> Result<u64, Error> {
        queries::count_products(&self.pool).await
    }
}

#[async_trait]
impl ProductSource for SqliteCatalog {
    async fn fetch_products(
        &self,
        offset: u64,
        limit: usize,
    ) -> Result<Vec<ProductImages>, Error> {
        queries::fetch_page(&self.pool, offset, limit)
            .await?
            .into_iter()
            .map(crate::models::ProductRow::into_product_images)
            .collect()
    }
}
