#![warn(mismatched_lifetime_syntaxes)]
#![deny(clippy::pedantic, unsafe_code)]
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::missing_panics_doc
)]
#![allow(clippy::module_name_repetitions)]

//! Product catalog access for mediagc
//!
//! The reconciler only needs the `{id, images}` projection of each product,
//! fetched in pages. [`ProductSource`] is that seam. [`SqliteCatalog`] reads
//! a `SQLite` `products` table; [`StaticCatalog`] serves a fixed list.

pub mod models;
pub mod queries;
mod sqlite;
mod fixed;

pub use fixed::StaticCatalog;
pub use models::ProductRow;
pub use sqlite::SqliteCatalog;

use async_trait::async_trait;
use mediagc_errors::{CatalogError, Error};
use mediagc_types::ProductImages;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Paged read access to product records
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Fetch up to `limit` products starting at `offset`, in a stable order
    ///
    /// A page shorter than `limit` marks the end of the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the page cannot be read or decoded.
    async fn fetch_products(&self, offset: u64, limit: usize)
        -> Result<Vec<ProductImages>, Error>;
}

#[async_trait]
impl<T: ProductSource + ?Sized> ProductSource for Arc<T> {
    async fn fetch_products(
        &self,
        offset: u64,
        limit: usize,
    ) -> Result<Vec<ProductImages>, Error> {
        (**self).fetch_products(offset, limit).await
    }
}

/// Create a new `SQLite` connection pool
///
/// # Errors
///
/// Returns an error if the database connection fails, or if the file is
/// missing and `create_if_missing` is false.
pub async fn create_pool(db_path: &Path, create_if_missing: bool) -> Result<Pool<Sqlite>, Error> {
    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(create_if_missing)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .map_err(|e| {
            Error::from(CatalogError::DatabaseError {
                message: format!("{}: {e}", db_path.display()),
            })
        })?;

    if let Ok(mut conn) = pool.acquire().await {
        let _ = sqlx::query("PRAGMA synchronous = NORMAL")
            .execute(&mut *conn)
            .await;
        let _ = sqlx::query("PRAGMA temp_store = MEMORY")
            .execute(&mut *conn)
            .await;
    }

    Ok(pool)
}

/// Run database migrations
///
/// # Errors
///
/// Returns an error if any migration fails to execute.
pub async fn run_migrations(pool: &Pool<Sqlite>) -> Result<(), Error> {
    sqlx::migrate!("./migrations").run(pool).await.map_err(|e| {
        CatalogError::MigrationFailed {
            message: e.to_string(),
        }
        .into()
    })
}
