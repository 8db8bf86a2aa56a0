//! Runtime SQL queries for the products table

use crate::models::ProductRow;
use mediagc_errors::{CatalogError, Error};
use mediagc_types::ProductImages;
use sqlx::{query, query_as, Pool, Row, Sqlite};

/// Fetch one page of products ordered by id
///
/// # Errors
///
/// Returns an error if the query fails.
pub async fn fetch_page(
    pool: &Pool<Sqlite>,
    offset: u64,
    limit: usize,
) -> Result<Vec<ProductRow>, Error> {
    let rows = query_as::<_, ProductRow>(
        "SELECT id, name, images, created_at FROM products
         ORDER BY id LIMIT ?1 OFFSET ?2",
    )
    .bind(limit as i64)
    .bind(offset as i64)
    .fetch_all(pool)
    .await
    .map_err(|e| CatalogError::QueryFailed {
        offset,
        message: e.to_string(),
    })?;

    Ok(rows)
}

/// Insert or replace a product and its image list
///
/// # Errors
///
/// Returns an error if the query fails.
pub async fn upsert_product(
    pool: &Pool<Sqlite>,
    product: &ProductImages,
    name: &str,
) -> Result<(), Error> {
    let images = serde_json::to_string(&product.images)?;
    let now = chrono::Utc::now().timestamp();

    query(
        "INSERT INTO products (id, name, images, created_at) VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(id) DO UPDATE SET name = excluded.name, images = excluded.images",
    )
    .bind(product.id.as_str())
    .bind(name)
    .bind(images)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(())
}

/// Count all products
///
/// # Errors
///
/// Returns an error if the query fails.
pub async fn count_products(pool: &Pool<Sqlite>) -> Result<u64, Error> {
    let row = query("SELECT COUNT(*) AS count FROM products")
        .fetch_one(pool)
        .await?;
    let count: i64 = row.get("count");
    Ok(count as u64)
}
