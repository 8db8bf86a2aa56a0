//! Row models for the products table

use mediagc_errors::{CatalogError, Error};
use mediagc_types::{ImageRef, ProductImages};
use sqlx::FromRow;

/// A row of the `products` table as stored
#[derive(Debug, Clone, FromRow)]
pub struct ProductRow {
    pub id: String,
    pub name: String,
    /// JSON array of `{"image_url": ...}` objects
    pub images: String,
    pub created_at: i64,
}

impl ProductRow {
    /// Decode the row into the projection the reconciler works on
    ///
    /// # Errors
    ///
    /// Returns an error if `images` is not a JSON array of image objects.
    pub fn into_product_images(self) -> Result<ProductImages, Error> {
        let images = parse_images(&self.id, &self.images)?;
        Ok(ProductImages::new(self.id, images))
    }
}

/// Parse the `images` column, treating an empty string as no images
///
/// # Errors
///
/// Returns [`CatalogError::InvalidRecord`] when the JSON does not decode.
pub fn parse_images(id: &str, raw: &str) -> Result<Vec<ImageRef>, Error> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(raw).map_err(|e| {
        CatalogError::InvalidRecord {
            id: id.to_string(),
            message: e.to_string(),
        }
        .into()
    })
}
