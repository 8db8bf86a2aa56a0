//! Product records as seen by the reconciler

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::image::base_name_from_url;

/// Opaque product identifier; doubles as the product's storage folder name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One entry of a product's `images` list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub image_url: String,
}

impl ImageRef {
    #[must_use]
    pub fn new(image_url: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
        }
    }
}

/// The `{id, images}` projection of a product record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImages {
    pub id: ProductId,
    #[serde(default)]
    pub images: Vec<ImageRef>,
}

impl ProductImages {
    #[must_use]
    pub fn new(id: impl Into<ProductId>, images: Vec<ImageRef>) -> Self {
        Self {
            id: id.into(),
            images,
        }
    }

    /// Base names of every image this product references
    #[must_use]
    pub fn base_names(&self) -> HashSet<String> {
        self.images
            .iter()
            .map(|image| base_name_from_url(&image.image_url))
            .filter(|base| !base.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_names_collapse_renditions() {
        let product = ProductImages::new(
            "P",
            vec![
                ImageRef::new("https://cdn/products/P/123_abc_thumb.webp"),
                ImageRef::new("https://cdn/products/P/123_abc_full.webp"),
                ImageRef::new("https://cdn/products/P/456_def.png"),
            ],
        );
        let names = product.base_names();
        assert_eq!(names.len(), 2);
        assert!(names.contains("123_abc"));
        assert!(names.contains("456_def"));
    }

    #[test]
    fn test_images_default_to_empty() {
        let product: ProductImages = serde_json::from_str(r#"{"id":"P"}"#).unwrap();
        assert_eq!(product.id.as_str(), "P");
        assert!(product.base_names().is_empty());
    }
}
