//! Fixed in-memory product list

use async_trait::async_trait;
use mediagc_errors::{CatalogError, Error};
use mediagc_types::ProductImages;
use std::sync::{Arc, Mutex, PoisonError};

use crate::ProductSource;

/// Serves a fixed list of products in insertion order
///
/// A fetch at or past [`StaticCatalog::fail_at`] fails, and every requested
/// offset is recorded.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    products: Arc<Vec<ProductImages>>,
    fail_at: Option<u64>,
    fetches: Arc<Mutex<Vec<u64>>>,
}

impl StaticCatalog {
    #[must_use]
    pub fn new(products: Vec<ProductImages>) -> Self {
        Self {
            products: Arc::new(products),
            ..Self::default()
        }
    }

    /// Fail every fetch whose offset is at least `offset`
    #[must_use]
    pub fn fail_at(mut self, offset: u64) -> Self {
        self.fail_at = Some(offset);
        self
    }

    /// Offsets requested so far
    #[must_use]
    pub fn fetches(&self) -> Vec<u64> {
        self.fetches
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl ProductSource for StaticCatalog {
    async fn fetch_products(
        &self,
        offset: u64,
        limit: usize,
    ) -> Result<Vec<ProductImages>, Error> {
        self.fetches
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(offset);

        if self.fail_at.is_some_and(|at| offset >= at) {
            return Err(CatalogError::QueryFailed {
                offset,
                message: "catalog unavailable".to_string(),
            }
            .into());
        }

        let start = usize::try_from(offset).unwrap_or(usize::MAX);
        Ok(self
            .products
            .iter()
            .skip(start)
            .take(limit)
            .cloned()
            .collect())
    }
}
