//! Catalog Backend Seam
//!
//! The two endpoints the reorder flow depends on. The HTTP client implements
//! it; tests use an in-memory catalog.

use async_trait::async_trait;

use crate::api::ApiClient;
use crate::error::ApiResult;
use crate::models::Product;
use crate::sequence::SequenceUpdate;

/// Futures are `!Send` on wasm32, so the trait is too.
#[async_trait(?Send)]
pub trait CatalogBackend {
    /// `PUT /products/sequence`
    async fn update_sequence(&self, update: SequenceUpdate) -> ApiResult<()>;

    /// `GET /products?category=<name>`
    async fn list_products(&self, category: &str) -> ApiResult<Vec<Product>>;
}

#[async_trait(?Send)]
impl CatalogBackend for ApiClient {
    async fn update_sequence(&self, update: SequenceUpdate) -> ApiResult<()> {
        ApiClient::update_sequence(self, &update).await
    }

    async fn list_products(&self, category: &str) -> ApiResult<Vec<Product>> {
        ApiClient::list_products(self, category).await
    }
}

#[cfg(test)]
pub mod testing {
    //! In-memory catalog with the backend's sequence semantics.

    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;
    use crate::error::ApiError;
    use crate::models::ImageRef;
    use crate::sequence::HEAD_SENTINEL;

    pub fn product(id: u32) -> Product {
        Product {
            id,
            product_name: format!("P{}", id),
            image: ImageRef::default(),
        }
    }

    /// Remove the dragged id and insert it at the target's old index, or at
    /// the head for the sentinel. Moving up lands before the target, moving
    /// down lands after it.
    pub fn apply_move(order: &mut Vec<u32>, update: SequenceUpdate) -> Result<(), String> {
        let from = order.iter().position(|&id| id == update.current_product_id)
            .ok_or_else(|| format!("unknown product {}", update.current_product_id))?;
        let to = if update.target_product_id == HEAD_SENTINEL {
            0
        } else {
            order.iter().position(|&id| id == update.target_product_id)
                .ok_or_else(|| format!("unknown product {}", update.target_product_id))?
        };
        let id = order.remove(from);
        order.insert(to, id);
        Ok(())
    }

    #[derive(Default)]
    pub struct FakeCatalog {
        pub categories: RefCell<HashMap<String, Vec<u32>>>,
        pub requests: RefCell<Vec<SequenceUpdate>>,
        pub list_calls: RefCell<Vec<String>>,
        pub fail_update: Option<ApiError>,
        pub fail_list: Option<ApiError>,
    }

    impl FakeCatalog {
        pub fn with_category(name: &str, ids: &[u32]) -> Self {
            let catalog = Self::default();
            catalog.categories.borrow_mut().insert(name.to_string(), ids.to_vec());
            catalog
        }

        pub fn order(&self, name: &str) -> Vec<u32> {
            self.categories.borrow().get(name).cloned().unwrap_or_default()
        }
    }

    #[async_trait(?Send)]
    impl CatalogBackend for FakeCatalog {
        async fn update_sequence(&self, update: SequenceUpdate) -> ApiResult<()> {
            self.requests.borrow_mut().push(update);
            if let Some(err) = &self.fail_update {
                return Err(err.clone());
            }
            let mut categories = self.categories.borrow_mut();
            let order = categories.values_mut()
                .find(|ids| ids.contains(&update.current_product_id))
                .ok_or(ApiError::Status { status: 404, body: "no such product".into() })?;
            apply_move(order, update).map_err(|body| ApiError::Status { status: 400, body })
        }

        async fn list_products(&self, category: &str) -> ApiResult<Vec<Product>> {
            self.list_calls.borrow_mut().push(category.to_string());
            if let Some(err) = &self.fail_list {
                return Err(err.clone());
            }
            Ok(self.order(category).into_iter().map(product).collect())
        }
    }
}
