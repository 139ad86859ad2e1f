//! Product Endpoints

use reqwest::Method;

use super::{encode_query_value, ApiClient};
use crate::error::ApiResult;
use crate::models::Product;
use crate::sequence::SequenceUpdate;

impl ApiClient {
    /// Ordered products of one category
    pub async fn list_products(&self, category: &str) -> ApiResult<Vec<Product>> {
        self.get_json(&format!("/products?category={}", encode_query_value(category))).await
    }

    pub async fn get_product(&self, id: u32) -> ApiResult<Product> {
        self.get_json(&format!("/products/{}", id)).await
    }

    pub async fn delete_product(&self, id: u32) -> ApiResult<()> {
        self.send_ignore_body::<()>(Method::DELETE, &format!("/products/{}", id), None).await
    }

    /// Place one product next to another; any 2xx counts as success
    pub async fn update_sequence(&self, update: &SequenceUpdate) -> ApiResult<()> {
        self.send_ignore_body(Method::PUT, "/products/sequence", Some(update)).await
    }
}
