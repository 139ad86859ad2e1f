//! Category Endpoints

use super::ApiClient;
use crate::error::ApiResult;
use crate::models::ProductCategory;

impl ApiClient {
    pub async fn list_product_categories(&self) -> ApiResult<Vec<ProductCategory>> {
        self.get_json("/category/product").await
    }
}
