//! Company Introduction Endpoints
//!
//! Read-only; the images and documents are uploaded from the admin panel.

use super::ApiClient;
use crate::error::ApiResult;
use crate::models::{CatalogDocuments, CompanyImages};

impl ApiClient {
    pub async fn company_images(&self) -> ApiResult<CompanyImages> {
        self.get_json("/admin/images").await
    }

    pub async fn catalog_documents(&self) -> ApiResult<CatalogDocuments> {
        self.get_json("/admin/catalog-material").await
    }
}
