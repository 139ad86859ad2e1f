//! Admin Endpoints
//!
//! Login only flips the client-side role; the backend still authorizes every
//! mutating request on its own.

use reqwest::Method;

use super::ApiClient;
use crate::error::ApiResult;
use crate::models::{PasswordBody, PasswordUpdate};

impl ApiClient {
    pub async fn login(&self, password: &str) -> ApiResult<()> {
        self.send_ignore_body(Method::POST, "/admin/login", Some(&PasswordBody { password })).await
    }

    pub async fn logout(&self) -> ApiResult<()> {
        self.send_ignore_body::<()>(Method::GET, "/admin/logout", None).await
    }

    pub async fn update_password(&self, update: &PasswordUpdate) -> ApiResult<()> {
        self.send_ignore_body(Method::PUT, "/admin/password", Some(update)).await
    }
}
